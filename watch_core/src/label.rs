use glam::Vec2;

/// A city name tag placed under a watch.
///
/// Lengths are in `vmin` relative to a container whose top-left corner sits at
/// the centre of the viewport; one world unit spans 50 vmin.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub font_size: f32,
    pub background: String, // "#rrggbb"
    pub foreground: String,
}

impl Label {
    pub fn below_dial(
        text: impl Into<String>,
        center: Vec2,
        radius: f32,
        background: u32,
        foreground: u32,
    ) -> Self {
        Self {
            text: text.into(),
            left: 50.0 * center.x - 30.0 * radius,
            top: -50.0 * center.y + 54.0 * radius,
            width: 60.0 * radius,
            font_size: 8.0 * radius,
            background: hex_color(background),
            foreground: hex_color(foreground),
        }
    }
}

/// Where labels are shown; injected so the watch never looks up a global container
pub trait LabelSink {
    fn show(&mut self, label: Label);
}

impl LabelSink for Vec<Label> {
    fn show(&mut self, label: Label) {
        self.push(label);
    }
}

/// Discards labels, for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLabels;

impl LabelSink for NoLabels {
    fn show(&mut self, _label: Label) {}
}

pub fn hex_color(color: u32) -> String {
    format!("#{:06x}", color & 0xff_ffff)
}
