use glam::Vec2;

use crate::{ConfigError, TableConfig};

/// Static playfield, centred on the origin
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    size: Vec2,
    half_extent: Vec2,
    color: u32,
    dashes: u32,
}

impl Table {
    pub fn new(config: &TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            size: config.size,
            half_extent: config.size / 2.0,
            color: config.color,
            dashes: config.dashes,
        })
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn half_extent(&self) -> Vec2 {
        self.half_extent
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn dashes(&self) -> u32 {
        self.dashes
    }

    /// Length of one net dash (and of each gap), so the net starts and ends on a dash
    pub fn dash_size(&self) -> f32 {
        self.size.y / (2.0 * self.dashes as f32 - 1.0)
    }

    /// Range a centre may occupy while a box of `half_height` stays on the table
    pub fn vertical_bounds(&self, half_height: f32) -> (f32, f32) {
        (
            -self.half_extent.y + half_height,
            self.half_extent.y - half_height,
        )
    }

    /// Bottom line, top line and net, as segments for the renderer
    pub fn lines(&self) -> [(Vec2, Vec2); 3] {
        let h = self.half_extent;
        [
            (Vec2::new(-h.x, -h.y), Vec2::new(h.x, -h.y)),
            (Vec2::new(-h.x, h.y), Vec2::new(h.x, h.y)),
            (Vec2::new(0.0, -h.y), Vec2::new(0.0, h.y)),
        ]
    }
}
