use glam::Vec2;

/// Static dial geometry, in the watch's local frame
#[derive(Debug, Clone, PartialEq)]
pub struct Dial {
    pub radius: f32,
    pub markers: Vec<(Vec2, Vec2)>, // One segment per hour
    pub hour_hand: f32,
    pub minute_hand: f32,
    pub second_hand: f32,
    pub second_hub: f32, // Radius of the disc at the second hand's pivot
}

impl Dial {
    pub fn new(radius: f32) -> Self {
        let inner = 0.90 * radius;
        let outer = 0.95 * radius;
        let markers = (0..12)
            .map(|i| {
                let dir = Vec2::from_angle(i as f32 * std::f32::consts::PI / 6.0);
                (dir * inner, dir * outer)
            })
            .collect();

        Self {
            radius,
            markers,
            hour_hand: 0.5 * radius,
            minute_hand: 0.7 * radius,
            second_hand: 0.8 * radius,
            second_hub: 0.03 * radius,
        }
    }

    /// Tip of a hand of `length` rotated by `angle`
    pub fn hand_tip(length: f32, angle: f32) -> Vec2 {
        Vec2::from_angle(angle) * length
    }
}
