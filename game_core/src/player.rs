use glam::Vec2;

use crate::{ConfigError, PaddleInput, PlayerConfig, Side, Table};

/// A paddle and the score of the player holding it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub side: Side,
    pub center: Vec2,
    pub half_size: Vec2,
    pub speed: f32,
    pub baseline: f32, // Absolute distance from the net
    pub lower: f32,    // Lowest allowed center.y
    pub upper: f32,    // Highest allowed center.y
    pub input: PaddleInput,
    pub score: u32,
    pub color: u32,
}

impl Player {
    pub fn new(config: &PlayerConfig, table: &Table) -> Result<Self, ConfigError> {
        config.validate(table.size())?;
        let half_size = config.size / 2.0;
        let (lower, upper) = table.vertical_bounds(half_size.y);

        let mut player = Self {
            side: config.side,
            center: Vec2::ZERO,
            half_size,
            speed: config.speed,
            baseline: config.baseline * table.half_extent().x,
            lower,
            upper,
            input: PaddleInput::default(),
            score: 0,
            color: config.color,
        };
        player.initialize();
        Ok(player)
    }

    /// Put the paddle back on its baseline and clear the score
    pub fn initialize(&mut self) {
        let x = match self.side {
            Side::Left => -self.baseline,
            Side::Right => self.baseline,
        };
        self.center = Vec2::new(x, 0.0);
        self.score = 0;
    }

    pub fn set_input(&mut self, up: bool, down: bool) {
        self.input = PaddleInput::new(up, down);
    }

    /// Move by the held keys, then clamp to the table
    pub fn update(&mut self, dt: f32) {
        let covered = self.speed * dt;

        if self.input.down {
            self.center.y -= covered;
        }
        if self.input.up {
            self.center.y += covered;
        }

        if self.center.y < self.lower {
            self.center.y = self.lower;
        }
        if self.center.y > self.upper {
            self.center.y = self.upper;
        }
    }

    pub fn add_point(&mut self) {
        self.score += 1;
    }

    pub fn position(&self) -> Vec2 {
        self.center
    }

    /// (min, max) corners of the paddle box
    pub fn aabb(&self) -> (Vec2, Vec2) {
        (self.center - self.half_size, self.center + self.half_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableConfig;

    fn setup(config: PlayerConfig) -> (Player, Table) {
        let table = Table::new(&TableConfig::default()).unwrap();
        let player = Player::new(&config, &table).unwrap();
        (player, table)
    }

    #[test]
    fn test_initialize_places_paddles_on_baseline() {
        let (left, table) = setup(PlayerConfig::left());
        let (right, _) = setup(PlayerConfig::right());
        let expected = PlayerConfig::left().baseline * table.half_extent().x;

        assert_eq!(left.center, Vec2::new(-expected, 0.0), "Left paddle X position");
        assert_eq!(right.center, Vec2::new(expected, 0.0), "Right paddle X position");
        assert_eq!(left.score, 0);
    }

    #[test]
    fn test_initialize_resets_score_and_position() {
        let (mut player, _) = setup(PlayerConfig::left());
        player.add_point();
        player.add_point();
        player.center.y = 0.4;

        player.initialize();

        assert_eq!(player.score, 0);
        assert_eq!(player.center.y, 0.0);
    }

    #[test]
    fn test_update_moves_up_and_down() {
        let (mut player, _) = setup(PlayerConfig::left());
        let dt = 0.1;

        player.set_input(true, false);
        player.update(dt);
        assert!((player.center.y - player.speed * dt).abs() < 1e-6);

        player.set_input(false, true);
        player.update(dt);
        player.update(dt);
        assert!((player.center.y + player.speed * dt).abs() < 1e-6);
    }

    #[test]
    fn test_update_applies_both_keys_independently() {
        let (mut player, _) = setup(PlayerConfig::left());
        player.center.y = 0.2;
        player.set_input(true, true);

        player.update(0.1);

        // Down then up by the same amount nets to (almost) nothing
        assert!((player.center.y - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_update_clamps_to_table() {
        let (mut player, table) = setup(PlayerConfig::right());
        let (lower, upper) = table.vertical_bounds(player.half_size.y);

        player.set_input(true, false);
        player.update(100.0);
        assert_eq!(player.center.y, upper);

        player.set_input(false, true);
        player.update(100.0);
        assert_eq!(player.center.y, lower);
    }

    #[test]
    fn test_idle_paddle_stays_put() {
        let (mut player, _) = setup(PlayerConfig::left());
        let before = player.center;
        player.update(0.5);
        assert_eq!(player.center, before);
    }

    #[test]
    fn test_aabb_surrounds_center() {
        let (player, _) = setup(PlayerConfig::left());
        let (min, max) = player.aabb();
        assert!(((min + max) / 2.0 - player.center).length() < 1e-6);
        assert!(((max - min) - PlayerConfig::left().size).length() < 1e-6);
    }

    #[test]
    fn test_rejects_paddle_taller_than_table() {
        let table = Table::new(&TableConfig::default()).unwrap();
        let mut config = PlayerConfig::left();
        config.size.y = table.size().y + 1.0;
        assert!(matches!(
            Player::new(&config, &table),
            Err(ConfigError::PaddleTooTall { .. })
        ));
    }
}
