use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{positive, ConfigError};
use crate::{Params, Side};

/// Table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    pub color: u32,
    pub size: Vec2,
    pub dashes: u32, // Number of dashes in the net
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            color: Params::TABLE_COLOR,
            size: Vec2::new(Params::TABLE_WIDTH, Params::TABLE_HEIGHT),
            dashes: Params::TABLE_DASHES,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("table.size.x", self.size.x)?;
        positive("table.size.y", self.size.y)?;
        if self.dashes == 0 {
            return Err(ConfigError::NoDashes);
        }
        Ok(())
    }
}

/// Key identifiers that drive one paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyCodes {
    pub up: String,
    pub down: String,
}

impl KeyCodes {
    pub fn new(up: impl Into<String>, down: impl Into<String>) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
        }
    }
}

/// Paddle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    pub color: u32,
    pub side: Side,
    pub size: Vec2,
    pub speed: f32,
    pub baseline: f32, // Fraction of the table's half-width
    pub key_codes: KeyCodes,
}

impl PlayerConfig {
    pub fn left() -> Self {
        Self {
            color: Params::PADDLE_COLOR,
            side: Side::Left,
            size: Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            speed: Params::PADDLE_SPEED,
            baseline: Params::PADDLE_BASELINE,
            key_codes: KeyCodes::new("KeyQ", "KeyA"),
        }
    }

    pub fn right() -> Self {
        Self {
            side: Side::Right,
            key_codes: KeyCodes::new("ArrowUp", "ArrowDown"),
            ..Self::left()
        }
    }

    pub fn validate(&self, table_size: Vec2) -> Result<(), ConfigError> {
        positive("player.size.x", self.size.x)?;
        positive("player.size.y", self.size.y)?;
        positive("player.speed", self.speed)?;
        if !(self.baseline > 0.0 && self.baseline <= 1.0) {
            return Err(ConfigError::Baseline(self.baseline));
        }
        if self.size.y > table_size.y {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.size.y,
                table: table_size.y,
            });
        }
        Ok(())
    }
}

/// Ball configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BallConfig {
    pub color: u32,
    pub radius: f32,
    pub speed: f32,
    pub direction_max: f32, // Radians; serve direction is spread over [-max, max]
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            color: Params::BALL_COLOR,
            radius: Params::BALL_RADIUS,
            speed: Params::BALL_SPEED,
            direction_max: Params::BALL_DIRECTION_MAX,
        }
    }
}

impl BallConfig {
    pub fn validate(&self, table_size: Vec2) -> Result<(), ConfigError> {
        positive("ball.radius", self.radius)?;
        positive("ball.speed", self.speed)?;
        if !self.direction_max.is_finite() || self.direction_max < 0.0 {
            return Err(ConfigError::Negative {
                field: "ball.direction_max",
                value: self.direction_max,
            });
        }
        if table_size.y - 4.0 * self.radius <= 0.0 {
            return Err(ConfigError::BallTooLarge {
                radius: self.radius,
                table: table_size.y,
            });
        }
        Ok(())
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    pub table: TableConfig,
    pub left: PlayerConfig,
    pub right: PlayerConfig,
    pub ball: BallConfig,
    pub win_score: u32,
    pub max_dt: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            left: PlayerConfig::left(),
            right: PlayerConfig::right(),
            ball: BallConfig::default(),
            win_score: Params::WIN_SCORE,
            max_dt: Params::MAX_DT,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document of option overrides.
    ///
    /// Only the named options change; everything else keeps its default,
    /// including the per-side defaults of each paddle.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let patch: Value = serde_json::from_str(text)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge_values(&mut merged, patch);
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.table.validate()?;
        self.left.validate(self.table.size)?;
        self.right.validate(self.table.size)?;
        self.ball.validate(self.table.size)?;
        positive("max_dt", self.max_dt)?;
        if self.left.side != Side::Left || self.right.side != Side::Right {
            return Err(ConfigError::Sides);
        }

        let keys = [
            &self.left.key_codes.up,
            &self.left.key_codes.down,
            &self.right.key_codes.up,
            &self.right.key_codes.down,
        ];
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].contains(key) {
                return Err(ConfigError::DuplicateKey((*key).clone()));
            }
        }
        Ok(())
    }
}

fn merge_values(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge_values(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.left.side, Side::Left);
        assert_eq!(config.right.side, Side::Right);
    }

    #[test]
    fn test_from_json_keeps_side_defaults() {
        let config = GameConfig::from_json(r#"{ "right": { "speed": 2.5 } }"#).unwrap();
        assert_eq!(config.right.speed, 2.5);
        assert_eq!(config.right.side, Side::Right, "Side should not fall back to left");
        assert_eq!(config.right.key_codes, KeyCodes::new("ArrowUp", "ArrowDown"));
        assert_eq!(config.left, PlayerConfig::left());
    }

    #[test]
    fn test_from_json_nested_vectors() {
        let config = GameConfig::from_json(
            r#"{ "table": { "size": [4.0, 3.0], "dashes": 7 }, "ball": { "radius": 0.1 } }"#,
        )
        .unwrap();
        assert_eq!(config.table.size, Vec2::new(4.0, 3.0));
        assert_eq!(config.table.dashes, 7);
        assert_eq!(config.ball.radius, 0.1);
        assert_eq!(config.ball.speed, Params::BALL_SPEED);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "ball": { "radius": "big" } }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_option() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "ball": { "raduis": 0.5 } }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "left": { "key_codes": { "upp": "KeyW" } } }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "win_scor": 3 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let mut config = GameConfig::new();
        config.ball.radius = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "ball.radius", .. })
        ));

        let mut config = GameConfig::new();
        config.ball.radius = config.table.size.y / 4.0;
        assert!(matches!(config.validate(), Err(ConfigError::BallTooLarge { .. })));

        let mut config = GameConfig::new();
        config.left.size.y = config.table.size.y * 2.0;
        assert!(matches!(config.validate(), Err(ConfigError::PaddleTooTall { .. })));

        let mut config = GameConfig::new();
        config.right.baseline = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::Baseline(1.5)));

        let mut config = GameConfig::new();
        config.table.dashes = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoDashes));

        let mut config = GameConfig::new();
        config.ball.direction_max = -0.1;
        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn test_validate_rejects_swapped_sides() {
        let err = GameConfig::from_json(r#"{ "left": { "side": "right" } }"#);
        assert_eq!(err, Err(ConfigError::Sides));
    }

    #[test]
    fn test_validate_rejects_shared_keys() {
        let mut config = GameConfig::new();
        config.right.key_codes.down = config.left.key_codes.up.clone();
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateKey("KeyQ".to_string()))
        );
    }
}
