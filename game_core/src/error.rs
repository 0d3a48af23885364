use thiserror::Error;

/// Rejected configuration values.
///
/// Raised at construction time only; per-frame updates never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("paddle baseline must be a fraction in (0, 1], got {0}")]
    Baseline(f32),

    #[error("paddle height {paddle} does not fit a table of height {table}")]
    PaddleTooTall { paddle: f32, table: f32 },

    #[error("ball radius {radius} leaves no spawn room on a table of height {table}")]
    BallTooLarge { radius: f32, table: f32 },

    #[error("the left and right paddles must be configured for their own sides")]
    Sides,

    #[error("table needs at least one net dash")]
    NoDashes,

    #[error("left and right key bindings must differ, both use {0:?}")]
    DuplicateKey(String),

    #[error("invalid configuration document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

pub(crate) fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
