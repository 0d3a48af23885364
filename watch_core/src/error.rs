use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WatchError {
    #[error("watch radius must be positive and finite, got {0}")]
    Radius(f32),

    #[error("invalid time of day {hours:02}:{minutes:02}:{seconds:02}")]
    TimeOfDay { hours: u32, minutes: u32, seconds: u32 },
}
