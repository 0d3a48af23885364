//! Hand rotations for an analog dial.
//!
//! Angles are in radians about the viewing axis, measured counter-clockwise
//! from +X, so twelve o'clock is π/2 and hands turn clockwise as time advances.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::WatchError;

/// Wall-clock time sampled in one time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hours: u32,   // 0..=23
    pub minutes: u32, // 0..=59
    pub seconds: u32, // 0..=59
}

impl TimeOfDay {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, WatchError> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(WatchError::TimeOfDay {
                hours,
                minutes,
                seconds,
            });
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }
}

pub fn second_angle(seconds: u32) -> f32 {
    FRAC_PI_2 - TAU * seconds as f32 / 60.0
}

/// Minute hand, advanced continuously by the seconds
pub fn minute_angle(minutes: u32, seconds: u32) -> f32 {
    FRAC_PI_2 - TAU * (minutes as f32 + seconds as f32 / 60.0) / 60.0
}

/// Hour hand on a twelve-hour dial, advanced by minutes and seconds
pub fn hour_angle(hours: u32, minutes: u32, seconds: u32) -> f32 {
    let hours = (hours % 12) as f32 + minutes as f32 / 60.0 + seconds as f32 / 3600.0;
    FRAC_PI_2 - TAU * hours / 12.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_time(time: TimeOfDay) -> Self {
        Self {
            hour: hour_angle(time.hours, time.minutes, time.seconds),
            minute: minute_angle(time.minutes, time.seconds),
            second: second_angle(time.seconds),
        }
    }
}

impl Default for HandAngles {
    /// All hands at twelve
    fn default() -> Self {
        Self::from_time(TimeOfDay {
            hours: 0,
            minutes: 0,
            seconds: 0,
        })
    }
}
