use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::TimeOfDay;

/// Source of wall-clock time, read once per frame
pub trait Clock {
    fn time_in(&self, time_zone: Tz) -> TimeOfDay;
}

/// The host's real-time clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_in(&self, time_zone: Tz) -> TimeOfDay {
        time_of_day(Utc::now(), time_zone)
    }
}

/// A clock stopped at one instant, for demos and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn time_in(&self, time_zone: Tz) -> TimeOfDay {
        time_of_day(self.0, time_zone)
    }
}

/// Local 24-hour time of `instant` in `time_zone`
pub fn time_of_day(instant: DateTime<Utc>, time_zone: Tz) -> TimeOfDay {
    let local = instant.with_timezone(&time_zone);
    TimeOfDay {
        hours: local.hour(),
        minutes: local.minute(),
        // Leap seconds are carried in the nanoseconds, so this stays below 60
        seconds: local.second(),
    }
}
