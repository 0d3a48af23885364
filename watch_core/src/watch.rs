use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{city_index, City, Clock, Dial, HandAngles, Label, LabelSink, WatchError, CITIES};

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    pub city: String,
    pub center: Vec2,
    pub radius: f32,
    pub name_background_color: u32,
    pub name_foreground_color: u32,
    pub dial_color: u32,
    pub markers_color: u32,
    pub hands_hm_color: u32, // Hour and minute hands
    pub hand_s_color: u32,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            city: CITIES[0].name.to_string(),
            center: Vec2::ZERO,
            radius: 0.75,
            name_background_color: 0xffffff,
            name_foreground_color: 0x000000,
            dial_color: 0x000000,
            markers_color: 0xffffff,
            hands_hm_color: 0xffffff,
            hand_s_color: 0xff0000,
        }
    }
}

impl WatchConfig {
    pub fn for_city(city: impl Into<String>, center: Vec2, radius: f32) -> Self {
        Self {
            city: city.into(),
            center,
            radius,
            ..Self::default()
        }
    }
}

/// An analog watch showing the local time of one city
pub struct Watch<C: Clock> {
    config: WatchConfig,
    clock: C,
    city_index: usize,
    dial: Dial,
    hands: HandAngles,
}

impl<C: Clock> Watch<C> {
    /// Build the watch and publish its name label once.
    ///
    /// An unknown city name shows the first city instead.
    pub fn new(
        config: WatchConfig,
        clock: C,
        labels: &mut impl LabelSink,
    ) -> Result<Self, WatchError> {
        if !(config.radius.is_finite() && config.radius > 0.0) {
            return Err(WatchError::Radius(config.radius));
        }

        let city_index = city_index(&config.city);
        labels.show(Label::below_dial(
            CITIES[city_index].name,
            config.center,
            config.radius,
            config.name_background_color,
            config.name_foreground_color,
        ));

        Ok(Self {
            dial: Dial::new(config.radius),
            config,
            clock,
            city_index,
            hands: HandAngles::default(),
        })
    }

    /// Sample the clock and turn the hands
    pub fn update(&mut self) -> HandAngles {
        let time = self.clock.time_in(self.city().time_zone);
        self.hands = HandAngles::from_time(time);
        debug!(
            city = self.city().name,
            hours = time.hours,
            minutes = time.minutes,
            seconds = time.seconds,
            "watch updated"
        );
        self.hands
    }

    pub fn city(&self) -> City {
        CITIES[self.city_index]
    }

    pub fn city_index(&self) -> usize {
        self.city_index
    }

    pub fn hands(&self) -> HandAngles {
        self.hands
    }

    pub fn position(&self) -> Vec2 {
        self.config.center
    }

    pub fn dial(&self) -> &Dial {
        &self.dial
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }
}
