use chrono_tz::Tz;
use tracing::warn;

/// A city the watch can show, with its IANA time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub time_zone: Tz,
}

pub const CITIES: [City; 10] = [
    City {
        name: "Oporto",
        time_zone: chrono_tz::Europe::Lisbon,
    },
    City {
        name: "Paris",
        time_zone: chrono_tz::Europe::Paris,
    },
    City {
        name: "Helsinki",
        time_zone: chrono_tz::Europe::Helsinki,
    },
    City {
        name: "Beijing",
        time_zone: chrono_tz::Asia::Shanghai,
    },
    City {
        name: "Tokyo",
        time_zone: chrono_tz::Asia::Tokyo,
    },
    City {
        name: "Sydney",
        time_zone: chrono_tz::Australia::Sydney,
    },
    City {
        name: "Los Angeles",
        time_zone: chrono_tz::America::Los_Angeles,
    },
    City {
        name: "New York",
        time_zone: chrono_tz::America::New_York,
    },
    City {
        name: "Rio de Janeiro",
        time_zone: chrono_tz::America::Sao_Paulo,
    },
    City {
        name: "Reykjavik",
        time_zone: chrono_tz::Atlantic::Reykjavik,
    },
];

/// Position of `name` in [`CITIES`]; unknown names fall back to the first city
pub fn city_index(name: &str) -> usize {
    match CITIES.iter().position(|city| city.name == name) {
        Some(index) => index,
        None => {
            warn!(name, fallback = CITIES[0].name, "unknown city");
            0
        }
    }
}
