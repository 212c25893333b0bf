use serde::Serialize;

/// A fixed demo city with authoritative weather attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceCity {
    pub name: &'static str,
    pub base_temp_c: i32,
    pub description: &'static str,
    pub humidity_pct: u8,
    pub wind_kph: u32,
}

const fn city(
    name: &'static str,
    base_temp_c: i32,
    description: &'static str,
    humidity_pct: u8,
    wind_kph: u32,
) -> ReferenceCity {
    ReferenceCity { name, base_temp_c, description, humidity_pct, wind_kph }
}

/// Lookup table for city resolution. Order matters: the first name that
/// matches a query wins.
pub static REFERENCE_CITIES: [ReferenceCity; 10] = [
    city("Mumbai", 32, "sunny", 75, 12),
    city("Delhi", 28, "partly cloudy", 60, 8),
    city("London", 15, "cloudy", 80, 15),
    city("New York", 22, "clear sky", 55, 10),
    city("Tokyo", 25, "light rain", 70, 6),
    city("Sydney", 20, "partly cloudy", 65, 14),
    city("Paris", 18, "overcast", 72, 9),
    city("Dubai", 38, "sunny", 45, 7),
    city("Moscow", 5, "snow", 85, 18),
    city("Singapore", 30, "thunderstorm", 85, 5),
];

/// Descriptions a synthetic city may be given.
pub static SYNTHETIC_DESCRIPTIONS: [&str; 5] =
    ["sunny", "partly cloudy", "cloudy", "light rain", "clear sky"];

pub const SYNTHETIC_TEMP_RANGE_C: (i32, i32) = (5, 40);
pub const SYNTHETIC_HUMIDITY_RANGE_PCT: (i32, i32) = (40, 85);
pub const SYNTHETIC_WIND_RANGE_KPH: (i32, i32) = (3, 23);

/// Feels-like temperature is the base temperature plus an offset in
/// `-FEELS_LIKE_SPREAD_C..=FEELS_LIKE_SPREAD_C`.
pub const FEELS_LIKE_SPREAD_C: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reference_cities_have_unique_names() {
        let names: HashSet<_> = REFERENCE_CITIES.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), REFERENCE_CITIES.len());
    }

    #[test]
    fn reference_cities_respect_value_ranges() {
        for c in &REFERENCE_CITIES {
            assert!(c.humidity_pct <= 100, "{} humidity out of range", c.name);
            assert!(!c.description.is_empty());
            assert_eq!(c.description, c.description.to_lowercase());
        }
    }
}
