use chrono::Utc;

use crate::{
    dataset::{
        FEELS_LIKE_SPREAD_C, REFERENCE_CITIES, ReferenceCity, SYNTHETIC_DESCRIPTIONS,
        SYNTHETIC_HUMIDITY_RANGE_PCT, SYNTHETIC_TEMP_RANGE_C, SYNTHETIC_WIND_RANGE_KPH,
    },
    error::ResolveError,
    icon::classify_icon,
    model::{ObservationSource, WeatherObservation},
    random::RandomSource,
};

/// Randomly generated stand-in for a query that matched no reference city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticCity {
    pub name: String,
    pub base_temp_c: i32,
    pub description: &'static str,
    pub humidity_pct: u8,
    pub wind_kph: u32,
}

impl SyntheticCity {
    pub fn generate(name: &str, random: &dyn RandomSource) -> Self {
        let (t_min, t_max) = SYNTHETIC_TEMP_RANGE_C;
        let (h_min, h_max) = SYNTHETIC_HUMIDITY_RANGE_PCT;
        let (w_min, w_max) = SYNTHETIC_WIND_RANGE_KPH;

        let base_temp_c = random.range_inclusive(t_min, t_max);
        let description = SYNTHETIC_DESCRIPTIONS[random.pick_index(SYNTHETIC_DESCRIPTIONS.len())];
        // Ranges above are non-negative and below 100, so the casts are lossless.
        let humidity_pct = random.range_inclusive(h_min, h_max) as u8;
        let wind_kph = random.range_inclusive(w_min, w_max) as u32;

        Self { name: name.to_string(), base_temp_c, description, humidity_pct, wind_kph }
    }
}

/// Outcome of a city lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCity {
    Reference(&'static ReferenceCity),
    Synthetic(SyntheticCity),
}

impl ResolvedCity {
    pub fn name(&self) -> &str {
        match self {
            ResolvedCity::Reference(c) => c.name,
            ResolvedCity::Synthetic(c) => &c.name,
        }
    }

    pub fn base_temp_c(&self) -> i32 {
        match self {
            ResolvedCity::Reference(c) => c.base_temp_c,
            ResolvedCity::Synthetic(c) => c.base_temp_c,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResolvedCity::Reference(c) => c.description,
            ResolvedCity::Synthetic(c) => c.description,
        }
    }

    pub fn humidity_pct(&self) -> u8 {
        match self {
            ResolvedCity::Reference(c) => c.humidity_pct,
            ResolvedCity::Synthetic(c) => c.humidity_pct,
        }
    }

    pub fn wind_kph(&self) -> u32 {
        match self {
            ResolvedCity::Reference(c) => c.wind_kph,
            ResolvedCity::Synthetic(c) => c.wind_kph,
        }
    }

    pub fn source(&self) -> ObservationSource {
        match self {
            ResolvedCity::Reference(_) => ObservationSource::Reference,
            ResolvedCity::Synthetic(_) => ObservationSource::Synthetic,
        }
    }

    /// Build an observation for this city, displayed under `location`.
    pub fn observe(&self, location: String, random: &dyn RandomSource) -> WeatherObservation {
        let temperature_c = self.base_temp_c();
        let description = self.description();
        let offset = random.range_inclusive(-FEELS_LIKE_SPREAD_C, FEELS_LIKE_SPREAD_C);

        WeatherObservation {
            location,
            temperature_c,
            feels_like_c: temperature_c + offset,
            description: description.to_string(),
            humidity_pct: self.humidity_pct(),
            wind_kph: self.wind_kph(),
            icon: classify_icon(description, temperature_c),
            source: self.source(),
            observed_at: Utc::now(),
        }
    }
}

/// First reference city whose name contains `query`, ignoring case.
pub fn find_reference_city(query: &str) -> Option<&'static ReferenceCity> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    REFERENCE_CITIES.iter().find(|c| c.name.to_lowercase().contains(&needle))
}

/// Resolve a user query to a reference city, or synthesize one.
///
/// Blank queries are rejected before any lookup or random draw.
pub fn resolve_city_name(
    query: &str,
    random: &dyn RandomSource,
) -> Result<ResolvedCity, ResolveError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ResolveError::InvalidInput);
    }

    let resolved = match find_reference_city(query) {
        Some(city) => ResolvedCity::Reference(city),
        None => ResolvedCity::Synthetic(SyntheticCity::generate(query, random)),
    };

    Ok(resolved)
}
