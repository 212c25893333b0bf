use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::icon::IconKey;

/// Appended to the city name of a current-location observation.
pub const CURRENT_LOCATION_SUFFIX: &str = " (Current Location)";

/// Where an observation's attributes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationSource {
    Reference,
    Synthetic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location: String,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_kph: u32,
    pub icon: IconKey,
    pub source: ObservationSource,
    pub observed_at: DateTime<Utc>,
}

impl WeatherObservation {
    pub fn band(&self) -> TemperatureBand {
        TemperatureBand::from_celsius(self.temperature_c)
    }

    pub fn is_current_location(&self) -> bool {
        self.location.ends_with(CURRENT_LOCATION_SUFFIX)
    }
}

/// Coarse temperature buckets used to theme a weather card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    Cold,
    Mild,
    Warm,
    Hot,
}

impl TemperatureBand {
    pub fn from_celsius(temperature_c: i32) -> Self {
        match temperature_c {
            t if t <= 10 => TemperatureBand::Cold,
            t if t <= 20 => TemperatureBand::Mild,
            t if t <= 30 => TemperatureBand::Warm,
            _ => TemperatureBand::Hot,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Cold => "cold",
            TemperatureBand::Mild => "mild",
            TemperatureBand::Warm => "warm",
            TemperatureBand::Hot => "hot",
        }
    }
}

/// Lifecycle of a resolver: `Idle -> Loading -> {Ready | Failed}`, and any
/// state may go back to `Loading` on a fresh call.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResolutionState {
    #[default]
    Idle,
    Loading,
    Ready(WeatherObservation),
    Failed(String),
}

impl ResolutionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ResolutionState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ResolutionState::Ready(_) | ResolutionState::Failed(_))
    }

    pub fn observation(&self) -> Option<&WeatherObservation> {
        match self {
            ResolutionState::Ready(obs) => Some(obs),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ResolutionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Flat read model handed to front ends.
///
/// `weather` is the latest successful observation and survives a following
/// `Loading` or `Failed` state; `error` is only set while `Failed`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StateSnapshot {
    pub weather: Option<WeatherObservation>,
    pub loading: bool,
    pub error: Option<String>,
}
