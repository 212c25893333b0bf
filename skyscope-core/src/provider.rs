use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc, time::Duration};

use crate::{Config, WeatherObservation, provider::simulated::SimulatedProvider, random::RandomSource};

pub mod simulated;

/// Source of weather observations behind the resolver's state machine.
///
/// The resolver owns state transitions and notifications; a provider only
/// produces an observation or an error.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn observe_city(&self, query: &str) -> anyhow::Result<WeatherObservation>;

    async fn observe_current_location(&self) -> anyhow::Result<WeatherObservation>;
}

/// Artificial delays standing in for network and geolocation round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub city: Duration,
    pub location: Duration,
}

impl SimulatedLatency {
    pub const fn none() -> Self {
        Self { city: Duration::ZERO, location: Duration::ZERO }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self { city: Duration::from_millis(800), location: Duration::from_millis(1000) }
    }
}

/// Construct the provider described by `config`.
pub fn provider_from_config(
    config: &Config,
    random: Arc<dyn RandomSource>,
) -> Arc<dyn WeatherProvider> {
    Arc::new(SimulatedProvider::new(config.simulated_latency(), random))
}
