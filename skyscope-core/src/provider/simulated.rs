use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    city::{ResolvedCity, resolve_city_name},
    dataset::REFERENCE_CITIES,
    model::{CURRENT_LOCATION_SUFFIX, WeatherObservation},
    random::RandomSource,
};

use super::{SimulatedLatency, WeatherProvider};

/// Offline provider: sleeps for the configured latency, then answers from the
/// reference dataset or a synthetic city.
#[derive(Debug, Clone)]
pub struct SimulatedProvider {
    latency: SimulatedLatency,
    random: Arc<dyn RandomSource>,
}

impl SimulatedProvider {
    pub fn new(latency: SimulatedLatency, random: Arc<dyn RandomSource>) -> Self {
        Self { latency, random }
    }

    pub fn latency(&self) -> SimulatedLatency {
        self.latency
    }
}

#[async_trait]
impl WeatherProvider for SimulatedProvider {
    async fn observe_city(&self, query: &str) -> Result<WeatherObservation> {
        tokio::time::sleep(self.latency.city).await;

        let city = resolve_city_name(query, self.random.as_ref())
            .with_context(|| format!("Could not resolve city '{}'", query.trim()))?;

        if let ResolvedCity::Synthetic(c) = &city {
            tracing::debug!(name = %c.name, "no reference city matched, synthesized one");
        }

        Ok(city.observe(city.name().to_string(), self.random.as_ref()))
    }

    async fn observe_current_location(&self) -> Result<WeatherObservation> {
        tokio::time::sleep(self.latency.location).await;

        let city = &REFERENCE_CITIES[self.random.pick_index(REFERENCE_CITIES.len())];
        tracing::debug!(city = city.name, "simulated current location");

        let location = format!("{}{CURRENT_LOCATION_SUFFIX}", city.name);
        Ok(ResolvedCity::Reference(city).observe(location, self.random.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::ObservationSource, random::SeededRandom};
    use std::time::Duration;
    use tokio::time::Instant;

    fn provider(seed: u64) -> SimulatedProvider {
        SimulatedProvider::new(SimulatedLatency::default(), Arc::new(SeededRandom::new(seed)))
    }

    #[tokio::test(start_paused = true)]
    async fn city_lookup_waits_for_city_latency() {
        let p = provider(1);
        let start = Instant::now();

        let obs = p.observe_city("Tokyo").await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(800));
        assert_eq!(obs.location, "Tokyo");
        assert_eq!(obs.source, ObservationSource::Reference);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_query_is_an_error() {
        let err = provider(1).observe_city("  ").await.unwrap_err();
        assert!(err.to_string().contains("Could not resolve city"));
    }

    #[tokio::test(start_paused = true)]
    async fn current_location_is_always_a_reference_city() {
        let p = provider(11);
        let start = Instant::now();

        for _ in 0..30 {
            let obs = p.observe_current_location().await.unwrap();
            let name = obs
                .location
                .strip_suffix(CURRENT_LOCATION_SUFFIX)
                .expect("current location suffix");

            assert!(REFERENCE_CITIES.iter().any(|c| c.name == name), "{name} not a reference city");
            assert_eq!(obs.source, ObservationSource::Reference);
        }

        assert!(start.elapsed() >= Duration::from_millis(30 * 1000));
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_city_keeps_the_query_as_name() {
        let obs = provider(4).observe_city("  Atlantis ").await.unwrap();

        assert_eq!(obs.location, "Atlantis");
        assert_eq!(obs.source, ObservationSource::Synthetic);
        assert!((40..=85).contains(&obs.humidity_pct));
    }
}
