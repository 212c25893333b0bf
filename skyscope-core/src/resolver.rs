//! The weather state machine.
//!
//! [`WeatherResolver`] drives `Idle -> Loading -> {Ready | Failed}` for both
//! lookups, publishes every transition on a watch channel and reports each
//! terminal transition to a [`NotificationSink`].

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};
use tokio::sync::watch;

use crate::{
    Config,
    error::ResolveError,
    model::{ResolutionState, StateSnapshot, WeatherObservation},
    notify::{Notification, NotificationSink},
    provider::{WeatherProvider, provider_from_config},
    random::RandomSource,
};

/// What happens when a call finishes after a newer call has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Every call applies its result; the one finishing last is what stays visible.
    #[default]
    LastWriteWins,
    /// Only the most recently started call may apply its result.
    DiscardStale,
}

#[derive(Debug)]
pub struct WeatherResolver {
    provider: Arc<dyn WeatherProvider>,
    sink: Arc<dyn NotificationSink>,
    policy: OverlapPolicy,
    state: watch::Sender<ResolutionState>,
    last_weather: Mutex<Option<WeatherObservation>>,
    latest_request: AtomicU64,
}

impl WeatherResolver {
    pub fn new(provider: Arc<dyn WeatherProvider>, sink: Arc<dyn NotificationSink>) -> Self {
        let (state, _) = watch::channel(ResolutionState::Idle);

        Self {
            provider,
            sink,
            policy: OverlapPolicy::default(),
            state,
            last_weather: Mutex::new(None),
            latest_request: AtomicU64::new(0),
        }
    }

    /// Build a resolver with the provider and overlap policy from `config`.
    pub fn from_config(
        config: &Config,
        random: Arc<dyn RandomSource>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self::new(provider_from_config(config, random), sink).with_policy(config.overlap_policy)
    }

    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    pub fn state(&self) -> ResolutionState {
        self.state.borrow().clone()
    }

    pub fn snapshot(&self) -> StateSnapshot {
        let state = self.state.borrow();

        StateSnapshot {
            weather: self.last_weather.lock().clone(),
            loading: state.is_loading(),
            error: state.error().map(str::to_owned),
        }
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ResolutionState> {
        self.state.subscribe()
    }

    /// Look up weather for a city name.
    ///
    /// A blank query only produces an `Invalid Input` notification; state is
    /// left untouched.
    pub async fn resolve_by_city(&self, query: &str) -> Result<WeatherObservation, ResolveError> {
        if query.trim().is_empty() {
            tracing::debug!("rejected blank city query");
            self.sink.notify(Notification::destructive(
                "Invalid Input",
                ResolveError::InvalidInput.user_message(),
            ));
            return Err(ResolveError::InvalidInput);
        }

        let request = self.begin();

        let outcome = self
            .provider
            .observe_city(query)
            .await
            .map_err(|err| ResolveError::Resolution(err.to_string()));

        let notification = match &outcome {
            Ok(obs) => Notification::info(
                "Weather Updated",
                format!("Showing weather for {}", obs.location),
            ),
            Err(err) => Notification::destructive("Error", err.user_message()),
        };

        self.settle(request, outcome, notification)
    }

    /// Look up weather for the (simulated) current location.
    pub async fn resolve_current_location(&self) -> Result<WeatherObservation, ResolveError> {
        let request = self.begin();

        let outcome = self
            .provider
            .observe_current_location()
            .await
            .map_err(|err| ResolveError::Location(err.to_string()));

        let notification = match &outcome {
            Ok(_) => Notification::info(
                "Location Weather",
                "Showing weather for your current location",
            ),
            Err(err) => Notification::destructive("Location Error", err.user_message()),
        };

        self.settle(request, outcome, notification)
    }

    fn begin(&self) -> u64 {
        let request = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(ResolutionState::Loading);
        tracing::debug!(request, "resolution started");
        request
    }

    fn is_stale(&self, request: u64) -> bool {
        self.policy == OverlapPolicy::DiscardStale
            && self.latest_request.load(Ordering::SeqCst) != request
    }

    fn settle(
        &self,
        request: u64,
        outcome: Result<WeatherObservation, ResolveError>,
        notification: Notification,
    ) -> Result<WeatherObservation, ResolveError> {
        if self.is_stale(request) {
            tracing::warn!(request, "discarding result of superseded request");
            return Err(ResolveError::Superseded);
        }

        let next = match &outcome {
            Ok(obs) => {
                tracing::info!(request, location = %obs.location, "weather ready");
                *self.last_weather.lock() = Some(obs.clone());
                ResolutionState::Ready(obs.clone())
            }
            Err(err) => {
                tracing::warn!(request, error = %err, "weather resolution failed");
                ResolutionState::Failed(err.user_message())
            }
        };

        self.state.send_replace(next);
        self.sink.notify(notification);

        outcome
    }
}
