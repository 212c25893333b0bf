//! Core library for the `skyscope` weather lookup.
//!
//! This crate defines:
//! - The reference city dataset and the icon classifier
//! - City resolution with randomized fallback for unknown names
//! - The `WeatherResolver` state machine and its notification contract
//! - Configuration handling
//!
//! It is used by `skyscope-cli`, but any front end can drive a resolver and
//! render its state.

pub mod city;
pub mod config;
pub mod dataset;
pub mod error;
pub mod icon;
pub mod model;
pub mod notify;
pub mod provider;
pub mod random;
pub mod resolver;

pub use city::{ResolvedCity, SyntheticCity, resolve_city_name};
pub use config::Config;
pub use dataset::{REFERENCE_CITIES, ReferenceCity};
pub use error::ResolveError;
pub use icon::{IconKey, classify_icon};
pub use model::{
    CURRENT_LOCATION_SUFFIX, ObservationSource, ResolutionState, StateSnapshot, TemperatureBand,
    WeatherObservation,
};
pub use notify::{ChannelSink, Notification, NotificationSink, TracingSink, Variant};
pub use provider::{SimulatedLatency, WeatherProvider, simulated::SimulatedProvider};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use resolver::{OverlapPolicy, WeatherResolver};
