use std::sync::Arc;

use skyscope_core::{
    CURRENT_LOCATION_SUFFIX, ChannelSink, Config, IconKey, Notification, ObservationSource,
    OverlapPolicy, REFERENCE_CITIES, ResolutionState, ResolveError, SeededRandom, WeatherResolver,
};
use tokio::sync::mpsc::UnboundedReceiver;

fn resolver(config: &Config, seed: u64) -> (WeatherResolver, UnboundedReceiver<Notification>) {
    let (sink, rx) = ChannelSink::new();
    let resolver =
        WeatherResolver::from_config(config, Arc::new(SeededRandom::new(seed)), Arc::new(sink));
    (resolver, rx)
}

#[tokio::test(start_paused = true)]
async fn every_non_blank_query_reaches_a_terminal_state() {
    let (resolver, mut rx) = resolver(&Config::default(), 21);

    for query in ["Delhi", "delhi", "SINGAPORE", "Atlantis", "Zanzibar", "  new york "] {
        let outcome = resolver.resolve_by_city(query).await;
        let state = resolver.state();

        assert!(state.is_terminal(), "{query}: state {state:?}");
        assert!(!resolver.snapshot().loading);

        let note = rx.try_recv().expect("one notification per terminal transition");
        assert_eq!(note.title, "Weather Updated");
        assert_eq!(outcome.map(|o| o.location).ok(), state.observation().map(|o| o.location.clone()));
    }
}

#[tokio::test(start_paused = true)]
async fn synthetic_and_reference_results_are_tagged() {
    let (resolver, _rx) = resolver(&Config::default(), 8);

    let singapore = resolver.resolve_by_city("singa").await.unwrap();
    assert_eq!(singapore.location, "Singapore");
    assert_eq!(singapore.icon, IconKey::Storm);
    assert_eq!(singapore.source, ObservationSource::Reference);

    let atlantis = resolver.resolve_by_city("Atlantis").await.unwrap();
    assert_eq!(atlantis.source, ObservationSource::Synthetic);
    assert!((5..=40).contains(&atlantis.temperature_c));
    assert!((atlantis.temperature_c - 3..=atlantis.temperature_c + 3).contains(&atlantis.feels_like_c));
}

#[tokio::test(start_paused = true)]
async fn same_seed_gives_same_observations() {
    let (a, _) = resolver(&Config::default(), 1234);
    let (b, _) = resolver(&Config::default(), 1234);

    let x = a.resolve_by_city("Atlantis").await.unwrap();
    let y = b.resolve_by_city("Atlantis").await.unwrap();

    assert_eq!(x.temperature_c, y.temperature_c);
    assert_eq!(x.description, y.description);
    assert_eq!(x.humidity_pct, y.humidity_pct);
    assert_eq!(x.wind_kph, y.wind_kph);
    assert_eq!(x.feels_like_c, y.feels_like_c);
}

#[tokio::test(start_paused = true)]
async fn current_location_after_a_search_replaces_the_card() {
    let (resolver, _rx) = resolver(&Config::default(), 2);

    resolver.resolve_by_city("London").await.unwrap();
    let here = resolver.resolve_current_location().await.unwrap();

    let name = here.location.strip_suffix(CURRENT_LOCATION_SUFFIX).unwrap();
    assert!(REFERENCE_CITIES.iter().any(|c| c.name == name));
    assert_eq!(resolver.snapshot().weather, Some(here));
}

#[tokio::test(start_paused = true)]
async fn configured_policy_discards_stale_results() {
    let config = Config { overlap_policy: OverlapPolicy::DiscardStale, ..Config::default() };
    let (resolver, _rx) = resolver(&config, 6);

    let (slow, fast) =
        tokio::join!(resolver.resolve_current_location(), resolver.resolve_by_city("Tokyo"));

    assert_eq!(slow, Err(ResolveError::Superseded));
    let fast = fast.unwrap();
    assert_eq!(fast.icon, IconKey::Rain);
    assert_eq!(resolver.state(), ResolutionState::Ready(fast));
}
