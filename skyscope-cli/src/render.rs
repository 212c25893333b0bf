use chrono::Local;
use skyscope_core::{Notification, NotificationSink, StateSnapshot, WeatherObservation};

/// Prints notifications as one-line toasts on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    pub quiet: bool,
}

impl NotificationSink for ConsoleSink {
    fn notify(&self, n: Notification) {
        if self.quiet && !n.is_destructive() {
            return;
        }
        eprintln!("{}", toast_line(&n));
    }
}

pub fn toast_line(n: &Notification) -> String {
    let marker = if n.is_destructive() { "!" } else { "*" };
    format!("[{marker}] {}: {}", n.title, n.description)
}

/// Render the resolver snapshot the way the card view does: the card if we
/// have weather, a spinner line while loading, otherwise the empty prompt.
pub fn snapshot(snap: &StateSnapshot) -> String {
    match (&snap.weather, snap.loading) {
        (Some(obs), _) => card(obs),
        (None, true) => "Fetching weather data...".to_string(),
        (None, false) => "🌤️  Search for a city to see the weather".to_string(),
    }
}

pub fn card(obs: &WeatherObservation) -> String {
    let observed = obs.observed_at.with_timezone(&Local).format("%H:%M");

    [
        format!("{}  ({} day)", obs.location, obs.band().as_str()),
        capitalize(&obs.description),
        String::new(),
        format!("  {}  {}°", obs.icon.glyph(), obs.temperature_c),
        format!("  Feels like {}°", obs.feels_like_c),
        String::new(),
        format!("  Humidity    {}%", obs.humidity_pct),
        format!("  Wind Speed  {} km/h", obs.wind_kph),
        format!("  Updated     {observed}"),
    ]
    .join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
