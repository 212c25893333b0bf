use anyhow::{Context, Result};
use inquire::{CustomType, InquireError, Select, Text};
use skyscope_core::{Config, OverlapPolicy, WeatherResolver};
use std::{fmt, sync::Arc};
use tokio::task::JoinHandle;

use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Search(String),
    CurrentLocation,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Search,
    CurrentLocation,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItem::Search => "Search a city",
            MenuItem::CurrentLocation => "Use current location",
            MenuItem::Quit => "Quit",
        })
    }
}

/// Print a loading line every time the resolver enters `Loading`.
pub fn spawn_loading_indicator(resolver: &WeatherResolver) -> JoinHandle<()> {
    let mut states = resolver.subscribe();

    tokio::spawn(async move {
        while states.changed().await.is_ok() {
            if states.borrow_and_update().is_loading() {
                println!("Fetching weather data...");
            }
        }
    })
}

/// Prompt loop: show the default city first, then search until the user quits.
pub async fn run(resolver: Arc<WeatherResolver>, config: &Config) -> Result<()> {
    let indicator = spawn_loading_indicator(&resolver);

    if let Some(city) = config.default_city() {
        if let Err(err) = resolver.resolve_by_city(city).await {
            tracing::debug!(%err, "default city lookup failed");
        }
    }
    println!("{}\n", render::snapshot(&resolver.snapshot()));

    loop {
        let action = tokio::task::spawn_blocking(prompt_action)
            .await
            .context("prompt task aborted")??;

        let outcome = match action {
            Action::Search(city) => resolver.resolve_by_city(&city).await,
            Action::CurrentLocation => resolver.resolve_current_location().await,
            Action::Quit => break,
        };

        if let Err(err) = outcome {
            tracing::debug!(%err, "lookup did not produce weather");
        }
        println!("{}\n", render::snapshot(&resolver.snapshot()));
    }

    indicator.abort();
    Ok(())
}

fn prompt_action() -> Result<Action> {
    let items = vec![MenuItem::Search, MenuItem::CurrentLocation, MenuItem::Quit];

    let item = match Select::new("What next?", items).prompt() {
        Ok(item) => item,
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            return Ok(Action::Quit);
        }
        Err(err) => return Err(err).context("Failed to read menu choice"),
    };

    match item {
        MenuItem::Search => {
            match Text::new("City:").with_placeholder("Enter city name...").prompt() {
                Ok(city) => Ok(Action::Search(city)),
                Err(InquireError::OperationCanceled) => prompt_action(),
                Err(InquireError::OperationInterrupted) => Ok(Action::Quit),
                Err(err) => Err(err).context("Failed to read city name"),
            }
        }
        MenuItem::CurrentLocation => Ok(Action::CurrentLocation),
        MenuItem::Quit => Ok(Action::Quit),
    }
}

/// Interactive edit of the config file.
pub fn configure(mut config: Config) -> Result<()> {
    let city = Text::new("Default city (empty for none):")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;
    config.set_default_city(&city);

    config.latency.city_ms = CustomType::<u64>::new("City lookup latency (ms):")
        .with_default(config.latency.city_ms)
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()
        .context("Failed to read city latency")?;

    config.latency.location_ms = CustomType::<u64>::new("Current location latency (ms):")
        .with_default(config.latency.location_ms)
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()
        .context("Failed to read location latency")?;

    let choices = vec![
        PolicyChoice(OverlapPolicy::LastWriteWins),
        PolicyChoice(OverlapPolicy::DiscardStale),
    ];
    let start = choices.iter().position(|c| c.0 == config.overlap_policy).unwrap_or(0);
    config.overlap_policy = Select::new("When lookups overlap:", choices)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read overlap policy")?
        .0;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PolicyChoice(OverlapPolicy);

impl fmt::Display for PolicyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.0 {
            OverlapPolicy::LastWriteWins => "keep whichever finishes last",
            OverlapPolicy::DiscardStale => "keep only the newest request",
        })
    }
}
