use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use skyscope_core::{
    Config, RandomSource, ResolveError, SeededRandom, ThreadRandom, WeatherObservation,
    WeatherResolver,
};
use std::sync::Arc;

use crate::{interactive, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyscope", version, about = "Weather lookup for cities and your current location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Seed for the random source, for reproducible values.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log resolver activity to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show weather for a city.
    Show {
        /// City name; partial names match reference cities.
        city: String,

        /// Print the observation as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show weather for your current location.
    Here {
        /// Print the observation as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Search repeatedly from a prompt (the default).
    Interactive,

    /// Edit the configuration file interactively.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let random = random_source(self.seed);

        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => {
                tokio::task::spawn_blocking(move || interactive::configure(config))
                    .await
                    .context("configuration prompt aborted")??;
            }
            Command::Interactive => {
                let resolver = Arc::new(build_resolver(&config, random, false));
                interactive::run(resolver, &config).await?;
            }
            Command::Show { city, json } => {
                let resolver = build_resolver(&config, random, json);
                let indicator = (!json).then(|| interactive::spawn_loading_indicator(&resolver));
                let outcome = resolver.resolve_by_city(&city).await;
                if let Some(handle) = indicator {
                    handle.abort();
                }
                print_outcome(&resolver, outcome, json)?;
            }
            Command::Here { json } => {
                let resolver = build_resolver(&config, random, json);
                let indicator = (!json).then(|| interactive::spawn_loading_indicator(&resolver));
                let outcome = resolver.resolve_current_location().await;
                if let Some(handle) = indicator {
                    handle.abort();
                }
                print_outcome(&resolver, outcome, json)?;
            }
        }

        Ok(())
    }
}

fn random_source(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom::new()),
    }
}

fn build_resolver(config: &Config, random: Arc<dyn RandomSource>, quiet: bool) -> WeatherResolver {
    WeatherResolver::from_config(config, random, Arc::new(render::ConsoleSink { quiet }))
}

fn print_outcome(
    resolver: &WeatherResolver,
    outcome: Result<WeatherObservation, ResolveError>,
    json: bool,
) -> anyhow::Result<()> {
    let obs = match outcome {
        Ok(obs) => obs,
        Err(err) => bail!("{}", err.user_message()),
    };

    if json {
        let out = serde_json::to_string_pretty(&obs).context("Failed to serialize observation")?;
        println!("{out}");
    } else {
        println!("{}", render::snapshot(&resolver.snapshot()));
    }

    Ok(())
}
