// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Tracker headless viewer
//!
//! Restores the saved workouts and prints the rendered workout list.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    config::Config,
    db::FileStore,
    services::{FixedLocation, HeadlessList, HeadlessMapFactory, SortCriterion, UserPrompt},
    time_utils::format_utc_rfc3339,
    Tracker,
};

/// Prompt for a non-interactive session: alerts are logged and every
/// confirmation is declined.
struct LogPrompt;

impl UserPrompt for LogPrompt {
    fn alert(&mut self, message: &str) {
        tracing::warn!(message, "Alert");
    }

    fn confirm(&mut self, message: &str) -> bool {
        tracing::info!(message, "Declining confirmation in headless mode");
        false
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        dir = %config.storage_dir.display(),
        key = %config.storage_key,
        "Starting workout tracker viewer"
    );

    let storage = FileStore::open(&config.storage_dir).context("Failed to open storage")?;
    let mut tracker = Tracker::new(&config, storage, HeadlessList::default(), LogPrompt);

    let mut geolocation = match config.home_position {
        Some(position) => FixedLocation::at(position),
        None => FixedLocation::denied(),
    };
    let mut maps = HeadlessMapFactory::default();
    if tracker.locate(&mut geolocation, &mut maps).is_ok() {
        tracing::info!(markers = tracker.view().marker_count(), "Map ready");
    }

    if let Some(sort) = std::env::args().nth(1) {
        tracker.sort_by_name(&sort);
    } else {
        tracing::debug!(criterion = %SortCriterion::default(), "Keeping stored order");
    }

    print!("{}", tracker.view().list().render_text());
    if let Some(latest) = tracker.store().workouts().iter().map(|w| w.created_at()).max() {
        println!(
            "{} workouts, latest {}",
            tracker.store().len(),
            format_utc_rfc3339(latest)
        );
    }
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
