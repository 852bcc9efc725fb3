// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, Duration, TimeZone, Utc};
use workout_tracker::config::Config;
use workout_tracker::db::MemoryStore;
use workout_tracker::models::{Coords, Workout, WorkoutDetails, WorkoutId};
use workout_tracker::services::{
    FixedLocation, HeadlessList, HeadlessMap, HeadlessMapFactory, ScriptedPrompt,
};
use workout_tracker::Tracker;

#[allow(dead_code)]
pub type TestTracker = Tracker<MemoryStore, HeadlessMap, HeadlessList, ScriptedPrompt>;

/// Location used for the map and new workouts.
#[allow(dead_code)]
pub const HOME: Coords = Coords {
    lat: 37.3894,
    lng: -122.0819,
};

/// Timestamp `day` days after a fixed start date.
#[allow(dead_code)]
pub fn day(day: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 7, 0, 0).unwrap() + Duration::days(day)
}

/// Running workout with a fixed id and date.
#[allow(dead_code)]
pub fn run(id: &str, day_offset: i64, distance: f64, duration: f64, cadence: f64) -> Workout {
    Workout::restore(
        WorkoutId::from(id),
        day(day_offset),
        HOME,
        distance,
        duration,
        WorkoutDetails::Running {
            cadence_steps_per_min: cadence,
        },
    )
    .expect("valid running workout")
}

/// Cycling workout with a fixed id and date.
#[allow(dead_code)]
pub fn ride(id: &str, day_offset: i64, distance: f64, duration: f64, elevation: f64) -> Workout {
    Workout::restore(
        WorkoutId::from(id),
        day(day_offset),
        HOME,
        distance,
        duration,
        WorkoutDetails::Cycling {
            elevation_gain_m: elevation,
        },
    )
    .expect("valid cycling workout")
}

/// Create a tracker over `storage` whose map has been created at [`HOME`].
/// Returns the tracker and a handle to its map.
#[allow(dead_code)]
pub fn tracker_with_map(
    storage: MemoryStore,
    prompt: ScriptedPrompt,
) -> (TestTracker, HeadlessMap) {
    let config = Config::default();
    let mut tracker = Tracker::new(&config, storage, HeadlessList::default(), prompt);

    let mut maps = HeadlessMapFactory::default();
    tracker
        .locate(&mut FixedLocation::at(HOME), &mut maps)
        .expect("position should be available");
    let map = maps.map().expect("map should be created");

    (tracker, map)
}

/// Create a tracker with empty storage and a map.
#[allow(dead_code)]
pub fn create_test_tracker() -> (TestTracker, HeadlessMap) {
    tracker_with_map(MemoryStore::new(), ScriptedPrompt::always(true))
}
