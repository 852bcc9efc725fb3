// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory ordered workout collection.
//!
//! The store is the only place workouts are mutated. It is a passive
//! holder: callers persist and re-render after each mutation.

use crate::error::{Result, TrackerError};
use crate::models::{DerivedMetric, Workout, WorkoutId, WorkoutKind, WorkoutPatch};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering applied by [`WorkoutStore::sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    /// Most recent first.
    #[default]
    Date,
    /// Longest first.
    Distance,
    /// Longest first.
    Duration,
    /// Runs before rides; runs by ascending pace, rides by descending speed.
    Pace,
}

impl SortCriterion {
    pub fn as_str(self) -> &'static str {
        match self {
            SortCriterion::Date => "date",
            SortCriterion::Distance => "distance",
            SortCriterion::Duration => "duration",
            SortCriterion::Pace => "pace",
        }
    }

    fn compare(self, a: &Workout, b: &Workout) -> Ordering {
        match self {
            SortCriterion::Date => b.created_at().cmp(&a.created_at()),
            SortCriterion::Distance => b.distance_km().total_cmp(&a.distance_km()),
            SortCriterion::Duration => b.duration_min().total_cmp(&a.duration_min()),
            SortCriterion::Pace => compare_performance(a, b),
        }
    }
}

/// Fastest first within each kind: lower pace is better for runs, higher
/// speed is better for rides.
fn compare_performance(a: &Workout, b: &Workout) -> Ordering {
    match (a.derived(), b.derived()) {
        (DerivedMetric::PaceMinPerKm(pa), DerivedMetric::PaceMinPerKm(pb)) => pa.total_cmp(&pb),
        (DerivedMetric::SpeedKmPerHour(sa), DerivedMetric::SpeedKmPerHour(sb)) => {
            sb.total_cmp(&sa)
        }
        _ => kind_rank(a.kind()).cmp(&kind_rank(b.kind())),
    }
}

fn kind_rank(kind: WorkoutKind) -> u8 {
    match kind {
        WorkoutKind::Running => 0,
        WorkoutKind::Cycling => 1,
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a sort criterion from a select value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort criterion: {0}")]
pub struct UnknownCriterion(pub String);

impl FromStr for SortCriterion {
    type Err = UnknownCriterion;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortCriterion::Date),
            "distance" => Ok(SortCriterion::Distance),
            "duration" => Ok(SortCriterion::Duration),
            "pace" | "speed" => Ok(SortCriterion::Pace),
            other => Err(UnknownCriterion(other.to_string())),
        }
    }
}

/// Ordered collection of workouts, in insertion order until sorted.
#[derive(Debug, Clone, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an already ordered list (e.g. a loaded snapshot).
    pub fn from_workouts(workouts: Vec<Workout>) -> Self {
        Self { workouts }
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn get(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    fn position(&self, id: &WorkoutId) -> Result<usize> {
        self.workouts
            .iter()
            .position(|w| w.id() == id)
            .ok_or_else(|| TrackerError::NotFound(id.clone()))
    }

    /// Append a workout. Ids are unique by construction and not re-checked.
    pub fn add(&mut self, workout: Workout) {
        tracing::info!(
            workout_id = %workout.id(),
            kind = %workout.kind(),
            "Workout added"
        );
        self.workouts.push(workout);
    }

    /// Apply `patch` to the workout with `id`, keeping its position.
    ///
    /// Derived fields are recomputed. An invalid patch leaves the workout
    /// unchanged.
    pub fn update_in_place(&mut self, id: &WorkoutId, patch: &WorkoutPatch) -> Result<&Workout> {
        let index = self.position(id)?;
        let workout = &mut self.workouts[index];
        workout.apply(patch)?;

        tracing::info!(workout_id = %id, kind = %workout.kind(), "Workout updated");
        Ok(&*workout)
    }

    /// Remove the workout with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: &WorkoutId) -> Result<Workout> {
        let index = self.position(id)?;
        let removed = self.workouts.remove(index);

        tracing::info!(workout_id = %id, remaining = self.workouts.len(), "Workout removed");
        Ok(removed)
    }

    /// Remove every workout.
    pub fn remove_all(&mut self) {
        let count = self.workouts.len();
        self.workouts.clear();
        tracing::info!(count, "All workouts removed");
    }

    /// Reorder the live sequence. The sort is stable.
    pub fn sort_by(&mut self, criterion: SortCriterion) {
        self.workouts.sort_by(|a, b| criterion.compare(a, b));
        tracing::debug!(%criterion, count = self.workouts.len(), "Workouts sorted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coords, WorkoutDetails};
    use chrono::{Duration, TimeZone, Utc};

    fn run(id: &str, day: i64, distance: f64, duration: f64) -> Workout {
        Workout::restore(
            WorkoutId::from(id),
            Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap() + Duration::days(day),
            Coords::new(0.0, 0.0),
            distance,
            duration,
            WorkoutDetails::Running {
                cadence_steps_per_min: 170.0,
            },
        )
        .unwrap()
    }

    fn ride(id: &str, day: i64, distance: f64, duration: f64) -> Workout {
        Workout::restore(
            WorkoutId::from(id),
            Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap() + Duration::days(day),
            Coords::new(0.0, 0.0),
            distance,
            duration,
            WorkoutDetails::Cycling {
                elevation_gain_m: 100.0,
            },
        )
        .unwrap()
    }

    fn ids(store: &WorkoutStore) -> Vec<&str> {
        store.workouts().iter().map(|w| w.id().as_str()).collect()
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = WorkoutStore::from_workouts(vec![
            run("1", 0, 5.0, 30.0),
            run("2", 1, 2.0, 10.0),
            run("3", 2, 8.0, 45.0),
        ]);

        let removed = store.remove(&WorkoutId::from("2")).unwrap();
        assert_eq!(removed.id().as_str(), "2");
        assert_eq!(ids(&store), vec!["1", "3"]);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut store = WorkoutStore::from_workouts(vec![run("1", 0, 5.0, 30.0)]);

        let err = store.remove(&WorkoutId::from("nope")).unwrap_err();
        assert!(matches!(err, TrackerError::NotFound(ref id) if id.as_str() == "nope"));
        assert_eq!(ids(&store), vec!["1"]);
    }

    #[test]
    fn test_update_in_place_keeps_position_and_identity() {
        let mut store = WorkoutStore::from_workouts(vec![
            run("1", 0, 5.0, 30.0),
            run("2", 1, 2.0, 10.0),
        ]);
        let coords_before = store.workouts()[0].coords();

        let patch = WorkoutPatch {
            distance_km: Some(10.0),
            duration_min: Some(60.0),
            details: Some(WorkoutDetails::Cycling {
                elevation_gain_m: 50.0,
            }),
        };
        let updated = store.update_in_place(&WorkoutId::from("1"), &patch).unwrap();

        assert_eq!(updated.kind(), WorkoutKind::Cycling);
        assert_eq!(updated.speed_km_per_hour(), Some(10.0));
        assert_eq!(updated.cadence_steps_per_min(), None);
        assert_eq!(ids(&store), vec!["1", "2"]);
        assert_eq!(store.workouts()[0].coords(), coords_before);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = WorkoutStore::new();
        let err = store
            .update_in_place(&WorkoutId::from("x"), &WorkoutPatch::default())
            .unwrap_err();
        assert!(matches!(err, TrackerError::NotFound(_)));
    }

    #[test]
    fn test_sort_by_distance_and_date() {
        let mut store = WorkoutStore::from_workouts(vec![
            run("a", 0, 5.0, 30.0),
            run("b", 2, 2.0, 10.0),
            run("c", 1, 8.0, 45.0),
        ]);

        store.sort_by(SortCriterion::Distance);
        let distances: Vec<f64> = store.workouts().iter().map(|w| w.distance_km()).collect();
        assert_eq!(distances, vec![8.0, 5.0, 2.0]);

        store.sort_by(SortCriterion::Date);
        assert_eq!(ids(&store), vec!["b", "c", "a"]);

        store.sort_by(SortCriterion::Duration);
        assert_eq!(ids(&store), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_by_pace_groups_kinds() {
        let mut store = WorkoutStore::from_workouts(vec![
            ride("slow-ride", 0, 20.0, 60.0),
            run("slow-run", 1, 5.0, 35.0),
            ride("fast-ride", 2, 40.0, 60.0),
            run("fast-run", 3, 5.0, 22.0),
        ]);

        store.sort_by(SortCriterion::Pace);
        assert_eq!(
            ids(&store),
            vec!["fast-run", "slow-run", "fast-ride", "slow-ride"]
        );
    }

    #[test]
    fn test_remove_all() {
        let mut store = WorkoutStore::from_workouts(vec![run("1", 0, 5.0, 30.0)]);
        store.remove_all();
        assert!(store.is_empty());
    }

    #[test]
    fn test_parse_criterion() {
        assert_eq!("distance".parse(), Ok(SortCriterion::Distance));
        assert_eq!(" Pace ".parse(), Ok(SortCriterion::Pace));
        assert_eq!("speed".parse(), Ok(SortCriterion::Pace));
        assert!("altitude".parse::<SortCriterion>().is_err());
    }
}
