// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot persistence for the workout list.
//!
//! The full ordered list is written as one JSON array under a single key
//! after every mutation, and read back once at startup.

use crate::db::KeyValueStore;
use crate::error::Result;
use crate::models::{Workout, WorkoutRecord};

/// Saves and restores workout snapshots through a key-value store.
pub struct WorkoutPersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutPersistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write a snapshot of `workouts`, overwriting any previous one.
    ///
    /// Best-effort: failures (such as an exceeded quota) are logged and
    /// otherwise ignored. Use [`Self::try_save`] to observe them.
    pub fn save(&mut self, workouts: &[Workout]) {
        if let Err(e) = self.try_save(workouts) {
            tracing::warn!(
                error = %e,
                key = %self.key,
                count = workouts.len(),
                "Failed to persist workouts snapshot"
            );
        }
    }

    /// Write a snapshot of `workouts`, reporting any failure.
    pub fn try_save(&mut self, workouts: &[Workout]) -> Result<()> {
        let records: Vec<WorkoutRecord> = workouts.iter().map(WorkoutRecord::from).collect();
        let json = serde_json::to_string(&records)?;
        self.store.set_item(&self.key, &json)?;

        tracing::debug!(
            key = %self.key,
            count = records.len(),
            bytes = json.len(),
            "Saved snapshot"
        );
        Ok(())
    }

    /// Read the snapshot back as typed workouts, in stored order.
    ///
    /// A missing (or `null`) snapshot yields an empty list. Records that
    /// cannot be rebuilt are skipped with a warning; a blob that is not a
    /// JSON array of records is an error.
    pub fn load(&self) -> Result<Vec<Workout>> {
        let Some(json) = self.store.get_item(&self.key)? else {
            tracing::debug!(key = %self.key, "No saved snapshot");
            return Ok(Vec::new());
        };

        let records: Option<Vec<WorkoutRecord>> = serde_json::from_str(&json)?;
        let records = records.unwrap_or_default();
        let total = records.len();

        let workouts: Vec<Workout> = records
            .into_iter()
            .filter_map(|record| {
                let id = record.id.clone();
                match record.into_workout() {
                    Ok(workout) => Some(workout),
                    Err(e) => {
                        tracing::warn!(
                            workout_id = %id,
                            error = %e,
                            "Skipping invalid stored workout"
                        );
                        None
                    }
                }
            })
            .collect();

        tracing::info!(
            key = %self.key,
            count = workouts.len(),
            skipped = total - workouts.len(),
            "Loaded workouts snapshot"
        );
        Ok(workouts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{keys, MemoryStore};
    use crate::error::TrackerError;
    use crate::models::Coords;

    fn persistence() -> WorkoutPersistence<MemoryStore> {
        WorkoutPersistence::new(MemoryStore::new(), keys::WORKOUTS)
    }

    #[test]
    fn test_load_absent_is_empty() {
        assert!(persistence().load().unwrap().is_empty());
    }

    #[test]
    fn test_load_null_is_empty() {
        let mut store = MemoryStore::new();
        store.set_item(keys::WORKOUTS, "null").unwrap();
        let persistence = WorkoutPersistence::new(store, keys::WORKOUTS);

        assert!(persistence.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_garbage_is_corrupt() {
        let mut store = MemoryStore::new();
        store.set_item(keys::WORKOUTS, "{not json").unwrap();
        let persistence = WorkoutPersistence::new(store, keys::WORKOUTS);

        assert!(matches!(
            persistence.load(),
            Err(TrackerError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let json = r#"[
            {"id": "ok", "kind": "running", "createdAt": "2024-05-01T06:00:00Z",
             "coordinates": [1.0, 2.0], "distanceKm": 3.0, "durationMin": 18.0,
             "cadenceStepsPerMin": 165.0},
            {"id": "bad", "kind": "running", "createdAt": "2024-05-02T06:00:00Z",
             "coordinates": [1.0, 2.0], "distanceKm": -3.0, "durationMin": 18.0,
             "cadenceStepsPerMin": 165.0}
        ]"#;
        let mut store = MemoryStore::new();
        store.set_item(keys::WORKOUTS, json).unwrap();
        let persistence = WorkoutPersistence::new(store, keys::WORKOUTS);

        let workouts = persistence.load().unwrap();
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].id().as_str(), "ok");
    }

    #[test]
    fn test_legacy_ride_without_elevation_survives_reload() {
        let json = r#"[
            {"date": "2023-08-20T16:45:00.000Z", "id": "7712034456", "coords": [46.2, 6.1],
             "distance": 20, "duration": 60, "type": "cycling", "elevationGain": 0,
             "speed": 20, "description": "Cycling on August 20"}
        ]"#;
        let mut store = MemoryStore::new();
        store.set_item(keys::WORKOUTS, json).unwrap();
        let mut persistence = WorkoutPersistence::new(store, keys::WORKOUTS);

        let workouts = persistence.load().unwrap();
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].elevation_gain_m(), Some(0.0));

        persistence.save(&workouts);
        let reloaded = persistence.load().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].id().as_str(), "7712034456");
    }

    #[test]
    fn test_save_over_quota_is_silent() {
        let mut persistence =
            WorkoutPersistence::new(MemoryStore::with_quota(16), keys::WORKOUTS);
        let workout = Workout::running(Coords::new(0.0, 0.0), 5.0, 30.0, 170.0).unwrap();

        // Does not panic or propagate
        persistence.save(std::slice::from_ref(&workout));
        assert!(persistence.store().is_empty());

        assert!(persistence.try_save(&[workout]).is_err());
    }
}
