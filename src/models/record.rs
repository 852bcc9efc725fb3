// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisted workout record.
//!
//! One record per workout inside the snapshot blob. Derived fields are
//! written for readability but ignored on load.

use crate::error::{Result, TrackerError};
use crate::models::{Coords, Workout, WorkoutDetails, WorkoutId, WorkoutKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored workout record.
///
/// Field aliases accept snapshots written by the earlier browser-only app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: WorkoutId,
    #[serde(alias = "type")]
    pub kind: WorkoutKind,
    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "coords")]
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    pub coordinates: Coords,
    #[serde(alias = "distance")]
    pub distance_km: f64,
    #[serde(alias = "duration")]
    pub duration_min: f64,
    #[serde(default, alias = "cadence", skip_serializing_if = "Option::is_none")]
    pub cadence_steps_per_min: Option<f64>,
    #[serde(
        default,
        alias = "elevationGain",
        skip_serializing_if = "Option::is_none"
    )]
    pub elevation_gain_m: Option<f64>,
    #[serde(default, alias = "pace", skip_serializing_if = "Option::is_none")]
    pub pace_min_per_km: Option<f64>,
    #[serde(default, alias = "speed", skip_serializing_if = "Option::is_none")]
    pub speed_km_per_hour: Option<f64>,
    #[serde(default)]
    pub description: String,
}

impl From<&Workout> for WorkoutRecord {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id().clone(),
            kind: workout.kind(),
            created_at: workout.created_at(),
            coordinates: workout.coords(),
            distance_km: workout.distance_km(),
            duration_min: workout.duration_min(),
            cadence_steps_per_min: workout.cadence_steps_per_min(),
            elevation_gain_m: workout.elevation_gain_m(),
            pace_min_per_km: workout.pace_min_per_km(),
            speed_km_per_hour: workout.speed_km_per_hour(),
            description: workout.description().to_string(),
        }
    }
}

impl WorkoutRecord {
    /// Rebuild a typed workout from this record.
    ///
    /// The kind discriminator selects which kind-specific field is read;
    /// stored derived fields and description are discarded and recomputed.
    pub fn into_workout(self) -> Result<Workout> {
        let value = match self.kind {
            WorkoutKind::Running => self.cadence_steps_per_min,
            WorkoutKind::Cycling => self.elevation_gain_m,
        }
        .ok_or_else(|| {
            TrackerError::CorruptSnapshot(format!(
                "{} workout {} has no kind-specific field",
                self.kind, self.id
            ))
        })?;

        Workout::restore(
            self.id,
            self.created_at,
            self.coordinates,
            self.distance_km,
            self.duration_min,
            WorkoutDetails::for_kind(self.kind, value),
        )
    }
}
