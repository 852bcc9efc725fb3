// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout entity model.
//!
//! A workout is a single record with a kind-specific payload
//! ([`WorkoutDetails`]). The derived metric and the description are never
//! set directly; they are recomputed from the stored fields after every
//! change.

use crate::error::{Result, TrackerError};
use crate::time_utils::format_month_day;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stable workout identifier, used to join entities with list rows and markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Geographic point. Serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coords {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for (f64, f64) {
    fn from(coords: Coords) -> Self {
        (coords.lat, coords.lng)
    }
}

/// Workout kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase name, as used in persisted records and CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name for descriptions.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific payload. Exactly one kind-specific field exists per workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetails {
    Running { cadence_steps_per_min: f64 },
    Cycling { elevation_gain_m: f64 },
}

impl WorkoutDetails {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Build the payload for `kind` from its kind-specific value.
    pub fn for_kind(kind: WorkoutKind, value: f64) -> Self {
        match kind {
            WorkoutKind::Running => WorkoutDetails::Running {
                cadence_steps_per_min: value,
            },
            WorkoutKind::Cycling => WorkoutDetails::Cycling {
                elevation_gain_m: value,
            },
        }
    }

    /// The kind-specific value (cadence or elevation gain).
    pub fn value(&self) -> f64 {
        match *self {
            WorkoutDetails::Running {
                cadence_steps_per_min,
            } => cadence_steps_per_min,
            WorkoutDetails::Cycling { elevation_gain_m } => elevation_gain_m,
        }
    }
}

/// Metric derived from distance and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedMetric {
    /// Running: minutes per kilometer.
    PaceMinPerKm(f64),
    /// Cycling: kilometers per hour.
    SpeedKmPerHour(f64),
}

impl DerivedMetric {
    pub fn compute(kind: WorkoutKind, distance_km: f64, duration_min: f64) -> Self {
        match kind {
            WorkoutKind::Running => DerivedMetric::PaceMinPerKm(duration_min / distance_km),
            WorkoutKind::Cycling => {
                DerivedMetric::SpeedKmPerHour(distance_km / (duration_min / 60.0))
            }
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            DerivedMetric::PaceMinPerKm(v) | DerivedMetric::SpeedKmPerHour(v) => v,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            DerivedMetric::PaceMinPerKm(_) => "min/km",
            DerivedMetric::SpeedKmPerHour(_) => "km/h",
        }
    }
}

/// Check that every value is finite and strictly positive.
pub fn validate_positive(fields: &[(&str, f64)]) -> Result<()> {
    for &(name, value) in fields {
        if !value.is_finite() {
            return Err(TrackerError::Validation(format!(
                "{} must be a finite number",
                name
            )));
        }
        if value <= 0.0 {
            return Err(TrackerError::Validation(format!(
                "{} must be greater than zero",
                name
            )));
        }
    }
    Ok(())
}

fn validate_non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrackerError::Validation(format!(
            "{} must be a non-negative number",
            name
        )));
    }
    Ok(())
}

/// A recorded workout.
///
/// Fields are private: construction goes through [`Workout::running`],
/// [`Workout::cycling`] or [`Workout::restore`], and mutation through the
/// workout store.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: Coords,
    distance_km: f64,
    duration_min: f64,
    details: WorkoutDetails,
    derived: DerivedMetric,
    description: String,
}

impl Workout {
    /// Create a new running workout at `coords`, timestamped now.
    pub fn running(
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        cadence_steps_per_min: f64,
    ) -> Result<Self> {
        let details = WorkoutDetails::Running {
            cadence_steps_per_min,
        };
        validate_positive(&[
            ("distance", distance_km),
            ("duration", duration_min),
            (kind_field_name(details.kind()), details.value()),
        ])?;
        Ok(Self::build(
            WorkoutId::generate(),
            Utc::now(),
            coords,
            distance_km,
            duration_min,
            details,
        ))
    }

    /// Create a new cycling workout at `coords`, timestamped now.
    pub fn cycling(
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self> {
        let details = WorkoutDetails::Cycling { elevation_gain_m };
        validate_positive(&[
            ("distance", distance_km),
            ("duration", duration_min),
            (kind_field_name(details.kind()), details.value()),
        ])?;
        Ok(Self::build(
            WorkoutId::generate(),
            Utc::now(),
            coords,
            distance_km,
            duration_min,
            details,
        ))
    }

    /// Build a workout with a known identity and timestamp.
    ///
    /// Used when reconstructing persisted workouts; derived fields are
    /// always recomputed here. Distance and duration must be positive, but
    /// the kind-specific value only has to be a non-negative number: older
    /// snapshots store a blank elevation gain as 0.
    pub fn restore(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        details: WorkoutDetails,
    ) -> Result<Self> {
        validate_positive(&[("distance", distance_km), ("duration", duration_min)])?;
        validate_non_negative(kind_field_name(details.kind()), details.value())?;

        Ok(Self::build(
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            details,
        ))
    }

    fn build(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        details: WorkoutDetails,
    ) -> Self {
        let mut workout = Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            details,
            derived: DerivedMetric::compute(details.kind(), distance_km, duration_min),
            description: String::new(),
        };
        workout.recompute_derived();
        workout
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn kind(&self) -> WorkoutKind {
        self.details.kind()
    }

    pub fn details(&self) -> WorkoutDetails {
        self.details
    }

    /// Cadence, present only for running workouts.
    pub fn cadence_steps_per_min(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running {
                cadence_steps_per_min,
            } => Some(cadence_steps_per_min),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Elevation gain, present only for cycling workouts.
    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { elevation_gain_m } => Some(elevation_gain_m),
            WorkoutDetails::Running { .. } => None,
        }
    }

    pub fn derived(&self) -> DerivedMetric {
        self.derived
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.derived {
            DerivedMetric::PaceMinPerKm(v) => Some(v),
            DerivedMetric::SpeedKmPerHour(_) => None,
        }
    }

    pub fn speed_km_per_hour(&self) -> Option<f64> {
        match self.derived {
            DerivedMetric::SpeedKmPerHour(v) => Some(v),
            DerivedMetric::PaceMinPerKm(_) => None,
        }
    }

    /// Human-readable description, e.g. "Running on April 3".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Recalculate the derived metric and description from current fields.
    ///
    /// The description uses the local calendar date. Idempotent.
    pub fn recompute_derived(&mut self) {
        self.derived = DerivedMetric::compute(self.kind(), self.distance_km, self.duration_min);
        self.description = format!(
            "{} on {}",
            self.kind().label(),
            format_month_day(self.created_at.with_timezone(&Local))
        );
    }

    /// Replace the kind-specific payload, dropping the old kind's field.
    pub(crate) fn switch_kind(&mut self, details: WorkoutDetails) -> Result<()> {
        validate_positive(&[(kind_field_name(details.kind()), details.value())])?;
        self.details = details;
        self.recompute_derived();
        Ok(())
    }

    /// Apply a validated patch. Either every field changes or none does.
    pub(crate) fn apply(&mut self, patch: &WorkoutPatch) -> Result<()> {
        let distance_km = patch.distance_km.unwrap_or(self.distance_km);
        let duration_min = patch.duration_min.unwrap_or(self.duration_min);
        let details = patch.details.unwrap_or(self.details);

        validate_positive(&[
            ("distance", distance_km),
            ("duration", duration_min),
            (kind_field_name(details.kind()), details.value()),
        ])?;

        self.distance_km = distance_km;
        self.duration_min = duration_min;
        self.switch_kind(details)
    }
}

/// Field changes for an in-place update. `None` leaves the field untouched.
///
/// Coordinates and creation time are never part of a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutPatch {
    pub distance_km: Option<f64>,
    pub duration_min: Option<f64>,
    pub details: Option<WorkoutDetails>,
}

fn kind_field_name(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "cadence",
        WorkoutKind::Cycling => "elevation gain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 3, 12, 0, 0).unwrap()
    }

    fn make_running() -> Workout {
        Workout::restore(
            WorkoutId::from("run-1"),
            fixed_date(),
            Coords::new(37.33, -122.03),
            5.2,
            24.0,
            WorkoutDetails::Running {
                cadence_steps_per_min: 178.0,
            },
        )
        .expect("valid running workout")
    }

    #[test]
    fn test_running_pace_and_description() {
        let workout = make_running();

        assert_eq!(workout.kind(), WorkoutKind::Running);
        assert_eq!(workout.pace_min_per_km(), Some(24.0 / 5.2));
        assert_eq!(workout.speed_km_per_hour(), None);
        assert_eq!(workout.description(), "Running on April 3");
        assert_eq!(workout.cadence_steps_per_min(), Some(178.0));
        assert_eq!(workout.elevation_gain_m(), None);
    }

    #[test]
    fn test_cycling_speed() {
        let workout = Workout::cycling(Coords::new(37.0, -122.0), 27.0, 95.0, 523.0).unwrap();

        assert_eq!(workout.speed_km_per_hour(), Some(27.0 / (95.0 / 60.0)));
        assert_eq!(workout.derived().unit(), "km/h");
        assert!(workout.description().starts_with("Cycling on "));
    }

    #[test]
    fn test_rejects_non_positive_and_non_finite() {
        let coords = Coords::new(0.0, 0.0);
        assert!(Workout::running(coords, -1.0, 10.0, 150.0).is_err());
        assert!(Workout::running(coords, 1.0, 0.0, 150.0).is_err());
        assert!(Workout::running(coords, 1.0, 10.0, f64::NAN).is_err());
        assert!(Workout::cycling(coords, f64::INFINITY, 10.0, 5.0).is_err());
        assert!(Workout::cycling(coords, 1.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn test_restore_accepts_zero_elevation_gain() {
        let workout = Workout::restore(
            WorkoutId::from("ride-0"),
            fixed_date(),
            Coords::new(0.0, 0.0),
            20.0,
            60.0,
            WorkoutDetails::Cycling {
                elevation_gain_m: 0.0,
            },
        )
        .unwrap();
        assert_eq!(workout.elevation_gain_m(), Some(0.0));
        assert_eq!(workout.speed_km_per_hour(), Some(20.0));

        let negative = Workout::restore(
            WorkoutId::from("ride-1"),
            fixed_date(),
            Coords::new(0.0, 0.0),
            20.0,
            60.0,
            WorkoutDetails::Cycling {
                elevation_gain_m: -5.0,
            },
        );
        assert!(negative.is_err());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let coords = Coords::new(0.0, 0.0);
        let a = Workout::running(coords, 1.0, 10.0, 150.0).unwrap();
        let b = Workout::running(coords, 1.0, 10.0, 150.0).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_switch_kind_drops_old_field() {
        let mut workout = make_running();

        workout
            .switch_kind(WorkoutDetails::Cycling {
                elevation_gain_m: 300.0,
            })
            .unwrap();

        assert_eq!(workout.kind(), WorkoutKind::Cycling);
        assert_eq!(workout.cadence_steps_per_min(), None);
        assert_eq!(workout.elevation_gain_m(), Some(300.0));
        assert_eq!(workout.pace_min_per_km(), None);
        assert_eq!(workout.speed_km_per_hour(), Some(5.2 / (24.0 / 60.0)));
        assert_eq!(workout.description(), "Cycling on April 3");
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut workout = make_running();
        let before = workout.clone();

        workout.recompute_derived();
        workout.recompute_derived();

        assert_eq!(workout, before);
    }

    #[test]
    fn test_apply_invalid_patch_leaves_workout_untouched() {
        let mut workout = make_running();
        let before = workout.clone();

        let patch = WorkoutPatch {
            distance_km: Some(10.0),
            duration_min: Some(-5.0),
            details: None,
        };

        let err = workout.apply(&patch).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(workout, before);
    }

    #[test]
    fn test_coords_serialize_as_pair() {
        let json = serde_json::to_string(&Coords::new(1.5, -2.25)).unwrap();
        assert_eq!(json, "[1.5,-2.25]");

        let coords: Coords = serde_json::from_str("[10.0,20.0]").unwrap();
        assert_eq!(coords, Coords::new(10.0, 20.0));
    }
}
