// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View models rendered from workouts.
//!
//! These are plain data handed to the list and map backends; they carry no
//! state of their own and are rebuilt from the store on every render.

use crate::models::{Workout, WorkoutDetails, WorkoutKind};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One label/value/unit cell of a workout row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RowDetail {
    pub icon: String,
    pub value: String,
    pub unit: String,
}

impl RowDetail {
    fn new(icon: &str, value: String, unit: &str) -> Self {
        Self {
            icon: icon.to_string(),
            value,
            unit: unit.to_string(),
        }
    }
}

/// A rendered list row for one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutRow {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: String,
    pub kind: WorkoutKind,
    pub title: String,
    /// Distance, duration, derived metric, kind-specific field (in that order).
    pub details: Vec<RowDetail>,
}

impl WorkoutRow {
    pub fn from_workout(workout: &Workout) -> Self {
        let kind = workout.kind();
        let metric = workout.derived();

        let mut details = vec![
            RowDetail::new(kind.emoji(), workout.distance_km().to_string(), "km"),
            RowDetail::new("⏱", workout.duration_min().to_string(), "min"),
            RowDetail::new("⚡️", format!("{:.1}", metric.value()), metric.unit()),
        ];

        details.push(match workout.details() {
            WorkoutDetails::Running {
                cadence_steps_per_min,
            } => RowDetail::new("🦶🏼", cadence_steps_per_min.to_string(), "spm"),
            WorkoutDetails::Cycling { elevation_gain_m } => {
                RowDetail::new("⛰", elevation_gain_m.to_string(), "m")
            }
        });

        Self {
            id: workout.id().to_string(),
            kind,
            title: workout.description().to_string(),
            details,
        }
    }

    /// CSS class of the row container.
    pub fn class_name(&self) -> String {
        format!("workout workout--{}", self.kind)
    }
}

/// Popup attached to a workout's map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Popup {
    pub text: String,
    pub class_name: String,
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Popup {
    pub fn from_workout(workout: &Workout) -> Self {
        let kind = workout.kind();
        Self {
            text: format!("{} {}", kind.emoji(), workout.description()),
            class_name: format!("{}-popup", kind),
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// Options for re-centering the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PanOptions {
    pub zoom: u8,
    pub animate: bool,
    pub duration_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coords, WorkoutId};
    use chrono::{TimeZone, Utc};

    fn make_workout(details: WorkoutDetails) -> Workout {
        Workout::restore(
            WorkoutId::from("w1"),
            Utc.with_ymd_and_hms(2024, 6, 9, 12, 0, 0).unwrap(),
            Coords::new(45.0, 7.0),
            10.0,
            52.0,
            details,
        )
        .unwrap()
    }

    #[test]
    fn test_running_row_details() {
        let row = WorkoutRow::from_workout(&make_workout(WorkoutDetails::Running {
            cadence_steps_per_min: 172.0,
        }));

        assert_eq!(row.title, "Running on June 9");
        assert_eq!(row.class_name(), "workout workout--running");
        let values: Vec<(&str, &str)> = row
            .details
            .iter()
            .map(|d| (d.value.as_str(), d.unit.as_str()))
            .collect();
        assert_eq!(
            values,
            vec![("10", "km"), ("52", "min"), ("5.2", "min/km"), ("172", "spm")]
        );
    }

    #[test]
    fn test_cycling_row_and_popup() {
        let workout = make_workout(WorkoutDetails::Cycling {
            elevation_gain_m: 240.0,
        });
        let row = WorkoutRow::from_workout(&workout);

        assert_eq!(row.details[2].value, "11.5");
        assert_eq!(row.details[2].unit, "km/h");
        assert_eq!(row.details[3].icon, "⛰");

        let popup = Popup::from_workout(&workout);
        assert_eq!(popup.text, "🚴‍♀️ Cycling on June 9");
        assert_eq!(popup.class_name, "cycling-popup");
        assert!(!popup.auto_close);
    }
}
