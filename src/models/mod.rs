// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod record;
pub mod view;
pub mod workout;

pub use record::WorkoutRecord;
pub use view::{PanOptions, Popup, RowDetail, WorkoutRow};
pub use workout::{
    Coords, DerivedMetric, Workout, WorkoutDetails, WorkoutId, WorkoutKind, WorkoutPatch,
};
