// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod controller;
pub mod geolocation;
pub mod headless;
pub mod persistence;
pub mod prompt;
pub mod store;
pub mod view;

pub use controller::{ClickTarget, FormInput, FormMode, Outcome, UserAction, WorkoutAction};
pub use geolocation::{FixedLocation, GeolocationProvider};
pub use headless::{HeadlessList, HeadlessMap, HeadlessMapFactory};
pub use persistence::WorkoutPersistence;
pub use prompt::{ScriptedPrompt, UserPrompt};
pub use store::{SortCriterion, WorkoutStore};
pub use view::{MapFactory, MapWidget, MarkerHandle, ViewSynchronizer, WorkoutList};
