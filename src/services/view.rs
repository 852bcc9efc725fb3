// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View synchronization: list rows and map markers.
//!
//! Every render clears all rows and markers and rebuilds them from the
//! store's current sequence. Markers are never patched between renders.

use crate::models::{Coords, PanOptions, Popup, Workout, WorkoutId, WorkoutRow};
use std::collections::HashMap;

/// Handle to a marker placed on a map.
pub trait MarkerHandle {
    /// Attach (or replace) the marker's popup.
    fn set_popup(&mut self, popup: &Popup);

    /// Take the marker off the map.
    fn remove(self);
}

/// A map that markers can be placed on.
pub trait MapWidget {
    type Marker: MarkerHandle;

    fn add_marker(&mut self, coords: Coords) -> Self::Marker;

    /// Re-center the view.
    fn pan_to(&mut self, coords: Coords, options: PanOptions);
}

/// Creates the map once the current position is known.
pub trait MapFactory {
    type Map: MapWidget;

    fn create_map(&mut self, center: Coords, zoom: u8) -> Self::Map;
}

/// The rendered workout list.
pub trait WorkoutList {
    /// Remove every workout row.
    fn clear_rows(&mut self);

    /// Add a row after the ones already rendered.
    fn append_row(&mut self, row: WorkoutRow);
}

/// Renders workouts into a list and, once available, a map.
pub struct ViewSynchronizer<M: MapWidget, L> {
    list: L,
    map: Option<M>,
    markers: HashMap<WorkoutId, M::Marker>,
    pan_options: PanOptions,
}

impl<M: MapWidget, L: WorkoutList> ViewSynchronizer<M, L> {
    pub fn new(list: L, pan_options: PanOptions) -> Self {
        Self {
            list,
            map: None,
            markers: HashMap::new(),
            pan_options,
        }
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn has_map(&self) -> bool {
        self.map.is_some()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn has_marker(&self, id: &WorkoutId) -> bool {
        self.markers.contains_key(id)
    }

    /// Install the map and render everything onto it.
    pub fn attach_map(&mut self, map: M, workouts: &[Workout]) {
        self.map = Some(map);
        self.render_all(workouts);
    }

    /// Rebuild all rows and markers from `workouts`, in order.
    pub fn render_all(&mut self, workouts: &[Workout]) {
        self.list.clear_rows();
        for (_, marker) in self.markers.drain() {
            marker.remove();
        }

        for workout in workouts {
            self.list.append_row(WorkoutRow::from_workout(workout));

            if let Some(map) = self.map.as_mut() {
                let mut marker = map.add_marker(workout.coords());
                marker.set_popup(&Popup::from_workout(workout));
                self.markers.insert(workout.id().clone(), marker);
            }
        }

        tracing::debug!(
            rows = workouts.len(),
            markers = self.markers.len(),
            "Rendered workouts"
        );
    }

    /// Smoothly re-center the map on `workout`. Returns `false` without a map.
    pub fn focus_on(&mut self, workout: &Workout) -> bool {
        match self.map.as_mut() {
            Some(map) => {
                map.pan_to(workout.coords(), self.pan_options);
                true
            }
            None => false,
        }
    }
}
