// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Headless map and list backends.
//!
//! They record what would be drawn instead of drawing it. Used by the
//! viewer binary and by tests.

use crate::models::{Coords, PanOptions, Popup, WorkoutRow};
use crate::services::view::{MapFactory, MapWidget, MarkerHandle, WorkoutList};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::rc::Rc;

/// A marker currently on a [`HeadlessMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub coords: Coords,
    pub popup: Option<Popup>,
}

#[derive(Debug)]
struct MapState {
    center: Coords,
    zoom: u8,
    next_marker: u64,
    markers: BTreeMap<u64, PlacedMarker>,
    pans: Vec<(Coords, PanOptions)>,
}

/// In-memory map. Clones share state, so a test can keep a clone and
/// inspect what the tracker did with the original.
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    state: Rc<RefCell<MapState>>,
}

impl HeadlessMap {
    pub fn new(center: Coords, zoom: u8) -> Self {
        Self {
            state: Rc::new(RefCell::new(MapState {
                center,
                zoom,
                next_marker: 0,
                markers: BTreeMap::new(),
                pans: Vec::new(),
            })),
        }
    }

    pub fn center(&self) -> Coords {
        self.state.borrow().center
    }

    pub fn zoom(&self) -> u8 {
        self.state.borrow().zoom
    }

    /// Markers in placement order.
    pub fn markers(&self) -> Vec<PlacedMarker> {
        self.state.borrow().markers.values().cloned().collect()
    }

    pub fn pans(&self) -> Vec<(Coords, PanOptions)> {
        self.state.borrow().pans.clone()
    }
}

/// Marker handle for a [`HeadlessMap`].
#[derive(Debug)]
pub struct HeadlessMarker {
    id: u64,
    state: Rc<RefCell<MapState>>,
}

impl MarkerHandle for HeadlessMarker {
    fn set_popup(&mut self, popup: &Popup) {
        if let Some(marker) = self.state.borrow_mut().markers.get_mut(&self.id) {
            marker.popup = Some(popup.clone());
        }
    }

    fn remove(self) {
        self.state.borrow_mut().markers.remove(&self.id);
    }
}

impl MapWidget for HeadlessMap {
    type Marker = HeadlessMarker;

    fn add_marker(&mut self, coords: Coords) -> HeadlessMarker {
        let mut state = self.state.borrow_mut();
        let id = state.next_marker;
        state.next_marker += 1;
        state
            .markers
            .insert(id, PlacedMarker { coords, popup: None });

        HeadlessMarker {
            id,
            state: Rc::clone(&self.state),
        }
    }

    fn pan_to(&mut self, coords: Coords, options: PanOptions) {
        let mut state = self.state.borrow_mut();
        state.center = coords;
        state.zoom = options.zoom;
        state.pans.push((coords, options));
    }
}

/// Factory handing out a shared [`HeadlessMap`].
#[derive(Debug, Clone, Default)]
pub struct HeadlessMapFactory {
    created: Option<HeadlessMap>,
}

impl HeadlessMapFactory {
    /// The map created so far, if any.
    pub fn map(&self) -> Option<HeadlessMap> {
        self.created.clone()
    }
}

impl MapFactory for HeadlessMapFactory {
    type Map = HeadlessMap;

    fn create_map(&mut self, center: Coords, zoom: u8) -> HeadlessMap {
        let map = HeadlessMap::new(center, zoom);
        self.created = Some(map.clone());
        map
    }
}

/// In-memory workout list.
#[derive(Debug, Clone, Default)]
pub struct HeadlessList {
    rows: Vec<WorkoutRow>,
}

impl HeadlessList {
    pub fn rows(&self) -> &[WorkoutRow] {
        &self.rows
    }

    /// Plain-text rendering, one line per workout.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let _ = write!(out, "{}", row.title);
            for detail in &row.details {
                let _ = write!(out, "  {} {} {}", detail.icon, detail.value, detail.unit);
            }
            out.push('\n');
        }
        out
    }
}

impl WorkoutList for HeadlessList {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: WorkoutRow) {
        self.rows.push(row);
    }
}
