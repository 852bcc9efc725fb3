// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form and interaction controller.
//!
//! Handles the core workflow for every user action:
//! 1. Validate and normalize input
//! 2. Mutate the workout store
//! 3. Persist a snapshot
//! 4. Re-render list rows and markers from the store
//!
//! The form is either closed, creating a workout at a picked location, or
//! editing an existing workout. Creating and editing never overlap.

use crate::config::Config;
use crate::db::KeyValueStore;
use crate::error::{Result, TrackerError};
use crate::models::workout::validate_positive;
use crate::models::{Coords, Workout, WorkoutDetails, WorkoutId, WorkoutKind, WorkoutPatch};
use crate::services::geolocation::GeolocationProvider;
use crate::services::persistence::WorkoutPersistence;
use crate::services::prompt::UserPrompt;
use crate::services::store::{SortCriterion, WorkoutStore};
use crate::services::view::{MapFactory, MapWidget, ViewSynchronizer, WorkoutList};

const CONFIRM_DELETE: &str = "Are you sure you want to delete this workout?";
const CONFIRM_RESET: &str = "Are you sure you want to remove ALL workouts? This cannot be undone.";

/// Form state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode {
    /// Form hidden.
    #[default]
    Idle,
    /// Form open for a new workout at `location`.
    Creating { location: Coords },
    /// Form open for an existing workout.
    Editing { id: WorkoutId },
}

impl FormMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Idle)
    }
}

/// Values submitted through the workout form.
///
/// Only the kind-specific field matching `kind` is read.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub kind: WorkoutKind,
    pub distance_km: f64,
    pub duration_min: f64,
    pub cadence_steps_per_min: Option<f64>,
    pub elevation_gain_m: Option<f64>,
}

impl FormInput {
    pub fn running(distance_km: f64, duration_min: f64, cadence_steps_per_min: f64) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance_km,
            duration_min,
            cadence_steps_per_min: Some(cadence_steps_per_min),
            elevation_gain_m: None,
        }
    }

    pub fn cycling(distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance_km,
            duration_min,
            cadence_steps_per_min: None,
            elevation_gain_m: Some(elevation_gain_m),
        }
    }

    /// Build input from raw text fields. Blank or unparsable fields become
    /// NaN and fail validation.
    pub fn from_fields(
        kind: WorkoutKind,
        distance: &str,
        duration: &str,
        cadence: &str,
        elevation: &str,
    ) -> Self {
        Self {
            kind,
            distance_km: parse_field(distance),
            duration_min: parse_field(duration),
            cadence_steps_per_min: Some(parse_field(cadence)),
            elevation_gain_m: Some(parse_field(elevation)),
        }
    }

    /// Current values of `workout`, to populate the form for editing.
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            kind: workout.kind(),
            distance_km: workout.distance_km(),
            duration_min: workout.duration_min(),
            cadence_steps_per_min: workout.cadence_steps_per_min(),
            elevation_gain_m: workout.elevation_gain_m(),
        }
    }

    /// Check all numbers and return the kind-specific payload.
    pub fn validate(&self) -> Result<WorkoutDetails> {
        let (name, value) = match self.kind {
            WorkoutKind::Running => ("cadence", self.cadence_steps_per_min),
            WorkoutKind::Cycling => ("elevation gain", self.elevation_gain_m),
        };
        let value = value.unwrap_or(f64::NAN);

        validate_positive(&[
            ("distance", self.distance_km),
            ("duration", self.duration_min),
            (name, value),
        ])?;
        Ok(WorkoutDetails::for_kind(self.kind, value))
    }
}

fn parse_field(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Which part of a rendered row was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    EditButton,
    DeleteButton,
    Row,
}

/// Action on one rendered workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkoutAction {
    Select(WorkoutId),
    Edit(WorkoutId),
    Delete(WorkoutId),
}

impl WorkoutAction {
    /// Resolve a click inside a row. The edit and delete buttons take
    /// precedence over the row itself.
    pub fn from_click(id: WorkoutId, target: ClickTarget) -> Self {
        match target {
            ClickTarget::EditButton => WorkoutAction::Edit(id),
            ClickTarget::DeleteButton => WorkoutAction::Delete(id),
            ClickTarget::Row => WorkoutAction::Select(id),
        }
    }
}

/// Everything a user can do.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Click on the map.
    PickLocation(Coords),
    Submit(FormInput),
    Cancel,
    Workout(WorkoutAction),
    Sort(SortCriterion),
    Reset,
}

/// Result of handling one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The action does not apply in the current state.
    Ignored,
    /// Form opened for a new workout.
    FormOpened,
    /// Form opened for editing, with the values to prefill.
    EditStarted(FormInput),
    /// Form closed without changes.
    FormClosed,
    /// Input failed validation; the form stays open.
    Rejected(String),
    /// The user answered "no" to a confirmation.
    Declined,
    Created(WorkoutId),
    Updated(WorkoutId),
    Deleted(WorkoutId),
    Focused(WorkoutId),
    Sorted(SortCriterion),
    /// Every workout removed; holds how many there were.
    Cleared(usize),
}

/// The workout tracker: store, persistence, view and form state.
pub struct Tracker<S, M: MapWidget, L, P> {
    store: WorkoutStore,
    persistence: WorkoutPersistence<S>,
    view: ViewSynchronizer<M, L>,
    prompt: P,
    mode: FormMode,
    map_zoom: u8,
    located: bool,
}

impl<S, M, L, P> Tracker<S, M, L, P>
where
    S: KeyValueStore,
    M: MapWidget,
    L: WorkoutList,
    P: UserPrompt,
{
    /// Restore saved workouts and render the list.
    ///
    /// An unreadable snapshot is logged and the tracker starts empty.
    pub fn new(config: &Config, storage: S, list: L, prompt: P) -> Self {
        let persistence = WorkoutPersistence::new(storage, config.storage_key.clone());
        let workouts = persistence.load().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Could not restore workouts, starting empty");
            Vec::new()
        });

        let mut view = ViewSynchronizer::new(list, config.pan_options());
        view.render_all(&workouts);

        Self {
            store: WorkoutStore::from_workouts(workouts),
            persistence,
            view,
            prompt,
            mode: FormMode::Idle,
            map_zoom: config.map_zoom,
            located: false,
        }
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn view(&self) -> &ViewSynchronizer<M, L> {
        &self.view
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn persistence(&self) -> &WorkoutPersistence<S> {
        &self.persistence
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Ask for the current position once and create the map there.
    ///
    /// On failure the user is alerted; saved workouts stay viewable but no
    /// new ones can be placed. Only the first call reaches the provider,
    /// later calls return `Ok(())` whatever the first answer was.
    pub fn locate<G, F>(&mut self, geolocation: &mut G, maps: &mut F) -> Result<()>
    where
        G: GeolocationProvider,
        F: MapFactory<Map = M>,
    {
        if self.located {
            tracing::debug!(has_map = self.view.has_map(), "Position already requested");
            return Ok(());
        }
        self.located = true;

        match geolocation.current_position() {
            Ok(position) => {
                tracing::info!(lat = position.lat, lng = position.lng, "Position acquired");
                let map = maps.create_map(position, self.map_zoom);
                self.view.attach_map(map, self.store.workouts());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Position unavailable");
                if let Some(message) = e.alert_message() {
                    self.prompt.alert(message);
                }
                Err(e)
            }
        }
    }

    /// Handle one user action.
    ///
    /// Validation failures are reported to the user and returned as
    /// [`Outcome::Rejected`]. A missing workout is returned as
    /// [`TrackerError::NotFound`].
    pub fn dispatch(&mut self, action: UserAction) -> Result<Outcome> {
        match action {
            UserAction::PickLocation(location) => Ok(self.pick_location(location)),
            UserAction::Submit(input) => self.submit(&input),
            UserAction::Cancel => Ok(self.cancel()),
            UserAction::Workout(WorkoutAction::Select(id)) => self.select(&id),
            UserAction::Workout(WorkoutAction::Edit(id)) => self.begin_edit(&id),
            UserAction::Workout(WorkoutAction::Delete(id)) => self.delete(&id),
            UserAction::Sort(criterion) => Ok(self.sort(criterion)),
            UserAction::Reset => Ok(self.reset()),
        }
    }

    /// Open the form for a new workout at `location`.
    pub fn pick_location(&mut self, location: Coords) -> Outcome {
        if self.mode.is_open() {
            tracing::debug!("Form already open, ignoring location pick");
            return Outcome::Ignored;
        }
        if !self.view.has_map() {
            tracing::debug!("No map, ignoring location pick");
            return Outcome::Ignored;
        }

        self.mode = FormMode::Creating { location };
        Outcome::FormOpened
    }

    /// Close the form, discarding input.
    pub fn cancel(&mut self) -> Outcome {
        if !self.mode.is_open() {
            return Outcome::Ignored;
        }
        self.mode = FormMode::Idle;
        Outcome::FormClosed
    }

    /// Submit the form in its current mode.
    pub fn submit(&mut self, input: &FormInput) -> Result<Outcome> {
        let mode = self.mode.clone();
        if !mode.is_open() {
            tracing::debug!("Form closed, ignoring submit");
            return Ok(Outcome::Ignored);
        }

        let details = match input.validate() {
            Ok(details) => details,
            Err(e) => return Ok(self.reject(e)),
        };

        match mode {
            FormMode::Creating { location } => {
                let created = match details {
                    WorkoutDetails::Running {
                        cadence_steps_per_min,
                    } => Workout::running(
                        location,
                        input.distance_km,
                        input.duration_min,
                        cadence_steps_per_min,
                    ),
                    WorkoutDetails::Cycling { elevation_gain_m } => Workout::cycling(
                        location,
                        input.distance_km,
                        input.duration_min,
                        elevation_gain_m,
                    ),
                };
                let workout = match created {
                    Ok(workout) => workout,
                    Err(e) => return Ok(self.reject(e)),
                };
                let id = workout.id().clone();

                self.store.add(workout);
                self.mode = FormMode::Idle;
                self.commit();
                Ok(Outcome::Created(id))
            }
            FormMode::Editing { id } => {
                let patch = WorkoutPatch {
                    distance_km: Some(input.distance_km),
                    duration_min: Some(input.duration_min),
                    details: Some(details),
                };

                let updated = self.store.update_in_place(&id, &patch).map(|_| ());
                match updated {
                    Ok(()) => {}
                    Err(e) if e.is_validation() => return Ok(self.reject(e)),
                    Err(e) => {
                        tracing::error!(workout_id = %id, error = %e, "Edited workout vanished");
                        self.mode = FormMode::Idle;
                        return Err(e);
                    }
                }

                self.mode = FormMode::Idle;
                self.commit();
                Ok(Outcome::Updated(id))
            }
            FormMode::Idle => Ok(Outcome::Ignored),
        }
    }

    /// Re-center the map on a workout.
    pub fn select(&mut self, id: &WorkoutId) -> Result<Outcome> {
        let workout = find(&self.store, id)?;
        if self.view.focus_on(workout) {
            Ok(Outcome::Focused(id.clone()))
        } else {
            Ok(Outcome::Ignored)
        }
    }

    /// Open the form bound to an existing workout.
    pub fn begin_edit(&mut self, id: &WorkoutId) -> Result<Outcome> {
        if self.mode.is_open() {
            tracing::debug!(workout_id = %id, "Form already open, ignoring edit");
            return Ok(Outcome::Ignored);
        }

        let prefill = FormInput::from_workout(find(&self.store, id)?);
        self.mode = FormMode::Editing { id: id.clone() };
        tracing::debug!(workout_id = %id, "Editing workout");
        Ok(Outcome::EditStarted(prefill))
    }

    /// Delete a workout after confirmation.
    pub fn delete(&mut self, id: &WorkoutId) -> Result<Outcome> {
        find(&self.store, id)?;
        if !self.prompt.confirm(CONFIRM_DELETE) {
            return Ok(Outcome::Declined);
        }

        self.store.remove(id)?;
        if self.mode == (FormMode::Editing { id: id.clone() }) {
            self.mode = FormMode::Idle;
        }
        self.commit();
        Ok(Outcome::Deleted(id.clone()))
    }

    /// Reorder workouts.
    pub fn sort(&mut self, criterion: SortCriterion) -> Outcome {
        self.store.sort_by(criterion);
        self.commit();
        Outcome::Sorted(criterion)
    }

    /// Sort by a select value; unknown values fall back to date order.
    pub fn sort_by_name(&mut self, name: &str) -> Outcome {
        let criterion = name.parse::<SortCriterion>().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to date order");
            SortCriterion::default()
        });
        self.sort(criterion)
    }

    /// Remove every workout after confirmation.
    pub fn reset(&mut self) -> Outcome {
        if !self.prompt.confirm(CONFIRM_RESET) {
            return Outcome::Declined;
        }

        let count = self.store.len();
        self.store.remove_all();
        if matches!(self.mode, FormMode::Editing { .. }) {
            self.mode = FormMode::Idle;
        }
        self.commit();
        Outcome::Cleared(count)
    }

    fn reject(&mut self, error: TrackerError) -> Outcome {
        tracing::info!(error = %error, "Rejected workout input");
        if let Some(message) = error.alert_message() {
            self.prompt.alert(message);
        }
        Outcome::Rejected(error.to_string())
    }

    /// Persist and re-render after a store mutation.
    fn commit(&mut self) {
        self.persistence.save(self.store.workouts());
        self.view.render_all(self.store.workouts());
    }
}

fn find<'a>(store: &'a WorkoutStore, id: &WorkoutId) -> Result<&'a Workout> {
    store.get(id).ok_or_else(|| {
        tracing::error!(workout_id = %id, "Workout not in store");
        TrackerError::NotFound(id.clone())
    })
}
