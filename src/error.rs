// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tracker error types with consistent user-facing messages.

use crate::models::WorkoutId;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Invalid workout input: {0}")]
    Validation(String),

    #[error("Workout not found: {0}")]
    NotFound(WorkoutId),

    #[error("Geolocation unavailable: {0}")]
    GeolocationDenied(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Corrupt workout snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl TrackerError {
    /// Alert shown when form input fails the numeric checks.
    pub const INVALID_INPUT_ALERT: &'static str = "Inputs have to be positive numbers";

    /// Alert shown when the current position cannot be determined.
    pub const NO_POSITION_ALERT: &'static str = "Could not get your position";

    /// Message to surface to the user, if this error is one the user can act on.
    ///
    /// Errors without an alert are invariant violations or storage problems
    /// and are only logged.
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            TrackerError::Validation(_) => Some(Self::INVALID_INPUT_ALERT),
            TrackerError::GeolocationDenied(_) => Some(Self::NO_POSITION_ALERT),
            TrackerError::NotFound(_)
            | TrackerError::Storage(_)
            | TrackerError::CorruptSnapshot(_)
            | TrackerError::Internal(_) => None,
        }
    }

    /// Whether this error was caused by input the user can correct.
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::Validation(_))
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::CorruptSnapshot(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
