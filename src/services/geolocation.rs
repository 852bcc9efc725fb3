// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Current-position lookup.

use crate::error::{Result, TrackerError};
use crate::models::Coords;

/// One-shot source of the user's current position.
pub trait GeolocationProvider {
    fn current_position(&mut self) -> Result<Coords>;
}

/// Provider returning a configured position, or a denial when none is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation {
    position: Option<Coords>,
}

impl FixedLocation {
    pub fn at(position: Coords) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn denied() -> Self {
        Self { position: None }
    }
}

impl GeolocationProvider for FixedLocation {
    fn current_position(&mut self) -> Result<Coords> {
        self.position
            .ok_or_else(|| TrackerError::GeolocationDenied("no position available".to_string()))
    }
}
