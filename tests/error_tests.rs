// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_tracker::error::TrackerError;
use workout_tracker::models::WorkoutId;

#[test]
fn test_alert_message_for_user_errors() {
    let err = TrackerError::Validation("distance must be greater than zero".to_string());
    assert_eq!(err.alert_message(), Some(TrackerError::INVALID_INPUT_ALERT));
    assert!(err.is_validation());

    let err = TrackerError::GeolocationDenied("permission denied".to_string());
    assert_eq!(err.alert_message(), Some("Could not get your position"));
    assert!(!err.is_validation());
}

#[test]
fn test_no_alert_for_internal_errors() {
    let err = TrackerError::NotFound(WorkoutId::from("42"));
    assert_eq!(err.alert_message(), None);
    assert_eq!(err.to_string(), "Workout not found: 42");

    let err = TrackerError::Storage("Quota exceeded".to_string());
    assert_eq!(err.alert_message(), None);

    let err: TrackerError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
    assert!(matches!(err, TrackerError::CorruptSnapshot(_)));
    assert_eq!(err.alert_message(), None);
}
