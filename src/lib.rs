// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Tracker: record runs and rides on a map
//!
//! This crate provides the workout model, snapshot persistence, the
//! ordered workout store, and the controller that keeps the workout list
//! and map markers in sync with it.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use services::controller::Tracker;
