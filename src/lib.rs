//! Pigment - RGB/HSV color toolkit
//!
//! Command line companion for the `pigment-color` crate: a guided demo,
//! one-off conversions, and a fuzz harness with crash-file replay.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
