//! Ski Station - Course Registration Engine
//!
//! This crate implements the admission decision engine for week-indexed,
//! capacity-limited ski courses, plus the subscription validity window
//! arithmetic that goes with enrollment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
