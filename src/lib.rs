//! Tintwork - perceptual color processing service
//!
//! Runs cielab-ops operations in isolated, deadline-bounded tasks behind a
//! JSON protocol, an HTTP API and a CLI.
//! This library exposes modules for integration testing.

pub mod api;
pub mod cli;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
