//! Gradebook application library
//!
//! Exposes the driver pieces (CLI, configuration, demonstration scenario and
//! report rendering) for the binary and for integration tests. The entity
//! model itself lives in `gradebook-core`.

pub mod cli;
pub mod config;
pub mod demo;
pub mod render;
