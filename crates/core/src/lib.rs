//! Gradebook Core - the academic records model with no I/O
//!
//! This crate contains the entities (people, courses, students, teachers),
//! their business rules, the error taxonomy and the ports (interfaces) the
//! driver plugs into. Rendering, configuration and logging setup live in
//! the `gradebook` binary crate.

pub mod date;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for ergonomics
pub use date::parse_date;
pub use domain::*;
pub use error::*;
