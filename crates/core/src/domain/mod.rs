pub mod course;
pub mod grade;
pub mod person;
pub mod student;
pub mod teacher;

// Re-exports for convenience
pub use course::*;
pub use grade::*;
pub use person::*;
pub use student::*;
pub use teacher::*;

use std::sync::atomic::{AtomicU64, Ordering};

/// Capability to describe an entity as a point-in-time snapshot.
///
/// Snapshots of derived entities embed the [`PersonInfo`] of their base
/// person, so base fields are never dropped or renamed.
pub trait Describe {
    type Info;

    fn info(&self) -> Self::Info;
}

/// Allocates process-unique identity keys for entities compared by identity.
pub(crate) fn next_key() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}
