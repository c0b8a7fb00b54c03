use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Describe;
use crate::error::{CoreError, Result};

/// Identity attributes shared by students and teachers
///
/// Construction stores the given values as-is; invariants are enforced at
/// the setters only, and a rejected write leaves the previous value.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
    age: i64,
}

/// Snapshot of a [`Person`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub name: String,
    pub age: i64,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    /// Replace the name; blank or whitespace-only names are rejected.
    pub fn set_name(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if value.trim().is_empty() {
            warn!(current = %self.name, "Rejected empty name");
            return Err(CoreError::validation("name", "name cannot be empty"));
        }
        debug!(from = %self.name, to = %value, "Name updated");
        self.name = value;
        Ok(())
    }

    /// Replace the age; anything below 1 is rejected.
    pub fn set_age(&mut self, value: i64) -> Result<()> {
        if value < 1 {
            warn!(name = %self.name, value, "Rejected invalid age");
            return Err(CoreError::validation(
                "age",
                format!("age must be at least 1, got {value}"),
            ));
        }
        debug!(name = %self.name, from = self.age, to = value, "Age updated");
        self.age = value;
        Ok(())
    }
}

impl Describe for Person {
    type Info = PersonInfo;

    fn info(&self) -> PersonInfo {
        PersonInfo {
            name: self.name.clone(),
            age: self.age,
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}
