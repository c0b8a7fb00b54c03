use serde::{Deserialize, Serialize};
use tracing::warn;

use super::next_key;

/// Opaque identity of a [`Course`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseKey(u64);

/// A course offering
///
/// Courses are compared by identity: two courses built from the same
/// fields are different courses, while a clone refers to the same one.
/// `course_code` is meant to be unique but nothing enforces it.
#[derive(Debug, Clone)]
pub struct Course {
    key: CourseKey,
    course_name: String,
    course_code: String,
    credits: i64,
}

/// Snapshot of a [`Course`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub course_name: String,
    pub course_code: String,
    pub credits: i64,
}

impl Course {
    /// Non-positive credits are accepted but logged, since they skew or
    /// neutralise the course's weight in GPA averaging.
    pub fn new(course_name: impl Into<String>, course_code: impl Into<String>, credits: i64) -> Self {
        let course = Self {
            key: CourseKey(next_key()),
            course_name: course_name.into(),
            course_code: course_code.into(),
            credits,
        };
        if credits <= 0 {
            warn!(course_code = %course.course_code, credits, "Course created with non-positive credits");
        }
        course
    }

    pub fn key(&self) -> CourseKey {
        self.key
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn credits(&self) -> i64 {
        self.credits
    }

    pub fn details(&self) -> CourseDetails {
        CourseDetails {
            course_name: self.course_name.clone(),
            course_code: self.course_code.clone(),
            credits: self.credits,
        }
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Course {}

impl std::hash::Hash for Course {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({} cr)", self.course_code, self.course_name, self.credits)
    }
}
