use thiserror::Error;

/// Core domain errors
///
/// Every error is raised before the requested mutation is applied, so the
/// entity is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Student {student_id} is already enrolled in course {course_code}")]
    DuplicateEnrollment {
        student_id: String,
        course_code: String,
    },

    #[error("Student {student_id} is not enrolled in course {course_code}")]
    NotEnrolled {
        student_id: String,
        course_code: String,
    },

    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },
}

impl CoreError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
