//! Storage error types
//!
//! Every expected failure of a storage operation is a `StoreError`.
//! Callers inspect `category()` to decide how to report it.

use super::models::{CourseId, EntityKind};
use thiserror::Error;

/// Coarse classification of storage failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The referenced entity does not exist
    NotFound,
    /// A required field is missing or empty
    ValidationFailed,
    /// A uniqueness, capacity or dependency constraint would be violated
    Conflict,
}

/// Errors returned by storage operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entity of this kind has the given id
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Collection that was searched
        kind: EntityKind,
        /// Requested id
        id: u64,
    },

    /// A required field was missing, empty or blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Another student already uses this email
    #[error("Email must be unique")]
    DuplicateEmail,

    /// Another course already uses this title
    #[error("Course title must be unique")]
    DuplicateTitle,

    /// The course has no free seat left
    #[error("Course is full")]
    CourseFull {
        /// Configured capacity of the course
        capacity: usize,
    },

    /// The course still has enrolled students
    #[error("Cannot delete course with enrolled students")]
    CourseHasEnrollments {
        /// Course that was about to be removed
        course_id: CourseId,
        /// Number of students still enrolled
        enrolled: usize,
    },
}

impl StoreError {
    /// Shorthand for a missing student
    pub fn student_not_found(id: u64) -> Self {
        StoreError::NotFound {
            kind: EntityKind::Student,
            id,
        }
    }

    /// Shorthand for a missing course
    pub fn course_not_found(id: u64) -> Self {
        StoreError::NotFound {
            kind: EntityKind::Course,
            id,
        }
    }

    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::NotFound { .. } => ErrorCategory::NotFound,
            StoreError::MissingField(_) => ErrorCategory::ValidationFailed,
            StoreError::DuplicateEmail
            | StoreError::DuplicateTitle
            | StoreError::CourseFull { .. }
            | StoreError::CourseHasEnrollments { .. } => ErrorCategory::Conflict,
        }
    }
}

/// Result alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
