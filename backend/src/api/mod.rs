//! API module
//!
//! Contains HTTP request handlers for the student, course and enrollment endpoints

pub mod courses;
pub mod enrollments;
pub mod extract;
pub mod students;
