//! Enrollment API handlers
//!
//! `POST` and `DELETE` on `/courses/:course_id/students/:student_id`.

use crate::api::extract::ApiPath;
use crate::error::AppError;
use crate::state::{CourseId, EnrollOutcome, SharedStorage, StudentId};
use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

/// Enrollment response
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    /// Human-readable message
    pub message: String,
    /// Student in the pair
    pub student_id: StudentId,
    /// Course in the pair
    pub course_id: CourseId,
    /// Whether the pair is now enrolled
    pub enrolled: bool,
}

/// POST /courses/:course_id/students/:student_id - Enroll a student
///
/// Answers 201 for a new enrollment and 200 when the pair already existed.
pub async fn enroll_student(
    State(state): State<SharedStorage>,
    ApiPath((course_id, student_id)): ApiPath<(CourseId, StudentId)>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), AppError> {
    let mut state = state.write().await;
    let outcome = state.enroll(student_id, course_id)?;

    let (status, message) = match outcome {
        EnrollOutcome::Enrolled => (StatusCode::CREATED, "Student enrolled successfully"),
        EnrollOutcome::AlreadyEnrolled => (StatusCode::OK, "Student already enrolled"),
    };

    Ok((
        status,
        Json(EnrollmentResponse {
            message: message.to_string(),
            student_id,
            course_id,
            enrolled: true,
        }),
    ))
}

/// DELETE /courses/:course_id/students/:student_id - Unenroll a student
pub async fn unenroll_student(
    State(state): State<SharedStorage>,
    ApiPath((course_id, student_id)): ApiPath<(CourseId, StudentId)>,
) -> Result<Json<EnrollmentResponse>, AppError> {
    let mut state = state.write().await;
    let removed = state.unenroll(student_id, course_id)?;

    let message = if removed {
        "Student unenrolled successfully"
    } else {
        "Student was not enrolled"
    };

    Ok(Json(EnrollmentResponse {
        message: message.to_string(),
        student_id,
        course_id,
        enrolled: false,
    }))
}
