//! Student API handlers
//!
//! Contains HTTP request handlers for student CRUD operations.

use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::error::AppError;
use crate::state::{
    NewStudent, Pagination, SharedStorage, Student, StudentDetail, StudentFilter, StudentId,
    StudentPatch,
};
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

/// Query parameters accepted by `GET /students`
#[derive(Debug, Default, Deserialize)]
pub struct StudentListQuery {
    /// Name substring filter
    pub name: Option<String>,
    /// Email substring filter
    pub email: Option<String>,
    /// 1-based page number
    pub page: Option<usize>,
    /// Page size
    pub limit: Option<usize>,
}

impl StudentListQuery {
    fn into_parts(self) -> (StudentFilter, Pagination) {
        (
            StudentFilter {
                name: self.name,
                email: self.email,
            },
            Pagination {
                page: self.page,
                limit: self.limit,
            },
        )
    }
}

/// Students list response
#[derive(Debug, Serialize)]
pub struct StudentsListResponse {
    /// Students on the requested page
    pub students: Vec<Student>,
    /// Number of matching students before pagination
    pub total: usize,
}

/// GET /students - List students with optional filters and pagination
pub async fn list_students(
    State(state): State<SharedStorage>,
    ApiQuery(query): ApiQuery<StudentListQuery>,
) -> Result<Json<StudentsListResponse>, AppError> {
    let (filter, pagination) = query.into_parts();
    let state = state.read().await;
    let page = state.list_students(&filter, pagination);

    Ok(Json(StudentsListResponse {
        students: page.items,
        total: page.total,
    }))
}

/// GET /students/:id - Get a student and their courses
pub async fn get_student(
    State(state): State<SharedStorage>,
    ApiPath(id): ApiPath<StudentId>,
) -> Result<Json<StudentDetail>, AppError> {
    let state = state.read().await;
    Ok(Json(state.student(id)?))
}

/// POST /students - Create a new student
pub async fn create_student(
    State(state): State<SharedStorage>,
    ApiJson(request): ApiJson<NewStudent>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let mut state = state.write().await;
    let student = state.create_student(request)?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /students/:id - Update a student
pub async fn update_student(
    State(state): State<SharedStorage>,
    ApiPath(id): ApiPath<StudentId>,
    ApiJson(request): ApiJson<StudentPatch>,
) -> Result<Json<Student>, AppError> {
    let mut state = state.write().await;
    Ok(Json(state.update_student(id, request)?))
}

/// DELETE /students/:id - Delete a student and its enrollments
pub async fn delete_student(
    State(state): State<SharedStorage>,
    ApiPath(id): ApiPath<StudentId>,
) -> Result<StatusCode, AppError> {
    let mut state = state.write().await;
    state.remove_student(id)?;

    Ok(StatusCode::NO_CONTENT)
}
