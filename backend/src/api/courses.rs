//! Course API handlers
//!
//! Contains HTTP request handlers for course CRUD operations and the
//! nested list of enrolled students.

use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::students::StudentsListResponse;
use crate::error::AppError;
use crate::state::{
    Course, CourseDetail, CourseFilter, CourseId, CoursePatch, NewCourse, Pagination,
    SharedStorage,
};
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

/// Query parameters accepted by `GET /courses`
#[derive(Debug, Default, Deserialize)]
pub struct CourseListQuery {
    /// Title substring filter
    pub title: Option<String>,
    /// Teacher substring filter
    pub teacher: Option<String>,
    /// 1-based page number
    pub page: Option<usize>,
    /// Page size
    pub limit: Option<usize>,
}

/// Courses list response
#[derive(Debug, Serialize)]
pub struct CoursesListResponse {
    /// Courses on the requested page
    pub courses: Vec<Course>,
    /// Number of matching courses before pagination
    pub total: usize,
}

/// GET /courses - List courses with optional filters and pagination
pub async fn list_courses(
    State(state): State<SharedStorage>,
    ApiQuery(query): ApiQuery<CourseListQuery>,
) -> Result<Json<CoursesListResponse>, AppError> {
    let filter = CourseFilter {
        title: query.title,
        teacher: query.teacher,
    };
    let pagination = Pagination {
        page: query.page,
        limit: query.limit,
    };
    let state = state.read().await;
    let page = state.list_courses(&filter, pagination);

    Ok(Json(CoursesListResponse {
        courses: page.items,
        total: page.total,
    }))
}

/// GET /courses/:id - Get a course and its students
pub async fn get_course(
    State(state): State<SharedStorage>,
    ApiPath(id): ApiPath<CourseId>,
) -> Result<Json<CourseDetail>, AppError> {
    let state = state.read().await;
    Ok(Json(state.course(id)?))
}

/// GET /courses/:id/students - List the students enrolled in a course
pub async fn list_course_students(
    State(state): State<SharedStorage>,
    ApiPath(id): ApiPath<CourseId>,
) -> Result<Json<StudentsListResponse>, AppError> {
    let state = state.read().await;
    let students = state.enrolled_students(id)?;

    Ok(Json(StudentsListResponse {
        total: students.len(),
        students,
    }))
}

/// POST /courses - Create a new course
pub async fn create_course(
    State(state): State<SharedStorage>,
    ApiJson(request): ApiJson<NewCourse>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let mut state = state.write().await;
    let course = state.create_course(request)?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// PUT /courses/:id - Update a course
pub async fn update_course(
    State(state): State<SharedStorage>,
    ApiPath(id): ApiPath<CourseId>,
    ApiJson(request): ApiJson<CoursePatch>,
) -> Result<Json<Course>, AppError> {
    let mut state = state.write().await;
    Ok(Json(state.update_course(id, request)?))
}

/// DELETE /courses/:id - Delete a course without enrolled students
pub async fn delete_course(
    State(state): State<SharedStorage>,
    ApiPath(id): ApiPath<CourseId>,
) -> Result<StatusCode, AppError> {
    let mut state = state.write().await;
    state.remove_course(id)?;

    Ok(StatusCode::NO_CONTENT)
}
