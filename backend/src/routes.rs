//! HTTP routing
//!
//! Assembles the axum `Router` with every endpoint, the request id
//! middleware, tracing, CORS, and the JSON 404 fallback.

use crate::api;
use crate::error::AppError;
use crate::state::SharedStorage;
use axum::{
    extract::Request,
    http::{Method, Uri},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Build the application router around a shared storage
pub fn router(state: SharedStorage) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Students
        .route(
            "/students",
            get(api::students::list_students).post(api::students::create_student),
        )
        .route(
            "/students/:id",
            get(api::students::get_student)
                .put(api::students::update_student)
                .delete(api::students::delete_student),
        )
        // Courses
        .route(
            "/courses",
            get(api::courses::list_courses).post(api::courses::create_course),
        )
        .route(
            "/courses/:id",
            get(api::courses::get_course)
                .put(api::courses::update_course)
                .delete(api::courses::delete_course),
        )
        .route(
            "/courses/:id/students",
            get(api::courses::list_course_students),
        )
        // Enrollments
        .route(
            "/courses/:id/students/:student_id",
            post(api::enrollments::enroll_student).delete(api::enrollments::unenroll_student),
        )
        .fallback(route_not_found)
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound(format!("{} {}", method, uri.path()))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
