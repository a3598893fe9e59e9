// State management module
// Student/course storage engine, its models, and its error types

pub mod enrollments;
pub mod error;
pub mod models;
pub mod seed;
pub mod storage;

pub use error::{ErrorCategory, StoreError, StoreResult};
pub use models::{
    Course, CourseDetail, CourseFilter, CourseId, CoursePatch, EnrollOutcome, EntityKind,
    NewCourse, NewStudent, Page, Pagination, Student, StudentDetail, StudentFilter, StudentId,
    StudentPatch, DEFAULT_PAGE_LIMIT,
};
pub use storage::{Storage, StorageConfig, DEFAULT_COURSE_CAPACITY};

/// Storage handle shared between request handlers
pub type SharedStorage = std::sync::Arc<tokio::sync::RwLock<Storage>>;
