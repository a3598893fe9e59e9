// Entity and payload types for the registry
// Students, courses, partial-update patches, filters and pages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a student
pub type StudentId = u64;

/// Unique identifier for a course
pub type CourseId = u64;

/// Which collection an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The students collection
    Student,
    /// The courses collection
    Course,
}

impl EntityKind {
    /// Display name used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Student => "Student",
            EntityKind::Course => "Course",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, assigned at creation
    pub id: StudentId,
    /// Display name
    pub name: String,
    /// Email address, unique across all students
    pub email: String,
}

/// Course record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier, assigned at creation
    pub id: CourseId,
    /// Course title, unique across all courses
    pub title: String,
    /// Name of the teacher
    pub teacher: String,
}

/// Payload for creating a student
///
/// Fields are optional so that a missing field surfaces as a validation
/// failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewStudent {
    /// Student name (required)
    pub name: Option<String>,
    /// Student email (required)
    pub email: Option<String>,
}

impl NewStudent {
    /// Build a payload with both fields present
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Payload for creating a course
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCourse {
    /// Course title (required)
    pub title: Option<String>,
    /// Teacher name (required)
    pub teacher: Option<String>,
}

impl NewCourse {
    /// Build a payload with both fields present
    pub fn new(title: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            teacher: Some(teacher.into()),
        }
    }
}

/// Partial update for a student
///
/// `None` leaves the field untouched, `Some` replaces it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPatch {
    /// New name
    pub name: Option<String>,
    /// New email
    pub email: Option<String>,
}

/// Partial update for a course
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoursePatch {
    /// New title
    pub title: Option<String>,
    /// New teacher
    pub teacher: Option<String>,
}

/// Student list filter, all present fields must match
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentFilter {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Case-insensitive substring of the email
    pub email: Option<String>,
}

/// Course list filter, all present fields must match
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the teacher
    pub teacher: Option<String>,
}

/// Page size used when a page is requested without a limit
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Page selection for list operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// 1-based page number, defaults to 1
    pub page: Option<usize>,
    /// Page size; defaults to `DEFAULT_PAGE_LIMIT` when only `page` is set
    pub limit: Option<usize>,
}

impl Pagination {
    /// Select page `page` of size `limit`
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Slice `items` according to this selection
    ///
    /// Without `page` and `limit` every item is kept.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let limit = match (self.page, self.limit) {
            (None, None) => return items,
            (_, Some(limit)) => limit,
            (Some(_), None) => DEFAULT_PAGE_LIMIT,
        };
        let page = self.page.unwrap_or(1).max(1);
        let start = (page - 1).saturating_mul(limit);
        items.into_iter().skip(start).take(limit).collect()
    }
}

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on the selected page
    pub items: Vec<T>,
    /// Number of matching items before pagination
    pub total: usize,
}

/// A student together with the courses they attend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentDetail {
    /// The student
    pub student: Student,
    /// Courses the student is enrolled in
    pub courses: Vec<Course>,
}

/// A course together with its enrolled students
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetail {
    /// The course
    pub course: Course,
    /// Students enrolled in the course
    pub students: Vec<Student>,
}

/// Result of a successful enroll call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollOutcome {
    /// A new enrollment row was added
    Enrolled,
    /// The pair already existed, nothing changed
    AlreadyEnrolled,
}

/// Case-insensitive substring match; an absent needle matches everything
pub(crate) fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

impl StudentFilter {
    /// Whether `student` satisfies every present field
    pub fn matches(&self, student: &Student) -> bool {
        contains_ci(&student.name, self.name.as_deref())
            && contains_ci(&student.email, self.email.as_deref())
    }
}

impl CourseFilter {
    /// Whether `course` satisfies every present field
    pub fn matches(&self, course: &Course) -> bool {
        contains_ci(&course.title, self.title.as_deref())
            && contains_ci(&course.teacher, self.teacher.as_deref())
    }
}
