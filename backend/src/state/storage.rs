//! Storage engine
//!
//! Owns the student and course collections and the enrollment relation,
//! and enforces every business rule: required fields, unique emails and
//! titles, course capacity, and referential integrity on delete.
//!
//! The engine is synchronous and holds no locks. Callers sharing it across
//! tasks wrap it in a single lock so each operation runs serialized.

use super::enrollments::Enrollments;
use super::error::{StoreError, StoreResult};
use super::models::{
    Course, CourseDetail, CourseFilter, CourseId, CoursePatch, EnrollOutcome, NewCourse,
    NewStudent, Page, Pagination, Student, StudentDetail, StudentFilter, StudentId,
    StudentPatch,
};
use super::seed::{SEED_COURSES, SEED_STUDENTS};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Default number of seats per course
pub const DEFAULT_COURSE_CAPACITY: usize = 3;

/// Business-rule settings for the storage engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageConfig {
    /// Maximum concurrent enrollments per course; `None` means unlimited
    pub course_capacity: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            course_capacity: Some(DEFAULT_COURSE_CAPACITY),
        }
    }
}

/// In-memory registry of students, courses and enrollments
#[derive(Debug, Clone)]
pub struct Storage {
    /// Ids grow monotonically, so key order is insertion order
    students: BTreeMap<StudentId, Student>,
    courses: BTreeMap<CourseId, Course>,
    enrollments: Enrollments,
    next_student_id: StudentId,
    next_course_id: CourseId,
    config: StorageConfig,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new(StorageConfig::default())
    }
}

impl Storage {
    /// Create an empty storage with the given rules
    pub fn new(config: StorageConfig) -> Self {
        Self {
            students: BTreeMap::new(),
            courses: BTreeMap::new(),
            enrollments: Enrollments::new(),
            next_student_id: 1,
            next_course_id: 1,
            config,
        }
    }

    /// Create a storage already loaded with the seed dataset
    pub fn seeded(config: StorageConfig) -> Self {
        let mut storage = Self::new(config);
        storage.seed();
        storage
    }

    /// Clear every collection and restart the id sequences
    pub fn reset(&mut self) {
        self.students.clear();
        self.courses.clear();
        self.enrollments.clear();
        self.next_student_id = 1;
        self.next_course_id = 1;
        debug!("Storage reset");
    }

    /// Replace the contents with the fixed seed dataset
    pub fn seed(&mut self) {
        self.reset();
        for (name, email) in SEED_STUDENTS {
            self.insert_student(name.to_string(), email.to_string());
        }
        for (title, teacher) in SEED_COURSES {
            self.insert_course(title.to_string(), teacher.to_string());
        }
        info!(
            students = self.students.len(),
            courses = self.courses.len(),
            "Storage seeded"
        );
    }

    /// Number of students
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of courses
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of enrollment rows
    pub fn enrollment_count(&self) -> usize {
        self.enrollments.len()
    }

    // ----- students -----

    /// List students matching `filter`, then select a page
    pub fn list_students(&self, filter: &StudentFilter, pagination: Pagination) -> Page<Student> {
        let matching: Vec<Student> = self
            .students
            .values()
            .filter(|student| filter.matches(student))
            .cloned()
            .collect();
        let total = matching.len();
        Page {
            items: pagination.apply(matching),
            total,
        }
    }

    /// Get a student and the courses they are enrolled in
    pub fn student(&self, id: StudentId) -> StoreResult<StudentDetail> {
        let student = self
            .students
            .get(&id)
            .ok_or_else(|| StoreError::student_not_found(id))?;
        let courses = self
            .enrollments
            .courses_of(id)
            .filter_map(|course_id| self.courses.get(&course_id).cloned())
            .collect();
        Ok(StudentDetail {
            student: student.clone(),
            courses,
        })
    }

    /// Validate and insert a new student
    pub fn create_student(&mut self, payload: NewStudent) -> StoreResult<Student> {
        let name = required("name", payload.name)?;
        let email = required("email", payload.email)?;
        if self.email_taken(&email, None) {
            return Err(StoreError::DuplicateEmail);
        }
        let student = self.insert_student(name, email);
        info!(student_id = student.id, "Student created");
        Ok(student)
    }

    /// Apply a partial update to a student
    ///
    /// All checks run before any field changes, so a failed update leaves
    /// the student untouched.
    pub fn update_student(&mut self, id: StudentId, patch: StudentPatch) -> StoreResult<Student> {
        if !self.students.contains_key(&id) {
            return Err(StoreError::student_not_found(id));
        }
        let name = patch.name.map(|name| required("name", Some(name))).transpose()?;
        let email = patch
            .email
            .map(|email| required("email", Some(email)))
            .transpose()?;
        if let Some(email) = &email {
            if self.email_taken(email, Some(id)) {
                return Err(StoreError::DuplicateEmail);
            }
        }

        let student = self
            .students
            .get_mut(&id)
            .ok_or_else(|| StoreError::student_not_found(id))?;
        if let Some(name) = name {
            student.name = name;
        }
        if let Some(email) = email {
            student.email = email;
        }
        debug!(student_id = id, "Student updated");
        Ok(student.clone())
    }

    /// Remove a student and every enrollment referencing it
    pub fn remove_student(&mut self, id: StudentId) -> StoreResult<()> {
        self.students
            .remove(&id)
            .ok_or_else(|| StoreError::student_not_found(id))?;
        let dropped = self.enrollments.remove_student(id);
        info!(student_id = id, enrollments_dropped = dropped, "Student removed");
        Ok(())
    }

    // ----- courses -----

    /// List courses matching `filter`, then select a page
    pub fn list_courses(&self, filter: &CourseFilter, pagination: Pagination) -> Page<Course> {
        let matching: Vec<Course> = self
            .courses
            .values()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect();
        let total = matching.len();
        Page {
            items: pagination.apply(matching),
            total,
        }
    }

    /// Get a course and its enrolled students
    pub fn course(&self, id: CourseId) -> StoreResult<CourseDetail> {
        let course = self
            .courses
            .get(&id)
            .ok_or_else(|| StoreError::course_not_found(id))?;
        Ok(CourseDetail {
            course: course.clone(),
            students: self.collect_students(id),
        })
    }

    /// Students enrolled in a course
    pub fn enrolled_students(&self, id: CourseId) -> StoreResult<Vec<Student>> {
        if !self.courses.contains_key(&id) {
            return Err(StoreError::course_not_found(id));
        }
        Ok(self.collect_students(id))
    }

    /// Validate and insert a new course
    pub fn create_course(&mut self, payload: NewCourse) -> StoreResult<Course> {
        let title = required("title", payload.title)?;
        let teacher = required("teacher", payload.teacher)?;
        if self.title_taken(&title, None) {
            return Err(StoreError::DuplicateTitle);
        }
        let course = self.insert_course(title, teacher);
        info!(course_id = course.id, "Course created");
        Ok(course)
    }

    /// Apply a partial update to a course
    pub fn update_course(&mut self, id: CourseId, patch: CoursePatch) -> StoreResult<Course> {
        if !self.courses.contains_key(&id) {
            return Err(StoreError::course_not_found(id));
        }
        let title = patch
            .title
            .map(|title| required("title", Some(title)))
            .transpose()?;
        let teacher = patch
            .teacher
            .map(|teacher| required("teacher", Some(teacher)))
            .transpose()?;
        if let Some(title) = &title {
            if self.title_taken(title, Some(id)) {
                return Err(StoreError::DuplicateTitle);
            }
        }

        let course = self
            .courses
            .get_mut(&id)
            .ok_or_else(|| StoreError::course_not_found(id))?;
        if let Some(title) = title {
            course.title = title;
        }
        if let Some(teacher) = teacher {
            course.teacher = teacher;
        }
        debug!(course_id = id, "Course updated");
        Ok(course.clone())
    }

    /// Remove a course that has no enrolled students
    pub fn remove_course(&mut self, id: CourseId) -> StoreResult<()> {
        if !self.courses.contains_key(&id) {
            return Err(StoreError::course_not_found(id));
        }
        let enrolled = self.enrollments.course_len(id);
        if enrolled > 0 {
            debug!(course_id = id, enrolled, "Refusing to remove course");
            return Err(StoreError::CourseHasEnrollments {
                course_id: id,
                enrolled,
            });
        }
        self.courses.remove(&id);
        info!(course_id = id, "Course removed");
        Ok(())
    }

    // ----- enrollments -----

    /// Enroll a student in a course
    ///
    /// Enrolling an existing pair succeeds without adding a row.
    pub fn enroll(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> StoreResult<EnrollOutcome> {
        self.ensure_pair_exists(student_id, course_id)?;
        if self.enrollments.contains(student_id, course_id) {
            return Ok(EnrollOutcome::AlreadyEnrolled);
        }
        if let Some(capacity) = self.config.course_capacity {
            if self.enrollments.course_len(course_id) >= capacity {
                debug!(course_id, capacity, "Course is full");
                return Err(StoreError::CourseFull { capacity });
            }
        }
        self.enrollments.insert(student_id, course_id);
        info!(student_id, course_id, "Student enrolled");
        Ok(EnrollOutcome::Enrolled)
    }

    /// Remove a student from a course
    ///
    /// Returns whether a row was removed; a missing pair is not an error.
    pub fn unenroll(&mut self, student_id: StudentId, course_id: CourseId) -> StoreResult<bool> {
        self.ensure_pair_exists(student_id, course_id)?;
        let removed = self.enrollments.remove(student_id, course_id);
        info!(student_id, course_id, removed, "Student unenrolled");
        Ok(removed)
    }

    // ----- helpers -----

    fn insert_student(&mut self, name: String, email: String) -> Student {
        let id = self.next_student_id;
        self.next_student_id += 1;
        let student = Student { id, name, email };
        self.students.insert(id, student.clone());
        student
    }

    fn insert_course(&mut self, title: String, teacher: String) -> Course {
        let id = self.next_course_id;
        self.next_course_id += 1;
        let course = Course { id, title, teacher };
        self.courses.insert(id, course.clone());
        course
    }

    fn email_taken(&self, email: &str, except: Option<StudentId>) -> bool {
        self.students
            .values()
            .any(|student| student.email == email && Some(student.id) != except)
    }

    fn title_taken(&self, title: &str, except: Option<CourseId>) -> bool {
        self.courses
            .values()
            .any(|course| course.title == title && Some(course.id) != except)
    }

    fn ensure_pair_exists(&self, student_id: StudentId, course_id: CourseId) -> StoreResult<()> {
        if !self.students.contains_key(&student_id) {
            return Err(StoreError::student_not_found(student_id));
        }
        if !self.courses.contains_key(&course_id) {
            return Err(StoreError::course_not_found(course_id));
        }
        Ok(())
    }

    fn collect_students(&self, course_id: CourseId) -> Vec<Student> {
        self.enrollments
            .students_of(course_id)
            .filter_map(|student_id| self.students.get(&student_id).cloned())
            .collect()
    }
}

/// Require a present, non-blank field value
fn required(field: &'static str, value: Option<String>) -> StoreResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(StoreError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::error::ErrorCategory;
    use crate::state::models::EntityKind;

    fn seeded() -> Storage {
        Storage::seeded(StorageConfig::default())
    }

    fn all_students(storage: &Storage) -> Vec<Student> {
        storage
            .list_students(&StudentFilter::default(), Pagination::default())
            .items
    }

    fn all_courses(storage: &Storage) -> Vec<Course> {
        storage
            .list_courses(&CourseFilter::default(), Pagination::default())
            .items
    }

    #[test]
    fn test_seed_baseline() {
        let storage = seeded();
        let students = all_students(&storage);
        assert_eq!(students.len(), 3);
        assert_eq!(students[0].name, "Alice");
        assert_eq!(students[0].id, 1);
        assert!(all_courses(&storage).len() >= 2);
        assert_eq!(storage.enrollment_count(), 0);
    }

    #[test]
    fn test_seed_twice_restarts_ids() {
        let mut storage = seeded();
        storage
            .create_student(NewStudent::new("David", "david@example.com"))
            .unwrap();
        storage.enroll(1, 1).unwrap();

        storage.seed();
        assert_eq!(storage.student_count(), 3);
        assert_eq!(storage.enrollment_count(), 0);
        assert_eq!(all_students(&storage)[2].id, 3);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut storage = seeded();
        storage.reset();
        storage.reset();
        assert_eq!(storage.student_count(), 0);
        assert_eq!(storage.course_count(), 0);
        assert_eq!(storage.enrollment_count(), 0);
    }

    #[test]
    fn test_create_student() {
        let mut storage = seeded();
        let student = storage
            .create_student(NewStudent::new("David", "david@example.com"))
            .unwrap();
        assert_eq!(student.name, "David");
        assert_eq!(student.id, 4);
        assert_eq!(storage.student_count(), 4);
    }

    #[test]
    fn test_create_student_duplicate_email() {
        let mut storage = seeded();
        let err = storage
            .create_student(NewStudent::new("Eve", "alice@example.com"))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail);
        assert_eq!(err.to_string(), "Email must be unique");
        assert_eq!(storage.student_count(), 3);
    }

    #[test]
    fn test_email_uniqueness_is_case_exact() {
        let mut storage = seeded();
        assert!(storage
            .create_student(NewStudent::new("Alice Again", "ALICE@example.com"))
            .is_ok());
    }

    #[test]
    fn test_create_student_requires_fields() {
        let mut storage = seeded();
        let err = storage
            .create_student(NewStudent {
                name: Some("Only Name".to_string()),
                email: None,
            })
            .unwrap_err();
        assert_eq!(err, StoreError::MissingField("email"));
        assert_eq!(err.category(), ErrorCategory::ValidationFailed);

        let err = storage
            .create_student(NewStudent::new("   ", "blank@example.com"))
            .unwrap_err();
        assert_eq!(err, StoreError::MissingField("name"));
        assert_eq!(storage.student_count(), 3);
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut storage = seeded();
        storage.remove_student(3).unwrap();
        let student = storage
            .create_student(NewStudent::new("David", "david@example.com"))
            .unwrap();
        assert_eq!(student.id, 4);
    }

    #[test]
    fn test_update_student_self_email() {
        let mut storage = seeded();
        let updated = storage
            .update_student(
                1,
                StudentPatch {
                    name: None,
                    email: Some("alice@example.com".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated.email, "alice@example.com");
        assert_eq!(updated.name, "Alice");
    }

    #[test]
    fn test_update_student_name_and_email() {
        let mut storage = seeded();
        let updated = storage
            .update_student(
                1,
                StudentPatch {
                    name: Some("Alicia".to_string()),
                    email: Some("alicia@example.com".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.email, "alicia@example.com");
        assert_eq!(storage.student(1).unwrap().student, updated);
    }

    #[test]
    fn test_update_student_duplicate_email_changes_nothing() {
        let mut storage = seeded();
        let err = storage
            .update_student(
                1,
                StudentPatch {
                    name: Some("Renamed".to_string()),
                    email: Some("bob@example.com".to_string()),
                },
            )
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateEmail);
        assert_eq!(storage.student(1).unwrap().student.name, "Alice");
    }

    #[test]
    fn test_update_student_rejects_cleared_field() {
        let mut storage = seeded();
        let err = storage
            .update_student(
                2,
                StudentPatch {
                    name: Some(String::new()),
                    email: None,
                },
            )
            .unwrap_err();
        assert_eq!(err, StoreError::MissingField("name"));
    }

    #[test]
    fn test_update_missing_student() {
        let mut storage = seeded();
        let err = storage
            .update_student(9999, StudentPatch::default())
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn test_create_course_duplicate_title() {
        let mut storage = seeded();
        let err = storage
            .create_course(NewCourse::new("Math", "Someone"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Course title must be unique");
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(storage.course_count(), 3);
    }

    #[test]
    fn test_create_course() {
        let mut storage = seeded();
        let course = storage
            .create_course(NewCourse::new("Biology", "Dr. Wilson"))
            .unwrap();
        assert_eq!(course.title, "Biology");
        assert_eq!(course.teacher, "Dr. Wilson");
        assert_eq!(storage.course(course.id).unwrap().course, course);
    }

    #[test]
    fn test_update_course_partial() {
        let mut storage = seeded();
        let updated = storage
            .update_course(
                1,
                CoursePatch {
                    title: Some("Updated Title Only".to_string()),
                    teacher: None,
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Updated Title Only");
        assert_eq!(updated.teacher, "Mr. Smith");

        let updated = storage
            .update_course(
                1,
                CoursePatch {
                    title: None,
                    teacher: Some("Updated Teacher Only".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Updated Title Only");
        assert_eq!(updated.teacher, "Updated Teacher Only");
    }

    #[test]
    fn test_update_course_title_uniqueness() {
        let mut storage = seeded();
        let err = storage
            .update_course(
                1,
                CoursePatch {
                    title: Some("Physics".to_string()),
                    teacher: None,
                },
            )
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateTitle);

        let same = storage
            .update_course(
                1,
                CoursePatch {
                    title: Some("Math".to_string()),
                    teacher: None,
                },
            )
            .unwrap();
        assert_eq!(same.title, "Math");
    }

    #[test]
    fn test_remove_student() {
        let mut storage = seeded();
        assert!(storage.remove_student(1).is_ok());
        assert_eq!(storage.student_count(), 2);
        assert_eq!(
            storage.remove_student(1).unwrap_err(),
            StoreError::NotFound {
                kind: EntityKind::Student,
                id: 1
            }
        );
    }

    #[test]
    fn test_remove_student_cascades_enrollments() {
        let mut storage = seeded();
        storage.enroll(1, 1).unwrap();
        storage.enroll(1, 2).unwrap();
        storage.enroll(2, 1).unwrap();

        storage.remove_student(1).unwrap();
        assert_eq!(storage.enrollment_count(), 1);
        let course = storage.course(1).unwrap();
        assert!(course.students.iter().all(|student| student.id != 1));
        assert!(storage.course(2).unwrap().students.is_empty());
        // Course 2 lost its only student and can now be removed
        assert!(storage.remove_course(2).is_ok());
    }

    #[test]
    fn test_remove_course_with_enrollments() {
        let mut storage = seeded();
        storage.enroll(1, 1).unwrap();

        let err = storage.remove_course(1).unwrap_err();
        assert_eq!(
            err,
            StoreError::CourseHasEnrollments {
                course_id: 1,
                enrolled: 1
            }
        );
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(storage.course_count(), 3);

        assert!(storage.unenroll(1, 1).unwrap());
        storage.remove_course(1).unwrap();
        assert_eq!(storage.course_count(), 2);
        assert_eq!(
            storage.course(1).unwrap_err().category(),
            ErrorCategory::NotFound
        );
    }

    #[test]
    fn test_remove_missing_course() {
        let mut storage = seeded();
        assert_eq!(
            storage.remove_course(9999).unwrap_err(),
            StoreError::course_not_found(9999)
        );
    }

    #[test]
    fn test_course_capacity() {
        let mut storage = seeded();
        storage
            .create_student(NewStudent::new("Extra", "extra@example.com"))
            .unwrap();
        storage.enroll(1, 1).unwrap();
        storage.enroll(2, 1).unwrap();
        storage.enroll(3, 1).unwrap();

        let err = storage.enroll(4, 1).unwrap_err();
        assert_eq!(err.to_string(), "Course is full");
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(storage.course(1).unwrap().students.len(), 3);

        // Re-enrolling someone already in a full course is still a success
        assert_eq!(storage.enroll(1, 1).unwrap(), EnrollOutcome::AlreadyEnrolled);
    }

    #[test]
    fn test_unlimited_capacity() {
        let mut storage = Storage::seeded(StorageConfig {
            course_capacity: None,
        });
        storage
            .create_student(NewStudent::new("Extra", "extra@example.com"))
            .unwrap();
        for student_id in 1..=4 {
            assert_eq!(storage.enroll(student_id, 1).unwrap(), EnrollOutcome::Enrolled);
        }
        assert_eq!(storage.course(1).unwrap().students.len(), 4);
    }

    #[test]
    fn test_enroll_is_idempotent() {
        let mut storage = seeded();
        assert_eq!(storage.enroll(1, 1).unwrap(), EnrollOutcome::Enrolled);
        assert_eq!(storage.enroll(1, 1).unwrap(), EnrollOutcome::AlreadyEnrolled);
        assert_eq!(storage.enrollment_count(), 1);
    }

    #[test]
    fn test_enroll_unknown_entities() {
        let mut storage = seeded();
        assert_eq!(
            storage.enroll(9999, 1).unwrap_err(),
            StoreError::student_not_found(9999)
        );
        assert_eq!(
            storage.enroll(1, 9999).unwrap_err(),
            StoreError::course_not_found(9999)
        );
        assert_eq!(storage.enrollment_count(), 0);
    }

    #[test]
    fn test_unenroll_missing_pair_succeeds() {
        let mut storage = seeded();
        assert!(!storage.unenroll(1, 1).unwrap());
        assert_eq!(
            storage.unenroll(1, 9999).unwrap_err().category(),
            ErrorCategory::NotFound
        );
    }

    #[test]
    fn test_get_details() {
        let mut storage = seeded();
        storage.enroll(2, 1).unwrap();
        storage.enroll(2, 3).unwrap();

        let detail = storage.student(2).unwrap();
        assert_eq!(detail.student.name, "Bob");
        let titles: Vec<&str> = detail.courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Math", "History"]);

        let course = storage.course(1).unwrap();
        assert_eq!(course.students.len(), 1);
        assert_eq!(course.students[0].name, "Bob");
        assert_eq!(storage.enrolled_students(1).unwrap(), course.students);
    }

    #[test]
    fn test_get_unknown() {
        let storage = seeded();
        assert_eq!(
            storage.student(9999).unwrap_err(),
            StoreError::student_not_found(9999)
        );
        assert_eq!(
            storage.course(9999).unwrap_err(),
            StoreError::course_not_found(9999)
        );
        assert!(storage.enrolled_students(9999).is_err());
    }

    #[test]
    fn test_pagination_beyond_range() {
        let storage = seeded();
        let page = storage.list_students(&StudentFilter::default(), Pagination::new(100, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_pagination_slices_in_insertion_order() {
        let storage = seeded();
        let page = storage.list_students(&StudentFilter::default(), Pagination::new(2, 2));
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Charlie");
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let storage = seeded();
        let filter = StudentFilter {
            name: Some("ali".to_string()),
            email: None,
        };
        let page = storage.list_students(&filter, Pagination::default());
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Alice");
    }

    #[test]
    fn test_filter_fields_combine_with_and() {
        let storage = seeded();
        let both = StudentFilter {
            name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
        };
        assert_eq!(storage.list_students(&both, Pagination::new(1, 1)).total, 1);

        let disjoint = StudentFilter {
            name: Some("Alice".to_string()),
            email: Some("bob".to_string()),
        };
        let page = storage.list_students(&disjoint, Pagination::default());
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_course_filter() {
        let storage = seeded();
        let filter = CourseFilter {
            title: Some("math".to_string()),
            teacher: Some("SMITH".to_string()),
        };
        let page = storage.list_courses(&filter, Pagination::new(1, 10));
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "Math");

        let filter = CourseFilter {
            title: Some("Math".to_string()),
            teacher: Some("Someone".to_string()),
        };
        assert_eq!(storage.list_courses(&filter, Pagination::default()).total, 0);
    }
}
