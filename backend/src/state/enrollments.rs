// Enrollment relation
// Adjacency sets keyed by course, with a reverse index keyed by student

use super::models::{CourseId, StudentId};
use std::collections::{BTreeMap, BTreeSet};

/// Many-to-many relation between students and courses
///
/// Both indexes always describe the same set of pairs, and empty sets are
/// pruned so `course_len` and `is_empty` stay exact.
#[derive(Debug, Clone, Default)]
pub struct Enrollments {
    by_course: BTreeMap<CourseId, BTreeSet<StudentId>>,
    by_student: BTreeMap<StudentId, BTreeSet<CourseId>>,
}

impl Enrollments {
    /// Create an empty relation
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair; adding an existing pair changes nothing
    pub fn insert(&mut self, student_id: StudentId, course_id: CourseId) {
        self.by_course
            .entry(course_id)
            .or_default()
            .insert(student_id);
        self.by_student
            .entry(student_id)
            .or_default()
            .insert(course_id);
    }

    /// Remove a pair; returns false if it was not present
    pub fn remove(&mut self, student_id: StudentId, course_id: CourseId) -> bool {
        let removed = remove_from(&mut self.by_course, course_id, student_id);
        remove_from(&mut self.by_student, student_id, course_id);
        removed
    }

    /// Whether the pair exists
    pub fn contains(&self, student_id: StudentId, course_id: CourseId) -> bool {
        self.by_course
            .get(&course_id)
            .is_some_and(|students| students.contains(&student_id))
    }

    /// Number of students enrolled in a course
    pub fn course_len(&self, course_id: CourseId) -> usize {
        self.by_course.get(&course_id).map_or(0, BTreeSet::len)
    }

    /// Students enrolled in a course, ascending
    pub fn students_of(&self, course_id: CourseId) -> impl Iterator<Item = StudentId> + '_ {
        self.by_course
            .get(&course_id)
            .into_iter()
            .flat_map(|students| students.iter().copied())
    }

    /// Courses a student attends, ascending
    pub fn courses_of(&self, student_id: StudentId) -> impl Iterator<Item = CourseId> + '_ {
        self.by_student
            .get(&student_id)
            .into_iter()
            .flat_map(|courses| courses.iter().copied())
    }

    /// Drop every pair that references the student; returns how many were dropped
    pub fn remove_student(&mut self, student_id: StudentId) -> usize {
        let Some(courses) = self.by_student.remove(&student_id) else {
            return 0;
        };
        for course_id in &courses {
            remove_from(&mut self.by_course, *course_id, student_id);
        }
        courses.len()
    }

    /// Total number of pairs
    pub fn len(&self) -> usize {
        self.by_course.values().map(BTreeSet::len).sum()
    }

    /// Whether the relation holds no pairs
    pub fn is_empty(&self) -> bool {
        self.by_course.is_empty()
    }

    /// Remove every pair
    pub fn clear(&mut self) {
        self.by_course.clear();
        self.by_student.clear();
    }
}

fn remove_from<K: Ord, V: Ord>(index: &mut BTreeMap<K, BTreeSet<V>>, key: K, value: V) -> bool {
    let Some(set) = index.get_mut(&key) else {
        return false;
    };
    let removed = set.remove(&value);
    if set.is_empty() {
        index.remove(&key);
    }
    removed
}
