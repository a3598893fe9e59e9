// Fixed seed dataset
// Loaded by `Storage::seed` to give tests and demos a known baseline

/// Seed students as (name, email), inserted in this order
pub const SEED_STUDENTS: [(&str, &str); 3] = [
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
    ("Charlie", "charlie@example.com"),
];

/// Seed courses as (title, teacher), inserted in this order
pub const SEED_COURSES: [(&str, &str); 3] = [
    ("Math", "Mr. Smith"),
    ("Physics", "Mrs. Johnson"),
    ("History", "Mr. Brown"),
];
