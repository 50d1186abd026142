//! People: students, lecturers, and admins.
//!
//! Identity plus login credentials. Students additionally carry the
//! cohort fields (programme, year) and their sub-group label used by
//! the per-student timetable view.

use serde::{Deserialize, Serialize};

/// A lecturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecturer {
    /// Unique lecturer identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
    /// Home department.
    pub department: String,
}

impl Lecturer {
    /// Creates a new lecturer.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            department: department.into(),
        }
    }
}

/// A student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
    /// Programme the student is enrolled in.
    pub programme_id: String,
    /// Current year of study.
    pub year: u32,
    /// Sub-group label ("G1", "G2", ...).
    pub group_id: String,
}

impl Student {
    /// Creates a new student.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        programme_id: impl Into<String>,
        year: u32,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            programme_id: programme_id.into(),
            year,
            group_id: group_id.into(),
        }
    }
}

/// A timetable administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// Unique admin identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
}

impl Admin {
    /// Creates a new admin.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
