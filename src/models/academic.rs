//! Academic structure: modules and programmes.
//!
//! A module carries its weekly contact-hour requirements split by
//! activity kind (lecture, lab, tutorial). The placement engine
//! decomposes those into unit-hour sessions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A taught module.
///
/// The `(programme_id, year, semester)` triple identifies the cohort
/// that takes the module; the generator's cohort rule uses it to keep
/// different modules of one class-year from overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Unique module code (e.g. "CS4013").
    pub code: String,
    /// Human-readable title.
    pub name: String,
    /// Owning programme.
    pub programme_id: String,
    /// Year of study the module belongs to.
    pub year: u32,
    /// Semester the module runs in.
    pub semester: u32,
    /// Weekly lecture hours.
    pub lec_hours: u32,
    /// Weekly lab hours (per sub-group).
    pub lab_hours: u32,
    /// Weekly tutorial hours (per sub-group).
    pub tut_hours: u32,
}

impl Module {
    /// Creates a module with the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            programme_id: String::new(),
            year: 0,
            semester: 0,
            lec_hours: 0,
            lab_hours: 0,
            tut_hours: 0,
        }
    }

    /// Sets the module title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning programme.
    pub fn with_programme(mut self, programme_id: impl Into<String>) -> Self {
        self.programme_id = programme_id.into();
        self
    }

    /// Sets year and semester.
    pub fn with_year_semester(mut self, year: u32, semester: u32) -> Self {
        self.year = year;
        self.semester = semester;
        self
    }

    /// Sets weekly lecture/lab/tutorial hours.
    pub fn with_hours(mut self, lec: u32, lab: u32, tut: u32) -> Self {
        self.lec_hours = lec;
        self.lab_hours = lab;
        self.tut_hours = tut;
        self
    }

    /// Whether two modules belong to the same cohort
    /// (programme, year, and semester all match).
    pub fn same_cohort_as(&self, other: &Module) -> bool {
        self.programme_id.eq_ignore_ascii_case(&other.programme_id)
            && self.year == other.year
            && self.semester == other.semester
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Year {}, Semester {}) (Lec: {}, Lab: {}, Tut: {})",
            self.code,
            self.name,
            self.year,
            self.semester,
            self.lec_hours,
            self.lab_hours,
            self.tut_hours
        )
    }
}

/// A degree programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Programme {
    /// Unique programme identifier.
    pub id: String,
    /// Programme title.
    pub name: String,
}

impl Programme {
    /// Creates a new programme.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_builder() {
        let m = Module::new("CS4013")
            .with_name("Object Oriented Development")
            .with_programme("LM121")
            .with_year_semester(2, 1)
            .with_hours(3, 2, 1);

        assert_eq!(m.code, "CS4013");
        assert_eq!(m.programme_id, "LM121");
        assert_eq!(m.year, 2);
        assert_eq!(m.semester, 1);
        assert_eq!((m.lec_hours, m.lab_hours, m.tut_hours), (3, 2, 1));
    }

    #[test]
    fn test_same_cohort() {
        let a = Module::new("A").with_programme("LM121").with_year_semester(1, 1);
        let b = Module::new("B").with_programme("lm121").with_year_semester(1, 1);
        let c = Module::new("C").with_programme("LM121").with_year_semester(1, 2);
        let d = Module::new("D").with_programme("LM051").with_year_semester(1, 1);

        assert!(a.same_cohort_as(&b)); // programme compare is case-insensitive
        assert!(!a.same_cohort_as(&c)); // different semester
        assert!(!a.same_cohort_as(&d)); // different programme
    }

    #[test]
    fn test_module_display() {
        let m = Module::new("CS4013")
            .with_name("OOD")
            .with_year_semester(2, 1)
            .with_hours(3, 2, 0);
        assert_eq!(
            m.to_string(),
            "CS4013 - OOD (Year 2, Semester 1) (Lec: 3, Lab: 2, Tut: 0)"
        );
    }
}
