//! Import/export record shapes.
//!
//! Flat-file ingestion itself lives outside this crate; what crosses
//! the boundary are rows of trimmed string fields. This module defines
//! the column layouts, the per-shape parsers, and the session export
//! row format.
//!
//! Column orders (header row optional, detected by its first field):
//!
//! | shape     | columns |
//! |-----------|---------|
//! | Student   | id, name, email, password, programmeId, year, groupId |
//! | Lecturer  | id, name, email, password, department |
//! | Room      | id, kind, capacity, building |
//! | Module    | code, name, year, semester, programmeId, lecHours, labHours, tutHours |
//! | Programme | id, name |
//! | Admin     | id, name, email, password |
//! | Session   | sessionId, moduleCode, day, startHour, endHour, roomId, lecturerId, groupId |

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Admin, Day, Lecturer, Module, Programme, Room, RoomKind, Student};

/// Header line written at the top of a session export table.
pub const EXPORT_HEADER: &str = "sessionId,moduleCode,day,start,end,roomId,lecturerId,groupId";

/// A malformed or unresolvable record row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Row has fewer columns than the shape requires.
    #[error("row has {found} fields, expected {expected}")]
    MissingFields { expected: usize, found: usize },
    /// A numeric column did not parse.
    #[error("field `{field}`: `{value}` is not a valid integer")]
    BadInt { field: &'static str, value: String },
    /// A day column was not one of MON..FRI.
    #[error("unknown day `{0}`")]
    BadDay(String),
    /// A session row with `endHour <= startHour`.
    #[error("session `{0}`: end hour must be after start hour")]
    InvalidDuration(String),
    /// Session row referencing a module not in the catalog.
    #[error("unknown module `{0}`")]
    UnknownModule(String),
    /// Session row referencing a room not in the catalog.
    #[error("unknown room `{0}`")]
    UnknownRoom(String),
    /// Session row referencing a lecturer not in the catalog.
    #[error("unknown lecturer `{0}`")]
    UnknownLecturer(String),
}

/// Splits one flat-file line into trimmed comma-separated fields.
///
/// Returns `None` for blank lines so callers can skip them.
pub fn split_record_line(line: &str) -> Option<Vec<String>> {
    if line.trim().is_empty() {
        return None;
    }
    Some(line.split(',').map(|f| f.trim().to_string()).collect())
}

/// Whether a row is the (optional) header for a shape, identified by
/// its first field name, case-insensitively.
pub fn is_header(row: &[String], first_field: &str) -> bool {
    row.first()
        .is_some_and(|f| f.eq_ignore_ascii_case(first_field))
}

fn require(row: &[String], expected: usize) -> Result<(), RecordError> {
    if row.len() < expected {
        Err(RecordError::MissingFields {
            expected,
            found: row.len(),
        })
    } else {
        Ok(())
    }
}

fn int_field(row: &[String], idx: usize, field: &'static str) -> Result<u32, RecordError> {
    row[idx].parse().map_err(|_| RecordError::BadInt {
        field,
        value: row[idx].clone(),
    })
}

/// Parses a student row: id, name, email, password, programmeId, year, groupId.
pub fn parse_student(row: &[String]) -> Result<Student, RecordError> {
    require(row, 7)?;
    let year = int_field(row, 5, "year")?;
    Ok(Student::new(
        &row[0], &row[1], &row[2], &row[3], &row[4], year, &row[6],
    ))
}

/// Parses a lecturer row: id, name, email, password, department.
pub fn parse_lecturer(row: &[String]) -> Result<Lecturer, RecordError> {
    require(row, 5)?;
    Ok(Lecturer::new(&row[0], &row[1], &row[2], &row[3], &row[4]))
}

/// Parses a room row: id, kind, capacity, building.
pub fn parse_room(row: &[String]) -> Result<Room, RecordError> {
    require(row, 4)?;
    let capacity = int_field(row, 2, "capacity")?;
    Ok(Room::new(&row[0], RoomKind::classify(&row[1]), capacity).with_building(&row[3]))
}

/// Parses a module row: code, name, year, semester, programmeId,
/// lecHours, labHours, tutHours.
pub fn parse_module(row: &[String]) -> Result<Module, RecordError> {
    require(row, 8)?;
    let year = int_field(row, 2, "year")?;
    let semester = int_field(row, 3, "semester")?;
    let lec = int_field(row, 5, "lecHours")?;
    let lab = int_field(row, 6, "labHours")?;
    let tut = int_field(row, 7, "tutHours")?;
    Ok(Module::new(&row[0])
        .with_name(&row[1])
        .with_year_semester(year, semester)
        .with_programme(&row[4])
        .with_hours(lec, lab, tut))
}

/// Parses a programme row: id, name.
pub fn parse_programme(row: &[String]) -> Result<Programme, RecordError> {
    require(row, 2)?;
    Ok(Programme::new(&row[0], &row[1]))
}

/// Parses an admin row: id, name, email, password.
pub fn parse_admin(row: &[String]) -> Result<Admin, RecordError> {
    require(row, 4)?;
    Ok(Admin::new(&row[0], &row[1], &row[2], &row[3]))
}

/// An import/export session row.
///
/// Carries the ids only; resolving them against loaded entities is the
/// catalog's job. `duration = end_hour - start_hour`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Sequential id, assigned from 1 in generation order.
    pub session_id: u32,
    /// Referenced module code.
    pub module_code: String,
    /// Day of the week.
    pub day: Day,
    /// First occupied hour.
    pub start_hour: u32,
    /// First hour after the session (exclusive).
    pub end_hour: u32,
    /// Referenced room id.
    pub room_id: String,
    /// Referenced lecturer id.
    pub lecturer_id: String,
    /// Group label ("ALL", "G1", ...).
    pub group_id: String,
}

impl SessionRecord {
    /// Session duration in hours.
    pub fn duration_hours(&self) -> u32 {
        self.end_hour - self.start_hour
    }
}

impl fmt::Display for SessionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{}",
            self.session_id,
            self.module_code,
            self.day,
            self.start_hour,
            self.end_hour,
            self.room_id,
            self.lecturer_id,
            self.group_id
        )
    }
}

/// Parses a session row: sessionId, moduleCode, day, startHour,
/// endHour, roomId, lecturerId, groupId.
///
/// Rejects rows whose end hour is not after their start hour.
pub fn parse_session_record(row: &[String]) -> Result<SessionRecord, RecordError> {
    require(row, 8)?;
    let session_id = int_field(row, 0, "sessionId")?;
    let day: Day = row[2]
        .parse()
        .map_err(|_| RecordError::BadDay(row[2].clone()))?;
    let start_hour = int_field(row, 3, "startHour")?;
    let end_hour = int_field(row, 4, "endHour")?;
    if end_hour <= start_hour {
        return Err(RecordError::InvalidDuration(row[0].clone()));
    }
    Ok(SessionRecord {
        session_id,
        module_code: row[1].clone(),
        day,
        start_hour,
        end_hour,
        room_id: row[5].clone(),
        lecturer_id: row[6].clone(),
        group_id: row[7].clone(),
    })
}

/// Renders a full export table: header plus one row per record,
/// newline-terminated.
pub fn export_table(records: &[SessionRecord]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&r.to_string());
        out.push('\n');
    }
    out
}
