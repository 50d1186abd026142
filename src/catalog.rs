//! Loaded reference data.
//!
//! The catalog owns the entity collections for a run. Everything is
//! loaded up front from record rows and then treated as read-only;
//! the placement engine and query layer borrow it.
//!
//! Bulk loaders are forgiving: a malformed row is skipped and
//! reported, never fatal to the batch.

use log::warn;

use crate::models::{Admin, Lecturer, Module, Programme, Room, ScheduledSession, Student, Timeslot};
use crate::records::{self, RecordError};

/// Entity collections for one timetabling run.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Enrolled students.
    pub students: Vec<Student>,
    /// Teaching staff.
    pub lecturers: Vec<Lecturer>,
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Modules to be timetabled.
    pub modules: Vec<Module>,
    /// Degree programmes.
    pub programmes: Vec<Programme>,
    /// Administrators.
    pub admins: Vec<Admin>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads student rows, skipping the header and malformed rows.
    /// Returns the errors for any rows that were skipped.
    pub fn load_students(&mut self, rows: &[Vec<String>]) -> Vec<RecordError> {
        Self::load_rows(rows, "studentId", records::parse_student, &mut self.students)
    }

    /// Loads lecturer rows.
    pub fn load_lecturers(&mut self, rows: &[Vec<String>]) -> Vec<RecordError> {
        Self::load_rows(
            rows,
            "lecturerId",
            records::parse_lecturer,
            &mut self.lecturers,
        )
    }

    /// Loads room rows.
    pub fn load_rooms(&mut self, rows: &[Vec<String>]) -> Vec<RecordError> {
        Self::load_rows(rows, "roomId", records::parse_room, &mut self.rooms)
    }

    /// Loads module rows.
    pub fn load_modules(&mut self, rows: &[Vec<String>]) -> Vec<RecordError> {
        Self::load_rows(rows, "moduleCode", records::parse_module, &mut self.modules)
    }

    /// Loads programme rows.
    pub fn load_programmes(&mut self, rows: &[Vec<String>]) -> Vec<RecordError> {
        Self::load_rows(
            rows,
            "programmeId",
            records::parse_programme,
            &mut self.programmes,
        )
    }

    /// Loads admin rows.
    pub fn load_admins(&mut self, rows: &[Vec<String>]) -> Vec<RecordError> {
        Self::load_rows(rows, "adminId", records::parse_admin, &mut self.admins)
    }

    fn load_rows<T>(
        rows: &[Vec<String>],
        header_field: &str,
        parse: impl Fn(&[String]) -> Result<T, RecordError>,
        into: &mut Vec<T>,
    ) -> Vec<RecordError> {
        let mut errors = Vec::new();
        for row in rows {
            if records::is_header(row, header_field) {
                continue;
            }
            match parse(row) {
                Ok(entity) => into.push(entity),
                Err(e) => {
                    warn!("skipping {header_field} row: {e}");
                    errors.push(e);
                }
            }
        }
        errors
    }

    /// Finds a module by code, case-insensitively.
    pub fn find_module(&self, code: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.code.eq_ignore_ascii_case(code))
    }

    /// Finds a room by id, case-insensitively.
    pub fn find_room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }

    /// Finds a lecturer by id, case-insensitively.
    pub fn find_lecturer(&self, id: &str) -> Option<&Lecturer> {
        self.lecturers.iter().find(|l| l.id.eq_ignore_ascii_case(id))
    }

    /// Builds sessions from import rows, resolving references against
    /// the loaded entities.
    ///
    /// Rows that are malformed or reference an unknown module, room,
    /// or lecturer are skipped and reported alongside the sessions
    /// that did resolve.
    pub fn resolve_sessions(
        &self,
        rows: &[Vec<String>],
    ) -> (Vec<ScheduledSession>, Vec<RecordError>) {
        let mut sessions = Vec::new();
        let mut errors = Vec::new();

        for row in rows {
            if records::is_header(row, "sessionId") {
                continue;
            }
            match self.resolve_session_row(row) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    warn!("skipping session row: {e}");
                    errors.push(e);
                }
            }
        }
        (sessions, errors)
    }

    fn resolve_session_row(&self, row: &[String]) -> Result<ScheduledSession, RecordError> {
        let record = records::parse_session_record(row)?;

        let module = self
            .find_module(&record.module_code)
            .ok_or_else(|| RecordError::UnknownModule(record.module_code.clone()))?;
        let room = self
            .find_room(&record.room_id)
            .ok_or_else(|| RecordError::UnknownRoom(record.room_id.clone()))?;
        let lecturer = self
            .find_lecturer(&record.lecturer_id)
            .ok_or_else(|| RecordError::UnknownLecturer(record.lecturer_id.clone()))?;

        let timeslot = Timeslot::new(record.day, record.start_hour, record.duration_hours());
        Ok(ScheduledSession::new(
            module.clone(),
            lecturer.clone(),
            room.clone(),
            timeslot,
            record.group_id,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomKind;

    fn rows(lines: &[&str]) -> Vec<Vec<String>> {
        lines
            .iter()
            .filter_map(|l| records::split_record_line(l))
            .collect()
    }

    fn loaded_catalog() -> Catalog {
        let mut cat = Catalog::new();
        cat.modules.push(
            Module::new("CS4013")
                .with_programme("LM121")
                .with_year_semester(1, 1)
                .with_hours(3, 2, 0),
        );
        cat.rooms.push(Room::new("R1", RoomKind::Classroom, 100));
        cat.lecturers
            .push(Lecturer::new("L1", "Grace", "g@uni.ie", "pw", "CSIS"));
        cat
    }

    #[test]
    fn test_load_skips_header_and_bad_rows() {
        let mut cat = Catalog::new();
        let errors = cat.load_students(&rows(&[
            "studentId,name,email,password,programmeId,year,groupId",
            "S1,Ada,ada@uni.ie,pw,LM121,2,G1",
            "S2,Bob,bob@uni.ie,pw,LM121,oops,G2",
            "S3,Cy,cy@uni.ie,pw,LM121,1,G1",
        ]));
        assert_eq!(cat.students.len(), 2);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], RecordError::BadInt { .. }));
    }

    #[test]
    fn test_lookups_case_insensitive() {
        let cat = loaded_catalog();
        assert!(cat.find_module("cs4013").is_some());
        assert!(cat.find_room("r1").is_some());
        assert!(cat.find_lecturer("l1").is_some());
        assert!(cat.find_module("CS9999").is_none());
    }

    #[test]
    fn test_resolve_sessions() {
        let cat = loaded_catalog();
        let (sessions, errors) = cat.resolve_sessions(&rows(&[
            "sessionId,moduleCode,day,start,end,roomId,lecturerId,groupId",
            "1,CS4013,MON,9,10,R1,L1,ALL",
            "2,CS4013,TUE,9,11,R1,L1,G1",
        ]));
        assert!(errors.is_empty());
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].module.code, "CS4013");
        assert_eq!(sessions[1].timeslot.duration_hours, 2);
        assert_eq!(sessions[1].group_id, "G1");
    }

    #[test]
    fn test_resolve_skips_unknown_references() {
        let cat = loaded_catalog();
        let (sessions, errors) = cat.resolve_sessions(&rows(&[
            "1,NOPE,MON,9,10,R1,L1,ALL",
            "2,CS4013,MON,9,10,R9,L1,ALL",
            "3,CS4013,MON,9,10,R1,L9,ALL",
            "4,CS4013,MON,9,10,R1,L1,ALL",
        ]));
        assert_eq!(sessions.len(), 1);
        assert_eq!(
            errors,
            vec![
                RecordError::UnknownModule("NOPE".into()),
                RecordError::UnknownRoom("R9".into()),
                RecordError::UnknownLecturer("L9".into()),
            ]
        );
    }

    #[test]
    fn test_resolve_rejects_bad_duration() {
        let cat = loaded_catalog();
        let (sessions, errors) =
            cat.resolve_sessions(&rows(&["1,CS4013,MON,10,9,R1,L1,ALL"]));
        assert!(sessions.is_empty());
        assert_eq!(errors, vec![RecordError::InvalidDuration("1".into())]);
    }
}
