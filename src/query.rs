//! Query layer and controller surface.
//!
//! Read-only filtered views over the session store, rendered as
//! newline-joined listings (with an explicit "no sessions found"
//! sentinel when empty), plus the two write paths: full regeneration
//! and the gated manual add. Any front end talks to [`Controller`];
//! raw mutable access to the store is never exposed.

use log::warn;

use crate::catalog::Catalog;
use crate::conflict::Conflict;
use crate::generator::{GenerationOutput, Generator};
use crate::models::{Admin, Day, Lecturer, ParseDayError, ScheduledSession, Student, Timeslot};
use crate::records::RecordError;
use crate::store::SessionStore;

/// Sentinel returned by listing queries with no matches.
const NO_SESSIONS: &str = "No sessions found.";

/// A logged-in user, borrowed from the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum User<'a> {
    /// A student account.
    Student(&'a Student),
    /// A lecturer account.
    Lecturer(&'a Lecturer),
    /// An administrator account.
    Admin(&'a Admin),
}

/// Why a manual session add was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddSessionError {
    /// No module with the given code.
    #[error("unknown module `{0}`")]
    UnknownModule(String),
    /// No room with the given id.
    #[error("unknown room `{0}`")]
    UnknownRoom(String),
    /// No lecturer with the given id.
    #[error("unknown lecturer `{0}`")]
    UnknownLecturer(String),
    /// The day string was not one of MON..FRI.
    #[error(transparent)]
    BadDay(#[from] ParseDayError),
    /// `end_hour <= start_hour`.
    #[error("end hour must be after start hour")]
    InvalidDuration,
    /// The store rejected the session; one entry per collision.
    #[error("session collides with {} existing session(s)", .0.len())]
    Conflicts(Vec<Conflict>),
}

/// Front-end facing controller: owns the catalog and the store.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    catalog: Catalog,
    store: SessionStore,
}

impl Controller {
    /// Creates a controller over loaded reference data, with an empty
    /// session store.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            store: SessionStore::new(),
        }
    }

    /// The loaded reference data.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The accepted sessions (read-only).
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Regenerates the full timetable with the given seed, replacing
    /// the store's previous contents. Returns the generation output
    /// (export rows and shortfalls included) for the caller to
    /// persist or display.
    pub fn regenerate(&mut self, seed: u64) -> GenerationOutput {
        let out = Generator::new(seed).generate(&self.catalog);
        self.store.replace_all(out.sessions.clone());
        out
    }

    /// Imports previously exported session rows into the store,
    /// resolving references against the catalog. Unresolvable rows are
    /// skipped and reported.
    pub fn import_sessions(&mut self, rows: &[Vec<String>]) -> Vec<RecordError> {
        let (sessions, errors) = self.catalog.resolve_sessions(rows);
        self.store.load(sessions);
        errors
    }

    /// Checks credentials against students, then lecturers, then
    /// admins. Exact match on both email and password.
    pub fn login(&self, email: &str, password: &str) -> Option<User<'_>> {
        if let Some(s) = self
            .catalog
            .students
            .iter()
            .find(|s| s.email == email && s.password == password)
        {
            return Some(User::Student(s));
        }
        if let Some(l) = self
            .catalog
            .lecturers
            .iter()
            .find(|l| l.email == email && l.password == password)
        {
            return Some(User::Lecturer(l));
        }
        self.catalog
            .admins
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(User::Admin)
    }

    /// A student's weekly timetable for one semester.
    ///
    /// Matches sessions whose module year equals the student's year,
    /// whose module semester equals `semester`, and whose group is
    /// `"ALL"` or the student's own. Sorted by day, then start hour.
    pub fn timetable_for_student(&self, student: &Student, semester: u32) -> String {
        let mut matches: Vec<&ScheduledSession> = self
            .store
            .sessions()
            .iter()
            .filter(|s| {
                s.module.year == student.year
                    && s.module.semester == semester
                    && (s.is_whole_cohort()
                        || s.group_id.eq_ignore_ascii_case(&student.group_id))
            })
            .collect();
        matches.sort_by_key(|s| (s.timeslot.day, s.timeslot.start_hour));
        render(matches, NO_SESSIONS)
    }

    /// All sessions taught by one lecturer (id match).
    pub fn timetable_for_lecturer(&self, lecturer: &Lecturer) -> String {
        self.listing(|s| s.lecturer.id.eq_ignore_ascii_case(&lecturer.id), NO_SESSIONS)
    }

    /// Every accepted session.
    pub fn full_timetable(&self) -> String {
        self.listing(|_| true, NO_SESSIONS)
    }

    /// All sessions of one module.
    pub fn timetable_for_module(&self, code: &str) -> String {
        self.listing(
            |s| s.module.code.eq_ignore_ascii_case(code),
            &format!("No sessions found for module {code}"),
        )
    }

    /// All sessions in one room.
    pub fn timetable_for_room(&self, room_id: &str) -> String {
        self.listing(
            |s| s.room.id.eq_ignore_ascii_case(room_id),
            &format!("No sessions found for room {room_id}"),
        )
    }

    /// All sessions of one programme/year/semester. A programme id of
    /// `"ALL"` is a wildcard matching any programme.
    pub fn timetable_for_course_year(
        &self,
        programme_id: &str,
        year: u32,
        semester: u32,
    ) -> String {
        self.listing(
            |s| {
                (programme_id.eq_ignore_ascii_case("ALL")
                    || s.module.programme_id.eq_ignore_ascii_case(programme_id))
                    && s.module.year == year
                    && s.module.semester == semester
            },
            NO_SESSIONS,
        )
    }

    /// Manually adds a session through the same conflict gate the
    /// generator output went through.
    ///
    /// Resolves the module, room, and lecturer against the catalog,
    /// rejects non-positive durations and unknown days, then delegates
    /// to the store's atomic insert. A rejection leaves the store
    /// untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn add_session_admin(
        &mut self,
        module_code: &str,
        day: &str,
        start_hour: u32,
        end_hour: u32,
        room_id: &str,
        lecturer_id: &str,
        group_id: &str,
    ) -> Result<(), AddSessionError> {
        let module = self
            .catalog
            .find_module(module_code)
            .ok_or_else(|| AddSessionError::UnknownModule(module_code.to_string()))?
            .clone();
        let room = self
            .catalog
            .find_room(room_id)
            .ok_or_else(|| AddSessionError::UnknownRoom(room_id.to_string()))?
            .clone();
        let lecturer = self
            .catalog
            .find_lecturer(lecturer_id)
            .ok_or_else(|| AddSessionError::UnknownLecturer(lecturer_id.to_string()))?
            .clone();

        if end_hour <= start_hour {
            return Err(AddSessionError::InvalidDuration);
        }
        let day: Day = day.parse()?;

        let slot = Timeslot::new(day, start_hour, end_hour - start_hour);
        let session = ScheduledSession::new(module, lecturer, room, slot, group_id);

        self.store.try_add(session).map_err(|conflicts| {
            for c in &conflicts {
                warn!("manual add rejected: {c}");
            }
            AddSessionError::Conflicts(conflicts)
        })
    }

    /// Pairwise room-overlap audit across the whole store.
    ///
    /// Independently re-verifies the room invariant the incremental
    /// gate maintains; useful after a bulk import, which is not
    /// conflict-checked. O(n^2).
    pub fn find_room_conflicts(&self) -> Vec<String> {
        let sessions = self.store.sessions();
        let mut found = Vec::new();
        for i in 0..sessions.len() {
            for j in (i + 1)..sessions.len() {
                let (a, b) = (&sessions[i], &sessions[j]);
                if a.room.id.eq_ignore_ascii_case(&b.room.id)
                    && a.timeslot.overlaps(&b.timeslot)
                {
                    found.push(format!("ROOM CONFLICT: {a} <--> {b}"));
                }
            }
        }
        found
    }

    fn listing(&self, pred: impl Fn(&ScheduledSession) -> bool, empty: &str) -> String {
        let matches: Vec<&ScheduledSession> =
            self.store.sessions().iter().filter(|s| pred(s)).collect();
        render(matches, empty)
    }
}

fn render(sessions: Vec<&ScheduledSession>, empty: &str) -> String {
    if sessions.is_empty() {
        empty.to_string()
    } else {
        sessions
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
