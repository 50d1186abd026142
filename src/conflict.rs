//! Conflict predicates.
//!
//! Exactly two predicates decide whether sessions collide:
//!
//! - [`direct_conflicts`] — the store's gate. Two sessions collide when
//!   their timeslots overlap and they share a room, share a lecturer,
//!   or target the same named sub-group.
//! - [`cohort_conflict`] — generation only. Additionally blocks two
//!   overlapping sessions of the same programme/year/semester even in
//!   different rooms with different lecturers, except for parallel
//!   group streams of the same module.
//!
//! Both are pure and deterministic; every call site goes through these
//! two functions rather than re-deriving the rules.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ScheduledSession;

/// What a pair of sessions collides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Same room, overlapping timeslots.
    Room,
    /// Same lecturer, overlapping timeslots.
    Lecturer,
    /// Same named sub-group, overlapping timeslots.
    Group,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConflictKind::Room => "ROOM",
            ConflictKind::Lecturer => "LECTURER",
            ConflictKind::Group => "GROUP",
        })
    }
}

/// One detected collision against an existing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Which rule was violated.
    pub kind: ConflictKind,
    /// Rendering of the existing session collided with.
    pub with: String,
}

impl Conflict {
    fn new(kind: ConflictKind, existing: &ScheduledSession) -> Self {
        Self {
            kind,
            with: existing.to_string(),
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} conflict with {}", self.kind, self.with)
    }
}

/// Direct collision check between a candidate and an existing session.
///
/// Returns one entry per violated rule so callers can report all of
/// them, not just the first. Empty when the timeslots do not overlap,
/// regardless of any shared resources.
///
/// String comparisons (room id, lecturer id, group id) are
/// case-insensitive; a `"ALL"` group never collides on the group rule.
pub fn direct_conflicts(existing: &ScheduledSession, candidate: &ScheduledSession) -> Vec<Conflict> {
    if !existing.timeslot.overlaps(&candidate.timeslot) {
        return Vec::new();
    }

    let mut found = Vec::new();
    if existing.room.id.eq_ignore_ascii_case(&candidate.room.id) {
        found.push(Conflict::new(ConflictKind::Room, existing));
    }
    if existing.lecturer.id.eq_ignore_ascii_case(&candidate.lecturer.id) {
        found.push(Conflict::new(ConflictKind::Lecturer, existing));
    }
    if existing.same_subgroup_as(candidate) {
        found.push(Conflict::new(ConflictKind::Group, existing));
    }
    found
}

/// Cohort-level collision check, used only during batch generation.
///
/// True iff both sessions belong to the same cohort (programme, year,
/// semester), their timeslots overlap, and they are **not** parallel
/// group streams of the same module (same module code, differing group
/// ids). Keeps two different modules of one class-year from being
/// scheduled at the same time even when rooms and lecturers differ.
pub fn cohort_conflict(existing: &ScheduledSession, candidate: &ScheduledSession) -> bool {
    if !existing.module.same_cohort_as(&candidate.module) {
        return false;
    }
    if !existing.timeslot.overlaps(&candidate.timeslot) {
        return false;
    }

    let same_module = existing
        .module
        .code
        .eq_ignore_ascii_case(&candidate.module.code);
    let different_groups = !existing.group_id.eq_ignore_ascii_case(&candidate.group_id);

    // Parallel lab/tutorial streams of one module are allowed to run
    // at the same time.
    !(same_module && different_groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Lecturer, Module, Room, RoomKind, ScheduledSession, Timeslot};

    fn module(code: &str) -> Module {
        Module::new(code)
            .with_programme("LM121")
            .with_year_semester(1, 1)
    }

    fn session(
        code: &str,
        lecturer_id: &str,
        room_id: &str,
        slot: Timeslot,
        group: &str,
    ) -> ScheduledSession {
        ScheduledSession::new(
            module(code),
            Lecturer::new(lecturer_id, "X", "x@uni.ie", "pw", "CSIS"),
            Room::new(room_id, RoomKind::Classroom, 100),
            slot,
            group,
        )
    }

    const MON9: Timeslot = Timeslot {
        day: Day::Mon,
        start_hour: 9,
        duration_hours: 1,
    };
    const MON10: Timeslot = Timeslot {
        day: Day::Mon,
        start_hour: 10,
        duration_hours: 1,
    };

    #[test]
    fn test_no_overlap_short_circuits() {
        // Same room, same lecturer, same group — but different hours
        let a = session("A", "L1", "R1", MON9, "G1");
        let b = session("A", "L1", "R1", MON10, "G1");
        assert!(direct_conflicts(&a, &b).is_empty());
    }

    #[test]
    fn test_room_conflict() {
        let a = session("A", "L1", "R1", MON9, "ALL");
        let b = session("B", "L2", "r1", MON9, "ALL");
        let found = direct_conflicts(&a, &b);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ConflictKind::Room);
        assert!(found[0].with.contains("R1"));
    }

    #[test]
    fn test_lecturer_conflict() {
        let a = session("A", "L1", "R1", MON9, "ALL");
        let b = session("B", "L1", "R2", MON9, "ALL");
        let found = direct_conflicts(&a, &b);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ConflictKind::Lecturer);
    }

    #[test]
    fn test_group_conflict_case_insensitive() {
        let a = session("A", "L1", "R1", MON9, "G1");
        let b = session("B", "L2", "R2", MON9, "g1");
        let found = direct_conflicts(&a, &b);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ConflictKind::Group);
    }

    #[test]
    fn test_all_group_never_group_conflicts() {
        let a = session("A", "L1", "R1", MON9, "ALL");
        let b = session("B", "L2", "R2", MON9, "ALL");
        assert!(direct_conflicts(&a, &b).is_empty());
    }

    #[test]
    fn test_different_subgroups_do_not_conflict() {
        let a = session("A", "L1", "R1", MON9, "G1");
        let b = session("A", "L2", "R2", MON9, "G2");
        assert!(direct_conflicts(&a, &b).is_empty());
    }

    #[test]
    fn test_multiple_kinds_reported() {
        // Same room AND same lecturer
        let a = session("A", "L1", "R1", MON9, "ALL");
        let b = session("B", "L1", "R1", MON9, "ALL");
        let kinds: Vec<_> = direct_conflicts(&a, &b).iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ConflictKind::Room, ConflictKind::Lecturer]);
    }

    #[test]
    fn test_cohort_blocks_different_modules() {
        // Two modules of the same class-year in the same slot, in
        // different rooms with different lecturers.
        let a = session("A", "L1", "R1", MON9, "ALL");
        let b = session("B", "L2", "R2", MON9, "ALL");
        assert!(cohort_conflict(&a, &b));
    }

    #[test]
    fn test_cohort_allows_parallel_streams() {
        // Same module, different groups: parallel lab streams
        let a = session("A", "L1", "R1", MON9, "G1");
        let b = session("A", "L2", "R2", MON9, "G2");
        assert!(!cohort_conflict(&a, &b));
    }

    #[test]
    fn test_cohort_blocks_same_module_same_group() {
        let a = session("A", "L1", "R1", MON9, "G1");
        let b = session("A", "L2", "R2", MON9, "g1");
        assert!(cohort_conflict(&a, &b));
    }

    #[test]
    fn test_cohort_ignores_other_cohorts() {
        let a = session("A", "L1", "R1", MON9, "ALL");
        let mut b = session("B", "L2", "R2", MON9, "ALL");
        b.module.year = 2;
        assert!(!cohort_conflict(&a, &b));

        let mut c = session("C", "L3", "R3", MON9, "ALL");
        c.module.programme_id = "LM051".into();
        assert!(!cohort_conflict(&a, &c));
    }

    #[test]
    fn test_cohort_requires_overlap() {
        let a = session("A", "L1", "R1", MON9, "ALL");
        let b = session("B", "L2", "R2", MON10, "ALL");
        assert!(!cohort_conflict(&a, &b));
    }

    #[test]
    fn test_conflict_display() {
        let a = session("A", "L1", "R1", MON9, "ALL");
        let b = session("B", "L2", "R1", MON9, "ALL");
        let found = direct_conflicts(&a, &b);
        let text = found[0].to_string();
        assert!(text.starts_with("ROOM conflict with "));
        assert!(text.contains('A'));
    }
}
