//! Session store.
//!
//! Append-only collection of accepted sessions. The single write path
//! is [`SessionStore::try_add`]: scan everything already accepted with
//! the direct conflict predicate, then append only if nothing
//! collided. The scan and the append happen under one `&mut self`
//! borrow, so no partially-inserted state is ever observable.

use crate::conflict::{direct_conflicts, Conflict};
use crate::models::ScheduledSession;

/// Outcome of an insertion attempt: `Ok` when accepted, otherwise the
/// full list of collisions with already-accepted sessions.
pub type AddResult = Result<(), Vec<Conflict>>;

/// The accepted-session collection.
///
/// Invariant: no pair of stored sessions collides under
/// [`direct_conflicts`]. Holds after every successful `try_add` and
/// is unaffected by rejected ones.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Vec<ScheduledSession>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to add a session.
    ///
    /// All collisions against the current contents are collected and
    /// returned; the store is mutated only when there are none.
    pub fn try_add(&mut self, session: ScheduledSession) -> AddResult {
        let conflicts: Vec<Conflict> = self
            .sessions
            .iter()
            .flat_map(|existing| direct_conflicts(existing, &session))
            .collect();

        if conflicts.is_empty() {
            self.sessions.push(session);
            Ok(())
        } else {
            Err(conflicts)
        }
    }

    /// Replaces the entire contents (full regeneration).
    pub fn replace_all(&mut self, sessions: Vec<ScheduledSession>) {
        self.sessions = sessions;
    }

    /// Appends a pre-validated batch (session import path).
    pub fn load(&mut self, sessions: Vec<ScheduledSession>) {
        self.sessions.extend(sessions);
    }

    /// Read-only view of the accepted sessions, in insertion order.
    pub fn sessions(&self) -> &[ScheduledSession] {
        &self.sessions
    }

    /// Number of accepted sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::ConflictKind;
    use crate::models::{Day, Lecturer, Module, Room, RoomKind, Timeslot};

    fn session(lecturer_id: &str, room_id: &str, slot: Timeslot, group: &str) -> ScheduledSession {
        ScheduledSession::new(
            Module::new("CS4013")
                .with_programme("LM121")
                .with_year_semester(1, 1),
            Lecturer::new(lecturer_id, "X", "x@uni.ie", "pw", "CSIS"),
            Room::new(room_id, RoomKind::Classroom, 100),
            slot,
            group,
        )
    }

    #[test]
    fn test_accepts_non_conflicting() {
        let mut store = SessionStore::new();
        assert!(store
            .try_add(session("L1", "R1", Timeslot::new(Day::Mon, 9, 1), "ALL"))
            .is_ok());
        assert!(store
            .try_add(session("L2", "R2", Timeslot::new(Day::Mon, 9, 1), "ALL"))
            .is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_rejects_room_overlap_and_keeps_size() {
        let mut store = SessionStore::new();
        store
            .try_add(session("L1", "R1", Timeslot::new(Day::Mon, 9, 2), "ALL"))
            .unwrap();

        let rejected = store
            .try_add(session("L2", "R1", Timeslot::new(Day::Mon, 10, 1), "ALL"))
            .unwrap_err();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].kind, ConflictKind::Room);
        // Atomic: rejected candidate leaves the store untouched
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_reports_every_violated_rule() {
        let mut store = SessionStore::new();
        store
            .try_add(session("L1", "R1", Timeslot::new(Day::Tue, 9, 1), "G1"))
            .unwrap();

        let rejected = store
            .try_add(session("L1", "R1", Timeslot::new(Day::Tue, 9, 1), "G1"))
            .unwrap_err();
        let kinds: Vec<_> = rejected.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ConflictKind::Room, ConflictKind::Lecturer, ConflictKind::Group]
        );
    }

    #[test]
    fn test_pairwise_invariant_after_adds() {
        let mut store = SessionStore::new();
        let candidates = vec![
            session("L1", "R1", Timeslot::new(Day::Mon, 9, 1), "ALL"),
            session("L1", "R1", Timeslot::new(Day::Mon, 9, 1), "ALL"), // duplicate, rejected
            session("L2", "R2", Timeslot::new(Day::Mon, 9, 1), "G1"),
            session("L3", "R3", Timeslot::new(Day::Mon, 9, 1), "g1"), // group clash, rejected
            session("L1", "R1", Timeslot::new(Day::Tue, 9, 1), "ALL"),
        ];
        for c in candidates {
            let _ = store.try_add(c);
        }
        assert_eq!(store.len(), 3);

        let all = store.sessions();
        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                assert!(direct_conflicts(&all[i], &all[j]).is_empty());
            }
        }
    }

    #[test]
    fn test_replace_all() {
        let mut store = SessionStore::new();
        store
            .try_add(session("L1", "R1", Timeslot::new(Day::Mon, 9, 1), "ALL"))
            .unwrap();

        store.replace_all(vec![
            session("L2", "R2", Timeslot::new(Day::Wed, 9, 1), "ALL"),
            session("L3", "R3", Timeslot::new(Day::Wed, 10, 1), "ALL"),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.sessions()[0].lecturer.id, "L2");
    }

    #[test]
    fn test_empty_store() {
        let store = SessionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.sessions().is_empty());
    }
}
