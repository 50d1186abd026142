//! Scheduled session model.
//!
//! One scheduled occurrence of a module's teaching at a specific room
//! and timeslot for a specific group. Sessions carry denormalized
//! copies of the entities they reference; reference data is immutable
//! after load, so the copies cannot drift.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Lecturer, Module, Room, Timeslot};

/// Group label meaning "the whole cohort, no subdivision".
pub const GROUP_ALL: &str = "ALL";

/// A scheduled teaching session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// The module being taught.
    pub module: Module,
    /// The lecturer delivering it.
    pub lecturer: Lecturer,
    /// The room it takes place in.
    pub room: Room,
    /// When it happens.
    pub timeslot: Timeslot,
    /// `"ALL"` for the whole cohort, or a sub-group label ("G1", "G2", ...).
    pub group_id: String,
}

impl ScheduledSession {
    /// Creates a session for a specific group.
    pub fn new(
        module: Module,
        lecturer: Lecturer,
        room: Room,
        timeslot: Timeslot,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            module,
            lecturer,
            room,
            timeslot,
            group_id: group_id.into(),
        }
    }

    /// Creates a whole-cohort session (group `"ALL"`).
    pub fn whole_cohort(
        module: Module,
        lecturer: Lecturer,
        room: Room,
        timeslot: Timeslot,
    ) -> Self {
        Self::new(module, lecturer, room, timeslot, GROUP_ALL)
    }

    /// Whether this session addresses the whole cohort.
    pub fn is_whole_cohort(&self) -> bool {
        self.group_id.eq_ignore_ascii_case(GROUP_ALL)
    }

    /// Whether both sessions target the same named sub-group.
    ///
    /// `"ALL"` never matches: a whole-cohort session is not a
    /// sub-group, so this is only true when both group ids are
    /// non-"ALL" and equal (case-insensitively).
    pub fn same_subgroup_as(&self, other: &Self) -> bool {
        !self.is_whole_cohort() && self.group_id.eq_ignore_ascii_case(&other.group_id)
    }
}

impl fmt::Display for ScheduledSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | Group: {}",
            self.module.code, self.lecturer.name, self.room.id, self.timeslot, self.group_id
        )
    }
}
