//! Timetabling domain models.
//!
//! Reference data (modules, programmes, rooms, people) is loaded once
//! and treated as read-only for the run; only `ScheduledSession`s are
//! created afterwards, by the placement engine or the manual-add path.

mod academic;
mod people;
mod room;
mod session;
mod timeslot;

pub use academic::{Module, Programme};
pub use people::{Admin, Lecturer, Student};
pub use room::{Room, RoomKind};
pub use session::{ScheduledSession, GROUP_ALL};
pub use timeslot::{Day, ParseDayError, Timeslot};
