//! University timetable placement core.
//!
//! Assigns teaching sessions (lectures, labs, tutorials) to weekly
//! time slots and rooms while preventing double-booking of rooms,
//! lecturers, and student groups. The centerpiece is the pair of
//! conflict predicates and the greedy, first-fit slot search that
//! fills each module's weekly contact hours. It is deliberately not
//! an exhaustive or optimizing solver.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Module`, `Room`, `Lecturer`,
//!   `Student`, `Timeslot`, `ScheduledSession`
//! - **`conflict`**: The two collision predicates (direct, cohort-aware)
//! - **`store`**: Append-only session store with an atomic
//!   accept-iff-conflict-free insert
//! - **`generator`**: Seeded greedy placement engine
//! - **`catalog`**: Loaded reference data with lookups and row loaders
//! - **`records`**: Import/export record shapes
//! - **`query`**: Controller surface — logins, timetable views,
//!   manual add, room audit
//!
//! # Example
//!
//! ```
//! use uni_timetable::catalog::Catalog;
//! use uni_timetable::models::{Lecturer, Module, Room, RoomKind};
//! use uni_timetable::query::Controller;
//!
//! let mut catalog = Catalog::new();
//! catalog.modules.push(
//!     Module::new("CS4013")
//!         .with_programme("LM121")
//!         .with_year_semester(1, 1)
//!         .with_hours(2, 0, 0),
//! );
//! catalog.rooms.push(Room::new("C1", RoomKind::Classroom, 120));
//! catalog.lecturers.push(Lecturer::new("L1", "Grace", "g@uni.ie", "pw", "CSIS"));
//!
//! let mut controller = Controller::new(catalog);
//! let output = controller.regenerate(42);
//! assert_eq!(output.sessions.len(), 2);
//! assert!(output.shortfalls.is_empty());
//! ```
//!
//! Execution is single-threaded and sequential: one owner mutates the
//! store through `&mut`, so the conflict scan and the append are
//! atomic with respect to every observer.

pub mod catalog;
pub mod conflict;
pub mod generator;
pub mod models;
pub mod query;
pub mod records;
pub mod store;
