//! Room model.
//!
//! Rooms are the physical resources sessions are placed into. The kind
//! split (classroom vs laboratory) drives candidate filtering in the
//! placement engine: lab hours only go into laboratories, everything
//! else only into classrooms.

use serde::{Deserialize, Serialize};

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    /// General teaching room (lectures, tutorials).
    Classroom,
    /// Specialist room for lab sessions.
    Laboratory,
}

impl RoomKind {
    /// Classifies a kind string from an import record.
    ///
    /// `"laboratory"` (any case) is a laboratory; every other value is
    /// treated as a classroom.
    pub fn classify(s: &str) -> Self {
        if s.eq_ignore_ascii_case("laboratory") {
            RoomKind::Laboratory
        } else {
            RoomKind::Classroom
        }
    }
}

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Room classification.
    pub kind: RoomKind,
    /// Seating capacity.
    pub capacity: u32,
    /// Building the room is located in.
    pub building: String,
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, kind: RoomKind, capacity: u32) -> Self {
        Self {
            id: id.into(),
            kind,
            capacity,
            building: String::new(),
        }
    }

    /// Sets the building.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    /// Whether this room is a laboratory.
    #[inline]
    pub fn is_lab(&self) -> bool {
        self.kind == RoomKind::Laboratory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_kind() {
        assert_eq!(RoomKind::classify("Laboratory"), RoomKind::Laboratory);
        assert_eq!(RoomKind::classify("LABORATORY"), RoomKind::Laboratory);
        assert_eq!(RoomKind::classify("Classroom"), RoomKind::Classroom);
        // Anything unrecognized is a plain classroom
        assert_eq!(RoomKind::classify("Lecture Hall"), RoomKind::Classroom);
    }

    #[test]
    fn test_room_builder() {
        let r = Room::new("R101", RoomKind::Laboratory, 40).with_building("Science Block");
        assert_eq!(r.id, "R101");
        assert_eq!(r.capacity, 40);
        assert_eq!(r.building, "Science Block");
        assert!(r.is_lab());

        let c = Room::new("C1", RoomKind::Classroom, 120);
        assert!(!c.is_lab());
    }
}
