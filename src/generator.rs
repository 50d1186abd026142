//! Greedy timetable generator.
//!
//! Decomposes each module's weekly contact hours into unit-hour
//! session requests and places each one into the first conflict-free
//! (day, hour, room) combination, with day/hour/room candidate orders
//! shuffled to avoid systematic bias. First fit only: no backtracking,
//! no lookahead, and no optimality guarantee.
//!
//! The random source is injected and seeded, so a run is reproducible
//! from its seed. A request that exhausts the whole search space is
//! abandoned and reported as a shortfall; generation always completes.

use std::fmt;

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::catalog::Catalog;
use crate::conflict::{cohort_conflict, direct_conflicts};
use crate::models::{Day, Lecturer, Module, Room, ScheduledSession, Timeslot, GROUP_ALL};
use crate::records::SessionRecord;

/// Earliest session start hour (09:00).
const FIRST_START_HOUR: u32 = 9;
/// Hour by which all sessions must end (18:00); last start is 17:00.
const LAST_END_HOUR: u32 = 18;
/// Minimum room capacity for whole-cohort sessions.
const COHORT_CAPACITY: u32 = 60;
/// Minimum room capacity for sub-group sessions.
const SUBGROUP_CAPACITY: u32 = 30;

/// Kind of teaching block being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Whole-cohort lecture, needs a classroom.
    Lecture,
    /// Sub-group lab, needs a laboratory.
    Lab,
    /// Sub-group tutorial, needs a classroom.
    Tutorial,
}

impl BlockKind {
    fn needs_lab(self) -> bool {
        self == BlockKind::Lab
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockKind::Lecture => "lecture",
            BlockKind::Lab => "lab",
            BlockKind::Tutorial => "tutorial",
        })
    }
}

/// Hours of one block that could not be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    /// Module the block belongs to.
    pub module_code: String,
    /// Which kind of block fell short.
    pub kind: BlockKind,
    /// Group the block was for.
    pub group_id: String,
    /// Hours left unplaced when the search space was exhausted.
    pub hours_unplaced: u32,
}

/// Result of one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerationOutput {
    /// Accepted sessions, in generation order.
    pub sessions: Vec<ScheduledSession>,
    /// Export rows mirroring `sessions`, ids sequential from 1.
    pub export: Vec<SessionRecord>,
    /// Blocks (or parts of blocks) that could not be placed.
    pub shortfalls: Vec<Shortfall>,
}

/// The greedy placement engine.
pub struct Generator {
    rng: SmallRng,
}

impl Generator {
    /// Creates a generator seeded for a reproducible run.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator from an existing random source.
    pub fn from_rng(rng: SmallRng) -> Self {
        Self { rng }
    }

    /// Generates a full schedule for every module in the catalog.
    ///
    /// Modules are processed in a shuffled order. Each module is
    /// assigned one lecturer by a stable hash of its code, then its
    /// hours are decomposed into unit-hour requests: lectures for the
    /// whole cohort, labs and tutorials once per sub-group ("G1" and
    /// "G2"). Shortfalls never abort the run.
    pub fn generate(&mut self, catalog: &Catalog) -> GenerationOutput {
        let mut out = GenerationOutput::default();
        let mut next_id = 1u32;

        let mut order: Vec<usize> = (0..catalog.modules.len()).collect();
        order.shuffle(&mut self.rng);

        for &idx in &order {
            let module = &catalog.modules[idx];
            let blocks = requested_blocks(module);

            let Some(lecturer) = pick_lecturer(module, &catalog.lecturers) else {
                warn!("no lecturer available for {}", module.code);
                for (kind, group, hours) in blocks {
                    out.shortfalls.push(Shortfall {
                        module_code: module.code.clone(),
                        kind,
                        group_id: group.to_string(),
                        hours_unplaced: hours,
                    });
                }
                continue;
            };

            for (kind, group, hours) in blocks {
                self.schedule_block(&mut out, &mut next_id, catalog, module, lecturer, kind, group, hours);
            }
        }

        info!(
            "generated {} sessions, {} blocks with shortfalls",
            out.sessions.len(),
            out.shortfalls.len()
        );
        out
    }

    /// Places up to `hours` unit-hour sessions for one block.
    #[allow(clippy::too_many_arguments)]
    fn schedule_block(
        &mut self,
        out: &mut GenerationOutput,
        next_id: &mut u32,
        catalog: &Catalog,
        module: &Module,
        lecturer: &Lecturer,
        kind: BlockKind,
        group: &str,
        hours: u32,
    ) {
        let mut remaining = hours;
        while remaining > 0 {
            let Some(session) = self.find_free_slot(&out.sessions, catalog, module, lecturer, kind, group)
            else {
                warn!(
                    "could not place {} ({}, group {}): {} hour(s) unplaced",
                    module.code, kind, group, remaining
                );
                out.shortfalls.push(Shortfall {
                    module_code: module.code.clone(),
                    kind,
                    group_id: group.to_string(),
                    hours_unplaced: remaining,
                });
                break;
            };

            out.export.push(SessionRecord {
                session_id: *next_id,
                module_code: module.code.clone(),
                day: session.timeslot.day,
                start_hour: session.timeslot.start_hour,
                end_hour: session.timeslot.end_hour(),
                room_id: session.room.id.clone(),
                lecturer_id: lecturer.id.clone(),
                group_id: group.to_string(),
            });
            *next_id += 1;

            remaining -= session.timeslot.duration_hours;
            out.sessions.push(session);
        }
    }

    /// Searches for a conflict-free unit-hour slot.
    ///
    /// Day, hour, and room candidate orders are each shuffled, then
    /// iterated day x hour x room; the first candidate passing both
    /// the direct and the cohort predicate against everything accepted
    /// so far wins. `None` when the space is exhausted.
    fn find_free_slot(
        &mut self,
        accepted: &[ScheduledSession],
        catalog: &Catalog,
        module: &Module,
        lecturer: &Lecturer,
        kind: BlockKind,
        group: &str,
    ) -> Option<ScheduledSession> {
        let mut days = Day::ALL.to_vec();
        days.shuffle(&mut self.rng);

        let mut hours: Vec<u32> = (FIRST_START_HOUR..LAST_END_HOUR).collect();
        hours.shuffle(&mut self.rng);

        let needed = required_capacity(group);
        let mut rooms: Vec<&Room> = catalog
            .rooms
            .iter()
            .filter(|r| r.is_lab() == kind.needs_lab() && r.capacity >= needed)
            .collect();
        rooms.shuffle(&mut self.rng);

        for &day in &days {
            for &hour in &hours {
                let slot = Timeslot::new(day, hour, 1);
                for room in &rooms {
                    let candidate = ScheduledSession::new(
                        module.clone(),
                        lecturer.clone(),
                        (*room).clone(),
                        slot,
                        group,
                    );
                    let blocked = accepted.iter().any(|existing| {
                        !direct_conflicts(existing, &candidate).is_empty()
                            || cohort_conflict(existing, &candidate)
                    });
                    if !blocked {
                        return Some(candidate);
                    }
                }
            }
        }
        None
    }
}

/// Decomposes a module's weekly hours into block requests.
///
/// Lab and tutorial hours are requested once per sub-group, so a
/// module with 2 lab hours yields 2 G1 hours plus 2 G2 hours.
fn requested_blocks(module: &Module) -> Vec<(BlockKind, &'static str, u32)> {
    let mut blocks = Vec::new();
    if module.lec_hours > 0 {
        blocks.push((BlockKind::Lecture, GROUP_ALL, module.lec_hours));
    }
    if module.lab_hours > 0 {
        blocks.push((BlockKind::Lab, "G1", module.lab_hours));
        blocks.push((BlockKind::Lab, "G2", module.lab_hours));
    }
    if module.tut_hours > 0 {
        blocks.push((BlockKind::Tutorial, "G1", module.tut_hours));
        blocks.push((BlockKind::Tutorial, "G2", module.tut_hours));
    }
    blocks
}

/// Picks the lecturer for a module: stable hash of the module code
/// modulo the lecturer count. Same code, same lecturer, every run.
fn pick_lecturer<'a>(module: &Module, lecturers: &'a [Lecturer]) -> Option<&'a Lecturer> {
    if lecturers.is_empty() {
        return None;
    }
    let idx = (stable_hash(&module.code) % lecturers.len() as u64) as usize;
    Some(&lecturers[idx])
}

/// FNV-1a. The std hasher is not stable across releases; lecturer
/// assignment must not move when the toolchain does.
fn stable_hash(s: &str) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for b in s.bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h
}

/// Minimum room capacity for a group: the whole cohort needs a large
/// room, sub-groups a smaller one.
fn required_capacity(group: &str) -> u32 {
    if group.eq_ignore_ascii_case(GROUP_ALL) {
        COHORT_CAPACITY
    } else {
        SUBGROUP_CAPACITY
    }
}
