//! Lesson-plan domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one record shape shared by editing, merging, and persistence.
//!
//! # Invariants
//! - Every record is identified by a stable `PlanId`.
//! - Enumerated fields hold labels from the fixed catalogs.

pub mod catalog;
pub mod extracted;
pub mod plan;
pub mod profile;
pub mod weekday;
