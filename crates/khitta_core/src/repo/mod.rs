//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable keyed plan-store contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Writes are upserts: last write wins on identical record ids.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod plan_repo;
