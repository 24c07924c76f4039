//! Teacher profile projection.
//!
//! # Responsibility
//! - Carry the identity subset of a lesson record that changes rarely
//!   between plans, so new records can be prefilled from the last save.

use serde::{Deserialize, Serialize};

/// Prefill subset derived from the most recently saved lesson record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherProfile {
    pub education_area: String,
    pub school_name: String,
    pub teacher_name: String,
    pub emblem_right: String,
    pub emblem_left: String,
}
