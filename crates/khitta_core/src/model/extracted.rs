//! Partial lesson record produced by structured extraction.
//!
//! # Responsibility
//! - Represent an extraction result where every field is independently
//!   absent, present-but-empty, or present-with-value.
//!
//! # Invariants
//! - Objective ids inside a partial record are stamped by the extraction
//!   client, never taken from the wire.

use crate::model::plan::Objective;

/// Extraction output consumed by the merge reconciler.
///
/// `None` means the extraction did not mention the field at all; `Some`
/// carries whatever the provider returned, including blank text, which the
/// reconciler then treats as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPlan {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub grade: Option<String>,
    pub education_area: Option<String>,
    pub school_name: Option<String>,
    pub teacher_name: Option<String>,
    pub date: Option<String>,
    /// Advisory weekday label; only honored when `date` was freshly accepted
    /// or the current record holds no date-derived day.
    pub day: Option<String>,
    pub methods: Option<Vec<String>>,
    pub aids: Option<Vec<String>>,
    pub introduction: Option<String>,
    pub closure: Option<String>,
    pub cognitive: Option<Vec<Objective>>,
    pub psychomotor: Option<Vec<Objective>>,
    pub affective: Option<Vec<Objective>>,
}
