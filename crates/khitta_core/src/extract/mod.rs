//! Structured-extraction collaborator contract.
//!
//! # Responsibility
//! - Define the free-text → partial-record extraction contract consumed by
//!   the merge reconciler.
//! - Classify extraction failures so callers can surface a retryable,
//!   human-readable cause.
//!
//! # Invariants
//! - Extraction failures never alter the caller's in-edit record.
//! - Objective ids in extraction output are stamped locally, never taken
//!   from the wire.

use crate::model::extracted::ExtractedPlan;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod gemini;

pub use gemini::{decode_plan_json, GeminiExtractor};

/// Failure raised by a structured-extraction provider call.
#[derive(Debug)]
pub enum ExtractionError {
    /// The service could not be reached (DNS, connect, timeout).
    Unreachable(String),
    /// The service answered with a non-success status (bad credential,
    /// quota, unsupported request).
    Rejected { status: u16, message: String },
    /// The response body could not be decoded into the declared shape.
    Malformed(String),
}

impl Display for ExtractionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable(cause) => write!(f, "extraction service unreachable: {cause}"),
            Self::Rejected { status, message } => {
                write!(f, "extraction request rejected (http {status}): {message}")
            }
            Self::Malformed(cause) => write!(f, "extraction response malformed: {cause}"),
        }
    }
}

impl Error for ExtractionError {}

/// Free-text → partial-record extraction contract.
///
/// The core is synchronous and single-threaded, so at most one extraction
/// is outstanding per in-edit record at any time.
pub trait Extractor {
    /// Extracts a best-effort partial lesson record from free text.
    fn extract(&self, free_text: &str) -> Result<ExtractedPlan, ExtractionError>;
}
