//! Weekday labels and date → weekday derivation.
//!
//! # Responsibility
//! - Own the fixed seven-label weekday set used by lesson records.
//! - Derive the weekday for a `YYYY-MM-DD` date without timezone drift.
//!
//! # Invariants
//! - Label indices are 0=Sunday .. 6=Saturday.
//! - Derivation never panics and never errors into the caller; an
//!   unparseable date yields `None` and the caller keeps its prior label.

use chrono::{Datelike, NaiveDate};
use log::debug;

/// Wire/storage format for the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One of the seven fixed weekday labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Labels indexed 0=Sunday .. 6=Saturday, matching form display order.
const LABELS: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

impl Weekday {
    /// Returns the localized display label.
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Returns the 0=Sunday .. 6=Saturday index.
    pub fn index(self) -> usize {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Returns the weekday for a 0=Sunday .. 6=Saturday index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Sunday),
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    /// Parses a display label back into a weekday.
    pub fn from_label(label: &str) -> Option<Self> {
        LABELS
            .iter()
            .position(|known| *known == label.trim())
            .and_then(Self::from_index)
    }

    /// Returns all labels in display order.
    pub fn labels() -> &'static [&'static str; 7] {
        &LABELS
    }
}

/// Derives the weekday for a `YYYY-MM-DD` date.
///
/// The text is parsed as a plain calendar date with no time-of-day and no
/// timezone, so the computation cannot shift across midnight boundaries.
///
/// Returns `None` when the text is not a valid calendar date; the caller is
/// expected to keep its previous weekday label in that case.
pub fn derive_weekday(date_text: &str) -> Option<Weekday> {
    match NaiveDate::parse_from_str(date_text.trim(), DATE_FORMAT) {
        Ok(date) => Weekday::from_index(date.weekday().num_days_from_sunday() as usize),
        Err(err) => {
            debug!(
                "event=weekday_derive module=model status=skip reason=unparseable_date error={err}"
            );
            None
        }
    }
}
