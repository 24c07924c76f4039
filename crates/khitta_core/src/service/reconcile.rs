//! Field-merge reconciliation between an in-edit record and extraction output.
//!
//! # Responsibility
//! - Fold an extracted partial record into the current record with
//!   fill-only-if-empty semantics.
//! - Define the single emptiness predicate gating every fill decision.
//!
//! # Invariants
//! - A field the user already filled is never overwritten, with one scoped
//!   exception: `day` is refreshed when `date` was freshly accepted from the
//!   extraction, keeping day and date mutually consistent.
//! - `merge_extracted` is pure: inputs are not mutated and identical inputs
//!   produce identical output.

use crate::model::extracted::ExtractedPlan;
use crate::model::plan::{LessonRecord, Objective};
use crate::model::weekday::derive_weekday;

/// Emptiness classification for form field values.
///
/// Total over every field type in the record: absence, whitespace-only
/// text, and zero-element sequences count as empty; everything else is
/// present. Structured values (objectives) are always present.
pub trait EmptyField {
    fn is_empty_field(&self) -> bool;
}

impl EmptyField for str {
    fn is_empty_field(&self) -> bool {
        self.trim().is_empty()
    }
}

impl EmptyField for String {
    fn is_empty_field(&self) -> bool {
        self.as_str().is_empty_field()
    }
}

impl<T> EmptyField for Vec<T> {
    fn is_empty_field(&self) -> bool {
        self.is_empty()
    }
}

impl<T: EmptyField> EmptyField for Option<T> {
    fn is_empty_field(&self) -> bool {
        match self {
            None => true,
            Some(value) => value.is_empty_field(),
        }
    }
}

impl EmptyField for Objective {
    fn is_empty_field(&self) -> bool {
        false
    }
}

/// Merges extraction output into the current record.
///
/// Every extracted field fills the corresponding record field only when the
/// extracted value is present and the current value is empty; user-provided
/// values always win. The weekday is excluded from that loop and handled by
/// the date coupling below.
///
/// # Weekday coupling
/// When the `date` value changed (it was empty and the extracted date was
/// accepted), `day` is re-derived from the new date, and an extracted `day`
/// label, if supplied, overrides the derived one. When the date did not
/// change, `day` is left untouched regardless of what the extraction sent.
pub fn merge_extracted(current: &LessonRecord, extracted: &ExtractedPlan) -> LessonRecord {
    let mut merged = current.clone();

    fill(&mut merged.title, extracted.title.as_ref());
    fill(&mut merged.subject, extracted.subject.as_ref());
    fill(&mut merged.grade, extracted.grade.as_ref());
    fill(&mut merged.education_area, extracted.education_area.as_ref());
    fill(&mut merged.school_name, extracted.school_name.as_ref());
    fill(&mut merged.teacher_name, extracted.teacher_name.as_ref());
    fill(&mut merged.date, extracted.date.as_ref());
    fill(&mut merged.methods, extracted.methods.as_ref());
    fill(&mut merged.aids, extracted.aids.as_ref());
    fill(&mut merged.introduction, extracted.introduction.as_ref());
    fill(&mut merged.closure, extracted.closure.as_ref());
    fill(&mut merged.cognitive, extracted.cognitive.as_ref());
    fill(&mut merged.psychomotor, extracted.psychomotor.as_ref());
    fill(&mut merged.affective, extracted.affective.as_ref());

    if merged.date != current.date {
        if let Some(derived) = derive_weekday(&merged.date) {
            merged.day = derived.label().to_string();
        }
        if let Some(day) = extracted.day.as_ref() {
            if !day.is_empty_field() {
                merged.day = day.clone();
            }
        }
    }

    merged
}

fn fill<T: EmptyField + Clone>(slot: &mut T, candidate: Option<&T>) {
    let Some(value) = candidate else {
        return;
    };
    if value.is_empty_field() || !slot.is_empty_field() {
        return;
    }
    *slot = value.clone();
}
