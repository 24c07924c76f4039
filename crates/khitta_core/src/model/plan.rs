//! Lesson-plan domain model.
//!
//! # Responsibility
//! - Define the canonical lesson-plan record edited and persisted by core.
//! - Define behavioral objectives and their per-domain sequences.
//!
//! # Invariants
//! - `uuid` is stable for the record lifetime and never reused.
//! - Objective ids within one sequence are pairwise distinct.
//! - `day`, when set, is one of the seven fixed weekday labels.

use crate::model::profile::TeacherProfile;
use crate::model::weekday::{derive_weekday, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a lesson-plan record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PlanId = Uuid;

/// Stable identifier for one behavioral objective inside a record.
pub type ObjectiveId = Uuid;

/// Pedagogical domain owning one objective sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveDomain {
    Cognitive,
    Psychomotor,
    Affective,
}

/// One behavioral-objective entry within a domain sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    /// Unique within the owning sequence, assigned at creation, never reused.
    pub uuid: ObjectiveId,
    /// Taxonomy level label for the owning domain (see `model::catalog`).
    pub level: String,
    /// Free-text formulation of the objective.
    pub formulation: String,
    /// Free-text evaluation method for the objective.
    pub evaluation: String,
}

impl Objective {
    /// Creates an objective with a fresh stable id.
    pub fn new(
        level: impl Into<String>,
        formulation: impl Into<String>,
        evaluation: impl Into<String>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            level: level.into(),
            formulation: formulation.into(),
            evaluation: evaluation.into(),
        }
    }
}

/// Canonical lesson-plan document.
///
/// All scalar fields are plain text; `date` is `YYYY-MM-DD` text and `day`
/// is derived from it (the extraction path may supply `day` directly as a
/// fallback when no date is available).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    /// Stable record id used as the persistence key.
    pub uuid: PlanId,
    pub title: String,
    pub subject: String,
    pub grade: String,
    pub education_area: String,
    pub school_name: String,
    pub teacher_name: String,
    /// School emblem image references carried through from the profile.
    pub emblem_right: String,
    pub emblem_left: String,
    /// Calendar date as `YYYY-MM-DD` text; empty when not yet set.
    pub date: String,
    /// Weekday label derived from `date`.
    pub day: String,
    /// Selected teaching methods, each drawn from the fixed catalog.
    pub methods: Vec<String>,
    /// Selected teaching aids, each drawn from the fixed catalog.
    pub aids: Vec<String>,
    pub introduction: String,
    pub closure: String,
    pub cognitive: Vec<Objective>,
    pub psychomotor: Vec<Objective>,
    pub affective: Vec<Objective>,
}

impl LessonRecord {
    /// Creates an empty record with a fresh stable id and locale defaults.
    ///
    /// The default `day` mirrors the original form defaults: a record starts
    /// on Sunday until a date is entered.
    pub fn new() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            title: String::new(),
            subject: String::new(),
            grade: String::new(),
            education_area: String::new(),
            school_name: String::new(),
            teacher_name: String::new(),
            emblem_right: String::new(),
            emblem_left: String::new(),
            date: String::new(),
            day: Weekday::Sunday.label().to_string(),
            methods: Vec::new(),
            aids: Vec::new(),
            introduction: String::new(),
            closure: String::new(),
            cognitive: Vec::new(),
            psychomotor: Vec::new(),
            affective: Vec::new(),
        }
    }

    /// Creates a record prefilled from the saved teacher profile.
    pub fn with_profile(profile: &TeacherProfile) -> Self {
        let mut record = Self::new();
        record.education_area = profile.education_area.clone();
        record.school_name = profile.school_name.clone();
        record.teacher_name = profile.teacher_name.clone();
        record.emblem_right = profile.emblem_right.clone();
        record.emblem_left = profile.emblem_left.clone();
        record
    }

    /// Returns the objective sequence for one domain.
    pub fn objectives(&self, domain: ObjectiveDomain) -> &[Objective] {
        match domain {
            ObjectiveDomain::Cognitive => &self.cognitive,
            ObjectiveDomain::Psychomotor => &self.psychomotor,
            ObjectiveDomain::Affective => &self.affective,
        }
    }

    /// Returns the mutable objective sequence for one domain.
    pub fn objectives_mut(&mut self, domain: ObjectiveDomain) -> &mut Vec<Objective> {
        match domain {
            ObjectiveDomain::Cognitive => &mut self.cognitive,
            ObjectiveDomain::Psychomotor => &mut self.psychomotor,
            ObjectiveDomain::Affective => &mut self.affective,
        }
    }

    /// Sets the date and re-derives the weekday label.
    ///
    /// An unparseable date still overwrites the stored text but keeps the
    /// prior weekday label; the degradation is silent by contract.
    pub fn set_date(&mut self, date_text: impl Into<String>) {
        self.date = date_text.into();
        if let Some(day) = derive_weekday(&self.date) {
            self.day = day.label().to_string();
        }
    }

    /// Appends a fresh objective to one domain sequence and returns its id.
    ///
    /// Ids are assigned at creation and never reused, so consecutive calls
    /// always produce pairwise distinct ids.
    pub fn add_objective(
        &mut self,
        domain: ObjectiveDomain,
        level: impl Into<String>,
        formulation: impl Into<String>,
        evaluation: impl Into<String>,
    ) -> ObjectiveId {
        let objective = Objective::new(level, formulation, evaluation);
        let id = objective.uuid;
        self.objectives_mut(domain).push(objective);
        id
    }

    /// Projects the profile subset used to prefill the next record.
    pub fn profile(&self) -> TeacherProfile {
        TeacherProfile {
            education_area: self.education_area.clone(),
            school_name: self.school_name.clone(),
            teacher_name: self.teacher_name.clone(),
            emblem_right: self.emblem_right.clone(),
            emblem_left: self.emblem_left.clone(),
        }
    }
}

impl Default for LessonRecord {
    fn default() -> Self {
        Self::new()
    }
}
