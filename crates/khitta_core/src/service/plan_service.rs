//! Lesson-plan use-case service.
//!
//! # Responsibility
//! - Provide create/save/get/list entry points over the plan repository.
//! - Run the extraction-then-merge flow against an `Extractor`.
//!
//! # Invariants
//! - Every failure path leaves the caller's in-edit record untouched; the
//!   caller only adopts the record returned by a successful call.
//! - New records are prefilled from the most recently saved profile.

use crate::extract::{ExtractionError, Extractor};
use crate::model::extracted::ExtractedPlan;
use crate::model::plan::{LessonRecord, PlanId};
use crate::repo::plan_repo::{PlanRepository, RepoError, RepoResult};
use crate::service::reconcile::merge_extracted;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for plan use-cases.
#[derive(Debug)]
pub enum PlanServiceError {
    /// Extraction input was blank; the provider contract needs non-empty text.
    EmptyExtractionInput,
    /// Provider-side extraction failure, recoverable by retry.
    Extraction(ExtractionError),
    /// Target plan does not exist.
    PlanNotFound(PlanId),
    /// Persistence-layer failure; the in-edit record stays in memory.
    Repo(RepoError),
}

impl Display for PlanServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExtractionInput => write!(f, "extraction input text is empty"),
            Self::Extraction(err) => write!(f, "{err}"),
            Self::PlanNotFound(id) => write!(f, "lesson plan not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlanServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Extraction(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ExtractionError> for PlanServiceError {
    fn from(value: ExtractionError) -> Self {
        Self::Extraction(value)
    }
}

impl From<RepoError> for PlanServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case facade over plan persistence and extraction.
pub struct PlanService<R: PlanRepository> {
    repo: R,
}

impl<R: PlanRepository> PlanService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a fresh in-memory record, prefilled from the profile of the
    /// most recently saved plan when one exists.
    pub fn new_plan(&self) -> RepoResult<LessonRecord> {
        let record = match self.repo.latest_profile()? {
            Some(profile) => LessonRecord::with_profile(&profile),
            None => LessonRecord::new(),
        };
        Ok(record)
    }

    /// Persists the record by upsert: replace on id match, else append.
    pub fn save_plan(&self, plan: &LessonRecord) -> RepoResult<()> {
        self.repo.upsert_plan(plan)?;
        info!("event=plan_save module=service status=ok plan={}", plan.uuid);
        Ok(())
    }

    /// Loads one plan by id.
    pub fn get_plan(&self, id: PlanId) -> Result<LessonRecord, PlanServiceError> {
        self.repo
            .get_plan(id)?
            .ok_or(PlanServiceError::PlanNotFound(id))
    }

    /// Lists all saved plans, most recently saved first.
    pub fn list_plans(&self) -> RepoResult<Vec<LessonRecord>> {
        self.repo.list_plans()
    }

    /// Runs extraction on free text and folds the result into `current`.
    ///
    /// Returns the merged record; on any failure the error carries the
    /// cause and `current` is left exactly as it was.
    pub fn apply_extraction<E: Extractor>(
        &self,
        current: &LessonRecord,
        extractor: &E,
        free_text: &str,
    ) -> Result<LessonRecord, PlanServiceError> {
        if free_text.trim().is_empty() {
            return Err(PlanServiceError::EmptyExtractionInput);
        }

        let extracted: ExtractedPlan = extractor.extract(free_text)?;
        Ok(merge_extracted(current, &extracted))
    }
}
