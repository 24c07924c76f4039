//! Core domain logic for Khitta lesson-plan composition.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod extract;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use extract::{ExtractionError, Extractor, GeminiExtractor};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::extracted::ExtractedPlan;
pub use model::plan::{LessonRecord, Objective, ObjectiveDomain, ObjectiveId, PlanId};
pub use model::profile::TeacherProfile;
pub use model::weekday::{derive_weekday, Weekday, DATE_FORMAT};
pub use repo::plan_repo::{PlanRepository, RepoError, RepoResult, SqlitePlanRepository};
pub use service::plan_service::{PlanService, PlanServiceError};
pub use service::reconcile::{merge_extracted, EmptyField};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
