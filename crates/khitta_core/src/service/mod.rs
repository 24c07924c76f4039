//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and extraction calls into use-case level APIs.
//! - Keep UI layers decoupled from storage and provider details.

pub mod plan_service;
pub mod reconcile;
