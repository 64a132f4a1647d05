//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate synthesis, validation and export into one use-case API.
//! - Keep CLI callers decoupled from pipeline stage details.

pub mod org_service;
