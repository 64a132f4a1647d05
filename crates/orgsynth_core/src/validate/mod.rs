//! Hierarchy validation.
//!
//! # Responsibility
//! - Check synthesized hierarchies before anything is exported.
//!
//! # Invariants
//! - Validation never mutates the population it checks.

pub mod chain;
