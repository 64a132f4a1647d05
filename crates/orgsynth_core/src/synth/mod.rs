//! Hierarchy synthesis stages.
//!
//! # Responsibility
//! - Allocate band quotas, synthesize employees and assign managers.
//! - Keep randomness injectable: every stage takes a caller-owned `Rng`.
//!
//! # Invariants
//! - Managers always come from a strictly more senior band, so the manager
//!   relation cannot contain cycles.

pub mod band_allocator;
pub mod band_index;
pub mod employee_synth;
pub mod manager_assigner;
pub mod names;
pub mod weighted;
