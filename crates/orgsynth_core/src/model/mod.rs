//! Domain model for synthesized org hierarchies.
//!
//! # Responsibility
//! - Define employee records and seniority bands used by every stage.
//!
//! # Invariants
//! - Every employee is identified by a stable `EmployeeId`.
//! - Band `0` belongs to exactly one employee: the root.

pub mod band;
pub mod employee;
pub mod headcount;
