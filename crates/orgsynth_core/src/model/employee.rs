//! Employee domain model.
//!
//! # Responsibility
//! - Define the mutable employee record produced by synthesis.
//! - Own the identifier bases and "reports to nobody" sentinels.
//!
//! # Invariants
//! - `employee_id` values are assigned as `EMPLOYEE_ID_BASE + index`.
//! - Only the root carries `NO_MANAGER_ID` / `NO_MANAGER_POSITION_ID`.
//! - Non-root manager fields stay `None` until manager assignment runs.

use crate::model::band::JobBand;
use serde::{Deserialize, Serialize};

/// Employee identifier. Kept as an alias so signatures read by intent.
pub type EmployeeId = u32;

/// Position identifier. Not required to be unique.
pub type PositionId = u32;

/// Id of the first synthesized employee (the root).
pub const EMPLOYEE_ID_BASE: EmployeeId = 10_000_001;
/// Manager id carried by the root: "reports to nobody".
pub const NO_MANAGER_ID: EmployeeId = 10_000_000;
/// Position id reserved for the root.
pub const ROOT_POSITION_ID: PositionId = 20_000_001;
/// Manager position id carried by the root.
pub const NO_MANAGER_POSITION_ID: PositionId = 20_000_000;

/// First/last name pair handed out by a name supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }
}

/// One synthesized employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    /// Always `"{first_name} {last_name}"`.
    pub full_name: String,
    pub job_band: JobBand,
    pub position_id: PositionId,
    pub generic_job_title: String,
    /// `None` until assigned; `Some(NO_MANAGER_ID)` for the root.
    pub manager_id: Option<EmployeeId>,
    /// Mirrors the manager's `position_id` at assignment time.
    pub manager_position_id: Option<PositionId>,
}

impl Employee {
    /// Creates the root employee with fixed identifiers and sentinel links.
    pub fn root(name: PersonName) -> Self {
        let mut root = Self::new(EMPLOYEE_ID_BASE, name, JobBand::ROOT, ROOT_POSITION_ID);
        root.manager_id = Some(NO_MANAGER_ID);
        root.manager_position_id = Some(NO_MANAGER_POSITION_ID);
        root
    }

    /// Creates an employee with unresolved manager fields.
    ///
    /// The generic title is derived from `job_band`.
    pub fn new(
        employee_id: EmployeeId,
        name: PersonName,
        job_band: JobBand,
        position_id: PositionId,
    ) -> Self {
        let full_name = format!("{} {}", name.first, name.last);
        Self {
            employee_id,
            first_name: name.first,
            last_name: name.last,
            full_name,
            job_band,
            position_id,
            generic_job_title: job_band.generic_title().to_string(),
            manager_id: None,
            manager_position_id: None,
        }
    }

    /// Points this employee at `manager`.
    pub fn report_to(&mut self, manager_id: EmployeeId, manager_position_id: PositionId) {
        self.manager_id = Some(manager_id);
        self.manager_position_id = Some(manager_position_id);
    }

    /// Whether this employee carries the "reports to nobody" sentinel.
    pub fn reports_to_nobody(&self) -> bool {
        self.manager_id == Some(NO_MANAGER_ID)
    }

    /// Whether this is the designated root employee.
    pub fn is_root(&self) -> bool {
        self.employee_id == EMPLOYEE_ID_BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_carries_sentinels_and_ceo_title() {
        let root = Employee::root(PersonName::new("Ada", "Lovelace"));
        assert_eq!(root.employee_id, EMPLOYEE_ID_BASE);
        assert_eq!(root.position_id, ROOT_POSITION_ID);
        assert_eq!(root.job_band, JobBand::ROOT);
        assert_eq!(root.generic_job_title, "CEO");
        assert_eq!(root.manager_id, Some(NO_MANAGER_ID));
        assert_eq!(root.manager_position_id, Some(NO_MANAGER_POSITION_ID));
        assert!(root.is_root());
        assert!(root.reports_to_nobody());
    }

    #[test]
    fn new_derives_full_name_and_leaves_manager_unresolved() {
        let band = JobBand::new(6).unwrap();
        let employee = Employee::new(
            EMPLOYEE_ID_BASE + 3,
            PersonName::new("Grace", "Hopper"),
            band,
            20_000_004,
        );
        assert_eq!(employee.full_name, "Grace Hopper");
        assert_eq!(employee.generic_job_title, "Team Lead");
        assert_eq!(employee.manager_id, None);
        assert_eq!(employee.manager_position_id, None);
        assert!(!employee.is_root());
    }

    #[test]
    fn report_to_sets_both_manager_fields() {
        let mut employee = Employee::new(
            EMPLOYEE_ID_BASE + 1,
            PersonName::new("Alan", "Turing"),
            JobBand::new(1).unwrap(),
            20_000_002,
        );
        employee.report_to(EMPLOYEE_ID_BASE, ROOT_POSITION_ID);
        assert_eq!(employee.manager_id, Some(EMPLOYEE_ID_BASE));
        assert_eq!(employee.manager_position_id, Some(ROOT_POSITION_ID));
        assert!(!employee.reports_to_nobody());
    }
}
