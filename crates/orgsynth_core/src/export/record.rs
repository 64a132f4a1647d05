//! Flat export records.
//!
//! # Invariants
//! - One record per employee, in population order.
//! - The root row uses `TOP_NODE_NAME`, band `0` and the "reports to
//!   nobody" position sentinel for its manager columns.

use crate::export::ExportError;
use crate::model::employee::{Employee, EmployeeId, PositionId, NO_MANAGER_POSITION_ID};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Manager display name written for the root.
pub const TOP_NODE_NAME: &str = "Top Node";

/// Column order of the exported table.
pub const EXPORT_COLUMNS: [&str; 9] = [
    "employee_id",
    "full_name",
    "job_band",
    "generic_job_title",
    "position_id",
    "manager_id",
    "manager_full_name",
    "manager_job_band",
    "manager_position_id",
];

/// One exported row. Field order matches `EXPORT_COLUMNS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub job_band: u8,
    pub generic_job_title: String,
    pub position_id: PositionId,
    pub manager_id: EmployeeId,
    pub manager_full_name: String,
    pub manager_job_band: u8,
    pub manager_position_id: PositionId,
}

impl ExportRecord {
    /// Cell values in column order, unescaped.
    pub fn cells(&self) -> [String; 9] {
        [
            self.employee_id.to_string(),
            self.full_name.clone(),
            self.job_band.to_string(),
            self.generic_job_title.clone(),
            self.position_id.to_string(),
            self.manager_id.to_string(),
            self.manager_full_name.clone(),
            self.manager_job_band.to_string(),
            self.manager_position_id.to_string(),
        ]
    }
}

/// Flattens employees and resolves manager display fields.
///
/// # Errors
/// - `ExportError::UnassignedManager` when an employee has no manager yet.
/// - `ExportError::MissingManager` when a manager id is not in `employees`.
pub fn build_records(employees: &[Employee]) -> Result<Vec<ExportRecord>, ExportError> {
    let by_id: HashMap<EmployeeId, &Employee> = employees
        .iter()
        .map(|employee| (employee.employee_id, employee))
        .collect();

    employees
        .iter()
        .map(|employee| -> Result<ExportRecord, ExportError> {
            let manager_id = employee
                .manager_id
                .ok_or(ExportError::UnassignedManager(employee.employee_id))?;
            let (manager_full_name, manager_job_band, manager_position_id) =
                if employee.reports_to_nobody() {
                    (TOP_NODE_NAME.to_string(), 0, NO_MANAGER_POSITION_ID)
                } else {
                    let manager = by_id.get(&manager_id).ok_or(ExportError::MissingManager {
                        employee_id: employee.employee_id,
                        manager_id,
                    })?;
                    (
                        manager.full_name.clone(),
                        manager.job_band.value(),
                        manager.position_id,
                    )
                };

            Ok(ExportRecord {
                employee_id: employee.employee_id,
                full_name: employee.full_name.clone(),
                job_band: employee.job_band.value(),
                generic_job_title: employee.generic_job_title.clone(),
                position_id: employee.position_id,
                manager_id,
                manager_full_name,
                manager_job_band,
                manager_position_id,
            })
        })
        .collect()
}
