//! Manager chain validation.
//!
//! # Responsibility
//! - Prove every employee reaches the root by following `manager_id`.
//!
//! # Invariants
//! - Read-only: never mutates employee records.
//! - Iterative walk with a per-walk visited set; a walk takes at most one
//!   hop per employee, so cycles always terminate.
//! - Only the designated root may end a chain with the "reports to nobody"
//!   sentinel.

use crate::model::employee::{Employee, EmployeeId, NO_MANAGER_ID};
use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};

/// Why one employee's chain does not reach the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFailureKind {
    /// The walk came back to an employee it had already passed.
    Cycle { revisited: EmployeeId },
    /// A `manager_id` names an employee that is not in the population.
    BrokenReference { missing: EmployeeId },
    /// An employee on the chain has no manager assigned.
    Unassigned { at: EmployeeId },
    /// A non-root employee carries the "reports to nobody" sentinel.
    DetachedRoot { at: EmployeeId },
    /// The walk took more hops than there are employees.
    TooLong { hops: usize },
}

/// One failed chain walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainFailure {
    /// Employee the walk started from.
    pub employee_id: EmployeeId,
    pub kind: ChainFailureKind,
}

impl Display for ChainFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let id = self.employee_id;
        match self.kind {
            ChainFailureKind::Cycle { revisited } => {
                write!(f, "employee {id}: chain revisits employee {revisited}")
            }
            ChainFailureKind::BrokenReference { missing } => {
                write!(f, "employee {id}: chain references missing employee {missing}")
            }
            ChainFailureKind::Unassigned { at } => {
                write!(f, "employee {id}: employee {at} on the chain has no manager")
            }
            ChainFailureKind::DetachedRoot { at } => {
                write!(f, "employee {id}: chain ends at non-root employee {at}")
            }
            ChainFailureKind::TooLong { hops } => {
                write!(f, "employee {id}: chain exceeds {hops} hops")
            }
        }
    }
}

/// Outcome of validating a whole population.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainReport {
    /// Number of employees whose chain was walked.
    pub checked: usize,
    /// Every failed walk, in population order.
    pub failures: Vec<ChainFailure>,
    /// Longest successful chain, in hops (`0` for the root alone).
    pub max_depth: usize,
}

impl ChainReport {
    /// Whether every chain reached the root.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Display for ChainReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} employees cannot trace up to the root",
            self.failures.len(),
            self.checked
        )?;
        if let Some(first) = self.failures.first() {
            write!(f, " (first: {first})")?;
        }
        Ok(())
    }
}

/// Walks every employee's manager chain.
pub fn validate_chains(employees: &[Employee]) -> ChainReport {
    let by_id: HashMap<EmployeeId, &Employee> = employees
        .iter()
        .map(|employee| (employee.employee_id, employee))
        .collect();

    let mut report = ChainReport {
        checked: employees.len(),
        ..ChainReport::default()
    };
    for employee in employees {
        match chain_depth(employee, &by_id, employees.len()) {
            Ok(depth) => report.max_depth = report.max_depth.max(depth),
            Err(kind) => report.failures.push(ChainFailure {
                employee_id: employee.employee_id,
                kind,
            }),
        }
    }
    report
}

/// Number of hops from `start` to the root, or why the walk failed.
fn chain_depth(
    start: &Employee,
    by_id: &HashMap<EmployeeId, &Employee>,
    max_hops: usize,
) -> Result<usize, ChainFailureKind> {
    let mut visited = HashSet::new();
    let mut cursor = start;
    let mut hops = 0;
    loop {
        let manager_id = match cursor.manager_id {
            None => {
                return Err(ChainFailureKind::Unassigned {
                    at: cursor.employee_id,
                })
            }
            Some(NO_MANAGER_ID) if cursor.is_root() => return Ok(hops),
            Some(NO_MANAGER_ID) => {
                return Err(ChainFailureKind::DetachedRoot {
                    at: cursor.employee_id,
                })
            }
            Some(manager_id) => manager_id,
        };

        if !visited.insert(cursor.employee_id) {
            return Err(ChainFailureKind::Cycle {
                revisited: cursor.employee_id,
            });
        }
        if hops >= max_hops {
            return Err(ChainFailureKind::TooLong { hops });
        }
        cursor = by_id
            .get(&manager_id)
            .copied()
            .ok_or(ChainFailureKind::BrokenReference {
                missing: manager_id,
            })?;
        hops += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_chains, ChainFailureKind};
    use crate::model::band::JobBand;
    use crate::model::employee::{
        Employee, PersonName, EMPLOYEE_ID_BASE, NO_MANAGER_ID, ROOT_POSITION_ID,
    };

    fn employee(offset: u32, band: u8, manager_offset: u32) -> Employee {
        let mut employee = Employee::new(
            EMPLOYEE_ID_BASE + offset,
            PersonName::new("Test", "Person"),
            JobBand::new(band).unwrap(),
            ROOT_POSITION_ID + 1 + offset,
        );
        employee.report_to(EMPLOYEE_ID_BASE + manager_offset, ROOT_POSITION_ID);
        employee
    }

    fn root() -> Employee {
        Employee::root(PersonName::new("Root", "Person"))
    }

    #[test]
    fn root_alone_is_valid() {
        let report = validate_chains(&[root()]);
        assert!(report.is_valid());
        assert_eq!(report.checked, 1);
        assert_eq!(report.max_depth, 0);
    }

    #[test]
    fn linear_chain_reports_depth() {
        let employees = vec![root(), employee(1, 1, 0), employee(2, 2, 1), employee(3, 3, 2)];
        let report = validate_chains(&employees);
        assert!(report.is_valid());
        assert_eq!(report.max_depth, 3);
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let employees = vec![root(), employee(1, 1, 1)];
        let report = validate_chains(&employees);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures[0].kind,
            ChainFailureKind::Cycle {
                revisited: EMPLOYEE_ID_BASE + 1
            }
        );
    }

    #[test]
    fn unassigned_manager_fails_every_dependent_chain() {
        let mut orphan = employee(1, 1, 0);
        orphan.manager_id = None;
        let employees = vec![root(), orphan, employee(2, 2, 1)];
        let report = validate_chains(&employees);
        assert_eq!(report.failures.len(), 2);
        for failure in &report.failures {
            assert_eq!(
                failure.kind,
                ChainFailureKind::Unassigned {
                    at: EMPLOYEE_ID_BASE + 1
                }
            );
        }
    }

    #[test]
    fn sentinel_on_non_root_is_detached() {
        let mut impostor = employee(1, 1, 0);
        impostor.manager_id = Some(NO_MANAGER_ID);
        let report = validate_chains(&[root(), impostor]);
        assert!(!report.is_valid());
        assert_eq!(
            report.failures[0].kind,
            ChainFailureKind::DetachedRoot {
                at: EMPLOYEE_ID_BASE + 1
            }
        );
    }

    #[test]
    fn report_message_counts_failures() {
        let employees = vec![root(), employee(1, 1, 99)];
        let report = validate_chains(&employees);
        let message = report.to_string();
        assert!(message.starts_with("1 of 2 employees cannot trace up to the root"));
        assert!(message.contains("missing employee 10000100"));
    }
}
