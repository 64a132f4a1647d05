//! Manager assignment with a band-proximity bias.
//!
//! # Responsibility
//! - Give every non-root employee exactly one manager from a strictly more
//!   senior band.
//!
//! # Invariants
//! - Candidates are all employees in bands `0..band`.
//! - A candidate one band up weighs `IMMEDIATE_SENIOR_WEIGHT`; every other
//!   candidate weighs `DISTANT_SENIOR_WEIGHT`, regardless of distance.
//! - Band-0 employees are never assigned a manager.
//!
//! The draw runs in two stages with the same distribution as a per-candidate
//! weighted pick: first a band weighted by `weight * bucket size`, then a
//! uniform member of that bucket.

use crate::model::band::JobBand;
use crate::model::employee::{Employee, EmployeeId};
use crate::synth::band_index::BandIndex;
use crate::synth::weighted::pick_weighted;
use log::debug;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Per-candidate weight for managers exactly one band up.
pub const IMMEDIATE_SENIOR_WEIGHT: f64 = 0.95;
/// Per-candidate weight for managers two or more bands up.
pub const DISTANT_SENIOR_WEIGHT: f64 = 0.05;

/// Errors from manager assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// Nobody is more senior than this employee.
    NoEligibleManager {
        employee_id: EmployeeId,
        job_band: JobBand,
    },
}

impl Display for AssignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEligibleManager {
                employee_id,
                job_band,
            } => write!(
                f,
                "no eligible manager for employee {employee_id} in band {job_band}"
            ),
        }
    }
}

impl Error for AssignError {}

/// Counters collected while assigning managers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentStats {
    /// Employees that received a manager.
    pub assigned: usize,
    /// Of those, employees whose manager sits exactly one band up.
    pub immediate_senior: usize,
}

/// Assigns managers in place.
///
/// `index` must have been built from `employees`.
///
/// # Errors
/// - `AssignError::NoEligibleManager` when a non-root employee has no more
///   senior colleague. Employees before it keep their assignment.
pub fn assign_managers<R>(
    employees: &mut [Employee],
    index: &BandIndex,
    rng: &mut R,
) -> Result<AssignmentStats, AssignError>
where
    R: Rng + ?Sized,
{
    let mut stats = AssignmentStats::default();
    for position in 0..employees.len() {
        let band = employees[position].job_band;
        if band.is_root() {
            continue;
        }

        let manager_position = pick_manager(index, band, rng).ok_or_else(|| {
            AssignError::NoEligibleManager {
                employee_id: employees[position].employee_id,
                job_band: band,
            }
        })?;
        let manager = &employees[manager_position];
        let (manager_id, manager_position_id, manager_band) =
            (manager.employee_id, manager.position_id, manager.job_band);

        employees[position].report_to(manager_id, manager_position_id);
        stats.assigned += 1;
        if band.one_up() == Some(manager_band) {
            stats.immediate_senior += 1;
        }
    }

    debug!(
        "event=managers_assigned module=synth assigned={} immediate_senior={}",
        stats.assigned, stats.immediate_senior
    );
    Ok(stats)
}

fn pick_manager<R>(index: &BandIndex, band: JobBand, rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    let immediate = band.one_up();
    let senior_bands: Vec<(JobBand, f64)> = JobBand::assignable()
        .take_while(|candidate| *candidate < band)
        .map(|candidate| {
            let weight = if Some(candidate) == immediate {
                IMMEDIATE_SENIOR_WEIGHT
            } else {
                DISTANT_SENIOR_WEIGHT
            };
            (candidate, weight * index.count(candidate) as f64)
        })
        .collect();

    let chosen = *pick_weighted(rng, &senior_bands)?;
    let bucket = index.bucket(chosen);
    if bucket.is_empty() {
        return None;
    }
    Some(bucket[rng.gen_range(0..bucket.len())])
}

#[cfg(test)]
mod tests {
    use super::{assign_managers, AssignError};
    use crate::model::band::JobBand;
    use crate::model::employee::{Employee, PersonName, EMPLOYEE_ID_BASE, ROOT_POSITION_ID};
    use crate::synth::band_index::BandIndex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn employee(offset: u32, band: u8) -> Employee {
        Employee::new(
            EMPLOYEE_ID_BASE + offset,
            PersonName::new("Test", "Person"),
            JobBand::new(band).unwrap(),
            ROOT_POSITION_ID + 1 + offset,
        )
    }

    #[test]
    fn first_level_reports_to_root() {
        let mut employees = vec![
            Employee::root(PersonName::new("Root", "Person")),
            employee(1, 1),
            employee(2, 1),
        ];
        let index = BandIndex::build(&employees);
        let mut rng = StdRng::seed_from_u64(8);
        let stats = assign_managers(&mut employees, &index, &mut rng).unwrap();

        assert_eq!(stats.assigned, 2);
        assert_eq!(stats.immediate_senior, 2);
        for report in &employees[1..] {
            assert_eq!(report.manager_id, Some(EMPLOYEE_ID_BASE));
            assert_eq!(report.manager_position_id, Some(ROOT_POSITION_ID));
        }
        assert!(employees[0].reports_to_nobody());
    }

    #[test]
    fn managers_are_always_strictly_senior() {
        let mut employees = vec![Employee::root(PersonName::new("Root", "Person"))];
        for offset in 1..200_u32 {
            employees.push(employee(offset, (offset % 10 + 1) as u8));
        }
        let index = BandIndex::build(&employees);
        let mut rng = StdRng::seed_from_u64(9);
        assign_managers(&mut employees, &index, &mut rng).unwrap();

        for report in &employees[1..] {
            let manager_id = report.manager_id.unwrap();
            let manager = &employees[(manager_id - EMPLOYEE_ID_BASE) as usize];
            assert!(manager.job_band < report.job_band);
            assert_eq!(report.manager_position_id, Some(manager.position_id));
        }
    }

    #[test]
    fn missing_intermediate_bands_fall_back_to_any_senior() {
        let mut employees = vec![
            Employee::root(PersonName::new("Root", "Person")),
            employee(1, 10),
        ];
        let index = BandIndex::build(&employees);
        let mut rng = StdRng::seed_from_u64(10);
        let stats = assign_managers(&mut employees, &index, &mut rng).unwrap();

        assert_eq!(employees[1].manager_id, Some(EMPLOYEE_ID_BASE));
        assert_eq!(stats.immediate_senior, 0);
    }

    #[test]
    fn empty_candidate_pool_is_reported() {
        let mut employees = vec![employee(1, 4)];
        let index = BandIndex::build(&employees);
        let mut rng = StdRng::seed_from_u64(11);
        let err = assign_managers(&mut employees, &index, &mut rng).unwrap_err();
        assert_eq!(
            err,
            AssignError::NoEligibleManager {
                employee_id: EMPLOYEE_ID_BASE + 1,
                job_band: JobBand::new(4).unwrap(),
            }
        );
        assert!(err.to_string().contains("no eligible manager"));
    }
}
