//! Per-band employee index.
//!
//! # Invariants
//! - Buckets hold positions into the slice the index was built from.
//! - Positions inside one bucket keep slice order.
//! - Employees with bands outside `0..=10` are not indexed.

use crate::model::band::{JobBand, ASSIGNABLE_BAND_COUNT};
use crate::model::employee::Employee;

/// Band -> ordered employee positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BandIndex {
    buckets: [Vec<usize>; ASSIGNABLE_BAND_COUNT],
}

impl BandIndex {
    /// Builds the index in one pass over `employees`.
    pub fn build(employees: &[Employee]) -> Self {
        let mut index = Self::default();
        for (position, employee) in employees.iter().enumerate() {
            if let Some(bucket) = index.buckets.get_mut(employee.job_band.index()) {
                bucket.push(position);
            }
        }
        index
    }

    /// Positions of employees in `band`.
    pub fn bucket(&self, band: JobBand) -> &[usize] {
        self.buckets
            .get(band.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of employees in `band`.
    pub fn count(&self, band: JobBand) -> usize {
        self.bucket(band).len()
    }

    /// `(band, count)` for every assignable band.
    pub fn counts(&self) -> Vec<(JobBand, usize)> {
        JobBand::assignable()
            .map(|band| (band, self.count(band)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::BandIndex;
    use crate::model::band::JobBand;
    use crate::model::employee::{Employee, PersonName, EMPLOYEE_ID_BASE};

    fn employee(offset: u32, band: u8) -> Employee {
        Employee::new(
            EMPLOYEE_ID_BASE + offset,
            PersonName::new("Test", "Person"),
            JobBand::new(band).unwrap(),
            20_000_002,
        )
    }

    #[test]
    fn groups_positions_by_band_in_slice_order() {
        let employees = vec![
            Employee::root(PersonName::new("Root", "Person")),
            employee(1, 3),
            employee(2, 1),
            employee(3, 3),
        ];
        let index = BandIndex::build(&employees);
        assert_eq!(index.bucket(JobBand::ROOT), &[0]);
        assert_eq!(index.bucket(JobBand::new(1).unwrap()), &[2]);
        assert_eq!(index.bucket(JobBand::new(3).unwrap()), &[1, 3]);
        assert_eq!(index.count(JobBand::new(2).unwrap()), 0);
    }

    #[test]
    fn counts_cover_every_assignable_band() {
        let employees = vec![
            Employee::root(PersonName::new("Root", "Person")),
            employee(1, 2),
            employee(2, 2),
            employee(3, 5),
        ];
        let counts = BandIndex::build(&employees).counts();
        assert_eq!(counts.len(), 11);
        assert_eq!(counts[0], (JobBand::ROOT, 1));
        assert_eq!(counts[2], (JobBand::new(2).unwrap(), 2));
        assert_eq!(counts[5], (JobBand::new(5).unwrap(), 1));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 4);
    }

    #[test]
    fn trainee_band_is_not_indexed() {
        let employees = vec![employee(0, 11)];
        let index = BandIndex::build(&employees);
        assert!(index.bucket(JobBand::MAX_TITLED).is_empty());
        assert_eq!(index.counts().iter().map(|(_, n)| n).sum::<usize>(), 0);
    }
}
