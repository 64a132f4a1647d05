//! Seniority band model.
//!
//! # Responsibility
//! - Define the band index type shared by allocator, synthesizer and assigner.
//! - Own the fixed band -> generic job title table.
//!
//! # Invariants
//! - Band `0` is the most senior tier and is reserved for the root.
//! - Synthesized employees only ever carry bands `0..=10`.
//! - The title table covers bands `0..=11`; band `11` is never assigned.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Number of bands a synthesized employee may occupy (`0..=10`).
pub const ASSIGNABLE_BAND_COUNT: usize = 11;

const GENERIC_JOB_TITLES: [&str; 12] = [
    "CEO",
    "CXO",
    "Head of Department",
    "Director / Vice President",
    "Associate Director/AVP",
    "Senior Manager/Manager",
    "Team Lead",
    "Professional / SME",
    "Associate",
    "Coordinator, Specialist",
    "Assistant, Associate Assistant",
    "Trainee, Intern",
];

/// Seniority tier index. Smaller numbers are more senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct JobBand(u8);

impl JobBand {
    /// The single root band.
    pub const ROOT: JobBand = JobBand(0);
    /// Least senior band that the allocator hands out.
    pub const LOWEST_ASSIGNABLE: JobBand = JobBand(10);
    /// Highest band index present in the title table.
    pub const MAX_TITLED: JobBand = JobBand(11);

    /// Creates a band when `value` is covered by the title table.
    pub fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX_TITLED.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw band index.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Band index as a `usize`, for per-band tables.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }

    /// The band one level more senior, or `None` for the root.
    pub fn one_up(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// Generic job title for this band.
    pub fn generic_title(self) -> &'static str {
        GENERIC_JOB_TITLES[self.index()]
    }

    /// Iterates all assignable bands from most to least senior.
    pub fn assignable() -> impl Iterator<Item = JobBand> {
        (0..ASSIGNABLE_BAND_COUNT as u8).map(Self)
    }
}

impl TryFrom<u8> for JobBand {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("job band must be at most 11, got {value}"))
    }
}

impl From<JobBand> for u8 {
    fn from(value: JobBand) -> Self {
        value.0
    }
}

impl Display for JobBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::JobBand;

    #[test]
    fn title_table_matches_band_indexes() {
        assert_eq!(JobBand::ROOT.generic_title(), "CEO");
        assert_eq!(JobBand::new(1).unwrap().generic_title(), "CXO");
        assert_eq!(
            JobBand::new(9).unwrap().generic_title(),
            "Coordinator, Specialist"
        );
        assert_eq!(
            JobBand::LOWEST_ASSIGNABLE.generic_title(),
            "Assistant, Associate Assistant"
        );
        assert_eq!(JobBand::MAX_TITLED.generic_title(), "Trainee, Intern");
    }

    #[test]
    fn new_rejects_bands_outside_title_table() {
        assert!(JobBand::new(11).is_some());
        assert!(JobBand::new(12).is_none());
    }

    #[test]
    fn one_up_stops_at_root() {
        assert_eq!(JobBand::ROOT.one_up(), None);
        assert_eq!(JobBand::new(4).unwrap().one_up(), JobBand::new(3));
    }

    #[test]
    fn assignable_excludes_trainee_band() {
        let bands: Vec<u8> = JobBand::assignable().map(JobBand::value).collect();
        assert_eq!(bands, (0..=10).collect::<Vec<u8>>());
    }
}
