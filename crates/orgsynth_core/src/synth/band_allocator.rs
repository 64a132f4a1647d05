//! Band quota allocation.
//!
//! # Responsibility
//! - Split a target headcount into per-band quotas under a fixed distribution.
//!
//! # Invariants
//! - Bands `1..=9` get truncated fixed fractions of the headcount.
//! - Band `10` absorbs the remainder after the root and is floored at zero.
//! - `total() + 1 == headcount` for every headcount >= 1.

use crate::model::band::{JobBand, ASSIGNABLE_BAND_COUNT};
use log::{debug, warn};

/// Per-mille share of the headcount for bands `1..=9`.
const BAND_SHARE_PER_MILLE: [usize; 9] = [5, 30, 50, 70, 80, 100, 120, 150, 250];

/// Remaining employee quota per band. Band `0` is always zero: the root is
/// accounted separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandQuotas {
    quotas: [usize; ASSIGNABLE_BAND_COUNT],
}

impl BandQuotas {
    /// Computes quotas for `headcount` employees, root included.
    pub fn allocate(headcount: usize) -> Self {
        let mut quotas = [0_usize; ASSIGNABLE_BAND_COUNT];
        for (offset, share) in BAND_SHARE_PER_MILLE.iter().enumerate() {
            quotas[offset + 1] = headcount * share / 1000;
        }

        let fixed: usize = quotas.iter().sum();
        let non_root = headcount.saturating_sub(1);
        if fixed > non_root {
            warn!(
                "event=band_quota_clamped module=synth status=warn headcount={} overshoot={}",
                headcount,
                fixed - non_root
            );
        }
        quotas[JobBand::LOWEST_ASSIGNABLE.index()] = non_root.saturating_sub(fixed);

        debug!(
            "event=band_quotas_allocated module=synth headcount={} quotas={:?}",
            headcount,
            &quotas[1..]
        );
        Self { quotas }
    }

    /// Remaining quota for `band`. Bands outside `0..=10` have none.
    pub fn quota(&self, band: JobBand) -> usize {
        self.quotas.get(band.index()).copied().unwrap_or(0)
    }

    /// Sum of remaining quotas over bands `1..=10`.
    pub fn total(&self) -> usize {
        self.quotas.iter().sum()
    }

    /// Whether every band has run out of quota.
    pub fn is_exhausted(&self) -> bool {
        self.total() == 0
    }

    /// `(band, remaining)` pairs for bands `1..=10`.
    pub fn iter(&self) -> impl Iterator<Item = (JobBand, usize)> + '_ {
        JobBand::assignable()
            .filter(|band| !band.is_root())
            .map(|band| (band, self.quota(band)))
    }

    /// Consumes one slot of `band`. Returns `false` if it had none left.
    pub fn take_one(&mut self, band: JobBand) -> bool {
        match self.quotas.get_mut(band.index()) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            _ => false,
        }
    }
}
