//! Employee record synthesis.
//!
//! # Responsibility
//! - Create exactly `headcount` employees: the root first, then one employee
//!   per remaining band quota slot.
//!
//! # Invariants
//! - Index `0` is the root with fixed identifiers and sentinel manager links.
//! - Bands are drawn by weight over the *remaining* quotas, so each draw
//!   consumes one slot (sampling without replacement).
//! - A band with no remaining quota is never drawn.
//! - Non-root manager fields are left unresolved.

use crate::model::band::JobBand;
use crate::model::employee::{
    Employee, EmployeeId, PositionId, EMPLOYEE_ID_BASE, ROOT_POSITION_ID,
};
use crate::model::headcount::Headcount;
use crate::synth::band_allocator::BandQuotas;
use crate::synth::names::NameSupply;
use crate::synth::weighted::pick_weighted;
use log::{debug, warn};
use rand::Rng;

/// Synthesizes `headcount` employees with unresolved manager links.
pub fn synthesize_employees<R, N>(
    headcount: Headcount,
    rng: &mut R,
    names: &mut N,
) -> Vec<Employee>
where
    R: Rng + ?Sized,
    N: NameSupply + ?Sized,
{
    let total = headcount.get();
    let mut remaining = BandQuotas::allocate(headcount.as_usize());
    let mut employees = Vec::with_capacity(headcount.as_usize());
    employees.push(Employee::root(names.next_name()));

    let mut fallback_draws = 0_u32;
    for offset in 1..total {
        let band = match draw_band(rng, &remaining) {
            Some(band) => band,
            None => {
                fallback_draws += 1;
                JobBand::LOWEST_ASSIGNABLE
            }
        };
        remaining.take_one(band);

        let employee_id: EmployeeId = EMPLOYEE_ID_BASE + offset;
        let position_id = draw_position_id(rng, total);
        employees.push(Employee::new(
            employee_id,
            names.next_name(),
            band,
            position_id,
        ));
    }

    if fallback_draws > 0 {
        warn!(
            "event=band_quota_exhausted module=synth status=warn headcount={} fallback_draws={}",
            total, fallback_draws
        );
    }
    debug!(
        "event=employees_synthesized module=synth count={}",
        employees.len()
    );
    employees
}

fn draw_band<R>(rng: &mut R, remaining: &BandQuotas) -> Option<JobBand>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<(JobBand, f64)> = remaining
        .iter()
        .map(|(band, quota)| (band, quota as f64))
        .collect();
    pick_weighted(rng, &candidates).copied()
}

/// Uniform draw from `ROOT_POSITION_ID + 1 ..= ROOT_POSITION_ID + headcount`.
fn draw_position_id<R>(rng: &mut R, headcount: u32) -> PositionId
where
    R: Rng + ?Sized,
{
    rng.gen_range(ROOT_POSITION_ID + 1..=ROOT_POSITION_ID + headcount)
}
