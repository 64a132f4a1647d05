//! Org chart generation use-case service.
//!
//! # Responsibility
//! - Run the pipeline: allocate -> synthesize -> assign -> validate.
//! - Export only populations that pass chain validation.
//! - Convert panics inside a run into `OrgError::Internal` at the boundary.
//!
//! # Invariants
//! - A chart returned by `generate*` has already passed validation.
//! - No sink is written to when validation fails.

use crate::config::{ConfigError, GenerationConfig};
use crate::export::record::build_records;
use crate::export::sink::ResultSink;
use crate::export::ExportError;
use crate::logging::describe_panic_payload;
use crate::model::band::JobBand;
use crate::model::employee::{Employee, EmployeeId};
use crate::model::headcount::{Headcount, HeadcountError};
use crate::synth::band_index::BandIndex;
use crate::synth::employee_synth::synthesize_employees;
use crate::synth::manager_assigner::{assign_managers, AssignError};
use crate::synth::names::NameSupply;
use crate::validate::chain::{validate_chains, ChainReport};
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};
use uuid::Uuid;

/// Errors surfaced by generation and export.
#[derive(Debug)]
pub enum OrgError {
    /// Requested headcount is outside the accepted range.
    InvalidHeadcount(HeadcountError),
    /// A non-root employee had nobody more senior to report to.
    NoEligibleManager {
        employee_id: EmployeeId,
        job_band: JobBand,
    },
    /// At least one manager chain does not reach the root.
    ValidationFailed(ChainReport),
    /// Building or writing the export failed.
    Export(ExportError),
    /// Unexpected failure caught at the service boundary.
    Internal(String),
}

impl Display for OrgError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHeadcount(err) => write!(f, "{err}"),
            Self::NoEligibleManager {
                employee_id,
                job_band,
            } => write!(
                f,
                "generation aborted: no eligible manager for employee {employee_id} in band {job_band}"
            ),
            Self::ValidationFailed(report) => write!(f, "validation failed: {report}"),
            Self::Export(err) => write!(f, "{err}"),
            Self::Internal(message) => write!(f, "internal error: {message}"),
        }
    }
}

impl Error for OrgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidHeadcount(err) => Some(err),
            Self::Export(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HeadcountError> for OrgError {
    fn from(value: HeadcountError) -> Self {
        Self::InvalidHeadcount(value)
    }
}

impl From<ConfigError> for OrgError {
    fn from(value: ConfigError) -> Self {
        match value {
            ConfigError::InvalidHeadcount(err) => Self::InvalidHeadcount(err),
        }
    }
}

impl From<AssignError> for OrgError {
    fn from(value: AssignError) -> Self {
        match value {
            AssignError::NoEligibleManager {
                employee_id,
                job_band,
            } => Self::NoEligibleManager {
                employee_id,
                job_band,
            },
        }
    }
}

impl From<ExportError> for OrgError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

/// Facts about one generation run. Contains no personal names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// Correlates log lines of one run.
    pub run_id: Uuid,
    pub headcount: u32,
    /// Employees per band, bands `0..=10`.
    pub band_counts: Vec<(JobBand, usize)>,
    /// Longest manager chain, in hops.
    pub max_chain_depth: usize,
    /// Employees that received a manager.
    pub assigned_managers: usize,
    /// Of those, employees managed from exactly one band up.
    pub immediate_senior_managers: usize,
}

/// Validated hierarchy plus run facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgChart {
    pub employees: Vec<Employee>,
    pub summary: GenerationSummary,
}

/// Generation service facade.
pub struct OrgService<N: NameSupply> {
    names: N,
}

impl<N: NameSupply> OrgService<N> {
    /// Creates service from a name supply implementation.
    pub fn new(names: N) -> Self {
        Self { names }
    }

    /// Generates a validated chart using the config's headcount and seed.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<OrgChart, OrgError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with_rng(config.headcount, &mut rng)
    }

    /// Generates a validated chart drawing all randomness from `rng`.
    ///
    /// # Errors
    /// - `OrgError::NoEligibleManager` when manager assignment cannot proceed.
    /// - `OrgError::ValidationFailed` when any chain misses the root.
    pub fn generate_with_rng<R>(
        &mut self,
        headcount: Headcount,
        rng: &mut R,
    ) -> Result<OrgChart, OrgError>
    where
        R: Rng + ?Sized,
    {
        let run_id = Uuid::new_v4();
        info!(
            "event=org_generate module=service status=start run_id={} headcount={}",
            run_id, headcount
        );

        let mut employees = synthesize_employees(headcount, rng, &mut self.names);
        let index = BandIndex::build(&employees);
        let stats = assign_managers(&mut employees, &index, rng).map_err(|err| {
            error!(
                "event=org_generate module=service status=error run_id={} stage=assign error={}",
                run_id, err
            );
            OrgError::from(err)
        })?;

        let report = validate_chains(&employees);
        if !report.is_valid() {
            error!(
                "event=org_generate module=service status=error run_id={} stage=validate failures={}",
                run_id,
                report.failures.len()
            );
            return Err(OrgError::ValidationFailed(report));
        }

        let summary = GenerationSummary {
            run_id,
            headcount: headcount.get(),
            band_counts: index.counts(),
            max_chain_depth: report.max_depth,
            assigned_managers: stats.assigned,
            immediate_senior_managers: stats.immediate_senior,
        };
        info!(
            "event=org_generate module=service status=ok run_id={} employees={} max_depth={} immediate_senior={}",
            run_id,
            employees.len(),
            summary.max_chain_depth,
            summary.immediate_senior_managers
        );
        Ok(OrgChart { employees, summary })
    }

    /// Generates and exports in one call, catching panics.
    ///
    /// Nothing is written to `sink` unless generation and validation succeed.
    pub fn run_guarded<S>(
        &mut self,
        config: &GenerationConfig,
        sink: &mut S,
    ) -> Result<GenerationSummary, OrgError>
    where
        S: ResultSink + ?Sized,
    {
        let outcome = catch_unwind(AssertUnwindSafe(|| -> Result<GenerationSummary, OrgError> {
            let chart = self.generate(config)?;
            export_employees(&chart.employees, sink)?;
            Ok(chart.summary)
        }));
        match outcome {
            Ok(result) => result,
            Err(payload) => {
                let message = describe_panic_payload(payload.as_ref());
                error!(
                    "event=org_generate module=service status=panic message={}",
                    message
                );
                Err(OrgError::Internal(message))
            }
        }
    }
}

/// Validates `employees` and hands their export records to `sink`.
///
/// Returns the number of exported rows.
///
/// # Errors
/// - `OrgError::ValidationFailed` before anything reaches the sink.
/// - `OrgError::Export` when record building or writing fails.
pub fn export_employees<S>(employees: &[Employee], sink: &mut S) -> Result<usize, OrgError>
where
    S: ResultSink + ?Sized,
{
    let report = validate_chains(employees);
    if !report.is_valid() {
        return Err(OrgError::ValidationFailed(report));
    }
    let records = build_records(employees)?;
    sink.accept(&records)?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::{OrgError, OrgService};
    use crate::config::GenerationConfig;
    use crate::export::record::ExportRecord;
    use crate::export::sink::ResultSink;
    use crate::export::ExportError;
    use crate::model::employee::PersonName;

    struct PanickingSink;

    impl ResultSink for PanickingSink {
        fn accept(&mut self, _records: &[ExportRecord]) -> Result<(), ExportError> {
            panic!("sink exploded");
        }
    }

    #[test]
    fn panics_inside_a_run_become_internal_errors() {
        let mut service = OrgService::new(|| PersonName::new("Pat", "Doe"));
        let config = GenerationConfig::new(3).unwrap().with_seed(Some(1));
        let err = service.run_guarded(&config, &mut PanickingSink).unwrap_err();
        assert!(
            matches!(err, OrgError::Internal(ref message) if message.contains("sink exploded"))
        );
    }

    #[test]
    fn seeded_runs_repeat_the_same_structure() {
        let config = GenerationConfig::new(120).unwrap().with_seed(Some(2024));
        let mut left = OrgService::new(|| PersonName::new("Pat", "Doe"));
        let mut right = OrgService::new(|| PersonName::new("Pat", "Doe"));
        let a = left.generate(&config).unwrap();
        let b = right.generate(&config).unwrap();
        assert_eq!(a.employees, b.employees);
        assert_ne!(a.summary.run_id, b.summary.run_id);
    }

    #[test]
    fn config_errors_surface_as_invalid_headcount() {
        let err = OrgError::from(GenerationConfig::new(0).unwrap_err());
        assert!(matches!(err, OrgError::InvalidHeadcount(_)));
        assert_eq!(err.to_string(), "headcount must be between 1 and 20000, got 0");
    }
}
