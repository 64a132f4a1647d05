//! Core logic for synthesizing demo org hierarchies.
//! This crate is the single source of truth for hierarchy invariants.

pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod service;
pub mod synth;
pub mod validate;

pub use config::{ConfigError, GenerationConfig};
pub use export::record::{build_records, ExportRecord, EXPORT_COLUMNS, TOP_NODE_NAME};
pub use export::sink::{render_csv, write_records, CsvSink, FileSink, JsonSink, ResultSink};
pub use export::{ExportError, ExportFormat};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::band::JobBand;
pub use model::employee::{
    Employee, EmployeeId, PersonName, PositionId, EMPLOYEE_ID_BASE, NO_MANAGER_ID,
    NO_MANAGER_POSITION_ID, ROOT_POSITION_ID,
};
pub use model::headcount::{Headcount, HeadcountError, MAX_HEADCOUNT, MIN_HEADCOUNT};
pub use service::org_service::{
    export_employees, GenerationSummary, OrgChart, OrgError, OrgService,
};
pub use synth::band_allocator::BandQuotas;
pub use synth::band_index::BandIndex;
pub use synth::employee_synth::synthesize_employees;
pub use synth::manager_assigner::{
    assign_managers, AssignError, AssignmentStats, DISTANT_SENIOR_WEIGHT,
    IMMEDIATE_SENIOR_WEIGHT,
};
pub use synth::names::{NameSupply, RandomNameSupply};
pub use synth::weighted::pick_weighted;
pub use validate::chain::{validate_chains, ChainFailure, ChainFailureKind, ChainReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
