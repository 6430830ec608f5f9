//! roomflow-engine: orchestration over roomflow-core — bulk window
//! generation, steady-state rule runs, the task store, and the post-run
//! validation report.

pub mod defaults;
pub mod error;
pub mod generator;
pub mod rules_run;
pub mod setup;
pub mod store;
pub mod validate;

pub use defaults::default_catalog;
pub use error::EngineError;
pub use generator::{generate_window, GenerationSummary, GeneratorConfig};
pub use rules_run::{run_rules, RuleRunConfig, RuleRunSummary};
pub use setup::{run_setup, SetupSummary};
pub use store::{JsonFileStore, MemoryStore, StoreError, TaskStore};
pub use validate::{validate_run, ValidationReport, ValidationStatistics};
