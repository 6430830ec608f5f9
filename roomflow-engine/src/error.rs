//! Engine error taxonomy. Configuration problems are fatal before any
//! persistence; per-day persistence failures are carried in summaries
//! instead of aborting the run.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("template catalog is empty")]
    EmptyCatalog,

    #[error("staff roster is empty")]
    EmptyRoster,

    #[error("timezone conversion failed: {0}")]
    Timezone(String),

    #[error("task store failure: {0}")]
    Store(#[from] StoreError),
}
