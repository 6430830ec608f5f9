//! Task store: where generated tasks land.
//!
//! Upserts are keyed by `(room_id, task_type, scheduled_date)` so re-running
//! a window (after a partial persistence failure, or with the same seed)
//! replaces instead of duplicating.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use roomflow_core::GeneratedTask;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait TaskStore {
    /// Insert-or-replace the batch; returns the number of tasks written.
    fn upsert_batch(&mut self, tasks: &[GeneratedTask]) -> Result<usize, StoreError>;

    /// All stored tasks, ordered by (scheduled_time, room, task_type) for
    /// stable reporting.
    fn all(&self) -> Result<Vec<GeneratedTask>, StoreError>;
}

type UpsertKey = (String, String, NaiveDate);

fn sorted(mut tasks: Vec<GeneratedTask>) -> Vec<GeneratedTask> {
    tasks.sort_by(|a, b| {
        a.scheduled_time
            .cmp(&b.scheduled_time)
            .then_with(|| a.room_id.cmp(&b.room_id))
            .then_with(|| a.task_type.cmp(&b.task_type))
    });
    tasks
}

/// In-memory store, used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: HashMap<UpsertKey, GeneratedTask>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl TaskStore for MemoryStore {
    fn upsert_batch(&mut self, tasks: &[GeneratedTask]) -> Result<usize, StoreError> {
        for task in tasks {
            self.tasks.insert(task.upsert_key(), task.clone());
        }
        Ok(tasks.len())
    }

    fn all(&self) -> Result<Vec<GeneratedTask>, StoreError> {
        Ok(sorted(self.tasks.values().cloned().collect()))
    }
}

/// File-backed store: one pretty-printed JSON array per property.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_index(&self) -> Result<HashMap<UpsertKey, GeneratedTask>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let s = fs::read_to_string(&self.path)?;
        let tasks: Vec<GeneratedTask> = serde_json::from_str(&s)?;
        Ok(tasks.into_iter().map(|t| (t.upsert_key(), t)).collect())
    }
}

impl TaskStore for JsonFileStore {
    fn upsert_batch(&mut self, tasks: &[GeneratedTask]) -> Result<usize, StoreError> {
        let mut index = self.read_index()?;
        for task in tasks {
            index.insert(task.upsert_key(), task.clone());
        }
        let all = sorted(index.into_values().collect());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&all)?)?;
        Ok(tasks.len())
    }

    fn all(&self) -> Result<Vec<GeneratedTask>, StoreError> {
        Ok(sorted(self.read_index()?.into_values().collect()))
    }
}
