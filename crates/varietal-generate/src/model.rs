use serde::{Deserialize, Serialize};
use varietal_core::Mode;

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub mode: Mode,
    pub attributes: Vec<String>,
    pub count: Option<usize>,
    pub records: usize,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, mode: Mode) -> Self {
        Self {
            run_id,
            mode,
            attributes: Vec::new(),
            count: None,
            records: 0,
            duration_ms: 0,
        }
    }
}
