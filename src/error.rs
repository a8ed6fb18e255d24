use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("no base rate configured for enhancement level {level}")]
    UnknownLevel { level: u32 },

    #[error("no material cost configured for {equipment} at level {level}")]
    UnknownCostEntry { equipment: &'static str, level: u32 },

    #[error("invalid enhancement range {start} -> {end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("pity meter stalled after {attempts} attempts at level {level}")]
    PityStalled { level: u32, attempts: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Whether this error poisons the whole sweep rather than one combination.
    /// Configuration and invariant errors are isolated per combination;
    /// failing to write the output table is terminal.
    pub fn is_fatal_for_sweep(&self) -> bool {
        matches!(self, SimError::Io(_) | SimError::Json(_))
    }
}
