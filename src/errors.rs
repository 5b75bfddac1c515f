use thiserror::Error;

/// Error type for the fallible edges of the income engine.
///
/// Validation never produces these: validators report advisory messages as
/// plain strings. This type covers decoding, configuration, cycle editing
/// and command-line usage.
#[derive(Debug, Error)]
pub enum IncomeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown payment structure: {0}")]
    UnknownStructure(String),
    #[error("At most {limit} payment cycles are allowed for {frequency} income")]
    CycleLimit { limit: usize, frequency: String },
    #[error("At least one payment cycle is required")]
    LastCycle,
    #[error("No payment cycle at position {0}")]
    CycleIndex(usize),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("{0}")]
    Usage(String),
}
