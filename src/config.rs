use std::path::PathBuf;

/// Table read by the converter.
pub const DEFAULT_INPUT: &str = "public/bc03_models.txt";

/// Document written by the converter.
pub const DEFAULT_OUTPUT: &str = "public/bc03_models.json";

/// Input/output locations for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
