use thiserror::Error;

/// Reasons a bc03 text table is rejected. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected at least 7 columns, found {found}")]
    TooFewColumns { line: usize, found: usize },

    #[error("line {line}, column {column}: '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        token: String,
    },

    #[error("line {line}, column {column}: '{token}' is not a finite number")]
    NonFinite {
        line: usize,
        column: &'static str,
        token: String,
    },
}
