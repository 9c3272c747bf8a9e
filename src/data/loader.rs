use std::path::Path;

use anyhow::{Context, Result};

use super::error::ParseError;
use super::model::{AgeLabel, ModelRow, ModelTable};

/// Number of columns a data line must provide: wavelength plus six ages.
pub const COLUMNS: usize = 7;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a bc03 flux table from a text file.
///
/// Layout, one record per line, fields separated by runs of whitespace:
///
/// ```text
/// 91.0  1.2e-3  4.5e-4  2.1e-5  8.8e-7  3.0e-7  1.9e-7
/// 94.0  1.3e-3  4.6e-4  ...
/// ```
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Blank lines are skipped and
/// tokens past the seventh are ignored.
pub fn load_table(path: &Path) -> Result<ModelTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let table = parse_table(&text).with_context(|| format!("parsing {}", path.display()))?;
    log::info!("Loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// Parse the full text of a table. Fails on the first bad line.
pub fn parse_table(text: &str) -> Result<ModelTable, ParseError> {
    let mut table = ModelTable::new();

    for (i, line) in split_lines(text).enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let row = parse_row(trimmed, i + 1)?;
        table.push_row(&row);
    }

    Ok(table)
}

/// Split on `\n`, `\r\n` and lone `\r`, each counting as one line break.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').flat_map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split('\r')
    })
}

/// Parse one data line. `line_no` is only used for error reporting.
pub fn parse_row(line: &str, line_no: usize) -> Result<ModelRow, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().take(COLUMNS).collect();
    if tokens.len() < COLUMNS {
        return Err(ParseError::TooFewColumns {
            line: line_no,
            found: tokens.len(),
        });
    }

    let wavelength = parse_value(tokens[0], line_no, "wavelength")?;
    let mut fluxes = [0.0; 6];
    for age in AgeLabel::ALL {
        fluxes[age as usize] = parse_value(tokens[age.column()], line_no, age.as_str())?;
    }

    Ok(ModelRow { wavelength, fluxes })
}

fn parse_value(token: &str, line: usize, column: &'static str) -> Result<f64, ParseError> {
    let value = token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        line,
        column,
        token: token.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite {
            line,
            column,
            token: token.to_string(),
        });
    }
    Ok(value)
}
