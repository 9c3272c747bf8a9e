use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::model::ModelTable;

/// Serialize `table` as compact JSON to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_json(table: &ModelTable, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, table)
        .with_context(|| format!("serializing JSON to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
