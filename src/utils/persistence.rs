use std::{fs, path::Path};

use crate::{errors::Result, statement::FinancialStatement};

/// Writes the statement to disk atomically by staging to a temporary file.
pub fn save_statement_to_file(statement: &FinancialStatement, path: &Path) -> Result<()> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(statement)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    tracing::debug!(path = %path.display(), "saved statement");
    Ok(())
}

/// Loads a statement snapshot from disk, returning structured errors on failure.
pub fn load_statement_from_file(path: &Path) -> Result<FinancialStatement> {
    let data = fs::read_to_string(path)?;
    let statement: FinancialStatement = serde_json::from_str(&data)?;
    tracing::debug!(path = %path.display(), entries = statement.len(), "loaded statement");
    Ok(statement)
}
