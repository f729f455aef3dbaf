use crate::errors::WriteError;
use crate::models::RiskRecord;
use std::path::Path;
use tracing::info;

/// Serializes the risk map, fully overwriting any previous file. The header
/// row comes from the `RiskRecord` field names. Callers guarantee a
/// non-empty record set; a failed run never truncates an earlier output.
pub fn write_risk_map(path: &Path, records: &[RiskRecord]) -> Result<(), WriteError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| WriteError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    for record in records {
        writer.serialize(record).map_err(|e| WriteError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| WriteError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(rows = records.len(), path = %path.display(), "risk map written");
    Ok(())
}
