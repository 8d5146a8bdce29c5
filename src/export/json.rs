use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Write any serializable view batch as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &str, views: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(views)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
