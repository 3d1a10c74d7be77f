//! Read-only lookup tables built once per run.
//!
//! - [`AliasTable`]: lowercase name variant -> canonical player name
//! - [`PredictionTable`]: (player, team) -> predicted points
//!
//! Both keep insertion order so "first match wins" lookups are deterministic.

pub mod alias;
pub mod predictions;

pub use alias::AliasTable;
pub use predictions::{PredictionEntry, PredictionTable};

use thiserror::Error;

/// Errors raised while reading table source files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed name variations JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed predictions CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid points '{value}' for {name} ({team}) on row {row}")]
    InvalidPoints {
        name: String,
        team: String,
        value: f64,
        row: usize,
    },
}

/// Result type for table loading.
pub type DataResult<T> = std::result::Result<T, DataError>;

fn open_file(path: &std::path::Path) -> DataResult<std::fs::File> {
    std::fs::File::open(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })
}
