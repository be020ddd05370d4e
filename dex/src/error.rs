use thiserror::Error;

/// Errors raised while loading dex or format data.
///
/// Lookups themselves never fail; only building a dex from external data can.
#[derive(Error, Debug)]
pub enum DexError {
    #[error("Failed to read dex data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dex data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid format data: {0}")]
    InvalidFormat(#[source] serde_json::Error),

    #[error("Duplicate {kind} entry: {id}")]
    DuplicateEntry { kind: &'static str, id: String },

    #[error("Invalid generation: {0}")]
    InvalidGeneration(u8),
}
