// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Unable to find type {0} in type resolver")]
    UnresolvedTypeName(String),
    #[error("Extern not supported by the wrapper: {0}")]
    UnsupportedExtern(String),
    #[error("Invalid type manifest: {0}")]
    Manifest(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
