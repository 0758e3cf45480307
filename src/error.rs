// error.rs - Failure modes of the floor engine
//
// Only bootstrap and configuration can fail. Pointer misses are
// ordinary no-ops and never surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FloorError {
    /// No global `window` (not running in a browser page).
    #[error("no global window object")]
    NoWindow,

    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,

    /// The element the drawing surface mounts into does not exist.
    #[error("mount point #{0} not found")]
    MissingContainer(String),

    /// A DOM call rejected the operation.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Config JSON did not parse, or the scene descriptor did not serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FloorError>;
