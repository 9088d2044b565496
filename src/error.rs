use std::path::PathBuf;

use thiserror::Error;

/// Failure to bring up the model artifact at startup.
///
/// Unrecoverable for the process lifetime: the caller must surface the message
/// and refuse all prediction requests. There is no runtime error path during
/// prediction itself.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model artifact not found at '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("model artifact is corrupt or has an incompatible format: {0}")]
    Corrupt(#[from] bincode::Error),
}
