use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving process-dependent paths.
///
/// The pure string operations in [`crate::path`] never fail; only the
/// executable-path query and the C ABI boundary can.
#[derive(Debug, Error)]
pub enum PathResolutionError {
    #[error("failed to query the running executable path: {0}")]
    ExecutableUnavailable(#[source] std::io::Error),

    #[error("executable path is not valid UTF-8: {0:?}")]
    NonUtf8Path(PathBuf),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, PathResolutionError>;
