use thiserror::Error;
use tracing::{error, warn};

/// Domain errors. The presentation core has no recoverable failures; what
/// can fail is the window glue around it.
#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("Window operation failed: {0}")]
    Window(String),
}

pub type Result<T> = std::result::Result<T, FragmentError>;

/// Extension trait for ergonomic error logging at the top level, where
/// failures are reported and swallowed rather than propagated further.
pub trait NotifyResultExt<T> {
    fn log_err(self) -> Option<T>;
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> NotifyResultExt<T> for std::result::Result<T, E> {
    fn log_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                error!(error = ?e, "Operation failed");
                None
            }
        }
    }

    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(error = ?e, "Operation warning");
                None
            }
        }
    }
}
