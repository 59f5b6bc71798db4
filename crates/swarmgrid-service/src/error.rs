//! Service-level error types.

use std::error::Error;
use std::fmt;

use swarmgrid_grid::GridError;

use crate::config::ConfigError;

/// Errors returned to status-request callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceError {
    /// No handler is registered under this name.
    UnknownHandler {
        /// The requested handler name.
        name: String,
    },
    /// A handler with this name already exists.
    DuplicateHandler {
        /// The conflicting name.
        name: String,
    },
    /// The request kind does not match the handler's binding
    /// (e.g. a write sent to a getter).
    HandlerMismatch {
        /// The handler name.
        name: String,
        /// What the handler accepts.
        accepts: &'static str,
        /// What the request was.
        received: &'static str,
    },
    /// The grid rejected the request.
    Grid(GridError),
    /// Configuration is invalid.
    Config(ConfigError),
    /// The server thread could not be started.
    ThreadSpawnFailed {
        /// Description of the failure.
        reason: String,
    },
    /// The server has shut down or is shutting down.
    ShuttingDown,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownHandler { name } => write!(f, "no handler named '{name}'"),
            Self::DuplicateHandler { name } => {
                write!(f, "handler '{name}' is already registered")
            }
            Self::HandlerMismatch {
                name,
                accepts,
                received,
            } => {
                write!(
                    f,
                    "handler '{name}' accepts {accepts} requests, received {received}"
                )
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "server thread spawn failed: {reason}")
            }
            Self::ShuttingDown => write!(f, "grid server is shutting down"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ServiceError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ConfigError> for ServiceError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
