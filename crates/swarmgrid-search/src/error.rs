//! Error types for the search controller.

use std::error::Error;
use std::fmt;

use swarmgrid_service::ServiceError;

/// Errors from search configuration and grid status lookups.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchError {
    /// The grid service rejected a status request.
    Service(ServiceError),
    /// A position maps to a cell outside the addressable coordinate range.
    OffGrid {
        /// East offset in meters.
        x: f64,
        /// North offset in meters.
        y: f64,
    },
    /// A status handler answered with the wrong response kind.
    UnexpectedResponse {
        /// The handler name.
        handler: String,
    },
    /// A configuration value is out of range.
    InvalidConfig {
        /// Which parameter.
        param: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service(e) => write!(f, "grid service: {e}"),
            Self::OffGrid { x, y } => {
                write!(f, "position ({x:.2}, {y:.2}) is outside the grid coordinate range")
            }
            Self::UnexpectedResponse { handler } => {
                write!(f, "handler '{handler}' returned an unexpected response kind")
            }
            Self::InvalidConfig { param, reason } => {
                write!(f, "invalid search config '{param}': {reason}")
            }
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ServiceError> for SearchError {
    fn from(e: ServiceError) -> Self {
        Self::Service(e)
    }
}
