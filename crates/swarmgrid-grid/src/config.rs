//! Grid configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use swarmgrid_cell::{CellConfig, ConfigError as CellConfigError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GridConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Starting size is zero.
    EmptyGrid,
    /// Starting size exceeds [`GridConfig::MAX_INITIAL_SIZE`].
    SizeTooLarge {
        /// The configured size.
        value: u16,
        /// The largest accepted size.
        max: u16,
    },
    /// The cell layout is invalid.
    Cells(CellConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must start with at least one cell"),
            Self::SizeTooLarge { value, max } => {
                write!(f, "initial grid size {value} exceeds maximum of {max}")
            }
            Self::Cells(e) => write!(f, "invalid cell config: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cells(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CellConfigError> for ConfigError {
    fn from(e: CellConfigError) -> Self {
        Self::Cells(e)
    }
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Construction parameters for a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Rows and columns at construction. The origin starts at
    /// `initial_size / 2` on both axes. Default: 150.
    pub initial_size: u16,
    /// Cell layout and pool sizing.
    pub cells: CellConfig,
}

impl GridConfig {
    /// Default starting size on both axes.
    pub const DEFAULT_SIZE: u16 = 150;

    /// Largest starting size. Origin-relative coordinates are `i8`, so
    /// a wider grid would hold cells no request can reach.
    pub const MAX_INITIAL_SIZE: u16 = 256;

    /// A config with the given starting size and default cell layout.
    pub fn with_size(initial_size: u16) -> Self {
        Self {
            initial_size,
            cells: CellConfig::default(),
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.initial_size > Self::MAX_INITIAL_SIZE {
            return Err(ConfigError::SizeTooLarge {
                value: self.initial_size,
                max: Self::MAX_INITIAL_SIZE,
            });
        }
        self.cells.validate()?;
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::with_size(Self::DEFAULT_SIZE)
    }
}
