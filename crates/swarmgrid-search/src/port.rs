//! Collaborators the controller talks to: pickup sources and grid status.

use swarmgrid_core::{GridCoord, StatusField};
use swarmgrid_service::{GridClient, HandlerRegistry, HandlerResponse, ServiceError};

use crate::error::SearchError;
use crate::point::Point;

/// Supplies pickup locations.
pub trait PickupSource: Send {
    /// The next pickup location, if any is known.
    fn next_pickup(&mut self) -> Option<Point>;
}

/// A source that never has a pickup.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPickups;

impl PickupSource for NoPickups {
    fn next_pickup(&mut self) -> Option<Point> {
        None
    }
}

/// Read and write the visited state of the cell under a position.
pub trait StatusPort: Send {
    /// Whether the cell containing `at` has been visited.
    fn is_visited(&mut self, at: Point) -> Result<bool, SearchError>;

    /// Mark the cell containing `at` as visited.
    fn mark_visited(&mut self, at: Point) -> Result<(), SearchError>;
}

/// [`StatusPort`] backed by a grid server.
///
/// Positions are converted to cells by dividing by `cell_size` and
/// rounding to the nearest integer.
#[derive(Clone)]
pub struct GridStatusPort {
    client: GridClient,
    cell_size: f64,
    getter: String,
    setter: String,
}

impl GridStatusPort {
    /// Default getter handler name.
    pub const VISITED_GETTER: &'static str = "visited";
    /// Default setter handler name.
    pub const VISITED_SETTER: &'static str = "mark_visited";
    /// Default cell edge length in meters.
    pub const DEFAULT_CELL_SIZE: f64 = 0.5;
    /// Register field holding the visited bit.
    pub const VISITED_FIELD: StatusField = StatusField::bit(0, 0);

    /// A port using the default handler names and cell size.
    pub fn new(client: GridClient) -> Self {
        Self {
            client,
            cell_size: Self::DEFAULT_CELL_SIZE,
            getter: Self::VISITED_GETTER.to_string(),
            setter: Self::VISITED_SETTER.to_string(),
        }
    }

    /// Use `cell_size` meters per cell.
    ///
    /// Returns [`SearchError::InvalidConfig`] unless it is finite and
    /// positive.
    pub fn with_cell_size(mut self, cell_size: f64) -> Result<Self, SearchError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SearchError::InvalidConfig {
                param: "cell_size",
                reason: format!("must be finite and > 0, got {cell_size}"),
            });
        }
        self.cell_size = cell_size;
        Ok(self)
    }

    /// Use custom handler names.
    pub fn with_handlers(mut self, getter: impl Into<String>, setter: impl Into<String>) -> Self {
        self.getter = getter.into();
        self.setter = setter.into();
        self
    }

    /// Register the default visited handlers on `registry`.
    pub fn register_handlers(registry: &mut HandlerRegistry) -> Result<(), ServiceError> {
        let field = Self::VISITED_FIELD;
        registry.register_flag_getter(Self::VISITED_GETTER, field.stride, field.mask)?;
        registry.register_setter(Self::VISITED_SETTER, field.stride, field.offset, field.mask)
    }

    /// Meters per cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// The grid cell containing `at`.
    pub fn cell_of(&self, at: Point) -> Result<GridCoord, SearchError> {
        let off_grid = || SearchError::OffGrid { x: at.x, y: at.y };
        let x = to_axis(at.x / self.cell_size).ok_or_else(off_grid)?;
        let y = to_axis(at.y / self.cell_size).ok_or_else(off_grid)?;
        Ok(GridCoord::new(x, y))
    }
}

fn to_axis(scaled: f64) -> Option<i8> {
    let rounded = scaled.round();
    if rounded.is_finite() && rounded >= i8::MIN as f64 && rounded <= i8::MAX as f64 {
        Some(rounded as i8)
    } else {
        None
    }
}

impl StatusPort for GridStatusPort {
    fn is_visited(&mut self, at: Point) -> Result<bool, SearchError> {
        let cell = self.cell_of(at)?;
        match self.client.get(&self.getter, cell.x, cell.y)? {
            HandlerResponse::Flag(visited) => Ok(visited),
            HandlerResponse::Field(value) => Ok(value != 0),
            HandlerResponse::Ack(_) => Err(SearchError::UnexpectedResponse {
                handler: self.getter.clone(),
            }),
        }
    }

    fn mark_visited(&mut self, at: Point) -> Result<(), SearchError> {
        let cell = self.cell_of(at)?;
        match self.client.set(&self.setter, cell.x, cell.y, 1)? {
            HandlerResponse::Ack(_) => Ok(()),
            _ => Err(SearchError::UnexpectedResponse {
                handler: self.setter.clone(),
            }),
        }
    }
}
