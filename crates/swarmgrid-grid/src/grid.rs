//! The growable status grid.

use std::collections::VecDeque;

use swarmgrid_cell::{AllocatorStats, CellAllocator, CellHandle, CellRef, CellRefMut};
use swarmgrid_core::{Cell, CellAddress, CellWrite, GridCoord, StatusField};
use tracing::{debug, error, info, trace};

use crate::axis::{Axis, Growth, Side};
use crate::config::{ConfigError, GridConfig};
use crate::error::GridError;

/// One column of cells, indexed by physical row.
type Column = VecDeque<CellHandle>;

/// A two-dimensional grid of status cells around a movable origin.
///
/// Storage is a deque of columns, each a deque of cells, so both axes
/// grow at either end without moving existing cells. Every column has
/// exactly `y.size()` cells.
///
/// All status operations take `&mut self`: reads grow the grid when the
/// coordinate is outside the current extents.
pub struct Grid {
    columns: VecDeque<Column>,
    x: Axis,
    y: Axis,
    allocator: CellAllocator,
}

impl Grid {
    /// Build a square grid of `config.initial_size` cells per side.
    ///
    /// Returns `Err` if the config fails [`GridConfig::validate`].
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let size = config.initial_size as usize;
        let mut allocator = CellAllocator::new(&config.cells)?;

        let mut columns = VecDeque::with_capacity(size);
        for x in 0..size {
            let mut column = VecDeque::with_capacity(size);
            for y in 0..size {
                let cell = allocator.create_cell();
                trace!(x, y, kind = %cell.kind(), "constructed cell");
                column.push_back(cell);
            }
            columns.push_back(column);
        }

        let grid = Self {
            columns,
            x: Axis::new(size),
            y: Axis::new(size),
            allocator,
        };
        info!(
            size,
            stride_count = config.cells.stride_count,
            pooled = grid.allocator.stats().pooled,
            pool_bytes = grid.allocator.pool().memory_bytes(),
            "grid initialised"
        );
        Ok(grid)
    }

    /// Physical `(columns, rows)`.
    pub fn size(&self) -> (usize, usize) {
        (self.x.size(), self.y.size())
    }

    /// Physical index of the origin as `(column, row)`.
    pub fn center(&self) -> (usize, usize) {
        (self.x.center(), self.y.center())
    }

    /// Horizontal extent.
    pub fn x_axis(&self) -> &Axis {
        &self.x
    }

    /// Vertical extent.
    pub fn y_axis(&self) -> &Axis {
        &self.y
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.x.size() * self.y.size()
    }

    /// Status registers per cell.
    pub fn stride_count(&self) -> u8 {
        self.allocator.stride_count()
    }

    /// How the grid's cells were allocated.
    pub fn allocator_stats(&self) -> AllocatorStats {
        self.allocator.stats()
    }

    /// Whether `coord` is addressable without growth.
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.x.index(coord.x).is_some() && self.y.index(coord.y).is_some()
    }

    // ── Growth ──────────────────────────────────────────────────

    /// Grow the grid until `coord` is addressable.
    ///
    /// Columns are added one at a time on the side `coord.x` falls off,
    /// then rows on the side `coord.y` falls off. Growth on the front of
    /// an axis shifts its center so existing coordinates keep their
    /// cells. A covered coordinate leaves the grid untouched.
    pub fn check_bounds(&mut self, coord: GridCoord) -> Growth {
        let mut growth = Growth::default();
        if self.contains(coord) {
            return growth;
        }
        let (min_x, max_x) = self.x.span();
        let (min_y, max_y) = self.y.span();
        debug!(%coord, min_x, min_y, max_x, max_y, "grid too small, growing");

        if let Some((side, count)) = self.x.shortfall(coord.x) {
            for _ in 0..count {
                self.add_column(side);
            }
            match side {
                Side::Front => growth.columns_front = count,
                Side::Back => growth.columns_back = count,
            }
        }
        if let Some((side, count)) = self.y.shortfall(coord.y) {
            for _ in 0..count {
                self.add_row(side);
            }
            match side {
                Side::Front => growth.rows_front = count,
                Side::Back => growth.rows_back = count,
            }
        }
        growth
    }

    /// Add one column of fresh cells on `side`.
    pub fn add_column(&mut self, side: Side) {
        let rows = self.y.size();
        let column: Column = (0..rows).map(|_| self.allocator.create_cell()).collect();
        match side {
            Side::Front => self.columns.push_front(column),
            Side::Back => self.columns.push_back(column),
        }
        self.x.grow(side);
        debug!(?side, columns = self.x.size(), x_center = self.x.center(), "added column");
    }

    /// Add one row of fresh cells on `side` (one cell per column).
    pub fn add_row(&mut self, side: Side) {
        for column in self.columns.iter_mut() {
            let cell = self.allocator.create_cell();
            match side {
                Side::Front => column.push_front(cell),
                Side::Back => column.push_back(cell),
            }
        }
        self.y.grow(side);
        debug!(?side, rows = self.y.size(), y_center = self.y.center(), "added row");
    }

    // ── Addressing ──────────────────────────────────────────────

    fn physical(&self, coord: GridCoord) -> Result<(usize, usize), GridError> {
        match (self.x.index(coord.x), self.y.index(coord.y)) {
            (Some(px), Some(py)) => Ok((px, py)),
            _ => {
                let err = GridError::OutOfBounds {
                    coord,
                    physical: (self.x.physical(coord.x), self.y.physical(coord.y)),
                    size: self.size(),
                };
                error!(%err, "cell lookup outside storage");
                Err(err)
            }
        }
    }

    /// The cell at `coord`, without growing.
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside storage.
    pub fn cell(&self, coord: GridCoord) -> Result<CellRef<'_>, GridError> {
        let (px, py) = self.physical(coord)?;
        Ok(self.allocator.cell(&self.columns[px][py]))
    }

    /// Mutable access to the cell at `coord`, without growing.
    pub fn cell_mut(&mut self, coord: GridCoord) -> Result<CellRefMut<'_>, GridError> {
        let (px, py) = self.physical(coord)?;
        Ok(self.allocator.cell_mut(&mut self.columns[px][py]))
    }

    /// Storage address of the cell at `coord`, without growing.
    pub fn cell_address(&self, coord: GridCoord) -> Result<CellAddress, GridError> {
        Ok(self.cell(coord)?.address())
    }

    // ── Status protocol ─────────────────────────────────────────

    /// Whether any bit of `mask` is set in register `stride` at `coord`.
    ///
    /// Grows the grid if `coord` is outside the current extents. An
    /// invalid `stride` is rejected before any growth.
    pub fn get_flag(&mut self, coord: GridCoord, stride: u8, mask: u8) -> Result<bool, GridError> {
        let field = StatusField::new(stride, 0, mask);
        field.validate(self.stride_count())?;
        self.check_bounds(coord);
        let cell = self.cell(coord)?;
        let register = cell.status(stride)?;
        let set = field.is_set(register);
        trace!(%coord, address = %cell.address(), register, set, "read status flag");
        Ok(set)
    }

    /// Extract `field` from the cell at `coord`: `(register & mask) >> offset`.
    ///
    /// Grows the grid if needed; invalid descriptors are rejected first.
    pub fn get_field(&mut self, coord: GridCoord, field: StatusField) -> Result<u8, GridError> {
        field.validate(self.stride_count())?;
        self.check_bounds(coord);
        let cell = self.cell(coord)?;
        let register = cell.status(field.stride)?;
        let value = field.extract(register);
        trace!(%coord, address = %cell.address(), register, value, "read status field");
        Ok(value)
    }

    /// Write `value` to `field` at `coord` and return the resulting register.
    ///
    /// If the current field value differs from `value`, the bit at
    /// `field.offset` is toggled; other bits of the register are kept.
    /// For multi-bit masks this is a toggle, not an assignment.
    pub fn set_field(
        &mut self,
        coord: GridCoord,
        field: StatusField,
        value: u8,
    ) -> Result<u8, GridError> {
        field.validate(self.stride_count())?;
        self.check_bounds(coord);
        let mut cell = self.cell_mut(coord)?;
        let register = cell.status(field.stride)?;
        let written = match field.apply(register, value) {
            Some(next) => {
                cell.set_status(field.stride, next)?;
                next
            }
            None => register,
        };
        debug!(%coord, address = %cell.address(), register = written, "wrote status field");
        Ok(written)
    }
}
