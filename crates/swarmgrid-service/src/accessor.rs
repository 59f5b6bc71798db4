//! The status accessor: request forms in, grid operations out.

use swarmgrid_grid::{Grid, GridConfig, GridError};
use tracing::debug;

use crate::config::ConfigError;
use crate::request::{
    FieldRequest, FieldResponse, FlagRequest, FlagResponse, WriteRequest, WriteResponse,
};

/// Answers status requests against a grid it owns.
///
/// Every request grows the grid to cover its coordinate before the
/// register is touched, so reads of unseen cells return zero rather
/// than an error.
pub struct StatusAccessor {
    grid: Grid,
}

impl StatusAccessor {
    /// Wrap an existing grid.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Build the grid from `config` and wrap it.
    pub fn from_config(config: GridConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Grid::new(config)?))
    }

    /// Read a flag: whether any bit of `mask` is set.
    pub fn read_flag(&mut self, req: &FlagRequest) -> Result<FlagResponse, GridError> {
        let data = self.grid.get_flag(req.coord(), req.stride, req.mask)?;
        Ok(FlagResponse { data })
    }

    /// Read a bit field.
    pub fn read_field(&mut self, req: &FieldRequest) -> Result<FieldResponse, GridError> {
        let data = self.grid.get_field(req.coord(), req.field())?;
        Ok(FieldResponse { data })
    }

    /// Apply a field write.
    ///
    /// `success` is `true` whenever the request was valid, including when
    /// the field already held the requested value.
    pub fn write(&mut self, req: &WriteRequest) -> Result<WriteResponse, GridError> {
        let register = self.grid.set_field(req.coord(), req.field(), req.data)?;
        debug!(coord = %req.coord(), stride = req.stride, register, "status write applied");
        Ok(WriteResponse { success: true })
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the underlying grid.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Consume the accessor and return the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarmgrid_core::{Cell, CellError};

    fn accessor(size: u16) -> StatusAccessor {
        StatusAccessor::from_config(GridConfig::with_size(size)).unwrap()
    }

    #[test]
    fn unseen_cells_read_zero() {
        let mut acc = accessor(4);
        let flag = acc
            .read_flag(&FlagRequest {
                x: 10,
                y: -10,
                stride: 1,
                mask: 0xFF,
            })
            .unwrap();
        assert!(!flag.data);
        assert!(acc.grid().size().0 > 4);
    }

    #[test]
    fn write_then_read_field() {
        let mut acc = accessor(4);
        let write = WriteRequest {
            x: 1,
            y: 1,
            stride: 2,
            offset: 4,
            mask: 0x10,
            data: 1,
        };
        assert!(acc.write(&write).unwrap().success);

        let field = acc
            .read_field(&FieldRequest {
                x: 1,
                y: 1,
                stride: 2,
                offset: 4,
                mask: 0x10,
            })
            .unwrap();
        assert_eq!(field.data, 1);

        let flag = acc
            .read_flag(&FlagRequest {
                x: 1,
                y: 1,
                stride: 2,
                mask: 0x10,
            })
            .unwrap();
        assert!(flag.data);
    }

    #[test]
    fn writing_current_value_is_success_without_change() {
        let mut acc = accessor(2);
        let req = WriteRequest {
            x: 0,
            y: 0,
            stride: 0,
            offset: 0,
            mask: 0x01,
            data: 0,
        };
        assert!(acc.write(&req).unwrap().success);
        let cell = acc.grid().cell(req.coord()).unwrap();
        assert_eq!(cell.status(0), Ok(0));
    }

    #[test]
    fn bad_stride_is_an_error() {
        let mut acc = accessor(2);
        let err = acc
            .read_flag(&FlagRequest {
                x: 0,
                y: 0,
                stride: 9,
                mask: 1,
            })
            .unwrap_err();
        assert_eq!(
            err,
            GridError::Cell(CellError::InvalidStride {
                stride: 9,
                stride_count: 3
            })
        );
    }

    #[test]
    fn into_grid_keeps_state() {
        let mut acc = accessor(2);
        acc.write(&WriteRequest {
            x: 0,
            y: 0,
            stride: 1,
            offset: 2,
            mask: 0x04,
            data: 1,
        })
        .unwrap();
        let grid = acc.into_grid();
        let cell = grid.cell(swarmgrid_core::GridCoord::ORIGIN).unwrap();
        assert_eq!(cell.status(1), Ok(0x04));
    }
}
