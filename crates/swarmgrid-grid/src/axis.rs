//! Per-axis extents and origin translation.
//!
//! An [`Axis`] tracks the physical length of one grid dimension and the
//! physical index of the logical origin on it. Translation is a single
//! addition: `physical = center + offset`.

/// Which end of an axis storage grows at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Before physical index 0 (left for columns, top for rows).
    /// Growing here shifts the center.
    Front,
    /// After the last physical index (right for columns, bottom for rows).
    Back,
}

/// Physical extent of one grid dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    size: usize,
    center: usize,
}

impl Axis {
    /// An axis of `size` cells with the origin at `size / 2`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            center: size / 2,
        }
    }

    /// Physical length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Physical index of the logical origin.
    pub fn center(&self) -> usize {
        self.center
    }

    /// Physical index for an origin-relative offset (may be out of range).
    pub fn physical(&self, offset: i8) -> isize {
        self.center as isize + offset as isize
    }

    /// Physical index for `offset`, or `None` if it lies outside storage.
    pub fn index(&self, offset: i8) -> Option<usize> {
        let p = self.physical(offset);
        if p >= 0 && (p as usize) < self.size {
            Some(p as usize)
        } else {
            None
        }
    }

    /// Smallest and largest addressable origin-relative offsets.
    pub fn span(&self) -> (isize, isize) {
        let min = -(self.center as isize);
        let max = self.size as isize - 1 - self.center as isize;
        (min, max)
    }

    /// Which side needs growing to cover `offset`, and by how many cells.
    ///
    /// Returns `None` when `offset` is already covered.
    pub fn shortfall(&self, offset: i8) -> Option<(Side, usize)> {
        let p = self.physical(offset);
        if p < 0 {
            Some((Side::Front, p.unsigned_abs()))
        } else if p as usize >= self.size {
            Some((Side::Back, p as usize - self.size + 1))
        } else {
            None
        }
    }

    /// Record one cell of growth on `side`.
    pub(crate) fn grow(&mut self, side: Side) {
        self.size += 1;
        if side == Side::Front {
            self.center += 1;
        }
    }
}

/// Rows and columns added by one bounds check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Growth {
    /// Columns prepended on the left.
    pub columns_front: usize,
    /// Columns appended on the right.
    pub columns_back: usize,
    /// Rows prepended at the top.
    pub rows_front: usize,
    /// Rows appended at the bottom.
    pub rows_back: usize,
}

impl Growth {
    /// Whether the check left the grid unchanged.
    pub fn is_empty(&self) -> bool {
        self.columns() == 0 && self.rows() == 0
    }

    /// Columns added on either side.
    pub fn columns(&self) -> usize {
        self.columns_front + self.columns_back
    }

    /// Rows added on either side.
    pub fn rows(&self) -> usize {
        self.rows_front + self.rows_back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_half_size() {
        let a = Axis::new(4);
        assert_eq!(a.center(), 2);
        assert_eq!(a.span(), (-2, 1));
        let odd = Axis::new(5);
        assert_eq!(odd.center(), 2);
        assert_eq!(odd.span(), (-2, 2));
    }

    #[test]
    fn index_translates_through_center() {
        let a = Axis::new(4);
        assert_eq!(a.index(0), Some(2));
        assert_eq!(a.index(-2), Some(0));
        assert_eq!(a.index(1), Some(3));
        assert_eq!(a.index(2), None);
        assert_eq!(a.index(-3), None);
    }

    #[test]
    fn shortfall_measures_distance_past_edge() {
        let a = Axis::new(4);
        assert_eq!(a.shortfall(1), None);
        assert_eq!(a.shortfall(3), Some((Side::Back, 2)));
        assert_eq!(a.shortfall(-3), Some((Side::Front, 1)));
        assert_eq!(a.shortfall(-128), Some((Side::Front, 126)));
    }

    #[test]
    fn front_growth_shifts_center() {
        let mut a = Axis::new(4);
        a.grow(Side::Front);
        assert_eq!((a.size(), a.center()), (5, 3));
        assert_eq!(a.index(-3), Some(0));
        assert_eq!(a.index(0), Some(3));
    }

    #[test]
    fn back_growth_keeps_center() {
        let mut a = Axis::new(4);
        a.grow(Side::Back);
        assert_eq!((a.size(), a.center()), (5, 2));
        assert_eq!(a.index(2), Some(4));
    }

    #[test]
    fn single_cell_axis() {
        let a = Axis::new(1);
        assert_eq!(a.center(), 0);
        assert_eq!(a.span(), (0, 0));
        assert_eq!(a.shortfall(1), Some((Side::Back, 1)));
    }

    #[test]
    fn empty_growth() {
        assert!(Growth::default().is_empty());
        let g = Growth {
            columns_back: 2,
            rows_front: 1,
            ..Growth::default()
        };
        assert!(!g.is_empty());
        assert_eq!(g.columns(), 2);
        assert_eq!(g.rows(), 1);
    }
}
