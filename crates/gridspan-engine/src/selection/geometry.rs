use serde::{Deserialize, Serialize};

/// Position of a cell in the currently visible column/row ordering.
///
/// Coordinates are *not* a stable identity: the ordering can change between
/// renders, so adapters recompute them on every render pass (see
/// [`Grid::coordinate_of`](crate::grid::Grid::coordinate_of)). `usize`
/// indices make negative coordinates unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub col: usize,
    pub row: usize,
}

impl CellCoord {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Normalized rectangle spanned by two selection endpoints.
///
/// All bounds are inclusive; a 1x1 rectangle has `min == max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBounds {
    pub min_col: usize,
    pub max_col: usize,
    pub min_row: usize,
    pub max_row: usize,
}

/// Derive the normalized bounds of the rectangle spanned by `origin` and
/// `extent`. Total: the endpoints may be given in any order and may coincide
/// (degenerate 1x1 rectangle).
pub fn normalize(origin: CellCoord, extent: CellCoord) -> SelectionBounds {
    SelectionBounds {
        min_col: origin.col.min(extent.col),
        max_col: origin.col.max(extent.col),
        min_row: origin.row.min(extent.row),
        max_row: origin.row.max(extent.row),
    }
}

impl SelectionBounds {
    /// Inclusive membership test on both axes.
    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.col >= self.min_col
            && cell.col <= self.max_col
            && cell.row >= self.min_row
            && cell.row <= self.max_row
    }

    /// Which sides of the rectangle the cell lies on.
    ///
    /// An edge flag is true iff the cell sits on that side *and* inside the
    /// rectangle's perpendicular span. Corner cells have exactly two flags;
    /// the single cell of a 1x1 rectangle has all four.
    pub fn boundary_edges(&self, cell: CellCoord) -> BoundaryEdges {
        let in_col_span = cell.col >= self.min_col && cell.col <= self.max_col;
        let in_row_span = cell.row >= self.min_row && cell.row <= self.max_row;
        BoundaryEdges {
            top: cell.row == self.min_row && in_col_span,
            right: cell.col == self.max_col && in_row_span,
            bottom: cell.row == self.max_row && in_col_span,
            left: cell.col == self.min_col && in_row_span,
        }
    }
}

/// Per-cell boundary classification, one flag per rectangle side.
///
/// Adapters use this to draw the selection outline: each true flag is an
/// edge line on that side of the cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryEdges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl BoundaryEdges {
    /// True if the cell lies on any side of the rectangle.
    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }

    /// Number of sides the cell lies on (corners have 2, a 1x1 cell has 4).
    pub fn count(&self) -> usize {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .filter(|&&edge| edge)
            .count()
    }
}
