//! Grid model and the adapter-facing classification query.
//!
//! A [`Grid`] is the live column ordering plus a row count; it is rebuilt
//! (or updated) by the adapter whenever the underlying data view changes,
//! and coordinate lookups always go through the current ordering -
//! coordinates are never cached on cells.
//!
//! [`GridSelection`] ties one grid to one [`SelectionState`] and answers
//! the per-cell classification the adapter needs while rendering. Each
//! grid instance owns its state exclusively; there is no shared registry
//! between instances.

use serde::{Deserialize, Serialize};

use crate::selection::{BoundaryEdges, CellCoord, PointerInput, SelectionState};

/// One column of the visible grid, identified by a stable id and carrying
/// a display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// The currently visible column ordering and row count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Column>,
    row_count: usize,
}

impl Grid {
    pub fn new(columns: Vec<Column>, row_count: usize) -> Self {
        Self { columns, row_count }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Replace the visible column ordering. Lookups made after this call
    /// see the new ordering immediately.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
    }

    /// Map a logical cell to its position in the live ordering. `None`
    /// when the column id is not currently visible or the row is out of
    /// range.
    pub fn coordinate_of(&self, column_id: &str, row: usize) -> Option<CellCoord> {
        if row >= self.row_count {
            return None;
        }
        let col = self.columns.iter().position(|column| column.id == column_id)?;
        Some(CellCoord::new(col, row))
    }
}

/// Everything an adapter needs to draw one cell: fill from `selected` /
/// `origin`, outline from `boundary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellRenderInfo {
    pub coord: CellCoord,
    pub selected: bool,
    pub origin: bool,
    pub extent: bool,
    pub boundary: BoundaryEdges,
}

/// Per-instance configuration, passed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridOptions {
    /// Clear the selection whenever the underlying dataset changes
    /// identity. Off by default: a data refresh keeps the rectangle.
    pub auto_reset_selection: bool,
}

/// One grid instance's selection: the grid model, the exclusively-owned
/// [`SelectionState`], and the instance options.
///
/// Adapters drive it from two sides: the interaction surface forwards
/// [`PointerInput`]s (or calls the transitions directly), and the render
/// loop pulls [`CellRenderInfo`] per cell via [`cell_info`](Self::cell_info)
/// / [`row_cells`](Self::row_cells) / [`cells`](Self::cells).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSelection {
    grid: Grid,
    state: SelectionState,
    options: GridOptions,
}

impl GridSelection {
    pub fn new(grid: Grid, options: GridOptions) -> Self {
        Self {
            grid,
            state: SelectionState::new(),
            options,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Read-only view of the selection state, for rendering.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn options(&self) -> GridOptions {
        self.options
    }

    /// Forward one device input through the default interaction protocol.
    pub fn handle(&mut self, input: PointerInput) {
        self.state.handle(input);
    }

    pub fn set_selecting(&mut self, selecting: bool) {
        self.state.set_selecting(selecting);
    }

    pub fn set_origin(&mut self, coord: CellCoord) {
        self.state.set_origin(coord);
    }

    pub fn set_extent(&mut self, coord: CellCoord) {
        self.state.set_extent(coord);
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Adapter notification that the underlying dataset changed identity
    /// (reload, refresh). Applies the `auto_reset_selection` option.
    pub fn data_changed(&mut self) {
        if self.options.auto_reset_selection {
            self.state.reset();
        }
    }

    /// Classify one cell against the current selection.
    pub fn cell_info(&self, coord: CellCoord) -> CellRenderInfo {
        CellRenderInfo {
            coord,
            selected: self.state.is_selected(coord),
            origin: self.state.is_origin(coord),
            extent: self.state.is_extent(coord),
            boundary: self.state.boundary_of(coord),
        }
    }

    /// Classification for every cell of one row, in column order.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = CellRenderInfo> + '_ {
        (0..self.grid.columns.len()).map(move |col| self.cell_info(CellCoord::new(col, row)))
    }

    /// Classification for every cell of the grid, row-major.
    pub fn cells(&self) -> impl Iterator<Item = CellRenderInfo> + '_ {
        (0..self.grid.row_count).flat_map(move |row| self.row_cells(row))
    }
}
