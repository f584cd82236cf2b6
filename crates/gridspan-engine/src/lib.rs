pub mod grid;
pub mod selection;

// Re-export key types for easier usage
pub use grid::{CellRenderInfo, Column, Grid, GridOptions, GridSelection};
pub use selection::{
    BoundaryEdges, CellCoord, PointerInput, SelectionBounds, SelectionState, normalize,
};
