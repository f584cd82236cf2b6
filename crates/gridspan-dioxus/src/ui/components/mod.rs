mod grid_table;

pub use grid_table::GridTable;
