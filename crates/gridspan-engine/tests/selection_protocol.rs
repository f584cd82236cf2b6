//! Integration tests driving the public API the way a frontend does:
//! hit-test lookups through the grid, pointer inputs through the default
//! protocol, classification queries during render.

use pretty_assertions::assert_eq;

use gridspan_engine::{
    CellCoord, Column, Grid, GridOptions, GridSelection, PointerInput, SelectionBounds,
};

fn demo_selection(auto_reset_selection: bool) -> GridSelection {
    let grid = Grid::new(
        vec![
            Column::new("first_name", "First Name"),
            Column::new("last_name", "Last Name"),
            Column::new("age", "Age"),
            Column::new("visits", "Visits"),
            Column::new("status", "Status"),
            Column::new("progress", "Profile Progress"),
            Column::new("notes", "Notes"),
        ],
        5,
    );
    GridSelection::new(
        grid,
        GridOptions {
            auto_reset_selection,
        },
    )
}

/// Render the fill classification as one glyph per cell: `O` origin,
/// `X` extent endpoint, `#` selected, `.` outside.
fn fill_map(selection: &GridSelection) -> String {
    (0..selection.grid().row_count())
        .map(|row| {
            selection
                .row_cells(row)
                .map(|cell| {
                    if cell.origin {
                        'O'
                    } else if cell.extent {
                        'X'
                    } else if cell.selected {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the boundary classification as the number of edges per cell,
/// `.` for cells outside the rectangle.
fn edge_map(selection: &GridSelection) -> String {
    (0..selection.grid().row_count())
        .map(|row| {
            selection
                .row_cells(row)
                .map(|cell| {
                    if cell.selected {
                        char::from_digit(cell.boundary.count() as u32, 10).unwrap()
                    } else {
                        '.'
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn drag_gesture_classification_snapshot() {
    let mut selection = demo_selection(false);

    let origin = selection.grid().coordinate_of("age", 3).unwrap();
    assert_eq!(origin, CellCoord::new(2, 3));
    selection.handle(PointerInput::Press { coord: origin, extend: false });

    let extent = selection.grid().coordinate_of("progress", 1).unwrap();
    assert_eq!(extent, CellCoord::new(5, 1));
    selection.handle(PointerInput::Enter { coord: extent });
    selection.handle(PointerInput::Release);

    insta::assert_snapshot!(fill_map(&selection), @r"
    .......
    ..###X.
    ..####.
    ..O###.
    .......
    ");

    insta::assert_snapshot!(edge_map(&selection), @r"
    .......
    ..2112.
    ..1001.
    ..2112.
    .......
    ");
}

#[test]
fn single_cell_selection_has_all_four_edges() {
    let mut selection = demo_selection(false);
    selection.handle(PointerInput::Press { coord: CellCoord::new(3, 2), extend: false });
    selection.handle(PointerInput::Release);

    insta::assert_snapshot!(fill_map(&selection), @r"
    .......
    .......
    ...O...
    .......
    .......
    ");

    let cell = selection.cell_info(CellCoord::new(3, 2));
    assert!(cell.origin && cell.extent);
    assert_eq!(cell.boundary.count(), 4);
}

#[test]
fn shift_press_after_release_extends_from_surviving_origin() {
    let mut selection = demo_selection(false);
    selection.handle(PointerInput::Press { coord: CellCoord::new(2, 3), extend: false });
    selection.handle(PointerInput::Release);
    selection.handle(PointerInput::Press { coord: CellCoord::new(5, 1), extend: true });

    assert_eq!(
        selection.state().bounds(),
        Some(SelectionBounds {
            min_col: 2,
            max_col: 5,
            min_row: 1,
            max_row: 3,
        })
    );
    assert_eq!(selection.state().origin(), Some(CellCoord::new(2, 3)));
}

#[test]
fn escape_clears_selection_and_all_queries_go_empty() {
    let mut selection = demo_selection(false);
    selection.handle(PointerInput::Press { coord: CellCoord::new(1, 1), extend: false });
    selection.handle(PointerInput::Enter { coord: CellCoord::new(4, 3) });
    selection.handle(PointerInput::Cancel);

    assert!(!selection.state().selecting());
    assert_eq!(selection.state().bounds(), None);
    assert!(selection.cells().all(|cell| {
        !cell.selected && !cell.origin && !cell.extent && !cell.boundary.any()
    }));
}

#[test]
fn data_refresh_respects_auto_reset_option() {
    // Default: the rectangle survives a refresh.
    let mut keeping = demo_selection(false);
    keeping.handle(PointerInput::Press { coord: CellCoord::new(1, 1), extend: false });
    keeping.handle(PointerInput::Release);
    keeping.data_changed();
    assert!(keeping.state().is_selected(CellCoord::new(1, 1)));

    // Opt-in: the refresh clears it.
    let mut clearing = demo_selection(true);
    clearing.handle(PointerInput::Press { coord: CellCoord::new(1, 1), extend: false });
    clearing.handle(PointerInput::Release);
    clearing.data_changed();
    assert_eq!(clearing.state().bounds(), None);
}

#[test]
fn column_reorder_changes_lookup_but_not_stored_selection() {
    let mut selection = demo_selection(false);
    let coord = selection.grid().coordinate_of("status", 2).unwrap();
    assert_eq!(coord.col, 4);
    selection.handle(PointerInput::Press { coord, extend: false });
    selection.handle(PointerInput::Release);

    // Move "status" to the front; the selection stays at column index 4,
    // which now addresses a different logical column. Coordinates are a
    // per-render identity, so the adapter re-resolves them after reorder.
    let mut columns = selection.grid().columns().to_vec();
    let status = columns.remove(4);
    columns.insert(0, status);
    selection.grid_mut().set_columns(columns);

    assert_eq!(
        selection.grid().coordinate_of("status", 2),
        Some(CellCoord::new(0, 2))
    );
    assert!(selection.state().is_selected(CellCoord::new(4, 2)));
}
