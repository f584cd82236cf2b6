use dioxus::html::input_data::{MouseButton, keyboard_types::Modifiers};
use dioxus::prelude::*;
use gridspan_engine::{CellRenderInfo, GridSelection, PointerInput};

use crate::sample::Person;

/// The demo table. Every cell forwards its pointer events through the
/// engine's default interaction protocol. Release and escape are not tied
/// to one cell and are handled by the app root, not here: the drag must
/// end even when the button goes up outside the table.
#[component]
pub fn GridTable(rows: Vec<Person>, mut selection: Signal<GridSelection>) -> Element {
    let columns = selection.read().grid().columns().to_vec();

    rsx! {
        div {
            class: "grid-table",
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { "{column.title}" }
                        }
                    }
                }
                tbody {
                    for (row_index, person) in rows.iter().enumerate() {
                        tr {
                            {
                                let cells: Vec<CellRenderInfo> =
                                    selection.read().row_cells(row_index).collect();
                                rsx! {
                                    for cell in cells {
                                        td {
                                            style: "{cell_style(&cell)}",
                                            onmousedown: move |evt| {
                                                if evt.trigger_button() == Some(MouseButton::Primary) {
                                                    let extend = evt.modifiers().contains(Modifiers::SHIFT);
                                                    selection.write().handle(PointerInput::Press {
                                                        coord: cell.coord,
                                                        extend,
                                                    });
                                                }
                                            },
                                            // The engine only moves the extent
                                            // while a drag is in progress.
                                            onmouseenter: move |_| {
                                                selection.write().handle(PointerInput::Enter {
                                                    coord: cell.coord,
                                                });
                                            },
                                            "{person.cell_text(&columns[cell.coord.col].id)}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Inline style for one cell: fill from the selection classification,
/// boundary edges as green border lines.
fn cell_style(cell: &CellRenderInfo) -> String {
    let mut style = String::from("user-select: none;");
    if cell.origin {
        style.push_str(" background-color: lightgrey;");
    } else if cell.selected {
        style.push_str(" background-color: grey;");
    }
    if cell.boundary.top {
        style.push_str(" border-top: 2px solid green;");
    }
    if cell.boundary.right {
        style.push_str(" border-right: 2px solid green;");
    }
    if cell.boundary.bottom {
        style.push_str(" border-bottom: 2px solid green;");
    }
    if cell.boundary.left {
        style.push_str(" border-left: 2px solid green;");
    }
    style
}
