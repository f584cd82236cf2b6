use dioxus::prelude::*;
use gridspan_config::Config;
use gridspan_engine::{Grid, GridOptions, GridSelection, PointerInput};

use super::components;
use crate::sample;

const GRID_CSS: &str = "
.app-container {
    font-family: sans-serif;
    padding: 1rem;
    min-height: 100vh;
    outline: none;
}

.grid-table table {
    border-spacing: 0;
    border: 1px solid black;
}

.grid-table th,
.grid-table td {
    margin: 0;
    padding: 0.5rem;
    border-bottom: 1px solid #ccc;
    border-right: 1px solid #ccc;
}

.refresh-button {
    margin-top: 1rem;
}
";

#[component]
pub fn App(config: Config) -> Element {
    let sample_rows = config.sample_rows;
    let mut refresh_seed = use_signal(|| 0u64);
    let mut rows = use_signal(|| sample::make_rows(sample_rows, 0));
    let mut selection = use_signal(move || {
        GridSelection::new(
            Grid::new(sample::columns(), sample_rows),
            GridOptions {
                auto_reset_selection: config.auto_reset_selection,
            },
        )
    });

    rsx! {
        style { {GRID_CSS} }
        div {
            class: "app-container",
            tabindex: "0",
            // Release and escape are window-wide concerns, so they live on
            // the root container (stretched to the viewport): a drag that
            // leaves the table still ends when the button goes up over the
            // heading, the refresh button or the page margin. Attached once
            // per component instance, dropped with it.
            onmouseup: move |_| selection.write().handle(PointerInput::Release),
            onkeydown: move |evt| {
                if let Some(input) = root_key_input(evt.key()) {
                    selection.write().handle(input);
                }
            },
            h2 { "gridspan" }
            components::GridTable {
                rows: rows.read().clone(),
                selection,
            }
            button {
                class: "refresh-button",
                onclick: move |_| {
                    let seed = *refresh_seed.read() + 1;
                    refresh_seed.set(seed);
                    let new_rows = sample::make_rows(sample_rows, seed);
                    {
                        let mut selection = selection.write();
                        selection.grid_mut().set_row_count(new_rows.len());
                        // Dataset identity changed: the engine applies
                        // the auto-reset option.
                        selection.data_changed();
                    }
                    rows.set(new_rows);
                },
                "Refresh data"
            }
        }
    }
}

/// Keyboard input the app root forwards to the engine.
fn root_key_input(key: Key) -> Option<PointerInput> {
    (key == Key::Escape).then_some(PointerInput::Cancel)
}
