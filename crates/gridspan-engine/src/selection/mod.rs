/*!
 * # Selection Core Module
 *
 * Rectangular cell-region selection: a gesture starts on an *origin* cell,
 * drags to an *extent* cell, and the normalized rectangle spanned by the two
 * endpoints is the selected region.
 *
 * ## Architecture Overview
 *
 * - **`geometry`**: pure region math. [`normalize`] derives inclusive
 *   [`SelectionBounds`] from two [`CellCoord`]s; membership and
 *   boundary-edge classification are methods on the bounds. No state.
 * - **`state`**: the [`SelectionState`] machine. Four total transitions
 *   (`set_selecting`, `set_origin`, `set_extent`, `reset`) mutate an
 *   explicit struct; `bounds` is always derived from the endpoints, never
 *   set directly.
 * - **`interaction`**: the default click-and-drag protocol. Frontends that
 *   want the standard press/drag/release/escape behavior forward
 *   [`PointerInput`] events instead of wiring the transitions manually.
 *
 * ## State Transitions
 *
 * ```text
 * set_origin(c)     origin := extent := c, bounds := 1x1 at c
 * set_extent(c)     extent := c, bounds recomputed   (no-op without origin)
 * set_selecting(b)  drag flag only                   (true requires origin)
 * reset()           everything back to empty, idempotent
 * ```
 *
 * There is no separate "committed" state: after release the rectangle stays
 * the active selection until the next `set_origin` or `reset`.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use gridspan_engine::selection::{CellCoord, PointerInput, SelectionState};
 *
 * let mut state = SelectionState::new();
 * state.handle(PointerInput::Press { coord: CellCoord::new(2, 3), extend: false });
 * state.handle(PointerInput::Enter { coord: CellCoord::new(5, 1) });
 * state.handle(PointerInput::Release);
 *
 * let bounds = state.bounds().unwrap();
 * assert!(bounds.contains(CellCoord::new(4, 2)));
 * ```
 */

pub mod geometry;
pub mod interaction;
pub mod state;

pub use geometry::{BoundaryEdges, CellCoord, SelectionBounds, normalize};
pub use interaction::PointerInput;
pub use state::SelectionState;
