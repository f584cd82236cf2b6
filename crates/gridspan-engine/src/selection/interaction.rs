//! Default click-and-drag interaction protocol.
//!
//! Frontends that want the standard behavior translate device events into
//! [`PointerInput`] values and forward them to
//! [`SelectionState::handle`]. Frontends with different UI needs can skip
//! this module and drive the four transitions directly.

use crate::selection::geometry::CellCoord;
use crate::selection::state::SelectionState;

/// A device-level input, already resolved to grid coordinates by the
/// adapter's hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    /// Primary button pressed on a cell. `extend` is the region-extend
    /// modifier (shift-click): extend the existing rectangle instead of
    /// starting a fresh gesture.
    Press { coord: CellCoord, extend: bool },
    /// Pointer entered a cell. Only moves the extent while a drag is in
    /// progress.
    Enter { coord: CellCoord },
    /// Primary button released anywhere, including outside the grid. The
    /// adapter must forward the release regardless of the hit-test result.
    Release,
    /// Escape key or any caller-initiated cancel.
    Cancel,
}

impl SelectionState {
    /// Apply one input according to the default protocol.
    ///
    /// - plain press: fresh gesture at the pressed cell, drag begins
    /// - extend-press with no origin: origin and extent both placed at the
    ///   pressed cell
    /// - extend-press with an origin: only the extent moves
    /// - enter: extent follows the pointer while dragging
    /// - release: drag ends, rectangle stays selected
    /// - cancel: full reset
    pub fn handle(&mut self, input: PointerInput) {
        match input {
            PointerInput::Press { coord, extend: false } => {
                self.set_origin(coord);
                self.set_selecting(true);
            }
            PointerInput::Press { coord, extend: true } => {
                if self.origin().is_none() {
                    self.set_origin(coord);
                }
                self.set_extent(coord);
            }
            PointerInput::Enter { coord } => {
                if self.selecting() {
                    self.set_extent(coord);
                }
            }
            PointerInput::Release => self.set_selecting(false),
            PointerInput::Cancel => self.reset(),
        }
    }
}
