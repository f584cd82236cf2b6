use crate::selection::geometry::{BoundaryEdges, CellCoord, SelectionBounds, normalize};

/// State machine for one rectangular cell selection.
///
/// One instance per grid; instances are never shared. All mutation goes
/// through the four transitions (`set_selecting`, `set_origin`,
/// `set_extent`, `reset`), each of which is total and completes before the
/// next event is handled. Renderers hold a shared reference and use the
/// query methods ([`is_selected`](Self::is_selected),
/// [`boundary_of`](Self::boundary_of), ...) to classify cells.
///
/// Invariants maintained by the transitions:
///
/// - `bounds` is always the coordinate-wise min/max of `origin` and
///   `extent`, and is `None` iff either endpoint is `None`.
/// - `extent` is never set while `origin` is empty; such a call is a
///   silent no-op.
/// - `selecting == true` implies `origin` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selecting: bool,
    origin: Option<CellCoord>,
    extent: Option<CellCoord>,
    // Derived from origin/extent, never assigned directly.
    bounds: Option<SelectionBounds>,
}

impl SelectionState {
    /// Empty state: no gesture, no endpoints, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// True strictly between a press-to-select event and the matching
    /// release or cancel.
    pub fn selecting(&self) -> bool {
        self.selecting
    }

    /// Cell where the current gesture began, if any.
    pub fn origin(&self) -> Option<CellCoord> {
        self.origin
    }

    /// Cell at the far end of the drag, if any. Equals the origin at
    /// gesture start.
    pub fn extent(&self) -> Option<CellCoord> {
        self.extent
    }

    /// Normalized rectangle spanned by origin and extent, if both are set.
    pub fn bounds(&self) -> Option<SelectionBounds> {
        self.bounds
    }

    /// Set or clear the drag-in-progress flag. Leaves origin, extent and
    /// bounds untouched.
    ///
    /// Raising the flag with no origin would break the "selecting implies
    /// origin" invariant, so that call is a silent no-op; the default
    /// protocol always places the origin first.
    pub fn set_selecting(&mut self, selecting: bool) {
        if selecting && self.origin.is_none() {
            return;
        }
        self.selecting = selecting;
    }

    /// Start a fresh gesture at `coord`: origin and extent both move there,
    /// collapsing any prior multi-cell rectangle to 1x1.
    pub fn set_origin(&mut self, coord: CellCoord) {
        self.origin = Some(coord);
        self.extent = Some(coord);
        self.bounds = Some(normalize(coord, coord));
    }

    /// Move the far end of the rectangle to `coord` and recompute bounds.
    ///
    /// Without an origin this is a silent no-op, not an error: the caller
    /// broke the gesture contract and the state must not become
    /// inconsistent.
    pub fn set_extent(&mut self, coord: CellCoord) {
        let Some(origin) = self.origin else {
            return;
        };
        self.extent = Some(coord);
        self.bounds = Some(normalize(origin, coord));
    }

    /// Clear everything back to the empty state in one step. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether `coord` falls inside the current rectangle. No active
    /// selection means nothing is inside.
    pub fn is_selected(&self, coord: CellCoord) -> bool {
        self.bounds.is_some_and(|bounds| bounds.contains(coord))
    }

    /// Whether `coord` is the gesture's origin cell.
    pub fn is_origin(&self, coord: CellCoord) -> bool {
        self.origin == Some(coord)
    }

    /// Whether `coord` is the current extent endpoint.
    pub fn is_extent(&self, coord: CellCoord) -> bool {
        self.extent == Some(coord)
    }

    /// Boundary-edge classification of `coord` against the current
    /// rectangle; all-false when there is no active selection.
    pub fn boundary_of(&self, coord: CellCoord) -> BoundaryEdges {
        self.bounds
            .map(|bounds| bounds.boundary_edges(coord))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_invariants(state: &SelectionState) {
        match (state.origin(), state.extent()) {
            (Some(origin), Some(extent)) => {
                assert_eq!(state.bounds(), Some(normalize(origin, extent)));
            }
            (None, None) => assert_eq!(state.bounds(), None),
            (origin, extent) => {
                panic!("endpoints must be set together: origin={origin:?} extent={extent:?}")
            }
        }
        if state.selecting() {
            assert!(state.origin().is_some());
        }
    }

    #[test]
    fn fresh_state_is_empty() {
        let state = SelectionState::new();
        assert!(!state.selecting());
        assert_eq!(state.origin(), None);
        assert_eq!(state.extent(), None);
        assert_eq!(state.bounds(), None);
        assert_invariants(&state);
    }

    #[test]
    fn set_origin_collapses_to_degenerate_rectangle() {
        let mut state = SelectionState::new();
        state.set_origin(CellCoord::new(2, 3));

        assert_eq!(state.origin(), Some(CellCoord::new(2, 3)));
        assert_eq!(state.extent(), Some(CellCoord::new(2, 3)));
        assert_eq!(
            state.bounds(),
            Some(SelectionBounds {
                min_col: 2,
                max_col: 2,
                min_row: 3,
                max_row: 3,
            })
        );
        assert_invariants(&state);
    }

    #[test]
    fn set_extent_spans_rectangle_from_origin() {
        let mut state = SelectionState::new();
        state.set_origin(CellCoord::new(2, 3));
        state.set_extent(CellCoord::new(5, 1));

        assert_eq!(
            state.bounds(),
            Some(SelectionBounds {
                min_col: 2,
                max_col: 5,
                min_row: 1,
                max_row: 3,
            })
        );
        assert!(state.is_selected(CellCoord::new(4, 2)));
        assert!(!state.is_selected(CellCoord::new(6, 2)));
        assert_invariants(&state);
    }

    #[test]
    fn boundary_query_reports_rectangle_corner() {
        let mut state = SelectionState::new();
        state.set_origin(CellCoord::new(2, 3));
        state.set_extent(CellCoord::new(5, 1));

        assert_eq!(
            state.boundary_of(CellCoord::new(2, 1)),
            BoundaryEdges {
                top: true,
                left: true,
                right: false,
                bottom: false,
            }
        );
    }

    #[test]
    fn extent_without_origin_is_a_noop() {
        let mut state = SelectionState::new();
        let before = state.clone();
        state.set_extent(CellCoord::new(3, 3));
        assert_eq!(state, before);
        assert_invariants(&state);
    }

    #[test]
    fn extent_noop_preserved_after_reset() {
        let mut state = SelectionState::new();
        state.set_origin(CellCoord::new(1, 1));
        state.reset();

        let before = state.clone();
        state.set_extent(CellCoord::new(3, 3));
        assert_eq!(state, before);
    }

    #[test]
    fn selecting_without_origin_is_a_noop() {
        let mut state = SelectionState::new();
        state.set_selecting(true);
        assert!(!state.selecting());
        assert_invariants(&state);
    }

    #[test]
    fn only_latest_extent_contributes_to_bounds() {
        let mut state = SelectionState::new();
        state.set_origin(CellCoord::new(1, 1));
        state.set_selecting(true);
        state.set_extent(CellCoord::new(9, 9));
        state.set_extent(CellCoord::new(3, 2));

        assert_eq!(
            state.bounds(),
            Some(SelectionBounds {
                min_col: 1,
                max_col: 3,
                min_row: 1,
                max_row: 2,
            })
        );
        // The intermediate drag cell left no trace.
        assert!(!state.is_selected(CellCoord::new(9, 9)));
        assert_invariants(&state);
    }

    #[test]
    fn new_origin_collapses_previous_rectangle() {
        let mut state = SelectionState::new();
        state.set_origin(CellCoord::new(0, 0));
        state.set_extent(CellCoord::new(4, 4));
        state.set_origin(CellCoord::new(2, 2));

        assert_eq!(state.extent(), Some(CellCoord::new(2, 2)));
        assert!(!state.is_selected(CellCoord::new(4, 4)));
        assert!(state.is_selected(CellCoord::new(2, 2)));
        assert_invariants(&state);
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = SelectionState::new();
        state.set_origin(CellCoord::new(2, 3));
        state.set_selecting(true);
        state.set_extent(CellCoord::new(5, 1));
        state.reset();

        assert_eq!(state, SelectionState::new());
        assert!(!state.is_selected(CellCoord::new(2, 3)));
        assert_eq!(state.boundary_of(CellCoord::new(2, 3)), BoundaryEdges::default());
        assert_invariants(&state);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut state = SelectionState::new();
        state.reset();
        assert_eq!(state, SelectionState::new());

        state.set_origin(CellCoord::new(1, 2));
        state.reset();
        let after_first = state.clone();
        state.reset();
        assert_eq!(state, after_first);
    }

    #[test]
    fn selection_persists_after_release() {
        let mut state = SelectionState::new();
        state.set_origin(CellCoord::new(1, 1));
        state.set_selecting(true);
        state.set_extent(CellCoord::new(3, 3));
        state.set_selecting(false);

        // No separate committed state: the rectangle stays active.
        assert!(state.is_selected(CellCoord::new(2, 2)));
        assert_eq!(state.origin(), Some(CellCoord::new(1, 1)));
        assert_invariants(&state);
    }
}
