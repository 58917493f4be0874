//! Row selection controller for grid and table widgets.
//!
//! This module provides [`SelectionController`], which owns multi-row
//! selection state (click, ctrl/shift click, arrow-key navigation,
//! select-all, context-menu selection) for a host-supplied [`RowModel`].
//!
//! The controller keeps two representations of the selection in sync on
//! every mutation: its own membership set plus ordered list, and the
//! per-row selected flag reached through the model. For every row currently
//! in the model, the row is a member of the selection exactly when its flag
//! is set.
//!
//! # Example
//!
//! ```
//! use trellis::event::KeyboardModifiers;
//! use trellis::model::{RowListModel, Selectable, SelectionController};
//!
//! struct Entry {
//!     selected: bool,
//! }
//!
//! impl Selectable for Entry {
//!     fn is_selected(&self) -> bool {
//!         self.selected
//!     }
//!     fn set_selected(&mut self, selected: bool) {
//!         self.selected = selected;
//!     }
//! }
//!
//! let mut rows = RowListModel::new();
//! let first = rows.push(Entry { selected: false });
//! rows.push(Entry { selected: false });
//!
//! let mut selection = SelectionController::new();
//! selection.selected_rows_did_change.connect(|rows| {
//!     println!("{} rows selected", rows.len());
//! });
//!
//! // A plain click replaces the selection with the clicked row.
//! selection.handle_selection(&mut rows, Some(first), KeyboardModifiers::NONE);
//! assert!(selection.is_selected(first));
//! ```

use std::collections::HashSet;

use trellis_core::Signal;

use crate::event::{Key, KeyPressEvent, KeyboardModifiers};

use super::row::{RowId, RowModel};

/// Direction of an arrow-key selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Move the selection edge one row up.
    Up,
    /// Move the selection edge one row down.
    Down,
}

/// Owns multi-row selection state for a host grid's row sequence.
///
/// The controller holds no reference to the row model; every operation takes
/// `&mut dyn RowModel` and re-resolves indices, so the host may insert,
/// remove, or reorder rows between calls. Rows that are no longer in the
/// model make the operation targeting them a silent no-op.
///
/// All state transitions happen synchronously on the calling thread. The
/// controller assumes exclusive, non-reentrant ownership of its state during
/// each call; connected slots must not call back into it.
///
/// # Signals
///
/// - `selected_rows_did_change`: emitted after `select_all`,
///   `handle_selection`, and `select_with_arrow` with the selection in
///   insertion order. Emission is unconditional once an operation passes its
///   validity guards, even when the net selection is unchanged.
/// - `context_menu_requested`: emitted on every context-menu invocation that
///   resolves to a row, whether or not the selection changed.
pub struct SelectionController {
    /// Selection membership for O(1) lookup.
    selected_ids: HashSet<RowId>,

    /// The selection in insertion order, as exposed to observers.
    selected_rows: Vec<RowId>,

    /// Start of a potential shift-range selection.
    anchor_index: Option<usize>,

    /// Index last touched by a shift+arrow walk; takes precedence over the
    /// anchor as the walk endpoint and is cleared by any plain click.
    shift_walk_index: Option<usize>,

    /// Suppresses the synthetic click paired with a mousedown that already
    /// performed selection. Reset on every new mousedown.
    prevent_click: bool,

    /// Emitted with the ordered selection after a selection-changing entry
    /// point completes.
    pub selected_rows_did_change: Signal<Vec<RowId>>,

    /// Emitted with the ordered selection on every context-menu invocation.
    pub context_menu_requested: Signal<Vec<RowId>>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    /// Creates a controller with an empty selection.
    pub fn new() -> Self {
        Self {
            selected_ids: HashSet::new(),
            selected_rows: Vec::new(),
            anchor_index: None,
            shift_walk_index: None,
            prevent_click: false,
            selected_rows_did_change: Signal::new(),
            context_menu_requested: Signal::new(),
        }
    }

    // =========================================================================
    // Selection Queries
    // =========================================================================

    /// Checks if a row is in the selection.
    pub fn is_selected(&self, row: RowId) -> bool {
        self.selected_ids.contains(&row)
    }

    /// Returns `true` if any rows are selected.
    pub fn has_selection(&self) -> bool {
        !self.selected_rows.is_empty()
    }

    /// Returns the number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selected_rows.len()
    }

    /// Returns the selected rows in insertion order.
    pub fn selected_rows(&self) -> &[RowId] {
        &self.selected_rows
    }

    /// Returns the anchor index for range selection, if one is set.
    pub fn anchor_index(&self) -> Option<usize> {
        self.anchor_index
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Adds a row to the selection and sets its flag.
    ///
    /// No-op when the row is already selected or no longer in the model.
    /// Does not notify.
    pub fn select(&mut self, model: &mut dyn RowModel, row: RowId) {
        if model.index_of(row).is_none() {
            tracing::trace!(target: "trellis::selection", ?row, "select: row not in model");
            return;
        }
        if self.selected_ids.insert(row) {
            self.selected_rows.push(row);
            model.set_selected(row, true);
        }
    }

    /// Adds each row in `rows` to the selection, skipping rows that are
    /// already selected. Each addition is independent and idempotent.
    ///
    /// Does not notify.
    pub fn select_many(&mut self, model: &mut dyn RowModel, rows: &[RowId]) {
        for &row in rows {
            self.select(model, row);
        }
    }

    /// Removes a row from the selection and clears its flag.
    ///
    /// No-op when the row is not a member. Does not notify.
    pub fn deselect(&mut self, model: &mut dyn RowModel, row: RowId) {
        if self.selected_ids.remove(&row) {
            self.selected_rows.retain(|r| *r != row);
            model.set_selected(row, false);
        }
    }

    /// Removes each row in `rows` from the selection.
    ///
    /// Does not notify.
    pub fn deselect_many(&mut self, model: &mut dyn RowModel, rows: &[RowId]) {
        for &row in rows {
            self.deselect(model, row);
        }
    }

    /// Selects every row in the model, in display order.
    ///
    /// Emits `selected_rows_did_change`.
    pub fn select_all(&mut self, model: &mut dyn RowModel) {
        self.clear(model);
        for index in 0..model.row_count() {
            let Some(row) = model.row_at(index) else {
                continue;
            };
            if self.selected_ids.insert(row) {
                self.selected_rows.push(row);
                model.set_selected(row, true);
            }
        }
        self.notify_selection_changed();
    }

    /// Clears every member's flag and empties the selection.
    ///
    /// Does not notify, and leaves the anchor in place: shift-range
    /// selection clears and rebuilds the selection mid-operation and relies
    /// on the anchor surviving.
    pub fn clear(&mut self, model: &mut dyn RowModel) {
        for row in self.selected_rows.drain(..) {
            model.set_selected(row, false);
        }
        self.selected_ids.clear();
    }

    /// Clears the selection and all transient state (anchor, shift-walk
    /// index, click guard). For hosts detaching the controller from a model.
    pub fn reset(&mut self, model: &mut dyn RowModel) {
        self.clear(model);
        self.anchor_index = None;
        self.shift_walk_index = None;
        self.prevent_click = false;
    }

    // =========================================================================
    // Pointer and Keyboard Entry Points
    // =========================================================================

    /// Core dispatch for a selection gesture on `row`.
    ///
    /// - no modifiers: the clicked row replaces the selection
    /// - shift: selects the inclusive index range between the anchor and the
    ///   clicked row, replacing the previous selection
    /// - ctrl/meta: toggles the clicked row
    ///
    /// A `None` row, or a row no longer in the model, aborts before any
    /// mutation. Emits `selected_rows_did_change` once the row has been
    /// validated.
    pub fn handle_selection(
        &mut self,
        model: &mut dyn RowModel,
        row: Option<RowId>,
        modifiers: KeyboardModifiers,
    ) {
        let Some(row) = row else {
            return;
        };
        // Resolve the index before touching anything; the no-op contract
        // forbids clearing the selection for a row that turns out to be gone.
        let Some(row_index) = model.index_of(row) else {
            tracing::trace!(target: "trellis::selection", ?row, "gesture on row not in model");
            return;
        };

        if !modifiers.command() && !modifiers.shift {
            self.clear(model);
        }

        if modifiers.shift
            && let Some(anchor) = self.anchor_index
        {
            let (min_index, max_index) = (anchor.min(row_index), anchor.max(row_index));
            self.clear(model);
            let range: Vec<RowId> = (min_index..=max_index)
                .filter_map(|index| model.row_at(index))
                .collect();
            self.select_many(model, &range);
        }

        // A plain click, or the first click ever, re-anchors; a shift click
        // extends from the existing anchor and records the walk endpoint.
        if !modifiers.shift || self.anchor_index.is_none() {
            self.anchor_index = Some(row_index);
            self.shift_walk_index = None;
        } else {
            self.shift_walk_index = Some(row_index);
        }

        if modifiers.command() && self.selected_ids.contains(&row) {
            self.deselect(model, row);
            if self.selected_rows.is_empty() {
                self.anchor_index = None;
            }
        } else {
            self.select(model, row);
        }

        self.notify_selection_changed();
    }

    /// Moves the active selection edge one row up or down.
    ///
    /// The endpoint is the shift-walk index when a shift+arrow walk is in
    /// progress, otherwise the anchor. With shift held, stepping onto an
    /// already-selected row retracts the edge (deselects the endpoint row);
    /// stepping onto an unselected row extends the selection. Without shift
    /// the selection collapses to the stepped-onto row.
    ///
    /// No-ops without mutation or notification when no endpoint is set, at
    /// the first/last row, or when the endpoint is stale. Otherwise emits
    /// `selected_rows_did_change`.
    pub fn select_with_arrow(
        &mut self,
        model: &mut dyn RowModel,
        direction: ArrowDirection,
        modifiers: KeyboardModifiers,
    ) {
        let Some(end_point) = self.shift_walk_index.or(self.anchor_index) else {
            return;
        };

        let next_index = match direction {
            ArrowDirection::Up => {
                if end_point == 0 {
                    return;
                }
                end_point - 1
            }
            ArrowDirection::Down => {
                if end_point + 1 >= model.row_count() {
                    return;
                }
                end_point + 1
            }
        };

        let Some(next_row) = model.row_at(next_index) else {
            return;
        };

        if modifiers.shift {
            if self.selected_ids.contains(&next_row) {
                // Walking back over selected territory retracts the edge.
                if let Some(edge_row) = model.row_at(end_point) {
                    self.deselect(model, edge_row);
                }
            }
            self.select(model, next_row);
        } else {
            self.clear(model);
            self.select(model, next_row);
        }

        self.anchor_index = Some(next_index);
        self.shift_walk_index = None;

        self.notify_selection_changed();
    }

    /// Keyboard dispatch. Returns `true` when the event was consumed and the
    /// host must suppress the default action (e.g. scrolling on arrows).
    ///
    /// - ArrowUp / ArrowDown: [`select_with_arrow`](Self::select_with_arrow)
    /// - ctrl/meta + A: [`select_all`](Self::select_all)
    pub fn key_down(&mut self, model: &mut dyn RowModel, event: &KeyPressEvent) -> bool {
        match event.key {
            Key::ArrowUp => {
                self.select_with_arrow(model, ArrowDirection::Up, event.modifiers);
                true
            }
            Key::ArrowDown => {
                self.select_with_arrow(model, ArrowDirection::Down, event.modifiers);
                true
            }
            Key::A if event.modifiers.command() => {
                self.select_all(model);
                true
            }
            _ => false,
        }
    }

    /// Pointer press on `row` (host hit-test result).
    ///
    /// A press on a row that is not yet selected runs the selection gesture
    /// immediately, so drag-style interactions begin on the pressed row
    /// without waiting for the release, and arms a guard that suppresses the
    /// synthetic click paired with this press. A press on an
    /// already-selected row leaves handling to [`click`](Self::click).
    pub fn mouse_down(
        &mut self,
        model: &mut dyn RowModel,
        row: Option<RowId>,
        modifiers: KeyboardModifiers,
    ) {
        // A new press always disarms a leftover guard; a click that never
        // arrived must not suppress clicks forever.
        self.prevent_click = false;

        let Some(row) = row else {
            return;
        };
        if model.index_of(row).is_none() {
            return;
        }

        if !self.selected_ids.contains(&row) {
            self.prevent_click = true;
            self.handle_selection(model, Some(row), modifiers);
        }
    }

    /// Pointer click on `row` (host hit-test result).
    ///
    /// Consumed once by the guard armed in [`mouse_down`](Self::mouse_down).
    /// Otherwise the gesture runs only when the row is already selected —
    /// the press handled the fresh-row case.
    pub fn click(
        &mut self,
        model: &mut dyn RowModel,
        row: Option<RowId>,
        modifiers: KeyboardModifiers,
    ) {
        if std::mem::take(&mut self.prevent_click) {
            return;
        }

        let Some(row) = row else {
            return;
        };
        if self.selected_ids.contains(&row) {
            self.handle_selection(model, Some(row), modifiers);
        }
    }

    /// Context-menu (right-click) on `row`.
    ///
    /// A row outside the selection becomes the sole selection; a row inside
    /// it preserves the multi-selection. Emits `context_menu_requested` with
    /// the ordered selection in both cases.
    pub fn context_menu(&mut self, model: &mut dyn RowModel, row: Option<RowId>) {
        let Some(row) = row else {
            return;
        };
        if model.index_of(row).is_none() {
            return;
        }

        if !self.selected_ids.contains(&row) {
            self.clear(model);
            self.select(model, row);
        }

        self.context_menu_requested.emit(self.selected_rows.clone());
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn notify_selection_changed(&self) {
        tracing::trace!(
            target: "trellis::selection",
            selected = self.selected_rows.len(),
            "selection changed"
        );
        self.selected_rows_did_change.emit(self.selected_rows.clone());
    }
}
