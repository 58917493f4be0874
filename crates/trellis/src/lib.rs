//! # Trellis
//!
//! Row multi-selection behavior for grid and table widgets.
//!
//! Trellis is an extension point, not a widget: a pre-existing grid or table
//! component supplies row content, rendering, and raw event dispatch, and
//! attaches a [`model::SelectionController`] to get the full multi-selection
//! vocabulary — click, ctrl/meta-click toggle, shift-click ranges,
//! shift+arrow extension and retraction, select-all, and context-menu
//! selection.
//!
//! The host keeps ownership of its rows. The controller addresses them by
//! [`model::RowId`], reaches them through the [`model::RowModel`] boundary,
//! and toggles exactly one piece of per-row state: the boolean selected flag
//! behind [`model::Selectable`]. Selection changes are announced on
//! [`trellis_core::Signal`]s that observers connect to.
//!
//! # Example
//!
//! ```
//! use trellis::prelude::*;
//!
//! struct Entry {
//!     name: String,
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
//! let mut rows = RowListModel::from_rows(vec![
//!     Entry { name: "alpha".into(), selected: false },
//!     Entry { name: "beta".into(), selected: false },
//!     Entry { name: "gamma".into(), selected: false },
//! ]);
//!
//! let mut selection = SelectionController::new();
//!
//! // Click the first row, then shift-click the third.
//! let first = rows.row_at(0).unwrap();
//! let third = rows.row_at(2).unwrap();
//! selection.handle_selection(&mut rows, Some(first), KeyboardModifiers::NONE);
//! selection.handle_selection(&mut rows, Some(third), KeyboardModifiers::SHIFT);
//!
//! assert_eq!(selection.selected_count(), 3);
//! ```
//!
//! # Logging
//!
//! Trellis instruments state transitions with the `tracing` crate. Install a
//! subscriber (e.g. `tracing_subscriber::fmt::init()`) to see them; the
//! [`targets`] constants filter by subsystem.

pub mod event;
pub mod model;
pub mod prelude;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Selection controller state transitions.
    pub const SELECTION: &str = "trellis::selection";
    /// Signal emission (lives in `trellis-core`).
    pub const SIGNAL: &str = "trellis_core::signal";
}
