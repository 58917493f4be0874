//! Row model and selection behavior for Trellis.
//!
//! This module provides the selection half of a grid widget's Model/View
//! split: the host owns and displays the rows, Trellis owns which of them
//! are selected. The pieces:
//!
//! - [`RowId`]: stable identity of a host-owned row
//! - [`Selectable`]: the per-row selected-flag capability
//! - [`RowModel`]: the ordered row sequence the host exposes
//! - [`RowListModel`]: a ready-made flat `RowModel`
//! - [`SelectionController`]: the selection state machine
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐  pointer/key events   ┌─────────────────────┐
//! │  Host grid   │──────────────────────>│ SelectionController │
//! │ (rows, hit-  │                       │ (membership, anchor,│
//! │  testing)    │<──────────────────────│  click guard)       │
//! └──────────────┘  selected flags via   └─────────────────────┘
//!        │          RowModel/Selectable            │
//!        └──────────── signals ←───────────────────┘
//! ```
//!
//! The host relays input it has already hit-tested (`Option<RowId>`); the
//! controller mutates selection state through the [`RowModel`] boundary and
//! announces the outcome on its signals.

mod controller;
mod row;

pub use controller::{ArrowDirection, SelectionController};
pub use row::{RowId, RowListModel, RowModel, Selectable};
