//! Prelude module for Trellis.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```
//! use trellis::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use trellis_core::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Input Events
// ============================================================================

pub use crate::event::{Key, KeyPressEvent, KeyboardModifiers};

// ============================================================================
// Row Model and Selection
// ============================================================================

pub use crate::model::{
    ArrowDirection, RowId, RowListModel, RowModel, Selectable, SelectionController,
};
