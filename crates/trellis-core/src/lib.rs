//! Core systems for Trellis.
//!
//! This crate provides the foundation the Trellis selection module is built
//! on:
//!
//! - **Signal/Slot System**: Type-safe change notification, so selection
//!   controllers announce state transitions as explicit emission steps that
//!   observers opt into, rather than callbacks baked into mutation methods.
//!
//! Dispatch is synchronous: Trellis runs inside a host widget's event
//! dispatch, every operation completes on the calling thread, and there is
//! no event loop to defer slot invocations to.
//!
//! # Signal/Slot Example
//!
//! ```
//! use trellis_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
