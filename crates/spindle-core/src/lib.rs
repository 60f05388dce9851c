//! # Bounded values, bindings and formatting
//!
//! `spindle-core` holds everything a spinner widget needs that does not
//! depend on a UI toolkit:
//!
//! - `BoundedValue`: a number kept inside `[min, max]`, moved in `step`
//!   increments, gated by `initialized` and `enabled` flags.
//! - `SpinnerData`: a cloneable, thread-safe handle around a `BoundedValue`
//!   with a change callback and an optional two-way binding.
//! - `FloatBinding` / `SharedFloat`: externally owned floats whose change
//!   notifications run on a background notifier thread.
//! - `NumberFormat`: integer or fixed-precision display and entry parsing.
//!
//! ## Bounds
//!
//! Bounds are validated when the value is built and whenever they change.
//! Invalid bounds never panic: the value stays uninitialized, every mutation
//! is ignored, and `validate` explains what is wrong.
//!
//! ```rust
//! use spindle_core::*;
//!
//! let mut v = BoundedValue::new(1.0, 10.0, 2.0, 0);
//! v.set_value(0.0);
//! assert_eq!(v.value(), 1.0);
//! v.set_value(11.0);
//! assert_eq!(v.value(), 10.0);
//!
//! let bad = BoundedValue::new(1.0, 2.0, 3.0, 0);
//! assert_eq!(bad.validate(), Err(BoundsError::StepTooLarge));
//! ```
//!
//! ## Binding
//!
//! ```rust
//! use std::sync::Arc;
//! use spindle_core::*;
//!
//! let source = SharedFloat::new(7.0);
//! let data = SpinnerData::with_binding(1.0, 5.0, 1.0, 0, Arc::new(source.clone()));
//! flush_notifications().unwrap();
//! assert_eq!(data.value(), 5.0);
//! assert_eq!(source.get(), Ok(5.0));
//! ```

pub mod binding;
pub mod bounded;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod tests;

pub use binding::*;
pub use bounded::*;
pub use config::*;
pub use data::*;
pub use error::*;
pub use format::*;
