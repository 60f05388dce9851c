//! Spinner widget: a number display with up and down buttons.
//!
//! The widget owns its interaction state (focus, hover, button enablement)
//! and shares its value through a `spindle_core::SpinnerData`. Hosts feed it
//! `InputEvent`s, call `sync` once per frame and draw the `View` it returns.
//!
//! ```rust
//! use spindle_ui::*;
//!
//! let mut s = Spinner::new(0.0, 1.0, 0.25, 2, None);
//! s.handle_event(&InputEvent::Tap(SpinnerPart::UpButton));
//! assert_eq!(s.value_text(), "0.25");
//!
//! let view = s.view();
//! assert!(view.find_part(SpinnerPart::Display).is_some());
//! ```

pub mod base;
pub mod button;
pub mod input;
pub mod semantics;
pub mod spinner;
pub mod view;

pub use base::{Spinnable, SpinnerBase};
pub use button::{Direction, SpinnerButton};
pub use input::*;
pub use semantics::{Role, Semantics};
pub use spinner::{MAX_SPINNER_ID, NODES_PER_SPINNER, PAGE_STEPS, Spinner};
pub use view::{Icon, View, ViewId, ViewKind};

pub use spindle_core;
