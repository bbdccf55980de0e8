#![cfg_attr(not(test), forbid(unsafe_code))]

//! Core: input vocabulary, host seam, and interaction primitives.
//!
//! # Role in Vitrine
//! `vitrine-core` is the layer every controller builds on. It owns the
//! normalized [`event::UiEvent`] type that host integrations translate DOM
//! signals into, the [`host::Surface`] / [`host::TimerHost`] traits through
//! which controllers mirror state back into the page, and the small pure
//! primitives the controllers share.
//!
//! # Primary responsibilities
//! - **UiEvent**: pointer, touch, focus, key, visibility, scroll, resize and
//!   breakpoint signals.
//! - **Host seam**: class/attribute mirroring, scroll measurement and
//!   host-owned timeouts keyed by [`timer::TimerToken`].
//! - **Geometry**: scroll-derived [`geometry::PageModel`], recomputed from
//!   measurements on every read.
//! - **Gesture**: [`gesture::SwipeTracker`] classifies touch gestures.
//! - **Timers**: [`timer::TimerSlot`] is the armed/idle scheduler owned by a
//!   controller; [`timer::TimerQueue`] is a deterministic host-side queue.
//!
//! # How it fits in the system
//! `vitrine-widgets` implements controllers against these traits only, so
//! they run unchanged under the browser binding in `vitrine-web` and under
//! [`recording::RecordingHost`] in tests.

pub mod error;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod markers;
pub mod timer;

#[cfg(feature = "serde")]
pub mod serde_ms;

#[cfg(any(test, feature = "test-helpers"))]
pub mod recording;

pub use error::MountError;
pub use event::{Key, KeyInput, Modifiers, Outcome, TouchPoint, UiEvent, Viewport, Visibility};
pub use geometry::{PageModel, ScrollMetrics};
pub use gesture::{SwipeConfig, SwipeOutcome, SwipeTracker};
pub use host::{Host, ScrollBehavior, Surface, TimerHost};
pub use timer::{TimerQueue, TimerSlot, TimerToken};
