#![forbid(unsafe_code)]

//! `vitrine-web` binds Vitrine controllers to a live document.
//!
//! Design goals:
//! - **Scan once**: every widget root is discovered by marker attribute at
//!   load and gets exactly one controller.
//! - **Absent means skipped**: a root that fails to assemble is logged at
//!   `debug` and left without listeners.
//! - **Thin boundary**: the DOM-independent pieces (config parsing and event
//!   translation) live in plain modules so they are testable natively; the
//!   `wasm-bindgen` surface is compiled only on `wasm32`.

pub mod config;
pub mod dom_event;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{DomHost, mount_all};

pub use config::{breakpoint_query, parse_config};
pub use dom_event::{
    breakpoint_event, is_passive, key_event, page_from_attribute, simple_event, touch_event,
    visibility_event,
};
