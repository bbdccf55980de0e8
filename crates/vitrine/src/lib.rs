#![forbid(unsafe_code)]

//! Vitrine public facade crate.
//!
//! Re-exports the controller types and the host seam from the internal
//! crates, plus a prelude for assembling widgets by hand. Browser pages
//! normally only call `vitrine_web::mount_all` (re-exported as [`web`]).

// --- Core re-exports -------------------------------------------------------

pub use vitrine_core::{
    Host, Key, KeyInput, Modifiers, MountError, Outcome, PageModel, ScrollBehavior, ScrollMetrics,
    Surface, SwipeConfig, TimerHost, TimerToken, TouchPoint, UiEvent, Viewport, Visibility,
};

// --- Widget re-exports -----------------------------------------------------

pub use vitrine_widgets::{
    AutoplayState, Disclosure, Drawer, DrawerConfig, DrawerMode, DrawerParts, FilterDrawer,
    MobileMenu, NestedMenu, NestedMenuConfig, ScrollCarousel, ScrollCarouselConfig, ScrollParts,
    SlideCarousel, SlideCarouselConfig, SlideParts,
};

/// Standard result type for widget assembly.
pub type Result<T> = std::result::Result<T, MountError>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Drawer, FilterDrawer, Host, MobileMenu, MountError, NestedMenu, Outcome, Result,
        ScrollCarousel, SlideCarousel, Surface, UiEvent, Viewport,
    };

    pub use crate::{core, widgets};

    #[cfg(feature = "web")]
    pub use crate::web;
}

pub use vitrine_core as core;
pub use vitrine_widgets as widgets;

#[cfg(feature = "web")]
pub use vitrine_web as web;
