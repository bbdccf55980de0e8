#![forbid(unsafe_code)]

//! Interactive storefront controllers built on `vitrine-core`.
//!
//! Each controller is assembled once per matching page root, owns its own
//! state, and mirrors that state into the page through a
//! [`vitrine_core::Surface`] passed to every operation. Controllers never
//! call each other; [`MobileMenu`] composes a [`Drawer`] and a
//! [`NestedMenu`] it owns outright.
//!
//! Construction follows one pattern everywhere: `new(parts, config)`
//! validates and returns `Result<_, MountError>` without touching the page,
//! then `mount(host)` renders the initial state.

pub mod drawer;
pub mod mobile_menu;
pub mod nested_menu;
pub mod scroll_carousel;
pub mod slide_carousel;

pub use drawer::{Drawer, DrawerConfig, DrawerMode, DrawerParts, FilterDrawer};
pub use mobile_menu::MobileMenu;
pub use nested_menu::{Disclosure, NestedMenu, NestedMenuConfig};
pub use scroll_carousel::{ScrollCarousel, ScrollCarouselConfig, ScrollParts};
pub use slide_carousel::{AutoplayState, SlideCarousel, SlideCarouselConfig, SlideParts};
