#![forbid(unsafe_code)]

//! DOM attribute contract.
//!
//! Widgets are located by marker attributes rather than classes so that
//! theme styling can change freely. The mobile menu keeps the element ids
//! the storefront templates already ship.

/// Root of a discrete slide carousel.
pub const CAROUSEL: &str = "data-carousel";
/// One slide inside a carousel root.
pub const CAROUSEL_SLIDE: &str = "data-carousel-slide";
/// Previous-slide control.
pub const CAROUSEL_PREV: &str = "data-carousel-prev";
/// Next-slide control.
pub const CAROUSEL_NEXT: &str = "data-carousel-next";
/// Static pagination dot; order matches slide order.
pub const CAROUSEL_INDICATOR: &str = "data-carousel-indicator";

/// Root of a continuous (page-snap) scroll carousel.
pub const SCROLL_CAROUSEL: &str = "data-scroll-carousel";
/// Scroll container inside a scroll carousel root.
pub const SCROLL_TRACK: &str = "data-scroll-track";
/// Previous-page control.
pub const SCROLL_PREV: &str = "data-scroll-prev";
/// Next-page control.
pub const SCROLL_NEXT: &str = "data-scroll-next";
/// Container the generated page indicators are rendered into.
pub const SCROLL_PAGINATION: &str = "data-scroll-pagination";
/// Page index carried by each generated indicator.
pub const PAGE_INDEX: &str = "data-page";

/// Disclosure trigger; the value is the id of the panel it controls.
pub const SUBMENU_TOGGLE: &str = "data-submenu-toggle";
/// Rotating chevron inside a disclosure trigger.
pub const SUBMENU_ICON: &str = "data-submenu-icon";

/// Mobile navigation drawer.
pub const MOBILE_MENU_ID: &str = "mobile-menu";
/// Button that opens the mobile navigation drawer.
pub const MOBILE_MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
/// Button that closes the mobile navigation drawer.
pub const MOBILE_MENU_CLOSE_ID: &str = "mobile-menu-close";
/// Scrim behind the mobile navigation drawer.
pub const MOBILE_MENU_OVERLAY_ID: &str = "mobile-menu-overlay";

/// Filter drawer panel.
pub const FILTER_DRAWER: &str = "data-filter-drawer";
/// Scrim behind the filter drawer.
pub const FILTER_DRAWER_OVERLAY: &str = "data-filter-drawer-overlay";
/// Button that toggles the filter drawer on narrow viewports.
pub const FILTER_DRAWER_TOGGLE: &str = "data-filter-drawer-toggle";
/// Button that closes the filter drawer.
pub const FILTER_DRAWER_CLOSE: &str = "data-filter-drawer-close";
/// Media query that selects the wide layout; set on the drawer panel.
pub const BREAKPOINT: &str = "data-breakpoint";
/// Media query used when [`BREAKPOINT`] is absent.
pub const DEFAULT_BREAKPOINT: &str = "(min-width: 1024px)";

/// Optional JSON configuration on any widget root.
pub const CONFIG: &str = "data-config";

/// Attribute-presence selector for a marker.
#[must_use]
pub fn selector(marker: &str) -> String {
    format!("[{marker}]")
}
