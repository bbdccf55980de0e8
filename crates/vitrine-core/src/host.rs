#![forbid(unsafe_code)]

//! Host seam: the boundary between controllers and the page.
//!
//! Controllers never touch the DOM. They reference elements through the
//! host's [`Surface::Element`] handle type and push every visual change
//! through [`Surface`]. Timeouts go through [`TimerHost`], keyed by a
//! [`TimerToken`] the controller allocated.
//!
//! The browser binding in `vitrine-web` implements these traits with
//! `web_sys::Element` handles and `setTimeout`; tests use
//! [`crate::recording::RecordingHost`].

use core::fmt;
use core::time::Duration;

use crate::geometry::ScrollMetrics;
use crate::timer::TimerToken;

/// How a programmatic scroll should animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Element mutation and measurement surface.
///
/// Implementations must apply every call synchronously, so that the page
/// is consistent with controller state when an event handler returns.
pub trait Surface {
    /// Handle to one element. Controllers hold these by value but never
    /// own the underlying node.
    type Element: Clone + PartialEq + fmt::Debug;

    /// Add (`enabled = true`) or remove one class.
    fn set_class(&mut self, element: &Self::Element, class: &str, enabled: bool);

    /// Set an attribute value.
    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    /// Show or hide an element (the `hidden` attribute).
    fn set_hidden(&mut self, element: &Self::Element, hidden: bool);

    /// Enable or disable a control (`disabled` plus `aria-disabled`).
    fn set_disabled(&mut self, element: &Self::Element, disabled: bool);

    /// Measure a scroll container.
    fn scroll_metrics(&self, element: &Self::Element) -> ScrollMetrics;

    /// Scroll a container horizontally to `left`.
    fn scroll_to(&mut self, element: &Self::Element, left: f64, behavior: ScrollBehavior);

    /// Remove every child of `container`, along with anything bound to them.
    fn clear_children(&mut self, container: &Self::Element);

    /// Create one pagination indicator for `page` and append it to
    /// `container`. Returns `None` if the host could not create it.
    fn append_indicator(&mut self, container: &Self::Element, page: usize)
    -> Option<Self::Element>;

    /// Apply a whitespace-separated class list.
    fn set_classes(&mut self, element: &Self::Element, classes: &str, enabled: bool) {
        for class in classes.split_whitespace() {
            self.set_class(element, class, enabled);
        }
    }

    /// Set an ARIA boolean attribute (`"true"` / `"false"`).
    fn set_aria_flag(&mut self, element: &Self::Element, name: &str, value: bool) {
        self.set_attribute(element, name, if value { "true" } else { "false" });
    }
}

/// Host-owned one-shot timeouts.
///
/// The host calls back into the owning controller's `on_timer` with the
/// token when a timeout elapses. Clearing an unknown or already-fired
/// token must be a no-op.
pub trait TimerHost {
    /// Schedule `token` to fire after `delay`.
    fn set_timeout(&mut self, token: TimerToken, delay: Duration);

    /// Cancel a pending timeout.
    fn clear_timeout(&mut self, token: TimerToken);
}

/// Everything a timer-driven controller needs from its host.
pub trait Host: Surface + TimerHost {}

impl<T: Surface + TimerHost> Host for T {}
