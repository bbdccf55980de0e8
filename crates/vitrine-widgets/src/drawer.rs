#![forbid(unsafe_code)]

//! Slide-out drawer and its breakpoint-synchronized variant.
//!
//! [`Drawer`] is the open/close primitive: a translated panel, an optional
//! scrim overlay, and an optional toggle whose `aria-expanded` follows the
//! open flag. Every render writes the complete visual state, so calling it
//! twice is harmless.
//!
//! [`FilterDrawer`] derives its state from the viewport. Wide viewports show
//! the panel inline (open, no scrim); narrow viewports make it a closed
//! modal. The derivation is re-applied in full on every breakpoint change
//! rather than patched, so repeated resizes cannot drift.

use vitrine_core::{Key, MountError, Outcome, Surface, UiEvent, Viewport};

/// Tunables for a [`Drawer`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DrawerConfig {
    /// Classes present on the panel while closed.
    pub closed_class: String,
    /// Classes present on the overlay while it is hidden.
    pub overlay_hidden_class: String,
    /// Classes present on the overlay while it is shown.
    pub overlay_visible_class: String,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            closed_class: "-translate-x-full".to_owned(),
            overlay_hidden_class: "opacity-0 pointer-events-none".to_owned(),
            overlay_visible_class: "opacity-100".to_owned(),
        }
    }
}

/// How an open drawer relates to the rest of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawerMode {
    /// Overlays the page; the scrim is shown while open.
    #[default]
    Modal,
    /// Part of the layout; the scrim is never shown.
    Inline,
}

/// Elements a drawer is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerParts<E> {
    pub panel: E,
    pub overlay: Option<E>,
    /// Opens or closes the drawer; mirrors `aria-expanded`.
    pub toggle: Option<E>,
    /// Closes the drawer.
    pub close: Option<E>,
}

impl<E> DrawerParts<E> {
    #[must_use]
    pub fn new(panel: E) -> Self {
        Self {
            panel,
            overlay: None,
            toggle: None,
            close: None,
        }
    }

    #[must_use]
    pub fn with_overlay(mut self, overlay: E) -> Self {
        self.overlay = Some(overlay);
        self
    }

    #[must_use]
    pub fn with_toggle(mut self, toggle: E) -> Self {
        self.toggle = Some(toggle);
        self
    }

    #[must_use]
    pub fn with_close(mut self, close: E) -> Self {
        self.close = Some(close);
        self
    }
}

/// Open/close primitive.
#[derive(Debug, Clone)]
pub struct Drawer<E> {
    parts: DrawerParts<E>,
    config: DrawerConfig,
    open: bool,
    mode: DrawerMode,
}

impl<E: Clone + PartialEq + core::fmt::Debug> Drawer<E> {
    pub fn new(parts: DrawerParts<E>, config: DrawerConfig) -> Result<Self, MountError> {
        if config.closed_class.split_whitespace().next().is_none() {
            return Err(MountError::InvalidConfig {
                field: "closed_class",
                reason: "a closed drawer needs at least one class",
            });
        }
        Ok(Self {
            parts,
            config,
            open: false,
            mode: DrawerMode::Modal,
        })
    }

    /// Render the closed state.
    pub fn mount<S: Surface<Element = E>>(&mut self, host: &mut S) {
        self.open = false;
        self.render(host);
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> DrawerMode {
        self.mode
    }

    #[must_use]
    pub fn parts(&self) -> &DrawerParts<E> {
        &self.parts
    }

    /// Open. Returns `false` if already open.
    pub fn open<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        self.set_open(host, true)
    }

    /// Close. Returns `false` if already closed.
    pub fn close<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        self.set_open(host, false)
    }

    /// Flip the open flag. Always changes state.
    pub fn toggle<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        let open = !self.open;
        self.set_open(host, open)
    }

    /// Set open flag and mode together and render unconditionally.
    pub fn sync<S: Surface<Element = E>>(&mut self, host: &mut S, open: bool, mode: DrawerMode) {
        self.open = open;
        self.mode = mode;
        self.render(host);
    }

    /// Route a click on one of the drawer's own controls.
    pub fn handle_click<S: Surface<Element = E>>(&mut self, host: &mut S, origin: &E) -> Outcome {
        if self.parts.toggle.as_ref() == Some(origin) {
            self.toggle(host);
            Outcome::Handled
        } else if self.parts.close.as_ref() == Some(origin)
            || self.parts.overlay.as_ref() == Some(origin)
        {
            self.close(host);
            Outcome::Handled
        } else {
            Outcome::Ignored
        }
    }

    fn set_open<S: Surface<Element = E>>(&mut self, host: &mut S, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        self.render(host);
        true
    }

    fn render<S: Surface<Element = E>>(&self, host: &mut S) {
        let open = self.open;
        host.set_classes(&self.parts.panel, &self.config.closed_class, !open);
        host.set_aria_flag(&self.parts.panel, "aria-hidden", !open);
        if let Some(overlay) = &self.parts.overlay {
            let scrim = open && self.mode == DrawerMode::Modal;
            host.set_classes(overlay, &self.config.overlay_hidden_class, !scrim);
            host.set_classes(overlay, &self.config.overlay_visible_class, scrim);
        }
        if let Some(toggle) = &self.parts.toggle {
            host.set_aria_flag(toggle, "aria-expanded", open);
        }
    }
}

/// Drawer that is always open inline on wide viewports and a closed modal
/// on narrow ones.
#[derive(Debug, Clone)]
pub struct FilterDrawer<E> {
    drawer: Drawer<E>,
    viewport: Viewport,
}

impl<E: Clone + PartialEq + core::fmt::Debug> FilterDrawer<E> {
    pub fn new(parts: DrawerParts<E>, config: DrawerConfig) -> Result<Self, MountError> {
        Ok(Self {
            drawer: Drawer::new(parts, config)?,
            viewport: Viewport::Narrow,
        })
    }

    /// Apply the state for the initial viewport.
    pub fn mount<S: Surface<Element = E>>(&mut self, host: &mut S, viewport: Viewport) {
        self.apply_viewport(host, viewport);
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn drawer(&self) -> &Drawer<E> {
        &self.drawer
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.drawer.is_open()
    }

    /// Derive and render the full drawer state for `viewport`, ignoring
    /// whatever state the drawer was in before.
    pub fn apply_viewport<S: Surface<Element = E>>(&mut self, host: &mut S, viewport: Viewport) {
        self.viewport = viewport;
        let (open, mode) = if viewport.is_wide() {
            (true, DrawerMode::Inline)
        } else {
            (false, DrawerMode::Modal)
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "drawer.sync",
            wide = viewport.is_wide(),
            was_open = self.drawer.is_open(),
            open
        );
        self.drawer.sync(host, open, mode);
    }

    pub fn open<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        self.drawer.open(host)
    }

    pub fn close<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        self.drawer.close(host)
    }

    pub fn toggle<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        self.drawer.toggle(host)
    }

    /// Route one input event. Escape closes regardless of viewport.
    pub fn handle_event<S: Surface<Element = E>>(
        &mut self,
        host: &mut S,
        event: &UiEvent,
    ) -> Outcome {
        match *event {
            UiEvent::Key(input) if input.key == Key::Escape => {
                if self.drawer.close(host) {
                    Outcome::Handled
                } else {
                    Outcome::Ignored
                }
            }
            UiEvent::Breakpoint(viewport) => {
                self.apply_viewport(host, viewport);
                Outcome::Handled
            }
            _ => Outcome::Ignored,
        }
    }

    /// Route a click on one of the drawer's controls.
    pub fn handle_click<S: Surface<Element = E>>(&mut self, host: &mut S, origin: &E) -> Outcome {
        self.drawer.handle_click(host, origin)
    }
}
