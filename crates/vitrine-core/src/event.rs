#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Host integrations translate DOM signals into [`UiEvent`] values and hand
//! them to a controller's `handle_event`. Controllers answer with an
//! [`Outcome`] telling the host whether the browser default should still run.
//!
//! # Design Notes
//!
//! - Touch coordinates are client-space CSS pixels.
//! - Clicks are not events here: they target a specific element, so each
//!   controller exposes a dedicated method for them.
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Pointer entered the widget root.
    PointerEnter,
    /// Pointer left the widget root.
    PointerLeave,
    /// Keyboard focus moved into the widget root.
    FocusIn,
    /// Keyboard focus moved out of the widget root.
    FocusOut,
    /// First touch point went down.
    TouchStart(TouchPoint),
    /// Primary touch point moved.
    TouchMove(TouchPoint),
    /// Touch sequence finished normally.
    TouchEnd,
    /// Touch sequence was interrupted by the browser.
    TouchCancel,
    /// A key was pressed.
    Key(KeyInput),
    /// Document visibility changed.
    Visibility(Visibility),
    /// The widget's scroll container scrolled.
    Scroll,
    /// The viewport was resized.
    Resize,
    /// The configured media query changed its match state.
    Breakpoint(Viewport),
}

/// A touch coordinate in client-space CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    /// Create a touch point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Document visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Map the DOM `document.hidden` flag.
    #[must_use]
    pub const fn from_hidden(hidden: bool) -> Self {
        if hidden { Self::Hidden } else { Self::Visible }
    }
}

/// Which side of the breakpoint the viewport is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Viewport {
    /// Media query does not match (mobile layout).
    #[default]
    Narrow,
    /// Media query matches (desktop layout).
    Wide,
}

impl Viewport {
    /// Map a `MediaQueryList.matches` value.
    #[must_use]
    pub const fn from_matches(matches: bool) -> Self {
        if matches { Self::Wide } else { Self::Narrow }
    }

    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Wide)
    }
}

/// A keyboard press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// Logical key.
    pub key: Key,
    /// Modifier keys held during the press.
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// Create a key press with no modifiers.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// True when no modifier is held.
    ///
    /// Arrow keys with Alt/Ctrl/Meta belong to the browser (history, tab
    /// switching), so widgets only react to bare presses.
    #[must_use]
    pub const fn is_bare(&self) -> bool {
        self.modifiers.is_empty()
    }
}

/// Keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// Any other key; widgets ignore it.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

bitflags! {
    /// Modifier keys that can be held during a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Meta/Command key.
        const META  = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

impl Modifiers {
    /// Build from the four DOM modifier flags.
    #[must_use]
    pub fn from_dom(shift: bool, alt: bool, ctrl: bool, meta: bool) -> Self {
        let mut mods = Self::NONE;
        mods.set(Self::SHIFT, shift);
        mods.set(Self::ALT, alt);
        mods.set(Self::CTRL, ctrl);
        mods.set(Self::META, meta);
        mods
    }
}

/// What a controller did with an input, and what the host should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The controller did not react; leave the event alone.
    Ignored,
    /// State changed; the browser default may still run.
    Handled,
    /// State changed; the host must call `preventDefault()` and
    /// `stopPropagation()` for this event.
    Consumed,
}

impl Outcome {
    /// Whether the controller reacted at all.
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// Whether the host must suppress default handling and bubbling.
    #[must_use]
    pub const fn suppresses_default(self) -> bool {
        matches!(self, Self::Consumed)
    }
}
