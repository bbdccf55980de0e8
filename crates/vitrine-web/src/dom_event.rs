#![forbid(unsafe_code)]

//! Translation from raw DOM event data to [`UiEvent`].
//!
//! Kept free of `web-sys` types so the mapping is testable natively; the
//! wasm listeners pull the primitive fields off the event and call these.

use vitrine_core::{Key, KeyInput, Modifiers, TouchPoint, UiEvent, Viewport, Visibility};

/// Map an event `type` that carries no payload the widgets need.
///
/// Returns `None` for types that need payload (`keydown`, `touch*` with
/// coordinates) or that no widget consumes.
#[must_use]
pub fn simple_event(event_type: &str) -> Option<UiEvent> {
    Some(match event_type {
        "mouseenter" | "pointerenter" => UiEvent::PointerEnter,
        "mouseleave" | "pointerleave" => UiEvent::PointerLeave,
        "focusin" => UiEvent::FocusIn,
        "focusout" => UiEvent::FocusOut,
        "touchend" => UiEvent::TouchEnd,
        "touchcancel" => UiEvent::TouchCancel,
        "scroll" => UiEvent::Scroll,
        "resize" => UiEvent::Resize,
        _ => return None,
    })
}

/// Build a touch event from the first touch point's client coordinates.
#[must_use]
pub fn touch_event(event_type: &str, x: f64, y: f64) -> Option<UiEvent> {
    let at = TouchPoint::new(x, y);
    match event_type {
        "touchstart" => Some(UiEvent::TouchStart(at)),
        "touchmove" => Some(UiEvent::TouchMove(at)),
        _ => simple_event(event_type),
    }
}

/// Build a key event from `KeyboardEvent.key` and its modifier flags.
#[must_use]
pub fn key_event(key: &str, shift: bool, alt: bool, ctrl: bool, meta: bool) -> UiEvent {
    UiEvent::Key(
        KeyInput::new(Key::from_dom_key(key)).with_modifiers(Modifiers::from_dom(
            shift, alt, ctrl, meta,
        )),
    )
}

/// `visibilitychange`, from `document.hidden`.
#[must_use]
pub fn visibility_event(hidden: bool) -> UiEvent {
    UiEvent::Visibility(Visibility::from_hidden(hidden))
}

/// Media-query `change`, from `MediaQueryList.matches`.
#[must_use]
pub fn breakpoint_event(matches: bool) -> UiEvent {
    UiEvent::Breakpoint(Viewport::from_matches(matches))
}

/// Whether a listener for `event_type` should be registered passive.
///
/// Touch sampling and scroll tracking never cancel the default, so the
/// browser may start scrolling without waiting on the handler.
#[must_use]
pub fn is_passive(event_type: &str) -> bool {
    matches!(event_type, "touchstart" | "touchmove" | "scroll")
}

/// Parse a `data-page` attribute value.
#[must_use]
pub fn page_from_attribute(value: Option<&str>) -> Option<usize> {
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_types_map() {
        assert_eq!(simple_event("mouseenter"), Some(UiEvent::PointerEnter));
        assert_eq!(simple_event("pointerleave"), Some(UiEvent::PointerLeave));
        assert_eq!(simple_event("focusout"), Some(UiEvent::FocusOut));
        assert_eq!(simple_event("resize"), Some(UiEvent::Resize));
        assert_eq!(simple_event("click"), None);
        assert_eq!(simple_event("keydown"), None);
    }

    #[test]
    fn touch_carries_coordinates() {
        assert_eq!(
            touch_event("touchstart", 12.0, 40.0),
            Some(UiEvent::TouchStart(TouchPoint::new(12.0, 40.0)))
        );
        assert_eq!(touch_event("touchend", 0.0, 0.0), Some(UiEvent::TouchEnd));
        assert_eq!(touch_event("wheel", 0.0, 0.0), None);
    }

    #[test]
    fn keys_keep_modifiers() {
        let UiEvent::Key(bare) = key_event("ArrowLeft", false, false, false, false) else {
            panic!("expected key event");
        };
        assert_eq!(bare.key, Key::ArrowLeft);
        assert!(bare.is_bare());

        let UiEvent::Key(chord) = key_event("ArrowRight", false, true, false, false) else {
            panic!("expected key event");
        };
        assert_eq!(chord.modifiers, Modifiers::ALT);
        assert!(!chord.is_bare());
    }

    #[test]
    fn environment_signals() {
        assert_eq!(
            visibility_event(true),
            UiEvent::Visibility(Visibility::Hidden)
        );
        assert_eq!(breakpoint_event(true), UiEvent::Breakpoint(Viewport::Wide));
        assert_eq!(breakpoint_event(false), UiEvent::Breakpoint(Viewport::Narrow));
    }

    #[test]
    fn sampling_listeners_are_passive() {
        assert!(is_passive("touchstart"));
        assert!(is_passive("touchmove"));
        assert!(is_passive("scroll"));
        // These may come back Consumed and must stay cancelable.
        assert!(!is_passive("touchend"));
        assert!(!is_passive("keydown"));
        assert!(!is_passive("click"));
    }

    #[test]
    fn page_attribute_parses() {
        assert_eq!(page_from_attribute(Some("3")), Some(3));
        assert_eq!(page_from_attribute(Some(" 0 ")), Some(0));
        assert_eq!(page_from_attribute(Some("-1")), None);
        assert_eq!(page_from_attribute(Some("next")), None);
        assert_eq!(page_from_attribute(None), None);
    }
}
