#![forbid(unsafe_code)]

//! `wasm-bindgen` surface: DOM host, widget discovery, and listener wiring.
//!
//! Each mounted widget lives in an `Rc<RefCell<Mounted<_>>>` shared by its
//! listeners. Listeners are registered for the lifetime of the page and
//! leaked with `Closure::forget`; generated pagination dots are served by a
//! single delegated listener on their container, so rebuilding them never
//! leaks a closure. Timeout callbacks are owned by the [`DomHost`] and
//! dropped when the timeout fires or is cleared. Only compiled on `wasm32`
//! targets.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, KeyboardEvent, NodeList,
    ScrollToOptions, TouchEvent, Window,
};

use vitrine_core::markers::{
    BREAKPOINT, CAROUSEL, CAROUSEL_INDICATOR, CAROUSEL_NEXT, CAROUSEL_PREV, CAROUSEL_SLIDE, CONFIG,
    FILTER_DRAWER, FILTER_DRAWER_CLOSE, FILTER_DRAWER_OVERLAY, FILTER_DRAWER_TOGGLE,
    MOBILE_MENU_CLOSE_ID, MOBILE_MENU_ID, MOBILE_MENU_OVERLAY_ID, MOBILE_MENU_TOGGLE_ID, PAGE_INDEX,
    SCROLL_CAROUSEL, SCROLL_NEXT, SCROLL_PAGINATION, SCROLL_PREV, SCROLL_TRACK, SUBMENU_ICON,
    SUBMENU_TOGGLE, selector,
};
use vitrine_core::{
    MountError, Outcome, ScrollBehavior, ScrollMetrics, Surface, TimerHost, TimerToken, UiEvent,
    Viewport,
};
use vitrine_widgets::{
    Disclosure, Drawer, DrawerConfig, DrawerParts, FilterDrawer, MobileMenu, NestedMenu,
    NestedMenuConfig, ScrollCarousel, ScrollCarouselConfig, ScrollParts, SlideCarousel,
    SlideCarouselConfig, SlideParts,
};

use crate::config::{breakpoint_query, parse_config};
use crate::dom_event::{
    breakpoint_event, is_passive, key_event, page_from_attribute, simple_event, touch_event,
    visibility_event,
};

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "vitrine panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("vitrine panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

// ---------------------------------------------------------------------------
// Host
// ---------------------------------------------------------------------------

struct PendingTimeout {
    token: TimerToken,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

/// [`Surface`] and [`TimerHost`] over live DOM elements and `setTimeout`.
pub struct DomHost {
    window: Window,
    document: Document,
    timeouts: Vec<PendingTimeout>,
    fire: Option<Rc<dyn Fn(TimerToken)>>,
}

impl DomHost {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            timeouts: Vec::new(),
            fire: None,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Install the callback that delivers fired tokens to the owner.
    fn on_fire(&mut self, fire: Rc<dyn Fn(TimerToken)>) {
        self.fire = Some(fire);
    }

    /// Drop bookkeeping and the callback for a timeout that has already run.
    fn forget_timeout(&mut self, token: TimerToken) {
        self.timeouts.retain(|pending| pending.token != token);
    }

    /// Timeouts scheduled and not yet fired or cleared.
    #[must_use]
    pub fn pending_timeouts(&self) -> usize {
        self.timeouts.len()
    }
}

impl Drop for DomHost {
    fn drop(&mut self) {
        for pending in self.timeouts.drain(..) {
            self.window.clear_timeout_with_handle(pending.handle);
        }
    }
}

impl Surface for DomHost {
    type Element = Element;

    fn set_class(&mut self, element: &Element, class: &str, enabled: bool) {
        let list = element.class_list();
        let _ = if enabled {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
    }

    fn set_attribute(&mut self, element: &Element, name: &str, value: &str) {
        let _ = element.set_attribute(name, value);
    }

    fn set_hidden(&mut self, element: &Element, hidden: bool) {
        let _ = if hidden {
            element.set_attribute("hidden", "")
        } else {
            element.remove_attribute("hidden")
        };
    }

    fn set_disabled(&mut self, element: &Element, disabled: bool) {
        let _ = if disabled {
            element.set_attribute("disabled", "")
        } else {
            element.remove_attribute("disabled")
        };
        self.set_aria_flag(element, "aria-disabled", disabled);
    }

    fn scroll_metrics(&self, element: &Element) -> ScrollMetrics {
        ScrollMetrics::new(
            f64::from(element.scroll_left()),
            f64::from(element.client_width()),
            f64::from(element.scroll_width()),
        )
    }

    fn scroll_to(&mut self, element: &Element, left: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        element.scroll_to_with_scroll_to_options(&options);
    }

    fn clear_children(&mut self, container: &Element) {
        while let Some(child) = container.first_child() {
            if container.remove_child(&child).is_err() {
                break;
            }
        }
    }

    fn append_indicator(&mut self, container: &Element, page: usize) -> Option<Element> {
        let indicator = self.document.create_element("button").ok()?;
        let _ = indicator.set_attribute("type", "button");
        let _ = indicator.set_attribute(PAGE_INDEX, &page.to_string());
        container.append_child(&indicator).ok()?;
        Some(indicator)
    }
}

impl TimerHost for DomHost {
    fn set_timeout(&mut self, token: TimerToken, delay: Duration) {
        let Some(fire) = self.fire.clone() else {
            return;
        };
        let callback = Closure::<dyn FnMut()>::new(move || fire(token));
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => self.timeouts.push(PendingTimeout {
                token,
                handle,
                _callback: callback,
            }),
            Err(_) => tracing::warn!(message = "timer.schedule_failed", token = token.get()),
        }
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        let Some(index) = self.timeouts.iter().position(|p| p.token == token) else {
            return;
        };
        let pending = self.timeouts.swap_remove(index);
        self.window.clear_timeout_with_handle(pending.handle);
    }
}

// ---------------------------------------------------------------------------
// Wiring helpers
// ---------------------------------------------------------------------------

struct Mounted<C> {
    controller: C,
    host: DomHost,
}

type Shared<C> = Rc<RefCell<Mounted<C>>>;

fn share<C>(controller: C, window: &Window, document: &Document) -> Shared<C> {
    Rc::new(RefCell::new(Mounted {
        controller,
        host: DomHost::new(window.clone(), document.clone()),
    }))
}

/// Run `f` against the mounted widget, skipping re-entrant dispatch.
fn with_mounted<C, R>(mount: &Shared<C>, f: impl FnOnce(&mut C, &mut DomHost) -> R) -> Option<R> {
    let mut guard = mount.try_borrow_mut().ok()?;
    let Mounted { controller, host } = &mut *guard;
    Some(f(controller, host))
}

/// Attach a page-lifetime listener that forwards to the mounted widget and
/// applies the returned [`Outcome`]. Sampling events are registered passive
/// and never suppress the default.
fn listen<C: 'static>(
    target: &EventTarget,
    event_type: &str,
    mount: &Shared<C>,
    mut handler: impl FnMut(&mut C, &mut DomHost, &Event) -> Outcome + 'static,
) {
    let passive = is_passive(event_type);
    let mount = Rc::clone(mount);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let outcome = with_mounted(&mount, |controller, host| {
            handler(controller, host, &event)
        });
        if !passive && outcome.is_some_and(Outcome::suppresses_default) {
            event.prevent_default();
            event.stop_propagation();
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    if target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .is_ok()
    {
        closure.forget();
    }
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn first(found: Result<Option<Element>, JsValue>) -> Option<Element> {
    found.ok().flatten()
}

/// Nearest ancestor-or-self of the event target matching `selector`.
fn closest(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok().flatten()
}

fn keyboard(event: &Event) -> Option<UiEvent> {
    let key = event.dyn_ref::<KeyboardEvent>()?;
    Some(key_event(
        &key.key(),
        key.shift_key(),
        key.alt_key(),
        key.ctrl_key(),
        key.meta_key(),
    ))
}

fn first_touch(event: &Event) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

fn report(widget: &'static str, result: Result<(), MountError>) -> usize {
    match result {
        Ok(()) => 1,
        Err(err) => {
            tracing::debug!(message = "mount.skipped", widget, error = %err);
            0
        }
    }
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

fn mount_slide_carousel(
    window: &Window,
    document: &Document,
    root: &Element,
) -> Result<(), MountError> {
    let slides = elements(root.query_selector_all(&selector(CAROUSEL_SLIDE)));
    let indicators = elements(root.query_selector_all(&selector(CAROUSEL_INDICATOR)));
    let prev = first(root.query_selector(&selector(CAROUSEL_PREV)));
    let next = first(root.query_selector(&selector(CAROUSEL_NEXT)));
    let config: SlideCarouselConfig = parse_config(root.get_attribute(CONFIG).as_deref());
    let parts = SlideParts::new(slides)
        .with_indicators(indicators.clone())
        .with_controls(prev.clone(), next.clone());
    let mount = share(SlideCarousel::new(parts, config)?, window, document);

    let weak = Rc::downgrade(&mount);
    let fire: Rc<dyn Fn(TimerToken)> = Rc::new(move |token| {
        let Some(mount) = weak.upgrade() else {
            return;
        };
        with_mounted(&mount, |carousel: &mut SlideCarousel<Element>, host| {
            host.forget_timeout(token);
            carousel.on_timer(host, token);
        });
    });
    let disabled = with_mounted(&mount, |carousel, host| {
        host.on_fire(fire);
        carousel.mount(host);
        carousel.is_disabled()
    })
    .unwrap_or(true);
    if disabled {
        return Ok(());
    }

    for event_type in [
        "mouseenter",
        "mouseleave",
        "focusin",
        "focusout",
        "touchend",
        "touchcancel",
    ] {
        let Some(ui) = simple_event(event_type) else {
            continue;
        };
        listen(root, event_type, &mount, move |carousel, host, _| {
            carousel.handle_event(host, &ui)
        });
    }
    for event_type in ["touchstart", "touchmove"] {
        listen(root, event_type, &mount, move |carousel, host, event| {
            match first_touch(event).and_then(|(x, y)| touch_event(event_type, x, y)) {
                Some(ui) => carousel.handle_event(host, &ui),
                None => Outcome::Ignored,
            }
        });
    }
    listen(root, "keydown", &mount, |carousel, host, event| {
        match keyboard(event) {
            Some(ui) => carousel.handle_event(host, &ui),
            None => Outcome::Ignored,
        }
    });
    if let Some(prev) = &prev {
        listen(prev, "click", &mount, |carousel, host, _| {
            carousel.previous(host);
            Outcome::Handled
        });
    }
    if let Some(next) = &next {
        listen(next, "click", &mount, |carousel, host, _| {
            carousel.next(host);
            Outcome::Handled
        });
    }
    for (index, indicator) in indicators.iter().enumerate() {
        listen(indicator, "click", &mount, move |carousel, host, _| {
            carousel.select_indicator(host, index);
            Outcome::Handled
        });
    }
    listen(document, "visibilitychange", &mount, |carousel, host, _| {
        let ui = visibility_event(host.document().hidden());
        carousel.handle_event(host, &ui)
    });
    Ok(())
}

fn mount_scroll_carousel(
    window: &Window,
    document: &Document,
    root: &Element,
) -> Result<(), MountError> {
    let track = first(root.query_selector(&selector(SCROLL_TRACK))).ok_or(
        MountError::MissingElement {
            role: "scroll track",
        },
    )?;
    let prev = first(root.query_selector(&selector(SCROLL_PREV)));
    let next = first(root.query_selector(&selector(SCROLL_NEXT)));
    let pagination = first(root.query_selector(&selector(SCROLL_PAGINATION)));
    let config: ScrollCarouselConfig = parse_config(root.get_attribute(CONFIG).as_deref());

    let mut parts = ScrollParts::new(track.clone()).with_controls(prev.clone(), next.clone());
    if let Some(pagination) = &pagination {
        parts = parts.with_pagination(pagination.clone());
    }
    let mount = share(ScrollCarousel::new(parts, config)?, window, document);
    with_mounted(&mount, |carousel, host| carousel.mount(host));

    listen(&track, "scroll", &mount, |carousel, host, _| {
        carousel.handle_event(host, &UiEvent::Scroll)
    });
    listen(window, "resize", &mount, |carousel, host, _| {
        carousel.handle_event(host, &UiEvent::Resize)
    });
    listen(root, "keydown", &mount, |carousel, host, event| {
        match keyboard(event) {
            Some(ui) => carousel.handle_event(host, &ui),
            None => Outcome::Ignored,
        }
    });
    if let Some(prev) = &prev {
        listen(prev, "click", &mount, |carousel, host, _| {
            carousel.previous_page(host);
            Outcome::Handled
        });
    }
    if let Some(next) = &next {
        listen(next, "click", &mount, |carousel, host, _| {
            carousel.next_page(host);
            Outcome::Handled
        });
    }
    if let Some(pagination) = &pagination {
        let page_selector = selector(PAGE_INDEX);
        listen(pagination, "click", &mount, move |carousel, host, event| {
            let page = closest(event, &page_selector)
                .and_then(|dot| page_from_attribute(dot.get_attribute(PAGE_INDEX).as_deref()));
            match page {
                Some(page) if carousel.select_indicator(host, page) => Outcome::Handled,
                _ => Outcome::Ignored,
            }
        });
    }
    Ok(())
}

fn disclosures(document: &Document, panel: &Element) -> Vec<Disclosure<Element>> {
    elements(panel.query_selector_all(&selector(SUBMENU_TOGGLE)))
        .into_iter()
        .filter_map(|trigger| {
            let target = trigger.get_attribute(SUBMENU_TOGGLE)?;
            let submenu = document.get_element_by_id(target.trim())?;
            let icon = first(trigger.query_selector(&selector(SUBMENU_ICON)));
            let disclosure = Disclosure::new(trigger, submenu);
            Some(match icon {
                Some(icon) => disclosure.with_icon(icon),
                None => disclosure,
            })
        })
        .collect()
}

fn mount_mobile_menu(window: &Window, document: &Document) -> Result<(), MountError> {
    let panel = document
        .get_element_by_id(MOBILE_MENU_ID)
        .ok_or(MountError::MissingElement {
            role: "mobile menu",
        })?;
    let toggle = document
        .get_element_by_id(MOBILE_MENU_TOGGLE_ID)
        .ok_or(MountError::MissingElement {
            role: "mobile menu toggle",
        })?;
    let close = document.get_element_by_id(MOBILE_MENU_CLOSE_ID);
    let overlay = document.get_element_by_id(MOBILE_MENU_OVERLAY_ID);

    let mut parts = DrawerParts::new(panel.clone()).with_toggle(toggle.clone());
    if let Some(close) = &close {
        parts = parts.with_close(close.clone());
    }
    if let Some(overlay) = &overlay {
        parts = parts.with_overlay(overlay.clone());
    }
    let config: DrawerConfig = parse_config(panel.get_attribute(CONFIG).as_deref());
    let drawer = Drawer::new(parts, config)?;
    let submenus = match NestedMenu::new(disclosures(document, &panel), NestedMenuConfig::default())
    {
        Ok(menu) => Some(menu),
        Err(err) => {
            tracing::debug!(message = "mount.skipped", widget = "submenu", error = %err);
            None
        }
    };
    let has_submenus = submenus.is_some();
    let mount = share(MobileMenu::new(drawer, submenus), window, document);
    with_mounted(&mount, |menu, host| menu.mount(host));

    for control in [Some(toggle), close, overlay].into_iter().flatten() {
        let origin = control.clone();
        listen(&control, "click", &mount, move |menu, host, _| {
            menu.handle_click(host, &origin)
        });
    }
    if has_submenus {
        let trigger_selector = selector(SUBMENU_TOGGLE);
        listen(&panel, "click", &mount, move |menu, host, event| {
            match closest(event, &trigger_selector) {
                Some(trigger) => menu.handle_click(host, &trigger),
                None => Outcome::Ignored,
            }
        });
    }
    listen(document, "keydown", &mount, |menu, host, event| {
        match keyboard(event) {
            Some(ui) => menu.handle_event(host, &ui),
            None => Outcome::Ignored,
        }
    });
    Ok(())
}

fn mount_filter_drawer(
    window: &Window,
    document: &Document,
    panel: &Element,
) -> Result<(), MountError> {
    let overlay = first(document.query_selector(&selector(FILTER_DRAWER_OVERLAY)));
    let toggle = first(document.query_selector(&selector(FILTER_DRAWER_TOGGLE)));
    let close = first(document.query_selector(&selector(FILTER_DRAWER_CLOSE)));
    let query = breakpoint_query(panel.get_attribute(BREAKPOINT).as_deref()).to_owned();
    let media = window
        .match_media(&query)
        .ok()
        .flatten()
        .ok_or(MountError::MissingElement {
            role: "breakpoint media query",
        })?;

    let mut parts = DrawerParts::new(panel.clone());
    if let Some(overlay) = &overlay {
        parts = parts.with_overlay(overlay.clone());
    }
    if let Some(toggle) = &toggle {
        parts = parts.with_toggle(toggle.clone());
    }
    if let Some(close) = &close {
        parts = parts.with_close(close.clone());
    }
    let config: DrawerConfig = parse_config(panel.get_attribute(CONFIG).as_deref());
    let mount = share(FilterDrawer::new(parts, config)?, window, document);
    let viewport = Viewport::from_matches(media.matches());
    with_mounted(&mount, |drawer, host| drawer.mount(host, viewport));

    let watched = media.clone();
    listen(&media, "change", &mount, move |drawer, host, _| {
        drawer.handle_event(host, &breakpoint_event(watched.matches()))
    });
    for control in [toggle, close, overlay].into_iter().flatten() {
        let origin = control.clone();
        listen(&control, "click", &mount, move |drawer, host, _| {
            drawer.handle_click(host, &origin)
        });
    }
    listen(document, "keydown", &mount, |drawer, host, event| {
        match keyboard(event) {
            Some(ui) => drawer.handle_event(host, &ui),
            None => Outcome::Ignored,
        }
    });
    Ok(())
}

/// Discover every widget root in the document and mount a controller on
/// each. Call once after the DOM is parsed. Returns the number of widgets
/// mounted.
#[wasm_bindgen(js_name = mountAll)]
pub fn mount_all() -> u32 {
    install_panic_hook();
    let Some(window) = web_sys::window() else {
        return 0;
    };
    let Some(document) = window.document() else {
        return 0;
    };

    let mut mounted = 0usize;
    for root in elements(document.query_selector_all(&selector(CAROUSEL))) {
        mounted += report("carousel", mount_slide_carousel(&window, &document, &root));
    }
    for root in elements(document.query_selector_all(&selector(SCROLL_CAROUSEL))) {
        mounted += report(
            "scroll_carousel",
            mount_scroll_carousel(&window, &document, &root),
        );
    }
    mounted += report("mobile_menu", mount_mobile_menu(&window, &document));
    for panel in elements(document.query_selector_all(&selector(FILTER_DRAWER))) {
        mounted += report(
            "filter_drawer",
            mount_filter_drawer(&window, &document, &panel),
        );
    }
    tracing::debug!(message = "mount.done", mounted);
    u32::try_from(mounted).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::TimerSlot;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    const MINUTE: Duration = Duration::from_secs(60);

    fn host_with_fire() -> (DomHost, Rc<dyn Fn(TimerToken)>) {
        let window = web_sys::window().expect("browser window");
        let document = window.document().expect("browser document");
        let mut host = DomHost::new(window, document);
        let fire: Rc<dyn Fn(TimerToken)> = Rc::new(|_| {});
        host.on_fire(Rc::clone(&fire));
        (host, fire)
    }

    #[wasm_bindgen_test]
    fn cleared_timeouts_release_their_callbacks() {
        let (mut host, fire) = host_with_fire();
        let mut slot = TimerSlot::new();
        for _ in 0..16 {
            slot.arm(&mut host, MINUTE);
        }
        assert_eq!(host.pending_timeouts(), 1);
        slot.disarm(&mut host);

        assert_eq!(host.pending_timeouts(), 0);
        // Only the test's handle and the host's own copy remain.
        assert_eq!(Rc::strong_count(&fire), 2);
    }

    #[wasm_bindgen_test]
    fn fired_timeouts_release_their_callbacks() {
        let (mut host, fire) = host_with_fire();
        let mut slot = TimerSlot::new();
        let token = slot.arm(&mut host, MINUTE);
        assert_eq!(Rc::strong_count(&fire), 3);

        host.forget_timeout(token);
        assert_eq!(host.pending_timeouts(), 0);
        assert_eq!(Rc::strong_count(&fire), 2);
    }
}
