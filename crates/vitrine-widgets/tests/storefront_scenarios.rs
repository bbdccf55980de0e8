#![forbid(unsafe_code)]

//! End-to-end behaviour of a storefront page assembled from several
//! controllers sharing one host.
//!
//! Covers:
//! 1. Closing the mobile drawer collapses every nested panel before it is
//!    reopened.
//! 2. The filter drawer follows narrow/wide crossings regardless of the
//!    state it was left in.
//! 3. Independent carousels on one page never share timers.
//!
//! Run:
//!   cargo test -p vitrine-widgets --test storefront_scenarios

use std::time::Duration;

use vitrine_core::recording::{NodeId, RecordingHost};
use vitrine_core::{Key, KeyInput, Outcome, ScrollMetrics, UiEvent, Viewport};
use vitrine_widgets::{
    Disclosure, Drawer, DrawerConfig, DrawerParts, FilterDrawer, MobileMenu, NestedMenu,
    NestedMenuConfig, ScrollCarousel, ScrollCarouselConfig, ScrollParts, SlideCarousel,
    SlideCarouselConfig, SlideParts,
};

struct MobileFixture {
    menu: MobileMenu<NodeId>,
    toggle: NodeId,
    close: NodeId,
    panel: NodeId,
    group: Vec<Disclosure<NodeId>>,
}

fn mobile_menu(host: &mut RecordingHost, submenus: usize) -> MobileFixture {
    let panel = host.element_with_classes("fixed inset-y-0 -translate-x-full");
    let overlay = host.element_with_classes("opacity-0 pointer-events-none");
    let toggle = host.element();
    let close = host.element();
    let group: Vec<Disclosure<NodeId>> = (0..submenus)
        .map(|_| {
            let trigger = host.element();
            let submenu = host.element_with_classes("hidden");
            let icon = host.element();
            Disclosure::new(trigger, submenu).with_icon(icon)
        })
        .collect();
    let drawer = Drawer::new(
        DrawerParts::new(panel)
            .with_overlay(overlay)
            .with_toggle(toggle)
            .with_close(close),
        DrawerConfig::default(),
    )
    .unwrap();
    let nested = NestedMenu::new(group.clone(), NestedMenuConfig::default()).unwrap();
    let mut menu = MobileMenu::new(drawer, Some(nested));
    menu.mount(host);
    MobileFixture {
        menu,
        toggle,
        close,
        panel,
        group,
    }
}

// ============================================================================
// 1. Mobile menu reset
// ============================================================================

#[test]
fn reopened_menu_starts_collapsed() {
    let mut host = RecordingHost::new();
    let mut f = mobile_menu(&mut host, 3);

    f.menu.handle_click(&mut host, &f.toggle);
    for d in &f.group[..2] {
        assert_eq!(f.menu.handle_click(&mut host, &d.trigger), Outcome::Consumed);
    }
    assert!(!host.has_class(f.group[0].panel, "hidden"));
    assert!(!host.has_class(f.group[1].panel, "hidden"));

    f.menu.handle_click(&mut host, &f.close);
    assert!(host.has_class(f.panel, "-translate-x-full"));

    f.menu.handle_click(&mut host, &f.toggle);
    assert!(!host.has_class(f.panel, "-translate-x-full"));
    for d in &f.group {
        assert!(host.has_class(d.panel, "hidden"));
        assert_eq!(host.attribute(d.trigger, "aria-expanded"), Some("false"));
        assert!(!host.has_class(d.icon.unwrap(), "rotate-180"));
    }
}

#[test]
fn escape_closes_and_resets() {
    let mut host = RecordingHost::new();
    let mut f = mobile_menu(&mut host, 2);
    f.menu.open(&mut host);
    f.menu.handle_click(&mut host, &f.group[1].trigger);

    let escape = UiEvent::Key(KeyInput::new(Key::Escape));
    assert_eq!(f.menu.handle_event(&mut host, &escape), Outcome::Handled);
    assert!(!f.menu.is_open());
    assert_eq!(host.attribute(f.panel, "aria-hidden"), Some("true"));
    assert!(host.has_class(f.group[1].panel, "hidden"));
}

// ============================================================================
// 2. Filter drawer breakpoint sync
// ============================================================================

fn filter_drawer(host: &mut RecordingHost) -> (FilterDrawer<NodeId>, NodeId, NodeId) {
    let panel = host.element_with_classes("-translate-x-full");
    let overlay = host.element_with_classes("opacity-0 pointer-events-none");
    let toggle = host.element();
    let drawer = FilterDrawer::new(
        DrawerParts::new(panel)
            .with_overlay(overlay)
            .with_toggle(toggle),
        DrawerConfig::default(),
    )
    .unwrap();
    (drawer, panel, overlay)
}

#[test]
fn resize_sequence_never_drifts() {
    let mut host = RecordingHost::new();
    let (mut drawer, panel, overlay) = filter_drawer(&mut host);
    drawer.mount(&mut host, Viewport::Narrow);

    let script = [
        Viewport::Wide,
        Viewport::Wide,
        Viewport::Narrow,
        Viewport::Wide,
        Viewport::Narrow,
        Viewport::Narrow,
    ];
    for viewport in script {
        // User fiddles with the drawer between crossings.
        drawer.toggle(&mut host);
        drawer.handle_event(&mut host, &UiEvent::Breakpoint(viewport));
        let wide = viewport.is_wide();
        assert_eq!(drawer.is_open(), wide);
        assert_eq!(!host.has_class(panel, "-translate-x-full"), wide);
        assert!(host.has_class(overlay, "opacity-0"));
        assert!(host.has_class(overlay, "pointer-events-none"));
        assert!(!host.has_class(overlay, "opacity-100"));
    }
}

#[test]
fn narrow_toggle_shows_scrim() {
    let mut host = RecordingHost::new();
    let (mut drawer, _, overlay) = filter_drawer(&mut host);
    drawer.mount(&mut host, Viewport::Narrow);
    assert!(drawer.toggle(&mut host));
    assert!(host.has_class(overlay, "opacity-100"));
    let escape = UiEvent::Key(KeyInput::new(Key::Escape));
    drawer.handle_event(&mut host, &escape);
    assert!(!host.has_class(overlay, "opacity-100"));
}

// ============================================================================
// 3. Independent carousels
// ============================================================================

#[test]
fn carousels_on_one_page_are_independent() {
    let mut host = RecordingHost::new();
    let hero_slides = host.elements(3);
    let promo_slides = host.elements(2);
    let mut hero =
        SlideCarousel::new(SlideParts::new(hero_slides), SlideCarouselConfig::default()).unwrap();
    let promo_config = SlideCarouselConfig {
        interval: Duration::from_millis(2000),
        ..Default::default()
    };
    let mut promo = SlideCarousel::new(SlideParts::new(promo_slides), promo_config).unwrap();
    hero.mount(&mut host);
    promo.mount(&mut host);
    assert_eq!(host.timers().len(), 2);

    hero.handle_event(&mut host, &UiEvent::PointerEnter);
    assert_eq!(host.timers().len(), 1);

    for token in host.advance(Duration::from_millis(2000)) {
        assert!(!hero.on_timer(&mut host, token));
        assert!(promo.on_timer(&mut host, token));
    }
    assert_eq!(hero.current_index(), 0);
    assert_eq!(promo.current_index(), 1);

    let track = host.element();
    let dots = host.element();
    host.set_metrics(track, ScrollMetrics::new(0.0, 300.0, 1200.0));
    let mut brands = ScrollCarousel::new(
        ScrollParts::new(track).with_pagination(dots),
        ScrollCarouselConfig::default(),
    )
    .unwrap();
    brands.mount(&mut host);
    assert_eq!(brands.indicators().len(), 4);
    assert_eq!(host.timers().len(), 1);
}
