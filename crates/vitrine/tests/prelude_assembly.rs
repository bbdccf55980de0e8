#![forbid(unsafe_code)]

//! The prelude is enough to assemble and drive a widget by hand.

use vitrine::core::recording::RecordingHost;
use vitrine::prelude::*;
use vitrine::{DrawerConfig, DrawerParts, SlideCarouselConfig, SlideParts};

fn assemble() -> Result<(RecordingHost, SlideCarousel<vitrine::core::recording::NodeId>)> {
    let mut host = RecordingHost::new();
    let slides = host.elements(3);
    let mut carousel = SlideCarousel::new(SlideParts::new(slides), SlideCarouselConfig::default())?;
    carousel.mount(&mut host);
    Ok((host, carousel))
}

#[test]
fn carousel_through_prelude() {
    let (mut host, mut carousel) = assemble().unwrap();
    carousel.next(&mut host);
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(host.timers().len(), 1);
}

#[test]
fn filter_drawer_through_prelude() {
    let mut host = RecordingHost::new();
    let panel = host.element();
    let mut drawer = FilterDrawer::new(DrawerParts::new(panel), DrawerConfig::default()).unwrap();
    drawer.mount(&mut host, Viewport::Wide);
    assert!(drawer.is_open());
    assert_eq!(
        drawer.handle_event(&mut host, &UiEvent::Breakpoint(Viewport::Narrow)),
        Outcome::Handled
    );
    assert!(!drawer.is_open());
}
