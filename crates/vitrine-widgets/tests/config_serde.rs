#![forbid(unsafe_code)]
#![cfg(feature = "serde")]

//! Controller configs deserialize from the JSON hosts embed in the page.
//!
//! Run:
//!   cargo test -p vitrine-widgets --features serde --test config_serde

use std::time::Duration;

use vitrine_widgets::{DrawerConfig, NestedMenuConfig, ScrollCarouselConfig, SlideCarouselConfig};

#[test]
fn slide_config_reads_milliseconds_and_keeps_defaults() {
    let config: SlideCarouselConfig =
        serde_json::from_str(r#"{"interval": 7000, "swipe": {"threshold": 60.0}}"#).unwrap();
    assert_eq!(config.interval, Duration::from_secs(7));
    assert_eq!(config.resume_delay, Duration::from_secs(3));
    assert_eq!(config.swipe.threshold, 60.0);
    assert_eq!(config.active_class, SlideCarouselConfig::default().active_class);
}

#[test]
fn empty_object_is_default() {
    let slide: SlideCarouselConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(slide, SlideCarouselConfig::default());
    let scroll: ScrollCarouselConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(scroll, ScrollCarouselConfig::default());
    let menu: NestedMenuConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(menu, NestedMenuConfig::default());
    let drawer: DrawerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(drawer, DrawerConfig::default());
}

#[test]
fn scroll_config_overrides() {
    let config: ScrollCarouselConfig =
        serde_json::from_str(r#"{"edge_epsilon": 8.0, "smooth": false}"#).unwrap();
    assert_eq!(config.edge_epsilon, 8.0);
    assert!(!config.smooth);
}

#[test]
fn negative_interval_is_rejected() {
    assert!(serde_json::from_str::<SlideCarouselConfig>(r#"{"interval": -5}"#).is_err());
}
