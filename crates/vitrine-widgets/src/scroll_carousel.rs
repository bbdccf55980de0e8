#![forbid(unsafe_code)]

//! Continuous (page-snap) scroll carousel.
//!
//! A horizontally scrolling strip used for brand and product rows. Native
//! scrolling owns the position; this controller only reads it back through
//! [`PageModel`] and keeps the pagination dots and prev/next controls in
//! step with it.
//!
//! Work is split by event frequency:
//!
//! - **scroll** (high frequency): re-highlight the active indicator and
//!   refresh control visibility. No indicator elements are created.
//! - **resize** (low frequency): the page count may have changed, so the
//!   indicators are rebuilt from scratch, then highlight and visibility are
//!   refreshed.
//!
//! The page model is derived from fresh measurements on every call and is
//! never stored.

use vitrine_core::markers::PAGE_INDEX;
use vitrine_core::{Key, MountError, Outcome, PageModel, ScrollBehavior, Surface, UiEvent};

/// Tunables for a [`ScrollCarousel`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollCarouselConfig {
    /// Distance from either edge, in pixels, that still counts as "at the
    /// edge" (default: 4px).
    pub edge_epsilon: f64,
    /// Animate programmatic page changes.
    pub smooth: bool,
    /// Classes present on every generated indicator.
    pub indicator_class: String,
    /// Classes present on the indicator of the current page.
    pub indicator_active_class: String,
}

impl Default for ScrollCarouselConfig {
    fn default() -> Self {
        Self {
            edge_epsilon: 4.0,
            smooth: true,
            indicator_class: "h-2 w-2 rounded-full bg-neutral-300".to_owned(),
            indicator_active_class: "bg-neutral-900".to_owned(),
        }
    }
}

impl ScrollCarouselConfig {
    fn validate(&self) -> Result<(), MountError> {
        if !self.edge_epsilon.is_finite() || self.edge_epsilon < 0.0 {
            return Err(MountError::InvalidConfig {
                field: "edge_epsilon",
                reason: "must be a finite, non-negative pixel distance",
            });
        }
        Ok(())
    }

    fn behavior(&self) -> ScrollBehavior {
        if self.smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        }
    }
}

/// Elements a scroll carousel is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollParts<E> {
    /// The horizontally scrolling container.
    pub track: E,
    pub prev: Option<E>,
    pub next: Option<E>,
    /// Where generated indicators go. Without it, pagination is skipped.
    pub pagination: Option<E>,
}

impl<E> ScrollParts<E> {
    #[must_use]
    pub fn new(track: E) -> Self {
        Self {
            track,
            prev: None,
            next: None,
            pagination: None,
        }
    }

    #[must_use]
    pub fn with_controls(mut self, prev: Option<E>, next: Option<E>) -> Self {
        self.prev = prev;
        self.next = next;
        self
    }

    #[must_use]
    pub fn with_pagination(mut self, pagination: E) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// Scroll-offset-addressed carousel with generated pagination.
#[derive(Debug, Clone)]
pub struct ScrollCarousel<E> {
    parts: ScrollParts<E>,
    config: ScrollCarouselConfig,
    indicators: Vec<E>,
}

impl<E: Clone + PartialEq + core::fmt::Debug> ScrollCarousel<E> {
    /// Validate configuration and bind to `parts`. Does not touch the page.
    pub fn new(parts: ScrollParts<E>, config: ScrollCarouselConfig) -> Result<Self, MountError> {
        config.validate()?;
        Ok(Self {
            parts,
            config,
            indicators: Vec::new(),
        })
    }

    /// Render indicators and control state for the current layout.
    pub fn mount<S: Surface<Element = E>>(&mut self, host: &mut S) {
        self.on_resize(host);
    }

    /// Paging model from a fresh measurement of the track.
    #[must_use]
    pub fn page_model<S: Surface<Element = E>>(&self, host: &S) -> PageModel {
        PageModel::from_metrics(host.scroll_metrics(&self.parts.track))
    }

    /// Generated indicators, in page order.
    #[must_use]
    pub fn indicators(&self) -> &[E] {
        &self.indicators
    }

    #[must_use]
    pub fn parts(&self) -> &ScrollParts<E> {
        &self.parts
    }

    #[must_use]
    pub fn config(&self) -> &ScrollCarouselConfig {
        &self.config
    }

    /// Scroll so that `page` is in view, clamped to the reachable range.
    ///
    /// No-op (returns `false`) when the content fits the viewport or the
    /// track has not been laid out yet.
    pub fn scroll_to_page<S: Surface<Element = E>>(&mut self, host: &mut S, page: usize) -> bool {
        let model = self.page_model(host);
        let Some(target) = model.target_offset(page) else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "scroll_carousel.scroll",
            page,
            target,
            max_scroll = model.max_scroll
        );
        host.scroll_to(&self.parts.track, target, self.config.behavior());
        true
    }

    /// Scroll one page forward.
    pub fn next_page<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        let current = self.page_model(host).current_page;
        self.scroll_to_page(host, current.saturating_add(1))
    }

    /// Scroll one page backward.
    pub fn previous_page<S: Surface<Element = E>>(&mut self, host: &mut S) -> bool {
        let current = self.page_model(host).current_page;
        self.scroll_to_page(host, current.saturating_sub(1))
    }

    /// Indicator `index` was clicked.
    pub fn select_indicator<S: Surface<Element = E>>(
        &mut self,
        host: &mut S,
        index: usize,
    ) -> bool {
        if index >= self.indicators.len() {
            return false;
        }
        self.scroll_to_page(host, index)
    }

    /// Rebuild the pagination indicators from scratch.
    ///
    /// Exactly `page_count` indicators are created. With a single page the
    /// container is hidden and the list is left empty. Without a pagination
    /// container this does nothing.
    pub fn render_indicators<S: Surface<Element = E>>(&mut self, host: &mut S) {
        let Some(container) = self.parts.pagination.clone() else {
            return;
        };
        host.clear_children(&container);
        self.indicators.clear();

        let model = self.page_model(host);
        if model.page_count <= 1 {
            host.set_hidden(&container, true);
            return;
        }
        host.set_hidden(&container, false);
        for page in 0..model.page_count {
            let Some(indicator) = host.append_indicator(&container, page) else {
                continue;
            };
            host.set_classes(&indicator, &self.config.indicator_class, true);
            host.set_attribute(&indicator, PAGE_INDEX, &page.to_string());
            host.set_attribute(&indicator, "aria-label", &format!("Go to page {}", page + 1));
            self.indicators.push(indicator);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "scroll_carousel.indicators",
            page_count = model.page_count,
            rendered = self.indicators.len()
        );
    }

    /// Mark the indicator of the current page as active.
    pub fn refresh_active_indicator<S: Surface<Element = E>>(&mut self, host: &mut S) {
        if self.indicators.is_empty() {
            return;
        }
        let current = self
            .page_model(host)
            .current_page
            .min(self.indicators.len() - 1);
        for (page, indicator) in self.indicators.iter().enumerate() {
            let active = page == current;
            host.set_classes(indicator, &self.config.indicator_active_class, active);
            host.set_aria_flag(indicator, "aria-current", active);
        }
    }

    /// Hide and disable the controls that cannot move any further.
    pub fn refresh_navigation_visibility<S: Surface<Element = E>>(&mut self, host: &mut S) {
        let model = self.page_model(host);
        let scrollable = model.is_scrollable();
        let epsilon = self.config.edge_epsilon;
        let hide_prev = !scrollable || model.at_start(epsilon);
        let hide_next = !scrollable || model.at_end(epsilon);
        if let Some(prev) = &self.parts.prev {
            host.set_hidden(prev, hide_prev);
            host.set_disabled(prev, hide_prev);
        }
        if let Some(next) = &self.parts.next {
            host.set_hidden(next, hide_next);
            host.set_disabled(next, hide_next);
        }
    }

    /// The track scrolled.
    pub fn on_scroll<S: Surface<Element = E>>(&mut self, host: &mut S) {
        self.refresh_active_indicator(host);
        self.refresh_navigation_visibility(host);
    }

    /// The viewport was resized.
    pub fn on_resize<S: Surface<Element = E>>(&mut self, host: &mut S) {
        self.render_indicators(host);
        self.refresh_active_indicator(host);
        self.refresh_navigation_visibility(host);
    }

    /// Route one input event.
    pub fn handle_event<S: Surface<Element = E>>(
        &mut self,
        host: &mut S,
        event: &UiEvent,
    ) -> Outcome {
        match *event {
            UiEvent::Scroll => {
                self.on_scroll(host);
                Outcome::Handled
            }
            UiEvent::Resize => {
                self.on_resize(host);
                Outcome::Handled
            }
            UiEvent::Key(key) if key.is_bare() => {
                let moved = match key.key {
                    Key::ArrowLeft => self.previous_page(host),
                    Key::ArrowRight => self.next_page(host),
                    _ => return Outcome::Ignored,
                };
                if moved {
                    Outcome::Consumed
                } else {
                    Outcome::Ignored
                }
            }
            _ => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::recording::{NodeId, RecordingHost};
    use vitrine_core::{KeyInput, ScrollMetrics};

    struct Fixture {
        host: RecordingHost,
        carousel: ScrollCarousel<NodeId>,
        track: NodeId,
        prev: NodeId,
        next: NodeId,
        pagination: NodeId,
    }

    fn fixture(client_width: f64, scroll_width: f64) -> Fixture {
        let mut host = RecordingHost::new();
        let track = host.element();
        let prev = host.element();
        let next = host.element();
        let pagination = host.element();
        host.set_metrics(track, ScrollMetrics::new(0.0, client_width, scroll_width));
        let parts = ScrollParts::new(track)
            .with_controls(Some(prev), Some(next))
            .with_pagination(pagination);
        let mut carousel = ScrollCarousel::new(parts, ScrollCarouselConfig::default()).unwrap();
        carousel.mount(&mut host);
        Fixture {
            host,
            carousel,
            track,
            prev,
            next,
            pagination,
        }
    }

    fn active_pages(f: &Fixture) -> Vec<usize> {
        f.carousel
            .indicators()
            .iter()
            .enumerate()
            .filter(|(_, i)| f.host.attribute(**i, "aria-current") == Some("true"))
            .map(|(p, _)| p)
            .collect()
    }

    #[test]
    fn mount_renders_one_indicator_per_page() {
        let f = fixture(400.0, 1000.0);
        assert_eq!(f.carousel.indicators().len(), 3);
        assert_eq!(f.host.children(f.pagination).len(), 3);
        assert!(!f.host.is_hidden(f.pagination));
        assert_eq!(active_pages(&f), vec![0]);
        let second = f.carousel.indicators()[1];
        assert_eq!(f.host.attribute(second, "data-page"), Some("1"));
        assert_eq!(f.host.attribute(second, "aria-label"), Some("Go to page 2"));
    }

    #[test]
    fn mount_hides_prev_at_start() {
        let f = fixture(400.0, 1000.0);
        assert!(f.host.is_hidden(f.prev) && f.host.is_disabled(f.prev));
        assert!(!f.host.is_hidden(f.next) && !f.host.is_disabled(f.next));
    }

    #[test]
    fn scroll_to_page_clamps_to_max_scroll() {
        let mut f = fixture(400.0, 1000.0);
        assert!(f.carousel.scroll_to_page(&mut f.host, 5));
        let call = f.host.last_scroll().unwrap();
        assert_eq!(call.element, f.track);
        assert_eq!(call.left, 600.0);
        assert_eq!(call.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn scroll_to_page_noops_when_content_fits() {
        let mut f = fixture(400.0, 380.0);
        assert!(!f.carousel.scroll_to_page(&mut f.host, 1));
        assert!(f.host.scrolls().is_empty());
    }

    #[test]
    fn scroll_to_page_noops_before_layout() {
        let mut f = fixture(0.0, 0.0);
        assert!(!f.carousel.scroll_to_page(&mut f.host, 2));
        assert!(f.host.scrolls().is_empty());
    }

    #[test]
    fn static_strip_has_no_controls_or_indicators() {
        let f = fixture(400.0, 400.0);
        assert!(f.carousel.indicators().is_empty());
        assert!(f.host.is_hidden(f.pagination));
        assert!(f.host.is_hidden(f.prev));
        assert!(f.host.is_hidden(f.next));
    }

    #[test]
    fn scroll_updates_highlight_and_edges() {
        let mut f = fixture(400.0, 1000.0);
        f.host.set_scroll_left(f.track, 410.0);
        f.carousel.on_scroll(&mut f.host);
        assert_eq!(active_pages(&f), vec![1]);
        assert!(!f.host.is_hidden(f.prev));
        assert!(!f.host.is_hidden(f.next));

        f.host.set_scroll_left(f.track, 597.0);
        f.carousel.on_scroll(&mut f.host);
        assert!(f.host.is_hidden(f.next) && f.host.is_disabled(f.next));

        f.host.set_scroll_left(f.track, 600.0);
        f.carousel.on_scroll(&mut f.host);
        assert_eq!(active_pages(&f), vec![2]);
    }

    #[test]
    fn subpixel_start_counts_as_start() {
        let mut f = fixture(400.0, 1000.0);
        f.host.set_scroll_left(f.track, 2.5);
        f.carousel.on_scroll(&mut f.host);
        assert!(f.host.is_hidden(f.prev));
    }

    #[test]
    fn scroll_does_not_rebuild_indicators() {
        let mut f = fixture(400.0, 1000.0);
        let before: Vec<NodeId> = f.carousel.indicators().to_vec();
        f.host.set_scroll_left(f.track, 400.0);
        f.carousel.handle_event(&mut f.host, &UiEvent::Scroll);
        assert_eq!(f.carousel.indicators(), before.as_slice());
        assert!(before.iter().all(|i| !f.host.is_detached(*i)));
    }

    #[test]
    fn resize_rebuilds_indicators() {
        let mut f = fixture(400.0, 1000.0);
        let old: Vec<NodeId> = f.carousel.indicators().to_vec();
        f.host
            .set_metrics(f.track, ScrollMetrics::new(0.0, 200.0, 1000.0));
        f.carousel.handle_event(&mut f.host, &UiEvent::Resize);
        assert_eq!(f.carousel.indicators().len(), 5);
        assert_eq!(f.host.children(f.pagination).len(), 5);
        assert!(old.iter().all(|i| f.host.is_detached(*i)));
        assert_eq!(active_pages(&f), vec![0]);
    }

    #[test]
    fn resize_to_single_page_hides_pagination() {
        let mut f = fixture(400.0, 1000.0);
        f.host
            .set_metrics(f.track, ScrollMetrics::new(0.0, 1200.0, 1000.0));
        f.carousel.on_resize(&mut f.host);
        assert!(f.carousel.indicators().is_empty());
        assert!(f.host.children(f.pagination).is_empty());
        assert!(f.host.is_hidden(f.pagination));
        assert!(f.host.is_hidden(f.next));
    }

    #[test]
    fn missing_pagination_skips_indicators() {
        let mut host = RecordingHost::new();
        let track = host.element();
        host.set_metrics(track, ScrollMetrics::new(0.0, 400.0, 1000.0));
        let mut carousel =
            ScrollCarousel::new(ScrollParts::new(track), ScrollCarouselConfig::default()).unwrap();
        carousel.mount(&mut host);
        assert!(carousel.indicators().is_empty());
        assert!(carousel.next_page(&mut host));
        assert_eq!(host.last_scroll().map(|c| c.left), Some(400.0));
    }

    #[test]
    fn next_and_previous_follow_current_page() {
        let mut f = fixture(400.0, 1000.0);
        assert!(f.carousel.next_page(&mut f.host));
        assert_eq!(f.host.last_scroll().unwrap().left, 400.0);
        f.carousel.on_scroll(&mut f.host);
        assert!(f.carousel.next_page(&mut f.host));
        assert_eq!(f.host.last_scroll().unwrap().left, 600.0);
        f.carousel.on_scroll(&mut f.host);
        assert!(f.carousel.previous_page(&mut f.host));
        assert_eq!(f.host.last_scroll().unwrap().left, 400.0);
    }

    #[test]
    fn indicator_click_scrolls_to_page() {
        let mut f = fixture(400.0, 1000.0);
        assert!(f.carousel.select_indicator(&mut f.host, 1));
        assert_eq!(f.host.last_scroll().unwrap().left, 400.0);
        assert!(!f.carousel.select_indicator(&mut f.host, 3));
    }

    #[test]
    fn arrow_keys_page_when_scrollable() {
        let mut f = fixture(400.0, 1000.0);
        let right = UiEvent::Key(KeyInput::new(Key::ArrowRight));
        assert_eq!(f.carousel.handle_event(&mut f.host, &right), Outcome::Consumed);
        let mut fits = fixture(400.0, 400.0);
        assert_eq!(fits.carousel.handle_event(&mut fits.host, &right), Outcome::Ignored);
    }

    #[test]
    fn instant_behavior_when_not_smooth() {
        let mut host = RecordingHost::new();
        let track = host.element();
        host.set_metrics(track, ScrollMetrics::new(0.0, 400.0, 1000.0));
        let config = ScrollCarouselConfig {
            smooth: false,
            ..Default::default()
        };
        let mut carousel = ScrollCarousel::new(ScrollParts::new(track), config).unwrap();
        carousel.scroll_to_page(&mut host, 1);
        assert_eq!(host.last_scroll().unwrap().behavior, ScrollBehavior::Instant);
    }

    #[test]
    fn negative_epsilon_rejected() {
        let config = ScrollCarouselConfig {
            edge_epsilon: -1.0,
            ..Default::default()
        };
        assert!(ScrollCarousel::new(ScrollParts::new(0u8), config).is_err());
    }
}
