#![forbid(unsafe_code)]

//! Scroll geometry and index arithmetic.
//!
//! Everything here is a pure function of the measurements passed in.
//! [`PageModel`] is rebuilt from a fresh [`ScrollMetrics`] on every scroll
//! and resize; nothing is cached between events.

/// Raw scroll-container measurements in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current horizontal scroll offset (`scrollLeft`).
    pub scroll_left: f64,
    /// Visible width (`clientWidth`).
    pub client_width: f64,
    /// Total scrollable width (`scrollWidth`).
    pub scroll_width: f64,
}

impl ScrollMetrics {
    /// Create a measurement.
    #[must_use]
    pub const fn new(scroll_left: f64, client_width: f64, scroll_width: f64) -> Self {
        Self {
            scroll_left,
            client_width,
            scroll_width,
        }
    }
}

/// Paging view of a horizontally scrolling strip.
///
/// # Invariants
///
/// 1. `page_count >= 1`.
/// 2. `current_page < page_count`.
/// 3. `max_scroll >= 0`.
/// 4. When `page_width == 0` the model is "not ready": one page, no scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageModel {
    /// Width of one page; equals the viewport width.
    pub page_width: f64,
    /// Largest reachable scroll offset.
    pub max_scroll: f64,
    /// Number of pages including the first.
    pub page_count: usize,
    /// Page nearest to the current offset.
    pub current_page: usize,
    /// Scroll offset the model was derived from.
    pub offset: f64,
}

impl PageModel {
    /// Derive the paging model from measurements.
    #[must_use]
    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        let page_width = non_negative(metrics.client_width);
        let content_width = non_negative(metrics.scroll_width);
        let offset = non_negative(metrics.scroll_left);
        let max_scroll = (content_width - page_width).max(0.0);

        if page_width <= 0.0 {
            return Self {
                page_width: 0.0,
                max_scroll: 0.0,
                page_count: 1,
                current_page: 0,
                offset,
            };
        }

        let page_count = ((max_scroll / page_width).ceil() as usize)
            .saturating_add(1)
            .max(1);
        let current_page = ((offset / page_width).round() as usize).min(page_count - 1);

        Self {
            page_width,
            max_scroll,
            page_count,
            current_page,
            offset,
        }
    }

    /// Layout has produced a usable width.
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.page_width > 0.0
    }

    /// There is content beyond the viewport.
    #[inline]
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.is_ready() && self.max_scroll > 0.0
    }

    /// Scroll offset for `page`, clamped into `[0, max_scroll]`.
    ///
    /// Returns `None` when the strip cannot scroll or is not laid out yet.
    #[must_use]
    pub fn target_offset(&self, page: usize) -> Option<f64> {
        if !self.is_scrollable() {
            return None;
        }
        Some((page as f64 * self.page_width).clamp(0.0, self.max_scroll))
    }

    /// Offset is at the logical start, within `epsilon`.
    #[must_use]
    pub fn at_start(&self, epsilon: f64) -> bool {
        self.offset <= epsilon
    }

    /// Offset is at the logical end, within `epsilon`.
    #[must_use]
    pub fn at_end(&self, epsilon: f64) -> bool {
        self.offset >= self.max_scroll - epsilon
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Normalize a possibly negative index into `[0, len)`.
///
/// Returns `None` for an empty sequence.
#[must_use]
pub fn wrap_index(index: isize, len: usize) -> Option<usize> {
    let len = isize::try_from(len).ok().filter(|len| *len > 0)?;
    usize::try_from(index.rem_euclid(len)).ok()
}
