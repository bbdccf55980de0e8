#![forbid(unsafe_code)]

//! Discrete slide carousel.
//!
//! Index-addressed carousel where exactly one slide is active. Slides swap
//! by class (opacity) rather than by scrolling.
//!
//! # Autoplay
//!
//! ```text
//!            start()             fire: advance + re-arm
//!   Paused ───────────▶ Running ◀──────────────┐
//!     ▲  ◀───────────────  │  ───────────────────┘
//!     │       stop()       │
//!     └────────────────────┘ resume(): re-arm after the grace delay
//!
//!   Disabled (slide count <= 1): terminal, every call is a no-op.
//! ```
//!
//! Pausing happens on pointer-enter, focus-in, touch-start and page hide.
//! Resuming happens on the matching "end" signal and always uses
//! [`SlideCarouselConfig::resume_delay`], not the full interval. Explicit
//! navigation (controls, indicators, swipes, arrow keys) restarts the
//! cadence at the full interval after the visual update has been applied.
//!
//! # Invariants
//!
//! 1. `current_index() < len()` whenever `len() > 0`.
//! 2. After any operation returns, exactly one slide and at most one
//!    indicator carry the active class.
//! 3. At most one autoplay timeout is live; stale tokens are ignored.

use core::time::Duration;

use vitrine_core::geometry::wrap_index;
use vitrine_core::{
    Host, Key, MountError, Outcome, Surface, SwipeConfig, SwipeOutcome, SwipeTracker, TimerSlot,
    TimerToken, UiEvent, Visibility,
};

/// Tunables for a [`SlideCarousel`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlideCarouselConfig {
    /// Autoplay cadence (default: 5s).
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "vitrine_core::serde_ms::deserialize")
    )]
    pub interval: Duration,
    /// Grace delay before autoplay resumes after an interaction (default: 3s).
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "vitrine_core::serde_ms::deserialize")
    )]
    pub resume_delay: Duration,
    /// Swipe recognition thresholds.
    pub swipe: SwipeConfig,
    /// Classes present on the active slide.
    pub active_class: String,
    /// Classes present on every other slide.
    pub inactive_class: String,
    /// Classes present on the active indicator.
    pub indicator_active_class: String,
}

impl Default for SlideCarouselConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(5000),
            resume_delay: Duration::from_millis(3000),
            swipe: SwipeConfig::default(),
            active_class: "opacity-100 z-10".to_owned(),
            inactive_class: "opacity-0 pointer-events-none".to_owned(),
            indicator_active_class: "bg-white".to_owned(),
        }
    }
}

impl SlideCarouselConfig {
    fn validate(&self) -> Result<(), MountError> {
        if self.interval.is_zero() {
            return Err(MountError::InvalidConfig {
                field: "interval",
                reason: "must be non-zero",
            });
        }
        if !self.swipe.threshold.is_finite() || self.swipe.threshold < 0.0 {
            return Err(MountError::InvalidConfig {
                field: "swipe.threshold",
                reason: "must be a finite, non-negative pixel distance",
            });
        }
        Ok(())
    }
}

/// Elements a slide carousel is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideParts<E> {
    /// Slides in display order.
    pub slides: Vec<E>,
    /// Pagination dots, one per slide (may be empty).
    pub indicators: Vec<E>,
    pub prev: Option<E>,
    pub next: Option<E>,
}

impl<E> SlideParts<E> {
    /// Slides only, no controls.
    #[must_use]
    pub fn new(slides: Vec<E>) -> Self {
        Self {
            slides,
            indicators: Vec::new(),
            prev: None,
            next: None,
        }
    }

    #[must_use]
    pub fn with_indicators(mut self, indicators: Vec<E>) -> Self {
        self.indicators = indicators;
        self
    }

    #[must_use]
    pub fn with_controls(mut self, prev: Option<E>, next: Option<E>) -> Self {
        self.prev = prev;
        self.next = next;
        self
    }
}

/// Observable autoplay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayState {
    /// A timeout is armed.
    Running,
    /// No timeout is armed.
    Paused,
    /// Fewer than two slides; autoplay never runs.
    Disabled,
}

/// Index-based carousel with autoplay and swipe navigation.
#[derive(Debug, Clone)]
pub struct SlideCarousel<E> {
    parts: SlideParts<E>,
    config: SlideCarouselConfig,
    current: usize,
    timer: TimerSlot,
    swipe: SwipeTracker,
}

impl<E: Clone + PartialEq + core::fmt::Debug> SlideCarousel<E> {
    /// Validate configuration and bind to `parts`. Does not touch the page.
    pub fn new(parts: SlideParts<E>, config: SlideCarouselConfig) -> Result<Self, MountError> {
        config.validate()?;
        let swipe = SwipeTracker::new(config.swipe);
        Ok(Self {
            parts,
            config,
            current: 0,
            timer: TimerSlot::new(),
            swipe,
        })
    }

    /// Render the initial state and start autoplay.
    ///
    /// With fewer than two slides the controls and indicators are hidden
    /// and the carousel stays static.
    pub fn mount<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.render(host);
        if self.is_disabled() {
            for control in self.parts.prev.iter().chain(self.parts.next.iter()) {
                host.set_hidden(control, true);
                host.set_disabled(control, true);
            }
            for indicator in &self.parts.indicators {
                host.set_hidden(indicator, true);
            }
            return;
        }
        self.start(host);
    }

    /// Number of slides.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.slides.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.slides.is_empty()
    }

    /// Fewer than two slides: no navigation, no autoplay.
    #[inline]
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.len() <= 1
    }

    #[inline]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn autoplay_state(&self) -> AutoplayState {
        if self.is_disabled() {
            AutoplayState::Disabled
        } else if self.timer.is_armed() {
            AutoplayState::Running
        } else {
            AutoplayState::Paused
        }
    }

    /// Token of the armed autoplay timeout, if any.
    #[must_use]
    pub fn timer_token(&self) -> Option<TimerToken> {
        self.timer.token()
    }

    #[must_use]
    pub fn parts(&self) -> &SlideParts<E> {
        &self.parts
    }

    #[must_use]
    pub fn config(&self) -> &SlideCarouselConfig {
        &self.config
    }

    /// Activate the slide at `index`, wrapping modulo the slide count
    /// (negative indices wrap from the end). Does not touch autoplay.
    ///
    /// Returns `true` if the active slide changed.
    pub fn go_to_slide<S: Surface<Element = E>>(&mut self, host: &mut S, index: isize) -> bool {
        let Some(target) = wrap_index(index, self.len()) else {
            return false;
        };
        let changed = target != self.current;
        self.current = target;
        self.render(host);
        changed
    }

    /// Explicit user navigation: go to `index`, then restart the cadence at
    /// the full interval.
    pub fn handle_navigation<H: Host<Element = E>>(&mut self, host: &mut H, index: isize) {
        if self.is_disabled() {
            return;
        }
        #[cfg(feature = "tracing")]
        let from = self.current;
        self.go_to_slide(host, index);
        #[cfg(feature = "tracing")]
        Self::log_navigate("user", from, self.current);
        self.timer.arm(host, self.config.interval);
    }

    /// Navigate one slide forward.
    pub fn next<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.handle_navigation(host, self.offset(1));
    }

    /// Navigate one slide backward.
    pub fn previous<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.handle_navigation(host, self.offset(-1));
    }

    /// Indicator `index` was activated.
    pub fn select_indicator<H: Host<Element = E>>(&mut self, host: &mut H, index: usize) {
        if index >= self.len() {
            return;
        }
        self.handle_navigation(host, index as isize);
    }

    /// Arm autoplay at the full interval. No-op if already running or
    /// disabled.
    pub fn start<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.arm_if_idle(host, self.config.interval);
    }

    /// Arm autoplay after the grace delay. No-op if already running or
    /// disabled.
    pub fn resume<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.arm_if_idle(host, self.config.resume_delay);
    }

    /// Cancel autoplay. No-op if already paused.
    pub fn stop<H: Host<Element = E>>(&mut self, host: &mut H) {
        if self.timer.disarm(host) {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "carousel.autoplay", state = "paused");
        }
    }

    /// Deliver a fired timeout. Stale tokens are ignored.
    ///
    /// Returns `true` if the carousel advanced.
    pub fn on_timer<H: Host<Element = E>>(&mut self, host: &mut H, token: TimerToken) -> bool {
        if !self.timer.fire(token) || self.is_disabled() {
            return false;
        }
        #[cfg(feature = "tracing")]
        let from = self.current;
        self.go_to_slide(host, self.offset(1));
        #[cfg(feature = "tracing")]
        Self::log_navigate("autoplay", from, self.current);
        self.timer.arm(host, self.config.interval);
        true
    }

    /// Route one input event.
    pub fn handle_event<H: Host<Element = E>>(&mut self, host: &mut H, event: &UiEvent) -> Outcome {
        if self.is_disabled() {
            return Outcome::Ignored;
        }
        match *event {
            UiEvent::PointerEnter | UiEvent::FocusIn => {
                self.stop(host);
                Outcome::Handled
            }
            UiEvent::PointerLeave | UiEvent::FocusOut => {
                self.resume(host);
                Outcome::Handled
            }
            UiEvent::Visibility(Visibility::Hidden) => {
                self.stop(host);
                Outcome::Handled
            }
            UiEvent::Visibility(Visibility::Visible) => {
                self.resume(host);
                Outcome::Handled
            }
            UiEvent::TouchStart(at) => {
                self.stop(host);
                self.swipe.begin(at);
                Outcome::Handled
            }
            UiEvent::TouchMove(at) => {
                self.swipe.update(at);
                Outcome::Handled
            }
            UiEvent::TouchEnd => {
                match self.swipe.finish() {
                    SwipeOutcome::Forward => self.next(host),
                    SwipeOutcome::Backward => self.previous(host),
                    SwipeOutcome::Tap | SwipeOutcome::None => self.resume(host),
                }
                Outcome::Handled
            }
            UiEvent::TouchCancel => {
                self.swipe.cancel();
                self.resume(host);
                Outcome::Handled
            }
            UiEvent::Key(key) if key.is_bare() => match key.key {
                Key::ArrowLeft => {
                    self.previous(host);
                    Outcome::Consumed
                }
                Key::ArrowRight => {
                    self.next(host);
                    Outcome::Consumed
                }
                _ => Outcome::Ignored,
            },
            _ => Outcome::Ignored,
        }
    }

    fn arm_if_idle<H: Host<Element = E>>(&mut self, host: &mut H, delay: Duration) {
        if self.is_disabled() || self.timer.is_armed() {
            return;
        }
        self.timer.arm(host, delay);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.autoplay",
            state = "running",
            delay_ms = delay.as_millis() as u64
        );
    }

    fn offset(&self, delta: isize) -> isize {
        self.current as isize + delta
    }

    fn render<S: Surface<Element = E>>(&self, host: &mut S) {
        for (index, slide) in self.parts.slides.iter().enumerate() {
            let active = index == self.current;
            host.set_classes(slide, &self.config.active_class, active);
            host.set_classes(slide, &self.config.inactive_class, !active);
            host.set_aria_flag(slide, "aria-hidden", !active);
        }
        for (index, indicator) in self.parts.indicators.iter().enumerate() {
            let active = index == self.current;
            host.set_classes(indicator, &self.config.indicator_active_class, active);
            host.set_aria_flag(indicator, "aria-current", active);
        }
    }

    #[cfg(feature = "tracing")]
    fn log_navigate(reason: &str, from: usize, to: usize) {
        tracing::debug!(message = "carousel.navigate", reason, from, to);
    }
}
