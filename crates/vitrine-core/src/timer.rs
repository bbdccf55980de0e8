#![forbid(unsafe_code)]

//! Timer primitives.
//!
//! [`TimerSlot`] is the two-state (armed/idle) scheduler a controller owns.
//! It never holds more than one live token: arming always cancels the
//! previous token first, and a fired token is accepted only if it is the
//! one currently armed, so a late callback from a cancelled timeout cannot
//! advance anything.
//!
//! [`TimerQueue`] is a deterministic, host-driven timeout queue. Native
//! harnesses advance it explicitly instead of waiting on a wall clock.

use core::time::Duration;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::host::TimerHost;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identifies one scheduled timeout. Tokens are unique per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value, for hosts that need to key a map.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Armed/idle scheduler owned by a single controller.
#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    armed: Option<TimerToken>,
}

impl TimerSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// Arm the slot, replacing any pending timeout.
    pub fn arm<H: TimerHost + ?Sized>(&mut self, host: &mut H, delay: Duration) -> TimerToken {
        self.disarm(host);
        let token = TimerToken::next();
        host.set_timeout(token, delay);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "timer.arm",
            token = token.get(),
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
        );
        self.armed = Some(token);
        token
    }

    /// Cancel the pending timeout. Returns `false` if the slot was idle.
    pub fn disarm<H: TimerHost + ?Sized>(&mut self, host: &mut H) -> bool {
        match self.armed.take() {
            Some(token) => {
                host.clear_timeout(token);
                #[cfg(feature = "tracing")]
                tracing::trace!(message = "timer.disarm", token = token.get());
                true
            }
            None => false,
        }
    }

    /// Accept a fired token. Returns `true` only for the armed token, and
    /// leaves the slot idle in that case.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed == Some(token) {
            self.armed = None;
            return true;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "timer.stale",
            token = token.get(),
            armed = self.armed.map(TimerToken::get)
        );
        false
    }

    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    #[inline]
    #[must_use]
    pub fn token(&self) -> Option<TimerToken> {
        self.armed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    token: TimerToken,
    deadline: Duration,
    seq: u64,
}

/// Deterministic timeout queue driven by an explicit clock.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: Duration,
    pending: Vec<Pending>,
    seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            pending: Vec::new(),
            seq: 0,
        }
    }

    /// Current queue time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of live timeouts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether `token` is still pending.
    #[must_use]
    pub fn contains(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|p| p.token == token)
    }

    /// Time remaining until `token` fires.
    #[must_use]
    pub fn remaining(&self, token: TimerToken) -> Option<Duration> {
        self.pending
            .iter()
            .find(|p| p.token == token)
            .map(|p| p.deadline.saturating_sub(self.now))
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.deadline).min()
    }

    /// Schedule `token` at `now + delay`.
    pub fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.cancel(token);
        self.seq += 1;
        self.pending.push(Pending {
            token,
            deadline: self.now.saturating_add(delay),
            seq: self.seq,
        });
    }

    /// Remove `token`. Returns `false` if it was not pending.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.token != token);
        self.pending.len() != before
    }

    /// Advance the clock by `dt` and drain every timeout that became due,
    /// ordered by deadline then scheduling order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerToken> {
        self.now = self.now.saturating_add(dt);
        let now = self.now;
        let mut due: Vec<Pending> = self
            .pending
            .iter()
            .copied()
            .filter(|p| p.deadline <= now)
            .collect();
        self.pending.retain(|p| p.deadline > now);
        due.sort_by_key(|p| (p.deadline, p.seq));
        due.into_iter().map(|p| p.token).collect()
    }

    /// Pop the single earliest due timeout, if any, advancing the clock to
    /// its deadline. Use this to interleave firing with controller updates
    /// that may schedule new timeouts.
    pub fn pop_next(&mut self, limit: Duration) -> Option<TimerToken> {
        let next = self
            .pending
            .iter()
            .copied()
            .filter(|p| p.deadline <= limit)
            .min_by_key(|p| (p.deadline, p.seq))?;
        self.pending.retain(|p| p.token != next.token);
        self.now = self.now.max(next.deadline);
        Some(next.token)
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl TimerHost for TimerQueue {
    fn set_timeout(&mut self, token: TimerToken, delay: Duration) {
        self.schedule(token, delay);
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        self.cancel(token);
    }
}
