// SPDX-License-Identifier: MPL-2.0
//! Show/hide lifecycle state machine.
//!
//! Pure state: instants are injected by the caller (the component feeds tick
//! timestamps through [`Lifecycle::advance`]), which keeps every transition
//! deterministic under test. Ordering contract: entry completion is processed
//! before the auto-hide deadline is armed, and a deadline firing is processed
//! before the exit transition starts. At most one transition happens per
//! `advance` call.

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// Timing parameters snapshotted from the style when a show is accepted.
///
/// Style edits made while a cycle is active only take effect on the next
/// cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub show_duration: Duration,
    pub hide_duration: Duration,
    pub display_time: Duration,
    pub auto_hide: bool,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            show_duration: Duration::from_millis(300),
            hide_duration: Duration::from_millis(300),
            display_time: Duration::from_secs(3),
            auto_hide: true,
        }
    }
}

/// Where the banner is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed or fully dismissed; nothing on screen, no host held.
    Idle,
    /// Entry animation running.
    Showing { since: Instant },
    /// Resting on screen at the identity transform.
    Visible { since: Instant },
    /// Exit animation running.
    Hiding { since: Instant },
}

/// Transition reported by [`Lifecycle::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    None,
    /// Entry animation finished; the banner rests on screen.
    BecameVisible,
    /// Exit animation finished; the host must be released.
    Dismissed,
}

/// The show/hide state machine for a single toast.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
    timings: Timings,
    /// Deadline for a scheduled exit, armed by auto-hide or an explicit
    /// delayed hide. Earliest request wins.
    hide_at: Option<Instant>,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            timings: Timings::default(),
            hide_at: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// The instant a scheduled exit will begin, if one is armed.
    #[must_use]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// True from show acceptance until dismissal; the host exists iff this
    /// holds.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    /// True while the banner rests at the identity transform and accepts
    /// taps.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, Phase::Visible { .. })
    }

    /// True while an animation phase needs frame-cadence ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Showing { .. } | Phase::Hiding { .. })
    }

    /// Begins a show cycle. Returns false while a cycle is already active;
    /// a duplicate show never restarts animations or timers.
    pub fn show(&mut self, now: Instant, timings: Timings) -> bool {
        if self.is_active() {
            return false;
        }
        self.timings = timings;
        self.hide_at = None;
        self.phase = Phase::Showing { since: now };
        true
    }

    /// Requests an exit after `delay`. Returns false when the request is
    /// redundant (already hiding, or nothing shown).
    ///
    /// A zero delay while visible begins the exit synchronously. A request
    /// during the entry animation is deferred until the banner is visible,
    /// preserving the ordering contract.
    pub fn request_hide(&mut self, now: Instant, delay: Duration) -> bool {
        match self.phase {
            Phase::Idle | Phase::Hiding { .. } => false,
            Phase::Visible { .. } if delay.is_zero() => {
                self.begin_hiding(now);
                true
            }
            Phase::Visible { .. } | Phase::Showing { .. } => {
                self.arm_hide_at(now, delay);
                true
            }
        }
    }

    /// Drives the machine forward to `now`, reporting at most one
    /// transition.
    pub fn advance(&mut self, now: Instant) -> Step {
        match self.phase {
            Phase::Idle => Step::None,
            Phase::Showing { since } => {
                if now.saturating_duration_since(since) < self.timings.show_duration {
                    return Step::None;
                }
                self.phase = Phase::Visible { since: now };
                if self.timings.auto_hide {
                    self.arm_hide_at(now, self.timings.display_time);
                }
                Step::BecameVisible
            }
            Phase::Visible { .. } => {
                match self.hide_at {
                    Some(deadline) if now >= deadline => self.begin_hiding(now),
                    _ => {}
                }
                Step::None
            }
            Phase::Hiding { since } => {
                if now.saturating_duration_since(since) < self.timings.hide_duration {
                    return Step::None;
                }
                self.phase = Phase::Idle;
                self.hide_at = None;
                Step::Dismissed
            }
        }
    }

    /// Distance from the resting position as a fraction of the slide:
    /// `1.0` fully off-screen, `0.0` at the identity transform.
    ///
    /// The entry decelerates and the exit accelerates.
    #[must_use]
    pub fn offset_factor(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Idle => 1.0,
            Phase::Showing { since } => {
                1.0 - Easing::EaseOut.apply(progress(since, self.timings.show_duration, now))
            }
            Phase::Visible { .. } => 0.0,
            Phase::Hiding { since } => {
                Easing::EaseIn.apply(progress(since, self.timings.hide_duration, now))
            }
        }
    }

    /// Arms or tightens the exit deadline to `delay` past `now`. A deadline
    /// too far ahead for the clock to represent could never fire, so it
    /// leaves the armed deadline untouched.
    fn arm_hide_at(&mut self, now: Instant, delay: Duration) {
        let Some(requested) = now.checked_add(delay) else {
            return;
        };
        self.hide_at = Some(match self.hide_at {
            Some(existing) => existing.min(requested),
            None => requested,
        });
    }

    fn begin_hiding(&mut self, now: Instant) {
        self.hide_at = None;
        self.phase = Phase::Hiding { since: now };
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

fn progress(since: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(since);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
