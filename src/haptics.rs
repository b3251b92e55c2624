// SPDX-License-Identifier: MPL-2.0
//! Haptic feedback capability.
//!
//! Desktop targets usually have no haptic hardware, so the capability is a
//! trait the host environment injects; the pulse fires immediately before the
//! entry transition begins.

/// The kind of pulse requested alongside a show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
}

/// Produces a physical pulse on hosts that support one.
pub trait Haptics {
    fn pulse(&self, kind: FeedbackKind);
}

/// Silent default used when the host injects nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&self, _kind: FeedbackKind) {}
}
