// SPDX-License-Identifier: MPL-2.0
//! Overlay host acquisition and release.
//!
//! A toast renders either as the top layer of the application's own widget
//! stack or inside a dedicated always-on-top window opened for the duration
//! of one show cycle. The host is acquired exactly once per cycle and fully
//! released when the exit animation completes.

use iced::window;
use iced::{Point, Size, Task};
use log::debug;

use crate::design_tokens::sizing;
use crate::style::Position;

/// How a toast acquires the surface it renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostStrategy {
    /// Render as the top layer of the application's widget stack. The
    /// banner cannot rise above other OS windows, but needs no windowing
    /// support beyond the application's own surface.
    #[default]
    Layer,
    /// Open a dedicated always-on-top window per show cycle, closed again
    /// on dismissal.
    Window,
}

/// The surface a shown toast is attached to.
///
/// Held from show acceptance until hide completion and never shared between
/// toasts; each owns its host exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHost {
    Layer,
    Window { id: window::Id },
}

impl OverlayHost {
    /// The dedicated window backing this host, when one exists.
    #[must_use]
    pub fn window_id(&self) -> Option<window::Id> {
        match self {
            OverlayHost::Layer => None,
            OverlayHost::Window { id } => Some(*id),
        }
    }
}

/// Settings for the dedicated overlay window: an undecorated, transparent,
/// always-on-top strip hugging the chosen screen edge, centered
/// horizontally. The strip is sized to the banner's footprint, so pointer
/// input elsewhere on screen never reaches the overlay.
#[must_use]
pub fn overlay_window_settings(position: Position) -> window::Settings {
    window::Settings {
        size: Size::new(sizing::OVERLAY_STRIP_WIDTH, sizing::OVERLAY_STRIP_HEIGHT),
        position: window::Position::SpecificWith(match position {
            Position::Top => top_center,
            Position::Bottom => bottom_center,
        }),
        visible: true,
        resizable: false,
        decorations: false,
        transparent: true,
        level: window::Level::AlwaysOnTop,
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

fn top_center(window: Size, monitor: Size) -> Point {
    Point::new((monitor.width - window.width) / 2.0, 0.0)
}

fn bottom_center(window: Size, monitor: Size) -> Point {
    Point::new(
        (monitor.width - window.width) / 2.0,
        monitor.height - window.height,
    )
}

/// Acquires a host for one show cycle. For the window strategy the returned
/// task performs the actual open; the id is valid immediately.
pub(crate) fn acquire(strategy: HostStrategy, position: Position) -> (OverlayHost, Task<window::Id>) {
    match strategy {
        HostStrategy::Layer => (OverlayHost::Layer, Task::none()),
        HostStrategy::Window => {
            let (id, open) = window::open(overlay_window_settings(position));
            debug!("opening overlay window {id:?}");
            (OverlayHost::Window { id }, open)
        }
    }
}

/// Releases a host at the end of a cycle, tearing the window down for the
/// window strategy.
pub(crate) fn release<Message: Send + 'static>(host: OverlayHost) -> Task<Message> {
    match host {
        OverlayHost::Layer => Task::none(),
        OverlayHost::Window { id } => {
            debug!("closing overlay window {id:?}");
            window::close(id)
        }
    }
}
