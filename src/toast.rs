// SPDX-License-Identifier: MPL-2.0
//! The toast entity and its component surface.
//!
//! A [`Toast`] owns its immutable [`ToastConfig`], its mutable
//! [`ToastStyle`], the lifecycle state machine, and at most one
//! [`OverlayHost`] while a cycle is active. The host application drives it
//! in the usual component shape: route [`Message`]s into [`Toast::update`],
//! compose [`Toast::view`] above its content (layer strategy) or into the
//! overlay window (window strategy), and merge [`Toast::subscription`].

use std::fmt;
use std::time::{Duration, Instant};

use iced::widget::image;
use iced::window;
use iced::{Element, Subscription, Task};
use log::{debug, trace};

use crate::design_tokens::{sizing, spacing, typography};
use crate::haptics::{FeedbackKind, Haptics, NoHaptics};
use crate::host::{self, HostStrategy, OverlayHost};
use crate::lifecycle::{Lifecycle, Phase, Step, Timings};
use crate::style::{Position, ToastStyle};
use crate::theming::Appearance;
use crate::widget;

/// Frame cadence while a slide animation runs.
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Coarse cadence while only a hide deadline is pending.
const DEADLINE_TICK: Duration = Duration::from_millis(100);

/// Immutable content and placement of a toast, set at construction.
#[derive(Debug, Clone)]
pub struct ToastConfig {
    pub(crate) title: String,
    pub(crate) title_size: f32,
    pub(crate) subtitle: Option<String>,
    pub(crate) subtitle_size: f32,
    pub(crate) icon: Option<image::Handle>,
    pub(crate) icon_spacing: f32,
    pub(crate) position: Position,
}

impl ToastConfig {
    /// Creates a configuration for the given title. The title is required;
    /// everything else has a default.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_size: typography::TITLE,
            subtitle: None,
            subtitle_size: typography::SUBTITLE,
            icon: None,
            icon_spacing: spacing::MD,
            position: Position::default(),
        }
    }

    #[must_use]
    pub fn title_size(mut self, size: f32) -> Self {
        self.title_size = size;
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn subtitle_size(mut self, size: f32) -> Self {
        self.subtitle_size = size;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: image::Handle) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn icon_spacing(mut self, spacing: f32) -> Self {
        self.icon_spacing = spacing;
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn get_position(&self) -> Position {
        self.position
    }
}

/// Messages the host application routes into [`Toast::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation/timer tick from [`Toast::subscription`].
    Tick(Instant),
    /// The banner surface was pressed.
    Pressed,
    /// The dedicated overlay window finished opening.
    HostOpened(window::Id),
}

/// Transition signal reported back to the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The entry animation finished; the banner rests on screen.
    Shown,
    /// The banner was tapped. Emitted exactly once per tap, whether or not
    /// the tap also begins the exit.
    Tapped,
    /// The exit animation finished and the host was released.
    Hidden,
}

/// A transient notification banner.
pub struct Toast {
    config: ToastConfig,
    style: ToastStyle,
    lifecycle: Lifecycle,
    strategy: HostStrategy,
    host: Option<OverlayHost>,
    appearance: Appearance,
    haptics: Box<dyn Haptics>,
    /// Last instant observed through a tick; the view renders against it.
    now: Instant,
}

impl Toast {
    /// Creates an idle toast. The initial appearance is detected from the
    /// system; afterwards the toast only reacts to [`Toast::set_appearance`].
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            style: ToastStyle::default(),
            lifecycle: Lifecycle::new(),
            strategy: HostStrategy::default(),
            host: None,
            appearance: Appearance::detect(),
            haptics: Box::new(NoHaptics),
            now: Instant::now(),
        }
    }

    /// Selects how the toast acquires its overlay surface.
    #[must_use]
    pub fn with_strategy(mut self, strategy: HostStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Injects the haptic capability used by [`Toast::show_with_feedback`].
    #[must_use]
    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> &ToastStyle {
        &self.style
    }

    /// Mutable access to the style. Visual fields apply on the next frame;
    /// timing fields are snapshotted per cycle and apply to the next show.
    pub fn style_mut(&mut self) -> &mut ToastStyle {
        &mut self.style
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// True from show acceptance until the exit completes.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// The host currently held, if any. Present iff the toast is shown or
    /// animating.
    #[must_use]
    pub fn host(&self) -> Option<OverlayHost> {
        self.host
    }

    /// The instant a scheduled exit will begin, if one is armed.
    #[must_use]
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.lifecycle.hide_deadline()
    }

    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Applies an appearance change signalled by the host environment.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        if self.appearance != appearance {
            trace!("appearance changed to {appearance:?}");
            self.appearance = appearance;
        }
    }

    /// The banner's current vertical offset from its resting position, in
    /// logical pixels. Zero while resting; negative above the screen for
    /// top-positioned toasts, positive below for bottom-positioned ones.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.config.position.direction()
            * sizing::SLIDE_DISTANCE
            * self.lifecycle.offset_factor(self.now)
    }

    /// Begins a show cycle: acquires the host and starts the entry
    /// animation. A duplicate call while shown or animating is a no-op.
    pub fn show(&mut self) -> Task<Message> {
        self.start_show(Instant::now())
    }

    /// Like [`Toast::show`], pulsing the injected haptic capability first.
    /// The pulse fires before the entry begins, also when the show is then
    /// dropped as a duplicate.
    pub fn show_with_feedback(&mut self, kind: FeedbackKind) -> Task<Message> {
        self.haptics.pulse(kind);
        self.start_show(Instant::now())
    }

    /// Requests an exit right away. Redundant while hiding or idle.
    pub fn hide(&mut self) {
        self.hide_after(Duration::ZERO);
    }

    /// Requests an exit after `delay`. The earliest pending deadline wins;
    /// a request during the entry is deferred until the banner is visible.
    pub fn hide_after(&mut self, delay: Duration) {
        if self.lifecycle.request_hide(Instant::now(), delay) {
            debug!("hide scheduled in {delay:?}");
        } else {
            debug!("hide ignored; banner is {:?}", self.lifecycle.phase());
        }
    }

    /// Drives the lifecycle and reports the resulting transition.
    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Tick(now) => {
                self.now = now;
                match self.lifecycle.advance(now) {
                    Step::None => (Event::None, Task::none()),
                    Step::BecameVisible => {
                        debug!("banner visible");
                        (Event::Shown, Task::none())
                    }
                    Step::Dismissed => {
                        debug!("banner dismissed");
                        let release = match self.host.take() {
                            Some(host) => host::release(host),
                            None => Task::none(),
                        };
                        (Event::Hidden, release)
                    }
                }
            }
            Message::Pressed => self.handle_press(),
            Message::HostOpened(id) => {
                trace!("overlay window {id:?} reported open");
                (Event::None, Task::none())
            }
        }
    }

    /// The banner element, or `None` while detached.
    ///
    /// Layer strategy: compose this as the top layer of the application's
    /// widget stack. Window strategy: render it as the content of the
    /// overlay window identified by [`OverlayHost::window_id`].
    #[must_use]
    pub fn view(&self) -> Option<Element<'_, Message>> {
        if self.lifecycle.is_idle() {
            return None;
        }
        let banner = widget::banner(&self.config, &self.style, self.appearance);
        Some(widget::positioned(
            banner,
            self.config.position,
            self.offset(),
        ))
    }

    /// Ticks at frame cadence while animating, coarsely while a hide
    /// deadline is pending, and not at all otherwise.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.lifecycle.is_animating() {
            iced::time::every(ANIMATION_TICK).map(Message::Tick)
        } else if self.lifecycle.is_interactive() && self.lifecycle.hide_deadline().is_some() {
            iced::time::every(DEADLINE_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn start_show(&mut self, now: Instant) -> Task<Message> {
        if self.lifecycle.is_active() {
            debug!("show ignored; banner already {:?}", self.lifecycle.phase());
            return Task::none();
        }

        let timings = Timings {
            show_duration: self.style.show_animation_duration,
            hide_duration: self.style.hide_animation_duration,
            display_time: self.style.display_time,
            auto_hide: self.style.auto_hide,
        };
        let (acquired, open) = host::acquire(self.strategy, self.config.position);
        self.host = Some(acquired);
        let accepted = self.lifecycle.show(now, timings);
        debug_assert!(accepted);
        self.now = now;
        debug!(
            "show accepted; strategy {:?}, position {:?}",
            self.strategy, self.config.position
        );
        open.map(Message::HostOpened)
    }

    fn handle_press(&mut self) -> (Event, Task<Message>) {
        if self.lifecycle.is_idle() {
            // Stale press delivered after dismissal
            return (Event::None, Task::none());
        }

        if self.style.hide_on_tap {
            let _ = self.lifecycle.request_hide(self.now, Duration::ZERO);
        }
        debug!("banner tapped (hide_on_tap: {})", self.style.hide_on_tap);
        (Event::Tapped, Task::none())
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("config", &self.config)
            .field("style", &self.style)
            .field("phase", &self.lifecycle.phase())
            .field("strategy", &self.strategy)
            .field("host", &self.host)
            .field("appearance", &self.appearance)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn config() -> ToastConfig {
        ToastConfig::new("Saved").subtitle("All changes written")
    }

    fn tick(toast: &mut Toast, at: Instant) -> Event {
        toast.update(Message::Tick(at)).0
    }

    /// Runs the entry animation to completion, returning the instant the
    /// banner became visible.
    fn make_visible(toast: &mut Toast) -> Instant {
        let _ = toast.show();
        let visible_at = Instant::now() + toast.style().show_animation_duration * 2;
        assert_eq!(tick(toast, visible_at), Event::Shown);
        visible_at
    }

    #[derive(Clone, Default)]
    struct RecordingHaptics {
        pulses: Rc<RefCell<Vec<FeedbackKind>>>,
    }

    impl Haptics for RecordingHaptics {
        fn pulse(&self, kind: FeedbackKind) {
            self.pulses.borrow_mut().push(kind);
        }
    }

    #[test]
    fn new_toast_is_detached() {
        let toast = Toast::new(config());
        assert!(!toast.is_shown());
        assert!(toast.view().is_none());
        assert_eq!(toast.host(), None);
    }

    #[test]
    fn config_builder_fills_in_banner_defaults() {
        let config = ToastConfig::new("Title");
        assert_eq!(config.title(), "Title");
        assert_eq!(config.get_position(), Position::Top);
        assert_eq!(config.title_size, typography::TITLE);
        assert_eq!(config.icon_spacing, spacing::MD);
        assert!(config.subtitle.is_none());
        assert!(config.icon.is_none());
    }

    #[test]
    fn show_acquires_a_layer_host_and_starts_off_screen() {
        let mut toast = Toast::new(config());
        let _ = toast.show();

        assert!(toast.is_shown());
        assert_eq!(toast.host(), Some(OverlayHost::Layer));
        assert!(toast.view().is_some());
        // Top position starts fully above the screen
        assert_eq!(toast.offset(), -sizing::SLIDE_DISTANCE);
    }

    #[test]
    fn duplicate_show_keeps_the_existing_cycle() {
        let mut toast = Toast::new(config()).with_strategy(HostStrategy::Window);
        let _ = toast.show();
        let host = toast.host();
        let phase = toast.phase();

        let _ = toast.show();
        assert_eq!(toast.host(), host);
        assert_eq!(toast.phase(), phase);
    }

    #[test]
    fn entry_completion_reports_shown_and_rests_at_identity() {
        let mut toast = Toast::new(config());
        make_visible(&mut toast);

        assert!(matches!(toast.phase(), Phase::Visible { .. }));
        assert_eq!(toast.offset(), 0.0);
    }

    #[test]
    fn auto_hide_deadline_is_measured_from_visible_entry() {
        let mut toast = Toast::new(config());
        toast.style_mut().display_time = Duration::from_secs(2);
        let visible_at = make_visible(&mut toast);

        assert_eq!(
            toast.hide_deadline(),
            Some(visible_at + Duration::from_secs(2))
        );

        // Exit has not begun just before the deadline
        tick(&mut toast, visible_at + Duration::from_millis(1999));
        assert!(matches!(toast.phase(), Phase::Visible { .. }));

        tick(&mut toast, visible_at + Duration::from_secs(2));
        assert!(matches!(toast.phase(), Phase::Hiding { .. }));
    }

    #[test]
    fn disabling_auto_hide_leaves_the_banner_resting() {
        let mut toast = Toast::new(config());
        toast.style_mut().auto_hide = false;
        let visible_at = make_visible(&mut toast);

        assert_eq!(toast.hide_deadline(), None);
        tick(&mut toast, visible_at + Duration::from_secs(3600));
        assert!(matches!(toast.phase(), Phase::Visible { .. }));
    }

    #[test]
    fn timing_edits_during_a_cycle_apply_to_the_next_one() {
        let mut toast = Toast::new(config());
        toast.style_mut().display_time = Duration::from_secs(2);
        let visible_at = make_visible(&mut toast);

        // Mid-cycle edit must not move the armed deadline
        toast.style_mut().display_time = Duration::from_secs(30);
        assert_eq!(
            toast.hide_deadline(),
            Some(visible_at + Duration::from_secs(2))
        );
    }

    #[test]
    fn tap_hides_and_signals_exactly_once() {
        let mut toast = Toast::new(config());
        make_visible(&mut toast);

        let (event, _) = toast.update(Message::Pressed);
        assert_eq!(event, Event::Tapped);
        assert!(matches!(toast.phase(), Phase::Hiding { .. }));
    }

    #[test]
    fn tap_without_hide_on_tap_signals_but_keeps_state() {
        let mut toast = Toast::new(config());
        toast.style_mut().hide_on_tap = false;
        make_visible(&mut toast);

        let (event, _) = toast.update(Message::Pressed);
        assert_eq!(event, Event::Tapped);
        assert!(matches!(toast.phase(), Phase::Visible { .. }));
        assert!(toast.hide_deadline().is_some());
    }

    #[test]
    fn press_while_detached_is_ignored() {
        let mut toast = Toast::new(config());
        let (event, _) = toast.update(Message::Pressed);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn full_cycle_releases_the_host_and_allows_a_fresh_show() {
        let mut toast = Toast::new(config());
        let visible_at = make_visible(&mut toast);

        toast.hide();
        let exit_done = visible_at + toast.style().hide_animation_duration * 2;
        assert_eq!(tick(&mut toast, exit_done), Event::Hidden);

        assert!(!toast.is_shown());
        assert_eq!(toast.host(), None);
        assert!(toast.view().is_none());
        assert_eq!(toast.offset(), -sizing::SLIDE_DISTANCE);

        let _ = toast.show();
        assert!(toast.is_shown());
        assert_eq!(toast.host(), Some(OverlayHost::Layer));
    }

    #[test]
    fn bottom_position_slides_from_below() {
        let mut toast = Toast::new(ToastConfig::new("Moved").position(Position::Bottom));
        let _ = toast.show();
        assert_eq!(toast.offset(), sizing::SLIDE_DISTANCE);

        make_visible(&mut toast);
        // Identity is identical for both edges
        assert_eq!(toast.offset(), 0.0);
    }

    #[test]
    fn feedback_pulses_before_the_entry_begins() {
        let recorder = RecordingHaptics::default();
        let mut toast = Toast::new(config()).with_haptics(recorder.clone());

        let _ = toast.show_with_feedback(FeedbackKind::Success);
        assert_eq!(*recorder.pulses.borrow(), vec![FeedbackKind::Success]);
        assert!(toast.is_shown());

        // A duplicate show still pulses but never restarts the cycle
        let phase = toast.phase();
        let _ = toast.show_with_feedback(FeedbackKind::Error);
        assert_eq!(recorder.pulses.borrow().len(), 2);
        assert_eq!(toast.phase(), phase);
    }

    #[test]
    fn appearance_changes_only_when_different() {
        let mut toast = Toast::new(config());
        toast.set_appearance(Appearance::Dark);
        assert_eq!(toast.appearance(), Appearance::Dark);
        toast.set_appearance(Appearance::Dark);
        assert_eq!(toast.appearance(), Appearance::Dark);
        toast.set_appearance(Appearance::Light);
        assert_eq!(toast.appearance(), Appearance::Light);
    }

    #[test]
    fn hide_during_entry_is_deferred_until_visible() {
        let mut toast = Toast::new(config());
        let _ = toast.show();
        toast.hide();

        // Entry still running
        assert!(matches!(toast.phase(), Phase::Showing { .. }));

        let visible_at = Instant::now() + toast.style().show_animation_duration * 2;
        assert_eq!(tick(&mut toast, visible_at), Event::Shown);
        tick(&mut toast, visible_at + Duration::from_millis(1));
        assert!(matches!(toast.phase(), Phase::Hiding { .. }));
    }
}
