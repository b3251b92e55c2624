// SPDX-License-Identifier: MPL-2.0
//! Banner styling and the small shared vocabulary enums.
//!
//! [`ToastStyle`] is the mutable half of a toast: everything here may be
//! changed between show cycles. Timing fields are snapshotted when a show is
//! accepted, so edits during an active cycle apply to the next one.

use crate::design_tokens::palette;
use crate::theming::Appearance;
use iced::alignment;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Horizontal alignment of the title and subtitle text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlignment {
    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            TextAlignment::Left => alignment::Horizontal::Left,
            TextAlignment::Center => alignment::Horizontal::Center,
            TextAlignment::Right => alignment::Horizontal::Right,
        }
    }
}

/// Screen edge the banner rests against and slides from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

impl Position {
    /// Sign applied to the slide offset. Negative points above the screen,
    /// positive below; the resting transform is identical for both edges.
    #[must_use]
    pub fn direction(self) -> f32 {
        match self {
            Position::Top => -1.0,
            Position::Bottom => 1.0,
        }
    }
}

/// Mutable visual and timing properties of a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastStyle {
    pub title_color: Color,
    pub subtitle_color: Color,
    /// Background used under a light appearance.
    pub light_background: Color,
    /// Background used under a dark appearance.
    pub dark_background: Color,
    pub show_animation_duration: Duration,
    pub hide_animation_duration: Duration,
    /// How long the banner rests on screen once fully visible.
    pub display_time: Duration,
    /// Schedule the exit automatically once `display_time` elapses.
    pub auto_hide: bool,
    /// A tap on the banner begins the exit immediately.
    pub hide_on_tap: bool,
    pub text_alignment: TextAlignment,
}

impl ToastStyle {
    pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);
    pub const DEFAULT_DISPLAY_TIME: Duration = Duration::from_secs(3);

    /// Resolves the banner background for the given appearance.
    #[must_use]
    pub fn background(&self, appearance: Appearance) -> Color {
        if appearance.is_dark() {
            self.dark_background
        } else {
            self.light_background
        }
    }
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            title_color: palette::BLACK,
            subtitle_color: palette::GRAY_700,
            light_background: palette::BANNER_LIGHT,
            dark_background: palette::BANNER_DARK,
            show_animation_duration: Self::DEFAULT_ANIMATION_DURATION,
            hide_animation_duration: Self::DEFAULT_ANIMATION_DURATION,
            display_time: Self::DEFAULT_DISPLAY_TIME,
            auto_hide: true,
            hide_on_tap: true,
            text_alignment: TextAlignment::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_banner_contract() {
        let style = ToastStyle::default();
        assert!(style.auto_hide);
        assert!(style.hide_on_tap);
        assert_eq!(
            style.show_animation_duration,
            ToastStyle::DEFAULT_ANIMATION_DURATION
        );
        assert_eq!(
            style.hide_animation_duration,
            ToastStyle::DEFAULT_ANIMATION_DURATION
        );
        assert_eq!(style.text_alignment, TextAlignment::Center);
    }

    #[test]
    fn background_follows_appearance() {
        let style = ToastStyle::default();
        assert_eq!(style.background(Appearance::Light), style.light_background);
        assert_eq!(style.background(Appearance::Dark), style.dark_background);
    }

    #[test]
    fn positions_slide_in_opposite_directions() {
        assert_eq!(Position::Top.direction(), -1.0);
        assert_eq!(Position::Bottom.direction(), 1.0);
    }

    #[test]
    fn alignment_maps_onto_iced() {
        assert_eq!(
            TextAlignment::Left.horizontal(),
            alignment::Horizontal::Left
        );
        assert_eq!(
            TextAlignment::Right.horizontal(),
            alignment::Horizontal::Right
        );
    }
}
