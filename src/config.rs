//! Persisted toast defaults, loaded from and saved to a `toast.toml` file.
//!
//! Every field is optional; missing fields keep the built-in defaults, and a
//! missing or unparseable file behaves like an empty one. A file that exists
//! but cannot be read reports an [`Error::Io`](crate::Error). Applications
//! embedding the crate usually point the `_from_path` variants at their own
//! configuration directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Defaults};
//! use std::path::PathBuf;
//!
//! // Load existing defaults
//! let mut defaults = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! defaults.display_seconds = Some(1.5);
//!
//! // Save the modified defaults
//! config::save(&defaults).expect("Failed to save defaults");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./toast.toml");
//! config::save_to_path(&defaults, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.display_seconds, Some(1.5));
//! ```

use crate::error::Result;
use crate::style::{Position, TextAlignment, ToastStyle};
use crate::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toast.toml";
const APP_NAME: &str = "iced_toast";

/// Persisted overrides for the built-in toast defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub theme: Option<ThemeMode>,
    #[serde(default)]
    pub auto_hide: Option<bool>,
    #[serde(default)]
    pub hide_on_tap: Option<bool>,
    #[serde(default)]
    pub display_seconds: Option<f32>,
    #[serde(default)]
    pub show_seconds: Option<f32>,
    #[serde(default)]
    pub hide_seconds: Option<f32>,
    #[serde(default)]
    pub text_alignment: Option<TextAlignment>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            position: Some(Position::Top),
            theme: Some(ThemeMode::System),
            auto_hide: Some(true),
            hide_on_tap: Some(true),
            display_seconds: None,
            show_seconds: None,
            hide_seconds: None,
            text_alignment: Some(TextAlignment::Center),
        }
    }
}

impl Defaults {
    /// Builds a style with these defaults applied over the built-ins.
    #[must_use]
    pub fn style(&self) -> ToastStyle {
        let mut style = ToastStyle::default();
        self.apply(&mut style);
        style
    }

    /// Applies the persisted fields onto an existing style. Absent or
    /// invalid duration values keep what the style already has.
    pub fn apply(&self, style: &mut ToastStyle) {
        if let Some(auto_hide) = self.auto_hide {
            style.auto_hide = auto_hide;
        }
        if let Some(hide_on_tap) = self.hide_on_tap {
            style.hide_on_tap = hide_on_tap;
        }
        if let Some(alignment) = self.text_alignment {
            style.text_alignment = alignment;
        }
        if let Some(duration) = self.display_seconds.and_then(seconds) {
            style.display_time = duration;
        }
        if let Some(duration) = self.show_seconds.and_then(seconds) {
            style.show_animation_duration = duration;
        }
        if let Some(duration) = self.hide_seconds.and_then(seconds) {
            style.hide_animation_duration = duration;
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position.unwrap_or_default()
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme.unwrap_or_default()
    }
}

// Rejects NaN, negative, and values too large for a Duration alike.
fn seconds(value: f32) -> Option<Duration> {
    Duration::try_from_secs_f32(value).ok()
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Defaults> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Defaults::default())
}

pub fn save(defaults: &Defaults) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(defaults, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Defaults> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(defaults: &Defaults, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(defaults)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let defaults = Defaults {
            position: Some(Position::Bottom),
            theme: Some(ThemeMode::Dark),
            auto_hide: Some(false),
            hide_on_tap: Some(false),
            display_seconds: Some(1.5),
            show_seconds: Some(0.2),
            hide_seconds: Some(0.25),
            text_alignment: Some(TextAlignment::Left),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toast.toml");

        save_to_path(&defaults, &config_path).expect("failed to save defaults");
        let loaded = load_from_path(&config_path).expect("failed to load defaults");

        assert_eq!(loaded, defaults);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toast.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Defaults::default());
    }

    #[test]
    fn unreadable_file_reports_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        // The path exists but is a directory, so the read itself fails
        let result = load_from_path(temp_dir.path());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("toast.toml");

        save_to_path(&Defaults::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn apply_overrides_only_present_fields() {
        let defaults = Defaults {
            position: None,
            theme: None,
            auto_hide: Some(false),
            hide_on_tap: None,
            display_seconds: Some(1.0),
            show_seconds: None,
            hide_seconds: None,
            text_alignment: None,
        };

        let style = defaults.style();
        assert!(!style.auto_hide);
        assert!(style.hide_on_tap);
        assert_eq!(style.display_time, Duration::from_secs(1));
        assert_eq!(
            style.show_animation_duration,
            ToastStyle::DEFAULT_ANIMATION_DURATION
        );
    }

    #[test]
    fn invalid_durations_are_ignored() {
        let defaults = Defaults {
            display_seconds: Some(-2.0),
            show_seconds: Some(f32::NAN),
            ..Defaults::default()
        };

        let style = defaults.style();
        assert_eq!(style.display_time, ToastStyle::DEFAULT_DISPLAY_TIME);
        assert_eq!(
            style.show_animation_duration,
            ToastStyle::DEFAULT_ANIMATION_DURATION
        );
    }

    #[test]
    fn oversized_durations_are_ignored() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toast.toml");
        // Finite, positive, and far past what a Duration can hold
        fs::write(&config_path, "display_seconds = 1e30").expect("failed to write defaults");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.display_seconds, Some(1e30));

        let style = loaded.style();
        assert_eq!(style.display_time, ToastStyle::DEFAULT_DISPLAY_TIME);
    }

    #[test]
    fn accessors_fall_back_to_built_ins() {
        let empty = Defaults {
            position: None,
            theme: None,
            ..Defaults::default()
        };
        assert_eq!(empty.position(), Position::Top);
        assert_eq!(empty.theme(), ThemeMode::System);
    }
}
