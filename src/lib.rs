// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a transient notification banner for the Iced GUI
//! framework.
//!
//! A [`Toast`] slides in from the top or bottom screen edge and slides back
//! out after a configurable display time, on tap, or on request. It renders
//! as a layer of the application's own widget stack or inside a dedicated
//! always-on-top overlay window, and follows the light/dark appearance the
//! host environment reports.
//!
//! ```no_run
//! use iced_toast::{Toast, ToastConfig};
//!
//! let mut toast = Toast::new(
//!     ToastConfig::new("Saved").subtitle("All changes written"),
//! );
//! let _task = toast.show();
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toast/0.2.0")]

pub mod config;
pub mod design_tokens;
pub mod easing;
pub mod error;
pub mod haptics;
pub mod host;
pub mod lifecycle;
pub mod style;
pub mod theming;
pub mod toast;
pub mod widget;

pub use error::{Error, Result};
pub use haptics::{FeedbackKind, Haptics, NoHaptics};
pub use host::{HostStrategy, OverlayHost};
pub use lifecycle::Phase;
pub use style::{Position, TextAlignment, ToastStyle};
pub use theming::{Appearance, ThemeMode};
pub use toast::{Event, Message, Toast, ToastConfig};
