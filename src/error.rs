// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures surfaced by the crate.
///
/// The banner lifecycle itself degrades silently and never returns one of
/// these; only the persisted defaults file can fail in a reportable way.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(message) => write!(f, "I/O Error: {message}"),
            Error::Config(message) => write!(f, "Config Error: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io(source.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::Config(source.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::Config(source.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_error_kind() {
        let io = Error::Io("defaults file unreadable".into());
        assert_eq!(io.to_string(), "I/O Error: defaults file unreadable");

        let config = Error::Config("display_seconds: invalid number".into());
        assert_eq!(
            config.to_string(),
            "Config Error: display_seconds: invalid number"
        );
    }

    #[test]
    fn io_errors_carry_their_message() {
        let source = std::io::Error::other("device gone");
        let err: Error = source.into();
        match err {
            Error::Io(message) => assert!(message.contains("device gone")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let parse_error = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
