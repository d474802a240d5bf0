//! Errors from reading lint configuration.
//!
//! Malformed commit messages are never errors; they are reported as
//! [`Diagnostic`][crate::Diagnostic]s.

use std::fmt;

/// The error returned when a configuration name is not recognized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,

    input: Option<String>,
}

impl Error {
    /// Create a new error from a `ErrorKind`.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind, input: None }
    }

    pub(crate) fn set_input(mut self, input: &str) -> Self {
        self.input = Some(input.to_owned());
        self
    }

    /// The kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The text that failed to parse, if known.
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)?;
        if let Some(input) = &self.input {
            write!(f, ": {input:?}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

/// All possible error kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The name is not one of the supported severities.
    UnknownSeverity,

    /// The name is not one of the diagnostic codes.
    UnknownCode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnknownSeverity => f.write_str("unknown severity"),
            ErrorKind::UnknownCode => f.write_str("unknown diagnostic code"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_includes_input() {
        let err = Error::new(ErrorKind::UnknownCode).set_input("no-such-rule");
        assert_eq!(err.to_string(), r#"unknown diagnostic code: "no-such-rule""#);
        assert_eq!(err.input(), Some("no-such-rule"));
        assert_eq!(err.kind(), ErrorKind::UnknownCode);
    }

    #[test]
    fn display_without_input() {
        let err = Error::new(ErrorKind::UnknownSeverity);
        assert_eq!(err.to_string(), "unknown severity");
        assert_eq!(err.input(), None);
    }
}
