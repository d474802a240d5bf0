//! Reports of Conventional Commit violations.

use std::fmt;
use std::str::FromStr;

use crate::{Error, ErrorKind, Range};

/// A located violation of the Conventional Commit header or footer grammar.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic<'a> {
    range: Range,
    kind: DiagnosticKind<'a>,
}

impl<'a> Diagnostic<'a> {
    /// Piece together a diagnostic.
    pub const fn new(range: Range, kind: DiagnosticKind<'a>) -> Self {
        Self { range, kind }
    }

    /// Where the violation is.
    pub const fn range(&self) -> Range {
        self.range
    }

    /// What the violation is.
    pub const fn kind(&self) -> &DiagnosticKind<'a> {
        &self.kind
    }

    /// The stable identifier of the violation.
    pub fn code(&self) -> DiagnosticCode {
        self.kind.code()
    }

    /// Values interpolated into the message, in order.
    pub fn args(&self) -> Vec<&'a str> {
        match self.kind {
            DiagnosticKind::ExtraCharactersAfterScope(extra) => vec![extra],
            _ => Vec::new(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.range.start;
        write!(
            f,
            "{}:{}: {} [{}]",
            start.line + 1,
            start.character + 1,
            self.kind,
            self.code()
        )
    }
}

/// The kinds of header violations.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DiagnosticKind<'a> {
    /// The header has no `type(scope): ` prefix, e.g. `description`.
    NoTypeScope,

    /// A `(` without a `)` after it, e.g. `type(scope: description`.
    UnmatchedLeftParen,

    /// A `)` without a `(` before it, e.g. `typescope): description`.
    UnmatchedRightParen,

    /// Text between the scope's `)` and the separator, e.g. `bla` in
    /// `type(scope)bla: description`.
    ExtraCharactersAfterScope(&'a str),

    /// Nothing before the scope or separator, e.g. `(scope): description`.
    EmptyType,

    /// Nothing between the parentheses, e.g. `type(): description`.
    EmptyScope,

    /// Nothing after the separator, e.g. `type(scope):`.
    EmptyDescription,
}

impl DiagnosticKind<'_> {
    /// The stable identifier of this kind.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            DiagnosticKind::NoTypeScope => DiagnosticCode::NoTypeScope,
            DiagnosticKind::UnmatchedLeftParen => DiagnosticCode::UnmatchedLeftParen,
            DiagnosticKind::UnmatchedRightParen => DiagnosticCode::UnmatchedRightParen,
            DiagnosticKind::ExtraCharactersAfterScope(_) => {
                DiagnosticCode::ExtraCharactersAfterScope
            }
            DiagnosticKind::EmptyType => DiagnosticCode::EmptyType,
            DiagnosticKind::EmptyScope => DiagnosticCode::EmptyScope,
            DiagnosticKind::EmptyDescription => DiagnosticCode::EmptyDescription,
        }
    }
}

impl fmt::Display for DiagnosticKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::NoTypeScope => f.write_str("No type/scope in header line"),
            DiagnosticKind::UnmatchedLeftParen => f.write_str("Unmatched '('"),
            DiagnosticKind::UnmatchedRightParen => f.write_str("Unmatched ')'"),
            DiagnosticKind::ExtraCharactersAfterScope(extra) => {
                write!(f, "Extra characters after scope: '{extra}'")
            }
            DiagnosticKind::EmptyType => f.write_str("Empty type"),
            DiagnosticKind::EmptyScope => f.write_str("Empty scope"),
            DiagnosticKind::EmptyDescription => f.write_str("Empty description"),
        }
    }
}

/// Payload-free identifier of a [`DiagnosticKind`], used for configuration
/// keys and as the diagnostic code on the wire.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum DiagnosticCode {
    /// `no-type-scope`
    NoTypeScope,
    /// `unmatched-left-paren`
    UnmatchedLeftParen,
    /// `unmatched-right-paren`
    UnmatchedRightParen,
    /// `extra-characters-after-scope`
    ExtraCharactersAfterScope,
    /// `empty-type`
    EmptyType,
    /// `empty-scope`
    EmptyScope,
    /// `empty-description`
    EmptyDescription,
}

impl DiagnosticCode {
    /// Every code, in declaration order.
    pub const ALL: [DiagnosticCode; 7] = [
        DiagnosticCode::NoTypeScope,
        DiagnosticCode::UnmatchedLeftParen,
        DiagnosticCode::UnmatchedRightParen,
        DiagnosticCode::ExtraCharactersAfterScope,
        DiagnosticCode::EmptyType,
        DiagnosticCode::EmptyScope,
        DiagnosticCode::EmptyDescription,
    ];

    /// Access `str` representation of DiagnosticCode
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::NoTypeScope => "no-type-scope",
            DiagnosticCode::UnmatchedLeftParen => "unmatched-left-paren",
            DiagnosticCode::UnmatchedRightParen => "unmatched-right-paren",
            DiagnosticCode::ExtraCharactersAfterScope => "extra-characters-after-scope",
            DiagnosticCode::EmptyType => "empty-type",
            DiagnosticCode::EmptyScope => "empty-scope",
            DiagnosticCode::EmptyDescription => "empty-description",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosticCode {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        DiagnosticCode::ALL
            .into_iter()
            .find(|c| c.as_str() == code)
            .ok_or_else(|| Error::new(ErrorKind::UnknownCode).set_input(code))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[cfg(feature = "serde")]
    use serde_test::Token;

    #[test]
    fn messages_interpolate_args() {
        let diagnostic = Diagnostic::new(
            Range::line(0, 11, 14),
            DiagnosticKind::ExtraCharactersAfterScope("bla"),
        );
        assert_eq!(diagnostic.message(), "Extra characters after scope: 'bla'");
        assert_eq!(diagnostic.args(), ["bla"]);
        assert_eq!(diagnostic.code(), DiagnosticCode::ExtraCharactersAfterScope);
        assert_eq!(
            diagnostic.to_string(),
            "1:12: Extra characters after scope: 'bla' [extra-characters-after-scope]"
        );

        let diagnostic = Diagnostic::new(Range::line(0, 0, 0), DiagnosticKind::EmptyType);
        assert_eq!(diagnostic.message(), "Empty type");
        assert!(diagnostic.args().is_empty());
    }

    #[test]
    fn codes_round_trip_through_names() {
        for code in DiagnosticCode::ALL {
            assert_eq!(code.as_str().parse::<DiagnosticCode>().unwrap(), code);
        }
    }

    #[test]
    fn unknown_code() {
        let err = "no-space".parse::<DiagnosticCode>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCode);
        assert_eq!(err.input(), Some("no-space"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn code_serializes_kebab_case() {
        serde_test::assert_tokens(
            &DiagnosticCode::UnmatchedLeftParen,
            &[Token::UnitVariant {
                name: "DiagnosticCode",
                variant: "unmatched-left-paren",
            }],
        );
    }
}
