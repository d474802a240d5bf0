//! The commit header and footer types, and their decomposition.

use std::fmt;
use std::ops::Deref;

use crate::parser;
use crate::{Diagnostic, DiagnosticKind, Range};

const BREAKING_PHRASE: &str = "BREAKING CHANGE";
const BREAKING_ARROW: &str = "BREAKING-CHANGE";

/// The header of a conventional commit.
///
/// Every text produces a `Commit`; what is wrong with it is reported
/// alongside as [`Diagnostic`]s.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit<'a> {
    ty: Type<'a>,
    scope: Option<Scope<'a>>,
    description: &'a str,
    breaking: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    remainder: &'a str,
}

impl<'a> Commit<'a> {
    /// Decompose the header line of `text` into type, scope, breaking-change
    /// marker and description.
    ///
    /// Only the first line is analyzed; the rest of the message is kept as
    /// [`Commit::remainder`]. Diagnostics are on line 0, in the order the
    /// header is checked.
    pub fn parse(text: &'a str) -> (Self, Vec<Diagnostic<'a>>) {
        let (header, remainder) = parser::split_first_line(text);
        let mut diagnostics = Vec::new();

        let Some((prefix, raw_description)) = parser::split_summary(header) else {
            diagnostics.push(Diagnostic::new(
                Range::within(0, header, 0..header.len()),
                DiagnosticKind::NoTypeScope,
            ));
            let commit = Self {
                ty: Type::new_unchecked(""),
                scope: None,
                description: header,
                breaking: false,
                remainder,
            };
            return (commit, diagnostics);
        };

        // `!` marks a breaking change; whatever follows it is not type or scope.
        let (prefix, breaking) = match prefix.rfind('!') {
            Some(bang) => (&prefix[..bang], true),
            None => (prefix, false),
        };

        let (ty, scope) = type_scope(header, prefix, &mut diagnostics);

        if ty.is_empty() {
            diagnostics.push(Diagnostic::new(
                Range::at(0, header, 0),
                DiagnosticKind::EmptyType,
            ));
        }
        if prefix.contains('(') && scope.is_empty() {
            diagnostics.push(Diagnostic::new(
                Range::within(0, header, ty.len()..ty.len() + 2),
                DiagnosticKind::EmptyScope,
            ));
        }

        let description = raw_description.trim();
        if description.is_empty() {
            let after_colon = offset_of(header, raw_description);
            diagnostics.push(Diagnostic::new(
                Range::within(0, header, after_colon..header.len()),
                DiagnosticKind::EmptyDescription,
            ));
        }

        let commit = Self {
            ty: Type::new_unchecked(ty),
            scope: (!scope.is_empty()).then_some(Scope::new_unchecked(scope)),
            description,
            breaking,
            remainder,
        };
        (commit, diagnostics)
    }

    /// The type of the commit, possibly empty.
    pub fn type_(&self) -> Type<'a> {
        self.ty
    }

    /// The scope of the commit, `None` when absent or empty.
    pub fn scope(&self) -> Option<Scope<'a>> {
        self.scope
    }

    /// The commit description, trimmed.
    ///
    /// Without a type/scope prefix, this is the whole header line.
    pub fn description(&self) -> &'a str {
        self.description
    }

    /// A flag to signal that the header marks a breaking change with `!`:
    /// ```text
    /// feat(scope)!: this is a breaking change
    /// ```
    pub fn breaking(&self) -> bool {
        self.breaking
    }

    /// Explanation for the breaking change: the description when the header
    /// is marked with `!`.
    pub fn breaking_description(&self) -> Option<&'a str> {
        self.breaking.then_some(self.description)
    }

    /// Everything after the header line's terminator.
    pub fn remainder(&self) -> &'a str {
        self.remainder
    }
}

/// Split the `!`-free type/scope `prefix` of `header` into type and scope.
fn type_scope<'a>(
    header: &'a str,
    prefix: &'a str,
    diagnostics: &mut Vec<Diagnostic<'a>>,
) -> (&'a str, &'a str) {
    let left = prefix.find('(');
    let right = prefix.find(')');

    match (left, right) {
        (Some(left), Some(right)) if left < right => {
            let scope = &prefix[left + 1..right];
            let extra = &prefix[right + 1..];
            if !extra.is_empty() {
                diagnostics.push(Diagnostic::new(
                    Range::within(0, header, right + 1..prefix.len()),
                    DiagnosticKind::ExtraCharactersAfterScope(extra),
                ));
            }
            (&prefix[..left], scope)
        }
        (Some(left), _) => {
            diagnostics.push(Diagnostic::new(
                Range::at(0, header, left),
                DiagnosticKind::UnmatchedLeftParen,
            ));
            (&prefix[..left], &prefix[left + 1..])
        }
        (None, Some(right)) => {
            diagnostics.push(Diagnostic::new(
                Range::at(0, header, right),
                DiagnosticKind::UnmatchedRightParen,
            ));
            (&prefix[..right], "")
        }
        (None, None) => (prefix, ""),
    }
}

/// Byte offset in `header` where `suffix`, a tail slice of it, begins.
fn offset_of(header: &str, suffix: &str) -> usize {
    header.len() - suffix.len()
}

/// A single footer.
///
/// A footer is similar to a Git trailer, with the exception of not requiring
/// whitespace before newlines.
///
/// See: <https://git-scm.com/docs/git-interpret-trailers>
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Footer<'a> {
    token: FooterToken<'a>,
    sep: FooterSeparator,
    value: &'a str,
}

impl<'a> Footer<'a> {
    /// Decompose a single line into a footer token and value.
    ///
    /// Returns `None` when the line is not a footer, which is expected for
    /// ordinary body text. The token may not contain whitespace, except for
    /// `BREAKING CHANGE` followed by `": "`.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (token, sep, value) = parser::footer(line)?;
        let breaking_phrase = token == BREAKING_PHRASE && sep == FooterSeparator::Value;
        if token.contains(char::is_whitespace) && !breaking_phrase {
            return None;
        }
        Some(Self::new(FooterToken::new_unchecked(token), sep, value))
    }

    /// Piece together a footer.
    pub const fn new(token: FooterToken<'a>, sep: FooterSeparator, value: &'a str) -> Self {
        Self { token, sep, value }
    }

    /// The token of the footer.
    pub const fn token(&self) -> FooterToken<'a> {
        self.token
    }

    /// The separator between the footer token and its value.
    pub const fn separator(&self) -> FooterSeparator {
        self.sep
    }

    /// The value of the footer, trimmed.
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// A flag to signal that the footer describes a breaking change.
    pub fn breaking(&self) -> bool {
        self.token.breaking()
    }
}

/// The type of separator between the footer token and value.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum FooterSeparator {
    /// ": "
    Value,

    /// " #"
    Ref,
}

impl FooterSeparator {
    /// Access `str` representation of FooterSeparator
    pub fn as_str(self) -> &'static str {
        match self {
            FooterSeparator::Value => ": ",
            FooterSeparator::Ref => " #",
        }
    }
}

impl Deref for FooterSeparator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<&'_ str> for FooterSeparator {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for FooterSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! unicase_components {
    ($($ty:ident),+) => (
        $(
            /// A component of the conventional commit, compared case-insensitively.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $ty<'a>(unicase::UniCase<&'a str>);

            impl<'a> $ty<'a> {
                /// Wrap a `str` as-is.
                pub const fn new_unchecked(value: &'a str) -> Self {
                    $ty(unicase::UniCase::unicode(value))
                }

                /// Access `str` representation
                pub fn as_str(&self) -> &'a str {
                    self.0.into_inner()
                }
            }

            impl Deref for $ty<'_> {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    self.as_str()
                }
            }

            impl PartialEq<&'_ str> for $ty<'_> {
                fn eq(&self, other: &&str) -> bool {
                    *self == $ty::new_unchecked(*other)
                }
            }

            impl fmt::Display for $ty<'_> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            #[cfg(feature = "serde")]
            impl serde::Serialize for $ty<'_> {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self)
                }
            }
        )+
    )
}

unicase_components![Type, Scope, FooterToken];

impl FooterToken<'_> {
    /// A flag to signal that the footer describes a breaking change.
    pub fn breaking(&self) -> bool {
        self == &BREAKING_PHRASE || self == &BREAKING_ARROW
    }
}
