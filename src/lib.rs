//! Column-accurate diagnostics for [Conventional Commit] messages.
//!
//! [conventional commit]: https://www.conventionalcommits.org
//!
//! Parsing never fails: every message decomposes into a [`Commit`], and
//! whatever breaks the Conventional Commit grammar is reported as a
//! [`Diagnostic`] with the [`Range`] an editor should underline.
//!
//! # Example
//!
//! ```rust
//! use git_conventional_lint::{Commit, DiagnosticKind, Footer, Range};
//!
//! let (commit, diagnostics) = Commit::parse("docs(example)!: add tested usage example");
//!
//! // You can access all components of the header.
//! assert!(diagnostics.is_empty());
//! assert_eq!(commit.type_(), "docs");
//! assert_eq!(commit.scope().unwrap(), "example");
//! assert_eq!(commit.description(), "add tested usage example");
//! assert!(commit.breaking());
//!
//! // Malformed headers still decompose, with diagnostics pointing at the problem.
//! let (commit, diagnostics) = Commit::parse("docs(example)oops: add usage example");
//! assert_eq!(commit.scope().unwrap(), "example");
//! assert_eq!(diagnostics[0].range(), Range::line(0, 13, 17));
//! assert_eq!(
//!     diagnostics[0].kind(),
//!     &DiagnosticKind::ExtraCharactersAfterScope("oops")
//! );
//! assert_eq!(diagnostics[0].message(), "Extra characters after scope: 'oops'");
//!
//! // Footers are checked one line at a time.
//! let footer = Footer::parse("Co-Authored-By: Lisa Simpson <lisa@simpsons.fam>").unwrap();
//! assert_eq!(footer.token(), "Co-Authored-By");
//! assert_eq!(footer.value(), "Lisa Simpson <lisa@simpsons.fam>");
//! assert!(Footer::parse("just some body text").is_none());
//! ```
//!
//! [`Message`] lints a whole commit message buffer, including its trailer
//! block:
//!
//! ```rust
//! use indoc::indoc;
//!
//! let message = git_conventional_lint::Message::parse(indoc!("
//!     feat: add the thing
//!
//!     BREAKING CHANGE: the old thing is gone
//!     Closes #12
//! "));
//!
//! assert!(message.diagnostics().is_empty());
//! assert!(message.breaking());
//! assert_eq!(message.breaking_description(), Some("the old thing is gone"));
//! assert_eq!(message.footers()[1].separator(), " #");
//! ```

#![warn(missing_docs)]

mod commit;
mod config;
mod diagnostic;
mod error;
#[cfg(feature = "lsp-types")]
mod lsp;
mod message;
mod parser;
mod range;

pub use commit::{Commit, Footer, FooterSeparator, FooterToken, Scope, Type};
pub use config::{Config, Severity, DEFAULT_SOURCE};
pub use diagnostic::{Diagnostic, DiagnosticCode, DiagnosticKind};
pub use error::{Error, ErrorKind};
pub use message::Message;
pub use range::{Position, Range};

#[cfg(feature = "lsp-types")]
pub use lsp_types;
