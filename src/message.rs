//! Lint a complete commit message.

use crate::parser;
use crate::{Commit, Diagnostic, Footer};

/// Git ignores this line and everything below it (`git commit --verbose`).
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// A commit message: its header, its trailer block and the header's
/// diagnostics.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message<'a> {
    commit: Commit<'a>,
    footers: Vec<Footer<'a>>,
    diagnostics: Vec<Diagnostic<'a>>,
}

impl<'a> Message<'a> {
    /// Lint the contents of a commit message buffer.
    ///
    /// Lines starting with `#` are git comments and are skipped. The trailer
    /// block is the last paragraph after a blank line when every line of it is
    /// a [`Footer`]; footer values do not continue onto following lines.
    pub fn parse(text: &'a str) -> Self {
        let (commit, diagnostics) = Commit::parse(text);
        let footers = trailers(commit.remainder());

        tracing::trace!(
            diagnostics = diagnostics.len(),
            footers = footers.len(),
            "linted commit message"
        );

        Self {
            commit,
            footers,
            diagnostics,
        }
    }

    /// The decomposed header.
    pub fn commit(&self) -> &Commit<'a> {
        &self.commit
    }

    /// The trailers, in order.
    pub fn footers(&self) -> &[Footer<'a>] {
        &self.footers
    }

    /// Problems found in the header.
    pub fn diagnostics(&self) -> &[Diagnostic<'a>] {
        &self.diagnostics
    }

    /// A flag to signal that the commit contains breaking changes.
    ///
    /// This flag is set either when the header has an exclamation mark after
    /// the type and scope, e.g.:
    /// ```text
    /// feat(scope)!: this is a breaking change
    /// ```
    ///
    /// Or when the `BREAKING CHANGE: ` footer is defined:
    /// ```text
    /// feat: my commit description
    ///
    /// BREAKING CHANGE: this is a breaking change
    /// ```
    pub fn breaking(&self) -> bool {
        self.commit.breaking() || self.footers.iter().any(Footer::breaking)
    }

    /// Explanation for the breaking change.
    ///
    /// Note: if no `BREAKING CHANGE` footer is provided, the `description` is expected to describe
    /// the breaking change.
    pub fn breaking_description(&self) -> Option<&'a str> {
        self.footers
            .iter()
            .find(|footer| footer.breaking())
            .map(Footer::value)
            .or_else(|| self.commit.breaking_description())
    }
}

fn trailers(remainder: &str) -> Vec<Footer<'_>> {
    let mut paragraph = Vec::new();
    // The paragraph running on from the header is never a trailer block.
    let mut separated = false;
    let mut blank = false;
    for line in parser::lines(remainder) {
        if line.trim_end() == SCISSORS {
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        if line.trim().is_empty() {
            blank = true;
            continue;
        }
        if blank {
            paragraph.clear();
            separated = true;
            blank = false;
        }
        paragraph.push(line);
    }
    if !separated {
        return Vec::new();
    }

    paragraph
        .into_iter()
        .map(Footer::parse)
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}
