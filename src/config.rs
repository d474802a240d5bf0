//! How diagnostics are presented to an editor.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::{DiagnosticCode, Error, ErrorKind};

/// The `source` reported with every diagnostic unless configured otherwise.
pub const DEFAULT_SOURCE: &str = "git-conventional-lint";

/// Presentation settings for diagnostics.
///
/// Parsing never consults this; it is handed to whatever renders the
/// diagnostics, e.g. `Diagnostic::to_lsp` with the `lsp-types` feature.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Name of the tool the diagnostics are attributed to.
    pub source: String,
    /// Severity of every code without an entry in `severities`.
    pub severity: Severity,
    /// Per-code severity.
    pub severities: BTreeMap<DiagnosticCode, Severity>,
    /// Codes that are not reported at all.
    pub disabled: BTreeSet<DiagnosticCode>,
}

impl Config {
    /// The severity to report `code` with, or `None` when it is disabled.
    pub fn severity_of(&self, code: DiagnosticCode) -> Option<Severity> {
        if self.disabled.contains(&code) {
            return None;
        }
        Some(self.severities.get(&code).copied().unwrap_or(self.severity))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_owned(),
            severity: Severity::Error,
            severities: BTreeMap::new(),
            disabled: BTreeSet::new(),
        }
    }
}

/// How serious a diagnostic is.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Reported as an error.
    Error,
    /// Reported as a warning.
    Warning,
    /// Reported as information.
    Information,
    /// Reported as a hint.
    Hint,
}

impl Severity {
    /// Access `str` representation of Severity
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Information => "information",
            Severity::Hint => "hint",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(severity: &str) -> Result<Self, Self::Err> {
        match severity {
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "information" | "info" => Ok(Severity::Information),
            "hint" => Ok(Severity::Hint),
            _ => Err(Error::new(ErrorKind::UnknownSeverity).set_input(severity)),
        }
    }
}
