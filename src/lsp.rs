//! Conversions into Language Server Protocol types.

use lsp_types::{DiagnosticSeverity, NumberOrString};

use crate::{Config, Diagnostic, Position, Range, Severity};

impl From<Position> for lsp_types::Position {
    fn from(position: Position) -> Self {
        lsp_types::Position::new(position.line, position.character)
    }
}

impl From<Range> for lsp_types::Range {
    fn from(range: Range) -> Self {
        lsp_types::Range::new(range.start.into(), range.end.into())
    }
}

impl From<Severity> for DiagnosticSeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => DiagnosticSeverity::ERROR,
            Severity::Warning => DiagnosticSeverity::WARNING,
            Severity::Information => DiagnosticSeverity::INFORMATION,
            Severity::Hint => DiagnosticSeverity::HINT,
        }
    }
}

impl Diagnostic<'_> {
    /// Render for `textDocument/publishDiagnostics`.
    ///
    /// Returns `None` when `config` disables this diagnostic's code.
    pub fn to_lsp(&self, config: &Config) -> Option<lsp_types::Diagnostic> {
        let severity = config.severity_of(self.code())?;
        Some(lsp_types::Diagnostic {
            range: self.range().into(),
            severity: Some(severity.into()),
            code: Some(NumberOrString::String(self.code().as_str().to_owned())),
            source: Some(config.source.clone()),
            message: self.message(),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Commit, DiagnosticCode};

    #[test]
    fn renders_with_config() {
        let (_, diagnostics) = Commit::parse("type(scope)bla: description");
        let lsp = diagnostics[0].to_lsp(&Config::default()).unwrap();

        assert_eq!(
            lsp.range,
            lsp_types::Range::new(
                lsp_types::Position::new(0, 11),
                lsp_types::Position::new(0, 14),
            )
        );
        assert_eq!(lsp.severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(
            lsp.code,
            Some(NumberOrString::String("extra-characters-after-scope".to_owned()))
        );
        assert_eq!(lsp.source.as_deref(), Some("git-conventional-lint"));
        assert_eq!(lsp.message, "Extra characters after scope: 'bla'");
    }

    #[test]
    fn honors_overrides() {
        let (_, diagnostics) = Commit::parse("no header here");
        let mut config = Config {
            source: "git-lsp".to_owned(),
            ..Default::default()
        };
        config
            .severities
            .insert(DiagnosticCode::NoTypeScope, Severity::Warning);

        let lsp = diagnostics[0].to_lsp(&config).unwrap();
        assert_eq!(lsp.severity, Some(DiagnosticSeverity::WARNING));
        assert_eq!(lsp.source.as_deref(), Some("git-lsp"));

        config.disabled.insert(DiagnosticCode::NoTypeScope);
        assert_eq!(diagnostics[0].to_lsp(&config), None);
    }
}
