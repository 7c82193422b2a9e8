// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in a source file, supplied by the host for every class, constructor and module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceLocation {
    /// Path of the source file as the host reports it.
    pub file: String,
    /// One-based line number.
    pub line: u32,
    /// One-based column, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl SourceLocation {
    /// A position at `line` of `file`.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column: None,
        }
    }

    /// Adds the column within the line.
    #[must_use]
    pub const fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}:{}:{column}", self.file, self.line),
            None => write!(f, "{}:{}", self.file, self.line),
        }
    }
}

/// Whether a diagnostic fails the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Generation of the offending target is skipped and the run fails.
    Error,
    /// Advisory only.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// A problem found in an annotated element, attributed to that element's source location.
///
/// The message text is stable and may be matched on by tools.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    location: SourceLocation,
}

impl Diagnostic {
    /// An error diagnostic.
    #[must_use]
    pub fn error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            location,
        }
    }

    /// A warning diagnostic.
    #[must_use]
    pub fn warning(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            location,
        }
    }

    /// How severe the problem is.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether this diagnostic fails the run.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// The message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the problem was found.
    #[must_use]
    pub const fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.severity, self.message)
    }
}

/// Receives diagnostics on behalf of the host, which renders them as compiler output.
pub trait DiagnosticSink {
    /// Reports one diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

/// Logs diagnostics as `tracing` events: errors at `ERROR`, warnings at `WARN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    #[cfg_attr(test, mutants::skip)] // Only observable through log output.
    fn emit(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => tracing::event!(
                name: "work_inject.diagnostic",
                tracing::Level::ERROR,
                location = %diagnostic.location,
                message = %diagnostic.message,
            ),
            Severity::Warning => tracing::event!(
                name: "work_inject.diagnostic",
                tracing::Level::WARN,
                location = %diagnostic.location,
                message = %diagnostic.message,
            ),
        }
    }
}

/// Accumulates the diagnostics of one validation pass.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    reported: Vec<Diagnostic>,
}

impl Diagnostics {
    pub(crate) fn error(&mut self, message: impl Into<String>, location: &SourceLocation) {
        self.reported.push(Diagnostic::error(message, location.clone()));
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>, location: &SourceLocation) {
        self.reported.push(Diagnostic::warning(message, location.clone()));
    }

    pub(crate) fn error_count(&self) -> usize {
        self.reported.iter().filter(|diagnostic| diagnostic.is_error()).count()
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.reported
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    #[test]
    fn thread_safe_types() {
        assert_impl_all!(Diagnostic: Send, Sync);
        assert_impl_all!(TracingSink: Send, Sync);
    }

    #[test]
    fn display_includes_location_and_severity() {
        let error = Diagnostic::error("broken", SourceLocation::new("test/TestWorker.java", 12));
        let warning = Diagnostic::warning("odd", SourceLocation::new("test/TestWorker.java", 3).with_column(5));

        assert_eq!(error.to_string(), "test/TestWorker.java:12: error: broken");
        assert_eq!(warning.to_string(), "test/TestWorker.java:3:5: warning: odd");
    }

    #[test]
    fn collector_counts_errors_only() {
        let location = SourceLocation::new("a.java", 1);
        let mut diagnostics = Diagnostics::default();
        diagnostics.warning("w", &location);
        diagnostics.error("e", &location);

        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.into_vec().len(), 2);
    }

    #[test]
    fn vec_sink_keeps_order() {
        let mut sink = Vec::new();
        let first = Diagnostic::error("first", SourceLocation::new("a.java", 1));
        let second = Diagnostic::warning("second", SourceLocation::new("a.java", 2));

        sink.emit(&first);
        sink.emit(&second);

        assert_eq!(sink, [first, second]);
    }
}
