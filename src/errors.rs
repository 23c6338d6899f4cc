//! Masthead error handling.
//!
//! A single error type carrying its kind, source context, and diagnostic
//! enhancements. Errors only arise at the CLI boundary: the core formatter,
//! predicates, and filter are total and never construct one.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Source context for error reporting: the text a span indexes into.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Creates a source context from user-supplied input text.
    pub fn from_input(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Creates a fallback when no meaningful source text exists.
    pub fn fallback(context: &str) -> Self {
        Self {
            name: "fallback".to_string(),
            content: format!("// {}", context),
        }
    }

    /// Converts to a NamedSource for miette error reporting.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::fallback("default context")
    }
}

/// The single error type: essential data only, no wrapper hierarchy.
#[derive(Debug)]
pub struct MastheadError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Where it happened.
    pub source_info: SourceInfo,
    /// How to help.
    pub diagnostic_info: DiagnosticInfo,
}

/// All failure kinds as a clean enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// A candidate failed a validation rule.
    #[error("Validation error: {message}")]
    InvalidCandidate { message: String },

    /// The search filter matched no records.
    #[error("Search error: no records match \"{term}\"")]
    NoMatches { term: String },

    /// An input source could not be read.
    #[error("I/O error: {path}: {message}")]
    Io { path: String, message: String },
}

/// Context-specific source information.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
    pub phase: String,
}

/// Diagnostic enhancement data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

/// Context-aware error creation.
pub trait ErrorReporting {
    /// Creates an error with context-appropriate enhancements.
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> MastheadError;

    fn invalid_candidate(&self, message: &str, span: SourceSpan) -> MastheadError {
        self.report(
            ErrorKind::InvalidCandidate {
                message: message.into(),
            },
            span,
        )
    }

    fn no_matches(&self, term: &str) -> MastheadError {
        self.report(ErrorKind::NoMatches { term: term.into() }, unspanned())
    }

    fn io(&self, path: &str, message: &str) -> MastheadError {
        self.report(
            ErrorKind::Io {
                path: path.into(),
                message: message.into(),
            },
            unspanned(),
        )
    }
}

impl ErrorKind {
    /// The error category, used in test assertions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCandidate { .. } => ErrorCategory::Validation,
            Self::NoMatches { .. } => ErrorCategory::Search,
            Self::Io { .. } => ErrorCategory::Io,
        }
    }

    /// Error code suffix for diagnostic codes.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::InvalidCandidate { .. } => "invalid_candidate",
            Self::NoMatches { .. } => "no_matches",
            Self::Io { .. } => "io",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Search,
    Io,
}

impl std::error::Error for MastheadError {}

impl fmt::Display for MastheadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Diagnostic for MastheadError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.primary_label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

impl MastheadError {
    fn primary_label(&self) -> String {
        match &self.kind {
            ErrorKind::InvalidCandidate { .. } => "invalid here".into(),
            ErrorKind::NoMatches { .. } => "no matching records".into(),
            ErrorKind::Io { .. } => "could not read input".into(),
        }
    }
}

/// Creates a placeholder span for errors not tied to a specific location,
/// such as I/O failures or an empty result set.
pub fn unspanned() -> SourceSpan {
    SourceSpan::from(0..0)
}

/// Converts a rule span into a miette SourceSpan.
pub fn to_source_span(span: crate::rules::Span) -> SourceSpan {
    SourceSpan::from(span.start..span.end)
}

/// General-purpose error creation context.
pub struct ValidationContext {
    pub source: SourceContext,
    pub phase: String,
}

impl ValidationContext {
    pub fn new(source: SourceContext, phase: impl Into<String>) -> Self {
        Self {
            source,
            phase: phase.into(),
        }
    }
}

impl ErrorReporting for ValidationContext {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> MastheadError {
        let error_code = format!("masthead::{}::{}", self.phase, kind.code_suffix());

        MastheadError {
            kind,
            source_info: SourceInfo {
                source: self.source.to_named_source(),
                primary_span: span,
                phase: self.phase.clone(),
            },
            diagnostic_info: DiagnosticInfo {
                help: None,
                error_code,
            },
        }
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a MastheadError with full miette diagnostics.
///
/// Use this for user-facing error display in the CLI.
pub fn print_error(error: MastheadError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
