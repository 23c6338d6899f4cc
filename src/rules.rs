//! Candidate validation rules.
//!
//! Each rule is pure and stateless: it inspects a candidate string and
//! returns a list of diagnostics. A candidate is valid when no diagnostic
//! carries `Severity::Error`. The boolean predicates `is_valid_name` and
//! `is_valid_email_shape` are the same contracts without the diagnostic
//! machinery; the two layers always agree.
//!
//! Diagnostic spans are byte offsets into the candidate.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A byte-offset range into the candidate string.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A single validation diagnostic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Starts with the rule name and describes expected vs. found.
    pub message: String,
    pub span: Span,
}

/// Trait for all candidate rules.
pub trait Rule: Send + Sync {
    /// Short identifier used in CLI listings and diagnostic messages.
    fn name(&self) -> &'static str;
    /// Checks a candidate. Returns a list of diagnostics; empty means clean.
    fn check(&self, candidate: &str) -> Vec<Diagnostic>;
}

/// Returns true when no diagnostic is an error.
///
/// Warnings and info entries do not affect validity.
pub fn is_valid(diagnostics: &[Diagnostic]) -> bool {
    !diagnostics.iter().any(|d| d.severity == Severity::Error)
}

/// Registry for candidate rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self { rules: vec![] }
    }

    /// The registry holding the built-in rules.
    pub fn canonical() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(NameRule));
        registry.register(Box::new(EmailShapeRule));
        registry
    }

    /// Registers a rule.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Runs every registered rule and collects diagnostics.
    pub fn check_all(&self, candidate: &str) -> Vec<Diagnostic> {
        self.rules
            .iter()
            .flat_map(|r| r.check(candidate))
            .collect()
    }

    /// The names of the registered rules, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::canonical()
    }
}

// ============================================================================
// NAME RULE - No decimal digits
// ============================================================================

/// Rejects candidates containing ASCII decimal digits.
pub struct NameRule;

/// Returns true iff the candidate contains no ASCII decimal digit.
///
/// The empty string is a valid name.
pub fn is_valid_name(candidate: &str) -> bool {
    !candidate.chars().any(|c| c.is_ascii_digit())
}

impl Rule for NameRule {
    fn name(&self) -> &'static str {
        "name"
    }

    fn check(&self, candidate: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        // One error per contiguous digit run, spanning the run.
        let mut run_start: Option<usize> = None;
        for (offset, c) in candidate.char_indices() {
            if c.is_ascii_digit() {
                if run_start.is_none() {
                    run_start = Some(offset);
                }
            } else if let Some(start) = run_start.take() {
                diagnostics.push(digit_run_diagnostic(candidate, start, offset));
            }
        }
        if let Some(start) = run_start {
            diagnostics.push(digit_run_diagnostic(candidate, start, candidate.len()));
        }

        if candidate != candidate.trim() && !candidate.is_empty() {
            diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                message: "name: expected no surrounding whitespace, found padded candidate"
                    .to_string(),
                span: Span::new(0, candidate.len()),
            });
        }

        diagnostics
    }
}

fn digit_run_diagnostic(candidate: &str, start: usize, end: usize) -> Diagnostic {
    Diagnostic {
        severity: Severity::Error,
        message: format!(
            "name: expected no decimal digits, found \"{}\"",
            &candidate[start..end]
        ),
        span: Span::new(start, end),
    }
}

// ============================================================================
// EMAIL SHAPE RULE - local@domain with a dotted domain
// ============================================================================

/// Accepts candidates shaped `local@domain` with a dotted domain.
pub struct EmailShapeRule;

/// Returns true iff the candidate has the shape `local@domain`:
/// exactly one `@`, neither side empty, and at least one `.` in the domain.
///
/// This is a syntactic check only; no DNS or RFC semantics.
pub fn is_valid_email_shape(candidate: &str) -> bool {
    let Some(at) = candidate.find('@') else {
        return false;
    };
    let local = &candidate[..at];
    let domain = &candidate[at + 1..];
    !local.is_empty() && !domain.is_empty() && !domain.contains('@') && domain.contains('.')
}

impl Rule for EmailShapeRule {
    fn name(&self) -> &'static str {
        "email"
    }

    fn check(&self, candidate: &str) -> Vec<Diagnostic> {
        let error = |message: String, span: Span| Diagnostic {
            severity: Severity::Error,
            message,
            span,
        };

        let Some(at) = candidate.find('@') else {
            return vec![error(
                "email: expected 'local@domain' shape, found no '@' separator".to_string(),
                Span::new(0, candidate.len()),
            )];
        };

        let local = &candidate[..at];
        let domain = &candidate[at + 1..];
        let mut diagnostics = Vec::new();

        if let Some(extra) = domain.find('@') {
            let offset = at + 1 + extra;
            diagnostics.push(error(
                "email: expected a single '@' separator, found another".to_string(),
                Span::new(offset, offset + 1),
            ));
        }
        if local.is_empty() {
            diagnostics.push(error(
                "email: expected a non-empty local part before '@', found none".to_string(),
                Span::new(at, at + 1),
            ));
        }
        if domain.is_empty() {
            diagnostics.push(error(
                "email: expected a non-empty domain after '@', found none".to_string(),
                Span::new(at, at + 1),
            ));
        } else if !domain.contains('.') {
            diagnostics.push(error(
                format!("email: expected a '.' in the domain, found \"{domain}\""),
                Span::new(at + 1, candidate.len()),
            ));
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_without_digits_is_valid() {
        assert!(is_valid_name("Adam"));
        assert!(is_valid_name(""));
        assert!(is_valid_name("Ad-am O'Brien"));
    }

    #[test]
    fn name_with_digit_is_invalid() {
        assert!(!is_valid_name("Adam5"));
        assert!(!is_valid_name("4dam"));
        assert!(!is_valid_name("Ad4m"));
    }

    #[test]
    fn non_ascii_numerals_do_not_invalidate() {
        // The rule covers decimal digits 0-9 only.
        assert!(is_valid_name("Adam٥"));
    }

    #[test]
    fn name_rule_spans_cover_digit_runs() {
        let diags = NameRule.check("Ad12m3");
        let errors: Vec<_> = diags
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].span, Span::new(2, 4));
        assert_eq!(errors[1].span, Span::new(5, 6));
        assert!(errors[0].message.contains("\"12\""));
    }

    #[test]
    fn whitespace_padding_warns_without_invalidating() {
        let diags = NameRule.check("  Adam ");
        assert!(is_valid(&diags));
        assert!(diags
            .iter()
            .any(|d| d.severity == Severity::Warning && d.message.contains("whitespace")));
    }

    #[test]
    fn email_shape_examples() {
        assert!(is_valid_email_shape("Ad@m.com"));
        assert!(is_valid_email_shape("Ad-am@gmail.com"));
        assert!(!is_valid_email_shape("Adam5"));
        assert!(!is_valid_email_shape(""));
    }

    #[test]
    fn email_shape_rejects_empty_sides_and_dotless_domains() {
        assert!(!is_valid_email_shape("@gmail.com"));
        assert!(!is_valid_email_shape("adam@"));
        assert!(!is_valid_email_shape("adam@gmail"));
    }

    #[test]
    fn email_shape_rejects_second_separator() {
        assert!(!is_valid_email_shape("a@b@c.com"));
        let diags = EmailShapeRule.check("a@b@c.com");
        assert!(diags
            .iter()
            .any(|d| d.message.contains("single '@' separator")));
    }

    #[test]
    fn predicates_agree_with_rule_diagnostics() {
        let candidates = [
            "", "Adam", "Adam5", "Ad@m.com", "Ad-am@gmail.com", "adam@gmail", "@x.com", "a@",
            "a@b@c.com", "  Adam ",
        ];
        for candidate in candidates {
            assert_eq!(
                is_valid_name(candidate),
                is_valid(&NameRule.check(candidate)),
                "name rule disagrees on {candidate:?}"
            );
            assert_eq!(
                is_valid_email_shape(candidate),
                is_valid(&EmailShapeRule.check(candidate)),
                "email rule disagrees on {candidate:?}"
            );
        }
    }

    #[test]
    fn registry_collects_across_rules() {
        let registry = RuleRegistry::canonical();
        assert_eq!(registry.names(), vec!["name", "email"]);
        let diags = registry.check_all("Adam5");
        // Name rule flags the digit; email rule flags the missing '@'.
        assert!(diags.iter().any(|d| d.message.starts_with("name:")));
        assert!(diags.iter().any(|d| d.message.starts_with("email:")));
    }
}
