//! Headline composition.
//!
//! A single fixed template: the label is embedded verbatim after the
//! prefix, with no trimming, casing, or escaping.

/// The literal prefix of every composed headline.
pub const HEADLINE_PREFIX: &str = "The headline is ";

/// Composes a headline sentence from a label.
///
/// Accepts any string, including the empty string, and never fails.
/// The output length is always `HEADLINE_PREFIX.len() + label.len()`.
///
/// # Examples
///
/// ```rust
/// use masthead::headline;
/// assert_eq!(headline::format("gamedeveloper"), "The headline is gamedeveloper");
/// assert_eq!(headline::format(""), "The headline is ");
/// ```
pub fn format(label: &str) -> String {
    let mut sentence = String::with_capacity(HEADLINE_PREFIX.len() + label.len());
    sentence.push_str(HEADLINE_PREFIX);
    sentence.push_str(label);
    sentence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_label_after_prefix() {
        assert_eq!(format("gamedeveloper"), "The headline is gamedeveloper");
    }

    #[test]
    fn empty_label_yields_bare_prefix() {
        assert_eq!(format(""), HEADLINE_PREFIX);
    }

    #[test]
    fn label_is_not_normalized() {
        // Whitespace and casing pass through untouched.
        assert_eq!(format("  Mixed Case  "), "The headline is   Mixed Case  ");
    }

    #[test]
    fn length_is_prefix_plus_label() {
        for label in ["", "a", "Became a game developer", "統計"] {
            assert_eq!(format(label).len(), HEADLINE_PREFIX.len() + label.len());
        }
    }
}
