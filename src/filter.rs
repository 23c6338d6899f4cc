//! Record filtering.
//!
//! A case-insensitive substring filter over text records. Matching is
//! purely textual: no tokenization, ranking, or indexing.

/// Returns true when the record contains the term, ignoring case.
///
/// The empty term matches every record.
///
/// # Examples
///
/// ```rust
/// use masthead::filter;
/// assert!(filter::matches("Copyright held", "right"));
/// assert!(filter::matches("RIGHT of way", "right"));
/// assert!(!filter::matches("left turn", "right"));
/// ```
pub fn matches(record: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.to_lowercase().contains(&term.to_lowercase())
}

/// Filters records down to those matching the term, preserving input order.
pub fn filter<'a, I>(records: I, term: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    records
        .into_iter()
        .filter(|record| matches(record, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_term_yields_at_least_one_result() {
        let records = ["left of center", "right of way", "straight ahead"];
        let found = filter(records, "right");
        assert!(!found.is_empty());
        assert_eq!(found, vec!["right of way"]);
    }

    #[test]
    fn matching_ignores_case() {
        let records = ["Copyright Notice", "all RIGHTS reserved"];
        assert_eq!(filter(records, "right"), records);
    }

    #[test]
    fn empty_term_matches_everything() {
        let records = ["a", "b", "c"];
        assert_eq!(filter(records, ""), records);
    }

    #[test]
    fn absent_term_yields_nothing() {
        let records = ["left", "straight"];
        assert!(filter(records, "right").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let records = ["b right", "a right", "c right"];
        assert_eq!(filter(records, "right"), records);
    }
}
