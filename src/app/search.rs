//! Country list filtering and ordering.
//!
//! Search is a literal, case-sensitive substring test against a record's
//! name or dial code. Query characters carry no pattern meaning: `"("` only
//! matches names that contain a parenthesis.
//!
//! # Ordering
//!
//! Results are stable-sorted ascending by `code` compared as strings. Records
//! sharing a code keep their relative input order, so feeding in the
//! `(code, name)` ordered catalog from [`crate::domain::dataset::initial_order`]
//! yields a list that is still `(code, name)` ordered after filtering.

use crate::domain::CountryRecord;

/// Filters `records` by `query` and sorts the survivors by dial code.
///
/// An empty query keeps every record.
///
/// # Examples
///
/// ```
/// use dialpick::app::search::filter_and_sort;
/// use dialpick::domain::CountryRecord;
///
/// let records = [
///     CountryRecord { id: "gb", name: "United Kingdom", code: "44", flag: "🇬🇧" },
///     CountryRecord { id: "us", name: "United States", code: "1", flag: "🇺🇸" },
/// ];
/// let codes: Vec<_> = filter_and_sort(&records, "Unit").iter().map(|r| r.code).collect();
/// assert_eq!(codes, ["1", "44"]);
/// ```
#[must_use]
pub fn filter_and_sort(records: &[CountryRecord], query: &str) -> Vec<CountryRecord> {
    let mut matches: Vec<CountryRecord> = records
        .iter()
        .filter(|record| matches_query(record, query))
        .copied()
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| a.code.cmp(b.code));
    matches
}

/// Returns whether `record` survives `query`.
#[must_use]
pub fn matches_query(record: &CountryRecord, query: &str) -> bool {
    query.is_empty() || record.name.contains(query) || record.code.contains(query)
}

/// Computes character ranges of every literal occurrence of `query` in `text`.
///
/// Ranges are `(start, end)` in char indices with exclusive end, suitable for
/// [`crate::ui::helpers::highlighted_text`]. Occurrences do not
/// overlap. An empty query yields no ranges.
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let query_chars = query.chars().count();
    text.match_indices(query)
        .map(|(byte_start, _)| {
            let start = text[..byte_start].chars().count();
            (start, start + query_chars)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset;

    fn us() -> CountryRecord {
        CountryRecord { id: "us", name: "United States", code: "1", flag: "🇺🇸" }
    }

    fn gb() -> CountryRecord {
        CountryRecord { id: "gb", name: "United Kingdom", code: "44", flag: "🇬🇧" }
    }

    #[test]
    fn prefix_of_both_names_returns_both_sorted_by_code() {
        let records = [gb(), us()];
        let result = filter_and_sort(&records, "Unit");
        let codes: Vec<&str> = result.iter().map(|r| r.code).collect();
        assert_eq!(codes, ["1", "44"]);
    }

    #[test]
    fn code_query_matches_code_only() {
        let records = [us(), gb()];
        let result = filter_and_sort(&records, "44");
        assert_eq!(result, vec![gb()]);
    }

    #[test]
    fn empty_query_keeps_everything() {
        let records = [us(), gb()];
        assert_eq!(filter_and_sort(&records, ""), vec![us(), gb()]);

        let all = dataset::initial_order();
        assert_eq!(filter_and_sort(&all, "").len(), all.len());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let records = [us(), gb()];
        assert!(filter_and_sort(&records, "unit").is_empty());
        assert_eq!(filter_and_sort(&records, "States"), vec![us()]);
    }

    #[test]
    fn special_characters_are_literal() {
        let all = dataset::initial_order();
        let result = filter_and_sort(&all, "(");
        assert!(!result.is_empty());
        assert!(result.iter().all(|r| r.name.contains('(')));
        assert!(filter_and_sort(&all, ".*").is_empty());
    }

    #[test]
    fn every_result_contains_the_query() {
        let all = dataset::initial_order();
        for query in ["a", "an", "1", "59", "Islands", "é", "Guinea"] {
            for record in filter_and_sort(&all, query) {
                assert!(
                    record.name.contains(query) || record.code.contains(query),
                    "{} does not contain {query:?}",
                    record.name
                );
            }
        }
    }

    #[test]
    fn results_are_sorted_by_code_and_stable_on_ties() {
        let first = CountryRecord { id: "zz", name: "Zeta", code: "7", flag: "" };
        let second = CountryRecord { id: "aa", name: "Alpha", code: "7", flag: "" };
        let records = [gb(), first, us(), second];
        let result = filter_and_sort(&records, "");
        let ids: Vec<&str> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["us", "gb", "zz", "aa"]);
    }

    #[test]
    fn codes_compare_as_strings() {
        let records = [
            CountryRecord { id: "x", name: "Nine", code: "9", flag: "" },
            CountryRecord { id: "y", name: "Ten", code: "10", flag: "" },
        ];
        let codes: Vec<&str> = filter_and_sort(&records, "").iter().map(|r| r.code).collect();
        assert_eq!(codes, ["10", "9"]);
    }

    #[test]
    fn filtered_catalog_stays_in_code_name_order() {
        let all = dataset::initial_order();
        let result = filter_and_sort(&all, "i");
        for pair in result.windows(2) {
            assert!((pair[0].code, pair[0].name) <= (pair[1].code, pair[1].name));
        }
    }

    #[test]
    fn match_ranges_use_char_indices() {
        assert_eq!(match_ranges("United States", "ted"), vec![(3, 6)]);
        assert_eq!(match_ranges("Réunion", "union"), vec![(2, 7)]);
        assert_eq!(match_ranges("Guinea-Bissau", "s"), vec![(9, 10), (10, 11)]);
        assert!(match_ranges("Peru", "").is_empty());
        assert!(match_ranges("Peru", "x").is_empty());
    }
}
