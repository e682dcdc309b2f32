//! Identifier range parsing and window planning.
//!
//! Brightpearl caps range requests at 200 identifiers. When capability
//! discovery (OPTIONS) cannot be used, [`plan_ranges`] splits a textual
//! range spec into request-sized windows locally.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Maximum identifiers the remote accepts in a single range request.
pub const MAX_RANGE_WINDOW: u64 = 200;

/// A parsed identifier range spec: either a single identifier (`"42"`) or
/// an inclusive numeric span (`"1-450"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSpec {
    /// A single identifier.
    Single(u64),
    /// An inclusive span, `begin <= end`.
    Span {
        /// First identifier in the span.
        begin: u64,
        /// Last identifier in the span, inclusive.
        end: u64,
    },
}

impl RangeSpec {
    /// Parse a textual spec of the form `"N"` or `"N-M"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when the spec is not
    /// numeric / numeric-hyphen-numeric, or when N > M.
    pub fn parse(spec: &str) -> Result<Self> {
        let parse_part = |part: &str| -> Result<u64> {
            part.parse::<u64>()
                .map_err(|_| Error::InvalidRange(format!("not a numeric identifier: {part:?}")))
        };

        match spec.split_once('-') {
            None => Ok(RangeSpec::Single(parse_part(spec)?)),
            Some((first, second)) => {
                let begin = parse_part(first)?;
                let end = parse_part(second)?;
                if begin > end {
                    return Err(Error::InvalidRange(format!(
                        "range begins after it ends: {spec}"
                    )));
                }
                Ok(RangeSpec::Span { begin, end })
            }
        }
    }

    /// Number of identifiers the spec covers.
    pub fn len(&self) -> u64 {
        match self {
            RangeSpec::Single(_) => 1,
            RangeSpec::Span { begin, end } => end - begin + 1,
        }
    }

    /// Always false; a valid spec covers at least one identifier.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Split the spec into textual windows of at most
    /// [`MAX_RANGE_WINDOW`] identifiers.
    ///
    /// A single identifier yields itself. A span yields windows of width
    /// 200 advancing by 200; the final window is `"begin-end"`, or the
    /// bare identifier when exactly one remains. The windows cover the
    /// span exactly once, in order, with no gaps or overlaps.
    pub fn windows(&self) -> Vec<String> {
        match *self {
            RangeSpec::Single(id) => vec![id.to_string()],
            RangeSpec::Span { begin, end } => {
                let mut windows = Vec::new();
                let mut cursor = begin;
                while cursor + (MAX_RANGE_WINDOW - 1) < end {
                    windows.push(format!("{}-{}", cursor, cursor + MAX_RANGE_WINDOW - 1));
                    cursor += MAX_RANGE_WINDOW;
                }
                if cursor == end {
                    windows.push(end.to_string());
                } else {
                    windows.push(format!("{cursor}-{end}"));
                }
                windows
            }
        }
    }
}

impl FromStr for RangeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RangeSpec::parse(s)
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSpec::Single(id) => write!(f, "{id}"),
            RangeSpec::Span { begin, end } => write!(f, "{begin}-{end}"),
        }
    }
}

/// Split a textual range spec into request-sized windows.
///
/// For a single value the original spec is returned unchanged as a
/// one-element sequence.
///
/// # Example
///
/// ```
/// use brightpearl_rs::plan::plan_ranges;
///
/// assert_eq!(plan_ranges("500500-500570").unwrap(), vec!["500500-500570"]);
/// assert_eq!(
///     plan_ranges("1-450").unwrap(),
///     vec!["1-200", "201-400", "401-450"]
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] for a malformed or inverted spec.
pub fn plan_ranges(spec: &str) -> Result<Vec<String>> {
    Ok(RangeSpec::parse(spec)?.windows())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_identifier_unchanged() {
        assert_eq!(plan_ranges("42").unwrap(), vec!["42"]);
        assert_eq!(plan_ranges("500500").unwrap(), vec!["500500"]);
    }

    #[test]
    fn test_span_within_one_window() {
        assert_eq!(plan_ranges("500500-500570").unwrap(), vec!["500500-500570"]);
        assert_eq!(plan_ranges("1-200").unwrap(), vec!["1-200"]);
    }

    #[test]
    fn test_span_with_remainder() {
        assert_eq!(
            plan_ranges("1-450").unwrap(),
            vec!["1-200", "201-400", "401-450"]
        );
    }

    #[test]
    fn test_span_on_window_boundary() {
        assert_eq!(plan_ranges("1-400").unwrap(), vec!["1-200", "201-400"]);
    }

    #[test]
    fn test_advance_lands_exactly_on_end() {
        // The remainder is one identifier; the final window is bare.
        assert_eq!(
            plan_ranges("1-401").unwrap(),
            vec!["1-200", "201-400", "401"]
        );
    }

    #[test]
    fn test_degenerate_span() {
        assert_eq!(plan_ranges("7-7").unwrap(), vec!["7"]);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = plan_ranges("500570-500500").unwrap_err();
        assert!(matches!(err, Error::InvalidRange(_)));
    }

    #[test]
    fn test_malformed_specs_rejected() {
        for spec in ["", "abc", "1-", "-5", "1-2-3", "1,2,3", "1.5-9"] {
            assert!(
                matches!(plan_ranges(spec), Err(Error::InvalidRange(_))),
                "spec {spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_windows_cover_exactly_once() {
        // Reassemble the covered identifiers and compare with [N, M].
        for (begin, end) in [(1u64, 450u64), (1, 400), (1, 401), (99, 5000), (200, 200)] {
            let windows = plan_ranges(&format!("{begin}-{end}")).unwrap();
            assert!(!windows.is_empty());

            let mut covered = Vec::new();
            for window in &windows {
                let spec = RangeSpec::parse(window).unwrap();
                match spec {
                    RangeSpec::Single(id) => covered.push(id),
                    RangeSpec::Span { begin: b, end: e } => {
                        assert!(e - b + 1 <= MAX_RANGE_WINDOW);
                        covered.extend(b..=e);
                    }
                }
            }

            let expected: Vec<u64> = (begin..=end).collect();
            assert_eq!(covered, expected, "gap or overlap in {begin}-{end}");
        }
    }

    #[test]
    fn test_planning_is_idempotent() {
        let first = plan_ranges("1-4321").unwrap();
        let second = plan_ranges("1-4321").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_spec_roundtrip_display() {
        let spec = RangeSpec::parse("1-450").unwrap();
        assert_eq!(spec.to_string(), "1-450");
        assert_eq!(spec.len(), 450);

        let single: RangeSpec = "42".parse().unwrap();
        assert_eq!(single.to_string(), "42");
        assert_eq!(single.len(), 1);
    }
}
