//! Sortedness oracle for digit strings
//!
//! A digit string counts as sorted when it is non-decreasing or
//! non-increasing. Digits are compared as characters, one adjacent pair at a
//! time; the numeric value of the whole string never enters into it.

use std::fmt;

/// Which way a sorted digit string runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Every adjacent pair satisfies `d[i] <= d[i + 1]` and at least one is strict.
    Ascending,
    /// Every adjacent pair satisfies `d[i] >= d[i + 1]` and at least one is strict.
    Descending,
    /// All digits are equal (this includes the empty and single-digit strings).
    Constant,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
            SortDirection::Constant => write!(f, "constant"),
        }
    }
}

/// Determine the sort direction of `digits` in a single pass.
///
/// Returns `None` when the string is neither non-decreasing nor
/// non-increasing. Stops scanning as soon as both directions are ruled out.
pub fn sort_direction(digits: &[u8]) -> Option<SortDirection> {
    let mut ascending = true;
    let mut descending = true;

    for pair in digits.windows(2) {
        if pair[0] > pair[1] {
            ascending = false;
        }
        if pair[0] < pair[1] {
            descending = false;
        }
        if !ascending && !descending {
            return None;
        }
    }

    match (ascending, descending) {
        (true, true) => Some(SortDirection::Constant),
        (true, false) => Some(SortDirection::Ascending),
        (false, true) => Some(SortDirection::Descending),
        (false, false) => None,
    }
}

/// Whether `digits` is non-decreasing or non-increasing.
pub fn is_sorted(digits: &[u8]) -> bool {
    sort_direction(digits).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(s: &str) -> bool {
        is_sorted(s.as_bytes())
    }

    #[test]
    fn test_is_sorted_examples() {
        assert!(sorted("1234"));
        assert!(sorted("4321"));
        assert!(!sorted("1324"));
        assert!(sorted("1"));
        assert!(sorted(""));
    }

    #[test]
    fn test_is_sorted_with_repeats() {
        assert!(sorted("112233"));
        assert!(sorted("998877"));
        assert!(sorted("5555"));
        assert!(!sorted("1121"));
        assert!(!sorted("2212"));
    }

    #[test]
    fn test_characterwise_not_numeric() {
        // "10" is descending character-wise even though 1 < 10 numerically
        assert_eq!(sort_direction(b"10"), Some(SortDirection::Descending));
        assert_eq!(sort_direction(b"09"), Some(SortDirection::Ascending));
        // Leading zeros are just digits
        assert!(sorted("0001"));
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!(sort_direction(b""), Some(SortDirection::Constant));
        assert_eq!(sort_direction(b"7"), Some(SortDirection::Constant));
        assert_eq!(sort_direction(b"777"), Some(SortDirection::Constant));
        assert_eq!(sort_direction(b"0259"), Some(SortDirection::Ascending));
        assert_eq!(sort_direction(b"9520"), Some(SortDirection::Descending));
        assert_eq!(sort_direction(b"9250"), None);
    }

    #[test]
    fn test_matches_two_pass_definition() {
        // Every 4-digit string over {0, 1, 2}
        let alphabet = [b'0', b'1', b'2'];
        for a in alphabet {
            for b in alphabet {
                for c in alphabet {
                    for d in alphabet {
                        let s = [a, b, c, d];
                        let asc = s.windows(2).all(|p| p[0] <= p[1]);
                        let desc = s.windows(2).all(|p| p[0] >= p[1]);
                        assert_eq!(
                            is_sorted(&s),
                            asc || desc,
                            "mismatch for {:?}",
                            std::str::from_utf8(&s)
                        );
                    }
                }
            }
        }
    }
}
