//! Validated digit strings

use crate::digits::order::{SortDirection, sort_direction};
use crate::error::SearchError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of ASCII decimal digits.
///
/// The length is fixed at construction; shuffling permutes the bytes in place
/// and never resizes the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    digits: Vec<u8>,
}

impl Candidate {
    /// Validate `input` and build a candidate from it.
    ///
    /// Rejects the empty string and anything that is not `0`-`9`. No
    /// whitespace trimming happens here.
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        if input.is_empty() {
            return Err(SearchError::EmptyInput);
        }

        if let Some((position, found)) = input
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(SearchError::NonDigit { position, found });
        }

        Ok(Self {
            digits: input.as_bytes().to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.digits
    }

    /// View the digits as a string slice.
    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII digits and shuffling only permutes them.
        std::str::from_utf8(&self.digits).unwrap_or_default()
    }

    /// Permute the digits in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        crate::digits::shuffle::shuffle(&mut self.digits, rng);
    }

    pub fn is_sorted(&self) -> bool {
        self.direction().is_some()
    }

    /// The direction this candidate is sorted in, if any.
    pub fn direction(&self) -> Option<SortDirection> {
        sort_direction(&self.digits)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Candidate {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_parse_valid() {
        let candidate = Candidate::parse("0123456789").unwrap();
        assert_eq!(candidate.len(), 10);
        assert_eq!(candidate.as_str(), "0123456789");
        assert_eq!(candidate.to_string(), "0123456789");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            Candidate::parse(""),
            Err(SearchError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_non_digit() {
        match Candidate::parse("12a4") {
            Err(SearchError::NonDigit { position, found }) => {
                assert_eq!(position, 2);
                assert_eq!(found, 'a');
            }
            other => panic!("Unexpected result: {:?}", other),
        }

        // Signs, separators and whitespace are not digits either
        assert!("-12".parse::<Candidate>().is_err());
        assert!("1.5".parse::<Candidate>().is_err());
        assert!(" 12".parse::<Candidate>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Arabic-Indic digit five
        assert!(Candidate::parse("1\u{0665}").is_err());
    }

    #[test]
    fn test_shuffle_keeps_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut candidate = Candidate::parse("9081726354").unwrap();
        for _ in 0..100 {
            candidate.shuffle(&mut rng);
            assert_eq!(candidate.len(), 10);
            assert!(candidate.as_str().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_direction() {
        assert_eq!(
            Candidate::parse("1123").unwrap().direction(),
            Some(SortDirection::Ascending)
        );
        assert_eq!(
            Candidate::parse("9530").unwrap().direction(),
            Some(SortDirection::Descending)
        );
        assert_eq!(Candidate::parse("2413").unwrap().direction(), None);
        assert!(!Candidate::parse("2413").unwrap().is_sorted());
    }
}
