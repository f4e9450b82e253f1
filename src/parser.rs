//! Validation and parsing of raw coordinate text typed by the player.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::common::{CoordinateError, ValidationResult};
use crate::coordinate::Coordinate;

/// One letter followed by one to three digits, after cleaning.
static COORDINATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]([0-9]{1,3})$").unwrap());

/// Turns player input such as `" b 7 "` into a [`Coordinate`].
pub struct CoordinateParser;

impl CoordinateParser {
    /// Check raw input without building a coordinate.
    pub fn validate(raw: &str) -> ValidationResult<CoordinateError> {
        Self::clean_and_check(raw).map(|_| ())
    }

    /// Validate and parse. This is the entry used by the game flow; it never
    /// panics on bad input.
    pub fn try_parse(raw: &str) -> Result<Coordinate, CoordinateError> {
        Self::validate(raw)?;
        Ok(Self::parse(raw))
    }

    /// Parse input that is already known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `raw` does not pass [`CoordinateParser::validate`]. Callers
    /// holding unchecked input must use [`CoordinateParser::try_parse`].
    pub fn parse(raw: &str) -> Coordinate {
        match Self::clean_and_check(raw) {
            Ok(coordinate) => coordinate,
            Err(e) => panic!("parse called with invalid coordinate {:?}: {}", raw, e),
        }
    }

    /// Strip spaces and tabs, uppercase, then match and convert.
    fn clean_and_check(raw: &str) -> Result<Coordinate, CoordinateError> {
        let cleaned: String = raw
            .chars()
            .filter(|c| *c != ' ' && *c != '\t')
            .collect::<String>()
            .to_uppercase();
        if cleaned.trim().is_empty() {
            return Err(CoordinateError::Empty);
        }
        let captures = COORDINATE
            .captures(&cleaned)
            .ok_or(CoordinateError::Format)?;
        let column = cleaned.chars().next().ok_or(CoordinateError::Format)?;
        let digits = captures.get(1).ok_or(CoordinateError::Format)?.as_str();
        Coordinate::from_display(column, digits)
    }
}
