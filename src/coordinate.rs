//! Grid coordinates in both zero-based and human ("B7") notation.

use core::fmt;

use serde::Serialize;

use crate::common::CoordinateError;

/// A cell position: zero-based column and row.
///
/// Columns are displayed as letters starting at `A`, rows as numbers starting
/// at `1`. Negative values are allowed so that the margin around a ship at the
/// edge of the grid can be expressed; they never lie on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    column: i32,
    row: i32,
}

impl Coordinate {
    /// Create a coordinate from zero-based column and row.
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Create a coordinate from its display form, e.g. `('B', "7")`.
    ///
    /// The row must be a positive integer; the column letter is taken as-is.
    pub fn from_display(column: char, row: &str) -> Result<Self, CoordinateError> {
        let row: i32 = row.parse().map_err(|_| CoordinateError::NumericOverflow)?;
        if row < 1 {
            return Err(CoordinateError::NumericOverflow);
        }
        Ok(Self {
            column: column as i32 - 'A' as i32,
            row: row - 1,
        })
    }

    /// Zero-based column.
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Zero-based row.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Column letter, `A` for column 0.
    pub fn column_char(&self) -> char {
        u32::try_from('A' as i32 + self.column)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or('?')
    }

    /// One-based row number as displayed to the player.
    pub fn row_display(&self) -> String {
        (i64::from(self.row) + 1).to_string()
    }

    /// The coordinate shifted by the given column and row offsets.
    pub fn offset(&self, columns: i32, rows: i32) -> Self {
        Self::new(self.column + columns, self.row + rows)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_char(), self.row_display())
    }
}

impl core::str::FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::CoordinateParser::try_parse(s)
    }
}
