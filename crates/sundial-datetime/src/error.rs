// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Error types for instant construction.
//!
//! Two kinds suffice for the whole crate: a string that does not match an
//! expected shape fails with [`FormatError`], and a numerically valid but
//! out-of-domain value fails with [`RangeError`]. Both are raised
//! synchronously at the violating call; there is no retry or partial
//! success anywhere in this crate.

/// An input string does not match the shape a constructor expects.
///
/// Carries the offending input verbatim so callers can report it.
///
/// # Examples
///
/// ```rust
/// # use sundial_datetime::datetime::UtcDateTime;
///
/// let err = UtcDateTime::from_hourly_precision("2015-02-02 03:10").unwrap_err();
/// assert_eq!(err.input(), "2015-02-02 03:10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    input: String,
    expected: &'static str,
}

impl FormatError {
    #[inline]
    pub(crate) fn new(input: impl Into<String>, expected: &'static str) -> Self {
        Self {
            input: input.into(),
            expected,
        }
    }

    /// The input that failed to parse.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// A description of the shape that was expected.
    #[inline]
    pub fn expected(&self) -> &'static str {
        self.expected
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected {}, got '{}'", self.expected, self.input)
    }
}

impl std::error::Error for FormatError {}

/// A numerically valid value that lies outside its domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// A microsecond count outside `[0, 999_999]`.
    UsecOutOfRange {
        /// The rejected microsecond count.
        got: i64,
    },
    /// A microtime fractional part outside `[0, 1)`.
    FractionalOverflow {
        /// The rejected fractional-seconds value.
        got: f64,
    },
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsecOutOfRange { got } => {
                write!(f, "usec must be within 0 and 999999, got {got}")
            }
            Self::FractionalOverflow { got } => {
                write!(f, "fractional seconds must be within [0, 1), got {got}")
            }
        }
    }
}

impl std::error::Error for RangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_reports_input_and_shape() {
        let err = FormatError::new("garbage", "a 14-digit condensed date time");
        assert_eq!(err.input(), "garbage");
        assert_eq!(
            format!("{err}"),
            "expected a 14-digit condensed date time, got 'garbage'"
        );
    }

    #[test]
    fn test_range_error_messages() {
        assert_eq!(
            format!("{}", RangeError::UsecOutOfRange { got: 1_000_000 }),
            "usec must be within 0 and 999999, got 1000000"
        );
        assert_eq!(
            format!("{}", RangeError::FractionalOverflow { got: 1.5 }),
            "fractional seconds must be within [0, 1), got 1.5"
        );
    }
}
