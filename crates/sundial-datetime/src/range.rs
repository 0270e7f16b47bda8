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

//! # Instant Ranges
//!
//! `UtcDateTimeRange` pairs two instants with an explicit upper-bound
//! policy. The policy is fixed at construction and drives both query
//! formatting (`$lt` vs `$lte`) and iteration termination (`<` vs `<=`).
//!
//! Ranges do not require `from <= to`: descending ranges are legal and
//! reported by [`UtcDateTimeRange::direction`]. Enumeration is handed off
//! to `sundial_core`'s `LazySequence`, parameterized with the instant
//! arithmetic of this crate.

use crate::datetime::{Timeval, UtcDateTime};
use std::collections::HashMap;
use sundial_core::sequence::generator::LazySequence;

/// Whether a range's upper endpoint is itself a member of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpperBound {
    /// The upper endpoint is excluded: iteration and queries use `<`.
    Excluded,
    /// The upper endpoint is included: iteration and queries use `<=`.
    Included,
}

/// The orientation of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `from <= to` (equal endpoints count as ascending).
    Ascending,
    /// `from > to`.
    Descending,
}

/// Reversing a range with an excluded upper bound is not representable.
///
/// An excluded-upper range reversed would need an excluded *lower* bound,
/// which this type cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenRangeError;

impl std::fmt::Display for OpenRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("can't reverse an open range")
    }
}

impl std::error::Error for OpenRangeError {}

/// The lazy enumeration produced by a range's `iterate_on_*` methods.
pub type RangeSequence<S> =
    LazySequence<UtcDateTime, fn(&UtcDateTime, &UtcDateTime) -> bool, S>;

/// A pair of instants with an explicit upper-bound policy.
///
/// # Examples
///
/// ```rust
/// # use sundial_datetime::datetime::UtcDateTime;
/// # use sundial_datetime::range::UtcDateTimeRange;
///
/// let range = UtcDateTimeRange::from_included_to_excluded(
///     UtcDateTime::from_string("2015-01-01 03:00")?,
///     UtcDateTime::from_string("2015-01-01 05:00")?,
/// );
///
/// let hours: Vec<String> = range
///     .iterate_on_hours(1)
///     .map(|instant| instant.to_hourly_precision())
///     .collect();
/// assert_eq!(hours, vec!["2015-01-01 03", "2015-01-01 04"]);
/// # Ok::<(), sundial_datetime::error::FormatError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcDateTimeRange {
    from: UtcDateTime,
    to: UtcDateTime,
    upper_bound: UpperBound,
}

impl UtcDateTimeRange {
    /// Creates a half-open range `[from, to)`.
    #[inline]
    pub const fn from_included_to_excluded(from: UtcDateTime, to: UtcDateTime) -> Self {
        Self {
            from,
            to,
            upper_bound: UpperBound::Excluded,
        }
    }

    /// Creates a closed range `[from, to]`.
    #[inline]
    pub const fn from_included_to_included(from: UtcDateTime, to: UtcDateTime) -> Self {
        Self {
            from,
            to,
            upper_bound: UpperBound::Included,
        }
    }

    /// The widest legal range: `[minimum, maximum]`, both included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    /// # use sundial_datetime::range::UtcDateTimeRange;
    ///
    /// assert_eq!(
    ///     UtcDateTimeRange::from_minimum_to_maximum(),
    ///     UtcDateTimeRange::from_included_to_included(
    ///         UtcDateTime::minimum(),
    ///         UtcDateTime::maximum(),
    ///     )
    /// );
    /// ```
    #[inline]
    pub const fn from_minimum_to_maximum() -> Self {
        Self::from_included_to_included(UtcDateTime::minimum(), UtcDateTime::maximum())
    }

    /// The lower endpoint, always included.
    #[inline]
    pub const fn from(&self) -> UtcDateTime {
        self.from
    }

    /// The upper endpoint; whether it belongs to the range depends on
    /// [`upper_bound`](Self::upper_bound).
    #[inline]
    pub const fn to(&self) -> UtcDateTime {
        self.to
    }

    /// The upper-bound policy fixed at construction.
    #[inline]
    pub const fn upper_bound(&self) -> UpperBound {
        self.upper_bound
    }

    /// Builds the two-entry query mapping with the default lossless
    /// [`Timeval`] formatter.
    ///
    /// The lower bound is always keyed `"$gte"`; the upper bound is keyed
    /// `"$lt"` or `"$lte"` depending on the bound policy.
    #[inline]
    pub fn to_query(&self) -> HashMap<&'static str, Timeval> {
        self.to_query_with(|instant| instant.to_timeval())
    }

    /// Builds the query mapping with an injected formatter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    /// # use sundial_datetime::range::UtcDateTimeRange;
    ///
    /// let range = UtcDateTimeRange::from_included_to_included(
    ///     UtcDateTime::from_string("1985-05-21")?,
    ///     UtcDateTime::from_string("2015-05-21")?,
    /// );
    ///
    /// let query = range.to_query_with(|instant| instant.to_hourly_precision());
    /// assert_eq!(query["$gte"], "1985-05-21 00");
    /// assert_eq!(query["$lte"], "2015-05-21 00");
    /// # Ok::<(), sundial_datetime::error::FormatError>(())
    /// ```
    pub fn to_query_with<T>(
        &self,
        formatter: impl Fn(&UtcDateTime) -> T,
    ) -> HashMap<&'static str, T> {
        let mut query = HashMap::with_capacity(2);
        query.insert("$gte", formatter(&self.from));
        query.insert(self.upper_key(), formatter(&self.to));
        query
    }

    /// Builds the query mapping with the lossy millisecond-integer
    /// formatter ([`UtcDateTime::to_epoch_millis`]).
    #[inline]
    pub fn to_millis_query(&self) -> HashMap<&'static str, i64> {
        self.to_query_with(|instant| instant.to_epoch_millis())
    }

    /// Wraps [`to_query`](Self::to_query) one level deeper under a field
    /// name.
    pub fn to_query_on_field(&self, field: &str) -> HashMap<String, HashMap<&'static str, Timeval>> {
        self.to_query_on_field_with(field, |instant| instant.to_timeval())
    }

    /// Wraps [`to_query_with`](Self::to_query_with) one level deeper
    /// under a field name.
    pub fn to_query_on_field_with<T>(
        &self,
        field: &str,
        formatter: impl Fn(&UtcDateTime) -> T,
    ) -> HashMap<String, HashMap<&'static str, T>> {
        let mut wrapped = HashMap::with_capacity(1);
        wrapped.insert(field.to_owned(), self.to_query_with(formatter));
        wrapped
    }

    #[inline]
    fn upper_key(&self) -> &'static str {
        match self.upper_bound {
            UpperBound::Excluded => "$lt",
            UpperBound::Included => "$lte",
        }
    }

    /// Both endpoints in the condensed API form, joined by `..`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sundial_datetime::datetime::UtcDateTime;
    /// # use sundial_datetime::range::UtcDateTimeRange;
    ///
    /// let range = UtcDateTimeRange::from_included_to_excluded(
    ///     UtcDateTime::from_string("2015-01-01")?,
    ///     UtcDateTime::from_string("2015-01-02")?,
    /// );
    /// assert_eq!(range.to_api_format(), "20150101000000..20150102000000");
    /// # Ok::<(), sundial_datetime::error::FormatError>(())
    /// ```
    pub fn to_api_format(&self) -> String {
        format!("{}..{}", self.from.to_api_format(), self.to.to_api_format())
    }

    /// Swaps the endpoints, keeping the bound policy.
    ///
    /// # Errors
    ///
    /// Fails with [`OpenRangeError`] when the upper bound is excluded: the
    /// reversed range would need an excluded lower bound, which this type
    /// cannot represent.
    pub fn reverse(&self) -> Result<Self, OpenRangeError> {
        match self.upper_bound {
            UpperBound::Excluded => Err(OpenRangeError),
            UpperBound::Included => Ok(Self {
                from: self.to,
                to: self.from,
                upper_bound: self.upper_bound,
            }),
        }
    }

    /// Reports whether the range ascends or descends. Equal endpoints
    /// count as ascending.
    #[inline]
    pub fn direction(&self) -> Direction {
        if self.from <= self.to {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    /// Lazily enumerates the range in steps of `increment` hours,
    /// starting at `from`.
    #[inline]
    pub fn iterate_on_hours(
        &self,
        increment: i64,
    ) -> RangeSequence<impl Fn(&UtcDateTime) -> UtcDateTime> {
        self.sequence_with(move |instant: &UtcDateTime| instant.add_hours(increment))
    }

    /// Lazily enumerates the range in steps of `increment` days,
    /// starting at `from`.
    #[inline]
    pub fn iterate_on_days(
        &self,
        increment: i64,
    ) -> RangeSequence<impl Fn(&UtcDateTime) -> UtcDateTime> {
        self.sequence_with(move |instant: &UtcDateTime| instant.add_days(increment))
    }

    /// Lazily enumerates the range in steps of `increment` calendar
    /// months, starting at `from`.
    #[inline]
    pub fn iterate_on_months(
        &self,
        increment: i64,
    ) -> RangeSequence<impl Fn(&UtcDateTime) -> UtcDateTime> {
        self.sequence_with(move |instant: &UtcDateTime| instant.add_months(increment))
    }

    fn sequence_with<S>(&self, stepper: S) -> RangeSequence<S>
    where
        S: Fn(&UtcDateTime) -> UtcDateTime,
    {
        fn less_than(a: &UtcDateTime, b: &UtcDateTime) -> bool {
            a < b
        }
        fn less_than_or_equal(a: &UtcDateTime, b: &UtcDateTime) -> bool {
            a <= b
        }
        let continues = match self.upper_bound {
            UpperBound::Excluded => less_than as fn(&UtcDateTime, &UtcDateTime) -> bool,
            UpperBound::Included => less_than_or_equal,
        };
        LazySequence::new(self.from, self.to, continues, stepper)
    }
}

impl std::fmt::Display for UtcDateTimeRange {
    /// Mathematical interval notation over the exact ISO-microseconds
    /// forms: `[from,to)` for excluded, `[from,to]` for included bounds.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bracket = match self.upper_bound {
            UpperBound::Excluded => ')',
            UpperBound::Included => ']',
        };
        write!(
            f,
            "[{},{}{}",
            self.from.to_iso8601_with_microseconds(),
            self.to.to_iso8601_with_microseconds(),
            bracket
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> UtcDateTime {
        UtcDateTime::from_string(s).expect("test input parses")
    }

    #[test]
    fn test_closed_range_query() {
        let range =
            UtcDateTimeRange::from_included_to_included(date("1985-05-21"), date("2015-05-21"));

        let query = range.to_query();
        assert_eq!(query.len(), 2);
        assert_eq!(query["$gte"], Timeval::new(485_481_600, 0));
        assert_eq!(query["$lte"], Timeval::new(1_432_166_400, 0));
    }

    #[test]
    fn test_right_open_range_query() {
        let range =
            UtcDateTimeRange::from_included_to_excluded(date("1985-05-21"), date("2015-05-21"));

        let query = range.to_query();
        assert_eq!(query["$gte"], Timeval::new(485_481_600, 0));
        assert_eq!(query["$lt"], Timeval::new(1_432_166_400, 0));
        assert!(!query.contains_key("$lte"));
    }

    #[test]
    fn test_query_with_custom_formatter() {
        let range = UtcDateTimeRange::from_included_to_excluded(
            date("1985-05-21 10:00"),
            date("2015-05-21 12:00"),
        );

        let query = range.to_query_with(|instant| instant.to_hourly_precision());
        assert_eq!(query["$gte"], "1985-05-21 10");
        assert_eq!(query["$lt"], "2015-05-21 12");
    }

    #[test]
    fn test_query_on_field() {
        let range =
            UtcDateTimeRange::from_included_to_included(date("1985-05-21"), date("2015-05-21"));

        let wrapped = range.to_query_on_field("goofy");
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped["goofy"], range.to_query());

        let formatted =
            range.to_query_on_field_with("goofy", |instant| instant.to_hourly_precision());
        assert_eq!(formatted["goofy"]["$gte"], "1985-05-21 00");
        assert_eq!(formatted["goofy"]["$lte"], "2015-05-21 00");
    }

    #[test]
    fn test_millis_query_binds_lossy_formatter() {
        let from = date("2015-01-01").with_usec(123_600).unwrap();
        let range = UtcDateTimeRange::from_included_to_excluded(from, date("2015-01-02"));

        let query = range.to_millis_query();
        // Rounded to the nearest millisecond on the way out.
        assert_eq!(query["$gte"], 1_420_070_400_124);
        assert_eq!(query["$lt"], 1_420_156_800_000);
    }

    #[test]
    fn test_accessors() {
        let from = date("1985-05-21 10:00");
        let to = date("2015-05-21 12:00");
        let range = UtcDateTimeRange::from_included_to_excluded(from, to);

        assert_eq!(range.from(), from);
        assert_eq!(range.to(), to);
        assert_eq!(range.upper_bound(), UpperBound::Excluded);
    }

    #[test]
    fn test_api_format() {
        let range =
            UtcDateTimeRange::from_included_to_excluded(date("2015-01-01"), date("2015-01-02"));
        assert_eq!(range.to_api_format(), "20150101000000..20150102000000");
    }

    #[test]
    fn test_hourly_iteration_excluded() {
        let range = UtcDateTimeRange::from_included_to_excluded(
            date("2015-01-01 03:00"),
            date("2015-01-01 05:00"),
        );
        assert_eq!(
            range.iterate_on_hours(1).collect::<Vec<_>>(),
            vec![date("2015-01-01 03:00"), date("2015-01-01 04:00")]
        );
    }

    #[test]
    fn test_hourly_iteration_included() {
        let range = UtcDateTimeRange::from_included_to_included(
            date("2015-01-01 03:00"),
            date("2015-01-01 05:00"),
        );
        assert_eq!(
            range.iterate_on_hours(1).collect::<Vec<_>>(),
            vec![
                date("2015-01-01 03:00"),
                date("2015-01-01 04:00"),
                date("2015-01-01 05:00"),
            ]
        );
    }

    #[test]
    fn test_daily_iteration_with_step_two() {
        let range = UtcDateTimeRange::from_included_to_excluded(
            date("2015-01-01 03:00"),
            date("2015-01-05 03:00"),
        );
        assert_eq!(
            range.iterate_on_days(2).collect::<Vec<_>>(),
            vec![date("2015-01-01 03:00"), date("2015-01-03 03:00")]
        );
    }

    #[test]
    fn test_daily_iteration_included_partial_tail() {
        // The upper endpoint is included but the step overshoots it, so
        // the last emitted value is the one before the overshoot.
        let range = UtcDateTimeRange::from_included_to_included(
            date("2015-01-01 03:00"),
            date("2015-01-03 05:00"),
        );
        assert_eq!(
            range.iterate_on_days(1).collect::<Vec<_>>(),
            vec![
                date("2015-01-01 03:00"),
                date("2015-01-02 03:00"),
                date("2015-01-03 03:00"),
            ]
        );
    }

    #[test]
    fn test_monthly_iteration() {
        let excluded = UtcDateTimeRange::from_included_to_excluded(
            date("2015-01-01 03:00"),
            date("2015-05-01 03:00"),
        );
        assert_eq!(
            excluded.iterate_on_months(2).collect::<Vec<_>>(),
            vec![date("2015-01-01 03:00"), date("2015-03-01 03:00")]
        );

        let included = UtcDateTimeRange::from_included_to_included(
            date("2015-01-01 03:00"),
            date("2015-04-01 05:00"),
        );
        assert_eq!(
            included.iterate_on_months(1).collect::<Vec<_>>(),
            vec![
                date("2015-01-01 03:00"),
                date("2015-02-01 03:00"),
                date("2015-03-01 03:00"),
                date("2015-04-01 03:00"),
            ]
        );
    }

    #[test]
    fn test_iteration_restarts() {
        let range = UtcDateTimeRange::from_included_to_excluded(
            date("2015-01-01 03:00"),
            date("2015-01-01 05:00"),
        );
        let mut sequence = range.iterate_on_hours(1);
        assert_eq!(sequence.by_ref().count(), 2);
        sequence.restart();
        assert_eq!(sequence.count(), 2);
    }

    #[test]
    fn test_descending_range_yields_nothing() {
        let range = UtcDateTimeRange::from_included_to_included(
            date("2015-04-01"),
            date("2015-01-01"),
        );
        assert_eq!(range.iterate_on_days(1).count(), 0);

        // Reversing makes it enumerable again.
        let reversed = range.reverse().unwrap();
        assert_eq!(reversed.iterate_on_months(1).count(), 4);
    }

    #[test]
    fn test_reverse_round_trips_for_closed_ranges() {
        let range = UtcDateTimeRange::from_included_to_included(
            date("2015-04-01 05:00:00.123456"),
            date("2015-01-01 03:00:00.123456"),
        );
        let reversed = range.reverse().unwrap();
        assert_eq!(
            reversed,
            UtcDateTimeRange::from_included_to_included(
                date("2015-01-01 03:00:00.123456"),
                date("2015-04-01 05:00:00.123456"),
            )
        );
        assert_eq!(reversed.reverse().unwrap(), range);
    }

    #[test]
    fn test_reverse_fails_on_open_ranges() {
        let range = UtcDateTimeRange::from_included_to_excluded(
            date("2015-04-01 05:00:00.123456"),
            date("2015-01-01 03:00:00.123456"),
        );
        let err = range.reverse().unwrap_err();
        assert_eq!(format!("{err}"), "can't reverse an open range");
    }

    #[test]
    fn test_direction() {
        let ascending = UtcDateTimeRange::from_included_to_excluded(
            date("2015-01-01 03:00:00.123456"),
            date("2015-04-01 05:00:00.123456"),
        );
        assert_eq!(ascending.direction(), Direction::Ascending);

        let equal = UtcDateTimeRange::from_included_to_excluded(
            date("2015-01-01 03:00:00.123456"),
            date("2015-01-01 03:00:00.123456"),
        );
        assert_eq!(equal.direction(), Direction::Ascending);

        let descending = UtcDateTimeRange::from_included_to_excluded(
            date("2015-04-01 05:00:00.123456"),
            date("2015-01-01 03:00:00.123456"),
        );
        assert_eq!(descending.direction(), Direction::Descending);
    }

    #[test]
    fn test_display_uses_interval_notation() {
        let closed = UtcDateTimeRange::from_included_to_included(
            date("2015-01-01 03:00:00.123456"),
            date("2015-04-01 05:00:00.123456"),
        );
        assert_eq!(
            format!("{closed}"),
            "[2015-01-01T03:00:00.123456+0000,2015-04-01T05:00:00.123456+0000]"
        );

        let open = UtcDateTimeRange::from_included_to_excluded(
            date("2015-01-01 03:00:00.123456"),
            date("2015-04-01 05:00:00.123456"),
        );
        assert_eq!(
            format!("{open}"),
            "[2015-01-01T03:00:00.123456+0000,2015-04-01T05:00:00.123456+0000)"
        );
    }

    #[test]
    fn test_maximum_range() {
        let widest = UtcDateTimeRange::from_minimum_to_maximum();
        assert_eq!(widest.from(), UtcDateTime::minimum());
        assert_eq!(widest.to(), UtcDateTime::maximum());
        assert_eq!(widest.upper_bound(), UpperBound::Included);
        assert_eq!(widest.direction(), Direction::Ascending);
    }
}
