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

//! # Sundial DateTime
//!
//! **Immutable UTC instants with microsecond resolution, and ranges over
//! them.**
//!
//! This crate is the domain layer of the sundial workspace. Every value is
//! normalized to UTC at construction and never mutated afterwards; all
//! arithmetic, truncation, and formatting operations return new values.
//!
//! ## Architecture
//!
//! * **`datetime`**: The `UtcDateTime` instant (`sec` + `usec` since the
//!   Unix epoch) with one named constructor per source representation,
//!   civil-calendar arithmetic, and every supported wire/text format.
//! * **`range`**: `UtcDateTimeRange`, a pair of instants with an explicit
//!   inclusive/exclusive upper bound, query-map building, and lazy
//!   hour/day/month enumeration on top of `sundial_core`.
//! * **`offset`**: Fixed UTC offsets used to interpret parsed wall-clock
//!   strings.
//! * **`calendar`**: Internal proleptic-Gregorian conversions shared by
//!   arithmetic and formatting.
//! * **`error`**: Shape errors (`FormatError`) and domain errors
//!   (`RangeError`), raised synchronously and never swallowed.
//!
//! ## Design Philosophy
//!
//! 1. **One constructor per representation**: there is no dynamically
//!    typed "accept anything" entry point; each external shape has its own
//!    named, fallible constructor.
//! 2. **Exact where it matters**: the internal representation is always
//!    `(sec, usec)`; conversions that lose precision (millisecond wire
//!    integers, condensed rounding) are documented as one-way.
//! 3. **Fail fast**: malformed input is rejected at the constructor with
//!    an error carrying the offending input; nothing is coerced.

pub mod calendar;
pub mod datetime;
pub mod error;
pub mod offset;
pub mod range;

pub use datetime::{Timeval, UtcDateTime};
pub use error::{FormatError, RangeError};
pub use offset::UtcOffset;
pub use range::{Direction, OpenRangeError, UpperBound, UtcDateTimeRange};
