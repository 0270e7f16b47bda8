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

use crate::clock::Clock;
use std::cell::Cell;
use sundial_datetime::datetime::UtcDateTime;

/// The stopwatch was queried before [`StopWatch::start`] was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotStartedError;

impl std::fmt::Display for NotStartedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("stopwatch hasn't been started yet")
    }
}

impl std::error::Error for NotStartedError {}

/// Measures elapsed time between [`start`](Self::start) and a later query
/// through an injected [`Clock`].
///
/// Elapsed values are fractional and exact to the microsecond. Restarting
/// is just calling `start` again.
///
/// # Examples
///
/// ```rust
/// # use sundial_clock::clock::{FixedClock, SettableClock};
/// # use sundial_clock::stopwatch::StopWatch;
/// # use sundial_datetime::datetime::UtcDateTime;
///
/// let inner = FixedClock::new(UtcDateTime::from_timestamp(1_000));
/// let clock = SettableClock::new(&inner);
/// let watch = StopWatch::new(&clock);
///
/// watch.start();
/// clock.elapse_seconds(90);
/// assert_eq!(watch.elapsed_seconds(), Ok(90.0));
/// ```
#[derive(Debug)]
pub struct StopWatch<C> {
    clock: C,
    started: Cell<Option<UtcDateTime>>,
}

impl<C: Clock> StopWatch<C> {
    /// Creates a stopwatch that has not been started.
    #[inline]
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            started: Cell::new(None),
        }
    }

    /// Records the clock's current instant as the measurement origin.
    #[inline]
    pub fn start(&self) {
        self.started.set(Some(self.clock.current()));
    }

    /// Fractional seconds elapsed since [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Fails with [`NotStartedError`] if the stopwatch was never started.
    pub fn elapsed_seconds(&self) -> Result<f64, NotStartedError> {
        let started = self.started.get().ok_or(NotStartedError)?;
        Ok(self.clock.current().difference_in_seconds(&started))
    }

    /// Fractional milliseconds elapsed since [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Fails with [`NotStartedError`] if the stopwatch was never started.
    pub fn elapsed_milliseconds(&self) -> Result<f64, NotStartedError> {
        Ok(self.elapsed_seconds()? * 1e3)
    }

    /// Fractional microseconds elapsed since [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Fails with [`NotStartedError`] if the stopwatch was never started.
    pub fn elapsed_microseconds(&self) -> Result<f64, NotStartedError> {
        Ok(self.elapsed_seconds()? * 1e6)
    }
}
