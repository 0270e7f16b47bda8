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

use std::cell::Cell;
use std::time::SystemTime;
use sundial_datetime::datetime::UtcDateTime;
use sundial_datetime::error::FormatError;

/// A capability that supplies the current UTC instant.
///
/// Components that need "now" take a `Clock` explicitly; nothing in the
/// sundial workspace reads a process-wide clock behind the caller's back.
pub trait Clock {
    /// Returns the current instant according to this clock.
    fn current(&self) -> UtcDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn current(&self) -> UtcDateTime {
        (**self).current()
    }
}

/// The operating-system clock, with microsecond precision.
///
/// This is the only type in the workspace that reads the OS clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    #[inline]
    pub const fn new() -> Self {
        SystemClock
    }
}

impl Clock for SystemClock {
    #[inline]
    fn current(&self) -> UtcDateTime {
        UtcDateTime::from_system_time(SystemTime::now())
    }
}

/// A clock that reports a programmed instant until told otherwise.
///
/// # Examples
///
/// ```rust
/// # use sundial_clock::clock::{Clock, FixedClock};
/// # use sundial_datetime::datetime::UtcDateTime;
///
/// let clock = FixedClock::from_iso8601("2015-01-01 10:00:00")?;
/// assert_eq!(clock.current(), UtcDateTime::from_string("2015-01-01 10:00:00")?);
///
/// clock.now_is(UtcDateTime::from_timestamp(0));
/// assert_eq!(clock.current(), UtcDateTime::minimum());
/// # Ok::<(), sundial_datetime::error::FormatError>(())
/// ```
#[derive(Debug)]
pub struct FixedClock {
    time: Cell<UtcDateTime>,
}

impl FixedClock {
    /// Creates a clock pinned to `time`.
    #[inline]
    pub const fn new(time: UtcDateTime) -> Self {
        Self {
            time: Cell::new(time),
        }
    }

    /// Creates a clock pinned to a parsed ISO-like string.
    ///
    /// # Errors
    ///
    /// Fails with [`FormatError`] if the string does not parse.
    pub fn from_iso8601(input: &str) -> Result<Self, FormatError> {
        Ok(Self::new(UtcDateTime::from_string(input)?))
    }

    /// Reprograms the reported instant.
    #[inline]
    pub fn now_is(&self, time: UtcDateTime) {
        self.time.set(time);
    }
}

impl Clock for FixedClock {
    #[inline]
    fn current(&self) -> UtcDateTime {
        self.time.get()
    }
}

/// Decorates an inner clock with an optional pinned instant.
///
/// While unpinned it is transparent; once pinned (via
/// [`set_current`](Self::set_current) or
/// [`elapse_seconds`](Self::elapse_seconds)) it reports the pinned value
/// until [`reset`](Self::reset).
///
/// # Examples
///
/// ```rust
/// # use sundial_clock::clock::{Clock, FixedClock, SettableClock};
/// # use sundial_datetime::datetime::UtcDateTime;
///
/// let inner = FixedClock::new(UtcDateTime::from_timestamp(1_000));
/// let clock = SettableClock::new(&inner);
///
/// assert_eq!(clock.current(), UtcDateTime::from_timestamp(1_000));
/// assert_eq!(clock.elapse_seconds(30), UtcDateTime::from_timestamp(1_030));
///
/// clock.reset();
/// assert_eq!(clock.current(), UtcDateTime::from_timestamp(1_000));
/// ```
#[derive(Debug)]
pub struct SettableClock<C> {
    inner: C,
    pinned: Cell<Option<UtcDateTime>>,
}

impl<C: Clock> SettableClock<C> {
    /// Creates an unpinned clock over `inner`.
    #[inline]
    pub const fn new(inner: C) -> Self {
        Self {
            inner,
            pinned: Cell::new(None),
        }
    }

    /// Pins the reported instant.
    #[inline]
    pub fn set_current(&self, time: UtcDateTime) {
        self.pinned.set(Some(time));
    }

    /// Moves the reported instant forward by whole seconds and returns
    /// the new value. Pins the clock if it was unpinned.
    pub fn elapse_seconds(&self, seconds: i64) -> UtcDateTime {
        let advanced = self.current().add_seconds(seconds);
        self.set_current(advanced);
        advanced
    }

    /// Unpins the clock, making it transparent over `inner` again.
    #[inline]
    pub fn reset(&self) {
        self.pinned.set(None);
    }
}

impl<C: Clock> Clock for SettableClock<C> {
    #[inline]
    fn current(&self) -> UtcDateTime {
        match self.pinned.get() {
            Some(pinned) => pinned,
            None => self.inner.current(),
        }
    }
}

/// Decorates an inner clock, reporting it delayed by a fixed number of
/// seconds.
///
/// Useful for consumers that must lag behind real time, e.g. to read only
/// data old enough to be settled.
#[derive(Debug, Clone, Copy)]
pub struct DelayedClock<C> {
    inner: C,
    delay_seconds: i64,
}

impl<C: Clock> DelayedClock<C> {
    #[inline]
    pub const fn new(inner: C, delay_seconds: i64) -> Self {
        Self {
            inner,
            delay_seconds,
        }
    }
}

impl<C: Clock> Clock for DelayedClock<C> {
    #[inline]
    fn current(&self) -> UtcDateTime {
        self.inner.current().subtract_seconds(self.delay_seconds)
    }
}

/// A clock that advances itself by a fixed step on every read.
///
/// Each call to [`current`](Clock::current) returns the programmed
/// instant and then moves it forward, so consecutive reads are strictly
/// increasing, which is handy for tests that need distinct timestamps
/// without sleeping.
///
/// # Examples
///
/// ```rust
/// # use sundial_clock::clock::{Clock, ProgressiveClock};
/// # use sundial_datetime::datetime::UtcDateTime;
///
/// let clock = ProgressiveClock::new(UtcDateTime::from_timestamp(0), 1);
/// assert_eq!(clock.current(), UtcDateTime::from_timestamp(0));
/// assert_eq!(clock.current(), UtcDateTime::from_timestamp(1));
/// ```
#[derive(Debug)]
pub struct ProgressiveClock {
    current: Cell<UtcDateTime>,
    step_seconds: i64,
}

impl ProgressiveClock {
    /// Creates a clock starting at `start`, advancing by `step_seconds`
    /// per read.
    #[inline]
    pub const fn new(start: UtcDateTime, step_seconds: i64) -> Self {
        Self {
            current: Cell::new(start),
            step_seconds,
        }
    }

    /// Moves the clock forward by whole seconds without consuming a read.
    #[inline]
    pub fn forward_seconds(&self, seconds: i64) {
        self.current.set(self.current.get().add_seconds(seconds));
    }
}

impl Clock for ProgressiveClock {
    fn current(&self) -> UtcDateTime {
        let now = self.current.get();
        self.current.set(now.add_seconds(self.step_seconds));
        now
    }
}
