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

//! # Sundial Clock
//!
//! The single place where "now" enters the sundial ecosystem. Everything
//! in `sundial-datetime` is a pure computation over explicit values; any
//! component that needs the current instant takes a [`Clock`] capability
//! instead of reaching for ambient global state.
//!
//! ## Modules
//!
//! - `clock`: The `Clock` trait and its implementations: the system
//!   clock plus the fixed, settable, delayed, and progressive clocks used
//!   to make time-dependent code deterministic under test.
//! - `stopwatch`: Elapsed-time measurement through an injected clock.
//!
//! ## Design Philosophy
//!
//! Test clocks are cheap, single-threaded cell-based values. Handing a
//! `SettableClock` to code under test and advancing it explicitly replaces
//! every sleep-and-hope pattern with a deterministic assertion.

pub mod clock;
pub mod stopwatch;

pub use clock::{Clock, DelayedClock, FixedClock, ProgressiveClock, SettableClock, SystemClock};
pub use stopwatch::{NotStartedError, StopWatch};
