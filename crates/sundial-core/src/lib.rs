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

//! # Sundial Core
//!
//! Foundational, domain-agnostic building blocks for the sundial time
//! ecosystem. This crate deliberately knows nothing about dates, clocks,
//! or calendars; it provides the generic machinery that higher-level
//! crates parameterize with their own value types.
//!
//! ## Modules
//!
//! - `sequence`: A restartable, pull-based lazy sequence (`LazySequence`)
//!   driven by a start value, a stepper function, and a continuation
//!   predicate, with full `Iterator`/`FusedIterator` integration.
//!
//! ## Purpose
//!
//! Range enumeration over domain values (instants, identifiers, offsets)
//! keeps reappearing with the same shape: start somewhere, advance by a
//! pure function, stop when a predicate against a limit fails. Capturing
//! that shape once keeps the domain crates free of ad-hoc cursor logic.
//!
//! Refer to each module for detailed APIs and examples.

pub mod sequence;
