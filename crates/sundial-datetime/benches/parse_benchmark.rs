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

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sundial_datetime::datetime::UtcDateTime;
use sundial_datetime::range::UtcDateTimeRange;

const PARSE_INPUTS: &[(&str, &str)] = &[
    ("date_only", "2015-01-01"),
    ("second_precision", "2014-09-01 12:01:02"),
    ("microseconds", "2016-01-01T10:00:42.123456+0000"),
    ("offset_suffix", "2016-07-18T14:53:21+0200"),
];

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_string");
    for (name, input) in PARSE_INPUTS {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| UtcDateTime::from_string(black_box(input)));
        });
    }
    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let instant = UtcDateTime::from_string("2016-01-01T10:00:42.123456+0000")
        .expect("benchmark input parses");

    let mut group = c.benchmark_group("formatting");
    group.bench_function("iso8601_with_microseconds", |b| {
        b.iter(|| black_box(instant).to_iso8601_with_microseconds());
    });
    group.bench_function("condensed", |b| {
        b.iter(|| black_box(instant).to_condensed_iso8601());
    });
    group.finish();
}

fn bench_range_iteration(c: &mut Criterion) {
    let from = UtcDateTime::from_string("2015-01-01").expect("benchmark input parses");

    let mut group = c.benchmark_group("iterate_on_hours");
    for days in [1_i64, 7, 30] {
        let range = UtcDateTimeRange::from_included_to_excluded(from, from.add_days(days));
        group.throughput(Throughput::Elements((days * 24) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &range, |b, range| {
            b.iter(|| range.iterate_on_hours(1).count());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parsing,
    bench_formatting,
    bench_range_iteration
);
criterion_main!(benches);
