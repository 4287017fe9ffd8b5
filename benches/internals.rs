use std::time::Duration;

use chrono::{DateTime, Utc};
use criterion::{Criterion, criterion_group, criterion_main};

use sigbench::display;
use sigbench::rusage::{self, ResourceSnapshot};
use sigbench::types::{BENCHMARKS, Measurement};

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-02-18T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// How much a single snapshot costs; this overhead sits inside every
/// measurement bracket.
fn bench_snapshot(c: &mut Criterion) {
    c.bench_function("snapshot/children", |b| {
        b.iter(|| ResourceSnapshot::children().unwrap())
    });

    let before = ResourceSnapshot::new(Duration::from_micros(1_250_000));
    let after = ResourceSnapshot::new(Duration::from_micros(1_354_321));
    c.bench_function("snapshot/delta", |b| {
        b.iter(|| rusage::delta(std::hint::black_box(before), std::hint::black_box(after)))
    });
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    group.bench_function("raw_time", |b| {
        b.iter(|| display::format_raw_time(std::hint::black_box(0.104_321)))
    });

    let measurement = Measurement {
        executable: "bench_read_safe".to_string(),
        label: "sigsafe_read()".to_string(),
        user_time_secs: 0.104_321,
        measured_at: fixed_now(),
    };
    group.bench_function("json", |b| b.iter(|| display::format_json(&measurement)));

    group.bench_function("list", |b| b.iter(|| display::format_list(&BENCHMARKS)));

    group.finish();
}

criterion_group!(benches, bench_snapshot, bench_display);
criterion_main!(benches);
