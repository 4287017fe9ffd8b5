use std::fmt;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

/// An executable in the benchmark directory paired with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    pub executable: &'static str,
    pub label: &'static str,
}

/// The read() microbenchmarks, in display order.
pub const BENCHMARKS: [Benchmark; 3] = [
    Benchmark {
        executable: "bench_read_raw",
        label: "Raw read()",
    },
    Benchmark {
        executable: "bench_read_safe",
        label: "sigsafe_read()",
    },
    Benchmark {
        executable: "bench_read_select",
        label: "select()+read()",
    },
];

impl Benchmark {
    pub fn by_label(label: &str) -> Option<Benchmark> {
        BENCHMARKS.iter().copied().find(|b| b.label == label)
    }

    pub fn by_executable(name: &str) -> Option<Benchmark> {
        BENCHMARKS.iter().copied().find(|b| b.executable == name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BenchmarkKind {
    Raw,
    #[default]
    Safe,
    Select,
}

impl BenchmarkKind {
    pub fn benchmark(self) -> Benchmark {
        match self {
            BenchmarkKind::Raw => BENCHMARKS[0],
            BenchmarkKind::Safe => BENCHMARKS[1],
            BenchmarkKind::Select => BENCHMARKS[2],
        }
    }
}

/// How an unsuccessful child ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exited(code) => write!(f, "failed with exit status {code}"),
            Termination::Signaled(signal) => write!(f, "was killed by signal {signal}"),
        }
    }
}

/// One timed run of a benchmark executable.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub executable: String,
    pub label: String,
    pub user_time_secs: f64,
    pub measured_at: DateTime<Utc>,
}
