use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus};

use chrono::Utc;
use tracing::{debug, warn};

use crate::errors::SigbenchError;
use crate::rusage::{ResourceSnapshot, delta};
use crate::types::{Benchmark, Measurement, Termination};

/// Measure the user CPU time of one run of `./<name>`.
pub fn measure(name: &str) -> Result<f64, SigbenchError> {
    measure_in(Path::new("."), name)
}

/// Measure the user CPU time of one run of `<dir>/<name>`, in seconds.
///
/// The child gets `name` as argv[0] and no other arguments, and inherits the
/// environment and standard streams. `Command::status` waits for and reaps
/// the child on every path, so no zombie is left behind. Nothing else may be
/// spawned from this process while a measurement is in flight.
pub fn measure_in(dir: &Path, name: &str) -> Result<f64, SigbenchError> {
    let program = dir.join(name);

    let before = ResourceSnapshot::children()?;
    debug!(executable = name, path = %program.display(), "spawning benchmark");

    let status = Command::new(&program)
        .arg0(name)
        .status()
        .map_err(|source| SigbenchError::SpawnFailed {
            name: name.to_string(),
            source,
        })?;

    if !status.success() {
        let status = termination(status);
        warn!(executable = name, %status, "benchmark did not succeed");
        return Err(SigbenchError::BenchmarkFailed {
            name: name.to_string(),
            status,
        });
    }

    let after = ResourceSnapshot::children()?;
    let elapsed = delta(before, after);
    debug!(executable = name, user_time_secs = elapsed, "benchmark finished");

    Ok(elapsed)
}

/// Measure a benchmark from the fixed list and record the result.
pub fn run(benchmark: Benchmark, dir: &Path) -> Result<Measurement, SigbenchError> {
    let user_time_secs = measure_in(dir, benchmark.executable)?;
    Ok(Measurement {
        executable: benchmark.executable.to_string(),
        label: benchmark.label.to_string(),
        user_time_secs,
        measured_at: Utc::now(),
    })
}

fn termination(status: ExitStatus) -> Termination {
    match (status.code(), status.signal()) {
        (Some(code), _) => Termination::Exited(code),
        (None, Some(signal)) => Termination::Signaled(signal),
        // wait(2) without WUNTRACED never reports a stopped child.
        (None, None) => Termination::Exited(-1),
    }
}
