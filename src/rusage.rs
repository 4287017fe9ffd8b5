use std::mem::MaybeUninit;
use std::time::Duration;

use crate::errors::SigbenchError;

/// Cumulative user CPU time of every terminated, reaped child of this process.
///
/// The kernel only ever adds to this counter, so two snapshots taken around a
/// single spawn-and-wait bracket exactly that child's user time, as long as
/// nothing else is spawned from this process in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResourceSnapshot {
    pub user_time: Duration,
}

impl ResourceSnapshot {
    pub fn new(user_time: Duration) -> Self {
        Self { user_time }
    }

    /// Read `RUSAGE_CHILDREN` from the OS.
    pub fn children() -> Result<Self, SigbenchError> {
        let mut usage = MaybeUninit::<libc::rusage>::uninit();
        // SAFETY: `usage` is a valid out-pointer; getrusage writes the whole
        // struct when it returns 0.
        let rc = unsafe { libc::getrusage(libc::RUSAGE_CHILDREN, usage.as_mut_ptr()) };
        if rc != 0 {
            return Err(SigbenchError::SnapshotFailed {
                source: std::io::Error::last_os_error(),
            });
        }
        // SAFETY: initialised by the successful call above.
        let usage = unsafe { usage.assume_init() };
        Ok(Self::new(timeval_to_duration(usage.ru_utime)))
    }
}

fn timeval_to_duration(tv: libc::timeval) -> Duration {
    let secs = u64::try_from(tv.tv_sec).unwrap_or(0);
    let micros = u32::try_from(tv.tv_usec).unwrap_or(0);
    Duration::new(secs, 0) + Duration::from_micros(u64::from(micros))
}

/// User CPU seconds elapsed between two snapshots.
///
/// Negative only if `after` was actually taken before `before`.
pub fn delta(before: ResourceSnapshot, after: ResourceSnapshot) -> f64 {
    after.user_time.as_secs_f64() - before.user_time.as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(millis: u64) -> ResourceSnapshot {
        ResourceSnapshot::new(Duration::from_millis(millis))
    }

    #[test]
    fn delta_of_equal_snapshots_is_zero() {
        assert_eq!(delta(snap(1500), snap(1500)), 0.0);
    }

    #[test]
    fn delta_is_after_minus_before() {
        let d = delta(snap(250), snap(1750));
        assert!((d - 1.5).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn delta_goes_negative_when_order_is_swapped() {
        assert!(delta(snap(2000), snap(1000)) < 0.0);
    }

    #[test]
    fn timeval_conversion_keeps_microseconds() {
        let tv = libc::timeval {
            tv_sec: 3,
            tv_usec: 250_000,
        };
        assert_eq!(timeval_to_duration(tv), Duration::from_millis(3250));
    }

    #[test]
    fn children_snapshot_is_monotonic() {
        let first = ResourceSnapshot::children().unwrap();
        let second = ResourceSnapshot::children().unwrap();
        assert!(second >= first);
    }
}
