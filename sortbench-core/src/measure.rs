//! Wall-Clock and CPU-Time Measurement
//!
//! Every trial is timed with two clocks at once: the monotonic wall clock
//! (`std::time::Instant`) and the process CPU-time clock
//! (`CLOCK_PROCESS_CPUTIME_ID`). The start marks are nested inside the end
//! marks (CPU, wall, ..., wall, CPU) so the wall interval never includes the
//! CPU clock read of the opposite end.

use std::time::Duration;

// ─── CPU clock ───────────────────────────────────────────────────────────────

/// Read the CPU time consumed by this process so far.
#[cfg(unix)]
#[inline(always)]
fn read_cpu_time() -> Duration {
    // SAFETY: an all-zero timespec is a valid value, and `ts` is a writable
    // timespec for the duration of the call.
    let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
    if rc != 0 {
        return Duration::ZERO;
    }
    Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32)
}

#[cfg(not(unix))]
#[inline(always)]
fn read_cpu_time() -> Duration {
    Duration::ZERO
}

/// Whether this platform exposes a per-process CPU-time clock.
/// When `false`, CPU-time samples are reported as 0.
pub const HAS_CPU_CLOCK: bool = cfg!(unix);

// ─── Timer ───────────────────────────────────────────────────────────────────

/// Elapsed time of one measured region, in both clocks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elapsed {
    /// Wall-clock time in milliseconds
    pub wall_ms: f64,
    /// Process CPU time in milliseconds
    pub cpu_ms: f64,
}

/// Timer for a single trial
pub struct Timer {
    cpu_start: Duration,
    wall_start: std::time::Instant,
}

impl Timer {
    /// Start a new timer (CPU mark first, wall mark last)
    #[inline(always)]
    pub fn start() -> Self {
        let cpu_start = read_cpu_time();
        Self {
            cpu_start,
            wall_start: std::time::Instant::now(),
        }
    }

    /// Stop the timer (wall mark first, CPU mark last)
    #[inline(always)]
    pub fn stop(&self) -> Elapsed {
        let wall = self.wall_start.elapsed();
        let cpu = read_cpu_time().saturating_sub(self.cpu_start);
        Elapsed {
            wall_ms: wall.as_secs_f64() * 1000.0,
            cpu_ms: cpu.as_secs_f64() * 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_wall_clock() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.stop();

        assert!(elapsed.wall_ms >= 5.0);
        assert!(elapsed.wall_ms < 1000.0);
    }

    #[test]
    fn test_timer_cpu_clock_non_negative() {
        let timer = Timer::start();
        let mut acc = 0u64;
        for i in 0..10_000u64 {
            acc = acc.wrapping_mul(31).wrapping_add(i);
        }
        std::hint::black_box(acc);
        let elapsed = timer.stop();

        assert!(elapsed.cpu_ms >= 0.0);
        assert!(elapsed.wall_ms >= 0.0);
    }

    #[test]
    fn test_cpu_clock_monotonic() {
        if HAS_CPU_CLOCK {
            let a = read_cpu_time();
            let mut acc = 0u64;
            for i in 0..100_000u64 {
                acc = acc.wrapping_add(i * i);
            }
            std::hint::black_box(acc);
            let b = read_cpu_time();
            assert!(b >= a, "process CPU clock should be monotonic");
        }
    }
}
