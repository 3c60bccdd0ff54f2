//! Re-entrancy guard for programmatic smooth scrolls.
//!
//! The guard holds a release deadline instead of a flag plus a timer, so it
//! can never stay set past the cooldown even if a timer callback is lost. The
//! widget releases it early when the track reports `scrollend`. The deadline
//! is only an estimate of how long the browser animation runs.

/// Busy state for one carousel.
#[derive(Debug, Clone, Default)]
pub struct BusyGuard {
    release_at: Option<f64>,
}

impl BusyGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a programmatic scroll is presumed in flight at `now_ms`.
    pub fn is_busy(&self, now_ms: f64) -> bool {
        self.release_at.is_some_and(|at| now_ms < at)
    }

    /// Arm the guard for `cooldown_ms` if it is free.
    ///
    /// Returns `false` without touching the deadline when already busy.
    pub fn try_acquire(&mut self, now_ms: f64, cooldown_ms: f64) -> bool {
        if self.is_busy(now_ms) {
            return false;
        }
        self.release_at = Some(now_ms + cooldown_ms);
        true
    }

    /// Free the guard ahead of its deadline.
    pub fn release(&mut self) {
        self.release_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_starts_free() {
        let guard = BusyGuard::new();
        assert!(!guard.is_busy(0.0));
        assert!(!guard.is_busy(f64::MAX));
    }

    #[test]
    fn test_deadline_is_exclusive() {
        let mut guard = BusyGuard::new();
        assert!(guard.try_acquire(1000.0, 300.0));
        assert!(guard.is_busy(1299.9));
        assert!(!guard.is_busy(1300.0));
    }

    #[test]
    fn test_rejected_acquire_keeps_deadline() {
        let mut guard = BusyGuard::new();
        assert!(guard.try_acquire(0.0, 300.0));
        assert!(!guard.try_acquire(200.0, 300.0));
        assert!(guard.is_busy(299.0));
        assert!(!guard.is_busy(300.0));
    }
}
