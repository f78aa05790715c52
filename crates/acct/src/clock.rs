use std::time::{SystemTime, UNIX_EPOCH};

/// Opaque time source threaded unmodified into message construction.
#[cfg_attr(feature = "test-utils", mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current unix time in milliseconds.
    fn now_ms(&self) -> u64;
}

/// Plain wall-clock time.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// Wall clock shifted by a constant offset, for adapters that correct local
/// time against ledger time.
#[derive(Copy, Clone, Debug)]
pub struct OffsetClock {
    offset_ms: i64,
}

impl OffsetClock {
    pub fn new(offset_ms: i64) -> Self {
        Self { offset_ms }
    }

    pub fn offset_ms(&self) -> i64 {
        self.offset_ms
    }
}

impl Clock for OffsetClock {
    fn now_ms(&self) -> u64 {
        SystemClock.now_ms().saturating_add_signed(self.offset_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clock_shifts_both_ways() {
        let now = SystemClock.now_ms();
        assert!(OffsetClock::new(60_000).now_ms() >= now + 60_000 - 1_000);
        assert!(OffsetClock::new(-60_000).now_ms() <= now);
    }
}
