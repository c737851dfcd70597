use std::time::{SystemTime, UNIX_EPOCH};

use pl_core::ports::ClockPort;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        // A pre-epoch system clock reads as 0 rather than panicking; the
        // store layers above never panic on bad backend state.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0)
    }
}
