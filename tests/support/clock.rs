// tests/support/clock.rs
use chrono::{DateTime, TimeZone, Utc};
use fundops_core::application::ports::time::Clock;

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn build_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 15, 12, 0, 0).unwrap()
}
