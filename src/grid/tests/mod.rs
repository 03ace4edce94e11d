//! Unit tests for the assignment grid module.

mod assignment_tests;
mod row_tests;

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock pinned to a fixed instant, for staleness tests.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
