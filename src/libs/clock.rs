//! Time source for task construction and overdue checks.
//!
//! Tasks are backdated by a random number of whole days when they are built
//! so demo data has some variety in the overdue column. Both "now" and the
//! backdating come from a [`Clock`], which lets tests pin them.

use chrono::{DateTime, Duration, Local};
use rand::Rng;

/// Upper bound (exclusive) of the random backdating, in days.
pub const MAX_BACKDATE_DAYS: i64 = 14;

pub trait Clock: Send + Sync {
    /// Current point in time.
    fn now(&self) -> DateTime<Local>;

    /// Number of whole days a freshly built task is backdated by.
    fn backdate_days(&self) -> i64 {
        rand::thread_rng().gen_range(0..MAX_BACKDATE_DAYS)
    }

    /// Creation timestamp for a task built right now.
    fn creation_stamp(&self) -> DateTime<Local> {
        self.now() - Duration::days(self.backdate_days())
    }
}

/// Wall clock with random backdating.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a fixed instant with a fixed backdate.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: DateTime<Local>,
    pub backdate_days: i64,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now, backdate_days: 0 }
    }

    pub fn with_backdate(mut self, days: i64) -> Self {
        self.backdate_days = days;
        self
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }

    fn backdate_days(&self) -> i64 {
        self.backdate_days
    }
}
