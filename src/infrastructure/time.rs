use crate::application::ports::time::Clock;
use chrono::{DateTime, SubsecRound, Utc};

/// Wall clock used for the publication cut-off. Truncated to microseconds,
/// the resolution of a Postgres `timestamptz`, so a post stamped with the
/// value that was just read is already visible.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}
