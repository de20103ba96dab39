use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Trailing window for "recent" product and order counts.
pub const RECENT_ACTIVITY_DAYS: i64 = 14;
/// Age after which a pending order counts as stale.
pub const STALE_PENDING_HOURS: i64 = 48;

/// Time boundaries a metrics source must use when gathering counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsWindow {
    /// Products and orders created at or after this instant are "recent".
    pub recent_since: DateTime<Utc>,
    /// Pending orders created before this instant are "stale".
    pub stale_pending_before: DateTime<Utc>,
}

impl MetricsWindow {
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        Self {
            recent_since: now - Duration::days(RECENT_ACTIVITY_DAYS),
            stale_pending_before: now - Duration::hours(STALE_PENDING_HOURS),
        }
    }

    pub fn is_recent(&self, created_at: DateTime<Utc>) -> bool {
        created_at >= self.recent_since
    }

    pub fn is_stale_pending(&self, created_at: DateTime<Utc>) -> bool {
        created_at < self.stale_pending_before
    }
}
