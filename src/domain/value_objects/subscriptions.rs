use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::plans::PlanModel;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemainingTime {
    pub days: i64,
    pub hours: i64,
    pub expired: bool,
}

impl RemainingTime {
    /// Floor-divides the time left before `ends_at` into whole days and the
    /// spill-over hours. Anything at or past the end is expired.
    pub fn until(ends_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = ends_at - now;
        if remaining.num_seconds() <= 0 {
            return Self {
                days: 0,
                hours: 0,
                expired: true,
            };
        }

        let days = remaining.num_days();
        let hours = remaining.num_hours() - days * 24;
        Self {
            days,
            hours,
            expired: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentSubscriptionModel {
    pub subscription_id: i64,
    pub plan: PlanModel,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub remaining: RemainingTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeModel {
    pub plan_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn remaining_time_floors_days_and_hours() {
        let now = Utc::now();
        let ends_at = now + Duration::days(2) + Duration::hours(5) + Duration::minutes(59);

        let remaining = RemainingTime::until(ends_at, now);

        assert_eq!(remaining.days, 2);
        assert_eq!(remaining.hours, 5);
        assert!(!remaining.expired);
    }

    #[test]
    fn remaining_time_past_end_is_expired() {
        let now = Utc::now();

        let remaining = RemainingTime::until(now - Duration::seconds(1), now);

        assert!(remaining.expired);
        assert_eq!(remaining.days, 0);
        assert_eq!(remaining.hours, 0);
    }

    #[test]
    fn remaining_time_exactly_at_end_is_expired() {
        let now = Utc::now();

        assert!(RemainingTime::until(now, now).expired);
    }
}
