use chrono::{DateTime, Duration, Utc};

/// Tasks due within this many hours from now are `Urgent`.
pub const URGENT_WINDOW_HOURS: i64 = 24;

pub fn urgent_window() -> Duration {
    Duration::hours(URGENT_WINDOW_HOURS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyTier {
    Overdue,
    Urgent,
    OnTime,
}

impl UrgencyTier {
    pub fn css_class(&self) -> &'static str {
        match self {
            UrgencyTier::Overdue => "overdue",
            UrgencyTier::Urgent => "urgent",
            UrgencyTier::OnTime => "on-time",
        }
    }
}

pub fn classify(due: DateTime<Utc>, now: DateTime<Utc>) -> UrgencyTier {
    if due < now {
        UrgencyTier::Overdue
    } else if due < now + urgent_window() {
        UrgencyTier::Urgent
    } else {
        UrgencyTier::OnTime
    }
}
