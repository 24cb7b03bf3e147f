use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Zone used to show due dates and to read the datetime-local form input.
/// The backend always speaks UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        DisplayZone::Fixed(Utc.fix())
    }

    pub fn format(&self, at: DateTime<Utc>, fmt: &str) -> String {
        match self {
            DisplayZone::Local => at.with_timezone(&Local).format(fmt).to_string(),
            DisplayZone::Fixed(offset) => at.with_timezone(offset).format(fmt).to_string(),
        }
    }

    /// Resolves a wall-clock time in this zone. Times skipped by a DST jump
    /// have no instant; ambiguous ones take the earlier instant.
    pub fn resolve(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            DisplayZone::Local => pick(Local.from_local_datetime(&naive)),
            DisplayZone::Fixed(offset) => pick(offset.from_local_datetime(&naive)),
        }
    }
}

fn pick<Tz: TimeZone>(result: LocalResult<DateTime<Tz>>) -> Option<DateTime<Utc>> {
    match result {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}
