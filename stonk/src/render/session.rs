//! Exchange clock used to recognise a still-open trading session.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Timelike, Utc, Weekday};

use crate::models::bar::DailyBar;

/// Regular trading hours on a fixed UTC offset.
///
/// The offset does not follow daylight saving time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketClock {
    /// Local time = UTC + `utc_offset`.
    pub utc_offset: TimeDelta,
    /// Session open, minutes after local midnight (inclusive).
    pub open_minute: u32,
    /// Session close, minutes after local midnight (exclusive).
    pub close_minute: u32,
}

impl Default for MarketClock {
    /// US equities: 09:30–16:00 at UTC-5.
    fn default() -> Self {
        Self {
            utc_offset: TimeDelta::hours(-5),
            open_minute: 9 * 60 + 30,
            close_minute: 16 * 60,
        }
    }
}

impl MarketClock {
    /// The local trading date if the market is open at `now`.
    pub fn open_session(&self, now: DateTime<Utc>) -> Option<NaiveDate> {
        let local = now.naive_utc() + self.utc_offset;
        if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
            return None;
        }
        let minute = local.hour() * 60 + local.minute();
        (self.open_minute..self.close_minute)
            .contains(&minute)
            .then(|| local.date())
    }

    /// Whether `bar` is the session still trading at `now`.
    pub fn is_open_bar(&self, bar: &DailyBar, now: DateTime<Utc>) -> bool {
        self.open_session(now) == Some(bar.date)
    }
}
