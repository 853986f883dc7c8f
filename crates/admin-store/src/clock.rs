//! Header clock
//!
//! Keeps `current_time` as "day month H:MM" with Russian month names,
//! refreshed on every minute boundary.

use chrono::{Datelike, Local, Timelike};
use std::time::Duration;

use crate::store::AdminStore;

/// Genitive month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const PERIOD: Duration = Duration::from_secs(60);

/// Format `time` as "5 января 9:05"
pub fn format_time<T: Datelike + Timelike>(time: &T) -> String {
    format!(
        "{} {} {}:{:02}",
        time.day(),
        MONTH_NAMES[time.month0() as usize],
        time.hour(),
        time.minute()
    )
}

/// Time left until the next minute starts
pub fn until_next_minute<T: Timelike>(time: &T) -> Duration {
    // Leap seconds report nanosecond() >= 1e9.
    let into_minute = Duration::from_secs(u64::from(time.second().min(59)))
        + Duration::from_nanos(u64::from(time.nanosecond() % 1_000_000_000));
    PERIOD.saturating_sub(into_minute)
}

impl AdminStore {
    /// Set `current_time` now and keep it fresh for the life of the process
    ///
    /// The first refresh lands on the next minute boundary, later ones every
    /// 60 seconds. The refresh task cannot be stopped.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime.
    pub fn update_time(&self) {
        let now = Local::now();
        self.refresh_time();

        let store = self.clone();
        let delay = until_next_minute(&now);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            store.refresh_time();

            let start = tokio::time::Instant::now() + PERIOD;
            let mut interval = tokio::time::interval_at(start, PERIOD);
            loop {
                interval.tick().await;
                store.refresh_time();
            }
        });
    }

    fn refresh_time(&self) {
        let formatted = format_time(&Local::now());
        log::trace!("Clock: {}", formatted);
        self.write_state().current_time = formatted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{store_with, MockGateway};
    use chrono::{NaiveDate, NaiveDateTime};
    use regex::Regex;

    fn at(month: u32, day: u32, hour: u32, minute: u32, second: u32, milli: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_milli_opt(hour, minute, second, milli)
            .unwrap()
    }

    #[test]
    fn test_format_pads_minutes_only() {
        assert_eq!(format_time(&at(1, 5, 9, 5, 0, 0)), "5 января 9:05");
        assert_eq!(format_time(&at(2, 29, 0, 0, 0, 0)), "29 февраля 0:00");
        assert_eq!(format_time(&at(12, 31, 23, 59, 0, 0)), "31 декабря 23:59");
    }

    #[test]
    fn test_until_next_minute() {
        assert_eq!(
            until_next_minute(&at(3, 1, 12, 0, 30, 250)),
            Duration::from_millis(29_750)
        );
        assert_eq!(until_next_minute(&at(3, 1, 12, 0, 0, 0)), PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_time_sets_current_time() {
        let store = store_with(&MockGateway::new());
        store.update_time();

        let pattern = Regex::new(r"^\d{1,2} [а-я]+ \d{1,2}:\d{2}$").unwrap();
        let current = store.read(|state| state.current_time.clone());
        assert!(pattern.is_match(&current), "unexpected clock text {current}");

        // The refresh task keeps running across the boundary.
        tokio::time::advance(PERIOD * 2).await;
        tokio::task::yield_now().await;
        let current = store.read(|state| state.current_time.clone());
        assert!(pattern.is_match(&current));
    }
}
