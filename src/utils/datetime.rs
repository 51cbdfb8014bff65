//! Date and time utility functions
//!
//! This module renders post and reply timestamps the way the Treehole client
//! displays them: "刚刚", "5分钟前", "今天 08:05", "周三 21:40", "3/14 09:00" and so on.
//!
//! Every formatter comes in two flavours. The `*_at` functions take typed
//! instants and an explicit `now`, for any [`TimeZone`]. [`DateFormatter`] takes
//! the raw timestamp strings the backend returns and samples `now` from an
//! injected [`Clock`].

use std::fmt::Display;
use std::sync::Arc;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};

/// 24-hour wall clock time, zero padded
pub const TIME_FORMAT: &str = "%H:%M";

/// Full absolute date and time
pub const FULL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only timestamps, interpreted as UTC midnight
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Rendered in place of a timestamp that could not be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Weekday names indexed by day of week, 0 = Sunday
pub const WEEKDAYS: [&str; 7] = ["周日", "周一", "周二", "周三", "周四", "周五", "周六"];

const JUST_NOW: &str = "刚刚";

// Offset-less timestamps are read as local wall clock time.
const LOCAL_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Error returned when a timestamp string is in none of the accepted forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized timestamp: '{0}'")]
pub struct ParseInstantError(pub String);

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock of the host machine
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a single instant, for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub fn new<Tz: TimeZone>(now: DateTime<Tz>) -> Self {
        Self {
            now: now.with_timezone(&Local),
        }
    }

    /// Freeze the clock at a timestamp in any form [`parse_instant`] accepts.
    pub fn parse(timestamp: &str) -> Result<Self, ParseInstantError> {
        parse_instant(timestamp).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }
}

/// Parse a timestamp string into a local instant
///
/// Accepted forms, tried in order:
/// * RFC 3339 with an offset (e.g. "2025-01-15T14:30:00+08:00"), as sent by the backend
/// * ISO 8601 without offset (e.g. "2025-01-15T14:30:00"), read as local time
/// * space separated (e.g. "2025-01-15 14:30:00"), read as local time
/// * date only (e.g. "2025-01-15"), read as UTC midnight
pub fn parse_instant(timestamp: &str) -> Result<DateTime<Local>, ParseInstantError> {
    let timestamp = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Ok(dt.with_timezone(&Local));
    }

    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, format) {
            return Ok(Local
                .from_local_datetime(&dt)
                .earliest()
                .unwrap_or_else(|| Local.from_utc_datetime(&dt)));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(timestamp, DATE_ONLY_FORMAT) {
        let midnight = date.and_time(NaiveTime::MIN);
        return Ok(Utc.from_utc_datetime(&midnight).with_timezone(&Local));
    }

    Err(ParseInstantError(timestamp.to_string()))
}

/// Floored magnitude of `now - instant`, in each unit.
///
/// The difference is absolute, so instants in the future land in the same
/// buckets as instants equally far in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Elapsed {
    minutes: i64,
    hours: i64,
    days: i64,
}

impl Elapsed {
    fn between<Tz: TimeZone>(instant: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        let millis = now
            .clone()
            .signed_duration_since(instant.clone())
            .num_milliseconds()
            .abs();

        Self {
            minutes: millis / (1000 * 60),
            hours: millis / (1000 * 60 * 60),
            days: millis / (1000 * 60 * 60 * 24),
        }
    }
}

/// Chinese name of a weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_sunday() as usize]
}

/// Format an instant for list and feed display, relative to `now`
///
/// Buckets, first match wins:
///
/// | elapsed | output |
/// |---|---|
/// | < 1 minute | `刚刚` |
/// | < 60 minutes | `N分钟前` |
/// | < 24 hours and same day of month | `今天 HH:MM` |
/// | exactly 1 whole day | `昨天 HH:MM` |
/// | ≤ 7 whole days | `周X HH:MM` |
/// | same year | `M/D HH:MM` |
/// | otherwise | `YYYY/M/D HH:MM` |
///
/// The "today" check compares day of month only and the "yesterday" check uses
/// whole elapsed days, so instants a little either side of midnight can fall
/// into the weekday bucket instead.
///
/// Calendar fields are read in `now`'s time zone.
pub fn format_date_at<Tz>(instant: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let instant = &instant.with_timezone(&now.timezone());
    let elapsed = Elapsed::between(instant, now);
    let time = instant.format(TIME_FORMAT);

    if elapsed.minutes < 1 {
        JUST_NOW.to_string()
    } else if elapsed.minutes < 60 {
        format!("{}分钟前", elapsed.minutes)
    } else if elapsed.hours < 24 && instant.day() == now.day() {
        format!("今天 {}", time)
    } else if elapsed.days == 1 {
        format!("昨天 {}", time)
    } else if elapsed.days <= 7 {
        format!("{} {}", weekday_name(instant.weekday()), time)
    } else if instant.year() == now.year() {
        format!("{}/{} {}", instant.month(), instant.day(), time)
    } else {
        format!("{}/{}/{} {}", instant.year(), instant.month(), instant.day(), time)
    }
}

/// Format an instant as `YYYY-MM-DD HH:MM:SS` in its own time zone
pub fn format_full_date_time_at<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(FULL_DATETIME_FORMAT).to_string()
}

/// Format how long ago an instant was, with no absolute fallback
///
/// Months are 30 days and years are 365 days.
pub fn format_relative_time_at<Tz: TimeZone>(instant: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let elapsed = Elapsed::between(instant, now);

    match elapsed {
        Elapsed { minutes, .. } if minutes < 1 => JUST_NOW.to_string(),
        Elapsed { minutes, .. } if minutes < 60 => format!("{}分钟前", minutes),
        Elapsed { hours, .. } if hours < 24 => format!("{}小时前", hours),
        Elapsed { days, .. } if days < 30 => format!("{}天前", days),
        Elapsed { days, .. } if days < 365 => format!("{}个月前", days / 30),
        Elapsed { days, .. } => format!("{}年前", days / 365),
    }
}

/// Formats backend timestamp strings against an injected clock.
///
/// Unparseable timestamps render as [`INVALID_DATE`]; callers that need to
/// tell them apart should check with [`parse_instant`] first.
#[derive(Clone)]
pub struct DateFormatter {
    clock: Arc<dyn Clock>,
}

impl DateFormatter {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Formatter reading the host's wall clock
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Current time according to the injected clock
    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// See [`format_date_at`].
    pub fn format_date(&self, timestamp: &str) -> String {
        self.with_instant(timestamp, |instant| format_date_at(&instant, &self.clock.now()))
    }

    /// See [`format_full_date_time_at`].
    pub fn format_full_date_time(&self, timestamp: &str) -> String {
        self.with_instant(timestamp, |instant| format_full_date_time_at(&instant))
    }

    /// See [`format_relative_time_at`].
    pub fn format_relative_time(&self, timestamp: &str) -> String {
        self.with_instant(timestamp, |instant| format_relative_time_at(&instant, &self.clock.now()))
    }

    fn with_instant<F>(&self, timestamp: &str, render: F) -> String
    where
        F: FnOnce(DateTime<Local>) -> String,
    {
        match parse_instant(timestamp) {
            Ok(instant) => render(instant),
            Err(e) => {
                log::debug!("{}", e);
                INVALID_DATE.to_string()
            }
        }
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for DateFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateFormatter").field("now", &self.clock.now()).finish()
    }
}
