//! Object identifiers
//!
//! Every object in a Zeka repository is named after the instant it was
//! created, in the same format one would get from `date +0%Y%m%d%H%M%S`.
//! The leading `0` leaves room for five-digit years, so sorting ids as
//! strings sorts objects by creation time.
//!
//! Two objects created within the same second get the same id; nothing
//! here tries to disambiguate them.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants as C;

/// Structural pattern of an id: calendar components must be in range
pub(crate) const ID_PATTERN: &str =
    r"0\d{4}(?:0[1-9]|1[0-2])(?:0[1-9]|[12]\d|3[01])(?:[01]\d|2[0-3])[0-5]\d[0-5]\d";

static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^{}$", ID_PATTERN)).unwrap());

/// A 15-character, timestamp-derived object identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Validate an id string
    pub fn parse(s: &str) -> Option<Self> {
        ID_RE.is_match(s).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build the id for an object created at `now`
pub fn new_id<Tz: TimeZone>(now: &DateTime<Tz>) -> ObjectId
where
    Tz::Offset: fmt::Display,
{
    ObjectId(now.format(C::ID_TIMESTAMP_FORMAT).to_string())
}

/// Source of "now" for id generation
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock, overridable through ZEKA_TIMESTAMP for testing
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        if let Ok(ts) = std::env::var(C::ENV_TIMESTAMP) {
            // Treat the override as local time, not UTC
            match parse_override(&Local, &ts) {
                Ok(at) => return at,
                Err(reason) => tracing::warn!("ignoring {} {:?}: {}", C::ENV_TIMESTAMP, ts, reason),
            }
        }
        Local::now()
    }
}

/// Interpret a clock override in `tz`. A time repeated by a DST change
/// resolves to its earlier occurrence.
fn parse_override<Tz: TimeZone>(tz: &Tz, ts: &str) -> std::result::Result<DateTime<Tz>, &'static str> {
    let naive = NaiveDateTime::parse_from_str(ts, C::TIMESTAMP_OVERRIDE_FORMAT)
        .map_err(|_| "not formatted as YYYY-MM-DD HH:MM:SS")?;
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or("skipped by a daylight saving change")
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).single().unwrap()
    }

    #[test]
    fn test_new_id_format() {
        let id = new_id(&local(2020, 5, 14, 8, 45, 0));
        assert_eq!(id.as_str(), "020200514084500");
        assert_eq!(id.as_str().len(), C::ID_LENGTH);
        assert!(id.as_str().starts_with('0'));
    }

    #[test]
    fn test_new_id_pads_every_component() {
        let id = new_id(&Utc.with_ymd_and_hms(987, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(id.as_str(), "009870102030405");
    }

    #[test]
    fn test_new_id_is_monotonic() {
        let start = local(2020, 12, 31, 23, 59, 58);
        let mut previous = new_id(&start);
        for step in 1..5 {
            let next = new_id(&(start + Duration::seconds(step)));
            assert!(previous < next, "{} !< {}", previous, next);
            previous = next;
        }
    }

    #[test]
    fn test_clock_override_parsing() {
        let at = parse_override(&Utc, "2020-05-14 08:45:00").unwrap();
        assert_eq!(new_id(&at).as_str(), "020200514084500");

        assert_eq!(
            parse_override(&Utc, "2020-05-14T08:45").unwrap_err(),
            "not formatted as YYYY-MM-DD HH:MM:SS"
        );
        assert!(parse_override(&Utc, "2020-02-30 08:45:00").is_err());
    }

    #[test]
    fn test_parse_validates_calendar_components() {
        assert!(ObjectId::parse("020200514084500").is_some());
        assert!(ObjectId::parse("020201314084500").is_none()); // month 13
        assert!(ObjectId::parse("020200532084500").is_none()); // day 32
        assert!(ObjectId::parse("020200514244500").is_none()); // hour 24
        assert!(ObjectId::parse("020200514086000").is_none()); // minute 60
        assert!(ObjectId::parse("120200514084500").is_none()); // leading digit
        assert!(ObjectId::parse("20200514084500").is_none()); // too short
        assert!(ObjectId::parse("020200514084500x").is_none());
    }

    #[test]
    fn test_fixed_clock() {
        let at = local(2021, 1, 1, 0, 0, 0);
        assert_eq!(new_id(&FixedClock(at).now()).as_str(), "020210101000000");
    }
}
