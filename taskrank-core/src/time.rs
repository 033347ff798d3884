//! Time utilities: "today" in the user's timezone.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

pub fn parse_timezone(tz: &str) -> Result<Tz> {
    tz.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))
}

/// Calendar date of `now` in an IANA tz like "America/Chicago".
pub fn local_date(now: DateTime<Utc>, tz: &str) -> Result<NaiveDate> {
    let tz = parse_timezone(tz)?;
    Ok(now.with_timezone(&tz).date_naive())
}

/// Today's date in `tz`.
pub fn today_in(tz: &str) -> Result<NaiveDate> {
    local_date(Utc::now(), tz)
}
