use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Identifier of a notice, as handed out by the server.
///
/// Backends disagree on whether ids are numbers or strings, so both are accepted and written back
/// in the form they arrived in.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NoticeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeId::Number(id) => write!(f, "{id}"),
            NoticeId::Text(id) => f.write_str(id),
        }
    }
}

/// Announcement published by the school and shown on the info page.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Notice {
    pub id: NoticeId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
    pub created_at: String,
}

impl Notice {
    /// Creation time in the browser's (or host's) local time zone.
    pub fn created_at_local(&self) -> String {
        format_timestamp_in(&self.created_at, &Local)
    }
}

/// Render `raw` in time zone `tz`.
///
/// Timestamps with an offset are converted, naive ones are taken as already being in `tz`.
/// Anything unparsable is returned unchanged.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(tz).format(DISPLAY_FORMAT).to_string();
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|local| local.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}
