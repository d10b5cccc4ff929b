use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum length of a post's text, in characters, after trimming.
pub const MAX_POST_LENGTH: usize = 500;

/// Opaque post identifier: a Unix millisecond timestamp rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Generate an id from `now` that is not already used by any of `existing`.
    ///
    /// Two posts created within the same millisecond would otherwise share an
    /// id, so a taken value is bumped to the next free millisecond.
    pub fn generate<'a>(now: DateTime<Utc>, existing: impl IntoIterator<Item = &'a PostId>) -> Self {
        let taken: HashSet<&str> = existing.into_iter().map(PostId::as_str).collect();
        let mut millis = now.timestamp_millis();
        loop {
            let candidate = millis.to_string();
            if !taken.contains(candidate.as_str()) {
                return Self(candidate);
            }
            millis += 1;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for PostId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post text that has passed validation: trimmed, non-empty, bounded length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    /// Trim `raw` and check it against the board's text rules.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required);
        }
        if trimmed.chars().count() > MAX_POST_LENGTH {
            return Err(ValidationError::TooLong {
                max: MAX_POST_LENGTH,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Creation timestamp as stored: an ISO-8601 string kept exactly as read.
///
/// New posts are stamped as `YYYY-MM-DDTHH:MM:SS.mmmZ`. Stored values are
/// never reformatted, so loading and saving a board leaves them untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatedAt(String);

impl CreatedAt {
    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        Self(value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the stored value. Timestamps without an offset are taken as UTC.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.0) {
            return Some(dt.with_timezone(&Utc));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&self.0, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}

impl From<&str> for CreatedAt {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post entity - a single board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub text: String,
    pub created_at: CreatedAt,
}

impl Post {
    /// Create a new post stamped with `now`, avoiding ids already in `existing`.
    pub fn new<'a>(
        text: PostText,
        now: DateTime<Utc>,
        existing: impl IntoIterator<Item = &'a PostId>,
    ) -> Self {
        Self {
            id: PostId::generate(now, existing),
            text: text.into_inner(),
            created_at: CreatedAt::from_datetime(now),
        }
    }
}
