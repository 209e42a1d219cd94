//! Student record
//!
//! The roster's sole entity. Birth dates carry date-only semantics: any time
//! component found on input is dropped while parsing.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Stable student identity, assigned outside rosterdb
pub type StudentId = i64;

/// A single student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique, never reused
    pub id: StudentId,
    /// First name, may be absent
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name, may be absent
    #[serde(default)]
    pub last_name: Option<String>,
    /// Grouping key; any text is a valid school
    #[serde(default, deserialize_with = "nullable_text")]
    pub school: String,
    /// Date of birth, absent for some records
    #[serde(default, with = "birth_date")]
    pub date_of_birth: Option<NaiveDate>,
}

impl Student {
    /// Creates a student without a birth date
    pub fn new(
        id: StudentId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        school: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            school: school.into(),
            date_of_birth: None,
        }
    }

    /// Sets the date of birth
    pub fn born(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = Some(date);
        self
    }

    /// Exact, case-sensitive match on both name fields.
    ///
    /// An absent name never matches, not even the empty string.
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.as_deref() == Some(first_name)
            && self.last_name.as_deref() == Some(last_name)
    }

    /// Calendar year of birth
    pub fn birth_year(&self) -> Option<i32> {
        self.date_of_birth.map(|d| d.year())
    }

    /// Month of birth, 1-12
    pub fn birth_month(&self) -> Option<u32> {
        self.date_of_birth.map(|d| d.month())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (id {}), school {}, born ",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or(""),
            self.id,
            self.school
        )?;
        match self.date_of_birth {
            Some(date) => write!(f, "{}", date.format(birth_date::FORMAT)),
            None => write!(f, "unknown"),
        }
    }
}

fn nullable_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `YYYY-MM-DD` on output; date or date-time on input
pub(crate) mod birth_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| parse(&text).map_err(serde::de::Error::custom))
            .transpose()
    }

    /// Parses a date, discarding any time-of-day component
    pub fn parse(text: &str) -> Result<NaiveDate, String> {
        let text = text.trim();
        if let Ok(date) = NaiveDate::parse_from_str(text, FORMAT) {
            return Ok(date);
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
            return Ok(stamp.date_naive());
        }
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
            .map(|stamp| stamp.date())
            .map_err(|_| format!("invalid date of birth '{}'", text))
    }
}
