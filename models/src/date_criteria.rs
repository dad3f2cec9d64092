//! Date-or-facet filter criteria.

use crate::wire::{WIRE_DATE_FORMAT, parse_datetime};

use chrono::{DateTime, Duration, Utc};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A filter criterion that is either a concrete timestamp or a facet label
/// previously returned by the service.
///
/// Construction is always explicit - from a timestamp or from a label -
/// and there is exactly one formatting rule for the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum DateCriteria {
    Date(DateTime<Utc>),
    Facet(String),
}

impl DateCriteria {
    /// A date criterion the given number of days in the past.
    pub fn days_ago(days: i64) -> Self {
        Self::Date(Utc::now() - Duration::days(days))
    }

    /// Wire form: dates in the day-first format, facet labels verbatim.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Date(date) => date.format(WIRE_DATE_FORMAT).to_string(),
            Self::Facet(label) => label.clone(),
        }
    }
}

impl From<DateTime<Utc>> for DateCriteria {
    fn from(date: DateTime<Utc>) -> Self {
        Self::Date(date)
    }
}

impl From<String> for DateCriteria {
    fn from(label: String) -> Self {
        Self::Facet(label)
    }
}

impl From<&str> for DateCriteria {
    fn from(label: &str) -> Self {
        Self::Facet(label.to_string())
    }
}

impl Serialize for DateCriteria {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for DateCriteria {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(match parse_datetime(&text) {
            Some(date) => Self::Date(date),
            None => Self::Facet(text),
        })
    }
}
