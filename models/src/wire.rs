//! Tolerant wire-value helpers shared by the document shapes.
//!
//! The service is loose with enumeration and date values: unset enums can
//! arrive as `""`, the literal string `"null"` or a numeric member index,
//! and dates arrive in more than one format. The helpers here absorb all
//! of that into `None` instead of failing a whole document decode.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Day-first timestamp format used by the search endpoint family.
pub const WIRE_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// An enumeration with a canonical capitalised wire form.
pub trait WireEnum: Sized + Copy + 'static {
    const VARIANTS: &'static [Self];

    /// Canonical capitalised-word string sent on the wire.
    fn as_wire(self) -> &'static str;

    /// Case-insensitive match against the canonical forms.
    fn parse(text: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_wire().eq_ignore_ascii_case(text))
    }

    /// Positional fallback for payloads carrying the numeric member value.
    fn from_index(index: u64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|index| Self::VARIANTS.get(index))
            .copied()
    }
}

/// Parse enumeration text, treating empty and the literal "null" as unset.
pub fn parse_enum_text<T: WireEnum>(text: &str) -> Option<T> {
    if text.is_empty() || text.eq_ignore_ascii_case("null") {
        return None;
    }
    T::parse(text)
}

/// Deserialize an optional enumeration. Empty strings, the literal "null"
/// and unrecognised values decode to `None` rather than an error.
pub fn enum_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: WireEnum,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => parse_enum_text(&text),
        Some(Value::Number(number)) => number.as_u64().and_then(T::from_index),
        _ => None,
    })
}

/// Parse a timestamp in either RFC 3339 or the day-first wire format.
pub fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(text, WIRE_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Deserialize an optional timestamp with the tolerance of [`parse_datetime`].
pub fn datetime_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse_datetime))
}

/// Define a wire enumeration: the member list, its canonical capitalised
/// strings, case-insensitive parsing and string serialization.
#[macro_export]
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::wire::WireEnum for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn as_wire(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::wire::WireEnum::as_wire(*self))
            }
        }
    };
}
