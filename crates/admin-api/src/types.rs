//! Admin API data transfer objects
//!
//! These types mirror the records returned by the admin API. Scalar fields
//! are decoded leniently (see [`crate::de`]); anything the console does not
//! interpret is kept verbatim in a `fields` map so it survives a round-trip.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::de;

/// Courses keyed by course id
pub type Courses = BTreeMap<String, Course>;

/// Promocodes keyed by code
pub type Promocodes = BTreeMap<String, Promocode>;

/// Notifications in server order
pub type Notifications = Vec<Notification>;

/// Content pages keyed by content id
pub type ContentList = BTreeMap<String, Content>;

/// Id or amount exactly as the server sent it
///
/// Numbers stay numbers and strings stay strings, so a record that is
/// fetched and sent back serializes the way it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl Scalar {
    /// Numeric value, parsing numeric text; anything else is 0.0
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::Number(n) => n.as_f64().unwrap_or(0.0),
            Scalar::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::Number(Number::from(0))
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => Scalar::Number(n),
            Value::String(s) => Scalar::Text(s),
            Value::Null => Scalar::Text(String::new()),
            other => Scalar::Text(other.to_string()),
        })
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => fmt::Display::fmt(n, f),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_string())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Text(text)
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(Number::from(n))
    }
}

/// A course with its description and day-by-day program
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub id: String,

    #[serde(default)]
    pub about: CourseAbout,

    /// Whether the course is published to the apps
    #[serde(default, deserialize_with = "de::truthy")]
    pub production: bool,

    /// Days keyed by their position in the program
    #[serde(default, deserialize_with = "map_or_empty")]
    pub days: BTreeMap<String, CourseDay>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Descriptive part of a course
///
/// Sent back verbatim on update, so `id` and `price` keep their JSON type
/// and unnamed fields are carried in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseAbout {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub title: String,
    /// Language code ("ru", "en")
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub lang: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub period: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub description: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub for_whom: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub results: String,
    /// Image URL, or the form field name of a pending upload
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub image: String,
    #[serde(default)]
    pub price: Scalar,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub category: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One day of a course program
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDay {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub description: String,
    #[serde(default, deserialize_with = "map_or_empty")]
    pub tasks: BTreeMap<String, CourseDayTask>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A task inside a course day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDayTask {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub title: String,
    #[serde(rename = "type", default, deserialize_with = "de::string_or_number")]
    pub kind: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub description: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A promocode
///
/// `sended` is normalized to a bool whatever representation the server uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Promocode {
    #[serde(default, deserialize_with = "de::truthy")]
    pub sended: bool,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// An admin notification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub id: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A content page shown inside one of the apps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub image: String,
    /// Target app ("PSY", "Avocado")
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub app: String,
    #[serde(rename = "type", default, deserialize_with = "de::string_or_number")]
    pub kind: String,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub lang: String,
    #[serde(default, deserialize_with = "map_or_empty")]
    pub texts: Map<String, Value>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Default for Content {
    /// Blank page; a new page has an empty id until the server assigns one
    fn default() -> Self {
        Self {
            id: Scalar::Text(String::new()),
            title: String::new(),
            image: String::new(),
            app: String::new(),
            kind: String::new(),
            lang: String::new(),
            texts: Map::new(),
            fields: Map::new(),
        }
    }
}

/// Dashboard counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersInfo {
    #[serde(default)]
    pub courses: CourseCounts,
    #[serde(default)]
    pub subs: AppCounts,
    #[serde(default)]
    pub users: UserCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCounts {
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub active_courses: u64,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub completed_courses: u64,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub rejected_courses: u64,
}

/// Subscription counters per app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCounts {
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub all_subs: u64,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub psy: u64,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub avocado: u64,
}

/// User counters per app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCounts {
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub all_users: u64,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub psy: u64,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub avocado: u64,
}

/// Decode a `data` member
///
/// The server encodes an empty collection as `[]` or `null`; both decode to
/// the empty default.
pub fn decode_data<T>(value: Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Null => Ok(T::default()),
        Value::Array(items) if items.is_empty() => Ok(T::default()),
        other => serde_json::from_value(other),
    }
}

/// Decode a keyed collection
///
/// A collection whose keys are 0, 1, 2, ... arrives as a JSON list; its
/// items are keyed by position ("0", "1", ...).
pub fn decode_keyed<T>(value: Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    decode_data(key_by_index(value))
}

fn key_by_index(value: Value) -> Value {
    match value {
        Value::Array(items) if !items.is_empty() => Value::Object(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
        ),
        other => other,
    }
}

fn map_or_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    decode_keyed(value).map_err(serde::de::Error::custom)
}
