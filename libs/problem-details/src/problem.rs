//! RFC 7807 Problem Details for HTTP APIs (pure data model, no HTTP framework dependencies)

use std::fmt;
use std::sync::Arc;

use http::StatusCode;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::status;

/// Content type for Problem Details as per RFC 7807.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Status used when none is given at construction.
pub const DEFAULT_STATUS: u16 = 500;

/// Members that always come from the standard fields, never from extensions.
pub const RESERVED_MEMBERS: [&str; 4] = ["type", "title", "status", "detail"];

type Source = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// A structured application error, rendered as an RFC 7807 problem object.
///
/// The standard string members may be left empty; the getters then resolve
/// them against [`Defaults::standard`]. Extension members are flattened into
/// the top level of the serialized object, below the four standard members.
#[derive(Debug, Clone)]
#[must_use]
pub struct ProblemDetail {
    type_url: String,
    title: String,
    status: u16,
    detail: String,
    extra: Map<String, Value>,
    source: Option<Source>,
}

impl Default for ProblemDetail {
    fn default() -> Self {
        Self {
            type_url: String::new(),
            title: String::new(),
            status: DEFAULT_STATUS,
            detail: String::new(),
            extra: Map::new(),
            source: None,
        }
    }
}

impl ProblemDetail {
    /// An empty problem with status 500.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Build a problem from all of its members at once.
    ///
    /// No validation is done; empty strings resolve to defaults on read.
    pub fn from_parts(
        type_url: impl Into<String>,
        title: impl Into<String>,
        status: u16,
        detail: impl Into<String>,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            type_url: type_url.into(),
            title: title.into(),
            status,
            detail: detail.into(),
            extra,
            source: None,
        }
    }

    /// Attach the underlying cause, reported through [`std::error::Error::source`].
    pub fn with_source<E>(mut self, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Arc::new(err));
        self
    }

    // --- resolved getters -------------------------------------------------

    /// The problem type URI, or [`DEFAULT_TYPE_URL`](crate::DEFAULT_TYPE_URL) when unset.
    #[must_use]
    pub fn type_url(&self) -> &str {
        or_default(&self.type_url, &Defaults::standard().type_url)
    }

    /// The title, or the reason phrase of the status when unset.
    ///
    /// An unset title with an unregistered status resolves to
    /// [`UNKNOWN_STATUS_TITLE`](crate::UNKNOWN_STATUS_TITLE), never to the
    /// phrase of some other code.
    #[must_use]
    pub fn title(&self) -> &str {
        self.resolve_title(&Defaults::standard().unknown_title)
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// The occurrence detail, or [`NO_DETAIL`](crate::NO_DETAIL) when unset.
    #[must_use]
    pub fn detail(&self) -> &str {
        or_default(&self.detail, &Defaults::standard().detail)
    }

    #[must_use]
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn extra_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.extra
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// The status as a typed [`StatusCode`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidStatus`] when the stored status is outside 100..=999.
    pub fn http_status(&self) -> Result<StatusCode> {
        StatusCode::from_u16(self.status).map_err(|_| Error::InvalidStatus(self.status))
    }

    // --- in-place setters -------------------------------------------------

    pub fn set_type(&mut self, type_url: impl Into<String>) -> &mut Self {
        self.type_url = type_url.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn set_status_code(&mut self, status: u16) -> &mut Self {
        self.status = status;
        self
    }

    pub fn set_detail(&mut self, detail: impl Into<String>) -> &mut Self {
        self.detail = detail.into();
        self
    }

    /// Insert or overwrite an extension member.
    ///
    /// Keys named like a standard member are kept here but never serialized.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.extra.remove(key)
    }

    // --- owned builders ---------------------------------------------------

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_status_code(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Set the `instance` member: a URI reference for this specific occurrence.
    pub fn with_instance(self, uri: impl Into<String>) -> Self {
        self.with("instance", uri.into())
    }

    pub fn with_trace_id(self, id: impl Into<String>) -> Self {
        self.with("trace_id", id.into())
    }

    // --- serialization ----------------------------------------------------

    /// The flat problem object: the four standard members, then the extensions.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        self.to_map_with(Defaults::standard())
    }

    /// Same as [`ProblemDetail::to_map`], resolving unset members against `defaults`.
    #[must_use]
    pub fn to_map_with(&self, defaults: &Defaults) -> Map<String, Value> {
        let mut map = Map::with_capacity(RESERVED_MEMBERS.len() + self.extra.len());
        map.insert(
            "type".to_owned(),
            Value::from(or_default(&self.type_url, &defaults.type_url)),
        );
        map.insert(
            "title".to_owned(),
            Value::from(self.resolve_title(&defaults.unknown_title)),
        );
        map.insert("status".to_owned(), Value::from(self.status));
        map.insert(
            "detail".to_owned(),
            Value::from(or_default(&self.detail, &defaults.detail)),
        );
        for (key, value) in self.extension_members() {
            map.insert(key.clone(), value.clone());
        }
        map
    }

    /// # Errors
    /// Returns [`Error::Json`] if an extension value cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// # Errors
    /// Returns [`Error::Json`] if an extension value cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a problem object, e.g. the body of an `application/problem+json` response.
    ///
    /// # Errors
    /// Returns [`Error::Json`] if `body` is not a JSON object or a standard
    /// member has the wrong type.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    fn resolve_title<'a>(&'a self, unknown: &'a str) -> &'a str {
        if self.title.is_empty() {
            status::reason_phrase(self.status).unwrap_or(unknown)
        } else {
            &self.title
        }
    }

    /// Extension members that survive serialization; standard members win on collision.
    fn extension_members(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.extra.iter().filter(|(key, _)| {
            let shadowed = RESERVED_MEMBERS.contains(&key.as_str());
            if shadowed {
                tracing::debug!(member = %key, "extension member shadowed by standard member");
            }
            !shadowed
        })
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

impl Serialize for ProblemDetail {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.type_url())?;
        map.serialize_entry("title", self.title())?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("detail", self.detail())?;
        for (key, value) in self.extension_members() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Wire shape accepted on decode; every standard member is optional.
#[derive(Deserialize)]
struct WireProblem {
    #[serde(rename = "type", default)]
    type_url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for ProblemDetail {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireProblem::deserialize(deserializer)?;
        Ok(Self::from_parts(
            wire.type_url.unwrap_or_default(),
            wire.title.unwrap_or_default(),
            wire.status.unwrap_or(DEFAULT_STATUS),
            wire.detail.unwrap_or_default(),
            wire.extra,
        ))
    }
}

impl fmt::Display for ProblemDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.status, self.title(), self.detail())
    }
}

impl std::error::Error for ProblemDetail {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}
