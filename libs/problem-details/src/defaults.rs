//! Values substituted for unset `type`, `title` and `detail` members

use std::sync::LazyLock;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// The `type` reported when none was set: the HTTP/1.1 status code definitions.
pub const DEFAULT_TYPE_URL: &str = "https://www.w3.org/Protocols/rfc2616/rfc2616-sec10.html";

/// The `detail` reported when none was set.
pub const NO_DETAIL: &str = "No details of the error are available.";

/// The `title` reported when none was set and the status is not a registered code.
pub const UNKNOWN_STATUS_TITLE: &str = "Unknown Status";

static STANDARD: LazyLock<Defaults> = LazyLock::new(Defaults::default);

/// Resolution defaults, loadable from configuration.
///
/// Any member missing from the source keeps its standard value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Used when a problem has an empty `type`.
    #[serde(deserialize_with = "string_like")]
    pub type_url: String,
    /// Used when a problem has an empty `detail`.
    #[serde(deserialize_with = "string_like")]
    pub detail: String,
    /// Used when a problem has an empty `title` and an unregistered status.
    #[serde(deserialize_with = "string_like")]
    pub unknown_title: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            type_url: DEFAULT_TYPE_URL.to_owned(),
            detail: NO_DETAIL.to_owned(),
            unknown_title: UNKNOWN_STATUS_TITLE.to_owned(),
        }
    }
}

impl Defaults {
    /// The process-wide standard defaults used by the plain getters.
    #[must_use]
    pub fn standard() -> &'static Defaults {
        &STANDARD
    }
}

/// Accept a string, or a scalar that a config source parsed eagerly (e.g. env `404`), as text.
fn string_like<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringLike;

    impl Visitor<'_> for StringLike {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(StringLike)
}
