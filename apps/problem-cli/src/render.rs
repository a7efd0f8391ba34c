//! Building a problem from command-line arguments

use clap::Args;
use problem_details::{DEFAULT_STATUS, Defaults, ProblemDetail};
use serde_json::Value;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtensionArgError {
    #[error("expected KEY=VALUE, got '{0}'")]
    MissingSeparator(String),
    #[error("extension key must not be empty")]
    EmptyKey,
}

/// Parse `key=value`; the value is taken as JSON when it parses, else as a plain string.
pub fn parse_extension(raw: &str) -> Result<(String, Value), ExtensionArgError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ExtensionArgError::MissingSeparator(raw.to_owned()))?;
    if key.is_empty() {
        return Err(ExtensionArgError::EmptyKey);
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
    Ok((key.to_owned(), value))
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Problem type URI (empty: default reference URL)
    #[arg(long = "type", default_value = "")]
    pub type_url: String,

    /// Short summary (empty: reason phrase of the status)
    #[arg(long, default_value = "")]
    pub title: String,

    /// HTTP status code
    #[arg(long, short = 's', default_value_t = DEFAULT_STATUS)]
    pub status: u16,

    /// Explanation of this occurrence
    #[arg(long, short = 'd', default_value = "")]
    pub detail: String,

    /// Extension member as KEY=VALUE (repeatable)
    #[arg(long = "ext", short = 'e', value_parser = parse_extension, action = clap::ArgAction::Append)]
    pub extensions: Vec<(String, Value)>,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

impl RenderArgs {
    pub fn to_problem(&self) -> ProblemDetail {
        let mut problem = ProblemDetail::with_status(self.status)
            .with_type(self.type_url.as_str())
            .with_title(self.title.as_str())
            .with_detail(self.detail.as_str());
        for (key, value) in &self.extensions {
            problem.set(key.as_str(), value.clone());
        }
        problem
    }
}

/// Encode `problem` as the JSON body, resolving unset members against `defaults`.
///
/// # Errors
/// Returns a `serde_json` error if the problem map cannot be encoded.
pub fn render(
    problem: &ProblemDetail,
    defaults: &Defaults,
    pretty: bool,
) -> serde_json::Result<String> {
    let body = Value::Object(problem.to_map_with(defaults));
    if pretty {
        serde_json::to_string_pretty(&body)
    } else {
        serde_json::to_string(&body)
    }
}
