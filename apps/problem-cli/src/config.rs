//! Layered configuration for `problemctl`
//!
//! Sources, lowest precedence first:
//! 1) built-in defaults -> 2) YAML file (if provided) -> 3) env (`PROBLEMCTL_*`)
//!
//! Nested keys use `__` in env names, e.g. `PROBLEMCTL_DEFAULTS__TYPE_URL`.

use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use problem_details::Defaults;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "PROBLEMCTL_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Values substituted for unset problem members.
    pub defaults: Defaults,
    /// Pretty-print rendered problems.
    pub pretty: bool,
}

impl CliConfig {
    /// Load the effective configuration.
    ///
    /// # Errors
    /// Fails if `path` does not exist or any source does not match [`CliConfig`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use problem_details::NO_DETAIL;
    use std::io::Write;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn yaml_overrides_builtin_defaults() {
        let file = write_yaml(
            r"
pretty: true
defaults:
  type_url: https://errors.example.com/generic
",
        );

        let cfg = CliConfig::load(Some(file.path())).unwrap();
        assert!(cfg.pretty);
        assert_eq!(cfg.defaults.type_url, "https://errors.example.com/generic");
        assert_eq!(cfg.defaults.detail, NO_DETAIL);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/problemctl.yaml"))).unwrap_err();
        assert!(err.to_string().contains("config file does not exist"));
    }

    #[test]
    fn unknown_default_key_is_rejected() {
        let file = write_yaml("defaults:\n  typo_url: x\n");
        assert!(CliConfig::load(Some(file.path())).is_err());
    }
}
