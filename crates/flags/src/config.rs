//! The `features` section of a service configuration file.
//!
//! ```json
//! {
//!   "features": {
//!     "EnforceMultiVA": true,
//!     "OldTLSInbound": false
//!   }
//! }
//! ```
//!
//! Other top-level keys are ignored, so the section can be read straight out of a larger
//! config file.
//!
//! Environment variables prefixed with `FLAGPOLE_FEATURES__` overlay the file, one variable per
//! flag with the canonical name kept verbatim (e.g. `FLAGPOLE_FEATURES__EnforceMultiVA=true`).

use crate::{Flag, FlagError, FlagErrorExt, Registry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment variables overriding single flags.
pub const ENV_PREFIX: &str = "FLAGPOLE_FEATURES__";

/// Flag values sourced from configuration, keyed by canonical name.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    pub features: BTreeMap<String, bool>,
}

impl FlagsConfig {
    /// Parses a JSON document carrying a `features` object.
    ///
    /// # Errors
    /// [`FlagError::Json`] if the document is malformed or `features` is not a `name -> bool` map.
    pub fn from_json_str(raw: &str) -> Result<Self, FlagError> {
        serde_json::from_str::<Self>(raw).context("Failed to parse flag configuration")
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    /// [`FlagError::Io`] if the file cannot be read, [`FlagError::Json`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FlagError> {
        let path = path.as_ref();
        info!("Loading feature flags from {}", path.display());

        let raw = fs::read_to_string(path)
            .context(format!("Failed to read flag configuration {}", path.display()))?;

        Self::from_json_str(&raw)
            .context(format!("Failed to parse flag configuration {}", path.display()))
    }

    /// Overlays `overrides` on top of the configured values.
    pub fn merge(&mut self, overrides: impl IntoIterator<Item = (String, bool)>) {
        self.features.extend(overrides);
    }

    /// Overlays every `FLAGPOLE_FEATURES__<Name>` pair from `vars`; other variables are skipped.
    ///
    /// # Errors
    /// [`FlagError::Internal`] for an empty name or a value that is not a boolean.
    pub fn merge_env<I, K, V>(&mut self, vars: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let context = || format!("Environment variable '{}'", key.as_ref());
            if name.is_empty() {
                return Err(FlagError::Internal {
                    message: "Flag name cannot be empty".into(),
                    context: Some(context().into()),
                });
            }

            let value = parse_bool(value.as_ref()).context(context())?;
            debug!(flag = name, value, "Feature flag overridden from environment");
            self.features.insert(name.to_owned(), value);
        }
        Ok(())
    }

    /// [`FlagsConfig::merge_env`] over the process environment.
    ///
    /// # Errors
    /// See [`FlagsConfig::merge_env`].
    pub fn merge_process_env(&mut self) -> Result<(), FlagError> {
        let vars = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        self.merge_env(vars)
    }

    /// Pushes the configured values into `registry`.
    ///
    /// # Errors
    /// See [`Registry::set`]; recognized values are applied even when this fails.
    pub fn apply<F: Flag>(&self, registry: &Registry<F>) -> Result<(), FlagError> {
        registry.set(&self.features)
    }
}

/// Parses a `NAME[=VALUE]` override. A bare name enables the flag.
///
/// Accepted values: `true`, `false`, `1`, `0`, `on`, `off`, `yes`, `no` (case-insensitive).
///
/// # Errors
/// [`FlagError::Internal`] for an empty name or an unrecognized value.
pub fn parse_override(raw: &str) -> Result<(String, bool), FlagError> {
    let (name, value) = raw.split_once('=').unwrap_or((raw, "true"));
    let name = name.trim();
    if name.is_empty() {
        return Err(FlagError::Internal {
            message: "Flag name cannot be empty".into(),
            context: Some(format!("Override '{raw}'").into()),
        });
    }

    let value = parse_bool(value).context(format!("Override '{raw}'"))?;
    Ok((name.to_owned(), value))
}

fn parse_bool(raw: &str) -> Result<bool, FlagError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        other => Err(FlagError::from(format!("Expected a boolean, got '{other}'"))),
    }
}
