//! Build environment selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Build mode driving output naming and optimization defaults.
///
/// Resolved once per pipeline invocation and immutable afterwards. The
/// public API entry point defaults to [`Environment::Production`] when no
/// explicit environment is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Plain output names, hot-reload client bundled
    Development,
    /// Content-hash-bearing output names, minification on
    #[default]
    Production,
}

impl Environment {
    /// Literal used in the bundler `mode` field and handed to override
    /// generators.
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    /// Only the two exact literals are accepted; anything else is a caller
    /// error, never coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::InvalidEnvironment {
                value: other.to_string(),
            }),
        }
    }
}
