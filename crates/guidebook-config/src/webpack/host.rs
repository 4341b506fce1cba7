//! Detection of a host scaffold's own bundler configuration.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::configuration::{Configuration, value_kind};
use crate::error::{ConfigError, Result};

/// Capability for locating a host project's bundler config.
///
/// Injected into the pipeline so composition stays a function of its
/// explicit inputs; tests substitute their own loader, the default reads
/// the project root.
pub trait HostConfigLoader {
    /// `Ok(None)` when no scaffold config exists. A present-but-broken
    /// config is an error, never a silent skip.
    fn load(&self, root: &Path) -> Result<Option<Configuration>>;
}

/// Default loader for scaffold-generated projects.
///
/// Searches the project root in this order:
/// 1. `webpack.config.json`
/// 2. `package.json` (`webpack` field)
#[derive(Debug, Default)]
pub struct ScaffoldDiscovery;

impl ScaffoldDiscovery {
    pub fn new() -> Self {
        Self
    }

    fn find(&self, root: &Path) -> Option<PathBuf> {
        let config_path = root.join("webpack.config.json");
        if config_path.exists() {
            return Some(config_path);
        }

        // package.json with a webpack field
        let pkg_path = root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("webpack").is_some_and(|field| !field.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    fn load_from(&self, path: &Path) -> Result<Configuration> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::HostConfigInvalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::HostConfigInvalid {
                path: path.to_path_buf(),
                message: format!("invalid JSON: {e}"),
            })?;

        let exported = if path.file_name() == Some(OsStr::new("package.json")) {
            parsed.get("webpack").cloned().unwrap_or(Value::Null)
        } else {
            parsed
        };

        match exported {
            Value::Object(map) => Ok(Configuration::from_map(map)),
            other => Err(ConfigError::HostConfigInvalid {
                path: path.to_path_buf(),
                message: format!(
                    "expected a table of bundler settings, got {}",
                    value_kind(&other)
                ),
            }),
        }
    }
}

impl HostConfigLoader for ScaffoldDiscovery {
    fn load(&self, root: &Path) -> Result<Option<Configuration>> {
        let Some(path) = self.find(root) else {
            tracing::trace!("no host bundler config under {}", root.display());
            return Ok(None);
        };

        tracing::debug!("merging host bundler config from {}", path.display());
        self.load_from(&path).map(Some)
    }
}
