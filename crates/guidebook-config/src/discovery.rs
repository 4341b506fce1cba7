//! File-based options discovery
//!
//! Handles finding and loading style guide options from a project root.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::options::StyleGuideOptions;

/// File-based options discovery
///
/// Searches for Guidebook options in conventional locations and loads
/// them. This is primarily for CLI and scripting use - library callers can
/// build [`StyleGuideOptions`] directly.
///
/// # Example
///
/// ```no_run
/// use guidebook_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let options = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new options discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find an options file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: guidebook.toml
    /// 2. package.json (guidebook field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("guidebook.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        // package.json with a guidebook field
        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("guidebook").is_some_and(|field| !field.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load options from the discovered file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no options file is found.
    pub fn load(&self) -> Result<StyleGuideOptions> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        tracing::debug!("loading style guide options from {}", path.display());
        self.load_from(&path)
    }

    fn load_from(&self, path: &Path) -> Result<StyleGuideOptions> {
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;

        let toml_value: toml::Value =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "guidebook.toml".to_string(),
                message: format!("invalid TOML syntax: {e}"),
            })?;

        let value = serde_json::to_value(toml_value).map_err(|e| ConfigError::InvalidValue {
            field: "guidebook.toml".to_string(),
            message: format!("TOML to JSON conversion failed: {e}"),
        })?;

        StyleGuideOptions::from_value(value)
    }

    fn load_from_package_json(&self, path: &Path) -> Result<StyleGuideOptions> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                message: format!("invalid JSON: {e}"),
            })?;

        let field = parsed
            .get("guidebook")
            .filter(|field| !field.is_null())
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "guidebook".to_string(),
                message: "add a 'guidebook' field to your package.json".to_string(),
            })?;

        StyleGuideOptions::from_value(field.clone())
    }
}

/// Discover and load options from an explicit project root (convenience
/// function)
///
/// # Example
///
/// ```no_run
/// use guidebook_config::discover;
///
/// let options = discover(".").unwrap();
/// ```
pub fn discover(root: impl AsRef<Path>) -> Result<StyleGuideOptions> {
    ConfigDiscovery::new(root).load()
}
