//! Pluggable options validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation
//! (for library use).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::options::StyleGuideOptions;
use crate::webpack::validate_slots;

/// Trait for pluggable options validation strategies
pub trait OptionsValidator {
    /// Validate style guide options
    fn validate(&self, options: &StyleGuideOptions) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Use this for library callers whose project files are in-memory or
/// virtual.
///
/// # Example
///
/// ```
/// use guidebook_config::{OptionsValidator, SchemaValidator, StyleGuideOptions};
///
/// let options = StyleGuideOptions::default();
/// SchemaValidator.validate(&options).unwrap();
/// ```
pub struct SchemaValidator;

impl OptionsValidator for SchemaValidator {
    fn validate(&self, options: &StyleGuideOptions) -> Result<()> {
        if options.components.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "components pattern cannot be empty".to_string(),
                hint: Some("point 'components' at the source files to document".to_string()),
            });
        }

        for module in &options.require {
            if module.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "require entries cannot be empty".to_string(),
                    hint: Some("remove empty strings from the 'require' list".to_string()),
                });
            }
        }

        validate_slots(options.styleguide_components.keys().map(String::as_str))?;

        if options.server_port == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "server_port cannot be 0".to_string(),
                hint: Some("pick a fixed port; the dev server does not auto-assign".to_string()),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs schema validation first, then checks that the project root exists
/// and that path-like `require` entries (those starting with `./` or
/// `../`) resolve under it. Bare specifiers are left to the bundler's own
/// resolution.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl OptionsValidator for FsValidator {
    fn validate(&self, options: &StyleGuideOptions) -> Result<()> {
        SchemaValidator.validate(options)?;

        if !self.root.exists() {
            return Err(ConfigError::RootNotFound {
                path: self.root.clone(),
            });
        }

        for module in &options.require {
            if module.starts_with("./") || module.starts_with("../") {
                let path = self.root.join(module);
                if !path.exists() {
                    return Err(ConfigError::RequireNotFound { path });
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(options: &StyleGuideOptions) -> Result<()> {
    SchemaValidator.validate(options)
}

/// Convenience function for filesystem validation
pub fn validate_fs(options: &StyleGuideOptions, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(options)
}
