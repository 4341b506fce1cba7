//! User-facing style guide options.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::configuration::{Configuration, value_kind};
use crate::environment::Environment;
use crate::error::{ConfigError, Result};

/// Bundler override supplied by the user, resolved exactly once at the
/// merge stage.
///
/// Only the fragment form is loadable from a config file; the generator
/// form is attached programmatically via
/// [`StyleGuideOptions::with_webpack_config_fn`].
#[derive(Clone)]
pub enum WebpackOverride {
    /// Static fragment merged on top of the accumulated configuration
    Fragment(Configuration),
    /// Environment-dependent fragment; the callable's return value is the
    /// merge fragment for that invocation
    Generator(Arc<dyn Fn(Environment) -> Configuration + Send + Sync>),
}

impl WebpackOverride {
    pub(crate) fn resolve(&self, environment: Environment) -> Configuration {
        match self {
            WebpackOverride::Fragment(fragment) => fragment.clone(),
            WebpackOverride::Generator(generator) => generator(environment),
        }
    }
}

impl fmt::Debug for WebpackOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebpackOverride::Fragment(fragment) => {
                f.debug_tuple("Fragment").field(fragment).finish()
            }
            WebpackOverride::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

/// Final-stage transform with unrestricted authority over the merged
/// configuration, including the otherwise protected `output` section.
#[derive(Clone)]
pub struct UpdateHook(Arc<dyn Fn(Configuration, Environment) -> Configuration + Send + Sync>);

impl UpdateHook {
    pub fn new(
        hook: impl Fn(Configuration, Environment) -> Configuration + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(hook))
    }

    pub(crate) fn apply(&self, configuration: Configuration, environment: Environment) -> Configuration {
        (self.0)(configuration, environment)
    }
}

impl fmt::Debug for UpdateHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UpdateHook(..)")
    }
}

/// Resolved style guide options, the pipeline's second input next to the
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleGuideOptions {
    /// Glob selecting the source files to document
    #[serde(default = "default_components")]
    pub components: String,

    /// Extra modules and stylesheets bundled ahead of the documented code,
    /// in the order given
    #[serde(default)]
    pub require: Vec<String>,

    /// Replacement modules for the documentation UI's own slots
    /// (slot name -> module path)
    #[serde(default)]
    pub styleguide_components: IndexMap<String, String>,

    /// Title shown by the documentation UI
    #[serde(default = "default_title")]
    pub title: String,

    /// Output directory handed to the build collaborator
    #[serde(default = "default_styleguide_dir")]
    pub styleguide_dir: PathBuf,

    #[serde(default = "default_server_host")]
    pub server_host: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    #[serde(default)]
    pub verbose: bool,

    /// Bundler override merged below the escape hatch
    #[serde(skip)]
    pub webpack_config: Option<WebpackOverride>,

    /// Escape hatch applied after all merging; its return value is the
    /// pipeline's final output
    #[serde(skip)]
    pub dangerously_update_webpack_config: Option<UpdateHook>,
}

impl Default for StyleGuideOptions {
    fn default() -> Self {
        Self {
            components: default_components(),
            require: Vec::new(),
            styleguide_components: IndexMap::new(),
            title: default_title(),
            styleguide_dir: default_styleguide_dir(),
            server_host: default_server_host(),
            server_port: default_server_port(),
            verbose: false,
            webpack_config: None,
            dangerously_update_webpack_config: None,
        }
    }
}

impl StyleGuideOptions {
    /// Create from a `serde_json::Value` (for programmatic or file-loaded
    /// options).
    ///
    /// A `webpack_config` field must be a table; any other present type is
    /// rejected with [`ConfigError::InvalidOverrideType`] before the rest
    /// of the options are even looked at.
    pub fn from_value(mut value: Value) -> Result<Self> {
        let fragment = match &mut value {
            Value::Object(map) => match map.remove("webpack_config") {
                None | Some(Value::Null) => None,
                Some(Value::Object(fragment)) => Some(Configuration::from_map(fragment)),
                Some(other) => {
                    return Err(ConfigError::InvalidOverrideType {
                        found: value_kind(&other),
                    });
                }
            },
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "styleguide".to_string(),
                    message: format!("expected a table of options, got {}", value_kind(other)),
                });
            }
        };

        let mut options: StyleGuideOptions =
            serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
                field: "styleguide".to_string(),
                message: e.to_string(),
            })?;
        options.webpack_config = fragment.map(WebpackOverride::Fragment);
        Ok(options)
    }

    /// Convert the file-loadable fields to `serde_json::Value`
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "styleguide".to_string(),
            message: e.to_string(),
        })
    }

    /// Add modules bundled ahead of the documented code
    pub fn with_require(
        mut self,
        modules: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.require.extend(modules.into_iter().map(Into::into));
        self
    }

    /// Replace one of the documentation UI's slots
    ///
    /// # Example
    /// ```
    /// use guidebook_config::StyleGuideOptions;
    ///
    /// let options = StyleGuideOptions::default()
    ///     .with_styleguide_component("Wrapper", "styleguide/components/Wrapper");
    /// ```
    pub fn with_styleguide_component(
        mut self,
        slot: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        self.styleguide_components.insert(slot.into(), path.into());
        self
    }

    /// Set a static bundler override fragment
    pub fn with_webpack_config(mut self, fragment: Configuration) -> Self {
        self.webpack_config = Some(WebpackOverride::Fragment(fragment));
        self
    }

    /// Set an environment-dependent bundler override
    pub fn with_webpack_config_fn(
        mut self,
        generator: impl Fn(Environment) -> Configuration + Send + Sync + 'static,
    ) -> Self {
        self.webpack_config = Some(WebpackOverride::Generator(Arc::new(generator)));
        self
    }

    /// Set the final-stage transform. The hook sees the fully merged
    /// configuration and its return value ships verbatim, protections
    /// included.
    pub fn with_dangerously_update_webpack_config(
        mut self,
        hook: impl Fn(Configuration, Environment) -> Configuration + Send + Sync + 'static,
    ) -> Self {
        self.dangerously_update_webpack_config = Some(UpdateHook::new(hook));
        self
    }
}

fn default_components() -> String {
    "src/components/**/*.{js,jsx,ts,tsx}".to_string()
}

fn default_title() -> String {
    "Style Guide".to_string()
}

fn default_styleguide_dir() -> PathBuf {
    PathBuf::from("styleguide")
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    6060
}
