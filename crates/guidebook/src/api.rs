//! Public entry point mirroring the tool's scripting interface.
//!
//! Build and serve are driven by external collaborators: this API only
//! resolves options and supplies the composed bundler configuration, it
//! never runs a bundler or a server itself.

use std::path::{Path, PathBuf};

use guidebook_config::{
    ConfigDiscovery, Configuration, Environment, HostConfigLoader, Result, StyleGuide,
    StyleGuideOptions,
};

/// Configuration-producing callable handed to collaborators. Each call
/// composes a fresh value for the requested environment (production when
/// absent).
pub type ConfigFn<'a> = &'a dyn Fn(Option<Environment>) -> Result<Configuration>;

/// Settings handed to the build collaborator alongside the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSettings {
    pub stats: bool,
}

/// A configured style guide.
pub struct StyleGuideApi {
    guide: StyleGuide,
}

/// Set up the API from already-resolved options and an explicit project
/// root.
///
/// # Example
///
/// ```
/// use guidebook::{Environment, StyleGuideOptions, initialize};
///
/// let api = initialize(StyleGuideOptions::default(), ".").unwrap();
/// let config = api.make_webpack_config(Some(Environment::Development)).unwrap();
/// assert_eq!(config.output_filename(), Some("build/[name].bundle.js"));
/// ```
pub fn initialize(options: StyleGuideOptions, root: impl Into<PathBuf>) -> Result<StyleGuideApi> {
    Ok(StyleGuideApi {
        guide: StyleGuide::new(options, root)?,
    })
}

/// Set up the API from options discovered under `root`
/// (`guidebook.toml`, else the `guidebook` field of `package.json`).
pub fn initialize_from(root: impl AsRef<Path>) -> Result<StyleGuideApi> {
    let options = ConfigDiscovery::new(root.as_ref()).load()?;
    initialize(options, root.as_ref())
}

impl StyleGuideApi {
    pub fn options(&self) -> &StyleGuideOptions {
        self.guide.options()
    }

    /// Replace the host scaffold detection capability.
    pub fn with_host_loader(
        mut self,
        loader: impl HostConfigLoader + Send + Sync + 'static,
    ) -> Self {
        self.guide = self.guide.with_host_loader(loader);
        self
    }

    /// Compose the bundler configuration for `environment` (production
    /// when absent).
    pub fn make_webpack_config(&self, environment: Option<Environment>) -> Result<Configuration> {
        self.guide.make_webpack_config(environment)
    }

    /// Hand the build collaborator everything it needs for one build
    /// invocation: the resolved options, a configuration-producing
    /// callable, and the build settings. The collaborator runs the
    /// bundler.
    pub fn build<T>(
        &self,
        collaborator: impl FnOnce(&StyleGuideOptions, ConfigFn<'_>, BuildSettings) -> T,
    ) -> T {
        tracing::debug!("handing off to build collaborator");
        let make = |environment: Option<Environment>| self.guide.make_webpack_config(environment);
        collaborator(self.guide.options(), &make, BuildSettings { stats: true })
    }

    /// Hand the serve collaborator the resolved options and a
    /// configuration-producing callable. The collaborator owns the server
    /// process.
    pub fn server<T>(
        &self,
        collaborator: impl FnOnce(&StyleGuideOptions, ConfigFn<'_>) -> T,
    ) -> T {
        tracing::debug!("handing off to serve collaborator");
        let make = |environment: Option<Environment>| self.guide.make_webpack_config(environment);
        collaborator(self.guide.options(), &make)
    }
}
