//! The bundler-configuration composition pipeline.
//!
//! A strict left-to-right fold over an environment-specific seed:
//! host scaffold config, style-guide-derived entries and aliases, the
//! user's own override, then the escape hatch. Every stage returns a new
//! value built from its input; nothing is shared between invocations.

mod base;
mod host;
mod inject;
mod merge;
mod slots;

use std::fmt;
use std::path::{Path, PathBuf};

pub use base::{CLIENT_ENTRY, HOT_CLIENT_ENTRY, base_config};
pub use host::{HostConfigLoader, ScaffoldDiscovery};
pub use merge::{merge, merge_protected};
pub use slots::{COMPONENT_NAMESPACE, alias_key, validate_slots};

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::error::Result;
use crate::options::StyleGuideOptions;

/// Pipeline context: resolved options, an explicit project root, and the
/// host scaffold detection capability.
pub struct StyleGuide {
    options: StyleGuideOptions,
    root: PathBuf,
    host_loader: Box<dyn HostConfigLoader + Send + Sync>,
}

impl StyleGuide {
    /// Build a pipeline context from resolved options and a project root.
    ///
    /// Slot names are checked here, so an unknown slot fails before any
    /// configuration is produced.
    pub fn new(options: StyleGuideOptions, root: impl Into<PathBuf>) -> Result<Self> {
        slots::validate_slots(options.styleguide_components.keys().map(String::as_str))?;
        Ok(Self {
            options,
            root: root.into(),
            host_loader: Box::new(ScaffoldDiscovery::new()),
        })
    }

    /// Replace the host scaffold detection capability.
    pub fn with_host_loader(
        mut self,
        loader: impl HostConfigLoader + Send + Sync + 'static,
    ) -> Self {
        self.host_loader = Box::new(loader);
        self
    }

    pub fn options(&self) -> &StyleGuideOptions {
        &self.options
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compose the bundler configuration for `environment`.
    ///
    /// An absent environment resolves to production, the documented
    /// default of this entry point. The fold runs: environment defaults,
    /// host scaffold config, `require`/slot injection, user override,
    /// escape hatch. The `output` section survives every merge except the
    /// escape hatch, which ships its return value verbatim.
    pub fn make_webpack_config(&self, environment: Option<Environment>) -> Result<Configuration> {
        let environment = environment.unwrap_or_default();
        tracing::debug!("composing bundler config for {environment}");

        let mut config = base::base_config(environment);

        if let Some(host_config) = self.host_loader.load(&self.root)? {
            merge::merge_protected(&mut config, &host_config);
        }

        inject::apply(&mut config, &self.options)?;

        if let Some(override_source) = &self.options.webpack_config {
            let fragment = override_source.resolve(environment);
            merge::merge_protected(&mut config, &fragment);
        }

        if let Some(hook) = &self.options.dangerously_update_webpack_config {
            return Ok(hook.apply(config, environment));
        }

        Ok(config)
    }
}

impl fmt::Debug for StyleGuide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleGuide")
            .field("options", &self.options)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
