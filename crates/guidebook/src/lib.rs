pub mod api;

pub use api::{BuildSettings, ConfigFn, StyleGuideApi, initialize, initialize_from};

// Re-export the configuration surface
pub use guidebook_config::{
    ConfigDiscovery, ConfigError, Configuration, Environment, HostConfigLoader, Result,
    ScaffoldDiscovery, StyleGuide, StyleGuideOptions, UpdateHook, WebpackOverride, discover,
    validate_fs, validate_schema,
};
