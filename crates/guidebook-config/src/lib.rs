pub mod configuration;
pub mod discovery;
pub mod environment;
pub mod error;
pub mod options;
pub mod validation;
pub mod webpack;

// Re-export main types
pub use configuration::Configuration;
pub use environment::Environment;
pub use error::{ConfigError, Result};
pub use options::{StyleGuideOptions, UpdateHook, WebpackOverride};

// Re-export discovery, validation, and the pipeline
pub use discovery::{ConfigDiscovery, discover};
pub use validation::{FsValidator, OptionsValidator, SchemaValidator, validate_fs, validate_schema};
pub use webpack::{HostConfigLoader, ScaffoldDiscovery, StyleGuide};
