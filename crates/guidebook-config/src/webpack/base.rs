//! Environment-specific default configuration, the fold's seed value.

use serde_json::{Value, json};

use crate::configuration::Configuration;
use crate::environment::Environment;

/// Bootstrap module for the documentation UI itself
pub const CLIENT_ENTRY: &str = "guidebook/client/index.js";

/// Hot-reload client bundled ahead of the bootstrap in development
pub const HOT_CLIENT_ENTRY: &str = "guidebook/client/hot-client.js";

/// Extensions the style guide resolves without an explicit suffix
const RESOLVE_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".mjs", ".json"];

/// Build the default configuration for `environment`.
///
/// Development names bundles plainly so the dev server can rewrite them;
/// production names carry a content hash so every build busts caches.
pub fn base_config(environment: Environment) -> Configuration {
    let mut config = Configuration::default();
    config.insert("mode", json!(environment.as_str()));
    config.insert("entry", json!(entry_modules(environment)));
    config.insert("output", output_section(environment));
    config.insert(
        "resolve",
        json!({
            "extensions": RESOLVE_EXTENSIONS,
            "alias": {},
        }),
    );
    config.insert("module", json!({ "rules": default_rules() }));
    config.insert("performance", json!({ "hints": false }));
    config.insert("optimization", optimization_section(environment));
    config
}

fn entry_modules(environment: Environment) -> Vec<&'static str> {
    match environment {
        Environment::Development => vec![HOT_CLIENT_ENTRY, CLIENT_ENTRY],
        Environment::Production => vec![CLIENT_ENTRY],
    }
}

fn output_section(environment: Environment) -> Value {
    match environment {
        Environment::Development => json!({
            "filename": "build/[name].bundle.js",
            "chunkFilename": "build/[name].js",
        }),
        Environment::Production => json!({
            "filename": "build/bundle.[chunkhash:8].js",
            "chunkFilename": "build/[name].[chunkhash:8].js",
        }),
    }
}

fn optimization_section(environment: Environment) -> Value {
    match environment {
        Environment::Development => json!({ "minimize": false }),
        Environment::Production => json!({
            "minimize": true,
            "splitChunks": { "chunks": "all" },
        }),
    }
}

fn default_rules() -> Value {
    json!([
        {
            "test": "\\.jsx?$",
            "exclude": "node_modules",
            "use": ["babel-loader"],
        },
        {
            "test": "\\.css$",
            "use": ["style-loader", "css-loader"],
        },
    ])
}
