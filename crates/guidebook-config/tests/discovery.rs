//! Tests for file-based options discovery.

use std::fs;

use guidebook_config::{ConfigDiscovery, ConfigError, StyleGuide, WebpackOverride, discover};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn load_parses_toml_options() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("guidebook.toml"),
        r#"
title = "Acme Components"
components = "lib/**/*.jsx"
require = ["babel-polyfill", "./styles/global.css"]

[styleguide_components]
Wrapper = "styleguide/components/Wrapper"
"#,
    )
    .expect("write config");

    let options = ConfigDiscovery::new(dir.path()).load().expect("load");
    assert_eq!(options.title, "Acme Components");
    assert_eq!(options.components, "lib/**/*.jsx");
    assert_eq!(options.require, vec!["babel-polyfill", "./styles/global.css"]);
    assert_eq!(
        options.styleguide_components.get("Wrapper").map(String::as_str),
        Some("styleguide/components/Wrapper")
    );
}

#[test]
fn load_falls_back_to_package_json_field() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{
            "name": "app",
            "guidebook": {
                "title": "App Docs",
                "require": ["whatwg-fetch"]
            }
        }"#,
    )
    .expect("write package.json");

    let options = discover(dir.path()).expect("load");
    assert_eq!(options.title, "App Docs");
    assert_eq!(options.require, vec!["whatwg-fetch"]);
}

#[test]
fn missing_options_are_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let result = discover(dir.path());
    assert!(matches!(result.unwrap_err(), ConfigError::NotFound));
}

#[test]
fn toml_wins_over_package_json() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("guidebook.toml"), "title = \"From TOML\"\n")
        .expect("write toml");
    fs::write(
        dir.path().join("package.json"),
        r#"{ "guidebook": { "title": "From package.json" } }"#,
    )
    .expect("write package.json");

    let options = discover(dir.path()).expect("load");
    assert_eq!(options.title, "From TOML");
}

#[test]
fn malformed_toml_is_an_invalid_value() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("guidebook.toml"), "title = [unclosed\n").expect("write toml");

    let result = discover(dir.path());
    assert!(matches!(
        result.unwrap_err(),
        ConfigError::InvalidValue { .. }
    ));
}

#[test]
fn webpack_config_table_loads_as_a_fragment_override() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("guidebook.toml"),
        r#"
[webpack_config]
devtool = "source-map"

[webpack_config.resolve]
extensions = [".scss"]
"#,
    )
    .expect("write config");

    let options = discover(dir.path()).expect("load");
    assert!(matches!(
        options.webpack_config,
        Some(WebpackOverride::Fragment(_))
    ));

    // The loaded fragment participates in composition like any other.
    let config = StyleGuide::new(options, dir.path())
        .expect("context")
        .make_webpack_config(None)
        .expect("compose");
    assert_eq!(config.get("devtool"), Some(&json!("source-map")));
    assert_eq!(config.resolve_extensions().last(), Some(&".scss"));
}

#[test]
fn non_table_webpack_config_is_an_invalid_override() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("guidebook.toml"),
        "webpack_config = \"webpack.config.js\"\n",
    )
    .expect("write config");

    let result = discover(dir.path());
    assert!(matches!(
        result.unwrap_err(),
        ConfigError::InvalidOverrideType { .. }
    ));
}
