//! Tests for the fragment merge rules used by the pipeline's host and
//! user-override stages.

use guidebook_config::Configuration;
use guidebook_config::webpack::{merge, merge_protected};
use serde_json::{Value, json};

fn config(value: Value) -> Configuration {
    Configuration::from_value(value).expect("object fixture")
}

#[test]
fn merge_overwrites_scalar_values() {
    let mut base = config(json!({ "devtool": "eval", "bail": true }));
    merge(&mut base, &config(json!({ "devtool": "source-map" })));

    assert_eq!(base.get("devtool"), Some(&json!("source-map")));
    assert_eq!(base.get("bail"), Some(&json!(true)));
}

#[test]
fn merge_preserves_unspecified_fields() {
    let mut base = config(json!({
        "mode": "production",
        "resolve": { "extensions": [".js"], "symlinks": false },
    }));
    merge(&mut base, &config(json!({ "resolve": { "symlinks": true } })));

    assert_eq!(base.get("mode"), Some(&json!("production")));
    assert_eq!(base.resolve_extensions(), vec![".js"]);
    assert_eq!(
        base.get("resolve").and_then(|resolve| resolve.get("symlinks")),
        Some(&json!(true))
    );
}

#[test]
fn merge_handles_nested_tables() {
    let mut base = config(json!({
        "optimization": { "minimize": true, "splitChunks": { "chunks": "all" } },
    }));
    merge(&mut base, &config(json!({
        "optimization": { "splitChunks": { "minSize": 30000 } },
    })));

    assert_eq!(
        base.get("optimization"),
        Some(&json!({
            "minimize": true,
            "splitChunks": { "chunks": "all", "minSize": 30000 },
        }))
    );
}

#[test]
fn merge_concatenates_sequences() {
    let mut base = config(json!({ "resolve": { "extensions": [".js", ".jsx"] } }));
    merge(&mut base, &config(json!({ "resolve": { "extensions": [".scss", ".css"] } })));

    assert_eq!(base.resolve_extensions(), vec![".js", ".jsx", ".scss", ".css"]);
}

#[test]
fn merge_keeps_duplicate_sequence_items() {
    let mut base = config(json!({ "entry": ["a.js"] }));
    merge(&mut base, &config(json!({ "entry": ["a.js"] })));

    assert_eq!(base.entry(), vec!["a.js", "a.js"]);
}

#[test]
fn merge_adopts_keys_the_base_never_had() {
    let mut base = config(json!({}));
    merge(&mut base, &config(json!({ "_env": "production", "devtool": null })));

    assert_eq!(base.get("_env"), Some(&json!("production")));
    assert_eq!(base.get("devtool"), Some(&json!(null)));
}

#[test]
fn protected_merge_discards_the_fragment_output_section() {
    let mut base = config(json!({
        "output": { "filename": "build/bundle.[chunkhash:8].js" },
        "resolve": { "extensions": [".js"] },
    }));
    merge_protected(&mut base, &config(json!({
        "output": { "filename": "broken.js", "path": "elsewhere" },
        "resolve": { "extensions": [".scss"] },
    })));

    assert_eq!(base.output_filename(), Some("build/bundle.[chunkhash:8].js"));
    assert_eq!(
        base.get("output").and_then(|output| output.get("path")),
        None
    );
    assert_eq!(base.resolve_extensions(), vec![".js", ".scss"]);
}

#[test]
fn protected_merge_never_creates_an_output_section() {
    let mut base = config(json!({}));
    merge_protected(&mut base, &config(json!({ "output": { "filename": "x.js" } })));

    assert!(base.get("output").is_none());
}
