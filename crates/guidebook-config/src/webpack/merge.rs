//! Deep-merge rules for configuration fragments.

use serde_json::Value;

use crate::configuration::Configuration;

/// Section that survives every merge below the escape hatch. Downstream
/// build and serve collaborators depend on the generated asset naming.
const PROTECTED_SECTION: &str = "output";

/// Merge `fragment` into `base`: tables merge key-by-key recursively,
/// sequences concatenate (accumulated first, fragment appended), scalars
/// are overwritten by the fragment's value.
pub fn merge(base: &mut Configuration, fragment: &Configuration) {
    for (key, value) in fragment.as_map() {
        merge_values(
            base.as_map_mut()
                .entry(key.clone())
                .or_insert(Value::Null),
            value,
        );
    }
}

/// [`merge`], with the fragment's `output` section discarded first.
pub fn merge_protected(base: &mut Configuration, fragment: &Configuration) {
    for (key, value) in fragment.as_map() {
        if key == PROTECTED_SECTION {
            continue;
        }
        merge_values(
            base.as_map_mut()
                .entry(key.clone())
                .or_insert(Value::Null),
            value,
        );
    }
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (Value::Array(target_items), Value::Array(update_items)) => {
            target_items.extend(update_items.iter().cloned());
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
