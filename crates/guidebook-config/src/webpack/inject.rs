//! Style-guide-derived additions: extra entry modules and slot aliases.

use crate::configuration::Configuration;
use crate::error::Result;
use crate::options::StyleGuideOptions;

use super::slots;

/// Fold `require` and `styleguide_components` into the accumulated
/// configuration. Only `entry` and `resolve.alias` are touched; `require`
/// order and duplicates are preserved as given.
pub(crate) fn apply(config: &mut Configuration, options: &StyleGuideOptions) -> Result<()> {
    for module in &options.require {
        config.push_entry(module);
    }

    for (slot, path) in &options.styleguide_components {
        let key = slots::alias_key(slot)?;
        tracing::trace!("aliasing {key} -> {path}");
        config.insert_alias(key, path.clone());
    }

    Ok(())
}
