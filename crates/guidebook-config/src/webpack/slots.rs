//! Slot-to-alias translation for replaceable documentation UI components.

use crate::error::{ConfigError, Result};

/// Alias namespace under which the documentation UI resolves its own
/// components.
pub const COMPONENT_NAMESPACE: &str = "guidebook-components";

/// Translate a user-facing slot name into its `resolve.alias` key.
///
/// The table is fixed and total: renderer slots live next to the component
/// they render, top-level slots alias the component directly. A name
/// outside the table is a caller error.
pub fn alias_key(slot: &str) -> Result<String> {
    let suffix = match slot {
        "Wrapper" => "Wrapper",
        "Logo" => "Logo",
        "Editor" => "Editor",
        "StyleGuideRenderer" => "StyleGuide/StyleGuideRenderer",
        "ComponentsListRenderer" => "ComponentsList/ComponentsListRenderer",
        "TableOfContentsRenderer" => "TableOfContents/TableOfContentsRenderer",
        "SectionHeadingRenderer" => "SectionHeading/SectionHeadingRenderer",
        "PlaygroundRenderer" => "Playground/PlaygroundRenderer",
        "ExamplesRenderer" => "Examples/ExamplesRenderer",
        "HeadingRenderer" => "Heading/HeadingRenderer",
        "LinkRenderer" => "Link/LinkRenderer",
        "ParaRenderer" => "Para/ParaRenderer",
        "PathlineRenderer" => "Pathline/PathlineRenderer",
        "CodeRenderer" => "Code/CodeRenderer",
        other => {
            return Err(ConfigError::UnknownSlot {
                slot: other.to_string(),
            });
        }
    };
    Ok(format!("{COMPONENT_NAMESPACE}/{suffix}"))
}

/// Check every slot name in a mapping without producing any aliases.
pub fn validate_slots<'a>(slots: impl IntoIterator<Item = &'a str>) -> Result<()> {
    for slot in slots {
        alias_key(slot)?;
    }
    Ok(())
}
