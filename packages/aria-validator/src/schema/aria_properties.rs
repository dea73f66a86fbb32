//! ARIA Property Table
//!
//! Recognized `aria-*` attribute names, grouped the way WAI-ARIA groups them.
//!
//! Adding a newly standardized attribute is a data change only: insert the
//! lower-case literal below. The category is informational and is never
//! consulted by the validator; presence of the key is what matters.
//!
//! See https://www.w3.org/TR/wai-aria-1.3/#state_prop_def

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every entry of [`ARIA_PROPERTIES`].
pub const ARIA_PREFIX: &str = "aria-";

/// Category an ARIA attribute belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AriaCategory {
    Global,
    Widget,
    LiveRegion,
    DragAndDrop,
    Relationship,
}

impl fmt::Display for AriaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AriaCategory::Global => "global",
            AriaCategory::Widget => "widget",
            AriaCategory::LiveRegion => "live-region",
            AriaCategory::DragAndDrop => "drag-and-drop",
            AriaCategory::Relationship => "relationship",
        };
        f.write_str(name)
    }
}

/// Recognized ARIA attributes, in table order
pub static ARIA_PROPERTIES: Lazy<IndexMap<&'static str, AriaCategory>> = Lazy::new(|| {
    use AriaCategory::*;

    let mut map = IndexMap::new();

    // Global states and properties
    map.insert("aria-current", Global);
    map.insert("aria-description", Global);
    map.insert("aria-details", Global);
    map.insert("aria-disabled", Global);
    map.insert("aria-hidden", Global);
    map.insert("aria-invalid", Global);
    map.insert("aria-keyshortcuts", Global);
    map.insert("aria-label", Global);
    map.insert("aria-roledescription", Global);

    // Widget attributes
    map.insert("aria-autocomplete", Widget);
    map.insert("aria-checked", Widget);
    map.insert("aria-expanded", Widget);
    map.insert("aria-haspopup", Widget);
    map.insert("aria-level", Widget);
    map.insert("aria-modal", Widget);
    map.insert("aria-multiline", Widget);
    map.insert("aria-multiselectable", Widget);
    map.insert("aria-orientation", Widget);
    map.insert("aria-placeholder", Widget);
    map.insert("aria-pressed", Widget);
    map.insert("aria-readonly", Widget);
    map.insert("aria-required", Widget);
    map.insert("aria-selected", Widget);
    map.insert("aria-sort", Widget);
    map.insert("aria-valuemax", Widget);
    map.insert("aria-valuemin", Widget);
    map.insert("aria-valuenow", Widget);
    map.insert("aria-valuetext", Widget);

    // Live region attributes
    map.insert("aria-atomic", LiveRegion);
    map.insert("aria-busy", LiveRegion);
    map.insert("aria-live", LiveRegion);
    map.insert("aria-relevant", LiveRegion);

    // Drag-and-drop attributes (deprecated in ARIA 1.1, still accepted)
    map.insert("aria-dropeffect", DragAndDrop);
    map.insert("aria-grabbed", DragAndDrop);

    // Relationship attributes
    map.insert("aria-activedescendant", Relationship);
    map.insert("aria-colcount", Relationship);
    map.insert("aria-colindex", Relationship);
    map.insert("aria-colspan", Relationship);
    map.insert("aria-controls", Relationship);
    map.insert("aria-describedby", Relationship);
    map.insert("aria-errormessage", Relationship);
    map.insert("aria-flowto", Relationship);
    map.insert("aria-labelledby", Relationship);
    map.insert("aria-owns", Relationship);
    map.insert("aria-posinset", Relationship);
    map.insert("aria-rowcount", Relationship);
    map.insert("aria-rowindex", Relationship);
    map.insert("aria-rowspan", Relationship);
    map.insert("aria-setsize", Relationship);

    // ARIA 1.3 attributes
    map.insert("aria-braillelabel", Global);
    map.insert("aria-brailleroledescription", Global);
    map.insert("aria-colindextext", Relationship);
    map.insert("aria-rowindextext", Relationship);

    map
});

/// Category of a recognized ARIA attribute, if any
pub fn aria_category(name: &str) -> Option<AriaCategory> {
    ARIA_PROPERTIES.get(name).copied()
}
