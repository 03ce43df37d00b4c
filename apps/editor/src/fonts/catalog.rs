//! Static font catalog for the signage preview.
//!
//! Three categories: fonts shipped on the Android TV player (the only ones
//! offered by default in the editor), desktop/system fonts kept for legacy
//! saved layouts, and CSS keyword "fonts" (`inherit`/`initial`).
//!
//! The default lookup surface (`all_fonts`, `find_by_value`) is the android
//! subset only: the player is an Android device, so system fonts are not
//! offered even though the resolver knows their fallback chains.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Entry types
// ────────────────────────────────────────────────────────────────────────────

/// Font category. Determines which fallback chain family the resolver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCategory {
    Android,
    System,
    Web,
}

impl FontCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontCategory::Android => "android",
            FontCategory::System => "system",
            FontCategory::Web => "web",
        }
    }

    /// Parses a category name. Unknown names yield `None`; the string-keyed
    /// catalog query maps that to an empty result.
    pub fn from_name(name: &str) -> Option<FontCategory> {
        match name {
            "android" => Some(FontCategory::Android),
            "system" => Some(FontCategory::System),
            "web" => Some(FontCategory::Web),
            _ => None,
        }
    }
}

/// One catalog entry. `value` is both the lookup key and the raw CSS
/// font-family token; `label` is the editor-facing display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontEntry {
    pub label: &'static str,
    pub value: &'static str,
    pub category: FontCategory,
    pub description: &'static str,
}

const fn entry(
    label: &'static str,
    value: &'static str,
    category: FontCategory,
    description: &'static str,
) -> FontEntry {
    FontEntry {
        label,
        value,
        category,
        description,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog data
// ────────────────────────────────────────────────────────────────────────────

/// Fonts available on the Android TV player (Google Fonts plus the generic
/// Android families and their weight variants).
static ANDROID_FONTS: [FontEntry; 15] = [
    entry(
        "Roboto",
        "Roboto",
        FontCategory::Android,
        "Default Android font",
    ),
    entry(
        "Roboto Condensed",
        "Roboto Condensed",
        FontCategory::Android,
        "Condensed Roboto variant",
    ),
    entry(
        "Roboto Mono",
        "Roboto Mono",
        FontCategory::Android,
        "Monospace Roboto",
    ),
    entry(
        "Roboto Slab",
        "Roboto Slab",
        FontCategory::Android,
        "Roboto with slab serifs",
    ),
    entry(
        "Sans-serif",
        "sans-serif",
        FontCategory::Android,
        "Generic Android sans-serif",
    ),
    entry(
        "Serif",
        "serif",
        FontCategory::Android,
        "Generic Android serif",
    ),
    entry(
        "Monospace",
        "monospace",
        FontCategory::Android,
        "Generic Android monospace",
    ),
    entry(
        "Sans-serif Light",
        "sans-serif-light",
        FontCategory::Android,
        "Light Android sans-serif",
    ),
    entry(
        "Sans-serif Thin",
        "sans-serif-thin",
        FontCategory::Android,
        "Thin Android sans-serif",
    ),
    entry(
        "Sans-serif Condensed",
        "sans-serif-condensed",
        FontCategory::Android,
        "Condensed Android sans-serif",
    ),
    entry(
        "Sans-serif Medium",
        "sans-serif-medium",
        FontCategory::Android,
        "Medium-weight Android sans-serif",
    ),
    entry(
        "Open Sans",
        "Open Sans",
        FontCategory::Android,
        "Highly legible humanist sans-serif",
    ),
    entry(
        "Lato",
        "Lato",
        FontCategory::Android,
        "Modern, elegant sans-serif",
    ),
    entry(
        "Source Sans Pro",
        "Source Sans Pro",
        FontCategory::Android,
        "Adobe UI sans-serif",
    ),
    entry(
        "Nunito",
        "Nunito",
        FontCategory::Android,
        "Friendly rounded sans-serif",
    ),
];

/// Standard desktop/system fonts. Present in legacy saved layouts only;
/// never offered by the default picker and not Android-compatible.
static SYSTEM_FONTS: [FontEntry; 8] = [
    entry("Arial", "Arial", FontCategory::System, "Standard sans-serif"),
    entry(
        "Helvetica",
        "Helvetica",
        FontCategory::System,
        "Classic sans-serif",
    ),
    entry(
        "Times New Roman",
        "Times New Roman",
        FontCategory::System,
        "Traditional serif",
    ),
    entry(
        "Georgia",
        "Georgia",
        FontCategory::System,
        "Screen-optimized serif",
    ),
    entry(
        "Verdana",
        "Verdana",
        FontCategory::System,
        "Legible sans-serif",
    ),
    entry(
        "Courier New",
        "Courier New",
        FontCategory::System,
        "Standard monospace",
    ),
    entry(
        "Impact",
        "Impact",
        FontCategory::System,
        "Condensed display sans-serif",
    ),
    entry(
        "Comic Sans MS",
        "Comic Sans MS",
        FontCategory::System,
        "Informal, casual",
    ),
];

/// CSS keyword values, passed through to the styling layer untouched.
static WEB_FONTS: [FontEntry; 2] = [
    entry(
        "Inherit",
        "inherit",
        FontCategory::Web,
        "Inherit from the parent element",
    ),
    entry(
        "Default",
        "initial",
        FontCategory::Web,
        "Browser initial value",
    ),
];

/// Values of the curated most-used subset surfaced first in the editor.
const RECOMMENDED_VALUES: [&str; 5] = [
    "Roboto",
    "sans-serif",
    "Roboto Condensed",
    "Roboto Mono",
    "sans-serif-medium",
];

// ────────────────────────────────────────────────────────────────────────────
// Queries
// ────────────────────────────────────────────────────────────────────────────

/// A labeled group of fonts for dropdown rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontGroup {
    pub label: &'static str,
    pub items: &'static [FontEntry],
}

/// All fonts offered by default. Android only: the target device is an
/// Android TV player.
pub fn all_fonts() -> &'static [FontEntry] {
    &ANDROID_FONTS
}

/// Fonts in a specific category.
pub fn fonts_by_category(category: FontCategory) -> &'static [FontEntry] {
    match category {
        FontCategory::Android => &ANDROID_FONTS,
        FontCategory::System => &SYSTEM_FONTS,
        FontCategory::Web => &WEB_FONTS,
    }
}

/// String-keyed category query. Unknown category names return an empty
/// slice, never an error.
pub fn fonts_by_category_name(category: &str) -> &'static [FontEntry] {
    match FontCategory::from_name(category) {
        Some(c) => fonts_by_category(c),
        None => &[],
    }
}

/// Fonts grouped for dropdown rendering: a single Android TV group.
pub fn grouped_fonts() -> Vec<FontGroup> {
    vec![FontGroup {
        label: "Android TV fonts",
        items: &ANDROID_FONTS,
    }]
}

/// The curated most-used subset, in recommendation order.
pub fn recommended_fonts() -> Vec<&'static FontEntry> {
    RECOMMENDED_VALUES
        .iter()
        .filter_map(|v| find_by_value(v))
        .collect()
}

/// Looks up a font by its value over the default (android) surface.
pub fn find_by_value(value: &str) -> Option<&'static FontEntry> {
    all_fonts().iter().find(|f| f.value == value)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(fonts_by_category(FontCategory::Android).len(), 15);
        assert_eq!(fonts_by_category(FontCategory::System).len(), 8);
        assert_eq!(fonts_by_category(FontCategory::Web).len(), 2);
    }

    #[test]
    fn test_all_fonts_is_android_only() {
        assert!(all_fonts()
            .iter()
            .all(|f| f.category == FontCategory::Android));
        assert_eq!(all_fonts().len(), 15);
    }

    #[test]
    fn test_values_unique_within_lookup_surface() {
        let values: HashSet<_> = all_fonts().iter().map(|f| f.value).collect();
        assert_eq!(values.len(), all_fonts().len());
    }

    #[test]
    fn test_unknown_category_name_is_empty() {
        assert!(fonts_by_category_name("desktop").is_empty());
        assert!(fonts_by_category_name("").is_empty());
        assert_eq!(fonts_by_category_name("system").len(), 8);
    }

    #[test]
    fn test_grouped_fonts_single_android_group() {
        let groups = grouped_fonts();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items.len(), 15);
    }

    #[test]
    fn test_recommended_fonts_curated_five() {
        let recommended = recommended_fonts();
        let values: Vec<_> = recommended.iter().map(|f| f.value).collect();
        assert_eq!(
            values,
            vec![
                "Roboto",
                "sans-serif",
                "Roboto Condensed",
                "Roboto Mono",
                "sans-serif-medium"
            ]
        );
    }

    #[test]
    fn test_find_by_value_excludes_system_and_web() {
        assert!(find_by_value("Roboto").is_some());
        assert!(find_by_value("Open Sans").is_some());
        // Arial is in the system catalog, not the lookup surface
        assert!(find_by_value("Arial").is_none());
        assert!(find_by_value("inherit").is_none());
        assert!(find_by_value("no-such-font").is_none());
    }

    #[test]
    fn test_category_names_round_trip() {
        for c in [FontCategory::Android, FontCategory::System, FontCategory::Web] {
            assert_eq!(FontCategory::from_name(c.as_str()), Some(c));
        }
        assert_eq!(FontCategory::from_name("Android"), None);
    }
}
