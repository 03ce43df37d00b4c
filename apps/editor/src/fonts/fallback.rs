//! CSS `font-family` resolution with device-appropriate fallback chains.
//!
//! Output strings are consumed verbatim by the styling layer AND are already
//! embedded in saved layout metadata, so the exact formatting (quoting,
//! fallback order) must not change. The rule chain is first-match-wins; the
//! order of the substring rules is load-bearing.

use super::catalog::{find_by_value, fonts_by_category, FontCategory};

/// Resolves a font value to a CSS `font-family` string with fallbacks.
///
/// Values not present in the default lookup surface come back unchanged:
/// graceful degradation for metadata referencing fonts this build does not
/// know, not an error.
pub fn resolve_css_family(value: &str) -> String {
    let Some(font) = find_by_value(value) else {
        return value.to_string();
    };

    match font.category {
        FontCategory::Android => android_fallback(value),
        FontCategory::System => system_fallback(value),
        // CSS keywords pass through untouched
        FontCategory::Web => value.to_string(),
    }
}

fn android_fallback(value: &str) -> String {
    if value.contains("Roboto") {
        format!("\"{value}\", 'Helvetica Neue', Arial, sans-serif")
    } else if value == "Open Sans" {
        "\"Open Sans\", \"Roboto\", Arial, sans-serif".to_string()
    } else if value == "Source Sans Pro" {
        "\"Source Sans Pro\", \"Roboto\", Arial, sans-serif".to_string()
    } else if value == "Nunito" {
        "\"Nunito\", \"Roboto\", Arial, sans-serif".to_string()
    } else if value == "Lato" {
        "\"Lato\", \"Roboto\", Arial, sans-serif".to_string()
    } else if value.contains("mono") || value.contains("Mono") {
        format!("\"{value}\", 'Courier New', monospace")
    } else if value == "serif" {
        format!("{value}, 'Times New Roman', Times, serif")
    } else if value.contains("serif") {
        // also catches the sans-serif-* family: every such value contains
        // "serif", so this arm wins over the sans-serif arm below
        format!("{value}, serif")
    } else if value.contains("sans-serif") {
        format!("{value}, Arial, sans-serif")
    } else {
        format!("\"{value}\", \"Roboto\", Arial, sans-serif")
    }
}

fn system_fallback(value: &str) -> String {
    if value.contains("Times") || value == "Georgia" {
        format!("{value}, serif")
    } else if value.contains("Courier") {
        format!("{value}, monospace")
    } else {
        format!("{value}, sans-serif")
    }
}

/// Whether a font value renders on the Android TV player: present in the
/// android catalog or the web-keyword catalog. System fonts are excluded on
/// purpose — they are desktop/browser fonts absent on the device.
pub fn is_android_compatible(value: &str) -> bool {
    fonts_by_category(FontCategory::Android)
        .iter()
        .any(|f| f.value == value)
        || fonts_by_category(FontCategory::Web)
            .iter()
            .any(|f| f.value == value)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
