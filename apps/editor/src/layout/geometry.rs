//! Core geometry types for the zone-layout model.
//!
//! All layouts partition a fixed 1920×1080 canvas. Zone sizes are expressed
//! both as percentages of the canvas and as derived pixel dimensions;
//! `px = round(percent / 100 * canvas_dim)` is the single derivation rule,
//! applied identically to every zone and every wrapper container.

use serde::{Deserialize, Serialize};

/// Canvas width in pixels. Every layout targets this fixed canvas.
pub const CANVAS_WIDTH: u32 = 1920;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 1080;

// ────────────────────────────────────────────────────────────────────────────
// Layout type enum
// ────────────────────────────────────────────────────────────────────────────

/// The 14 supported screen-partition layouts.
///
/// Wire names are the kebab-case identifiers stored in saved layout metadata
/// (`full-screen`, `grid-2x2`, …). Unknown runtime strings are not an error:
/// catalog lookups fall back to `FullScreen` (see `zones_for_name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutType {
    #[serde(rename = "full-screen")]
    FullScreen,
    #[serde(rename = "vertical-split")]
    VerticalSplit,
    #[serde(rename = "horizontal-split")]
    HorizontalSplit,
    #[serde(rename = "three-vertical")]
    ThreeVertical,
    #[serde(rename = "three-horizontal")]
    ThreeHorizontal,
    #[serde(rename = "main-left")]
    MainLeft,
    #[serde(rename = "main-right")]
    MainRight,
    #[serde(rename = "main-top")]
    MainTop,
    #[serde(rename = "main-bottom")]
    MainBottom,
    #[serde(rename = "two-top-one-bottom")]
    TwoTopOneBottom,
    #[serde(rename = "one-top-two-bottom")]
    OneTopTwoBottom,
    #[serde(rename = "two-left-one-right")]
    TwoLeftOneRight,
    #[serde(rename = "one-left-two-right")]
    OneLeftTwoRight,
    #[serde(rename = "grid-2x2")]
    Grid2x2,
}

impl LayoutType {
    /// All 14 layout types, in catalog order.
    pub const ALL: [LayoutType; 14] = [
        LayoutType::FullScreen,
        LayoutType::VerticalSplit,
        LayoutType::HorizontalSplit,
        LayoutType::ThreeVertical,
        LayoutType::ThreeHorizontal,
        LayoutType::MainLeft,
        LayoutType::MainRight,
        LayoutType::MainTop,
        LayoutType::MainBottom,
        LayoutType::TwoTopOneBottom,
        LayoutType::OneTopTwoBottom,
        LayoutType::TwoLeftOneRight,
        LayoutType::OneLeftTwoRight,
        LayoutType::Grid2x2,
    ];

    /// The kebab-case wire identifier for this layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::FullScreen => "full-screen",
            LayoutType::VerticalSplit => "vertical-split",
            LayoutType::HorizontalSplit => "horizontal-split",
            LayoutType::ThreeVertical => "three-vertical",
            LayoutType::ThreeHorizontal => "three-horizontal",
            LayoutType::MainLeft => "main-left",
            LayoutType::MainRight => "main-right",
            LayoutType::MainTop => "main-top",
            LayoutType::MainBottom => "main-bottom",
            LayoutType::TwoTopOneBottom => "two-top-one-bottom",
            LayoutType::OneTopTwoBottom => "one-top-two-bottom",
            LayoutType::TwoLeftOneRight => "two-left-one-right",
            LayoutType::OneLeftTwoRight => "one-left-two-right",
            LayoutType::Grid2x2 => "grid-2x2",
        }
    }

    /// Parses a wire identifier. Returns `None` for unrecognized names;
    /// callers that want the fallback policy use the `*_for_name` catalog
    /// functions instead.
    pub fn from_name(name: &str) -> Option<LayoutType> {
        LayoutType::ALL.iter().copied().find(|l| l.as_str() == name)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Zone geometry
// ────────────────────────────────────────────────────────────────────────────

/// Classification tag for a zone within its layout. Not a coordinate:
/// the rendering layer derives placement from `index`/`total` and the
/// container composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZonePosition {
    Fullscreen,
    SplitHorizontal,
    SplitVertical,
    Grid,
    Asymmetric,
    Complex,
}

/// Zone size as percentages of the canvas (0–100, may be fractional).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizePercent {
    pub width: f64,
    pub height: f64,
}

/// Zone size in pixels, derived from `SizePercent` against the fixed canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePixels {
    pub width: u32,
    pub height: u32,
}

/// One partition of the canvas for a given layout.
///
/// Serialize-only: zones are catalog output handed to the rendering layer,
/// never read back in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    /// Stable identifier, unique within the layout (`zone-1`, `zone-2`, …).
    /// List order is visual order.
    pub id: &'static str,
    pub size_percent: SizePercent,
    pub size_pixels: SizePixels,
    pub position: ZonePosition,
    /// Zero-based position within the zone list.
    pub index: usize,
    /// Zone-list length for this layout.
    pub total: usize,
}

/// Derives a pixel width from a canvas-width percentage.
pub fn px_width(percent: f64) -> u32 {
    (percent / 100.0 * CANVAS_WIDTH as f64).round() as u32
}

/// Derives a pixel height from a canvas-height percentage.
pub fn px_height(percent: f64) -> u32 {
    (percent / 100.0 * CANVAS_HEIGHT as f64).round() as u32
}

impl SizePercent {
    /// Applies the pixel derivation to both dimensions.
    pub fn to_pixels(&self) -> SizePixels {
        SizePixels {
            width: px_width(self.width),
            height: px_height(self.height),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
