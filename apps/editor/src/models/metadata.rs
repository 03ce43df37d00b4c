//! Saved-layout metadata: the full editor state embedded in a layout record.
//!
//! Field names are camelCase on the wire (the metadata blob is shared with
//! the web player). `layout` is deliberately a plain string, not
//! `LayoutType`: documents saved by newer builds may carry layout names this
//! build does not know, and the geometry catalog's fallback policy handles
//! those at lookup time (`zones_for_name`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Image,
}

/// One media file scheduled inside a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Display duration in seconds.
    pub duration: f64,
    pub order: u32,
    pub url: String,
}

/// The media playlist assigned to a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAssignment {
    pub zone_id: String,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub current_media_index: usize,
}

/// A free-floating text label over the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelData {
    pub id: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// CSS length, e.g. "24px".
    pub font_size: String,
    pub font_weight: String,
    pub color: String,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub z_index: i32,
}

fn default_scale() -> f64 {
    1.0
}

/// A named group of labels sharing style overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub label_ids: Vec<String>,
    /// Open-ended style bag; the editor merges it over each member label.
    #[serde(default)]
    pub shared_styles: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
}

/// A decorative shape rendered behind the zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundShape {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    #[serde(default)]
    pub border_color: String,
    #[serde(default)]
    pub border_width: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub z_index: i32,
}

fn default_opacity() -> f64 {
    1.0
}

/// The complete editor state for one saved layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfiguration {
    pub id: String,
    pub name: String,
    pub orientation: Orientation,
    /// Layout-type wire name; resolve through the geometry catalog.
    pub layout: String,
    #[serde(default)]
    pub assignments: Vec<VideoAssignment>,
    #[serde(default)]
    pub labels: Vec<LabelData>,
    #[serde(default)]
    pub label_groups: Vec<LabelGroup>,
    #[serde(default)]
    pub background_shapes: Vec<BackgroundShape>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub tenant_id: String,
}
