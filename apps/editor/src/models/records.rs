//! Typed documents from the remote record store.
//!
//! The store owns and versions these; this layer only reads them. Timestamps
//! stay as the store's formatted strings; nothing here interprets them
//! beyond passing `sort=-created` back to the store.

use serde::{Deserialize, Serialize};

use super::metadata::LayoutConfiguration;

/// A campaign: a named group of layout ids, optionally expanded in-place by
/// the store when the list query asks for the `layouts` relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Layout ids in play order.
    #[serde(default)]
    pub layouts: Vec<String>,
    #[serde(default)]
    pub tenant: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
    /// Populated when the query requested `expand=layouts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<CampaignExpand>,
}

/// Expanded relations on a campaign record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignExpand {
    #[serde(default)]
    pub layouts: Vec<LayoutRecord>,
}

/// A saved layout document: canvas dimensions plus the full editor state in
/// `metadata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tenant: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub items: String,
    #[serde(default)]
    pub videos: String,
    #[serde(default)]
    pub metadata: Option<LayoutConfiguration>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
}

/// A record from the media files library. `file` is the stored filename used
/// to derive a download URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: String,
    #[serde(default, rename = "collectionId")]
    pub collection_id: String,
    #[serde(default, rename = "collectionName")]
    pub collection_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
}
