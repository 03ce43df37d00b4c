//! Digital-signage layout editor core.
//!
//! Three independent leaf components:
//! - [`layout`] — the zone-geometry catalog for the 14 screen partitions
//!   against a fixed 1920×1080 canvas;
//! - [`fonts`] — the font catalog and CSS `font-family` fallback resolver;
//! - [`gateway`] — a thin async facade over the hosted record store
//!   (campaigns, layouts, media files).
//!
//! The catalogs are pure constant tables; only the gateway talks to the
//! network, one request per call.

pub mod config;
pub mod errors;
pub mod fonts;
pub mod gateway;
pub mod layout;
pub mod models;

pub use config::Config;
pub use errors::GatewayError;
pub use gateway::StoreClient;
