pub mod metadata;
pub mod records;

pub use metadata::{
    BackgroundShape, LabelData, LabelGroup, LayoutConfiguration, MediaItem, MediaType,
    Orientation, ShapeKind, VideoAssignment,
};
pub use records::{Campaign, CampaignExpand, LayoutRecord, MediaFile};
