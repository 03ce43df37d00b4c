// Layout Geometry Catalog: the declarative zone model for the 14 screen
// partitions. Pure, synchronous, stateless; safe from any caller.

pub mod catalog;
pub mod composition;
pub mod geometry;

// Re-export the public API consumed by the editor and the gateway models.
pub use catalog::{zones, zones_for_name};
pub use composition::{
    container_style, container_style_for_name, wrapper_composition, wrapper_composition_for_name,
    ContainerStyle, FlowDirection, WrapperComposition,
};
pub use geometry::{
    px_height, px_width, LayoutType, SizePercent, SizePixels, Zone, ZonePosition, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
