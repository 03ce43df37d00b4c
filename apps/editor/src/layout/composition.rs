//! Container and wrapper composition for the 14 layouts.
//!
//! A layout's top-level container is either a flex stack (row or column) or
//! the 2×2 grid. The 8 asymmetric/complex layouts additionally need a nested
//! wrapper: a main container spanning the canvas and a secondary container
//! holding the two stacked sub-zones, sized to a half or a third of the
//! canvas. Wrapper presence is a static property of the layout type.

use serde::{Deserialize, Serialize};

use super::geometry::{LayoutType, SizePercent, SizePixels};

// ────────────────────────────────────────────────────────────────────────────
// Container styles
// ────────────────────────────────────────────────────────────────────────────

/// Flow direction of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowDirection {
    Row,
    Column,
}

/// Top-level container style for a layout. The rendering layer maps this to
/// whatever styling system it uses; only the structure is modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ContainerStyle {
    Flex { direction: FlowDirection },
    Grid { columns: u8, rows: u8 },
}

const FLEX_ROW: ContainerStyle = ContainerStyle::Flex {
    direction: FlowDirection::Row,
};
const FLEX_COLUMN: ContainerStyle = ContainerStyle::Flex {
    direction: FlowDirection::Column,
};

/// Returns the top-level container style for a layout.
pub fn container_style(layout: LayoutType) -> ContainerStyle {
    match layout {
        LayoutType::FullScreen => FLEX_ROW,
        LayoutType::VerticalSplit
        | LayoutType::ThreeVertical
        | LayoutType::MainLeft
        | LayoutType::MainRight
        | LayoutType::TwoLeftOneRight
        | LayoutType::OneLeftTwoRight => FLEX_ROW,
        LayoutType::HorizontalSplit
        | LayoutType::ThreeHorizontal
        | LayoutType::MainTop
        | LayoutType::MainBottom
        | LayoutType::TwoTopOneBottom
        | LayoutType::OneTopTwoBottom => FLEX_COLUMN,
        LayoutType::Grid2x2 => ContainerStyle::Grid {
            columns: 2,
            rows: 2,
        },
    }
}

/// String-keyed lookup with the same fallback policy as the zone catalog:
/// unknown names get the `full-screen` container.
pub fn container_style_for_name(layout_name: &str) -> ContainerStyle {
    container_style(LayoutType::from_name(layout_name).unwrap_or(LayoutType::FullScreen))
}

// ────────────────────────────────────────────────────────────────────────────
// Wrapper composition
// ────────────────────────────────────────────────────────────────────────────

/// Nested container composition for asymmetric and complex layouts.
///
/// `main` spans the full canvas; `secondary` is the nested stack holding the
/// two equal sub-zones, with its own percentage and derived pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrapperComposition {
    pub main: ContainerStyle,
    pub secondary: ContainerStyle,
    pub secondary_percent: SizePercent,
    pub secondary_pixels: SizePixels,
}

fn wrapper(
    main: ContainerStyle,
    secondary: ContainerStyle,
    width_percent: f64,
    height_percent: f64,
) -> WrapperComposition {
    let secondary_percent = SizePercent {
        width: width_percent,
        height: height_percent,
    };
    WrapperComposition {
        main,
        secondary,
        secondary_percent,
        secondary_pixels: secondary_percent.to_pixels(),
    }
}

/// Returns the wrapper composition for a layout, or `None` for the 6 layouts
/// that render as a single flat container (fullscreen, even splits, thirds,
/// grid).
pub fn wrapper_composition(layout: LayoutType) -> Option<WrapperComposition> {
    match layout {
        LayoutType::MainLeft | LayoutType::MainRight => {
            Some(wrapper(FLEX_ROW, FLEX_COLUMN, 33.33, 100.0))
        }
        LayoutType::MainTop | LayoutType::MainBottom => {
            Some(wrapper(FLEX_COLUMN, FLEX_ROW, 100.0, 33.33))
        }
        LayoutType::TwoTopOneBottom | LayoutType::OneTopTwoBottom => {
            Some(wrapper(FLEX_COLUMN, FLEX_ROW, 100.0, 50.0))
        }
        LayoutType::TwoLeftOneRight | LayoutType::OneLeftTwoRight => {
            Some(wrapper(FLEX_ROW, FLEX_COLUMN, 50.0, 100.0))
        }
        LayoutType::FullScreen
        | LayoutType::VerticalSplit
        | LayoutType::HorizontalSplit
        | LayoutType::ThreeVertical
        | LayoutType::ThreeHorizontal
        | LayoutType::Grid2x2 => None,
    }
}

/// String-keyed lookup. Unknown names fall back to `full-screen`, which has
/// no wrapper.
pub fn wrapper_composition_for_name(layout_name: &str) -> Option<WrapperComposition> {
    wrapper_composition(LayoutType::from_name(layout_name).unwrap_or(LayoutType::FullScreen))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::geometry::{px_height, px_width};

    #[test]
    fn test_exactly_eight_layouts_have_wrappers() {
        let with_wrapper: Vec<_> = LayoutType::ALL
            .iter()
            .copied()
            .filter(|l| wrapper_composition(*l).is_some())
            .collect();
        assert_eq!(with_wrapper.len(), 8);
        assert!(with_wrapper.contains(&LayoutType::MainLeft));
        assert!(with_wrapper.contains(&LayoutType::MainRight));
        assert!(with_wrapper.contains(&LayoutType::MainTop));
        assert!(with_wrapper.contains(&LayoutType::MainBottom));
        assert!(with_wrapper.contains(&LayoutType::TwoTopOneBottom));
        assert!(with_wrapper.contains(&LayoutType::OneTopTwoBottom));
        assert!(with_wrapper.contains(&LayoutType::TwoLeftOneRight));
        assert!(with_wrapper.contains(&LayoutType::OneLeftTwoRight));
    }

    #[test]
    fn test_flat_layouts_have_no_wrapper() {
        for layout in [
            LayoutType::FullScreen,
            LayoutType::VerticalSplit,
            LayoutType::HorizontalSplit,
            LayoutType::ThreeVertical,
            LayoutType::ThreeHorizontal,
            LayoutType::Grid2x2,
        ] {
            assert!(
                wrapper_composition(layout).is_none(),
                "{} should be flat",
                layout.as_str()
            );
        }
    }

    #[test]
    fn test_wrapper_secondary_pixel_derivation() {
        let main_left = wrapper_composition(LayoutType::MainLeft).unwrap();
        assert_eq!(main_left.secondary_pixels.width, 640); // round(1920 / 3)
        assert_eq!(main_left.secondary_pixels.height, 1080);

        let main_top = wrapper_composition(LayoutType::MainTop).unwrap();
        assert_eq!(main_top.secondary_pixels.width, 1920);
        assert_eq!(main_top.secondary_pixels.height, 360); // round(1080 / 3)

        let two_top = wrapper_composition(LayoutType::TwoTopOneBottom).unwrap();
        assert_eq!(two_top.secondary_pixels.height, 540); // 1080 / 2

        let two_left = wrapper_composition(LayoutType::TwoLeftOneRight).unwrap();
        assert_eq!(two_left.secondary_pixels.width, 960); // 1920 / 2

        for layout in LayoutType::ALL {
            if let Some(w) = wrapper_composition(layout) {
                assert_eq!(w.secondary_pixels.width, px_width(w.secondary_percent.width));
                assert_eq!(
                    w.secondary_pixels.height,
                    px_height(w.secondary_percent.height)
                );
            }
        }
    }

    #[test]
    fn test_wrapper_directions_oppose() {
        // The secondary stack always flows across the main container's axis.
        for layout in LayoutType::ALL {
            if let Some(w) = wrapper_composition(layout) {
                match (w.main, w.secondary) {
                    (
                        ContainerStyle::Flex { direction: main },
                        ContainerStyle::Flex {
                            direction: secondary,
                        },
                    ) => assert_ne!(main, secondary, "{}", layout.as_str()),
                    _ => panic!("{}: wrapper containers must be flex", layout.as_str()),
                }
            }
        }
    }

    #[test]
    fn test_container_styles() {
        assert_eq!(
            container_style(LayoutType::VerticalSplit),
            ContainerStyle::Flex {
                direction: FlowDirection::Row
            }
        );
        assert_eq!(
            container_style(LayoutType::ThreeHorizontal),
            ContainerStyle::Flex {
                direction: FlowDirection::Column
            }
        );
        assert_eq!(
            container_style(LayoutType::Grid2x2),
            ContainerStyle::Grid {
                columns: 2,
                rows: 2
            }
        );
    }

    #[test]
    fn test_unknown_name_falls_back_to_full_screen_container() {
        assert_eq!(
            container_style_for_name("not-a-real-layout"),
            container_style(LayoutType::FullScreen)
        );
        assert!(wrapper_composition_for_name("not-a-real-layout").is_none());
        // known names still resolve
        assert!(wrapper_composition_for_name("main-left").is_some());
    }
}
