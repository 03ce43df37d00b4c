//! Static zone catalog for the 14 layout types.
//!
//! The 14 layouts fall into fixed families:
//! - 1 fullscreen zone
//! - 2 equal split zones (vertical or horizontal)
//! - 3 equal thirds (vertical or horizontal)
//! - 4 asymmetric layouts: one 2/3 primary zone plus two stacked 1/3×1/2
//!   secondaries, in left/right/top/bottom orientations
//! - 4 complex layouts: one full-width/height half band plus two equal
//!   quarter sub-zones, in four orientations
//! - 1 uniform 2×2 grid
//!
//! Percentages are catalog data, not inferred; pixel dimensions are derived
//! at lookup time so the two representations cannot drift.

use super::geometry::{LayoutType, SizePercent, Zone, ZonePosition};

// ────────────────────────────────────────────────────────────────────────────
// Zone tables
// ────────────────────────────────────────────────────────────────────────────

/// One catalog row: percentages plus the position tag. Index/total and pixel
/// dimensions are filled in by `zones`.
struct ZoneDef {
    id: &'static str,
    width: f64,
    height: f64,
    position: ZonePosition,
}

const fn def(id: &'static str, width: f64, height: f64, position: ZonePosition) -> ZoneDef {
    ZoneDef {
        id,
        width,
        height,
        position,
    }
}

use ZonePosition::{Asymmetric, Complex, Fullscreen, Grid, SplitHorizontal, SplitVertical};

static FULL_SCREEN: [ZoneDef; 1] = [def("zone-1", 100.0, 100.0, Fullscreen)];

static VERTICAL_SPLIT: [ZoneDef; 2] = [
    def("zone-1", 50.0, 100.0, SplitVertical),
    def("zone-2", 50.0, 100.0, SplitVertical),
];

static HORIZONTAL_SPLIT: [ZoneDef; 2] = [
    def("zone-1", 100.0, 50.0, SplitHorizontal),
    def("zone-2", 100.0, 50.0, SplitHorizontal),
];

static THREE_VERTICAL: [ZoneDef; 3] = [
    def("zone-1", 33.33, 100.0, SplitVertical),
    def("zone-2", 33.33, 100.0, SplitVertical),
    def("zone-3", 33.33, 100.0, SplitVertical),
];

static THREE_HORIZONTAL: [ZoneDef; 3] = [
    def("zone-1", 100.0, 33.33, SplitHorizontal),
    def("zone-2", 100.0, 33.33, SplitHorizontal),
    def("zone-3", 100.0, 33.33, SplitHorizontal),
];

static MAIN_LEFT: [ZoneDef; 3] = [
    def("zone-1", 66.67, 100.0, Asymmetric),
    def("zone-2", 33.33, 50.0, Asymmetric),
    def("zone-3", 33.33, 50.0, Asymmetric),
];

static MAIN_RIGHT: [ZoneDef; 3] = [
    def("zone-1", 33.33, 50.0, Asymmetric),
    def("zone-2", 33.33, 50.0, Asymmetric),
    def("zone-3", 66.67, 100.0, Asymmetric),
];

static MAIN_TOP: [ZoneDef; 3] = [
    def("zone-1", 100.0, 66.67, Asymmetric),
    def("zone-2", 50.0, 33.33, Asymmetric),
    def("zone-3", 50.0, 33.33, Asymmetric),
];

static MAIN_BOTTOM: [ZoneDef; 3] = [
    def("zone-1", 50.0, 33.33, Asymmetric),
    def("zone-2", 50.0, 33.33, Asymmetric),
    def("zone-3", 100.0, 66.67, Asymmetric),
];

static TWO_TOP_ONE_BOTTOM: [ZoneDef; 3] = [
    def("zone-1", 50.0, 50.0, Complex),
    def("zone-2", 50.0, 50.0, Complex),
    def("zone-3", 100.0, 50.0, Complex),
];

static ONE_TOP_TWO_BOTTOM: [ZoneDef; 3] = [
    def("zone-1", 100.0, 50.0, Complex),
    def("zone-2", 50.0, 50.0, Complex),
    def("zone-3", 50.0, 50.0, Complex),
];

static TWO_LEFT_ONE_RIGHT: [ZoneDef; 3] = [
    def("zone-1", 50.0, 50.0, Complex),
    def("zone-2", 50.0, 50.0, Complex),
    def("zone-3", 50.0, 100.0, Complex),
];

static ONE_LEFT_TWO_RIGHT: [ZoneDef; 3] = [
    def("zone-1", 50.0, 100.0, Complex),
    def("zone-2", 50.0, 50.0, Complex),
    def("zone-3", 50.0, 50.0, Complex),
];

static GRID_2X2: [ZoneDef; 4] = [
    def("zone-1", 50.0, 50.0, Grid),
    def("zone-2", 50.0, 50.0, Grid),
    def("zone-3", 50.0, 50.0, Grid),
    def("zone-4", 50.0, 50.0, Grid),
];

fn zone_defs(layout: LayoutType) -> &'static [ZoneDef] {
    match layout {
        LayoutType::FullScreen => &FULL_SCREEN,
        LayoutType::VerticalSplit => &VERTICAL_SPLIT,
        LayoutType::HorizontalSplit => &HORIZONTAL_SPLIT,
        LayoutType::ThreeVertical => &THREE_VERTICAL,
        LayoutType::ThreeHorizontal => &THREE_HORIZONTAL,
        LayoutType::MainLeft => &MAIN_LEFT,
        LayoutType::MainRight => &MAIN_RIGHT,
        LayoutType::MainTop => &MAIN_TOP,
        LayoutType::MainBottom => &MAIN_BOTTOM,
        LayoutType::TwoTopOneBottom => &TWO_TOP_ONE_BOTTOM,
        LayoutType::OneTopTwoBottom => &ONE_TOP_TWO_BOTTOM,
        LayoutType::TwoLeftOneRight => &TWO_LEFT_ONE_RIGHT,
        LayoutType::OneLeftTwoRight => &ONE_LEFT_TWO_RIGHT,
        LayoutType::Grid2x2 => &GRID_2X2,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lookup
// ────────────────────────────────────────────────────────────────────────────

/// Returns the ordered zone list for a layout, with pixel dimensions derived
/// from the percentage table.
pub fn zones(layout: LayoutType) -> Vec<Zone> {
    let defs = zone_defs(layout);
    let total = defs.len();
    defs.iter()
        .enumerate()
        .map(|(index, s)| {
            let size_percent = SizePercent {
                width: s.width,
                height: s.height,
            };
            Zone {
                id: s.id,
                size_percent,
                size_pixels: size_percent.to_pixels(),
                position: s.position,
                index,
                total,
            }
        })
        .collect()
}

/// String-keyed lookup. Unrecognized layout names fall back to the
/// `full-screen` single-zone definition; saved metadata may carry layout
/// names this build does not know, and the editor must still render.
pub fn zones_for_name(layout_name: &str) -> Vec<Zone> {
    zones(LayoutType::from_name(layout_name).unwrap_or(LayoutType::FullScreen))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::geometry::{px_height, px_width, SizePixels};

    fn expected_zone_count(layout: LayoutType) -> usize {
        match layout {
            LayoutType::FullScreen => 1,
            LayoutType::VerticalSplit | LayoutType::HorizontalSplit => 2,
            LayoutType::Grid2x2 => 4,
            _ => 3,
        }
    }

    #[test]
    fn test_zone_counts_per_layout() {
        for layout in LayoutType::ALL {
            let zones = zones(layout);
            assert_eq!(
                zones.len(),
                expected_zone_count(layout),
                "zone count mismatch for {}",
                layout.as_str()
            );
        }
    }

    #[test]
    fn test_indices_are_contiguous_and_total_matches() {
        for layout in LayoutType::ALL {
            let zones = zones(layout);
            let total = zones.len();
            for (i, zone) in zones.iter().enumerate() {
                assert_eq!(zone.index, i, "{}: index gap", layout.as_str());
                assert_eq!(zone.total, total, "{}: wrong total", layout.as_str());
            }
            // contiguous 0-based range: indices sum to total*(total-1)/2
            let sum: usize = zones.iter().map(|z| z.index).sum();
            assert_eq!(sum, total * (total - 1) / 2);
        }
    }

    #[test]
    fn test_zone_ids_unique_and_ordered() {
        for layout in LayoutType::ALL {
            for (i, zone) in zones(layout).iter().enumerate() {
                assert_eq!(zone.id, format!("zone-{}", i + 1), "{}", layout.as_str());
            }
        }
    }

    #[test]
    fn test_pixels_match_percentage_derivation() {
        for layout in LayoutType::ALL {
            for zone in zones(layout) {
                assert_eq!(zone.size_pixels.width, px_width(zone.size_percent.width));
                assert_eq!(zone.size_pixels.height, px_height(zone.size_percent.height));
            }
        }
    }

    #[test]
    fn test_percent_pixel_round_trip_within_one_pixel() {
        // percent → pixel → percent recovers the original within rounding.
        for layout in LayoutType::ALL {
            for zone in zones(layout) {
                let w_back = zone.size_pixels.width as f64 / 1920.0 * 100.0;
                let h_back = zone.size_pixels.height as f64 / 1080.0 * 100.0;
                // ±1px tolerance expressed in percent of each canvas dimension
                assert!(
                    (w_back - zone.size_percent.width).abs() <= 100.0 / 1920.0,
                    "{}: width {} → {}px → {}",
                    layout.as_str(),
                    zone.size_percent.width,
                    zone.size_pixels.width,
                    w_back
                );
                assert!(
                    (h_back - zone.size_percent.height).abs() <= 100.0 / 1080.0,
                    "{}: height {} → {}px → {}",
                    layout.as_str(),
                    zone.size_percent.height,
                    zone.size_pixels.height,
                    h_back
                );
            }
        }
    }

    #[test]
    fn test_unknown_layout_falls_back_to_full_screen() {
        let fallback = zones_for_name("not-a-real-layout");
        assert_eq!(fallback, zones(LayoutType::FullScreen));
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].id, "zone-1");
        assert_eq!(fallback[0].size_pixels.width, 1920);
        assert_eq!(fallback[0].size_pixels.height, 1080);
    }

    #[test]
    fn test_known_name_resolves_without_fallback() {
        let zones = zones_for_name("grid-2x2");
        assert_eq!(zones.len(), 4);
        assert!(zones.iter().all(|z| z.position == ZonePosition::Grid));
        assert!(zones.iter().all(|z| z.size_pixels
            == SizePixels {
                width: 960,
                height: 540
            }));
    }

    #[test]
    fn test_asymmetric_primary_zone_geometry() {
        let main_left = zones(LayoutType::MainLeft);
        assert_eq!(main_left[0].size_pixels.width, 1280);
        assert_eq!(main_left[0].size_pixels.height, 1080);
        assert_eq!(main_left[1].size_pixels.width, 640);
        assert_eq!(main_left[1].size_pixels.height, 540);

        // main-right mirrors main-left: primary zone last
        let main_right = zones(LayoutType::MainRight);
        assert_eq!(main_right[2].size_percent, main_left[0].size_percent);

        let main_top = zones(LayoutType::MainTop);
        assert_eq!(main_top[0].size_pixels.height, 720);
        assert_eq!(main_top[1].size_pixels.height, 360);
    }

    #[test]
    fn test_complex_band_zone_geometry() {
        let one_top = zones(LayoutType::OneTopTwoBottom);
        assert_eq!(one_top[0].size_pixels.width, 1920);
        assert_eq!(one_top[0].size_pixels.height, 540);
        assert_eq!(one_top[1].size_pixels.width, 960);

        let two_left = zones(LayoutType::TwoLeftOneRight);
        assert_eq!(two_left[2].size_pixels.width, 960);
        assert_eq!(two_left[2].size_pixels.height, 1080);
    }

    #[test]
    fn test_position_tags_per_family() {
        assert!(zones(LayoutType::FullScreen)
            .iter()
            .all(|z| z.position == ZonePosition::Fullscreen));
        assert!(zones(LayoutType::ThreeVertical)
            .iter()
            .all(|z| z.position == ZonePosition::SplitVertical));
        assert!(zones(LayoutType::ThreeHorizontal)
            .iter()
            .all(|z| z.position == ZonePosition::SplitHorizontal));
        assert!(zones(LayoutType::MainBottom)
            .iter()
            .all(|z| z.position == ZonePosition::Asymmetric));
        assert!(zones(LayoutType::OneLeftTwoRight)
            .iter()
            .all(|z| z.position == ZonePosition::Complex));
    }
}
