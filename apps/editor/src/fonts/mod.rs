// Font Catalog & CSS Resolver. Pure lookup tables plus deterministic
// fallback-chain formatting; no font loading happens here (the rendering
// layer owns that).

pub mod catalog;
pub mod fallback;

pub use catalog::{
    all_fonts, find_by_value, fonts_by_category, fonts_by_category_name, grouped_fonts,
    recommended_fonts, FontCategory, FontEntry, FontGroup,
};
pub use fallback::{is_android_compatible, resolve_css_family};
