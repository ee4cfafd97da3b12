// src/analysis/palette.rs

pub type Rgb = [u8; 3];

/// Color for any category not in the table.
pub const FALLBACK_COLOR: Rgb = [0x95, 0xa5, 0xa6];

const CATEGORY_COLORS: &[(&str, Rgb)] = &[
    ("Feature Requests", [0xff, 0x6b, 0x6b]),
    ("Bugs", [0x4e, 0xcd, 0xc4]),
    ("UX/UI", [0xf7, 0xdc, 0x6f]),
    ("Performance", [0x9b, 0x59, 0xb6]),
    ("Others", [0xe7, 0x4c, 0x3c]),
    ("Navigation Issues", [0x34, 0x98, 0xdb]),
];

/// Total category -> color lookup. Matching ignores surrounding whitespace
/// and ASCII case, so "bugs " and "Bugs" share a color.
pub fn category_color(category: &str) -> Rgb {
    let category = category.trim();
    CATEGORY_COLORS.iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category))
        .map(|(_, rgb)| *rgb)
        .unwrap_or(FALLBACK_COLOR)
}

pub fn known_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_COLORS.iter().map(|(name, _)| *name)
}
