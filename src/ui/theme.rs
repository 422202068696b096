use crate::catalog::ThemeColor;
use crate::types::RecommendationLevel;
use egui::Color32;

pub const LABEL_GREY: Color32 = Color32::from_rgb(0x8e, 0x8e, 0x93);
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x1c, 0x1c, 0x1e);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(0x00, 0x7a, 0xff);
pub const LIVE_GREEN: Color32 = Color32::from_rgb(0x34, 0xc7, 0x59);

/// Accent and translucent background for a gene group card
pub struct GroupPalette {
    pub accent: Color32,
    pub fill: Color32,
}

pub fn group_palette(theme: ThemeColor) -> GroupPalette {
    let (r, g, b) = match theme {
        ThemeColor::Blue => (0x3b, 0x82, 0xf6),
        ThemeColor::Indigo => (0x63, 0x66, 0xf1),
        ThemeColor::Cyan => (0x06, 0xb6, 0xd4),
        ThemeColor::Violet => (0x8b, 0x5c, 0xf6),
        ThemeColor::Pink => (0xec, 0x48, 0x99),
        ThemeColor::Rose => (0xf4, 0x3f, 0x5e),
    };
    GroupPalette {
        accent: Color32::from_rgb(r, g, b),
        fill: Color32::from_rgba_unmultiplied(r, g, b, 18),
    }
}

pub fn level_accent(level: RecommendationLevel) -> Color32 {
    match level {
        RecommendationLevel::Info => ACCENT_BLUE,
        RecommendationLevel::Warning => Color32::from_rgb(0xff, 0x95, 0x00),
        RecommendationLevel::Danger => Color32::from_rgb(0xff, 0x3b, 0x30),
    }
}

pub fn level_fill(level: RecommendationLevel) -> Color32 {
    match level {
        RecommendationLevel::Info => Color32::from_rgba_unmultiplied(0xff, 0xff, 0xff, 204),
        RecommendationLevel::Warning => Color32::from_rgba_unmultiplied(0xff, 0xf9, 0xf0, 230),
        RecommendationLevel::Danger => Color32::from_rgba_unmultiplied(0xff, 0xf2, 0xf2, 230),
    }
}
