use super::traits::ConfigSection;
use crate::error::PgxError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Common system fonts with CJK coverage, tried when `font_path` is unset
pub const SYSTEM_CJK_FONTS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub dark_mode: bool,
    /// TTF/OTF with CJK glyphs, appended to the default font families
    pub font_path: Option<PathBuf>,
    pub show_disclaimer: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "ALL 药物基因组学 - PGx Clinical Support".to_string(),
            window_width: 820.0,
            window_height: 900.0,
            min_width: 560.0,
            min_height: 480.0,
            dark_mode: false,
            font_path: None,
            show_disclaimer: true,
        }
    }
}

impl DisplayConfig {
    /// Configured font, else the first system CJK font present on disk.
    pub fn resolve_font_path(&self) -> Option<PathBuf> {
        self.font_path
            .clone()
            .or_else(|| first_existing(SYSTEM_CJK_FONTS))
    }
}

fn first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|p| AsRef::<Path>::as_ref(p))
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), PgxError> {
        if self.min_width <= 0.0 || self.min_height <= 0.0 {
            return Err(PgxError::Configuration(
                "Minimum window size must be positive".to_string()
            ));
        }
        if self.window_width < self.min_width || self.window_height < self.min_height {
            return Err(PgxError::Configuration(
                "Window size must not be smaller than the minimum size".to_string()
            ));
        }
        Ok(())
    }
}
