// Bundled chart font: CSS registration and text measurement from the same face
use ab_glyph::{Font, FontArc, GlyphId};
use anyhow::{anyhow, Context};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use engine::chart::TextMeasurer;

use super::FontSettings;

/// Relative to the gui crate's `assets/` directory.
pub const BUNDLED_FONT_FILE: &str = "fonts/DejaVuSans.ttf";

const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// A parsed font face plus the `@font-face` rule that registers it in the webview.
#[derive(Clone)]
pub struct LoadedFont {
    pub family: String,
    face: FontArc,
    css: String,
}

impl LoadedFont {
    pub fn bundled(family: &str) -> anyhow::Result<Self> {
        Self::from_bytes(family, BUNDLED_FONT.to_vec()).context("bundled font is invalid")
    }

    pub fn from_bytes(family: &str, bytes: Vec<u8>) -> anyhow::Result<Self> {
        let css = format!(
            "@font-face {{ font-family: '{}'; src: url(data:font/ttf;base64,{}) format('truetype'); }}",
            family,
            STANDARD.encode(&bytes)
        );
        let face = FontArc::try_from_vec(bytes).map_err(|e| anyhow!("cannot parse font: {}", e))?;
        Ok(Self {
            family: family.to_string(),
            face,
            css,
        })
    }

    /// The configured file if it loads, the bundled face otherwise.
    pub fn load(settings: &FontSettings) -> anyhow::Result<Self> {
        if let Some(path) = &settings.file {
            let loaded = std::fs::read(path)
                .with_context(|| format!("reading font file {}", path.display()))
                .and_then(|bytes| Self::from_bytes(&settings.family, bytes));
            match loaded {
                Ok(font) => {
                    tracing::info!("Loaded font '{}' from {}", settings.family, path.display());
                    return Ok(font);
                }
                Err(e) => tracing::warn!("Ignoring font file: {:#}. Using the bundled face.", e),
            }
        }
        Self::bundled(&settings.family)
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    /// CSS `font-family` value with a generic fallback.
    pub fn css_family(&self) -> String {
        format!("'{}', sans-serif", self.family)
    }

    pub fn metrics(&self, size: f64) -> FaceMetrics<'_> {
        FaceMetrics { font: self, size }
    }
}

impl PartialEq for LoadedFont {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.css == other.css
    }
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont").field("family", &self.family).finish()
    }
}

/// Advance widths of a `LoadedFont` at one CSS pixel size, kerning included.
pub struct FaceMetrics<'a> {
    font: &'a LoadedFont,
    size: f64,
}

impl TextMeasurer for FaceMetrics<'_> {
    fn measure_width(&self, text: &str) -> f64 {
        let face = &self.font.face;
        let units_per_em = face.units_per_em().unwrap_or(1000.0) as f64;
        let mut previous: Option<GlyphId> = None;
        let mut units = 0.0;
        for c in text.chars() {
            let id = face.glyph_id(c);
            if let Some(prev) = previous {
                units += face.kern_unscaled(prev, id) as f64;
            }
            units += face.h_advance_unscaled(id) as f64;
            previous = Some(id);
        }
        units / units_per_em * self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    fn settings(file: Option<PathBuf>) -> FontSettings {
        FontSettings {
            family: "DejaVu Sans".to_string(),
            file,
        }
    }

    #[test]
    fn bundled_font_file_is_in_the_assets_directory() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(BUNDLED_FONT_FILE);
        assert!(path.is_file(), "{} is missing", path.display());
    }

    #[test]
    fn bundled_face_measures_text() {
        let font = LoadedFont::bundled("DejaVu Sans").unwrap();
        let small = font.metrics(12.0).measure_width("120 hrs");
        let large = font.metrics(24.0).measure_width("120 hrs");
        assert!(small > 0.0);
        assert!((large - 2.0 * small).abs() < 1e-6);
        assert!(font.metrics(24.0).measure_width("8 hrs") < large);
        assert_eq!(font.metrics(24.0).measure_width(""), 0.0);
    }

    #[test]
    fn digits_share_one_advance() {
        let font = LoadedFont::bundled("DejaVu Sans").unwrap();
        let metrics = font.metrics(24.0);
        assert_eq!(metrics.measure_width("1"), metrics.measure_width("8"));
    }

    #[test]
    fn css_registers_the_family() {
        let font = LoadedFont::bundled("DejaVu Sans").unwrap();
        assert!(font.css().starts_with("@font-face { font-family: 'DejaVu Sans';"));
        assert!(font.css().contains("data:font/ttf;base64,"));
        assert_eq!(font.css_family(), "'DejaVu Sans', sans-serif");
    }

    #[test]
    fn configured_file_replaces_the_bundle() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUNDLED_FONT).unwrap();
        let font = LoadedFont::load(&settings(Some(file.path().to_path_buf()))).unwrap();
        assert_eq!(font, LoadedFont::bundled("DejaVu Sans").unwrap());
    }

    #[test]
    fn unreadable_font_file_falls_back_to_the_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let font = LoadedFont::load(&settings(Some(dir.path().join("absent.ttf")))).unwrap();
        assert_eq!(font, LoadedFont::bundled("DejaVu Sans").unwrap());

        let mut garbage = tempfile::NamedTempFile::new().unwrap();
        garbage.write_all(b"not a font").unwrap();
        assert!(LoadedFont::from_bytes("DejaVu Sans", b"not a font".to_vec()).is_err());
        let font = LoadedFont::load(&settings(Some(garbage.path().to_path_buf()))).unwrap();
        assert_eq!(font, LoadedFont::bundled("DejaVu Sans").unwrap());
    }
}
