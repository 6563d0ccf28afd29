//! Startup assets: the two mark images and the result font.

use derive_more::{Display, Error};
use std::path::Path;
use tictactoe_core::Player;
use tracing::{info, instrument};

/// Image drawn for X marks.
pub const X_IMAGE: &str = "x.png";
/// Image drawn for O marks.
pub const O_IMAGE: &str = "o.png";
/// Font used for the result message.
pub const RESULT_FONT: &str = "font.TTF";

/// Decoded RGBA pixels of a mark image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkImage {
    /// Width and height in pixels.
    pub size: [usize; 2],
    /// Unmultiplied RGBA8 pixels, row-major.
    pub rgba: Vec<u8>,
}

/// Everything loaded from disk before the window opens.
#[derive(Debug, Clone)]
pub struct Assets {
    x: MarkImage,
    o: MarkImage,
    font: Vec<u8>,
}

impl Assets {
    /// Loads `x.png`, `o.png` and `font.TTF` from `dir`.
    ///
    /// Any missing or unreadable file is an error; the game does not start
    /// with partial assets.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        let assets = Self {
            x: load_image(&dir.join(X_IMAGE))?,
            o: load_image(&dir.join(O_IMAGE))?,
            font: load_font(&dir.join(RESULT_FONT))?,
        };
        info!(
            x_size = ?assets.x.size,
            o_size = ?assets.o.size,
            font_bytes = assets.font.len(),
            "Assets loaded"
        );
        Ok(assets)
    }

    /// Image for `player`'s mark.
    pub fn mark(&self, player: Player) -> &MarkImage {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Raw font file bytes.
    pub fn font(&self) -> &[u8] {
        &self.font
    }
}

#[instrument(skip(path), fields(path = %path.display()))]
fn load_image(path: &Path) -> Result<MarkImage, AssetError> {
    let image = image::open(path)
        .map_err(|e| AssetError::new(format!("Failed to load image {}: {}", path.display(), e)))?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(MarkImage {
        size,
        rgba: image.into_raw(),
    })
}

#[instrument(skip(path), fields(path = %path.display()))]
fn load_font(path: &Path) -> Result<Vec<u8>, AssetError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AssetError::new(format!("Failed to load font {}: {}", path.display(), e)))?;
    // egui parses the font with ab_glyph on the first frame and panics on failure.
    ab_glyph::FontRef::try_from_slice(&bytes)
        .map_err(|e| AssetError::new(format!("Failed to load font {}: {}", path.display(), e)))?;
    Ok(bytes)
}

/// Asset loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Asset error: {} at {}:{}", message, file, line)]
pub struct AssetError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AssetError {
    /// Creates a new asset error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: &[u8] = epaint_default_fonts::HACK_REGULAR;

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbaImage::from_pixel(width, height, image::Rgba([176, 0, 81, 255]))
            .save(path)
            .unwrap();
    }

    fn complete_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join(X_IMAGE), 2, 3);
        write_png(&dir.path().join(O_IMAGE), 4, 4);
        std::fs::write(dir.path().join(RESULT_FONT), FONT).unwrap();
        dir
    }

    #[test]
    fn test_load_complete_dir() {
        let dir = complete_dir();
        let assets = Assets::load(dir.path()).unwrap();

        assert_eq!(assets.mark(Player::X).size, [2, 3]);
        assert_eq!(assets.mark(Player::X).rgba.len(), 2 * 3 * 4);
        assert_eq!(assets.mark(Player::O).size, [4, 4]);
        assert_eq!(&assets.mark(Player::O).rgba[..4], &[176, 0, 81, 255]);
        assert_eq!(assets.font(), FONT);
    }

    #[test]
    fn test_missing_image_names_file() {
        let dir = complete_dir();
        std::fs::remove_file(dir.path().join(O_IMAGE)).unwrap();

        let err = Assets::load(dir.path()).unwrap_err();
        assert!(err.message.contains(O_IMAGE), "{}", err);
    }

    #[test]
    fn test_corrupt_image_is_an_error() {
        let dir = complete_dir();
        std::fs::write(dir.path().join(X_IMAGE), b"not a png").unwrap();

        let err = Assets::load(dir.path()).unwrap_err();
        assert!(err.message.contains(X_IMAGE), "{}", err);
    }

    #[test]
    fn test_missing_font_names_file() {
        let dir = complete_dir();
        std::fs::remove_file(dir.path().join(RESULT_FONT)).unwrap();

        let err = Assets::load(dir.path()).unwrap_err();
        assert!(err.message.contains(RESULT_FONT), "{}", err);
    }

    #[test]
    fn test_truncated_font_is_an_error() {
        let dir = complete_dir();
        // Valid TrueType tag, no tables.
        std::fs::write(dir.path().join(RESULT_FONT), [0x00, 0x01, 0x00, 0x00, 0x00, 0x0a]).unwrap();

        let err = Assets::load(dir.path()).unwrap_err();
        assert!(err.message.contains(RESULT_FONT), "{}", err);
    }

    #[test]
    fn test_non_font_is_an_error() {
        let dir = complete_dir();
        std::fs::write(dir.path().join(RESULT_FONT), b"<html></html>").unwrap();

        assert!(Assets::load(dir.path()).is_err());
    }
}
