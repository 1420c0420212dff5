//! Static Chart Images
//! Loads pre-rendered PNG artifacts from disk and caches them as textures.

use egui::{Color32, ColorImage, RichText, TextureHandle, TextureOptions};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Image not found: {0}")]
    Missing(PathBuf),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Decode an image file into egui's pixel format.
pub fn decode_artifact(path: &Path) -> Result<ColorImage, ArtifactError> {
    if !path.is_file() {
        return Err(ArtifactError::Missing(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|source| ArtifactError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

enum Slot {
    Loaded(TextureHandle),
    Failed(String),
}

/// Texture cache for static artifacts, keyed by path.
///
/// Each path is decoded at most once; a failed decode is remembered and
/// rendered as a placeholder.
#[derive(Default)]
pub struct ArtifactStore {
    slots: HashMap<PathBuf, Slot>,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, ctx: &egui::Context, path: &Path) -> &Slot {
        self.slots.entry(path.to_path_buf()).or_insert_with(|| {
            match decode_artifact(path) {
                Ok(image) => {
                    debug!(path = %path.display(), size = ?image.size, "artifact decoded");
                    let name = path.to_string_lossy().to_string();
                    Slot::Loaded(ctx.load_texture(name, image, TextureOptions::LINEAR))
                }
                Err(e) => {
                    warn!(error = %e, "artifact unavailable");
                    Slot::Failed(e.to_string())
                }
            }
        })
    }

    /// Draw the image scaled to the available width, with an optional caption.
    pub fn show(&mut self, ui: &mut egui::Ui, path: &Path, caption: &str) {
        let width = ui.available_width();
        let ctx = ui.ctx().clone();

        match self.slot(&ctx, path) {
            Slot::Loaded(handle) => {
                let sized = egui::load::SizedTexture::from_handle(handle);
                ui.add(egui::Image::from_texture(sized).max_width(width));
            }
            Slot::Failed(reason) => {
                egui::Frame::none()
                    .fill(ui.visuals().extreme_bg_color)
                    .stroke(egui::Stroke::new(1.0, Color32::GRAY))
                    .rounding(5.0)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_min_width(width - 32.0);
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("🖼 Image not available")
                                    .size(14.0)
                                    .color(Color32::GRAY),
                            );
                            ui.label(RichText::new(reason.as_str()).size(11.0).weak());
                        });
                    });
            }
        }

        ui.horizontal(|ui| {
            if !caption.is_empty() {
                ui.label(RichText::new(caption).italics().size(12.0));
            }
            if path.is_file() && ui.small_button("Open").clicked() {
                if let Err(e) = open::that(path) {
                    warn!(path = %path.display(), error = %e, "failed to open artifact");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn decodes_png_into_color_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.save(&path).unwrap();

        let decoded = decode_artifact(&path).unwrap();
        assert_eq!(decoded.size, [3, 2]);
        assert_eq!(decoded.pixels[0], Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_artifact(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, ArtifactError::Missing(_)));
    }

    #[test]
    fn garbage_file_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        let err = decode_artifact(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Decode { .. }));
    }
}
