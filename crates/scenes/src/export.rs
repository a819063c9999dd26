//! PNG export of rasterized scenes.
//!
//! Feature-gated behind `png` (default on) so the composition and raster
//! code can be used without pulling in the `image` crate.

use std::path::Path;

use tracing::info;

use crate::error::ExportError;
use crate::raster::{rasterize, Bitmap};
use crate::scene::Scene;

/// Writes a bitmap as an 8-bit grayscale PNG.
///
/// Returns `ExportError::Io` if the buffer does not match the dimensions or
/// the file cannot be written.
pub fn write_png(bitmap: &Bitmap, path: &Path) -> Result<(), ExportError> {
    let img = image::GrayImage::from_raw(bitmap.width(), bitmap.height(), bitmap.pixels().to_vec())
        .ok_or_else(|| ExportError::Io("grayscale buffer size mismatch".into()))?;
    img.save(path)
        .map_err(|e| ExportError::Io(format!("{}: {e}", path.display())))
}

/// Rasterizes `scene` at `dpi` and writes it to `path`.
///
/// Returns the pixel size of the written image.
pub fn render_png(scene: &Scene, dpi: u32, path: &Path) -> Result<(u32, u32), ExportError> {
    let bitmap = rasterize(scene, dpi)?;
    write_png(&bitmap, path)?;
    info!(
        scene = scene.name(),
        dpi,
        width = bitmap.width(),
        height = bitmap.height(),
        path = %path.display(),
        "wrote coloring page"
    );
    Ok((bitmap.width(), bitmap.height()))
}
