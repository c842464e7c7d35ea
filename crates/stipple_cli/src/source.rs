//! Decoding input images into brightness weights.
use std::path::Path;

use anyhow::Context;
use image::RgbaImage;
use stipple::prelude::BrightnessRaster;

/// Decode `path` and bake its per-pixel brightness.
pub fn load_brightness(path: &Path) -> anyhow::Result<BrightnessRaster> {
    let img = image::open(path).with_context(|| format!("failed to decode {}", path.display()))?;
    let raster = brightness_from_image(&img.to_rgba8())?;
    Ok(raster)
}

pub fn brightness_from_image(img: &RgbaImage) -> stipple::error::Result<BrightnessRaster> {
    BrightnessRaster::from_rgba8(img.width(), img.height(), img.as_raw())
}
