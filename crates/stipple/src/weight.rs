//! Weight fields that bias point density.
//!
//! This module defines how external scalar data drives the placer:
//! - Define custom sources by implementing [`WeightField`] (any `Fn(IVec2) -> f32` already does).
//! - Use [`ConstantWeight`] for flat fields and [`InvertedWeight`] to favor dark regions.
//! - Precompute image brightness once with [`BrightnessRaster`].
use glam::IVec2;

use crate::domain::Domain;
use crate::error::{Error, Result};

/// Scale applied to squared distances where the weight is zero.
pub const WEIGHT_SCALE_FLOOR: f64 = 0.1;
/// Additional scale gained per unit of weight.
pub const WEIGHT_SCALE_GAIN: f64 = 1.8;

/// Scalar field over domain coordinates, expected in `[0, 1]`.
///
/// Implementations must be deterministic for a fixed point and free of side effects.
pub trait WeightField {
    fn weight(&self, p: IVec2) -> f32;
}

impl<F> WeightField for F
where
    F: Fn(IVec2) -> f32,
{
    #[inline]
    fn weight(&self, p: IVec2) -> f32 {
        self(p)
    }
}

/// Maps a weight to the factor applied to squared distances: `0.1 + 1.8 * w`.
///
/// NaN counts as zero and everything else is clamped to `[0, 1]` first.
#[inline]
pub fn scale_for_weight(w: f32) -> f64 {
    let w = if w.is_nan() { 0.0 } else { w.clamp(0.0, 1.0) };
    WEIGHT_SCALE_FLOOR + WEIGHT_SCALE_GAIN * f64::from(w)
}

/// The same weight everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantWeight(pub f32);

impl WeightField for ConstantWeight {
    #[inline]
    fn weight(&self, _p: IVec2) -> f32 {
        self.0
    }
}

/// Flips a field so that low weights become high ones (`1 - w`).
#[derive(Clone, Debug)]
pub struct InvertedWeight<W>(pub W);

impl<W: WeightField> WeightField for InvertedWeight<W> {
    #[inline]
    fn weight(&self, p: IVec2) -> f32 {
        1.0 - self.0.weight(p)
    }
}

/// Row-major grid of precomputed weights aligned to a domain origin.
#[derive(Clone, Debug)]
pub struct BrightnessRaster {
    origin: IVec2,
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl BrightnessRaster {
    /// Builds a raster from straight-alpha RGBA8 pixels, anchored at the origin.
    ///
    /// Each pixel weighs the mean of its alpha-normalized R, G and B channels.
    /// Fully transparent pixels weigh zero.
    pub fn from_rgba8(width: u32, height: u32, pixels: &[u8]) -> Result<Self> {
        let (w, h) = (width as usize, height as usize);
        let expected = w * h * 4;
        if pixels.len() != expected {
            return Err(Error::InvalidConfig(format!(
                "expected {expected} RGBA bytes for {width}x{height}, got {}",
                pixels.len()
            )));
        }

        let data = pixels.chunks_exact(4).map(rgba8_brightness).collect();
        Ok(Self {
            origin: IVec2::ZERO,
            width: w,
            height: h,
            data,
        })
    }

    /// Bakes an arbitrary field over every cell of `domain`.
    pub fn from_fn(domain: &Domain, f: impl Fn(IVec2) -> f32) -> Self {
        let width = domain.width() as usize;
        let height = domain.height() as usize;
        let mut data = Vec::with_capacity(width * height);
        for y in domain.min.y..domain.max.y {
            for x in domain.min.x..domain.max.x {
                data.push(f(IVec2::new(x, y)));
            }
        }
        Self {
            origin: domain.min,
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The domain covered by this raster.
    pub fn domain(&self) -> Result<Domain> {
        let size = IVec2::new(self.width as i32, self.height as i32);
        Domain::new(self.origin, self.origin + size)
    }

    /// Get the weight at `p`, returning `0.0` outside the raster.
    pub fn get(&self, p: IVec2) -> f32 {
        let rel = p - self.origin;
        if rel.x < 0 || rel.y < 0 || rel.x as usize >= self.width || rel.y as usize >= self.height
        {
            return 0.0;
        }
        self.data[rel.y as usize * self.width + rel.x as usize]
    }
}

impl WeightField for BrightnessRaster {
    #[inline]
    fn weight(&self, p: IVec2) -> f32 {
        self.get(p)
    }
}

/// Channels carry straight alpha, so normalizing by alpha leaves each at `c / 255`.
fn rgba8_brightness(px: &[u8]) -> f32 {
    if px[3] == 0 {
        return 0.0;
    }
    (f32::from(px[0]) + f32::from(px[1]) + f32::from(px[2])) / (3.0 * 255.0)
}
