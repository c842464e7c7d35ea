//! Rectangular integer domains and uniform point draws inside them.
//!
//! A [`Domain`] spans `[min, max)` on both axes, the same half-open convention image
//! bounds use. Placement never touches the outer band of width `padding`; see
//! [`Domain::random_point`] and [`Domain::check_padding`].
use glam::IVec2;
use mint::Vector2;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Inset from every domain edge inside which no point is placed.
pub const DEFAULT_PADDING: i32 = 5;

/// Axis-aligned integer rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Domain {
    /// Inclusive lower corner.
    pub min: IVec2,
    /// Exclusive upper corner.
    pub max: IVec2,
}

impl Domain {
    /// Creates a domain from its corners. Fails unless `max > min` on both axes and each
    /// span fits in an `i32`.
    pub fn new(min: impl Into<Vector2<i32>>, max: impl Into<Vector2<i32>>) -> Result<Self> {
        let min = IVec2::from(min.into());
        let max = IVec2::from(max.into());
        if max.x <= min.x || max.y <= min.y {
            return Err(Error::InvalidConfig(format!(
                "domain max {max} must exceed min {min} on both axes"
            )));
        }
        let span_x = i64::from(max.x) - i64::from(min.x);
        let span_y = i64::from(max.y) - i64::from(min.y);
        if span_x > i64::from(i32::MAX) || span_y > i64::from(i32::MAX) {
            return Err(Error::InvalidConfig(format!(
                "domain from {min} to {max} is wider than {} on an axis",
                i32::MAX
            )));
        }
        Ok(Self { min, max })
    }

    /// Creates a domain anchored at the origin, e.g. the bounds of a `width` x `height` image.
    pub fn from_size(width: u32, height: u32) -> Result<Self> {
        let w = i32::try_from(width)
            .map_err(|_| Error::InvalidConfig(format!("width {width} exceeds i32")))?;
        let h = i32::try_from(height)
            .map_err(|_| Error::InvalidConfig(format!("height {height} exceeds i32")))?;
        Self::new(IVec2::ZERO, IVec2::new(w, h))
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Returns `true` if `p` lies in `[min, max)` on both axes.
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x < self.max.x && p.y < self.max.y
    }

    /// Returns `true` if `p` lies in `[min + padding, max - padding]` on both axes.
    pub fn contains_padded(&self, p: IVec2, padding: i32) -> bool {
        p.x >= self.min.x + padding
            && p.y >= self.min.y + padding
            && p.x <= self.max.x - padding
            && p.y <= self.max.y - padding
    }

    /// Verifies that at least one coordinate survives the padding inset on each axis.
    pub fn check_padding(&self, padding: i32) -> Result<()> {
        if padding < 0 {
            return Err(Error::InvalidConfig(format!(
                "padding must be >= 0, got {padding}"
            )));
        }
        let w = self.width();
        let h = self.height();
        if i64::from(w) <= 2 * i64::from(padding) || i64::from(h) <= 2 * i64::from(padding) {
            return Err(Error::DomainTooSmall {
                width: w,
                height: h,
                padding,
            });
        }
        Ok(())
    }

    /// Draws a uniform point in `[min + padding, max - padding)` on both axes, x first.
    ///
    /// Callers must have validated the inset with [`Domain::check_padding`].
    pub fn random_point(&self, padding: i32, rng: &mut dyn Rng) -> IVec2 {
        debug_assert!(self.check_padding(padding).is_ok());
        let x = random_coord(self.min.x + padding, self.max.x - padding, rng);
        let y = random_coord(self.min.y + padding, self.max.y - padding, rng);
        IVec2::new(x, y)
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}

/// Uniform integer in `[lo, hi)`, computed as `lo + floor(u * (hi - lo))`.
#[inline]
fn random_coord(lo: i32, hi: i32, rng: &mut dyn Rng) -> i32 {
    let span = i64::from(hi) - i64::from(lo);
    let offset = (rand01(rng) * span as f64).floor() as i64;
    // Keep strictly below `hi` even if rounding pushes the product up.
    let offset = offset.clamp(0, (span - 1).max(0));
    (i64::from(lo) + offset) as i32
}
