//! Weighted best-candidate (Mitchell's) point placement.
//!
//! [`PointPlacer`] grows a point set one point at a time. Each call draws `tries`
//! uniform candidates inside the padded domain and keeps the one whose weighted
//! distance to the nearest existing point is largest. Scaling squared distances by
//! `0.1 + 1.8 * weight` makes bright regions look emptier than they are, so they
//! receive more points while spacing stays blue-noise-like.
use glam::IVec2;
use rand::Rng;
use tracing::trace;

use crate::domain::{Domain, DEFAULT_PADDING};
use crate::error::{Error, Result};
use crate::weight::{scale_for_weight, WeightField};

/// Incremental weighted best-candidate sampler over a rectangular domain.
pub struct PointPlacer<R> {
    domain: Domain,
    padding: i32,
    points: Vec<IVec2>,
    rng: R,
    early_exit: bool,
    candidates_evaluated: usize,
}

impl<R: Rng> PointPlacer<R> {
    /// Creates an empty placer with the default padding margin.
    pub fn new(domain: Domain, rng: R) -> Result<Self> {
        Self::with_padding(domain, DEFAULT_PADDING, rng)
    }

    /// Creates an empty placer, failing with [`Error::DomainTooSmall`] if nothing survives `padding`.
    pub fn with_padding(domain: Domain, padding: i32, rng: R) -> Result<Self> {
        domain.check_padding(padding)?;
        Ok(Self {
            domain,
            padding,
            points: Vec::new(),
            rng,
            early_exit: true,
            candidates_evaluated: 0,
        })
    }

    /// Enables or disables the early exit while scanning existing points.
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    pub fn set_early_exit(&mut self, enabled: bool) {
        self.early_exit = enabled;
    }

    pub fn early_exit(&self) -> bool {
        self.early_exit
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn padding(&self) -> i32 {
        self.padding
    }

    /// Placed points in placement order.
    pub fn points(&self) -> &[IVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total candidates drawn by weighted placements so far.
    pub fn candidates_evaluated(&self) -> usize {
        self.candidates_evaluated
    }

    pub fn into_points(self) -> Vec<IVec2> {
        self.points
    }

    /// Places one point and returns it.
    ///
    /// The first point is drawn uniformly and appended regardless of `tries`. Afterwards
    /// `tries` must be at least 1, otherwise [`Error::NoCandidates`] is returned and the
    /// set is left untouched.
    pub fn place_next<W>(&mut self, weight: &W, tries: usize) -> Result<IVec2>
    where
        W: WeightField + ?Sized,
    {
        if self.points.is_empty() {
            let p = self.domain.random_point(self.padding, &mut self.rng);
            self.points.push(p);
            return Ok(p);
        }

        if tries == 0 {
            return Err(Error::NoCandidates);
        }

        let mut best: Option<(IVec2, f64)> = None;
        for _ in 0..tries {
            let candidate = self.domain.random_point(self.padding, &mut self.rng);
            let scale = scale_for_weight(weight.weight(candidate));
            let cutoff = match best {
                Some((_, score)) if self.early_exit => score,
                _ => f64::NEG_INFINITY,
            };

            let score = isolation_score(&self.points, candidate, scale, cutoff);
            // Strictly greater: ties keep the earlier candidate.
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((candidate, score));
            }
        }
        self.candidates_evaluated += tries;

        let (p, score) = best.ok_or(Error::NoCandidates)?;
        trace!("Placed point {} with isolation score {:.3}.", p, score);
        self.points.push(p);
        Ok(p)
    }
}

/// Minimum of `|q - candidate|^2 * scale` over `points`.
///
/// Scanning stops as soon as the running minimum drops below `cutoff`; the returned value
/// is then only an upper bound, but already known to lose against `cutoff`. Pass
/// `f64::NEG_INFINITY` for the exact score. An empty slice scores infinity.
pub fn isolation_score(points: &[IVec2], candidate: IVec2, scale: f64, cutoff: f64) -> f64 {
    let mut min = f64::INFINITY;
    for &q in points {
        let d2 = squared_distance(q, candidate) as f64 * scale;
        if d2 < min {
            min = d2;
        }
        if min < cutoff {
            break;
        }
    }
    min
}

#[inline]
fn squared_distance(a: IVec2, b: IVec2) -> i64 {
    let dx = i64::from(a.x) - i64::from(b.x);
    let dy = i64::from(a.y) - i64::from(b.y);
    dx * dx + dy * dy
}
