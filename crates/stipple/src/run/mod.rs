//! Placement runs: drive a [`crate::placer::PointPlacer`] to a target count.
//!
//! [`RunConfig`] carries the caller-side tuning knobs (target count, tries schedule,
//! padding, progress cadence). [`runner`] executes it and [`events`] lets callers
//! observe progress.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_PADDING;
use crate::error::{Error, Result};

pub mod events;
pub mod runner;

/// Number of points a default run places.
pub const DEFAULT_TARGET_COUNT: usize = 10_000;
/// Placed-point interval between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// How many candidates each placement evaluates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriesPolicy {
    /// The same number of tries for every placement.
    Fixed(usize),
    /// `max(min, placed / divisor)`, so later placements look harder.
    Proportional { divisor: usize, min: usize },
}

impl Default for TriesPolicy {
    fn default() -> Self {
        TriesPolicy::Proportional { divisor: 3, min: 1 }
    }
}

impl TriesPolicy {
    /// Tries for the placement that follows `placed` existing points.
    pub fn tries_for(&self, placed: usize) -> usize {
        match *self {
            TriesPolicy::Fixed(n) => n,
            TriesPolicy::Proportional { divisor, min } => (placed / divisor.max(1)).max(min),
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            TriesPolicy::Fixed(0) => Err(Error::InvalidConfig("fixed tries must be > 0".into())),
            TriesPolicy::Proportional { divisor: 0, .. } => Err(Error::InvalidConfig(
                "proportional tries divisor must be > 0".into(),
            )),
            TriesPolicy::Proportional { min: 0, .. } => Err(Error::InvalidConfig(
                "proportional tries minimum must be > 0".into(),
            )),
            _ => Ok(()),
        }
    }
}

/// Configuration for a placement run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunConfig {
    /// Stop once this many points are placed.
    pub target_count: usize,
    /// Candidate budget per placement.
    pub tries: TriesPolicy,
    /// Inset from every domain edge.
    pub padding: i32,
    /// Emit a progress event every this many placed points.
    pub progress_interval: usize,
    /// Abandon candidates early once they cannot win.
    pub early_exit: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            tries: TriesPolicy::default(),
            padding: DEFAULT_PADDING,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            early_exit: true,
        }
    }
}

impl RunConfig {
    /// Creates a new [`RunConfig`] with the specified target count.
    pub fn new(target_count: usize) -> Self {
        Self {
            target_count,
            ..Default::default()
        }
    }

    /// Sets the tries policy.
    pub fn with_tries(mut self, tries: TriesPolicy) -> Self {
        self.tries = tries;
        self
    }

    /// Sets the padding margin.
    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the progress interval.
    pub fn with_progress_interval(mut self, progress_interval: usize) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Enables or disables the early-exit scan.
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.padding < 0 {
            return Err(Error::InvalidConfig("padding must be >= 0".into()));
        }
        if self.progress_interval == 0 {
            return Err(Error::InvalidConfig("progress_interval must be > 0".into()));
        }
        self.tries.validate()
    }
}
