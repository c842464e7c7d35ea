#![forbid(unsafe_code)]
//! stipple: weighted best-candidate point placement for stippled image renderings.
//!
//! Modules:
//! - domain: integer rectangles, padding checks and uniform point draws
//! - weight: scalar weight fields (closures, constants, image brightness)
//! - placer: the incremental weighted best-candidate sampler
//! - run: target-count runs with tries schedules and progress events
//! - bitmap: rasterizing point sets and the `P2 <w> <h> 1` text format
pub mod bitmap;
pub mod domain;
pub mod error;
pub mod placer;
pub mod run;
pub mod weight;

/// Convenient re-exports for common types. Import with `use stipple::prelude::*;`.
pub mod prelude {
    pub use crate::bitmap::Bitmap;
    pub use crate::domain::{Domain, DEFAULT_PADDING};
    pub use crate::error::{Error, Result};
    pub use crate::placer::{isolation_score, PointPlacer};
    pub use crate::run::events::{EventSink, FnSink, PlacementEvent, VecSink};
    pub use crate::run::runner::{
        run_placement, run_placement_with_events, RunResult, StippleRunner,
    };
    pub use crate::run::{RunConfig, TriesPolicy};
    pub use crate::weight::{
        scale_for_weight, BrightnessRaster, ConstantWeight, InvertedWeight, WeightField,
    };
}
