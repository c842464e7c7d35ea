//! High-level runner that places points until a target count is reached.
use glam::IVec2;
use rand::Rng;
use tracing::{debug, info};

use crate::domain::Domain;
use crate::error::Result;
use crate::placer::PointPlacer;
use crate::run::events::{EventSink, PlacementEvent};
use crate::run::RunConfig;
use crate::weight::WeightField;

/// Result of a placement run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunResult {
    /// Placed points in placement order.
    pub points: Vec<IVec2>,
    /// Total candidate positions evaluated.
    pub candidates_evaluated: usize,
}

impl RunResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Runs placements with a validated [`RunConfig`].
pub struct StippleRunner {
    /// Run configuration applied to this runner.
    pub config: RunConfig,
}

impl StippleRunner {
    pub fn try_new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Places `config.target_count` points over `domain`.
    pub fn run<W, R>(&self, domain: Domain, weight: &W, rng: &mut R) -> Result<RunResult>
    where
        W: WeightField + ?Sized,
        R: Rng,
    {
        run_placement(domain, weight, &self.config, rng)
    }

    pub fn run_with_events<W, R>(
        &self,
        domain: Domain,
        weight: &W,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<RunResult>
    where
        W: WeightField + ?Sized,
        R: Rng,
    {
        run_placement_with_events(domain, weight, &self.config, rng, sink)
    }
}

pub fn run_placement<W, R>(
    domain: Domain,
    weight: &W,
    config: &RunConfig,
    rng: &mut R,
) -> Result<RunResult>
where
    W: WeightField + ?Sized,
    R: Rng,
{
    run_placement_with_events(domain, weight, config, rng, &mut ())
}

pub fn run_placement_with_events<W, R>(
    domain: Domain,
    weight: &W,
    config: &RunConfig,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> Result<RunResult>
where
    W: WeightField + ?Sized,
    R: Rng,
{
    config.validate()?;
    let mut placer =
        PointPlacer::with_padding(domain, config.padding, rng)?.with_early_exit(config.early_exit);

    info!(
        "Placing {} points in {}x{} domain (padding {}).",
        config.target_count,
        domain.width(),
        domain.height(),
        config.padding,
    );
    sink.send(PlacementEvent::RunStarted {
        config: config.clone(),
        domain,
    });

    while placer.len() < config.target_count {
        let tries = if placer.is_empty() {
            0
        } else {
            config.tries.tries_for(placer.len())
        };
        let point = placer.place_next(weight, tries)?;
        let placed = placer.len();

        sink.send(PlacementEvent::PointPlaced {
            index: placed - 1,
            point,
            tries,
        });

        if placed % config.progress_interval == 0 {
            debug!("Placed {} points.", placed);
            sink.send(PlacementEvent::Progress {
                placed,
                target: config.target_count,
            });
        }
    }

    let candidates_evaluated = placer.candidates_evaluated();
    let points = placer.into_points();
    info!(
        "Placed {} points after {} candidates.",
        points.len(),
        candidates_evaluated
    );
    sink.send(PlacementEvent::RunFinished {
        placed: points.len(),
        candidates_evaluated,
    });

    Ok(RunResult {
        points,
        candidates_evaluated,
    })
}
