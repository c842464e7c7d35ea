//! Event types and sinks for observing placement runs.
//!
//! This module defines [`PlacementEvent`] and a set of sinks to emit, collect, or
//! forward events while executing a run via [`crate::run::runner::StippleRunner`] or
//! [`crate::run::runner::run_placement_with_events`].
use glam::IVec2;

use crate::domain::Domain;
use crate::run::RunConfig;

/// Describes events emitted during a placement run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PlacementEvent {
    /// Emitted before the first point is placed.
    RunStarted {
        /// The run configuration used.
        config: RunConfig,
        /// The domain points are placed in.
        domain: Domain,
    },

    /// Emitted after every placement.
    PointPlaced {
        /// Zero-based placement index.
        index: usize,
        /// The placed point.
        point: IVec2,
        /// Candidates evaluated for this placement (0 for the first point).
        tries: usize,
    },

    /// Emitted every `progress_interval` placed points.
    Progress {
        /// Points placed so far.
        placed: usize,
        /// Points the run aims for.
        target: usize,
    },

    /// Emitted when the target count is reached.
    RunFinished {
        /// Points placed in total.
        placed: usize,
        /// Candidates evaluated in total.
        candidates_evaluated: usize,
    },
}

/// A generic event sink that accepts [`PlacementEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PlacementEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PlacementEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PlacementEvent),
{
    #[inline]
    fn send(&mut self, event: PlacementEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PlacementEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<PlacementEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PlacementEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PlacementEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(PlacementEvent::Progress {
            placed: 100,
            target: 200,
        });
        sink.send(PlacementEvent::RunFinished {
            placed: 200,
            candidates_evaluated: 9,
        });
        assert_eq!(sink.len(), 2);
        assert!(matches!(
            sink.as_slice()[0],
            PlacementEvent::Progress { placed: 100, .. }
        ));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(PlacementEvent::Progress {
            placed: 1,
            target: 1,
        });
        assert_eq!(count, 1);
    }
}
