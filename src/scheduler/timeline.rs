//! Logical clock and slice log for a single run.

use crate::models::{Job, Slice, Ticks};

/// Per-run simulation clock.
///
/// Created fresh for every run and consumed into the run's slices. The
/// clock starts at 0 and only moves forward.
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    current_time: Ticks,
    slices: Vec<Slice>,
}

impl Timeline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(slices: usize) -> Self {
        Self {
            current_time: 0,
            slices: Vec::with_capacity(slices),
        }
    }

    /// Current clock value.
    #[inline]
    pub(crate) fn now(&self) -> Ticks {
        self.current_time
    }

    /// Gives the CPU to `job` for `duration` ticks. Returns the new clock.
    pub(crate) fn run(&mut self, job_index: usize, job: &Job, duration: Ticks) -> Ticks {
        debug_assert!(duration > 0, "slice for job {job_index} must be positive");
        let start = self.current_time;
        self.current_time += duration;
        self.slices.push(Slice {
            job_index,
            name: job.name.clone(),
            start,
            end: self.current_time,
        });
        self.current_time
    }

    pub(crate) fn into_slices(self) -> Vec<Slice> {
        self.slices
    }
}
