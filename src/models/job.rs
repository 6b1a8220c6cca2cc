//! Job model.
//!
//! A job is one unit of CPU work submitted to the simulator. Jobs are
//! immutable inputs: the engines borrow them and never write back.
//!
//! # Time Representation
//! All times are integer ticks of a logical clock that starts at t=0 for
//! every scheduling run.

use serde::{Deserialize, Serialize};

/// Logical clock unit used throughout the simulator.
pub type Ticks = i64;

/// A job (process) to be scheduled on the single simulated CPU.
///
/// Jobs carry no identity beyond their name and position in the input;
/// two jobs with the same name are scheduled independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Display name (reporting only).
    pub name: String,
    /// Total CPU time needed to run to completion. Must be positive.
    pub burst_time: Ticks,
    /// Time the job becomes known. Only FCFS consults it, as a sort key.
    pub arrival_time: Ticks,
    /// Scheduling priority (lower value = scheduled earlier).
    pub priority: i32,
}

impl Job {
    /// Creates a job arriving at t=0 with priority 0.
    pub fn new(name: impl Into<String>, burst_time: Ticks) -> Self {
        Self {
            name: name.into(),
            burst_time,
            arrival_time: 0,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: Ticks) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Sum of burst times, or `None` if it does not fit the clock.
pub fn total_burst(jobs: &[Job]) -> Option<Ticks> {
    jobs.iter()
        .try_fold(0 as Ticks, |acc, job| acc.checked_add(job.burst_time))
}
