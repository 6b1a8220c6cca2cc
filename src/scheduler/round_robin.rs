//! Round Robin scheduler (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! All jobs start in a FIFO ready queue in input order. The head job runs
//! for at most one quantum; if work remains it goes to the tail, otherwise
//! it completes and its waiting time is `completion - burst`.
//!
//! # Termination
//! Every dispatch either completes a job or removes a full quantum of
//! remaining work, so a run makes at most `ceil(total_burst / quantum) + n`
//! dispatches. A quantum of zero or less is rejected up front.

use std::collections::VecDeque;

use log::{debug, trace};

use super::timeline::Timeline;
use super::{check_jobs, check_quantum, Scheduler};
use crate::error::ScheduleError;
use crate::models::{Job, Schedule, ScheduledJob, Ticks};

/// Time-sliced scheduler.
///
/// Reports jobs in input order, not completion order.
///
/// # Example
///
/// ```
/// use u_cpusched::scheduler::{RoundRobinScheduler, Scheduler};
/// use u_cpusched::models::Job;
///
/// let rr = RoundRobinScheduler::new(4);
/// let schedule = rr.schedule(&[Job::new("P1", 10)]).unwrap();
/// assert_eq!(schedule.waiting_times(), vec![0]);
/// assert_eq!(schedule.turnaround_times(), vec![10]);
/// assert_eq!(schedule.dispatch_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// The quantum is checked when scheduling, so an invalid value surfaces
    /// as [`ScheduleError::InvalidParameter`] rather than a panic.
    pub fn new(quantum: Ticks) -> Self {
        Self { quantum }
    }

    /// Time slice granted per dispatch.
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Scheduler for RoundRobinScheduler {
    fn schedule(&self, jobs: &[Job]) -> Result<Schedule, ScheduleError> {
        check_quantum(self.quantum)?;
        check_jobs(jobs)?;

        let quantum = self.quantum;
        let n = jobs.len();
        debug!("round robin run: {n} jobs, quantum {quantum}");

        let mut remaining: Vec<Ticks> = jobs.iter().map(|j| j.burst_time).collect();
        let mut ready: VecDeque<usize> = (0..n).collect();
        let mut waiting: Vec<Ticks> = vec![0; n];
        let mut completion: Vec<Ticks> = vec![0; n];
        let mut first_run: Vec<Option<Ticks>> = vec![None; n];
        let mut timeline = Timeline::new();

        while let Some(i) = ready.pop_front() {
            if first_run[i].is_none() {
                first_run[i] = Some(timeline.now());
            }

            if remaining[i] > quantum {
                let now = timeline.run(i, &jobs[i], quantum);
                remaining[i] -= quantum;
                ready.push_back(i);
                trace!("t={now} {} preempted, {} left", jobs[i].name, remaining[i]);
            } else {
                let now = timeline.run(i, &jobs[i], remaining[i]);
                waiting[i] = now - jobs[i].burst_time;
                completion[i] = now;
                remaining[i] = 0;
                trace!("t={now} {} completed", jobs[i].name);
            }
        }

        let entries = jobs
            .iter()
            .enumerate()
            .map(|(i, job)| {
                ScheduledJob::new(
                    i,
                    job.clone(),
                    waiting[i],
                    completion[i],
                    first_run[i].unwrap_or_default(),
                )
            })
            .collect();

        Ok(Schedule::new(entries, timeline.into_slices()))
    }
}
