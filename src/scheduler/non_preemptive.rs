//! Non-preemptive ordering scheduler (FCFS, SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Stable-sort the jobs with a [`RuleEngine`].
//! 2. Run them back to back on one CPU from t=0, no idle gaps.
//! 3. A job's waiting time is its start time, i.e. the summed burst of
//!    every job ordered before it.
//!
//! Arrival time never gates a job; it is only the FCFS sort key.
//!
//! # Complexity
//! O(n log n), dominated by the sort.

use log::debug;

use super::timeline::Timeline;
use super::{check_jobs, Scheduler};
use crate::dispatching::{rules, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{Job, Schedule, ScheduledJob};

/// Runs jobs to completion in rule order.
///
/// # Example
///
/// ```
/// use u_cpusched::scheduler::{NonPreemptiveScheduler, Scheduler};
/// use u_cpusched::models::Job;
///
/// let jobs = vec![Job::new("P1", 5), Job::new("P2", 3), Job::new("P3", 8)];
/// let schedule = NonPreemptiveScheduler::sjf().schedule(&jobs).unwrap();
/// assert_eq!(schedule.names(), vec!["P2", "P1", "P3"]);
/// assert_eq!(schedule.waiting_times(), vec![0, 3, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    rule_engine: RuleEngine,
}

impl NonPreemptiveScheduler {
    /// Creates a scheduler ordering jobs with `rule_engine`.
    pub fn new(rule_engine: RuleEngine) -> Self {
        Self { rule_engine }
    }

    /// First-Come-First-Served: order by arrival time.
    pub fn fcfs() -> Self {
        Self::new(RuleEngine::new().with_rule(rules::Fcfs))
    }

    /// Shortest-Job-First: order by burst time.
    pub fn sjf() -> Self {
        Self::new(RuleEngine::new().with_rule(rules::Sjf))
    }

    /// Priority Scheduling: order by priority value, lowest first.
    pub fn priority() -> Self {
        Self::new(RuleEngine::new().with_rule(rules::Priority))
    }

    /// The engine used for ordering.
    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }
}

impl Scheduler for NonPreemptiveScheduler {
    fn schedule(&self, jobs: &[Job]) -> Result<Schedule, ScheduleError> {
        check_jobs(jobs)?;

        let order = self.rule_engine.sort_indices(jobs);
        debug!(
            "non-preemptive run: {} jobs, rules {:?}",
            jobs.len(),
            self.rule_engine.rule_names()
        );

        let mut timeline = Timeline::with_capacity(jobs.len());
        let mut entries = Vec::with_capacity(jobs.len());

        for idx in order {
            let job = &jobs[idx];
            let start = timeline.now();
            let end = timeline.run(idx, job, job.burst_time);
            entries.push(ScheduledJob::new(idx, job.clone(), start, end, start));
        }

        Ok(Schedule::new(entries, timeline.into_slices()))
    }
}
