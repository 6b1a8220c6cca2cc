//! Scheduling engines and KPI evaluation.
//!
//! # Algorithms
//!
//! - [`NonPreemptiveScheduler`]: FCFS, SJF and Priority Scheduling. One
//!   shared timeline; the policies differ only in the ordering rule.
//! - [`RoundRobinScheduler`]: preemptive time slicing with a fixed quantum.
//!
//! [`Policy`] selects one of them and carries the quantum only Round Robin
//! needs. Every run is a pure function of its inputs: no shared state, no
//! randomness, no I/O.
//!
//! # KPI
//!
//! [`ScheduleKpi`] summarizes a run: average waiting, turnaround and
//! response time, makespan, throughput and context switches.

mod kpi;
mod non_preemptive;
mod round_robin;
mod timeline;

pub use kpi::ScheduleKpi;
pub use non_preemptive::NonPreemptiveScheduler;
pub use round_robin::RoundRobinScheduler;

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Job, Schedule, Ticks};
use crate::validation::{validate_jobs, validate_quantum};

/// A scheduling engine.
///
/// Implementations borrow the jobs read-only and return a fresh
/// [`Schedule`]; they never keep state between calls.
pub trait Scheduler: Send + Sync {
    /// Simulates the jobs and returns per-job results.
    ///
    /// An empty slice yields an empty schedule.
    fn schedule(&self, jobs: &[Job]) -> Result<Schedule, ScheduleError>;
}

/// Scheduling policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served (by arrival time).
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Priority Scheduling, non-preemptive (lower value first).
    Priority,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum ticks per dispatch.
        quantum: Ticks,
    },
}

impl Policy {
    /// Display name as used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "Priority Scheduling",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether the policy can interrupt a running job.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// Runs the policy on `jobs`.
    ///
    /// # Example
    /// ```
    /// use u_cpusched::scheduler::Policy;
    /// use u_cpusched::models::Job;
    ///
    /// let jobs = vec![Job::new("P1", 5), Job::new("P2", 3), Job::new("P3", 8)];
    /// let schedule = Policy::Fcfs.run(&jobs).unwrap();
    /// assert_eq!(schedule.turnaround_times(), vec![5, 8, 16]);
    /// ```
    pub fn run(&self, jobs: &[Job]) -> Result<Schedule, ScheduleError> {
        match *self {
            Self::Fcfs => NonPreemptiveScheduler::fcfs().schedule(jobs),
            Self::Sjf => NonPreemptiveScheduler::sjf().schedule(jobs),
            Self::Priority => NonPreemptiveScheduler::priority().schedule(jobs),
            Self::RoundRobin { quantum } => RoundRobinScheduler::new(quantum).schedule(jobs),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (quantum = {quantum})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Input container for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Jobs to schedule, in caller order.
    pub jobs: Vec<Job>,
    /// Policy to apply.
    pub policy: Policy,
}

impl ScheduleRequest {
    /// Creates a request with the FCFS policy.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs,
            policy: Policy::Fcfs,
        }
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds a job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Runs the configured policy.
    pub fn run(&self) -> Result<Schedule, ScheduleError> {
        self.policy.run(&self.jobs)
    }
}

pub(crate) fn check_jobs(jobs: &[Job]) -> Result<(), ScheduleError> {
    validate_jobs(jobs).map_err(|errors| {
        for e in &errors {
            warn!("rejected job input: {e}");
        }
        ScheduleError::InvalidParameter(errors)
    })
}

pub(crate) fn check_quantum(quantum: Ticks) -> Result<(), ScheduleError> {
    validate_quantum(quantum).map_err(|e| {
        warn!("rejected quantum: {e}");
        ScheduleError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use crate::workload::{random_jobs, WorkloadSpec};
    use proptest::prelude::*;

    fn all_policies(quantum: Ticks) -> [Policy; 4] {
        [
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Priority,
            Policy::RoundRobin { quantum },
        ]
    }

    fn job_strategy() -> impl Strategy<Value = Job> {
        (1i64..50, 0i64..20, -5i32..5).prop_map(|(burst, arrival, priority)| {
            Job::new("J", burst)
                .with_arrival(arrival)
                .with_priority(priority)
        })
    }

    fn jobs_strategy() -> impl Strategy<Value = Vec<Job>> {
        proptest::collection::vec(job_strategy(), 0..24).prop_map(|jobs| {
            jobs.into_iter()
                .enumerate()
                .map(|(i, mut job)| {
                    job.name = format!("P{}", i + 1);
                    job
                })
                .collect()
        })
    }

    #[test]
    fn test_policy_dispatch() {
        let jobs = vec![Job::new("P1", 5), Job::new("P2", 3), Job::new("P3", 8)];
        assert_eq!(Policy::Fcfs.run(&jobs).unwrap().waiting_times(), vec![0, 5, 8]);
        assert_eq!(Policy::Sjf.run(&jobs).unwrap().waiting_times(), vec![0, 3, 8]);
        assert_eq!(
            Policy::RoundRobin { quantum: 10 }
                .run(&jobs)
                .unwrap()
                .waiting_times(),
            vec![0, 5, 8]
        );
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::Priority.name(), "Priority Scheduling");
        assert_eq!(Policy::Fcfs.to_string(), "FCFS");
        assert_eq!(
            Policy::RoundRobin { quantum: 4 }.to_string(),
            "Round Robin (quantum = 4)"
        );
        assert!(Policy::RoundRobin { quantum: 4 }.is_preemptive());
        assert!(!Policy::Sjf.is_preemptive());
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&Policy::RoundRobin { quantum: 3 }).unwrap();
        assert_eq!(json, r#"{"policy":"round_robin","quantum":3}"#);
        let back: Policy = serde_json::from_str(r#"{"policy":"sjf"}"#).unwrap();
        assert_eq!(back, Policy::Sjf);
    }

    #[test]
    fn test_schedule_request() {
        let request = ScheduleRequest::new(Vec::new())
            .with_job(Job::new("P1", 10))
            .with_policy(Policy::RoundRobin { quantum: 4 });
        let schedule = request.run().unwrap();
        assert_eq!(schedule.turnaround_times(), vec![10]);
    }

    #[test]
    fn test_invalid_quantum_via_policy() {
        let err = Policy::RoundRobin { quantum: 0 }
            .run(&[Job::new("P1", 1)])
            .unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::NonPositiveQuantum));
    }

    #[test]
    fn test_all_policies_accept_empty_input() {
        for policy in all_policies(3) {
            assert!(policy.run(&[]).unwrap().is_empty(), "{policy}");
        }
    }

    #[test]
    fn test_runs_are_independent() {
        let jobs = random_jobs(&WorkloadSpec::new(12).with_seed(7));
        for policy in all_policies(3) {
            let first = policy.run(&jobs).unwrap();
            let second = policy.run(&jobs).unwrap();
            assert_eq!(first, second, "{policy}");
        }
    }

    #[test]
    fn test_engines_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NonPreemptiveScheduler>();
        assert_send_sync::<RoundRobinScheduler>();
        assert_send_sync::<Policy>();
    }

    proptest! {
        #[test]
        fn prop_turnaround_is_burst_plus_waiting(jobs in jobs_strategy(), quantum in 1i64..12) {
            for policy in all_policies(quantum) {
                let schedule = policy.run(&jobs).unwrap();
                prop_assert_eq!(schedule.job_count(), jobs.len());
                for entry in &schedule.entries {
                    prop_assert!(entry.result.waiting_time >= 0);
                    prop_assert_eq!(
                        entry.result.turnaround_time,
                        entry.job.burst_time + entry.result.waiting_time
                    );
                    prop_assert_eq!(&entry.job, &jobs[entry.index]);
                }
            }
        }

        #[test]
        fn prop_non_preemptive_waits_are_prefix_sums(jobs in jobs_strategy()) {
            for policy in [Policy::Fcfs, Policy::Sjf, Policy::Priority] {
                let schedule = policy.run(&jobs).unwrap();
                let mut elapsed = 0;
                for entry in &schedule.entries {
                    prop_assert_eq!(entry.result.waiting_time, elapsed);
                    elapsed += entry.job.burst_time;
                }
            }
        }

        #[test]
        fn prop_non_preemptive_order_is_stable(jobs in jobs_strategy()) {
            fn arrival(j: &Job) -> i64 {
                j.arrival_time
            }
            fn burst(j: &Job) -> i64 {
                j.burst_time
            }
            fn priority(j: &Job) -> i64 {
                i64::from(j.priority)
            }
            let keys: [(Policy, fn(&Job) -> i64); 3] = [
                (Policy::Fcfs, arrival),
                (Policy::Sjf, burst),
                (Policy::Priority, priority),
            ];
            for (policy, key) in keys {
                let schedule = policy.run(&jobs).unwrap();
                for w in schedule.entries.windows(2) {
                    let (a, b) = (key(&w[0].job), key(&w[1].job));
                    prop_assert!(a <= b);
                    if a == b {
                        prop_assert!(w[0].index < w[1].index);
                    }
                }
            }
        }

        #[test]
        fn prop_round_robin_dispatch_bound(jobs in jobs_strategy(), quantum in 1i64..12) {
            let schedule = Policy::RoundRobin { quantum }.run(&jobs).unwrap();
            let total: i64 = jobs.iter().map(|j| j.burst_time).sum();
            let bound = (total + quantum - 1) / quantum + jobs.len() as i64;
            prop_assert!(schedule.dispatch_count() as i64 <= bound);
            prop_assert_eq!(schedule.makespan(), total);
        }

        #[test]
        fn prop_round_robin_large_quantum_is_fcfs_order(jobs in jobs_strategy()) {
            let quantum = jobs.iter().map(|j| j.burst_time).max().unwrap_or(1);
            let rr = Policy::RoundRobin { quantum }.run(&jobs).unwrap();
            let fifo = NonPreemptiveScheduler::new(crate::dispatching::RuleEngine::new())
                .schedule(&jobs)
                .unwrap();
            prop_assert_eq!(rr.waiting_times(), fifo.waiting_times());
        }
    }
}
