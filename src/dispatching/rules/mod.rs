//! Built-in ordering rules.
//!
//! | Rule | Key | Policy |
//! |------|-----|--------|
//! | [`Fcfs`] | arrival time | First-Come-First-Served |
//! | [`Sjf`] | burst time | Shortest-Job-First |
//! | [`Priority`] | priority value | Priority Scheduling |
//!
//! # Score Convention
//! All rules return lower scores for jobs that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Job;

/// First-Come-First-Served.
///
/// Orders jobs by arrival time. Arrival is only a sort key; it never
/// delays a job on the timeline.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.arrival_time
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest-Job-First (non-preemptive).
///
/// Minimizes average waiting time on a single CPU when all jobs are ready.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First"
    }
}

/// Priority Scheduling (non-preemptive).
///
/// Lower priority value runs first.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        RuleScore::from(job.priority)
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_uses_arrival() {
        let job = Job::new("P1", 5).with_arrival(7).with_priority(2);
        assert_eq!(Fcfs.evaluate(&job), 7);
    }

    #[test]
    fn test_sjf_uses_burst() {
        let job = Job::new("P1", 5).with_arrival(7).with_priority(2);
        assert_eq!(Sjf.evaluate(&job), 5);
    }

    #[test]
    fn test_priority_uses_priority() {
        let job = Job::new("P1", 5).with_arrival(7).with_priority(-2);
        assert_eq!(Priority.evaluate(&job), -2);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(Sjf.description(), "Shortest-Job-First");
        assert_eq!(Priority.description(), "Priority Scheduling");
    }
}
