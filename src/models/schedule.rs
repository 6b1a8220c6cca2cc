//! Schedule (simulation result) model.
//!
//! A schedule records, for every job of one run, its waiting and
//! turnaround time, plus the run-order timeline as a list of CPU slices.
//!
//! # Ordering
//! `entries` are in policy-determined order: sorted order for the
//! non-preemptive policies, input order for Round Robin. Each entry keeps
//! its original input index.

use serde::{Deserialize, Serialize};

use super::{Job, Ticks};

/// Per-job timing outcome.
///
/// Invariant: `turnaround_time == burst_time + waiting_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Time spent ready but not running.
    pub waiting_time: Ticks,
    /// Burst time plus waiting time.
    pub turnaround_time: Ticks,
}

impl ScheduleResult {
    /// Derives the result from a job's burst and its waiting time.
    #[inline]
    pub fn from_waiting(burst_time: Ticks, waiting_time: Ticks) -> Self {
        Self {
            waiting_time,
            turnaround_time: burst_time + waiting_time,
        }
    }
}

/// A job together with its outcome in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJob {
    /// Position of the job in the caller's input.
    pub index: usize,
    /// The job as submitted.
    pub job: Job,
    /// Waiting and turnaround time.
    pub result: ScheduleResult,
    /// Clock value when the job finished.
    pub completion_time: Ticks,
    /// Clock value when the job first got the CPU.
    pub response_time: Ticks,
}

impl ScheduledJob {
    /// Creates an entry, deriving turnaround from `waiting_time`.
    pub fn new(
        index: usize,
        job: Job,
        waiting_time: Ticks,
        completion_time: Ticks,
        response_time: Ticks,
    ) -> Self {
        let result = ScheduleResult::from_waiting(job.burst_time, waiting_time);
        Self {
            index,
            job,
            result,
            completion_time,
            response_time,
        }
    }
}

/// One contiguous stretch of CPU time given to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Input index of the job that ran.
    pub job_index: usize,
    /// Job name (denormalized for reporting).
    pub name: String,
    /// Start tick (inclusive).
    pub start: Ticks,
    /// End tick (exclusive).
    pub end: Ticks,
}

impl Slice {
    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Complete result of one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Per-job outcomes in policy-determined order.
    pub entries: Vec<ScheduledJob>,
    /// CPU slices in execution order.
    pub slices: Vec<Slice>,
}

impl Schedule {
    /// Creates a schedule from its entries and slices.
    pub fn new(entries: Vec<ScheduledJob>, slices: Vec<Slice>) -> Self {
        Self { entries, slices }
    }

    /// Whether the run had no jobs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.entries.len()
    }

    /// `(job, result)` pairs in report order.
    pub fn results(&self) -> impl Iterator<Item = (&Job, &ScheduleResult)> {
        self.entries.iter().map(|e| (&e.job, &e.result))
    }

    /// Waiting times in report order.
    pub fn waiting_times(&self) -> Vec<Ticks> {
        self.entries.iter().map(|e| e.result.waiting_time).collect()
    }

    /// Turnaround times in report order.
    pub fn turnaround_times(&self) -> Vec<Ticks> {
        self.entries.iter().map(|e| e.result.turnaround_time).collect()
    }

    /// Job names in report order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.job.name.as_str()).collect()
    }

    /// Finds the first entry with the given name.
    pub fn entry(&self, name: &str) -> Option<&ScheduledJob> {
        self.entries.iter().find(|e| e.job.name == name)
    }

    /// Latest slice end (0 for an empty schedule).
    pub fn makespan(&self) -> Ticks {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Number of times a job was handed the CPU.
    pub fn dispatch_count(&self) -> usize {
        self.slices.len()
    }

    /// Number of slice boundaries where the CPU switches to another job.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].job_index != w[1].job_index)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(job_index: usize, name: &str, start: Ticks, end: Ticks) -> Slice {
        Slice {
            job_index,
            name: name.into(),
            start,
            end,
        }
    }

    fn sample_schedule() -> Schedule {
        let entries = vec![
            ScheduledJob::new(1, Job::new("B", 3), 0, 3, 0),
            ScheduledJob::new(0, Job::new("A", 5), 3, 8, 3),
        ];
        let slices = vec![slice(1, "B", 0, 3), slice(0, "A", 3, 8)];
        Schedule::new(entries, slices)
    }

    #[test]
    fn test_result_from_waiting() {
        let r = ScheduleResult::from_waiting(5, 3);
        assert_eq!(r.waiting_time, 3);
        assert_eq!(r.turnaround_time, 8);
    }

    #[test]
    fn test_scheduled_job_derives_turnaround() {
        let e = ScheduledJob::new(0, Job::new("A", 5), 3, 8, 3);
        assert_eq!(e.result.turnaround_time, 8);
        assert_eq!(e.completion_time, 8);
    }

    #[test]
    fn test_schedule_accessors() {
        let s = sample_schedule();
        assert_eq!(s.job_count(), 2);
        assert_eq!(s.names(), vec!["B", "A"]);
        assert_eq!(s.waiting_times(), vec![0, 3]);
        assert_eq!(s.turnaround_times(), vec![3, 8]);
        assert_eq!(s.entry("A").unwrap().index, 0);
        assert!(s.entry("Z").is_none());
    }

    #[test]
    fn test_schedule_makespan() {
        assert_eq!(sample_schedule().makespan(), 8);
        assert_eq!(Schedule::default().makespan(), 0);
    }

    #[test]
    fn test_context_switches() {
        let s = Schedule::new(
            Vec::new(),
            vec![
                slice(0, "A", 0, 4),
                slice(0, "A", 4, 8),
                slice(1, "B", 8, 10),
                slice(0, "A", 10, 12),
            ],
        );
        assert_eq!(s.dispatch_count(), 4);
        assert_eq!(s.context_switches(), 2);
    }

    #[test]
    fn test_slice_duration() {
        assert_eq!(slice(0, "A", 4, 10).duration(), 6);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::default();
        assert!(s.is_empty());
        assert_eq!(s.dispatch_count(), 0);
        assert_eq!(s.context_switches(), 0);
        assert_eq!(s.results().count(), 0);
    }
}
