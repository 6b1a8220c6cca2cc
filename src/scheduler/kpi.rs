//! Schedule quality metrics (KPIs).
//!
//! Computes the textbook performance indicators of a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average waiting time | mean(waiting) |
//! | Average turnaround time | mean(burst + waiting) |
//! | Average response time | mean(first dispatch) |
//! | Makespan | Latest completion |
//! | Throughput | jobs / makespan |
//! | Context switches | Dispatches that change the running job |

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Ticks};

/// Schedule performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of jobs in the run.
    pub job_count: usize,
    /// Sum of waiting times. Wider than [`Ticks`] since the sum of
    /// individually valid waits can exceed it.
    pub total_waiting_time: i128,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean time until first dispatch.
    pub avg_response_time: f64,
    /// Latest completion time.
    pub makespan: Ticks,
    /// Completed jobs per tick.
    pub throughput: f64,
    /// Number of switches between different jobs.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let job_count = schedule.job_count();
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_response: i128 = 0;

        for entry in &schedule.entries {
            total_waiting += i128::from(entry.result.waiting_time);
            total_turnaround += i128::from(entry.result.turnaround_time);
            total_response += i128::from(entry.response_time);
        }

        let mean = |total: i128| {
            if job_count == 0 {
                0.0
            } else {
                total as f64 / job_count as f64
            }
        };

        let makespan = schedule.makespan();
        let throughput = if makespan <= 0 {
            0.0
        } else {
            job_count as f64 / makespan as f64
        };

        Self {
            job_count,
            total_waiting_time: total_waiting,
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
            avg_response_time: mean(total_response),
            makespan,
            throughput,
            context_switches: schedule.context_switches(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use crate::scheduler::Policy;

    fn sample_jobs() -> Vec<Job> {
        vec![Job::new("P1", 5), Job::new("P2", 3), Job::new("P3", 8)]
    }

    #[test]
    fn test_kpi_fcfs() {
        let schedule = Policy::Fcfs.run(&sample_jobs()).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        assert_eq!(kpi.job_count, 3);
        assert_eq!(kpi.total_waiting_time, 13);
        assert!((kpi.avg_waiting_time - 13.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 29.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.makespan, 16);
        assert!((kpi.throughput - 3.0 / 16.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_sjf_beats_fcfs() {
        let fcfs = ScheduleKpi::calculate(&Policy::Fcfs.run(&sample_jobs()).unwrap());
        let sjf = ScheduleKpi::calculate(&Policy::Sjf.run(&sample_jobs()).unwrap());
        assert!(sjf.avg_waiting_time < fcfs.avg_waiting_time);
        assert_eq!(sjf.makespan, fcfs.makespan);
    }

    #[test]
    fn test_kpi_round_robin_response() {
        // A 0-2, B 2-4, C 4-6, A 6-8, B 8-9, A 9-10
        let jobs = vec![Job::new("A", 5), Job::new("B", 3), Job::new("C", 2)];
        let schedule = Policy::RoundRobin { quantum: 2 }.run(&jobs).unwrap();
        let kpi = ScheduleKpi::calculate(&schedule);

        assert!((kpi.avg_response_time - 2.0).abs() < 1e-10); // (0+2+4)/3
        assert_eq!(kpi.total_waiting_time, 15);
        assert_eq!(kpi.context_switches, 5);
    }

    #[test]
    fn test_kpi_totals_wider_than_ticks() {
        let half = Ticks::MAX / 2;
        let jobs = vec![Job::new("A", half), Job::new("B", half)];
        let schedule = Policy::Fcfs.run(&jobs).unwrap();
        assert_eq!(schedule.turnaround_times(), vec![half, Ticks::MAX - 1]);

        let kpi = ScheduleKpi::calculate(&schedule);
        assert_eq!(kpi.total_waiting_time, i128::from(half));

        let expected = (i128::from(half) + i128::from(Ticks::MAX - 1)) as f64 / 2.0;
        assert!((kpi.avg_turnaround_time - expected).abs() / expected < 1e-9);
        assert!(kpi.avg_turnaround_time > Ticks::MAX as f64 / 2.0);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::default());
        assert_eq!(kpi.job_count, 0);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }
}
