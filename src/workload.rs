//! Random job workloads.
//!
//! Generates reproducible job sets for demos and comparisons between
//! policies. The same [`WorkloadSpec`] (including its seed) always yields
//! the same jobs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Job, Ticks};

/// Largest job count the command line generates.
pub const MAX_RANDOM_JOBS: usize = 100_000;

/// Parameters of a random workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of jobs.
    pub count: usize,
    /// Burst times are drawn from `1..=max_burst`.
    pub max_burst: Ticks,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: Ticks,
    /// Priorities are drawn from `0..=max_priority`.
    pub max_priority: i32,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadSpec {
    /// Creates a spec for `count` jobs with classroom-sized defaults.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_burst: 10,
            max_arrival: 10,
            max_priority: 5,
            seed: 0,
        }
    }

    /// Sets the upper bound for burst times (at least 1).
    pub fn with_max_burst(mut self, max_burst: Ticks) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the upper bound for arrival times (at least 0).
    pub fn with_max_arrival(mut self, max_arrival: Ticks) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the upper bound for priorities (at least 0).
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(0);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generates the workload described by `spec`, seeded from `spec.seed`.
pub fn random_jobs(spec: &WorkloadSpec) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    random_jobs_with(spec, &mut rng)
}

/// Generates the workload using a caller-provided RNG.
///
/// Jobs are named `P1`, `P2`, ... in generation order.
pub fn random_jobs_with<R: Rng>(spec: &WorkloadSpec, rng: &mut R) -> Vec<Job> {
    let max_burst = spec.max_burst.max(1);
    let max_arrival = spec.max_arrival.max(0);
    let max_priority = spec.max_priority.max(0);

    (0..spec.count)
        .map(|i| {
            Job::new(format!("P{}", i + 1), rng.random_range(1..=max_burst))
                .with_arrival(rng.random_range(0..=max_arrival))
                .with_priority(rng.random_range(0..=max_priority))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_jobs;

    #[test]
    fn test_count_and_names() {
        let jobs = random_jobs(&WorkloadSpec::new(4));
        assert_eq!(jobs.len(), 4);
        assert_eq!(jobs[0].name, "P1");
        assert_eq!(jobs[3].name, "P4");
    }

    #[test]
    fn test_bounds() {
        let spec = WorkloadSpec::new(200)
            .with_max_burst(3)
            .with_max_arrival(2)
            .with_max_priority(1)
            .with_seed(11);
        for job in random_jobs(&spec) {
            assert!((1..=3).contains(&job.burst_time));
            assert!((0..=2).contains(&job.arrival_time));
            assert!((0..=1).contains(&job.priority));
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let spec = WorkloadSpec::new(16).with_seed(42);
        assert_eq!(random_jobs(&spec), random_jobs(&spec));
    }

    #[test]
    fn test_generated_jobs_are_valid() {
        let spec = WorkloadSpec::new(50).with_max_burst(0).with_seed(3);
        assert_eq!(spec.max_burst, 1);
        assert!(validate_jobs(&random_jobs(&spec)).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        assert!(random_jobs(&WorkloadSpec::new(0)).is_empty());
    }
}
