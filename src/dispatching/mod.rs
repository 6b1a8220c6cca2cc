//! Ordering rules and rule engine for the non-preemptive policies.
//!
//! FCFS, SJF and Priority Scheduling share one timeline and differ only in
//! the key used to order the jobs. Each key is a [`DispatchingRule`]; the
//! [`RuleEngine`] turns one or more rules into a stable job order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::Job;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Priority)
//!     .with_tie_breaker(rules::Sjf);
//!
//! let jobs = vec![Job::new("A", 5).with_priority(1), Job::new("B", 3).with_priority(1)];
//! assert_eq!(engine.sort_indices(&jobs), vec![1, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = scheduled first.
pub type RuleScore = i64;

/// A rule that ranks jobs for a non-preemptive run.
///
/// # Score Convention
/// **Lower score = runs earlier.** Equal scores fall through to the next
/// rule, then to input order.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Sort key of a job.
    fn evaluate(&self, job: &Job) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
