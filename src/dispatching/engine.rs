//! Rule engine for job ordering.
//!
//! Applies rules in sequence (primary rule, then tie-breakers). Jobs that
//! tie on every rule keep their input order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::Job;

/// A composable rule engine for job ordering.
///
/// Sorting is always stable: jobs that compare equal keep their input order.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new().with_rule(rules::Sjf);
/// assert_eq!(engine.rule_names(), vec!["SJF"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (input order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, primary first.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts jobs by rule evaluation.
    ///
    /// Returns indices into `jobs`, first-to-run first.
    pub fn sort_indices(&self, jobs: &[Job]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        // `sort_by` is stable; equal jobs keep input order.
        indices.sort_by(|&a, &b| self.compare(&jobs[a], &jobs[b]));
        indices
    }

    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a).cmp(&rule.evaluate(b)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
