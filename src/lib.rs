//! Educational CPU job-scheduling simulator.
//!
//! Computes waiting and turnaround times for a small set of jobs under
//! classical single-CPU policies and renders the result table.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `ScheduleResult`, `ScheduledJob`,
//!   `Slice`, `Schedule`
//! - **`dispatching`**: Ordering rules (FCFS, SJF, Priority) and the stable
//!   rule engine
//! - **`scheduler`**: Non-preemptive and Round Robin engines, `Policy`
//!   selector, KPIs
//! - **`validation`**: Input checks (burst, arrival, quantum)
//! - **`report`**: Text table, Gantt line and JSON output
//! - **`workload`**: Seeded random job sets
//! - **`cli`**, **`logging`**: Console front end used by the binary
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Job;
//! use u_cpusched::scheduler::Policy;
//!
//! let jobs = vec![Job::new("P1", 5), Job::new("P2", 3), Job::new("P3", 8)];
//! let schedule = Policy::Sjf.run(&jobs).unwrap();
//! assert_eq!(schedule.names(), vec!["P2", "P1", "P3"]);
//! assert_eq!(schedule.turnaround_times(), vec![3, 8, 16]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod cli;
pub mod dispatching;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
pub use models::{Job, Schedule, ScheduleResult};
pub use scheduler::{Policy, Scheduler};
