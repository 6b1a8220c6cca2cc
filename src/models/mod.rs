//! Scheduling domain models.
//!
//! Provides the input and output types shared by every policy.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Operating systems | Textbook |
//! |------------|-------------------|----------|
//! | Job | Process | P1, P2, ... |
//! | Slice | Dispatch on the CPU | Gantt chart bar |
//! | Schedule | Scheduler trace | Result table |

mod job;
mod schedule;

pub use job::{total_burst, Job, Ticks};
pub use schedule::{Schedule, ScheduleResult, ScheduledJob, Slice};
