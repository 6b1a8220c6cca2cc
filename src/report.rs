//! Result rendering.
//!
//! Text table, averages footer and Gantt line for terminals, plus a JSON
//! document for tooling. Rendering never recomputes scheduling results.

use std::fmt::Write as _;

use serde::Serialize;

use crate::models::{Schedule, ScheduledJob, Slice};
use crate::scheduler::{Policy, ScheduleKpi};

const HEADERS: [&str; 4] = ["Process", "Burst Time", "Waiting Time", "Turnaround Time"];

/// Renders the per-job result table.
///
/// ```text
/// Process  Burst Time  Waiting Time  Turnaround Time
/// -------------------------------------------------
/// P1                5             0                5
/// ```
pub fn render_table(schedule: &Schedule) -> String {
    let rows: Vec<[String; 4]> = schedule.entries.iter().map(row).collect();

    let mut widths = HEADERS.map(str::len);
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}",
        HEADERS[0],
        HEADERS[1],
        HEADERS[2],
        HEADERS[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let _ = writeln!(out, "{}", "-".repeat(total));
    for r in &rows {
        let _ = writeln!(
            out,
            "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}",
            r[0],
            r[1],
            r[2],
            r[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
    }
    out
}

fn row(entry: &ScheduledJob) -> [String; 4] {
    [
        entry.job.name.clone(),
        entry.job.burst_time.to_string(),
        entry.result.waiting_time.to_string(),
        entry.result.turnaround_time.to_string(),
    ]
}

/// Renders the averages footer.
pub fn render_summary(kpi: &ScheduleKpi) -> String {
    format!(
        "Average Waiting Time: {:.2}\nAverage Turnaround Time: {:.2}\n",
        kpi.avg_waiting_time, kpi.avg_turnaround_time
    )
}

/// Renders the run order as a one-line Gantt chart.
///
/// ```text
/// | P1 | P2 | P1 |
/// 0    4    6    8
/// ```
pub fn render_gantt(slices: &[Slice]) -> String {
    if slices.is_empty() {
        return String::new();
    }

    let mut bars = String::from("|");
    let mut ticks = String::new();
    for slice in slices {
        let start = slice.start.to_string();
        let label = format!(" {} ", slice.name);
        let width = label.len().max(start.len());
        let _ = write!(ticks, "{start:<w$}", w = width + 1);
        let _ = write!(bars, "{label:<width$}");
        bars.push('|');
    }
    if let Some(last) = slices.last() {
        let _ = write!(ticks, "{}", last.end);
    }
    format!("{bars}\n{ticks}\n")
}

/// Renders the full text report for one policy run.
pub fn render_report(policy: &Policy, schedule: &Schedule, gantt: bool) -> String {
    let kpi = ScheduleKpi::calculate(schedule);
    let mut out = format!("\n{policy}:\n\n");
    out.push_str(&render_table(schedule));
    if !schedule.is_empty() {
        out.push('\n');
        out.push_str(&render_summary(&kpi));
    }
    if gantt && !schedule.slices.is_empty() {
        out.push('\n');
        out.push_str(&render_gantt(&schedule.slices));
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    policy: &'a Policy,
    jobs: &'a [ScheduledJob],
    slices: &'a [Slice],
    kpi: ScheduleKpi,
}

/// Renders the run as a pretty-printed JSON document.
pub fn render_json(policy: &Policy, schedule: &Schedule) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        policy,
        jobs: &schedule.entries,
        slices: &schedule.slices,
        kpi: ScheduleKpi::calculate(schedule),
    })
}
