//! Command-line front end: argument parsing and the interactive session.
//!
//! Hand-rolled parser, no argument-parsing dependency.
//!
//! # Grammar
//!
//! ```text
//! u-cpusched [--job NAME:BURST[:ARRIVAL[:PRIORITY]]]... [--policy P [--quantum Q]]
//! u-cpusched --random N [--seed S] [--policy P [--quantum Q]]
//! u-cpusched --help | -h
//! ```
//!
//! Without `--job` or `--random`, jobs are read interactively. Without
//! `--policy`, the numbered menu loops until the user picks Exit.

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::info;

use crate::error::ScheduleError;
use crate::models::{Job, Ticks};
use crate::report::{render_json, render_report};
use crate::scheduler::Policy;
use crate::workload::{random_jobs, WorkloadSpec, MAX_RANDOM_JOBS};

/// Where the job list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    /// Prompt for the jobs on stdin.
    Interactive,
    /// Jobs given with `--job`.
    Inline(Vec<Job>),
    /// Jobs generated with `--random`.
    Random(WorkloadSpec),
}

/// Configuration produced by CLI parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Where the jobs come from.
    pub source: JobSource,
    /// Run this policy once instead of showing the menu.
    pub policy: Option<Policy>,
    /// Print the run as JSON instead of the text report.
    pub json: bool,
    /// Append the run-order chart to each text report.
    pub gantt: bool,
    /// Number of `-v` flags.
    pub verbosity: u8,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            source: JobSource::Interactive,
            policy: None,
            json: false,
            gantt: false,
            verbosity: 0,
        }
    }
}

/// Result of parsing the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Help,
    Run(CliConfig),
}

/// Failure of the command-line front end.
#[derive(Debug)]
pub enum CliError {
    /// Bad arguments; the usage text should be shown.
    Usage(String),
    /// The scheduling engine rejected the input.
    Schedule(ScheduleError),
    Io(io::Error),
    Json(serde_json::Error),
}

impl CliError {
    fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => f.write_str(msg),
            Self::Schedule(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Usage(_) => None,
            Self::Schedule(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<ScheduleError> for CliError {
    fn from(e: ScheduleError) -> Self {
        Self::Schedule(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Usage text.
pub fn usage() -> String {
    let exe = env!("CARGO_PKG_NAME");
    format!(
        "Usage: {exe} [OPTIONS]\n\
         \n\
         Simulates FCFS, SJF, Priority and Round Robin CPU scheduling.\n\
         \n\
         Options:\n\
         \x20 -j, --job NAME:BURST[:ARRIVAL[:PRIORITY]]  Add a job (repeatable)\n\
         \x20 -r, --random N                            Generate N random jobs\n\
         \x20     --seed S                              Seed for --random (default 0)\n\
         \x20 -p, --policy fcfs|sjf|priority|rr         Run one policy and exit\n\
         \x20 -q, --quantum Q                           Time quantum for rr\n\
         \x20     --json                                Print the result as JSON\n\
         \x20     --gantt                               Print the run order chart\n\
         \x20 -v                                        More logging (repeatable)\n\
         \x20 -h, --help                                Show this help\n\
         \n\
         Without --job or --random, jobs are entered interactively.\n\
         Without --policy, a menu is shown.\n"
    )
}

/// Parses arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<CliCommand, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = CliConfig::default();
    let mut jobs: Vec<Job> = Vec::new();
    let mut random: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut policy_name: Option<String> = None;
    let mut quantum: Option<Ticks> = None;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-j" | "--job" => jobs.push(parse_job_spec(&expect_value(&mut args, &arg)?)?),
            "-r" | "--random" => random = Some(parse_value(&mut args, &arg)?),
            "--seed" => seed = Some(parse_value(&mut args, &arg)?),
            "-p" | "--policy" => policy_name = Some(expect_value(&mut args, &arg)?),
            "-q" | "--quantum" => quantum = Some(parse_value(&mut args, &arg)?),
            "--json" => config.json = true,
            "--gantt" => config.gantt = true,
            v if v.len() > 1 && v.starts_with('-') && v[1..].chars().all(|c| c == 'v') => {
                let count = u8::try_from(v.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(count);
            }
            other => return Err(CliError::usage(format!("unexpected argument '{other}'"))),
        }
    }

    config.source = match (jobs.is_empty(), random) {
        (true, None) => JobSource::Interactive,
        (false, None) => JobSource::Inline(jobs),
        (true, Some(count)) if count > MAX_RANDOM_JOBS => {
            return Err(CliError::usage(format!(
                "--random accepts at most {MAX_RANDOM_JOBS} jobs"
            )));
        }
        (true, Some(count)) => {
            JobSource::Random(WorkloadSpec::new(count).with_seed(seed.unwrap_or(0)))
        }
        (false, Some(_)) => {
            return Err(CliError::usage("--job and --random cannot be combined"));
        }
    };
    if seed.is_some() && random.is_none() {
        return Err(CliError::usage("--seed requires --random"));
    }

    config.policy = match policy_name {
        Some(name) => Some(parse_policy(&name, quantum)?),
        None if quantum.is_some() => {
            return Err(CliError::usage("--quantum requires --policy rr"));
        }
        None => None,
    };
    if config.json && config.policy.is_none() {
        return Err(CliError::usage("--json requires --policy"));
    }

    Ok(CliCommand::Run(config))
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::usage(format!("{flag} requires a value")))
}

fn parse_value<T: FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T, CliError> {
    let raw = expect_value(args, flag)?;
    raw.parse()
        .map_err(|_| CliError::usage(format!("invalid value '{raw}' for {flag}")))
}

/// Parses a policy name; Round Robin needs a quantum.
pub fn parse_policy(name: &str, quantum: Option<Ticks>) -> Result<Policy, CliError> {
    let policy = match name.to_ascii_lowercase().as_str() {
        "fcfs" => Policy::Fcfs,
        "sjf" => Policy::Sjf,
        "priority" => Policy::Priority,
        "rr" | "round-robin" | "roundrobin" => {
            let quantum =
                quantum.ok_or_else(|| CliError::usage("--policy rr requires --quantum"))?;
            return Ok(Policy::RoundRobin { quantum });
        }
        other => return Err(CliError::usage(format!("unknown policy '{other}'"))),
    };
    if quantum.is_some() {
        return Err(CliError::usage("--quantum only applies to --policy rr"));
    }
    Ok(policy)
}

/// Parses `NAME:BURST[:ARRIVAL[:PRIORITY]]`.
///
/// Numbers are not range-checked here; the engine rejects bad values.
pub fn parse_job_spec(spec: &str) -> Result<Job, CliError> {
    let parts: Vec<&str> = spec.split(':').collect();
    if !(2..=4).contains(&parts.len()) || parts[0].is_empty() {
        return Err(CliError::usage(format!(
            "invalid job '{spec}', expected NAME:BURST[:ARRIVAL[:PRIORITY]]"
        )));
    }

    let field = |idx: usize, what: &str| -> Result<i64, CliError> {
        parts[idx]
            .trim()
            .parse()
            .map_err(|_| CliError::usage(format!("invalid {what} '{}' in job '{spec}'", parts[idx])))
    };

    let mut job = Job::new(parts[0], field(1, "burst time")?);
    if parts.len() > 2 {
        job = job.with_arrival(field(2, "arrival time")?);
    }
    if parts.len() > 3 {
        let priority = field(3, "priority")?;
        let priority = i32::try_from(priority)
            .map_err(|_| CliError::usage(format!("priority out of range in job '{spec}'")))?;
        job = job.with_priority(priority);
    }
    Ok(job)
}

/// Entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Fcfs,
    Sjf,
    PriorityScheduling,
    RoundRobin,
    Exit,
}

impl MenuChoice {
    /// Menu lines in display order.
    pub const ITEMS: [(MenuChoice, &'static str); 5] = [
        (MenuChoice::Fcfs, "FCFS"),
        (MenuChoice::Sjf, "SJF"),
        (MenuChoice::PriorityScheduling, "Priority Scheduling"),
        (MenuChoice::RoundRobin, "Round Robin"),
        (MenuChoice::Exit, "Exit"),
    ];

    /// Parses a menu number (`1`..=`5`).
    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        Self::ITEMS.get(n.checked_sub(1)?).map(|(choice, _)| *choice)
    }

    /// Policy for this entry; `None` for Exit. Round Robin takes `quantum`.
    pub fn policy(self, quantum: Ticks) -> Option<Policy> {
        match self {
            Self::Fcfs => Some(Policy::Fcfs),
            Self::Sjf => Some(Policy::Sjf),
            Self::PriorityScheduling => Some(Policy::Priority),
            Self::RoundRobin => Some(Policy::RoundRobin { quantum }),
            Self::Exit => None,
        }
    }
}

/// Console session: job entry and the policy menu.
///
/// Every menu run schedules the same, unmodified job list.
pub struct Session<R, W> {
    input: R,
    output: W,
    gantt: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            gantt: false,
        }
    }

    /// Also print the run-order chart after each table.
    pub fn with_gantt(mut self, gantt: bool) -> Self {
        self.gantt = gantt;
        self
    }

    /// Prompts for the job list. Returns `None` if input ends early.
    pub fn read_jobs(&mut self) -> io::Result<Option<Vec<Job>>> {
        let Some(count) = self.prompt_number::<usize>("Enter the number of jobs: ")? else {
            return Ok(None);
        };

        let mut jobs = Vec::new();
        for _ in 0..count {
            let Some(name) = self.prompt("Enter Process Name: ")? else {
                return Ok(None);
            };
            let Some(burst) = self.prompt_number::<Ticks>("Enter Burst Time: ")? else {
                return Ok(None);
            };
            let Some(arrival) = self.prompt_number::<Ticks>("Enter Arrival Time: ")? else {
                return Ok(None);
            };
            let Some(priority) =
                self.prompt_number::<i32>("Enter Priority (lower value = higher priority): ")?
            else {
                return Ok(None);
            };
            jobs.push(
                Job::new(name, burst)
                    .with_arrival(arrival)
                    .with_priority(priority),
            );
        }
        info!("read {} jobs", jobs.len());
        Ok(Some(jobs))
    }

    /// Shows the menu until Exit or end of input.
    pub fn menu_loop(&mut self, jobs: &[Job]) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            for (i, (_, label)) in MenuChoice::ITEMS.iter().enumerate() {
                writeln!(self.output, "{}. {label}", i + 1)?;
            }
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let policy = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Some(MenuChoice::RoundRobin) => {
                    let Some(quantum) =
                        self.prompt_number::<Ticks>("Enter Time Quantum for Round Robin: ")?
                    else {
                        return Ok(());
                    };
                    MenuChoice::RoundRobin.policy(quantum)
                }
                Some(choice) => choice.policy(0),
                None => {
                    writeln!(self.output, "Invalid choice, please try again.")?;
                    continue;
                }
            };

            if let Some(policy) = policy {
                self.print_run(&policy, jobs)?;
            }
        }
    }

    /// Runs one policy and prints its report, or the engine's error.
    fn print_run(&mut self, policy: &Policy, jobs: &[Job]) -> io::Result<()> {
        match policy.run(jobs) {
            Ok(schedule) => write!(
                self.output,
                "{}",
                render_report(policy, &schedule, self.gantt)
            ),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_number<T: FromStr>(&mut self, text: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

/// Runs the configured command against the given console streams.
pub fn execute<R: BufRead, W: Write>(
    config: &CliConfig,
    input: R,
    output: W,
) -> Result<(), CliError> {
    let mut session = Session::new(input, output).with_gantt(config.gantt);

    let jobs = match &config.source {
        JobSource::Interactive => match session.read_jobs()? {
            Some(jobs) => jobs,
            None => return Ok(()),
        },
        JobSource::Inline(jobs) => jobs.clone(),
        JobSource::Random(spec) => random_jobs(spec),
    };
    info!("scheduling {} jobs", jobs.len());

    match &config.policy {
        Some(policy) => {
            let schedule = policy.run(&jobs)?;
            let out = session.output();
            if config.json {
                writeln!(out, "{}", render_json(policy, &schedule)?)?;
            } else {
                write!(out, "{}", render_report(policy, &schedule, config.gantt))?;
            }
            out.flush()?;
        }
        None => session.menu_loop(&jobs)?,
    }
    Ok(())
}
