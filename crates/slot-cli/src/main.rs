//! `slots` CLI — compute appointment slots and scheduling helpers from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Slots for a raw window, skipping one blocked interval
//! slots generate --start 09:00 --end 10:00 --slot-size 20 --exception 09:20-09:40
//!
//! # Slots for a schedule + dated exceptions fetched from the API
//! slots compute -i request.json --date 2026-03-16
//!
//! # Session length and how many slots fit
//! slots duration --start 09:00:00 --end 10:30:00 --slot-size 20
//!
//! # Weekdays covered by a list of schedules, or the schedules open on a date
//! slots weekdays -i schedules.json
//! slots weekdays -i schedules.json --date 2026-03-16
//!
//! # Placeholder token number for an appointment
//! slots token 3f2504e0-4f89-11d3-9a0c-0305e82c3301
//! ```
//!
//! When `--date` is omitted the reference date is today in `--timezone`
//! (`SLOTS_TIMEZONE`, default `UTC`). Log verbosity follows `SLOTS_LOG`
//! (an `EnvFilter` directive, default `warn`); logs go to stderr.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use slot_engine::{
    AvailabilityWindow, ExceptionInterval, ScheduleAvailability, ScheduleException, TimeOfDay,
};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Appointment slot computation CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Reference-date selection shared by date-dependent subcommands.
#[derive(Args)]
struct DateArgs {
    /// Reference date (YYYY-MM-DD); defaults to today in --timezone
    #[arg(short, long)]
    date: Option<String>,
    /// IANA timezone used to resolve "today"
    #[arg(long, env = "SLOTS_TIMEZONE", default_value = "UTC")]
    timezone: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate slots for a single availability window
    Generate {
        /// Window start (HH:MM or HH:MM:SS)
        #[arg(long)]
        start: String,
        /// Window end (HH:MM or HH:MM:SS)
        #[arg(long)]
        end: String,
        /// Slot size in minutes
        #[arg(long)]
        slot_size: u32,
        /// Blocked interval as START-END; may be repeated
        #[arg(long = "exception")]
        exceptions: Vec<String>,
        #[command(flatten)]
        date: DateArgs,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Compute slots for a schedule and its dated exceptions (JSON request)
    Compute {
        /// Input JSON file with `schedule` and `exceptions` (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        date: DateArgs,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show session duration and, with --slot-size, how many slots fit
    Duration {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        slot_size: Option<u32>,
        /// Split each slot into this many tokens
        #[arg(long, requires = "slot_size")]
        tokens_per_slot: Option<u32>,
    },
    /// List weekdays (Monday = 0) covered by schedules, or filter schedules by date
    Weekdays {
        /// Input JSON array of schedules (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Keep only schedules open on this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Print the placeholder token number for an appointment id
    Token {
        appointment_id: String,
    },
}

/// Request body for `compute`.
#[derive(Deserialize)]
struct ComputeRequest {
    schedule: ScheduleAvailability,
    #[serde(default)]
    exceptions: Vec<ScheduleException>,
}

#[derive(Serialize)]
struct DurationReport {
    duration_minutes: Option<f64>,
    slots_per_session: Option<u32>,
    token_duration_minutes: Option<f64>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            start,
            end,
            slot_size,
            exceptions,
            date,
            pretty,
        } => {
            let window = AvailabilityWindow::new(
                parse_time(&start)?,
                parse_time(&end)?,
                slot_size,
            )
            .context("Invalid availability window")?;
            let exceptions = exceptions
                .iter()
                .map(|raw| parse_exception(raw))
                .collect::<Result<Vec<_>>>()?;
            let date = resolve_date(&date)?;
            debug!(%date, exceptions = exceptions.len(), "generating slots");

            let slots = slot_engine::generate_slots(&window, &exceptions, date);
            println!("{}", to_json(&slots, pretty)?);
        }
        Commands::Compute {
            input,
            output,
            date,
            pretty,
        } => {
            let raw = read_input(input.as_deref())?;
            let request: ComputeRequest =
                serde_json::from_str(&raw).context("Failed to parse compute request JSON")?;
            let date = resolve_date(&date)?;
            debug!(%date, schedule = %request.schedule.name, "computing appointment slots");

            let slots =
                slot_engine::compute_appointment_slots(&request.schedule, &request.exceptions, date);
            write_output(output.as_deref(), &to_json(&slots, pretty)?)?;
        }
        Commands::Duration {
            start,
            end,
            slot_size,
            tokens_per_slot,
        } => {
            let report = DurationReport {
                duration_minutes: slot_engine::duration_minutes(&start, &end),
                slots_per_session: slot_size
                    .and_then(|size| slot_engine::slots_per_session(&start, &end, size)),
                token_duration_minutes: slot_size
                    .zip(tokens_per_slot)
                    .and_then(|(size, tokens)| slot_engine::token_duration(size, tokens)),
            };
            println!("{}", to_json(&report, false)?);
        }
        Commands::Weekdays { input, date } => {
            let raw = read_input(input.as_deref())?;
            let schedules: Vec<ScheduleAvailability> =
                serde_json::from_str(&raw).context("Failed to parse schedules JSON")?;

            let json = match date {
                Some(date) => {
                    let date = slot_engine::parse_date(&date)?;
                    to_json(&slot_engine::filter_by_weekday(&schedules, date), false)?
                }
                None => to_json(&slot_engine::days_of_week_union(&schedules), false)?,
            };
            println!("{}", json);
        }
        Commands::Token { appointment_id } => {
            println!("{}", slot_engine::fake_token_number(&appointment_id));
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SLOTS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_time(raw: &str) -> Result<TimeOfDay> {
    raw.parse::<TimeOfDay>()
        .with_context(|| format!("Invalid time '{}' (expected HH:MM or HH:MM:SS)", raw))
}

/// Parse a `START-END` exception argument.
fn parse_exception(raw: &str) -> Result<ExceptionInterval> {
    let (start, end) = raw
        .split_once('-')
        .with_context(|| format!("Invalid exception '{}' (expected START-END)", raw))?;
    ExceptionInterval::new(parse_time(start.trim())?, parse_time(end.trim())?)
        .with_context(|| format!("Invalid exception '{}'", raw))
}

fn resolve_date(args: &DateArgs) -> Result<NaiveDate> {
    if let Some(raw) = &args.date {
        return Ok(slot_engine::parse_date(raw)?);
    }
    let tz: Tz = args
        .timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: '{}'", args.timezone))?;
    Ok(Utc::now().with_timezone(&tz).date_naive())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
