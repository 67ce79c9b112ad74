//! `meeting-slots` CLI — find meeting slots in a single-day calendar document.
//!
//! ## Usage
//!
//! ```sh
//! # Best slots for the request, preferring optional attendees (stdin → stdout)
//! meeting-slots find < calendar.json
//!
//! # Read from a file, count shared optional events once per attendee
//! meeting-slots find -i calendar.json --policy per-attendee
//!
//! # Emit JSON ranges (minutes since midnight) to a file
//! meeting-slots find -i calendar.json --json -o slots.json
//!
//! # Slots free for every mandatory attendee, ignoring optional ones
//! meeting-slots free -i calendar.json
//! ```
//!
//! The input document looks like:
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "when": {"start": "08:30", "end": "09:00"}, "attendees": ["alice"]}
//!   ],
//!   "request": {"attendees": ["alice"], "optional_attendees": ["bob"], "duration": 30},
//!   "options": {"optional_policy": "per-event"}
//! }
//! ```
//!
//! Set `RUST_LOG=meeting_slots=debug` to trace the query phases on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_slots::{
    find_meeting_times, find_meeting_times_with, Event, MeetingRequest, OptionalConflictPolicy,
    QueryOptions, TimeRange,
};
use serde::Deserialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meeting-slots",
    version,
    about = "Find meeting slots in a single-day calendar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the slots where the fewest optional attendees are busy
    Find {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// How events shared by several optional attendees are counted
        /// (overrides the document's options)
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        /// Print ranges as JSON instead of HH:MM lines
        #[arg(long)]
        json: bool,
    },
    /// List the slots free for every mandatory attendee
    Free {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print ranges as JSON instead of HH:MM lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    PerEvent,
    PerAttendee,
}

impl From<PolicyArg> for OptionalConflictPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::PerEvent => OptionalConflictPolicy::PerEvent,
            PolicyArg::PerAttendee => OptionalConflictPolicy::PerAttendee,
        }
    }
}

/// The calendar document read from the input.
#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    events: Vec<Event>,
    request: MeetingRequest,
    #[serde(default)]
    options: QueryOptions,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            output,
            policy,
            json,
        } => {
            let doc = read_document(input.as_deref())?;
            let mut options = doc.options;
            if let Some(policy) = policy {
                options.optional_policy = policy.into();
            }
            let slots = find_meeting_times_with(&doc.events, &doc.request, &options);
            tracing::info!(slots = slots.len(), "query finished");
            write_output(output.as_deref(), &render(&slots, json)?)?;
        }
        Commands::Free {
            input,
            output,
            json,
        } => {
            let doc = read_document(input.as_deref())?;
            let mandatory_only = MeetingRequest::new(
                doc.request.attendees().iter().cloned(),
                doc.request.duration(),
            );
            let slots = find_meeting_times(&doc.events, &mandatory_only);
            write_output(output.as_deref(), &render(&slots, json)?)?;
        }
    }

    Ok(())
}

fn read_document(path: Option<&str>) -> Result<Document> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse calendar document")
}

/// Render ranges as `HH:MM-HH:MM` lines, or as a JSON array of minute ranges.
fn render(slots: &[TimeRange], json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(slots)?;
        out.push('\n');
        return Ok(out);
    }
    if slots.is_empty() {
        return Ok("No slots available\n".to_string());
    }
    Ok(slots.iter().map(|slot| format!("{}\n", slot)).collect())
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
            print!("{}", content);
        }
    }
    Ok(())
}
