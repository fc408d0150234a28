//! `daterange` CLI: build, inspect, shift and describe date ranges.
//!
//! Datetimes are RFC 3339 (any offset) or local `YYYY-MM-DDTHH:MM:SS` /
//! `YYYY-MM-DD` in the zone given by `--tz` (default `UTC`, or `$DATE_RANGE_TZ`).
//!
//! ## Usage
//!
//! ```sh
//! # The month containing an instant
//! daterange --tz Europe/London period --unit month --at 2024-02-10T12:00:00
//!
//! # Next week, relative to now
//! daterange period --unit week --direction next
//!
//! # Does a range cover exactly one day?
//! daterange spans --after 2024-02-28T23:59:59 --before 2024-03-01T00:00:00 --unit day
//!
//! # Shift a range by one month without spilling into March
//! daterange offset --after 2024-01-30T23:59:59 --before 2024-02-01T00:00:00 \
//!     --count 1 --unit month --no-rollover --keep-position
//!
//! # Describe a range
//! daterange humanize --after 2024-01-30T23:59:59 --before 2024-02-01T00:00:00
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use date_range::humanize::DEFAULT_GLUE;
use date_range::{DateRange, Direction, OffsetOptions, Span, TimeUnit};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daterange",
    version,
    about = "Inspect, shift and describe exclusive-bound date ranges"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA timezone for parsed and printed datetimes
    #[arg(long, global = true, env = "DATE_RANGE_TZ", default_value = "UTC")]
    tz: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// The unit instance containing (or before/after) an instant
    Period {
        /// Calendar unit: hour, day, week, month or year
        #[arg(long)]
        unit: TimeUnit,
        /// Anchor instant (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Which instance relative to the anchor: last, this or next
        #[arg(long, default_value = "this")]
        direction: Direction,
    },
    /// A whole calendar month
    Month {
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long)]
        month: u32,
    },
    /// Check whether a range covers exactly one unit instance
    Spans {
        #[command(flatten)]
        bounds: Bounds,
        #[arg(long)]
        unit: TimeUnit,
    },
    /// Detect which single unit a range covers, if any
    Timeperiod {
        #[command(flatten)]
        bounds: Bounds,
    },
    /// Shift a range by whole units
    Offset {
        #[command(flatten)]
        bounds: Bounds,
        /// Number of units (negative moves back)
        #[arg(long, allow_hyphen_values = true)]
        count: i32,
        #[arg(long)]
        unit: TimeUnit,
        /// Clamp to the end of the target month instead of spilling over
        #[arg(long)]
        no_rollover: bool,
        /// Keep bounds that sit on a period start/end at the start/end
        #[arg(long)]
        keep_position: bool,
    },
    /// Describe a range in words
    Humanize {
        #[command(flatten)]
        bounds: Bounds,
        /// Text placed between two spelled-out dates
        #[arg(long, default_value = DEFAULT_GLUE)]
        glue: String,
        /// Reference instant for "today", "next week", ... (defaults to now)
        #[arg(long)]
        now: Option<String>,
    },
    /// Whole days between the bounds
    Days {
        #[command(flatten)]
        bounds: Bounds,
    },
    /// Check whether an instant lies strictly inside a range
    Contains {
        #[command(flatten)]
        bounds: Bounds,
        #[arg(long)]
        at: String,
    },
    /// Swap and re-exclusivize the bounds
    Invert {
        #[command(flatten)]
        bounds: Bounds,
    },
}

/// Exclusive bounds shared by the range-taking subcommands.
#[derive(clap::Args)]
struct Bounds {
    /// The instant immediately before the range begins
    #[arg(long)]
    after: Option<String>,
    /// The instant immediately after the range ends
    #[arg(long)]
    before: Option<String>,
}

impl Bounds {
    fn to_range(&self, tz: Tz) -> Result<DateRange> {
        let after = self.after.as_deref().map(|s| parse_instant(s, tz)).transpose()?;
        let before = self.before.as_deref().map(|s| parse_instant(s, tz)).transpose()?;
        DateRange::new(after, before).context("Failed to build date range")
    }
}

/// JSON shape of a range.
#[derive(Serialize)]
struct RangeReport {
    after: Option<DateTime<Tz>>,
    before: Option<DateTime<Tz>>,
    start: Option<DateTime<Tz>>,
    end: Option<DateTime<Tz>>,
    timezone: Tz,
    bounded: bool,
    time_period: Option<TimeUnit>,
}

impl From<&DateRange> for RangeReport {
    fn from(range: &DateRange) -> Self {
        Self {
            after: range.after(),
            before: range.before(),
            start: range.start(),
            end: range.end(),
            timezone: range.timezone(),
            bounded: range.is_bounded(),
            time_period: range.time_period(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tz = date_range::parse_timezone(&cli.tz).context("Failed to parse --tz")?;
    tracing::debug!(tz = tz.name(), "using timezone");

    match cli.command {
        Commands::Period {
            unit,
            at,
            direction,
        } => {
            let now = instant_or_now(at.as_deref(), tz)?;
            let range = DateRange::for_relative_period(unit, direction, now)
                .with_context(|| format!("Failed to compute {} {}", direction, unit))?;
            print_range(&range, cli.json)?;
        }
        Commands::Month { year, month } => {
            let range = DateRange::for_month(year, month, tz).context("Failed to build month")?;
            print_range(&range, cli.json)?;
        }
        Commands::Spans { bounds, unit } => {
            let span = bounds.to_range(tz)?.spans(unit);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&span)?);
            } else {
                match span {
                    Span::Aligned(start) => println!("aligned {}", start.to_rfc3339()),
                    Span::NotAligned => println!("not aligned"),
                    Span::NotApplicable => println!("not applicable"),
                }
            }
        }
        Commands::Timeperiod { bounds } => {
            let unit = bounds.to_range(tz)?.time_period();
            if cli.json {
                println!("{}", serde_json::to_string(&unit)?);
            } else {
                println!("{}", unit.map_or("none", TimeUnit::name));
            }
        }
        Commands::Offset {
            bounds,
            count,
            unit,
            no_rollover,
            keep_position,
        } => {
            let options = OffsetOptions {
                rollover: !no_rollover,
                keep_position,
            };
            let shifted = bounds
                .to_range(tz)?
                .offset(count, unit, options)
                .with_context(|| format!("Failed to offset range by {} {}(s)", count, unit))?;
            print_range(&shifted, cli.json)?;
        }
        Commands::Humanize { bounds, glue, now } => {
            let range = bounds.to_range(tz)?;
            let now = instant_or_now(now.as_deref(), tz)?.with_timezone(&Utc);
            let phrase = range.for_humans_at(&glue, now);
            if cli.json {
                println!("{}", serde_json::to_string(&phrase)?);
            } else {
                println!("{}", phrase);
            }
        }
        Commands::Days { bounds } => {
            let days = bounds.to_range(tz)?.days().context("Failed to count days")?;
            if cli.json {
                println!("{}", serde_json::json!({ "days": days }));
            } else {
                println!("{}", days);
            }
        }
        Commands::Contains { bounds, at } => {
            let range = bounds.to_range(tz)?;
            let instant = parse_instant(&at, tz)?;
            let contains = range.contains(&instant);
            if cli.json {
                println!("{}", serde_json::json!({ "at": instant, "contains": contains }));
            } else {
                println!("{}", contains);
            }
        }
        Commands::Invert { bounds } => {
            print_range(&bounds.to_range(tz)?.invert(), cli.json)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_instant(s: &str, tz: Tz) -> Result<DateTime<Tz>> {
    date_range::parse_datetime(s, tz).with_context(|| format!("Failed to parse datetime: {}", s))
}

fn instant_or_now(s: Option<&str>, tz: Tz) -> Result<DateTime<Tz>> {
    match s {
        Some(s) => parse_instant(s, tz),
        None => Ok(Utc::now().with_timezone(&tz)),
    }
}

fn print_range(range: &DateRange, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&RangeReport::from(range))?);
        return Ok(());
    }

    println!("after:  {}", format_bound(range.after()));
    println!("before: {}", format_bound(range.before()));
    println!("start:  {}", format_bound(range.start()));
    println!("end:    {}", format_bound(range.end()));
    if let Some(unit) = range.time_period() {
        println!("period: {}", unit);
    }
    Ok(())
}

fn format_bound(bound: Option<DateTime<Tz>>) -> String {
    bound.map_or_else(|| "-".to_string(), |dt| dt.to_rfc3339())
}
