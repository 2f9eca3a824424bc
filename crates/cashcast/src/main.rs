use std::io::{self, Write};
use std::path::PathBuf;

use cashcast::{ReportOptions, init_logging, load_scenario, write_report};
use cashcast_core::estimate::project_from_today;
use cashcast_core::simulation::calculate_projection;
use cashcast_core::timezone::parse_calendar_day;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cashcast")]
#[command(about = "Day-by-day cashflow projection with optimistic and pessimistic scenarios")]
struct Args {
    /// Scenario file (YAML)
    scenario: PathBuf,

    /// Projection length in days (overrides the scenario)
    #[arg(long)]
    days: Option<i64>,

    /// First projected day, as a date or an RFC 3339 instant (overrides the scenario)
    #[arg(long)]
    start: Option<String>,

    /// IANA time zone (overrides the scenario)
    #[arg(long)]
    time_zone: Option<String>,

    /// Estimate today's balance from stale stored balances and project from it
    #[arg(long)]
    from_today: bool,

    /// Print every day, not only days with events
    #[arg(long)]
    all_days: bool,

    /// Emit JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Path to the data directory (default: ~/.cashcast/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cashcast")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let scenario = load_scenario(&args.scenario)?;
    let clock = scenario.clock(args.time_zone.as_deref())?;

    let mut input = scenario.input;
    if let Some(days) = args.days {
        input.options.projection_days = Some(days);
    }
    if let Some(start) = &args.start {
        if args.from_today {
            tracing::warn!(%start, "--start is ignored with --from-today");
        }
        input.options.start_date = Some(parse_calendar_day(start, clock.time_zone())?);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report_options = ReportOptions {
        all_days: args.all_days,
    };

    if args.from_today {
        let today = project_from_today(&input, &clock)?;
        tracing::info!(
            today = %today.estimate.today,
            rebased = today.rebased,
            "projected from today"
        );
        if args.json {
            serde_json::to_writer_pretty(&mut out, &today)?;
            writeln!(out)?;
        } else {
            write_report(&mut out, &today.projection, Some(&today.estimate), report_options)?;
        }
    } else {
        let projection = calculate_projection(&input, &clock)?;
        tracing::info!(
            start = %projection.start_date,
            days = projection.days.len(),
            "projection complete"
        );
        if args.json {
            serde_json::to_writer_pretty(&mut out, &projection)?;
            writeln!(out)?;
        } else {
            write_report(&mut out, &projection, None, report_options)?;
        }
    }

    Ok(())
}
