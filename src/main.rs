// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use pilgrim_feed::config::{self, Config};
use pilgrim_feed::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use pilgrim_feed::error::{Error, Result};
use pilgrim_feed::feed::{FeedHandle, FeedSession};
use pilgrim_feed::ui::notifications::DropdownView;

/// How often `--ticks` checks the activity log for completed ticks.
const TICK_POLL_INTERVAL: Duration = Duration::from_millis(100);

const HELP: &str = "\
pilgrim-feed: run a notification feed session and print its dropdown

USAGE:
  pilgrim-feed [OPTIONS]

OPTIONS:
  --config PATH                    Read settings from PATH instead of the user config
  --period SECS                    Generator tick period in seconds
  --probability P                  Chance of an event per tick (0.0 to 1.0)
  --ticks N                        Generator ticks to wait for before printing [default: 0]
  --add CATEGORY:PRIORITY:MESSAGE  Add a notification (repeatable)
  --mark-all                       Mark everything read before printing
  -h, --help                       Print help
";

struct Args {
    config: Option<PathBuf>,
    period: Option<u64>,
    probability: Option<f64>,
    ticks: u32,
    adds: Vec<String>,
    mark_all: bool,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        period: args.opt_value_from_str("--period")?,
        probability: args.opt_value_from_str("--probability")?,
        ticks: args.opt_value_from_str("--ticks")?.unwrap_or(0),
        adds: args.values_from_str("--add")?,
        mark_all: args.contains("--mark-all"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: unused arguments {rest:?}");
    }
    Ok(Some(parsed))
}

fn load_config(args: &Args) -> Config {
    let mut config = match &args.config {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
    .unwrap_or_else(|err| {
        eprintln!("Failed to load settings, using defaults: {err}");
        Config::default()
    });

    if let Some(period) = args.period {
        config.generator.tick_period_secs = period;
    }
    if let Some(probability) = args.probability {
        config.generator.probability = probability;
    }
    config
}

/// Splits `CATEGORY:PRIORITY:MESSAGE` and adds it to the feed.
fn apply_add(feed: &FeedHandle, entry: &str) -> Result<()> {
    let mut parts = entry.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(category), Some(priority), Some(message)) => {
            feed.add_parsed(category.trim(), priority.trim(), message.trim())?;
            Ok(())
        }
        _ => Err(Error::InvalidArgument {
            field: "notification",
            value: entry.to_string(),
        }),
    }
}

fn print_dropdown(view: &DropdownView) {
    match view.badge_label() {
        Some(badge) => println!("Notifications [{badge}]"),
        None => println!("Notifications"),
    }
    if let Some(unread) = view.unread_label() {
        println!("{unread}");
    }
    if view.is_empty() {
        println!("  No notifications");
    }
    for entry in &view.entries {
        let marker = if entry.unread { '*' } else { ' ' };
        println!(
            "{marker} #{:<3} {:<15} {:<7} {:<12} {}",
            entry.id.to_string(),
            format!("{:?}", entry.icon),
            format!("{:?}", entry.tone),
            entry.age,
            entry.message
        );
    }
    if let Some(overflow) = view.overflow_label() {
        println!("  {overflow}");
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args);
    let mut collector = DiagnosticsCollector::new(config.diagnostics.buffer_capacity());
    let mut session = FeedSession::builder(&config)
        .diagnostics(collector.handle())
        .build();
    let feed = session.initialize()?;

    for entry in &args.adds {
        apply_add(&feed, entry)?;
    }

    if args.ticks > 0 && !session.generator_running() {
        eprintln!("Warning: generator disabled, ignoring --ticks");
    } else {
        let mut seen = 0;
        while seen < args.ticks {
            tokio::time::sleep(TICK_POLL_INTERVAL).await;
            collector.process_pending_with(|event| {
                if matches!(event.kind, DiagnosticEventKind::GeneratorTick { .. }) {
                    seen += 1;
                }
            });
        }
    }

    if args.mark_all {
        feed.mark_all_as_read()?;
    }

    print_dropdown(&feed.dropdown()?);
    session.teardown();

    collector.process_pending();
    match collector.export_json() {
        Ok(report) => println!("\n{report}"),
        Err(err) => eprintln!("Failed to export diagnostics: {err}"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
