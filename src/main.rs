//! GTD Actions - Main Entry Point
//!
//! Serves the actions tools over MCP (stdio) or answers a single query on the
//! command line. The actual implementation is in the `gtd_actions` library.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use gtd_actions::display::{self, DisplayTask};
use gtd_actions::{ActionsServerHandler, Effort, FilterSpec, formatting, validation};
use mcp_attr::server::serve_stdio;

/// GTD Actions - urgent contexts and filtered next actions from a task catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task catalog (TOML, or JSON from the exporter)
    file: String,

    /// Date to treat as today (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print JSON instead of text (query commands only)
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the tools over MCP on stdio (default)
    Serve,
    /// Contexts to enter to clear everything due by a date
    Urgent {
        /// Cutoff date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        until: Option<NaiveDate>,
    },
    /// Tasks doable with the given contexts, people and effort
    Filter {
        /// Context at hand (repeatable)
        #[arg(short, long = "context")]
        contexts: Vec<String>,
        /// Person available (repeatable)
        #[arg(short, long = "person")]
        people: Vec<String>,
        /// Maximum effort: minimal, low, medium, high, total
        #[arg(long, default_value = "total")]
        max_effort: Effort,
        /// Hide tasks scheduled after this date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        until: Option<NaiveDate>,
    },
    /// Describe a timestamp relative to today
    Format {
        /// Timestamp (YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD)
        timestamp: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_tracing(args.quiet, args.verbose)?;

    let handler = ActionsServerHandler::new(&args.file, args.today)?;
    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            tracing::info!("serving actions tools on stdio");
            serve_stdio(handler).await?;
        }
        Command::Urgent { until } => {
            let catalog = handler.catalog();
            let today = handler.today();
            let urgent = gtd_actions::aggregate(catalog, until.unwrap_or(today));
            let groups = display::display_groups(&urgent, catalog, today);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                println!("{}", formatting::format_urgent_contexts(&groups));
            }
        }
        Command::Filter {
            contexts,
            people,
            max_effort,
            until,
        } => {
            let catalog = handler.catalog();
            let today = handler.today();
            let spec =
                FilterSpec::from_names(catalog, contexts.as_slice(), people.as_slice(), max_effort)?;
            let mut tasks = gtd_actions::filter(catalog, &spec);
            gtd_actions::hide_not_yet_scheduled(&mut tasks, until.unwrap_or(today));
            let display = DisplayTask::from_tasks(&tasks, catalog, today);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&display)?);
            } else {
                println!("{}", formatting::format_display_tasks(&display));
            }
        }
        Command::Format { timestamp } => {
            let timestamp = validation::parse_timestamp(&timestamp)
                .map_err(|_| anyhow::anyhow!("Invalid timestamp '{}'", timestamp))?;
            let label = gtd_actions::format_relative(timestamp, handler.today());
            if args.json {
                println!("{}", serde_json::to_string(&label)?);
            } else {
                println!("{}", label);
            }
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays free for MCP and query output
fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GTD_ACTIONS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
