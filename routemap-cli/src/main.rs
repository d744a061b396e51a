//! routemap CLI - turn a route export into an organized endpoint report.

mod colors;
mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use commands::organize::OrganizeConfig;
use commands::routes::RoutesConfig;

#[derive(Parser)]
#[command(name = "routemap")]
#[command(author, version, about = "Organize exported API routes by resource and method", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    // Used when no subcommand is given.
    #[command(flatten)]
    organize: OrganizeArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version information
    Version,
    /// Write the organized JSON report and the Markdown summary (default)
    Organize(OrganizeArgs),
    /// List the API endpoints in the terminal without writing anything
    Routes {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Route export to read
    #[arg(short, long, env = "ROUTEMAP_INPUT", default_value = commands::DEFAULT_INPUT)]
    input: PathBuf,
}

#[derive(Args)]
struct OrganizeArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Where to write the organized JSON report
    #[arg(short, long, env = "ROUTEMAP_OUTPUT", default_value = commands::DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Where to write the Markdown summary
    #[arg(short, long, env = "ROUTEMAP_SUMMARY", default_value = commands::DEFAULT_SUMMARY)]
    summary: PathBuf,
}

impl From<OrganizeArgs> for OrganizeConfig {
    fn from(args: OrganizeArgs) -> Self {
        Self {
            input: args.input.input,
            output: args.output,
            summary: args.summary,
        }
    }
}

fn main() {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Version) => {
            print_version();
            Ok(())
        }
        Some(Commands::Organize(args)) => commands::organize::execute(args.into()),
        Some(Commands::Routes { input }) => commands::routes::execute(RoutesConfig {
            input: input.input,
        }),
        None => commands::organize::execute(cli.organize.into()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout only carries the progress listing.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn print_version() {
    println!("routemap-cli {}", env!("CARGO_PKG_VERSION"));
}
