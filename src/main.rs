mod report;

use civil_offset::{Instant, Options, offset_details_with};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

const DEFAULT_ZONE: &str = "America/New_York";

const EXIT_OK: u8 = 0;
const EXIT_NO_OFFSET: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "civil-offset", version, about = "Print the UTC offset a named time zone observes at given instants")]
struct Cli {
    /// Instants to evaluate: epoch milliseconds or RFC 3339 timestamps.
    /// Defaults to the current time.
    #[arg(allow_negative_numbers = true)]
    instants: Vec<Instant>,

    /// IANA time zone name.
    #[arg(short, long, default_value = DEFAULT_ZONE)]
    zone: String,

    /// Show the rendered wall-clock text and timing for each instant.
    #[arg(short, long)]
    verbose: bool,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    ExitCode::from(run(Cli::parse()))
}

fn run(cli: Cli) -> u8 {
    let options = match Options::with_zone_name(&cli.zone) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            return EXIT_USAGE;
        }
    };

    let instants = if cli.instants.is_empty() { vec![Instant::now()] } else { cli.instants };
    let color = !cli.no_color && (cli.color || io::stdout().is_terminal());

    let runs: Vec<_> = instants.into_iter().map(|instant| offset_details_with(instant, &options)).collect();
    report::print_run(&options, &runs, cli.verbose, color);

    if runs.iter().all(|details| details.offset.is_some()) { EXIT_OK } else { EXIT_NO_OFFSET }
}
