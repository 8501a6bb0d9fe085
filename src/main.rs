//! pagesim command-line front end.
//!
//! Three ways to supply a reference string:
//! 1. `--pages "7 0 1 2 0 3"` on the command line
//! 2. `--file refs.csv`, reading the first comma-separated row
//! 3. nothing at all, which starts the interactive prompt
//!
//! The summary and chart go to stdout; logs go to stderr (`RUST_LOG`).

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagesim::common::config::{InputSource, SimConfig, DEFAULT_CHART_WIDTH};
use pagesim::input::{self, Workload};
use pagesim::report::{self, ReportOptions};
use pagesim::{compare, compare_parallel, Result};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    version,
    about = "Compare FIFO, LRU and Optimal page replacement",
    long_about = "Count the page faults FIFO, LRU and Optimal incur on one reference string.\n\nRun without --pages or --file to be prompted interactively.\n\nExamples:\n  pagesim --pages \"7 0 1 2 0 3 0 4 2 3 0 3 2\" --frames 3\n  pagesim --file refs.csv --frames 4 --detailed"
)]
struct Cli {
    /// Reference string, separated by spaces and/or commas.
    #[arg(short, long, conflicts_with = "file", requires = "frames")]
    pages: Option<String>,

    /// File whose first row is a comma-separated reference string.
    #[arg(short, long, requires = "frames")]
    file: Option<PathBuf>,

    /// Number of frames.
    #[arg(short = 'n', long)]
    frames: Option<usize>,

    /// Run the three simulators on separate threads.
    #[arg(long)]
    parallel: bool,

    /// Length of the longest chart bar.
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    chart_width: usize,

    /// Print the summary only.
    #[arg(long)]
    no_chart: bool,

    /// Also print hits and evictions per policy.
    #[arg(long)]
    detailed: bool,
}

impl Cli {
    fn source(&self) -> Option<InputSource> {
        match (&self.pages, &self.file) {
            (Some(pages), _) => Some(InputSource::Manual(pages.clone())),
            (None, Some(path)) => Some(InputSource::File(path.clone())),
            (None, None) => None,
        }
    }

    fn report_options(&self) -> ReportOptions {
        ReportOptions {
            chart_width: self.chart_width,
            show_chart: !self.no_chart,
            detailed: self.detailed,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let workload = load_workload(cli)?;

    let cmp = if cli.parallel {
        compare_parallel(&workload.pages, workload.frame_size.get())?
    } else {
        compare(&workload.pages, workload.frame_size.get())?
    };

    println!();
    print!("{}", report::render(&cmp, &cli.report_options()));
    Ok(())
}

fn load_workload(cli: &Cli) -> Result<Workload> {
    match cli.source() {
        Some(source) => {
            // clap enforces --frames whenever a source is given
            let config = SimConfig::new(source, cli.frames.unwrap_or(0));
            input::resolve(&config)
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            input::prompt_workload(&mut stdin.lock(), &mut stdout)
        }
    }
}
