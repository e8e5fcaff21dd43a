mod analytics;
mod error;
mod ingest;
mod invariants;
mod models;
mod parser;
mod pipeline;
mod report;

use std::io::{self, IsTerminal};

use clap::Parser;
use ingest::UrlFetcher;
use report::Console;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL to the datafile
    #[arg(long, env = "WEBLOG_STATS_URL")]
    url: String,
}

fn main() {
    let args = Args::parse();
    init_tracing();
    pipeline::run(&args.url, &UrlFetcher::default(), &mut Console);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}
