mod args;
mod generator;
mod stream;

use std::{
    fs::File,
    io::{self, Write},
};

use args::CliArgs;
use chrono::Local;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use stream::write_log_stream;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let mut rng = match *args.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let date = (*args.date()).unwrap_or_else(|| Local::now().date_naive());
    let out: Box<dyn Write> = match args.output() {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };

    let written = write_log_stream(
        out,
        &mut rng,
        *args.rows(),
        *args.batch_size(),
        date,
        *args.format(),
        *args.noise(),
    )?;
    eprintln!("Wrote {written} rows for {date}");
    Ok(())
}
