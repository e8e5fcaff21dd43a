use std::io::Write;

use chrono::NaiveDate;
use csv::WriterBuilder;
use rand::Rng;

use crate::args::LogFormat;
use crate::generator::generate_row;

/// Writes `rows` CSV rows, flushing every `batch_size` rows. Returns the number written.
pub fn write_log_stream<W: Write, R: Rng + ?Sized>(
    out: W,
    rng: &mut R,
    rows: usize,
    batch_size: usize,
    date: NaiveDate,
    format: LogFormat,
    noise: f64,
) -> Result<usize, csv::Error> {
    // Malformed rows are shorter than the rest.
    let mut writer = WriterBuilder::new().flexible(true).from_writer(out);
    let batch_size = batch_size.max(1);

    for written in 1..=rows {
        writer.write_record(generate_row(rng, date, format, noise))?;
        if written % batch_size == 0 {
            writer.flush()?;
        }
    }
    writer.flush()?;
    Ok(rows)
}
