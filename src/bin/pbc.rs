//! Command-line Process Behavior Chart.
//!
//! Reads a CSV whose first column holds the measurements and whose optional
//! second column holds instructions ("Change limits"), then writes the chart
//! table as CSV on stdout.
//!
//! ```text
//! pbc [--baseline N] [--moving-range] [--no-headers] [FILE]
//! ```
//!
//! The first CSV row is a header and is skipped; pass `--no-headers` when
//! the file starts directly with measurements. Without FILE the CSV is read
//! from stdin. Set `RUST_LOG=debug` to trace the computed limits of every
//! process.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::info;

use process_behavior::{pbc, ColumnLayout, PbcConfig, SheetValue};

struct Args {
    config: PbcConfig,
    has_headers: bool,
    input: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: PbcConfig::default(),
        has_headers: true,
        input: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--baseline" => {
                let value = iter.next().context("--baseline expects a value")?;
                let size: usize = value
                    .parse()
                    .with_context(|| format!("invalid baseline size: {value}"))?;
                args.config = args.config.with_baseline_size(size);
            }
            "--moving-range" => {
                args.config = args.config.with_layout(ColumnLayout::MovingRange);
            }
            "--no-headers" => args.has_headers = false,
            "-h" | "--help" => {
                println!("usage: pbc [--baseline N] [--moving-range] [--no-headers] [FILE]");
                println!("  the first row is read as a header unless --no-headers is given");
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            path => {
                if args.input.is_some() {
                    bail!("only one input file is accepted");
                }
                args.input = Some(PathBuf::from(path));
            }
        }
    }
    Ok(args)
}

/// Read the data and instruction columns.
fn read_columns(source: impl Read, has_headers: bool) -> Result<(Vec<SheetValue>, Vec<SheetValue>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(source);

    let mut data = Vec::new();
    let mut instructions = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading CSV record {i}"))?;
        data.push(SheetValue::from(record.get(0).unwrap_or("")));
        instructions.push(SheetValue::from(record.get(1).unwrap_or("")));
    }
    Ok((data, instructions))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    let (data, instructions) = match &args.input {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_columns(file, args.has_headers)?
        }
        None => read_columns(io::stdin().lock(), args.has_headers)?,
    };
    info!("read {} row(s)", data.len());

    let table = pbc(&data, &instructions, &args.config).context("computing the chart")?;

    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    for record in table.records() {
        writer.write_record(&record).context("writing CSV")?;
    }
    writer.flush().context("writing CSV")?;
    Ok(())
}
