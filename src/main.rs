use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{ArgAction, Parser};

use sigbench::display;
use sigbench::logging;
use sigbench::timer;
use sigbench::types::{BENCHMARKS, BenchmarkKind};

#[derive(Parser)]
#[command(
    name = "sigbench",
    version,
    about = "Measure the user CPU time of the sigsafe read() microbenchmarks"
)]
struct Cli {
    /// Benchmark to run once
    #[arg(short, long, value_enum, default_value_t = BenchmarkKind::Safe)]
    benchmark: BenchmarkKind,

    /// Directory holding the benchmark executables
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Print the measurement as JSON
    #[arg(long)]
    json: bool,

    /// List the known benchmarks and exit
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if cli.list {
        print!("{}", display::format_list(&BENCHMARKS));
        return Ok(());
    }

    let measurement = timer::run(cli.benchmark.benchmark(), &cli.dir)?;

    if cli.json {
        println!("{}", display::format_json(&measurement));
    } else {
        println!("{}", display::format_raw_time(measurement.user_time_secs));
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
