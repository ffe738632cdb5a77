#[macro_use] extern crate log;
extern crate simplelog;
extern crate rand;
extern crate rand_chacha;
extern crate serde_json;
extern crate clap;
extern crate percolation;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use simplelog::*;
use std::fs::File;
use std::path::PathBuf;
use std::process;

use percolation::{from_one_indexed, Percolation, PercolationStats};

#[derive(Parser, Debug)]
#[command(name = "percolation", about = "Monte Carlo estimate of the site percolation threshold")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also write the log to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run independent trials and report the threshold estimate
    Stats {
        n: usize,
        trials: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Spread trials over all cores
        #[arg(long)]
        parallel: bool,
        #[arg(long)]
        json: bool,
    },
    /// Run one trial and print the grid it percolated on
    Trial {
        n: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Open the given 1-indexed sites and print the grid
    Grid {
        n: usize,
        /// ROW,COL (1-indexed); repeatable
        #[arg(long = "open", value_parser = parse_site)]
        open: Vec<(i64, i64)>,
    },
}

fn parse_site(s: &str) -> Result<(i64, i64), String> {
    let mut parts = s.split(',').map(str::trim);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(r), Some(c), None) => {
            let row = r.parse::<i64>().map_err(|e| format!("bad row {:?}: {}", r, e))?;
            let col = c.parse::<i64>().map_err(|e| format!("bad column {:?}: {}", c, e))?;
            Ok((row, col))
        }
        _ => Err(format!("expected ROW,COL, got {:?}", s)),
    }
}

fn init_logging(verbose: u8, log_file: &Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
    ];
    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), File::create(path)?));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn run(command: Command) -> percolation::Result<()> {
    match command {
        Command::Stats { n, trials, seed, parallel, json } => {
            let ps = if parallel {
                let seed = seed.unwrap_or_else(rand::random);
                PercolationStats::new_parallel(n, trials, seed)?
            } else {
                PercolationStats::new(n, trials, &mut rng_from(seed))?
            };

            if json {
                let report = json!({
                    "n": n,
                    "trials": trials,
                    "mean": ps.mean(),
                    "stddev": ps.stddev(),
                    "confidence_low": ps.confidence_low(),
                    "confidence_high": ps.confidence_high(),
                });
                println!("{}", report);
            } else {
                println!("mean                    = {}", ps.mean());
                println!("stddev                  = {}", ps.stddev());
                println!(
                    "95% confidence interval = [{}, {}]",
                    ps.confidence_low(),
                    ps.confidence_high()
                );
            }
        }
        Command::Trial { n, seed } => {
            let mut rng = rng_from(seed);
            let mut p = Percolation::new(n)?;
            info!("starting Monte Carlo simulation on a {}x{} grid", n, n);
            while !p.percolates() {
                let (row, col) = random_site(&mut rng, n);
                p.open(row, col)?;
            }
            print!("{}", p);
            println!("percolated in {}/{} cells", p.number_of_open_sites(), n * n);
        }
        Command::Grid { n, open } => {
            let mut p = Percolation::new(n)?;
            for (row, col) in open {
                let (row, col) = from_one_indexed(row, col);
                p.open(row, col)?;
            }
            print!("{}", p);
            println!("open sites: {}", p.number_of_open_sites());
            println!("percolates: {}", p.percolates());
        }
    }
    Ok(())
}

fn random_site(rng: &mut ChaCha8Rng, n: usize) -> (i64, i64) {
    use rand::Rng;
    (rng.gen_range(0..n) as i64, rng.gen_range(0..n) as i64)
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose, &cli.log_file) {
        eprintln!("could not set up logging: {}", e);
        process::exit(2);
    }

    if let Err(e) = run(cli.command) {
        error!("{}", e);
        process::exit(1);
    }
}
