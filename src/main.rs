use clap::Parser;
use log::{info, LevelFilter};
use rand::prelude::*;

use datalab::catalog::ENTRIES;
use datalab::config::{Config, Overrides};
use datalab::harness;
use datalab::utils::bits;

#[derive(Debug, Parser)]
#[clap(about = "Checks the bit puzzles against their reference implementations")]
struct Args {
    /// Only check this puzzle (exercise name, e.g. isGreater)
    #[clap(short, long)]
    function: Option<String>,
    /// First argument for -f
    #[clap(short = '1', value_parser = parse_arg, allow_hyphen_values = true)]
    arg1: Option<i32>,
    /// Second argument for -f
    #[clap(short = '2', value_parser = parse_arg, allow_hyphen_values = true)]
    arg2: Option<i32>,
    /// Third argument for -f
    #[clap(short = '3', value_parser = parse_arg, allow_hyphen_values = true)]
    arg3: Option<i32>,
    /// Random trials per puzzle
    #[clap(short = 'T', long)]
    trials: Option<u32>,
    #[clap(short, long)]
    seed: Option<u64>,
    /// Give every puzzle this many points instead of its rating
    #[clap(short = 'r', long)]
    weight: Option<u32>,
    /// Compact output for autograders
    #[clap(short, long)]
    grade: bool,
    /// Full report even if the config file asks for grade output
    #[clap(long, conflicts_with = "grade")]
    no_grade: bool,
    #[clap(short, long = "config")]
    config_path: Option<String>,
    /// List the puzzles and exit
    #[clap(long)]
    list: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_arg(s: &str) -> Result<i32, String> {
    bits::parse_word(s).map_err(|e| format!("'{}' is not a 32-bit word: {}", s, e))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI args
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list {
        println!("Rating\tMaxOps\tArgs\tFunction");
        for entry in ENTRIES.iter() {
            println!(" {}\t{}\t{}\t{}", entry.rating, entry.max_ops, entry.arity(), entry.name);
        }
        return Ok(());
    }

    // Config file first, then CLI overrides
    let mut config = match &args.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let grade = match (args.grade, args.no_grade) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    config.apply(Overrides {
        function: args.function,
        fixed_args: [args.arg1, args.arg2, args.arg3],
        trials: args.trials,
        seed: args.seed,
        weight: args.weight,
        grade,
    });
    config.validate()?;

    for line in config.to_string().lines() {
        info!("{}", line);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = harness::run(&config, &mut rng);

    if config.grade {
        for line in report.grade_lines() {
            println!("{}", line);
        }
        return Ok(());
    }

    for failure in report.failures() {
        println!("{}", failure);
    }
    for entry in config.selected() {
        if let Some(fixed) = config.fixed_for(entry) {
            if let Ok(value) = harness::evaluate(entry, &fixed) {
                let shown: Vec<String> = fixed[..entry.arity()].iter().map(|&x| bits::fmt_word(x)).collect();
                println!("{}({}) = {}", entry.name, shown.join(","), bits::fmt_word(value));
            }
        }
    }
    println!("{}", report);

    Ok(())
}
