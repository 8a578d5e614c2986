//! Checks each puzzle against its oracle and scores the results.

use std::fmt;

use log::{debug, info};
use rand::Rng;

use crate::catalog::{Entry, MAX_ARGS};
use crate::config::Config;
use crate::utils::bits;

/// Words every unconstrained argument is tried with.
pub const CORNERS: [i32; 11] = [
    0,
    1,
    -1,
    2,
    -2,
    i32::MAX,
    i32::MIN,
    i32::MAX - 1,
    i32::MIN + 1,
    0x5555_5555,
    0xaaaa_aaaa_u32 as i32,
];

/// Ranges at most this wide are swept exhaustively.
const EXHAUSTIVE_SPAN: i64 = 32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub name: &'static str,
    pub args: Vec<i32>,
    pub got: i32,
    pub expected: i32,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.args.iter().map(|&x| bits::fmt_word(x)).collect();
        writeln!(f, "ERROR: Test {}({}) failed...", self.name, args.join(","))?;
        write!(
            f,
            "...Gives {}. Should be {}",
            bits::fmt_word(self.got),
            bits::fmt_word(self.expected)
        )
    }
}

#[derive(Clone, Debug)]
pub struct Outcome {
    pub entry: &'static Entry,
    pub cases: u64,
    pub errors: u64,
    pub first_failure: Option<Failure>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.errors == 0
    }

    /// Points this puzzle is worth.
    pub fn possible(&self, weight: Option<u32>) -> u32 {
        weight.unwrap_or(self.entry.rating)
    }

    /// Points earned: all of them on a clean pass, none otherwise.
    pub fn score(&self, weight: Option<u32>) -> u32 {
        if self.passed() {
            self.possible(weight)
        } else {
            0
        }
    }
}

/// Values an argument with this inclusive range is swept over.
pub fn arg_values((lo, hi): (i32, i32)) -> Vec<i32> {
    if (hi as i64 - lo as i64) < EXHAUSTIVE_SPAN {
        return (lo..=hi).collect();
    }
    let mut values = Vec::with_capacity(CORNERS.len());
    for c in CORNERS.iter().map(|&c| c.clamp(lo, hi)) {
        if !values.contains(&c) {
            values.push(c);
        }
    }
    values
}

/// Cartesian product of the swept values of every argument of `entry`.
pub fn corner_tuples(entry: &Entry) -> Vec<[i32; MAX_ARGS]> {
    let mut tuples = vec![[0; MAX_ARGS]];
    for (idx, &range) in entry.arg_ranges().iter().enumerate() {
        let values = arg_values(range);
        tuples = tuples
            .into_iter()
            .flat_map(|tuple| {
                values.iter().map(move |&v| {
                    let mut tuple = tuple;
                    tuple[idx] = v;
                    tuple
                })
            })
            .collect();
    }
    tuples
}

pub fn random_tuple<R: Rng>(entry: &Entry, rng: &mut R) -> [i32; MAX_ARGS] {
    let mut tuple = [0; MAX_ARGS];
    for (slot, &(lo, hi)) in tuple.iter_mut().zip(entry.arg_ranges()) {
        *slot = rng.gen_range(lo..=hi);
    }
    tuple
}

/// Runs puzzle and oracle on one argument tuple.
pub fn evaluate(entry: &'static Entry, args: &[i32; MAX_ARGS]) -> Result<i32, Failure> {
    let got = entry.puzzle.call(args);
    let expected = entry.oracle.call(args);
    if got == expected {
        Ok(got)
    } else {
        Err(Failure {
            name: entry.name,
            args: args[..entry.arity()].to_vec(),
            got,
            expected,
        })
    }
}

pub fn check_entry<R: Rng>(entry: &'static Entry, config: &Config, rng: &mut R) -> Outcome {
    let mut outcome = Outcome {
        entry,
        cases: 0,
        errors: 0,
        first_failure: None,
    };

    let mut record = |args: &[i32; MAX_ARGS]| {
        outcome.cases += 1;
        if let Err(failure) = evaluate(entry, args) {
            debug!("{}", failure);
            outcome.errors += 1;
            outcome.first_failure.get_or_insert(failure);
        }
    };

    match config.fixed_for(entry) {
        Some(args) => record(&args),
        None => {
            for args in corner_tuples(entry) {
                record(&args);
            }
            for _ in 0..config.trials {
                record(&random_tuple(entry, rng));
            }
        }
    }

    info!(
        "{}: {} cases, {} errors",
        entry.name, outcome.cases, outcome.errors
    );
    outcome
}

#[derive(Clone, Debug)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
    pub weight: Option<u32>,
}

impl Report {
    pub fn total(&self) -> u32 {
        self.outcomes.iter().map(|o| o.score(self.weight)).sum()
    }

    pub fn possible(&self) -> u32 {
        self.outcomes.iter().map(|o| o.possible(self.weight)).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Failure> {
        self.outcomes.iter().filter_map(|o| o.first_failure.as_ref())
    }

    /// One `score:rating:errors:name` line per puzzle, then `total:possible`.
    pub fn grade_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .outcomes
            .iter()
            .map(|o| {
                format!(
                    "{}:{}:{}:{}",
                    o.score(self.weight),
                    o.possible(self.weight),
                    o.errors,
                    o.entry.name
                )
            })
            .collect();
        lines.push(format!("{}:{}", self.total(), self.possible()));
        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score\tRating\tErrors\tFunction")?;
        for o in &self.outcomes {
            writeln!(
                f,
                " {}\t{}\t{}\t{}",
                o.score(self.weight),
                o.possible(self.weight),
                o.errors,
                o.entry.name
            )?;
        }
        write!(f, "Total points: {}/{}", self.total(), self.possible())
    }
}

pub fn run<R: Rng>(config: &Config, rng: &mut R) -> Report {
    let outcomes = config
        .selected()
        .into_iter()
        .map(|entry| check_entry(entry, config, rng))
        .collect();
    Report {
        outcomes,
        weight: config.weight,
    }
}
