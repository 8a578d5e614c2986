use std::error::Error;
use std::fs::File;
use std::io::{prelude::*, BufReader};

use crate::catalog::{self, Entry, ENTRIES, MAX_ARGS};
use crate::utils::bits;

pub const DEFAULT_TRIALS: u32 = 10_000;
const MAX_TRIALS: u32 = 10_000_000;

macro_rules! error {
    ($($args:tt)*) => {{
        return Err(format!($($args)*).into());
    }}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Only check this puzzle, by its exercise name.
    pub function: Option<String>,
    /// Evaluate the selected puzzle on these words instead of sweeping.
    pub fixed_args: [Option<i32>; MAX_ARGS],
    /// Random argument tuples per puzzle, on top of the corner cases.
    pub trials: u32,
    pub seed: Option<u64>,
    /// Uniform points per puzzle in place of its rating.
    pub weight: Option<u32>,
    /// Compact output for autograders.
    pub grade: bool,
}

/// Values given on the command line. Each one that is set replaces the
/// value read from the config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub function: Option<String>,
    pub fixed_args: [Option<i32>; MAX_ARGS],
    pub trials: Option<u32>,
    pub seed: Option<u64>,
    pub weight: Option<u32>,
    pub grade: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            function: None,
            fixed_args: [None; MAX_ARGS],
            trials: DEFAULT_TRIALS,
            seed: None,
            weight: None,
            grade: false,
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Config, Box<dyn Error>> {
        let file = File::open(path)?;
        Config::from_reader(BufReader::new(file))
    }

    /// Reads `key: value` lines. Blank lines and lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Config, Box<dyn Error>> {
        let mut config = Config::default();

        let lines = reader
            .lines()
            .filter_map(|line| line.ok())
            .map(|line| line.trim().to_owned())
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        for line in lines {
            let idx = match line.find(':') {
                Some(idx) => idx,
                None => error!("Expected 'key: value' but found '{}'.", line),
            };
            let (key, value) = line.split_at(idx);
            let mut value = value[1..].to_owned();
            value.retain(|c| !c.is_whitespace());

            match key.trim() {
                "trials" => config.trials = value.parse::<u32>()?,
                "seed" => config.seed = Some(value.parse::<u64>()?),
                "weight" => config.weight = Some(value.parse::<u32>()?),
                "function" => config.function = Some(value),
                "grade" => {
                    config.grade = match value.as_str() {
                        "y" => true,
                        "n" => false,
                        s => error!("Field 'grade' must be 'y' or 'n' but was {}", s),
                    }
                }
                k => error!("Unknown configuration key '{}'.", k),
            }
        }

        Ok(config)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if overrides.function.is_some() {
            self.function = overrides.function;
        }
        if overrides.fixed_args.iter().any(|a| a.is_some()) {
            self.fixed_args = overrides.fixed_args;
        }
        if let Some(trials) = overrides.trials {
            self.trials = trials;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.weight.is_some() {
            self.weight = overrides.weight;
        }
        if let Some(grade) = overrides.grade {
            self.grade = grade;
        }
    }

    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.trials > MAX_TRIALS {
            error!("{} trials requested but max is {}.", self.trials, MAX_TRIALS);
        }
        if self.weight == Some(0) {
            error!("Weight must be at least 1.");
        }

        let has_fixed = self.fixed_args.iter().any(|a| a.is_some());
        let entry = match &self.function {
            Some(name) => match catalog::find(name) {
                Some(entry) => entry,
                None => error!("No puzzle named '{}'.", name),
            },
            None if has_fixed => error!("Fixed arguments require a puzzle name (-f)."),
            None => return Ok(()),
        };

        for (idx, arg) in self.fixed_args.iter().enumerate() {
            let Some(x) = *arg else { continue };
            if idx >= entry.arity() {
                error!("{} takes {} arguments but argument {} was given.", entry.name, entry.arity(), idx + 1);
            }
            if !entry.in_range(idx, x) {
                let (lo, hi) = entry.ranges[idx];
                error!("Argument {} of {} is {} but must lie in [{}, {}].", idx + 1, entry.name, x, lo, hi);
            }
        }
        Ok(())
    }

    /// Puzzles to check, in catalogue order.
    pub fn selected(&self) -> Vec<&'static Entry> {
        match &self.function {
            Some(name) => catalog::find(name).into_iter().collect(),
            None => ENTRIES.iter().collect(),
        }
    }

    /// The fixed argument tuple for `entry`, if any were given.
    ///
    /// Missing arguments take the in-range value closest to zero.
    pub fn fixed_for(&self, entry: &Entry) -> Option<[i32; MAX_ARGS]> {
        if self.fixed_args.iter().all(|a| a.is_none()) {
            return None;
        }
        let mut args = [0; MAX_ARGS];
        for (idx, slot) in args.iter_mut().enumerate() {
            let (lo, hi) = entry.ranges[idx];
            *slot = self.fixed_args[idx].unwrap_or_else(|| 0i32.clamp(lo, hi));
        }
        Some(args)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.function {
            Some(name) => writeln!(f, "Checking {} only.", name)?,
            None => writeln!(f, "Checking all {} puzzles.", ENTRIES.len())?,
        }
        let fixed: Vec<String> = self.fixed_args.iter().flatten().map(|&x| bits::fmt_word(x)).collect();
        if fixed.is_empty() {
            writeln!(f, "Each puzzle gets its corner cases plus {} random trials.", self.trials)?;
        } else {
            writeln!(f, "Fixed arguments: {}.", fixed.join(", "))?;
        }
        if let Some(seed) = self.seed {
            writeln!(f, "Random seed is {}.", seed)?;
        }
        if let Some(weight) = self.weight {
            writeln!(f, "Every puzzle is worth {} points.", weight)?;
        }
        Ok(())
    }
}
