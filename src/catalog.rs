use crate::{oracle, puzzles};

/// Largest number of arguments any puzzle takes.
pub const MAX_ARGS: usize = 3;

/// Inclusive range every unconstrained argument draws from.
pub const FULL_RANGE: (i32, i32) = (i32::MIN, i32::MAX);

/// Range of a byte index.
pub const BYTE_INDEX_RANGE: (i32, i32) = (0, 3);

#[derive(Copy, Clone, Debug)]
pub enum Kernel {
    Unary(fn(i32) -> i32),
    Binary(fn(i32, i32) -> i32),
    Ternary(fn(i32, i32, i32) -> i32),
}

impl Kernel {
    pub fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
            Self::Ternary(_) => 3,
        }
    }

    /// Calls the kernel with the leading `arity()` words of `args`.
    pub fn call(&self, args: &[i32; MAX_ARGS]) -> i32 {
        match self {
            Self::Unary(f) => f(args[0]),
            Self::Binary(f) => f(args[0], args[1]),
            Self::Ternary(f) => f(args[0], args[1], args[2]),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Entry {
    pub name: &'static str,
    /// Difficulty tier, also the points awarded for a clean pass.
    pub rating: u32,
    /// Operator budget allowed by the exercise rules.
    pub max_ops: u32,
    pub ranges: [(i32, i32); MAX_ARGS],
    pub puzzle: Kernel,
    pub oracle: Kernel,
}

impl Entry {
    pub fn arity(&self) -> usize {
        self.puzzle.arity()
    }

    /// Ranges of the arguments this entry actually takes.
    pub fn arg_ranges(&self) -> &[(i32, i32)] {
        &self.ranges[..self.arity()]
    }

    pub fn in_range(&self, idx: usize, x: i32) -> bool {
        let (lo, hi) = self.ranges[idx];
        lo <= x && x <= hi
    }
}

pub static ENTRIES: [Entry; 8] = [
    Entry {
        name: "bitNor",
        rating: 1,
        max_ops: 8,
        ranges: [FULL_RANGE; MAX_ARGS],
        puzzle: Kernel::Binary(puzzles::bit_nor),
        oracle: Kernel::Binary(oracle::bit_nor),
    },
    Entry {
        name: "isEqual",
        rating: 2,
        max_ops: 5,
        ranges: [FULL_RANGE; MAX_ARGS],
        puzzle: Kernel::Binary(puzzles::is_equal),
        oracle: Kernel::Binary(oracle::is_equal),
    },
    Entry {
        name: "byteSwap",
        rating: 2,
        max_ops: 25,
        ranges: [FULL_RANGE, BYTE_INDEX_RANGE, BYTE_INDEX_RANGE],
        puzzle: Kernel::Ternary(puzzles::byte_swap),
        oracle: Kernel::Ternary(oracle::byte_swap),
    },
    Entry {
        name: "subtractionOK",
        rating: 3,
        max_ops: 20,
        ranges: [FULL_RANGE; MAX_ARGS],
        puzzle: Kernel::Binary(puzzles::subtraction_ok),
        oracle: Kernel::Binary(oracle::subtraction_ok),
    },
    Entry {
        name: "isGreater",
        rating: 3,
        max_ops: 24,
        ranges: [FULL_RANGE; MAX_ARGS],
        puzzle: Kernel::Binary(puzzles::is_greater),
        oracle: Kernel::Binary(oracle::is_greater),
    },
    Entry {
        name: "multFiveEighths",
        rating: 3,
        max_ops: 12,
        ranges: [FULL_RANGE; MAX_ARGS],
        puzzle: Kernel::Unary(puzzles::mult_five_eighths),
        oracle: Kernel::Unary(oracle::mult_five_eighths),
    },
    Entry {
        name: "twosComp2SignMag",
        rating: 4,
        max_ops: 15,
        ranges: [FULL_RANGE; MAX_ARGS],
        puzzle: Kernel::Unary(puzzles::twos_comp_to_sign_mag),
        oracle: Kernel::Unary(oracle::twos_comp_to_sign_mag),
    },
    Entry {
        name: "howManyBits",
        rating: 4,
        max_ops: 90,
        ranges: [FULL_RANGE; MAX_ARGS],
        puzzle: Kernel::Unary(puzzles::how_many_bits),
        oracle: Kernel::Unary(oracle::how_many_bits),
    },
];

pub fn find(name: &str) -> Option<&'static Entry> {
    ENTRIES.iter().find(|e| e.name == name)
}
