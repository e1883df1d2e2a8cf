//! Cubes over `{0, 1, -}` and the minterm numbering convention.
//!
//! Pattern position `i` belongs to the variable with ordinal `i` and carries the
//! bit weight `2^(n - 1 - i)`: the first character is the most significant bit.
//! Expansion, binary-string construction and the BDD assignment path all use
//! this convention.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::truth_table::TruthTableEntry;

/// A fully specified assignment, numbered by the convention of this module.
pub type Minterm = u64;

/// A cube: one [`TruthTableEntry`] per variable.
///
/// A term with `k` dashes denotes `2^k` minterms. The derived ordering is the
/// lexicographic ordering of the term strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term(Vec<TruthTableEntry>);

impl Term {
    pub fn new(entries: Vec<TruthTableEntry>) -> Self {
        Self(entries)
    }

    /// The `n`-character binary form of `minterm`.
    pub fn from_minterm(minterm: Minterm, n: usize) -> Self {
        Self(
            (0..n)
                .map(|i| {
                    if (minterm >> (n - 1 - i)) & 1 == 1 {
                        TruthTableEntry::True
                    } else {
                        TruthTableEntry::False
                    }
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[TruthTableEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count_ones(&self) -> usize {
        self.0.iter().filter(|e| e.is_true()).count()
    }

    pub fn count_dashes(&self) -> usize {
        self.0.iter().filter(|e| e.is_any()).count()
    }

    /// Number of fixed positions, `n - count_dashes()`.
    pub fn literal_count(&self) -> usize {
        self.len() - self.count_dashes()
    }

    /// Merges two terms that differ in exactly one fixed position.
    ///
    /// Dash positions must match exactly; the differing position becomes a dash.
    pub fn combine(&self, other: &Self) -> Option<Self> {
        if self.len() != other.len() {
            return None;
        }

        let mut diff = None;

        for (i, (a, b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            if a == b {
                continue;
            }
            if a.is_any() || b.is_any() || diff.is_some() {
                return None;
            }
            diff = Some(i);
        }

        diff.map(|pos| {
            let mut merged = self.0.clone();
            merged[pos] = TruthTableEntry::Any;
            Self(merged)
        })
    }

    /// All minterms of this cube, in ascending order.
    pub fn expand(&self) -> Vec<Minterm> {
        let n = self.len();

        let base: Minterm = self
            .0
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_true())
            .fold(0, |acc, (i, _)| acc | (1 << (n - 1 - i)));

        // dash weights, most significant first
        let weights: Vec<Minterm> = self
            .0
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_any())
            .map(|(i, _)| 1 << (n - 1 - i))
            .collect();

        let k = weights.len();

        (0..(1u64 << k))
            .map(|combination| {
                weights
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| (combination >> (k - 1 - j)) & 1 == 1)
                    .fold(base, |acc, (_, w)| acc | w)
            })
            .collect()
    }

    /// Whether `minterm` lies inside this cube.
    pub fn covers(&self, minterm: Minterm) -> bool {
        let n = self.len();

        self.0.iter().enumerate().all(|(i, e)| {
            let bit = (minterm >> (n - 1 - i)) & 1 == 1;
            match e {
                TruthTableEntry::Any => true,
                TruthTableEntry::True => bit,
                TruthTableEntry::False => !bit,
            }
        })
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.0 {
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl FromStr for Term {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| {
                TruthTableEntry::from_char(c)
                    .ok_or_else(|| anyhow::anyhow!("invalid character '{c}' in term {s}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
