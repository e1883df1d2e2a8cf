use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    str::FromStr,
};

use rustc_hash::FxHashSet;

use crate::error::FormatError;
use crate::symbols::Variable;
use crate::term::{Minterm, Term};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Single position of a truth-table pattern, or the output column of a row.
///
/// In a pattern, [`True`] and [`False`] fix the variable at that position;
/// [`Any`] marks an absent literal. In the output column, [`True`] marks a care
/// row and [`Any`] a don't-care row.
///
/// The declaration order matches the ASCII order of `-`, `0` and `1`, so
/// comparing entry sequences is the same as comparing their strings.
///
/// [`Any`]: TruthTableEntry::Any
/// [`True`]: TruthTableEntry::True
/// [`False`]: TruthTableEntry::False
pub enum TruthTableEntry {
    /// Either value (`-`)
    Any,
    /// Only false (`0`)
    False,
    /// Only true (`1`)
    True,
}

impl TruthTableEntry {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::False),
            '1' => Some(Self::True),
            '-' => Some(Self::Any),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::False => '0',
            Self::True => '1',
            Self::Any => '-',
        }
    }

    pub fn is_true(self) -> bool {
        self == Self::True
    }

    pub fn is_false(self) -> bool {
        self == Self::False
    }

    pub fn is_any(self) -> bool {
        self == Self::Any
    }
}

impl Display for TruthTableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for TruthTableEntry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
        .ok_or_else(|| anyhow::anyhow!("cannot parse {s} as truth-table entry"))
    }
}

/// A single-output truth table: ordered variables, care patterns and
/// don't-care patterns. Rows with any other output value are not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    pub vars: Vec<Variable>,
    pub output_name: Option<String>,
    pub care: Vec<Term>,
    pub dont_care: Vec<Term>,
}

impl TruthTable {
    /// Creates a table, checking that every pattern has one position per variable.
    pub fn new(
        vars: Vec<Variable>,
        care: Vec<Term>,
        dont_care: Vec<Term>,
    ) -> Result<Self, FormatError> {
        let expected = vars.len();

        if let Some(term) = care
            .iter()
            .chain(dont_care.iter())
            .find(|t| t.len() != expected)
        {
            return Err(FormatError::PatternLengthMismatch {
                line: 0,
                expected,
                actual: term.len(),
            });
        }

        Ok(Self {
            vars,
            output_name: None,
            care,
            dont_care,
        })
    }

    pub fn with_output_name(mut self, name: &str) -> Self {
        self.output_name = Some(name.to_string());
        self
    }

    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// The required set: every minterm reachable by expanding a care pattern.
    pub fn care_minterms(&self) -> BTreeSet<Minterm> {
        self.care.iter().flat_map(Term::expand).collect()
    }

    pub fn dont_care_minterms(&self) -> BTreeSet<Minterm> {
        self.dont_care.iter().flat_map(Term::expand).collect()
    }

    /// Care and don't-care minterms together, deduplicated.
    pub fn universe(&self) -> BTreeSet<Minterm> {
        self.care
            .iter()
            .chain(self.dont_care.iter())
            .flat_map(Term::expand)
            .collect()
    }

    /// Full assignment strings reachable by expanding a care pattern.
    pub fn care_assignments(&self) -> FxHashSet<String> {
        let n = self.num_vars();

        self.care
            .iter()
            .flat_map(Term::expand)
            .map(|m| Term::from_minterm(m, n).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(care: &[&str], dont_care: &[&str]) -> TruthTable {
        let parse = |p: &&str| p.parse::<Term>().unwrap();
        let n = care.iter().chain(dont_care).map(|p| p.len()).next().unwrap_or(0);
        TruthTable::new(
            Variable::default_names(n),
            care.iter().map(parse).collect(),
            dont_care.iter().map(parse).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_entry_order_matches_ascii() {
        assert!(TruthTableEntry::Any < TruthTableEntry::False);
        assert!(TruthTableEntry::False < TruthTableEntry::True);
        assert!('-' < '0' && '0' < '1');
    }

    #[test]
    fn test_entry_from_str() {
        assert_eq!("1".parse::<TruthTableEntry>().unwrap(), TruthTableEntry::True);
        assert_eq!("-".parse::<TruthTableEntry>().unwrap(), TruthTableEntry::Any);
        assert!("10".parse::<TruthTableEntry>().is_err());
        assert!("x".parse::<TruthTableEntry>().is_err());
    }

    #[test]
    fn test_universe_is_union() {
        let t = table(&["00", "1-"], &["01", "11"]);
        assert_eq!(t.care_minterms(), BTreeSet::from([0, 2, 3]));
        assert_eq!(t.dont_care_minterms(), BTreeSet::from([1, 3]));
        assert_eq!(t.universe(), BTreeSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn test_care_assignments_ignore_dont_cares() {
        let t = table(&["1-"], &["00"]);
        let assignments = t.care_assignments();
        assert_eq!(assignments.len(), 2);
        assert!(assignments.contains("10"));
        assert!(assignments.contains("11"));
        assert!(!assignments.contains("00"));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let result = TruthTable::new(
            Variable::default_names(3),
            vec!["01".parse().unwrap()],
            vec![],
        );
        assert!(matches!(
            result,
            Err(FormatError::PatternLengthMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }
}
