//! Quine–McCluskey prime implicant generation.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::term::{Minterm, Term};

/// A prime implicant together with the minterms it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeImplicant {
    pub term: Term,
    pub minterms: BTreeSet<Minterm>,
}

impl PrimeImplicant {
    pub fn covers(&self, minterm: Minterm) -> bool {
        self.minterms.contains(&minterm)
    }
}

// a term of the current round; `absorbed` is set once it merged with a neighbour
#[derive(Debug)]
struct Candidate {
    term: Term,
    minterms: BTreeSet<Minterm>,
    absorbed: bool,
}

impl Candidate {
    const fn new(term: Term, minterms: BTreeSet<Minterm>) -> Self {
        Self {
            term,
            minterms,
            absorbed: false,
        }
    }
}

/// Computes every prime implicant of the function whose on-set plus don't-care
/// set is `universe`.
///
/// Duplicate minterms are ignored. The resulting set of terms does not depend on
/// the order of `universe`.
pub fn generate_prime_implicants(universe: &[Minterm], n: usize) -> Vec<PrimeImplicant> {
    let mut current: Vec<Candidate> = universe
        .iter()
        .unique()
        .map(|&m| Candidate::new(Term::from_minterm(m, n), BTreeSet::from([m])))
        .collect();

    let mut primes: Vec<PrimeImplicant> = Vec::new();
    let mut recorded: FxHashSet<Term> = FxHashSet::default();
    let mut round = 0;

    while !current.is_empty() {
        round += 1;

        let groups: BTreeMap<usize, Vec<usize>> =
            current
                .iter()
                .enumerate()
                .fold(BTreeMap::new(), |mut groups, (i, candidate)| {
                    groups
                        .entry(candidate.term.count_ones())
                        .or_insert_with(Vec::new)
                        .push(i);
                    groups
                });

        let mut next: Vec<Candidate> = Vec::new();
        let mut merged_terms: FxHashSet<Term> = FxHashSet::default();

        for (ones, lower) in &groups {
            let Some(upper) = groups.get(&(ones + 1)) else {
                continue;
            };

            for &i in lower {
                for &j in upper {
                    let Some(merged) = current[i].term.combine(&current[j].term) else {
                        continue;
                    };

                    if merged_terms.insert(merged.clone()) {
                        let minterms = current[i]
                            .minterms
                            .union(&current[j].minterms)
                            .copied()
                            .collect();
                        next.push(Candidate::new(merged, minterms));
                    }

                    current[i].absorbed = true;
                    current[j].absorbed = true;
                }
            }
        }

        for candidate in current.into_iter().filter(|c| !c.absorbed) {
            // the first recording of a term wins; its expansion never differs
            if recorded.insert(candidate.term.clone()) {
                trace!("round {round}: prime {}", candidate.term);
                primes.push(PrimeImplicant {
                    term: candidate.term,
                    minterms: candidate.minterms,
                });
            }
        }

        debug!("round {round}: {} merged terms", next.len());

        current = next;
    }

    primes
}
