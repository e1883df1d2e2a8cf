//! Selection of a small set of prime implicants covering every required minterm.
//!
//! Essential prime implicants are taken first; the rest of the cover is picked
//! greedily. The result is a valid cover but not necessarily a minimum one.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::observer::MinimizeObserver;
use crate::qm::PrimeImplicant;
use crate::term::{Minterm, Term};

/// An ordered cover: essential prime implicants first, then greedy picks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    terms: Vec<PrimeImplicant>,
}

impl Solution {
    pub fn terms(&self) -> &[PrimeImplicant] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> + '_ {
        self.terms.iter().map(|p| &p.term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total number of literals over all terms.
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(|p| p.term.literal_count()).sum()
    }

    /// Every minterm covered by at least one term of the solution.
    pub fn covered_minterms(&self) -> BTreeSet<Minterm> {
        self.terms
            .iter()
            .flat_map(|p| p.minterms.iter().copied())
            .collect()
    }
}

// greedy ranking: more uncovered minterms, then higher coverage per literal,
// then the lexicographically smaller term
fn rank(a: (&PrimeImplicant, usize), b: (&PrimeImplicant, usize)) -> Ordering {
    let (pa, ca) = a;
    let (pb, cb) = b;
    let (la, lb) = (pa.term.literal_count(), pb.term.literal_count());

    ca.cmp(&cb)
        .then_with(|| (ca * lb).cmp(&(cb * la)))
        .then_with(|| pb.term.cmp(&pa.term))
}

/// Picks prime implicants until every minterm in `required` is covered.
///
/// Fails with [`Error::UncoverableResidual`] if some required minterm is not
/// covered by any of `primes`.
pub fn select_cover(
    primes: &[PrimeImplicant],
    required: &BTreeSet<Minterm>,
    observer: &mut dyn MinimizeObserver,
) -> Result<Solution> {
    let mut solution = Solution::default();
    let mut selected: FxHashSet<Term> = FxHashSet::default();
    let mut uncovered: BTreeSet<Minterm> = required.clone();

    for &m in required {
        let mut covering = primes.iter().filter(|p| p.covers(m));

        let (Some(essential), None) = (covering.next(), covering.next()) else {
            continue;
        };

        if !selected.insert(essential.term.clone()) {
            continue;
        }

        let newly_covered: Vec<Minterm> = essential
            .minterms
            .iter()
            .copied()
            .filter(|c| uncovered.remove(c))
            .collect();

        trace!("minterm {m} makes {} essential", essential.term);
        observer.essential_selected(essential, &newly_covered);
        solution.terms.push(essential.clone());
    }

    debug!(
        "{} essential prime implicants, {} minterms left",
        solution.len(),
        uncovered.len()
    );

    while !uncovered.is_empty() {
        let best = primes
            .iter()
            .filter(|p| !selected.contains(&p.term))
            .map(|p| (p, p.minterms.intersection(&uncovered).count()))
            .filter(|&(_, count)| count > 0)
            .max_by(|&a, &b| rank(a, b));

        let Some((pick, _)) = best else {
            return Err(Error::UncoverableResidual {
                remaining: uncovered.into_iter().collect(),
            });
        };

        let newly_covered: Vec<Minterm> = pick
            .minterms
            .iter()
            .copied()
            .filter(|c| uncovered.remove(c))
            .collect();

        selected.insert(pick.term.clone());
        observer.greedy_selected(pick, &newly_covered);
        solution.terms.push(pick.clone());
    }

    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;
    use crate::qm::generate_prime_implicants;

    fn prime(term: &str) -> PrimeImplicant {
        let term: Term = term.parse().unwrap();
        PrimeImplicant {
            minterms: term.expand().into_iter().collect(),
            term,
        }
    }

    fn strings(solution: &Solution) -> Vec<String> {
        solution.iter().map(ToString::to_string).collect()
    }

    #[derive(Default)]
    struct Recorder {
        essentials: Vec<String>,
        greedy: Vec<String>,
    }

    impl MinimizeObserver for Recorder {
        fn essential_selected(&mut self, prime: &PrimeImplicant, _: &[Minterm]) {
            self.essentials.push(prime.term.to_string());
        }

        fn greedy_selected(&mut self, prime: &PrimeImplicant, _: &[Minterm]) {
            self.greedy.push(prime.term.to_string());
        }
    }

    #[test]
    fn test_empty_function() {
        let solution = select_cover(&[], &BTreeSet::new(), &mut NoopObserver).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.literal_count(), 0);
    }

    #[test]
    fn test_essentials_only() {
        let primes = vec![prime("00"), prime("11")];
        let required = BTreeSet::from([0, 3]);
        let mut recorder = Recorder::default();
        let solution = select_cover(&primes, &required, &mut recorder).unwrap();
        assert_eq!(strings(&solution), vec!["00", "11"]);
        assert_eq!(solution.literal_count(), 4);
        assert_eq!(recorder.essentials, vec!["00", "11"]);
        assert!(recorder.greedy.is_empty());
    }

    #[test]
    fn test_cyclic_cover_is_greedy() {
        // no essential prime implicants at all
        let primes = generate_prime_implicants(&[0, 1, 2, 5, 6, 7], 3);
        let required = BTreeSet::from([0, 1, 2, 5, 6, 7]);
        let mut recorder = Recorder::default();
        let solution = select_cover(&primes, &required, &mut recorder).unwrap();

        assert!(recorder.essentials.is_empty());
        // every candidate ties on count and ratio; the smallest string goes first
        assert_eq!(recorder.greedy[0], "-01");
        assert!(solution.covered_minterms().is_superset(&required));
        assert!(solution.len() <= 4);
    }

    #[test]
    fn test_prefers_larger_cube_on_tie() {
        // both cover the single uncovered minterm 3; "-1" has fewer literals
        let primes = vec![prime("11"), prime("-1")];
        let required = BTreeSet::from([3]);
        let solution = select_cover(&primes, &required, &mut NoopObserver).unwrap();
        // minterm 3 has two candidates, so nothing is essential
        assert_eq!(strings(&solution), vec!["-1"]);
    }

    #[test]
    fn test_uncoverable_residual() {
        let primes = vec![prime("00")];
        let required = BTreeSet::from([0, 3]);
        let result = select_cover(&primes, &required, &mut NoopObserver);
        match result {
            Err(Error::UncoverableResidual { remaining }) => assert_eq!(remaining, vec![3]),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_rank_ordering() {
        let a = prime("1--");
        let b = prime("11-");
        assert_eq!(rank((&a, 2), (&b, 1)), Ordering::Greater);
        assert_eq!(rank((&a, 2), (&b, 2)), Ordering::Greater);
        let c = prime("0--");
        assert_eq!(rank((&c, 2), (&a, 2)), Ordering::Greater);
    }
}
