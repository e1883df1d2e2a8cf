//! Checkpoint hooks for the minimization pipeline.
//!
//! The algorithms never print; anything that wants to follow their progress
//! implements [`MinimizeObserver`] and is handed to [`crate::minimize::Minimizer`].

use itertools::Itertools;
use log::{debug, trace};

use crate::qm::PrimeImplicant;
use crate::term::Minterm;

pub trait MinimizeObserver {
    /// Called once, after the full prime-implicant set is known.
    fn prime_implicants_generated(&mut self, _primes: &[PrimeImplicant]) {}

    /// Called after each essential prime implicant is added to the solution.
    fn essential_selected(&mut self, _prime: &PrimeImplicant, _newly_covered: &[Minterm]) {}

    /// Called after each greedy pick.
    fn greedy_selected(&mut self, _prime: &PrimeImplicant, _newly_covered: &[Minterm]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MinimizeObserver for NoopObserver {}

/// Forwards every checkpoint to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl MinimizeObserver for LogObserver {
    fn prime_implicants_generated(&mut self, primes: &[PrimeImplicant]) {
        debug!("{} prime implicants", primes.len());
        for prime in primes {
            trace!("  {} covers {:?}", prime.term, prime.minterms);
        }
    }

    fn essential_selected(&mut self, prime: &PrimeImplicant, newly_covered: &[Minterm]) {
        debug!(
            "essential {} covers {{{}}}",
            prime.term,
            newly_covered.iter().join(", ")
        );
    }

    fn greedy_selected(&mut self, prime: &PrimeImplicant, newly_covered: &[Minterm]) {
        debug!(
            "greedy {} covers {{{}}}",
            prime.term,
            newly_covered.iter().join(", ")
        );
    }
}
