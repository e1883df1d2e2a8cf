//! Two-level minimization of a truth table.

use itertools::Itertools;
use log::debug;

use crate::config::Config;
use crate::cover::{select_cover, Solution};
use crate::error::Result;
use crate::observer::{MinimizeObserver, NoopObserver};
use crate::qm::generate_prime_implicants;
use crate::truth_table::TruthTable;

/// Runs prime implicant generation followed by cover selection.
pub struct Minimizer<O: MinimizeObserver = NoopObserver> {
    config: Config,
    observer: O,
}

impl Default for Minimizer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Minimizer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            observer: NoopObserver,
        }
    }
}

impl<O: MinimizeObserver> Minimizer<O> {
    pub fn with_observer(config: Config, observer: O) -> Self {
        Self { config, observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Computes a sum-of-products cover of the care set of `table`.
    ///
    /// Don't-cares only widen the prime implicants; they are never required.
    pub fn minimize(&mut self, table: &TruthTable) -> Result<Solution> {
        self.config.check(table.num_vars())?;

        let universe = table.universe().into_iter().collect_vec();
        let required = table.care_minterms();

        debug!(
            "minimizing {} required minterms over a universe of {}",
            required.len(),
            universe.len()
        );

        let primes = generate_prime_implicants(&universe, table.num_vars());
        self.observer.prime_implicants_generated(&primes);

        let solution = select_cover(&primes, &required, &mut self.observer)?;

        debug!(
            "solution: {} terms, {} literals",
            solution.len(),
            solution.literal_count()
        );

        Ok(solution)
    }
}

/// Minimizes `table` with the default observer.
pub fn minimize(table: &TruthTable, config: Config) -> Result<Solution> {
    Minimizer::new(config).minimize(table)
}
