use crate::error::{Error, Result};

/// Default ceiling on the number of variables accepted by either pipeline.
pub const DEFAULT_MAX_VARIABLES: usize = 16;

/// Minterms are `u64`, so no configuration may go beyond this.
pub const HARD_MAX_VARIABLES: usize = 63;

/// Limits applied before any exponential allocation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_variables: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
        }
    }
}

impl Config {
    /// A configuration with the given ceiling, clamped to [`HARD_MAX_VARIABLES`].
    pub fn with_max_variables(max_variables: usize) -> Self {
        Self {
            max_variables: max_variables.min(HARD_MAX_VARIABLES),
        }
    }

    pub fn check(&self, count: usize) -> Result<()> {
        let limit = self.max_variables.min(HARD_MAX_VARIABLES);

        if count > limit {
            Err(Error::TooManyVariables { count, limit })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        let config = Config::with_max_variables(4);
        assert!(config.check(4).is_ok());
        assert!(matches!(
            config.check(5),
            Err(Error::TooManyVariables { count: 5, limit: 4 })
        ));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Config::with_max_variables(1000).max_variables, HARD_MAX_VARIABLES);
        let config = Config {
            max_variables: 1000,
        };
        assert!(config.check(64).is_err());
    }
}
