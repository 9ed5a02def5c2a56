// Search Configuration
// Caps and scan orders for the factor and exponent searches

/// Default cap on recurrence steps for a single rho search
pub const DEFAULT_MAX_STEPS: u64 = 10_000_000;

/// Order in which candidate public exponents are scanned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Ascending from 2
    #[default]
    Ascending,
    /// Start at a uniformly random point, wrapping around to 2
    RandomOffset,
    /// Like `RandomOffset`, with a reproducible generator
    Seeded(u64),
}

/// Configuration for Pollard's rho
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactorConfig {
    /// Cap on recurrence steps per factor search. `None` never gives up.
    pub max_steps: Option<u64>,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            max_steps: Some(DEFAULT_MAX_STEPS),
        }
    }
}

impl FactorConfig {
    pub fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.max_steps = None;
        self
    }
}

/// Configuration for key derivation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyConfig {
    pub order: ScanOrder,
    /// Cap on candidates tried by each exponent scan
    pub max_candidates: Option<u64>,
    /// Reject non-prime or equal p and q before deriving
    pub check_primes: bool,
}

impl KeyConfig {
    pub fn with_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_order(ScanOrder::Seeded(seed))
    }

    pub fn with_max_candidates(mut self, limit: u64) -> Self {
        self.max_candidates = Some(limit);
        self
    }

    pub fn with_prime_check(mut self, enabled: bool) -> Self {
        self.check_primes = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(FactorConfig::default().max_steps, Some(DEFAULT_MAX_STEPS));

        let keys = KeyConfig::default();
        assert_eq!(keys.order, ScanOrder::Ascending);
        assert_eq!(keys.max_candidates, None);
        assert!(!keys.check_primes);
    }

    #[test]
    fn test_builders() {
        assert_eq!(FactorConfig::default().unbounded().max_steps, None);
        assert_eq!(FactorConfig::default().with_max_steps(5).max_steps, Some(5));

        let keys = KeyConfig::default()
            .with_seed(42)
            .with_max_candidates(10)
            .with_prime_check(true);
        assert_eq!(keys.order, ScanOrder::Seeded(42));
        assert_eq!(keys.max_candidates, Some(10));
        assert!(keys.check_primes);
    }
}
