//! Hill climbing configuration.

/// Configuration for restart-based hill climbing.
///
/// # Examples
///
/// ```
/// use u_queens::hill::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_max_restarts(50)
///     .with_sideways_probability(0.25)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Maximum number of attempts, each from a fresh random board.
    pub max_restarts: usize,

    /// Probability of taking a move that ties the best count seen so far.
    pub sideways_probability: f64,

    /// Maximum committed moves per attempt. 0 = no limit.
    ///
    /// Boards without solutions (n = 2, 3) consist entirely of plateaus,
    /// so an unlimited attempt with a positive sideways probability never
    /// ends there.
    pub max_steps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_restarts: 20,
            sideways_probability: 0.4,
            max_steps: 1_000,
            seed: None,
        }
    }
}

impl HillClimbConfig {
    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    pub fn with_sideways_probability(mut self, p: f64) -> Self {
        self.sideways_probability = p;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_restarts == 0 {
            return Err("max_restarts must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.sideways_probability) {
            return Err(format!(
                "sideways_probability must be in [0, 1], got {}",
                self.sideways_probability
            ));
        }
        Ok(())
    }
}
