//! Exhaustive search configuration.

/// Configuration for the backtracking search.
///
/// # Examples
///
/// ```
/// use u_queens::exhaustive::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default().with_max_solutions(1);
/// assert_eq!(config.max_solutions, 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExhaustiveConfig {
    /// Stop after this many solutions. 0 = enumerate all.
    pub max_solutions: usize,
}

impl ExhaustiveConfig {
    /// Sets the solution limit (0 = no limit).
    pub fn with_max_solutions(mut self, n: usize) -> Self {
        self.max_solutions = n;
        self
    }
}
