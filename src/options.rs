//! Simulation configuration options.

use alloc::vec::Vec;

/// Configuration options for a frequency simulation.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use handfreq::SimulationOptions;
///
/// let options = SimulationOptions::default()
///     .with_trials(1_000)
///     .with_hand_sizes([5, 6, 7]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Number of trials per hand size.
    pub trials: u64,
    /// Hand sizes to simulate, one report column each.
    pub hand_sizes: Vec<usize>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            trials: 10_000,
            hand_sizes: alloc::vec![5, 7],
        }
    }
}

impl SimulationOptions {
    /// Sets the number of trials.
    ///
    /// # Example
    ///
    /// ```
    /// use handfreq::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_trials(500);
    /// assert_eq!(options.trials, 500);
    /// ```
    #[must_use]
    pub const fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the hand sizes to simulate.
    ///
    /// # Example
    ///
    /// ```
    /// use handfreq::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_hand_sizes([5]);
    /// assert_eq!(options.hand_sizes, vec![5]);
    /// ```
    #[must_use]
    pub fn with_hand_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.hand_sizes = sizes.into_iter().collect();
        self
    }
}
