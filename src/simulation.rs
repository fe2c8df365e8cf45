//! Trial loop and tallying.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, trace};

use crate::card::DECK_SIZE;
use crate::classify::Evaluation;
use crate::deck::Deck;
use crate::error::{DrawError, SimulationError};
use crate::options::SimulationOptions;
use crate::report::FrequencyTable;

/// Runs repeated trials and tallies hand categories.
///
/// Every trial draws from its own fresh [`Deck`]. The only state carried
/// between trials is the random number generator.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Simulation options.
    pub options: SimulationOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates a new simulation with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use handfreq::{HandCategory, Simulation, SimulationOptions};
    ///
    /// let options = SimulationOptions::default().with_trials(200);
    /// let table = Simulation::new(options, 42).run().unwrap();
    ///
    /// assert_eq!(table.trials(1), 200);
    /// assert!(table.frequency(HandCategory::Pair, 1) > 0.0);
    /// ```
    #[must_use]
    pub fn new(options: SimulationOptions, seed: u64) -> Self {
        Self {
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draws one hand of `hand_size` cards from a fresh deck and classifies it.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidDrawCount`] if `hand_size` exceeds the
    /// deck size.
    pub fn run_trial(&mut self, hand_size: usize) -> Result<Evaluation, DrawError> {
        let mut deck = Deck::new();
        let hand = deck.draw_hand(hand_size, &mut self.rng)?;
        trace!(hand_size, remaining = deck.len(), "trial drawn");
        Ok(hand.evaluate())
    }

    /// Runs every configured trial and returns the category frequencies.
    ///
    /// Each trial draws one hand per configured hand size.
    ///
    /// # Errors
    ///
    /// Returns an error if the trial count is zero, no hand sizes are
    /// configured, or a hand size exceeds the deck size.
    #[instrument(level = "debug", skip(self), fields(trials = self.options.trials))]
    pub fn run(&mut self) -> Result<FrequencyTable, SimulationError> {
        self.validate()?;

        let sizes = self.options.hand_sizes.clone();
        let mut table = FrequencyTable::new(sizes.clone());
        debug!(hand_sizes = ?sizes, "simulation started");

        for _ in 0..self.options.trials {
            for (column, &size) in sizes.iter().enumerate() {
                let evaluation = self.run_trial(size)?;
                table.record(column, &evaluation)?;
            }
        }

        debug!("simulation finished");
        Ok(table)
    }

    fn validate(&self) -> Result<(), SimulationError> {
        if self.options.trials == 0 {
            return Err(SimulationError::NoTrials);
        }
        if self.options.hand_sizes.is_empty() {
            return Err(SimulationError::NoHandSizes);
        }
        if let Some(&size) = self.options.hand_sizes.iter().find(|&&size| size > DECK_SIZE) {
            return Err(SimulationError::HandSizeTooLarge { size });
        }
        Ok(())
    }
}
