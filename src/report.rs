//! Frequency table and CSV output.

use core::fmt;

use alloc::vec::Vec;

use crate::classify::{Evaluation, HandCategory};
use crate::error::ReportError;

type Counts = [u64; HandCategory::COUNT];

/// Category counts for each simulated hand size.
///
/// Rendered with [`Display`](fmt::Display) as CSV:
///
/// ```text
/// Hand type,5 cards,7 cards
/// Pair,0.493300,0.791800
/// ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    hand_sizes: Vec<usize>,
    /// Hands recorded per column.
    trials: Vec<u64>,
    counts: Vec<Counts>,
}

impl FrequencyTable {
    /// Creates an empty table with one column per hand size.
    #[must_use]
    pub fn new(hand_sizes: Vec<usize>) -> Self {
        let columns = hand_sizes.len();
        Self {
            hand_sizes,
            trials: alloc::vec![0; columns],
            counts: alloc::vec![[0; HandCategory::COUNT]; columns],
        }
    }

    /// Number of hands recorded in `column`.
    #[must_use]
    pub fn trials(&self, column: usize) -> u64 {
        self.trials.get(column).copied().unwrap_or(0)
    }

    /// Hand size of each column.
    #[must_use]
    pub fn hand_sizes(&self) -> &[usize] {
        &self.hand_sizes
    }

    /// Records one hand in `column`, counting every category it matches.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::UnknownColumn`] if `column` is out of range.
    /// Nothing is recorded in that case.
    pub fn record(&mut self, column: usize, evaluation: &Evaluation) -> Result<(), ReportError> {
        let columns = self.hand_sizes.len();
        let (Some(trials), Some(counts)) =
            (self.trials.get_mut(column), self.counts.get_mut(column))
        else {
            return Err(ReportError::UnknownColumn { column, columns });
        };

        *trials += 1;
        for category in evaluation.categories() {
            counts[category.index()] += 1;
        }
        Ok(())
    }

    /// Number of hands in `column` that matched `category`.
    #[must_use]
    pub fn count(&self, category: HandCategory, column: usize) -> u64 {
        self.counts
            .get(column)
            .map_or(0, |counts| counts[category.index()])
    }

    /// Fraction of the hands recorded in `column` that matched `category`.
    ///
    /// Always within `0.0..=1.0`. Returns 0 for a column with no hands.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for trial counts"
    )]
    pub fn frequency(&self, category: HandCategory, column: usize) -> f64 {
        let trials = self.trials(column);
        if trials == 0 {
            return 0.0;
        }
        self.count(category, column) as f64 / trials as f64
    }

    /// Writes the table as CSV.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    #[cfg(feature = "std")]
    pub fn write_csv<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }

    /// Writes the table as CSV to the file at `path`, replacing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    #[cfg(feature = "std")]
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hand type")?;
        for size in &self.hand_sizes {
            write!(f, ",{size} cards")?;
        }
        writeln!(f)?;

        for category in HandCategory::ALL {
            f.write_str(category.label())?;
            for column in 0..self.hand_sizes.len() {
                write!(f, ",{:.6}", self.frequency(category, column))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
