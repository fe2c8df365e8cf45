//! Error types for drawing and simulation.

use thiserror::Error;

/// Errors that can occur while drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// More cards requested than the deck holds. Nothing was drawn.
    #[error("cannot draw {requested} cards, only {remaining} left in the deck")]
    InvalidDrawCount {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur when recording into a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The column does not exist.
    #[error("column {column} out of range, table has {columns} columns")]
    UnknownColumn {
        /// The requested column.
        column: usize,
        /// Number of columns in the table.
        columns: usize,
    },
}

/// Errors that can occur when running a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The trial count is zero.
    #[error("trial count is zero")]
    NoTrials,
    /// No hand sizes were configured.
    #[error("no hand sizes configured")]
    NoHandSizes,
    /// A hand size exceeds the deck size.
    #[error("hand size {size} exceeds the deck size")]
    HandSizeTooLarge {
        /// The offending hand size.
        size: usize,
    },
    /// A draw failed during a trial.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// Recording a trial failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}
