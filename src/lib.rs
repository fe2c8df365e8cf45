//! Monte Carlo poker hand frequencies with optional `no_std` support.
//!
//! The crate draws random hands from a standard 52-card deck, tests each
//! hand against the poker categories (pair through royal flush), and tallies
//! how often each category shows up for every configured hand size.
//!
//! # Example
//!
//! ```no_run
//! use handfreq::{Simulation, SimulationOptions};
//!
//! let options = SimulationOptions::default();
//! let table = Simulation::new(options, 42).run().unwrap();
//! table.save("out.csv").unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod classify;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod report;
pub mod simulation;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use classify::{Evaluation, HandCategory, RankCounts, SuitCounts};
pub use deck::Deck;
pub use error::{DrawError, ReportError, SimulationError};
pub use hand::Hand;
pub use options::SimulationOptions;
pub use report::FrequencyTable;
pub use simulation::Simulation;
