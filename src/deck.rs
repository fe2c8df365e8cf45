//! The deck of undrawn cards.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{ACE, Card, DECK_SIZE, KING, Suit};
use crate::error::DrawError;
use crate::hand::Hand;

/// The cards not yet drawn in a trial.
///
/// A deck starts with all 52 cards and only shrinks. Every drawn card moves
/// into exactly one [`Hand`], so a deck and the hands drawn from it never
/// share a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled 52-card deck.
    ///
    /// # Example
    ///
    /// ```
    /// use handfreq::{DECK_SIZE, Deck};
    ///
    /// assert_eq!(Deck::new().len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in ACE..=KING {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Removes and returns a uniformly random card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards are left.
    pub fn draw_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyDeck);
        }

        let index = rng.random_range(0..self.cards.len());
        Ok(self.cards.swap_remove(index))
    }

    /// Draws `count` cards into a new hand.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidDrawCount`] if `count` exceeds the cards
    /// left. The deck is left untouched in that case.
    pub fn draw_hand<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Hand, DrawError> {
        let mut hand = Hand::with_capacity(count);
        self.draw_into(&mut hand, count, rng)?;
        Ok(hand)
    }

    /// Draws `count` cards and appends them to `hand`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidDrawCount`] if `count` exceeds the cards
    /// left. Neither the deck nor the hand is modified in that case.
    pub fn draw_into<R: Rng + ?Sized>(
        &mut self,
        hand: &mut Hand,
        count: usize,
        rng: &mut R,
    ) -> Result<(), DrawError> {
        if count > self.cards.len() {
            return Err(DrawError::InvalidDrawCount {
                requested: count,
                remaining: self.cards.len(),
            });
        }

        for _ in 0..count {
            hand.add_card(self.draw_one(rng)?);
        }

        Ok(())
    }

    /// Returns the cards left in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
