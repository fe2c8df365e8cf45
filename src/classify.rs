//! Hand classification.
//!
//! Each category is tested on its own, so a hand can match several at once:
//! a seven-card royal flush is also a flush and may hold a pair. Only
//! [`HandCategory::HighCard`] excludes the others.

use core::fmt;

use crate::card::{ACE, Card, JACK, KING, QUEEN, Suit};
use crate::hand::Hand;

/// Hand categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// Two cards of one rank.
    Pair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks, ace low.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of one rank plus two of another.
    FullHouse,
    /// Five consecutive ranks in one suit, ace low.
    StraightFlush,
    /// Ten through ace in one suit.
    RoyalFlush,
    /// None of the above.
    HighCard,
}

impl HandCategory {
    /// All categories, in report order.
    pub const ALL: [Self; 9] = [
        Self::Pair,
        Self::ThreeOfAKind,
        Self::FourOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::StraightFlush,
        Self::RoyalFlush,
        Self::HighCard,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Row label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pair => "Pair",
            Self::ThreeOfAKind => "Three of a kind",
            Self::FourOfAKind => "Four of a kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full house",
            Self::StraightFlush => "Straight flush",
            Self::RoyalFlush => "Royal flush",
            Self::HighCard => "High card (none of the above)",
        }
    }

    /// Position of the category in [`HandCategory::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of cards of each rank. Index 0 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankCounts([u8; 14]);

impl RankCounts {
    /// Counts the ranks of `cards`. Ranks outside 1..=13 are ignored.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 14];
        for card in cards {
            if (ACE..=KING).contains(&card.rank()) {
                let count = &mut counts[card.rank() as usize];
                *count = count.saturating_add(1);
            }
        }
        Self(counts)
    }

    /// Number of cards of `rank`.
    #[must_use]
    pub fn get(&self, rank: u8) -> u8 {
        if (ACE..=KING).contains(&rank) {
            self.0[rank as usize]
        } else {
            0
        }
    }

    /// Iterates `(rank, count)` from ace up to king.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (ACE..=KING).map(|rank| (rank, self.0[rank as usize]))
    }

    /// Length of the longest run of consecutive present ranks, ace low.
    #[must_use]
    pub fn longest_run(&self) -> usize {
        let mut streak = 0;
        let mut longest = 0;

        for (_, count) in self.iter() {
            if count >= 1 {
                streak += 1;
                longest = longest.max(streak);
            } else {
                streak = 0;
            }
        }

        longest
    }
}

/// Number of cards of each suit, indexed by [`Suit::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuitCounts([u8; 4]);

impl SuitCounts {
    /// Counts the suits of `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for card in cards {
            let count = &mut counts[card.suit().index()];
            *count = count.saturating_add(1);
        }
        Self(counts)
    }

    /// Number of cards of `suit`.
    #[must_use]
    pub const fn get(&self, suit: Suit) -> u8 {
        self.0[suit.index()]
    }

    /// Iterates `(suit, count)` in [`Suit::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, u8)> + '_ {
        Suit::ALL.into_iter().map(|suit| (suit, self.get(suit)))
    }
}

/// Bit `r` is set when rank `r` is present.
type RankMask = u16;

const fn rank_bit(rank: u8) -> RankMask {
    1 << rank
}

const fn run_mask(low: u8) -> RankMask {
    rank_bit(low)
        | rank_bit(low + 1)
        | rank_bit(low + 2)
        | rank_bit(low + 3)
        | rank_bit(low + 4)
}

const ROYAL_MASK: RankMask =
    rank_bit(ACE) | rank_bit(10) | rank_bit(JACK) | rank_bit(QUEEN) | rank_bit(KING);

/// Highest starting rank of an ace-low straight flush (9 through king).
const LAST_RUN_START: u8 = KING - 4;

/// The classification of one hand.
///
/// The rank and suit tables are built once in [`Evaluation::of`] and shared
/// by every predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    ranks: RankCounts,
    suits: SuitCounts,
    by_suit: [RankMask; 4],
}

impl Evaluation {
    /// Builds the rank and suit tables for `hand`.
    ///
    /// # Example
    ///
    /// ```
    /// use handfreq::{Card, Evaluation, Hand, HandCategory, Suit};
    ///
    /// let hand: Hand = [(Suit::Clubs, 3), (Suit::Hearts, 3), (Suit::Spades, 3), (Suit::Clubs, 5), (Suit::Hearts, 5)]
    ///     .into_iter()
    ///     .map(|(suit, rank)| Card::new(suit, rank))
    ///     .collect();
    /// let eval = Evaluation::of(&hand);
    ///
    /// assert!(eval.has_full_house());
    /// assert!(eval.matches(HandCategory::Pair));
    /// assert!(!eval.is_high_card());
    /// ```
    #[must_use]
    pub fn of(hand: &Hand) -> Self {
        Self::from_cards(hand.cards())
    }

    /// Builds the rank and suit tables for a slice of cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut by_suit = [0; 4];
        for card in cards {
            if (ACE..=KING).contains(&card.rank()) {
                by_suit[card.suit().index()] |= rank_bit(card.rank());
            }
        }

        Self {
            ranks: RankCounts::from_cards(cards),
            suits: SuitCounts::from_cards(cards),
            by_suit,
        }
    }

    /// The rank-count table.
    #[must_use]
    pub const fn rank_counts(&self) -> &RankCounts {
        &self.ranks
    }

    /// The suit-count table.
    #[must_use]
    pub const fn suit_counts(&self) -> &SuitCounts {
        &self.suits
    }

    /// Returns whether some rank appears at least `n` times.
    #[must_use]
    pub fn has_value_count(&self, n: u8) -> bool {
        self.ranks.iter().any(|(_, count)| count >= n)
    }

    /// Returns whether the hand holds a pair.
    #[must_use]
    pub fn has_pair(&self) -> bool {
        self.has_value_count(2)
    }

    /// Returns whether the hand holds three of a kind.
    #[must_use]
    pub fn has_three_of_a_kind(&self) -> bool {
        self.has_value_count(3)
    }

    /// Returns whether the hand holds four of a kind.
    #[must_use]
    pub fn has_four_of_a_kind(&self) -> bool {
        self.has_value_count(4)
    }

    /// Returns whether five consecutive ranks are present.
    ///
    /// Aces rank low only, so 10 J Q K A is not a straight.
    #[must_use]
    pub fn has_straight(&self) -> bool {
        self.ranks.longest_run() >= 5
    }

    /// Returns whether some suit has at least five cards.
    #[must_use]
    pub fn has_flush(&self) -> bool {
        self.suits.iter().any(|(_, count)| count >= 5)
    }

    /// Returns whether the hand holds a full house.
    ///
    /// The lowest rank with three or more cards is set aside entirely, then
    /// any remaining rank with two or more cards completes the house. Four of
    /// a kind plus a single card is therefore not a full house.
    #[must_use]
    pub fn has_full_house(&self) -> bool {
        let Some((trips, _)) = self.ranks.iter().find(|&(_, count)| count >= 3) else {
            return false;
        };

        self.ranks
            .iter()
            .any(|(rank, count)| rank != trips && count >= 2)
    }

    /// Returns whether five consecutive ranks share a suit, ace low.
    #[must_use]
    pub fn has_straight_flush(&self) -> bool {
        self.by_suit.iter().any(|&present| {
            (ACE..=LAST_RUN_START).any(|low| present & run_mask(low) == run_mask(low))
        })
    }

    /// Returns whether one suit holds ace, ten, jack, queen and king.
    #[must_use]
    pub fn has_royal_flush(&self) -> bool {
        self.by_suit
            .iter()
            .any(|&present| present & ROYAL_MASK == ROYAL_MASK)
    }

    /// Returns whether no other category matches.
    #[must_use]
    pub fn is_high_card(&self) -> bool {
        !(self.has_pair()
            || self.has_three_of_a_kind()
            || self.has_four_of_a_kind()
            || self.has_straight()
            || self.has_flush()
            || self.has_full_house()
            || self.has_straight_flush()
            || self.has_royal_flush())
    }

    /// Returns whether the hand matches `category`.
    #[must_use]
    pub fn matches(&self, category: HandCategory) -> bool {
        match category {
            HandCategory::Pair => self.has_pair(),
            HandCategory::ThreeOfAKind => self.has_three_of_a_kind(),
            HandCategory::FourOfAKind => self.has_four_of_a_kind(),
            HandCategory::Straight => self.has_straight(),
            HandCategory::Flush => self.has_flush(),
            HandCategory::FullHouse => self.has_full_house(),
            HandCategory::StraightFlush => self.has_straight_flush(),
            HandCategory::RoyalFlush => self.has_royal_flush(),
            HandCategory::HighCard => self.is_high_card(),
        }
    }

    /// Iterates the categories the hand matches, in report order.
    pub fn categories(&self) -> impl Iterator<Item = HandCategory> + '_ {
        HandCategory::ALL
            .into_iter()
            .filter(|&category| self.matches(category))
    }
}
