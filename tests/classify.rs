//! Classifier integration tests.

use handfreq::{Card, Evaluation, Hand, HandCategory, Suit};

use handfreq::Suit::{Clubs, Diamonds, Hearts, Spades};

fn hand(cards: &[(Suit, u8)]) -> Hand {
    cards
        .iter()
        .map(|&(suit, rank)| Card::new(suit, rank))
        .collect()
}

fn eval(cards: &[(Suit, u8)]) -> Evaluation {
    hand(cards).evaluate()
}

fn categories(cards: &[(Suit, u8)]) -> Vec<HandCategory> {
    eval(cards).categories().collect()
}

#[test]
fn card_display_and_accessors() {
    let ace = Card::new(Spades, 1);
    assert_eq!(ace.suit(), Spades);
    assert_eq!(ace.rank(), 1);
    assert_eq!(ace.to_string(), "♠A");
    assert_eq!(Card::new(Hearts, 10).to_string(), "♥10");
    assert_eq!(Card::new(Diamonds, 12).to_string(), "♦Q");
    assert_eq!(Card::new(Clubs, 0).to_string(), "♣?");
}

#[test]
fn rank_and_suit_tables() {
    let e = eval(&[
        (Clubs, 3),
        (Hearts, 3),
        (Spades, 3),
        (Clubs, 13),
        (Hearts, 1),
    ]);

    assert_eq!(e.rank_counts().get(3), 3);
    assert_eq!(e.rank_counts().get(13), 1);
    assert_eq!(e.rank_counts().get(1), 1);
    assert_eq!(e.rank_counts().get(7), 0);
    assert_eq!(e.rank_counts().get(14), 0);
    assert_eq!(e.suit_counts().get(Clubs), 2);
    assert_eq!(e.suit_counts().get(Hearts), 2);
    assert_eq!(e.suit_counts().get(Spades), 1);
    assert_eq!(e.suit_counts().get(Diamonds), 0);
}

#[test]
fn straight_is_ace_low_only() {
    let wheel = eval(&[
        (Clubs, 1),
        (Hearts, 2),
        (Diamonds, 3),
        (Spades, 4),
        (Clubs, 5),
    ]);
    assert!(wheel.has_straight());

    let broadway = eval(&[
        (Spades, 10),
        (Spades, 11),
        (Spades, 12),
        (Spades, 13),
        (Spades, 1),
    ]);
    assert!(!broadway.has_straight());
    assert_eq!(broadway.rank_counts().longest_run(), 4);

    let king_high = eval(&[
        (Clubs, 9),
        (Hearts, 10),
        (Diamonds, 11),
        (Spades, 12),
        (Clubs, 13),
    ]);
    assert!(king_high.has_straight());
}

#[test]
fn straight_ignores_duplicate_ranks_and_needs_five() {
    let with_pair = eval(&[
        (Clubs, 2),
        (Hearts, 3),
        (Diamonds, 3),
        (Spades, 4),
        (Clubs, 5),
        (Hearts, 6),
    ]);
    assert!(with_pair.has_straight());
    assert!(with_pair.has_pair());

    let four_run = eval(&[
        (Clubs, 2),
        (Hearts, 3),
        (Diamonds, 4),
        (Spades, 5),
        (Clubs, 7),
        (Hearts, 8),
        (Diamonds, 9),
    ]);
    assert!(!four_run.has_straight());
}

#[test]
fn royal_flush_is_not_a_straight_flush() {
    let royal = eval(&[
        (Spades, 1),
        (Spades, 10),
        (Spades, 11),
        (Spades, 12),
        (Spades, 13),
    ]);

    assert!(royal.has_royal_flush());
    assert!(royal.has_flush());
    assert!(!royal.has_straight_flush());
    assert!(!royal.has_straight());
}

#[test]
fn straight_flush_needs_one_suit() {
    let nine_to_king = eval(&[
        (Hearts, 9),
        (Hearts, 10),
        (Hearts, 11),
        (Hearts, 12),
        (Hearts, 13),
    ]);
    assert!(nine_to_king.has_straight_flush());
    assert!(!nine_to_king.has_royal_flush());

    // Straight and flush, but not from the same five cards.
    let split = eval(&[
        (Spades, 2),
        (Spades, 3),
        (Spades, 4),
        (Spades, 5),
        (Hearts, 6),
        (Spades, 9),
    ]);
    assert!(split.has_straight());
    assert!(split.has_flush());
    assert!(!split.has_straight_flush());
}

#[test]
fn full_house_consumes_lowest_triple() {
    let house = eval(&[
        (Clubs, 3),
        (Hearts, 3),
        (Spades, 3),
        (Clubs, 5),
        (Hearts, 5),
    ]);
    assert!(house.has_full_house());

    let quads = eval(&[
        (Clubs, 3),
        (Hearts, 3),
        (Spades, 3),
        (Diamonds, 3),
        (Clubs, 5),
    ]);
    assert!(quads.has_four_of_a_kind());
    assert!(!quads.has_full_house());

    let two_triples = eval(&[
        (Clubs, 3),
        (Hearts, 3),
        (Spades, 3),
        (Clubs, 5),
        (Hearts, 5),
        (Spades, 5),
        (Clubs, 9),
    ]);
    assert!(two_triples.has_full_house());

    let high_triple = eval(&[
        (Clubs, 3),
        (Hearts, 3),
        (Clubs, 5),
        (Hearts, 5),
        (Spades, 5),
    ]);
    assert!(high_triple.has_full_house());

    let quads_and_pair = eval(&[
        (Clubs, 3),
        (Hearts, 3),
        (Spades, 3),
        (Diamonds, 3),
        (Clubs, 5),
        (Hearts, 5),
        (Clubs, 9),
    ]);
    assert!(quads_and_pair.has_full_house());

    let trips_only = eval(&[
        (Clubs, 3),
        (Hearts, 3),
        (Spades, 3),
        (Clubs, 5),
        (Hearts, 9),
    ]);
    assert!(!trips_only.has_full_house());
}

#[test]
fn value_counts() {
    let e = eval(&[
        (Clubs, 7),
        (Hearts, 7),
        (Spades, 7),
        (Diamonds, 7),
        (Clubs, 2),
    ]);
    assert!(e.has_value_count(1));
    assert!(e.has_value_count(4));
    assert!(!e.has_value_count(5));
    assert!(e.has_pair());
    assert!(e.has_three_of_a_kind());
    assert!(e.has_four_of_a_kind());
}

#[test]
fn curated_hands_match_expected_categories() {
    use handfreq::HandCategory::{
        Flush, FourOfAKind, FullHouse, HighCard, Pair, RoyalFlush, Straight, StraightFlush,
        ThreeOfAKind,
    };

    let cases: [(&[(Suit, u8)], &[HandCategory]); 9] = [
        (
            &[(Clubs, 2), (Hearts, 2), (Diamonds, 5), (Spades, 9), (Clubs, 13)],
            &[Pair],
        ),
        (
            &[(Clubs, 2), (Hearts, 2), (Diamonds, 2), (Spades, 9), (Clubs, 13)],
            &[Pair, ThreeOfAKind],
        ),
        (
            &[(Clubs, 2), (Hearts, 2), (Diamonds, 2), (Spades, 2), (Clubs, 13)],
            &[Pair, ThreeOfAKind, FourOfAKind],
        ),
        (
            &[(Clubs, 1), (Hearts, 2), (Diamonds, 3), (Spades, 4), (Clubs, 5)],
            &[Straight],
        ),
        (
            &[(Hearts, 2), (Hearts, 5), (Hearts, 9), (Hearts, 11), (Hearts, 13)],
            &[Flush],
        ),
        (
            &[(Clubs, 3), (Hearts, 3), (Spades, 3), (Clubs, 5), (Hearts, 5)],
            &[Pair, ThreeOfAKind, FullHouse],
        ),
        (
            &[(Spades, 5), (Spades, 6), (Spades, 7), (Spades, 8), (Spades, 9)],
            &[Straight, Flush, StraightFlush],
        ),
        (
            &[(Spades, 1), (Spades, 10), (Spades, 11), (Spades, 12), (Spades, 13)],
            &[Flush, RoyalFlush],
        ),
        (
            &[(Clubs, 2), (Hearts, 5), (Diamonds, 9), (Spades, 11), (Clubs, 13)],
            &[HighCard],
        ),
    ];

    for (cards, expected) in cases {
        let e = eval(cards);
        assert_eq!(categories(cards), expected, "hand {cards:?}");

        let any_other = e.has_pair()
            || e.has_three_of_a_kind()
            || e.has_four_of_a_kind()
            || e.has_straight()
            || e.has_flush()
            || e.has_full_house()
            || e.has_straight_flush()
            || e.has_royal_flush();
        assert_eq!(e.is_high_card(), !any_other, "hand {cards:?}");
    }
}

#[test]
fn seven_card_royal_flush_with_pair() {
    assert_eq!(
        categories(&[
            (Spades, 1),
            (Spades, 10),
            (Spades, 11),
            (Spades, 12),
            (Spades, 13),
            (Hearts, 1),
            (Diamonds, 2),
        ]),
        [HandCategory::Pair, HandCategory::Flush, HandCategory::RoyalFlush]
    );
}

#[test]
fn short_hands_have_no_five_card_categories() {
    let empty = Hand::new().evaluate();
    assert!(empty.is_high_card());
    assert_eq!(empty.categories().count(), 1);

    let four = eval(&[(Spades, 1), (Spades, 2), (Spades, 3), (Spades, 4)]);
    assert!(!four.has_straight());
    assert!(!four.has_flush());
    assert!(!four.has_straight_flush());
    assert!(four.is_high_card());
}

#[test]
fn category_labels_in_report_order() {
    let labels: Vec<&str> = HandCategory::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        [
            "Pair",
            "Three of a kind",
            "Four of a kind",
            "Straight",
            "Flush",
            "Full house",
            "Straight flush",
            "Royal flush",
            "High card (none of the above)",
        ]
    );
    assert_eq!(HandCategory::FullHouse.to_string(), "Full house");
}
