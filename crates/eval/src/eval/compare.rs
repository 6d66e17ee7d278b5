// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tie breaking between hands of the same kind.
//!
//! All comparators return [Ordering::Greater] when the first hand wins,
//! [Ordering::Less] when the second hand wins, and [Ordering::Equal] for a
//! split pot.
use bitpoker_cards::{Cards, Rank};
use log::trace;
use std::cmp::Ordering;

use super::{EvaluatedHand, HandKind, detect};

/// Cards used to make a poker hand.
const HAND_SIZE: usize = 5;

/// A player hand at showdown, the hole and table cards with their best hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showing {
    pool: Cards,
    hand: EvaluatedHand,
}

impl Showing {
    /// Evaluates the player hole cards with the table cards.
    pub fn new(hole: Cards, table: Cards) -> Self {
        let pool = hole | table;
        Self {
            pool,
            hand: EvaluatedHand::eval_pool(pool),
        }
    }

    /// The hole and table cards.
    pub fn pool(&self) -> Cards {
        self.pool
    }

    /// The best hand.
    pub fn hand(&self) -> EvaluatedHand {
        self.hand
    }

    /// The cards that are not part of the winning combination.
    pub fn rest(&self) -> Cards {
        self.pool.quit(self.hand.cards())
    }

    /// Compares two showings, by kind first and then using the kind
    /// comparator.
    pub fn cmp_hand(&self, other: &Showing) -> Ordering {
        let kind = self.hand.kind();
        kind.cmp(&other.hand.kind())
            .then_with(|| compare(kind, self, other))
    }
}

/// Breaks the tie between two showings of the same `kind`.
pub fn compare(kind: HandKind, first: &Showing, second: &Showing) -> Ordering {
    debug_assert_eq!(first.hand.kind(), kind);
    debug_assert_eq!(second.hand.kind(), kind);

    let ord = match kind {
        HandKind::HighCard => high_card(first, second),
        HandKind::Pair
        | HandKind::TwoPair
        | HandKind::ThreeOfAKind
        | HandKind::Flush
        | HandKind::FourOfAKind => common(first, second),
        HandKind::Straight | HandKind::StraightFlush => {
            straight(first.hand.cards(), second.hand.cards())
        }
        HandKind::FullHouse => full_house(first.hand.cards(), second.hand.cards()),
        HandKind::RoyalFlush => Ordering::Equal,
    };

    trace!("{kind}: {} vs {} {ord:?}", first.hand.cards(), second.hand.cards());
    ord
}

/// Compares the high cards rank by rank, kickers are not looked at.
pub fn high_card(first: &Showing, second: &Showing) -> Ordering {
    let a = first.hand.cards().merge_suits();
    let b = second.hand.cards().merge_suits();

    Rank::ranks()
        .rev()
        .map(|rank| {
            let mask = Cards::rank(rank);
            (a & mask).count().cmp(&(b & mask).count())
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compares the combinations ranks and then the kickers.
///
/// Used for pairs, two pairs, three and four of a kind, and flushes.
pub fn common(first: &Showing, second: &Showing) -> Ordering {
    let a = first.hand.cards().merge_suits();
    let b = second.hand.cards().merge_suits();
    a.cmp(&b).then_with(|| kickers(first, second))
}

/// Compares the cards left out of the combinations, only as many cards as
/// needed to complete a five cards hand are compared.
fn kickers(first: &Showing, second: &Showing) -> Ordering {
    let (a, b) = (first.rest(), second.rest());
    let mut slots = HAND_SIZE.saturating_sub(first.hand.cards().count());

    for rank in Rank::ranks().rev() {
        if slots == 0 {
            break;
        }

        let mask = Cards::rank(rank);
        let a_count = (a & mask).count().min(slots);
        let b_count = (b & mask).count().min(slots);

        match a_count.cmp(&b_count) {
            Ordering::Equal => slots -= a_count,
            ord => return ord,
        }
    }

    Ordering::Equal
}

/// The straight ranks with the ace playing low in a wheel.
fn straight_value(cards: Cards) -> Cards {
    let ranks = cards.merge_suits();
    if ranks == Cards::from_bits(detect::WHEEL as u64) {
        ranks & Cards::from_bits(detect::WHEEL as u64 & 0xf)
    } else {
        ranks
    }
}

/// Compares two straights or straight flushes by their highest card.
pub fn straight(first: Cards, second: Cards) -> Ordering {
    straight_value(first).cmp(&straight_value(second))
}

/// Compares the three of a kind ranks and then the pairs ranks.
pub fn full_house(first: Cards, second: Cards) -> Ordering {
    let a_three = detect::three_of_a_kind(first).unwrap_or_default();
    let b_three = detect::three_of_a_kind(second).unwrap_or_default();

    a_three
        .merge_suits()
        .cmp(&b_three.merge_suits())
        .then_with(|| {
            let a_pair = first.quit(a_three).merge_suits();
            let b_pair = second.quit(b_three).merge_suits();
            a_pair.cmp(&b_pair)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showing(hole: &str, table: &str) -> Showing {
        Showing::new(hole.parse().unwrap(), table.parse().unwrap())
    }

    fn cmp(hole1: &str, hole2: &str, table: &str) -> Ordering {
        let (a, b) = (showing(hole1, table), showing(hole2, table));
        assert_eq!(a.hand().kind(), b.hand().kind());
        compare(a.hand().kind(), &a, &b)
    }

    fn cards(s: &str) -> Cards {
        s.parse().unwrap()
    }

    #[test]
    fn high_card_tie_breaks() {
        // Both play the board.
        assert_eq!(cmp("3h 4h", "3d 4c", "Ad Kh Jd Tc 9h"), Ordering::Equal);
        // Highest card wins.
        assert_eq!(cmp("Ah 4h", "3d 4c", "6d Kh Jd Tc 9h"), Ordering::Greater);
        assert_eq!(cmp("3d 4c", "Ah 4h", "6d Kh Jd Tc 9h"), Ordering::Less);
        // Same high card splits the pot.
        assert_eq!(cmp("8d 3c", "7h 3h", "Ad Kh Jd 5c 2h"), Ordering::Equal);
        assert_eq!(cmp("4d 3c", "4h 2d", "Ad Kh Jd 9c 7h"), Ordering::Equal);
    }

    #[test]
    fn pair_tie_breaks() {
        assert_eq!(cmp("Ah Kh", "Ad Kc", "Kd 3h 4d 6c 7h"), Ordering::Equal);
        assert_eq!(cmp("Kh 2h", "Ad Kc", "Kd 3h 4d 6c 7h"), Ordering::Less);
        assert_eq!(cmp("5h 5d", "4h 4s", "Ad Kh 9d 7c 2h"), Ordering::Greater);
        // Third kicker decides.
        assert_eq!(cmp("Ts 3d", "9s 3c", "Ad Kh 3h 7c 2h"), Ordering::Greater);
        // Fourth best kicker is not in the five cards.
        assert_eq!(cmp("2s 9c", "2d 8c", "Ad Kh Qh Jc 2h"), Ordering::Equal);
    }

    #[test]
    fn two_pair_tie_breaks() {
        assert_eq!(cmp("5h 5s", "5d 5c", "Ad Ah 9d 7c 2h"), Ordering::Equal);
        assert_eq!(cmp("Kh Ks", "Qd Qc", "Ad Ah 9d 7c 2h"), Ordering::Greater);
        // The kicker decides.
        assert_eq!(cmp("Kh 3s", "Kd 6c", "Ad Ah Kc 5c 2h"), Ordering::Less);
        // A third pair counts as a single kicker.
        assert_eq!(cmp("7d 7s", "7c 3d", "Ad Ah Kc Kd 2c"), Ordering::Equal);
        assert_eq!(cmp("Qd 3s", "8d 3c", "Ad Ah Kc Kd 7c"), Ordering::Greater);
    }

    #[test]
    fn three_of_a_kind_tie_breaks() {
        assert_eq!(cmp("9h 9s", "8d 8c", "9d 8h 2d 4c 5h"), Ordering::Greater);
        assert_eq!(cmp("Ah Jd", "Ac Qd", "7s 7h 7d 4c 2h"), Ordering::Less);
        assert_eq!(cmp("Ah 3d", "Ac 2d", "7s 7h 7d Kc Qh"), Ordering::Equal);
    }

    #[test]
    fn straight_tie_breaks() {
        // Six high beats the wheel.
        assert_eq!(cmp("Ah Kh", "6c Kc", "2d 3s 4h 5c Td"), Ordering::Less);
        assert_eq!(cmp("Ah Ks", "Ad Kd", "2d 3s 4h 5c Td"), Ordering::Equal);
        assert_eq!(cmp("Ah 2c", "9d 8c", "Kd Qs Jh Tc 3d"), Ordering::Greater);
        assert_eq!(straight(cards("Ac 2d 3h 4s 5c"), cards("2d 3h 4s 5c 6d")), Ordering::Less);
    }

    #[test]
    fn flush_tie_breaks() {
        assert_eq!(cmp("Ah 2c", "Kh 2d", "Qh 9h 7h 3h 2s"), Ordering::Greater);
        assert_eq!(cmp("4h 2c", "5h 2d", "Qh 9h 7h 3h 6h"), Ordering::Less);
        assert_eq!(cmp("4c 2c", "5d 2d", "Qh 9h 7h 3h 6h"), Ordering::Equal);
        assert_eq!(cmp("Ac Kc", "Qd Jd", "2h 3h 5h 7h 9h"), Ordering::Equal);
    }

    #[test]
    fn full_house_tie_breaks() {
        assert_eq!(cmp("As Ks", "Ad Kd", "Ah Ac Kh 7d 2c"), Ordering::Equal);
        assert_eq!(cmp("Ks Kd", "7s Qs", "Kh Qc Qh 7d 7c"), Ordering::Greater);
        assert_eq!(cmp("7s 2d", "Ks 3d", "Kh Kc Qh 7d 7c"), Ordering::Less);
        assert_eq!(full_house(cards("Ks Kd Kh 2c 2d"), cards("Qs Qd Qh Ac Ad")), Ordering::Greater);
    }

    #[test]
    fn four_of_a_kind_tie_breaks() {
        assert_eq!(cmp("Ah 2c", "Kh 2d", "9h 9s 9c 9d 3s"), Ordering::Greater);
        assert_eq!(cmp("4h 2c", "5h 2d", "9h 9s 9c 9d As"), Ordering::Equal);
        assert_eq!(cmp("Th Tc", "4h 4c", "9h 9s 9c 9d 3s"), Ordering::Greater);
    }

    #[test]
    fn straight_flush_tie_breaks() {
        assert_eq!(cmp("9h 2c", "4h 3c", "5h 6h 7h 8h Kd"), Ordering::Greater);
        // The wheel is five high.
        assert_eq!(cmp("Ah 2s", "6h 2c", "2h 3h 4h 5h Kd"), Ordering::Less);
    }

    #[test]
    fn royal_flush_always_ties() {
        assert_eq!(cmp("2c 3d", "4c 5d", "Ah Kh Qh Jh Th"), Ordering::Equal);
    }

    #[test]
    fn cmp_hand_by_kind() {
        let table = "Ah Kh Qh 7c 2d";
        let royal = showing("Jh Th", table);
        let pair = showing("7s 3d", table);
        assert_eq!(royal.cmp_hand(&pair), Ordering::Greater);
        assert_eq!(pair.cmp_hand(&royal), Ordering::Less);
        assert_eq!(royal.cmp_hand(&royal), Ordering::Equal);
    }

    #[test]
    fn showing_pool_and_rest() {
        let pair = showing("7s 3d", "Ah Kh Qh 7c 2d");
        assert_eq!(pair.pool(), cards("7s 3d Ah Kh Qh 7c 2d"));
        assert_eq!(pair.hand().cards(), cards("7s 7c"));
        assert_eq!(pair.rest(), cards("3d Ah Kh Qh 2d"));
        assert_eq!(pair.rest() | pair.hand().cards(), pair.pool());
    }
}
