// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker combinations detectors.
//!
//! Each detector returns the best cards that make its combination or None if
//! the combination is not in the given cards. Ranks are scanned from aces
//! down, when more cards than needed have the same rank the lowest suits are
//! kept.
use bitpoker_cards::{Cards, Rank};
use std::iter;

use super::HandKind;

/// Deuce to six ranks.
const SIX_HIGH: u16 = 0b1_1111;

/// Ten to ace ranks.
const ACE_HIGH: u16 = SIX_HIGH << 8;

/// Ace to five ranks, the ace plays low.
pub(crate) const WHEEL: u16 = 0b1_0000_0000_1111;

/// Straight windows from ace high down to the wheel.
fn straight_windows() -> impl Iterator<Item = Cards> {
    (0..=8)
        .rev()
        .map(|shift| Cards::from_ranks(SIX_HIGH << shift))
        .chain(iter::once(Cards::from_ranks(WHEEL)))
}

/// Finds the highest rank with at least `n` cards and keeps `n` of them.
fn same_rank(cards: Cards, n: usize) -> Option<Cards> {
    Rank::ranks()
        .rev()
        .map(|rank| cards & Cards::rank(rank))
        .find(|c| c.count() >= n)
        .map(|c| c.reduce_to_count(n))
}

/// Runs the detector for `kind`.
pub fn detect(kind: HandKind, cards: Cards) -> Option<Cards> {
    match kind {
        HandKind::HighCard => high_card(cards),
        HandKind::Pair => pair(cards),
        HandKind::TwoPair => two_pair(cards),
        HandKind::ThreeOfAKind => three_of_a_kind(cards),
        HandKind::Straight => straight(cards),
        HandKind::Flush => flush(cards),
        HandKind::FullHouse => full_house(cards),
        HandKind::FourOfAKind => four_of_a_kind(cards),
        HandKind::StraightFlush => straight_flush(cards),
        HandKind::RoyalFlush => royal_flush(cards),
    }
}

/// The highest card.
pub fn high_card(cards: Cards) -> Option<Cards> {
    same_rank(cards, 1)
}

/// The highest pair.
pub fn pair(cards: Cards) -> Option<Cards> {
    same_rank(cards, 2)
}

/// The two highest pairs.
pub fn two_pair(cards: Cards) -> Option<Cards> {
    let first = pair(cards)?;
    let second = pair(cards.quit(first))?;
    Some(first | second)
}

/// The highest three of a kind.
pub fn three_of_a_kind(cards: Cards) -> Option<Cards> {
    same_rank(cards, 3)
}

/// The highest straight with one card per rank.
pub fn straight(cards: Cards) -> Option<Cards> {
    let ranks = cards.merge_suits();
    straight_windows()
        .find(|window| (ranks & *window).count() == 5)
        .map(|window| (cards & window).reduce_straight_duplicates())
}

/// The five highest cards of the flush suit.
///
/// With more than one flush suit the suit with the highest ranks wins.
pub fn flush(cards: Cards) -> Option<Cards> {
    cards
        .extract_suits()
        .into_iter()
        .filter(|suit| suit.count() >= 5)
        .reduce(|best, suit| {
            if suit.value_without_suit() > best.value_without_suit() {
                suit
            } else {
                best
            }
        })
        .map(|suit| suit.top_ranks(5))
}

/// The highest three of a kind with the highest pair from the other cards.
pub fn full_house(cards: Cards) -> Option<Cards> {
    let three = three_of_a_kind(cards)?;
    let pair = pair(cards.quit(three))?;
    Some(three | pair)
}

/// The highest four of a kind, kicker excluded.
pub fn four_of_a_kind(cards: Cards) -> Option<Cards> {
    same_rank(cards, 4)
}

/// The highest straight of one suit.
pub fn straight_flush(cards: Cards) -> Option<Cards> {
    let suits = cards.extract_suits();
    straight_windows().find_map(|window| {
        suits
            .into_iter()
            .map(|suit| suit & window)
            .find(|c| c.count() == 5)
    })
}

/// Ace, king, queen, jack, and ten of one suit.
pub fn royal_flush(cards: Cards) -> Option<Cards> {
    let royal = Cards::from_ranks(ACE_HIGH);
    cards
        .extract_suits()
        .into_iter()
        .map(|suit| suit & royal)
        .find(|c| c.count() == 5)
}
