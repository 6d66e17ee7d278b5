// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A poker hand category, a greater kind is a stronger hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandKind {
    /// No combination.
    HighCard = 0,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandKind {
    /// The number of hand kinds.
    pub const COUNT: usize = 10;

    /// Returns all kinds from the weakest to the strongest.
    pub fn kinds() -> impl DoubleEndedIterator<Item = HandKind> {
        use HandKind::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// Number of cards that make the combination, kickers excluded.
    pub fn winning_size(self) -> usize {
        match self {
            HandKind::HighCard => 1,
            HandKind::Pair => 2,
            HandKind::ThreeOfAKind => 3,
            HandKind::TwoPair | HandKind::FourOfAKind => 4,
            HandKind::Straight
            | HandKind::Flush
            | HandKind::FullHouse
            | HandKind::StraightFlush
            | HandKind::RoyalFlush => 5,
        }
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourOfAKind => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::RoyalFlush => "Royal Flush",
        };

        write!(f, "{kind}")
    }
}
