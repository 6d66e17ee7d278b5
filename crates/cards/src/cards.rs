// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A set of cards packed in a 64 bits integer.
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

use crate::{Card, CardError, Rank, Suit};

/// A set of cards.
///
/// Bit `suit * 13 + rank` is set when the card is in the set, the top 12 bits
/// are always zero. Sets are compared by their numeric value, this is useful
/// after [merge_suits](Cards::merge_suits) where a greater value means higher
/// ranks.
///
/// ```
/// # use bitpoker_cards::*;
/// let hand = "Ah Kh".parse::<Cards>().unwrap();
/// let table = "Qh Jh Th 2c 3d".parse::<Cards>().unwrap();
/// let pool = hand | table;
/// assert_eq!(pool.count(), 7);
/// assert_eq!(pool.quit(table), hand);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Cards(u64);

/// The deuces in all suits.
const TWOS: u64 = 1 | (1 << 13) | (1 << 26) | (1 << 39);

impl Cards {
    /// The empty set.
    pub const EMPTY: Cards = Cards(0);
    /// All the thirteen ranks of the first suit.
    pub const ONE_SUIT: Cards = Cards(0x1fff);
    /// All the 52 cards.
    pub const ALL: Cards = Cards((1 << 52) - 1);
    /// All the clubs.
    pub const CLUBS: Cards = Cards(Self::ONE_SUIT.0);
    /// All the diamonds.
    pub const DIAMONDS: Cards = Cards(Self::ONE_SUIT.0 << 13);
    /// All the hearts.
    pub const HEARTS: Cards = Cards(Self::ONE_SUIT.0 << 26);
    /// All the spades.
    pub const SPADES: Cards = Cards(Self::ONE_SUIT.0 << 39);

    /// Creates a set from raw bits, bits past the 52 cards are cleared.
    pub const fn from_bits(bits: u64) -> Cards {
        Cards(bits & Self::ALL.0)
    }

    /// The raw bits.
    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// All four cards of a rank.
    pub const fn rank(rank: Rank) -> Cards {
        Cards(TWOS << rank as u64)
    }

    /// All thirteen cards of a suit.
    pub const fn suit(suit: Suit) -> Cards {
        Cards(Self::ONE_SUIT.0 << (13 * suit as u64))
    }

    /// Expands a 13 bits ranks pattern to all the suits.
    pub const fn from_ranks(ranks: u16) -> Cards {
        let r = ranks as u64 & Self::ONE_SUIT.0;
        Cards(r | (r << 13) | (r << 26) | (r << 39))
    }

    /// Number of cards in the set.
    pub const fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if a card is in the set.
    pub const fn contains(&self, card: Card) -> bool {
        self.0 & (1 << card.bit()) != 0
    }

    /// Checks if all the cards in `other` are in this set.
    pub const fn contains_all(&self, other: Cards) -> bool {
        self.0 & other.0 == other.0
    }

    /// Adds a card, returns false if the card was already in the set.
    pub fn insert(&mut self, card: Card) -> bool {
        let present = self.contains(card);
        self.0 |= 1 << card.bit();
        !present
    }

    /// Returns this set without the cards in `cards`.
    pub const fn quit(self, cards: Cards) -> Cards {
        Cards(self.0 & !cards.0)
    }

    /// Splits the set by suit as clubs, diamonds, hearts, and spades.
    pub const fn extract_suits(self) -> [Cards; 4] {
        [
            Cards(self.0 & Self::CLUBS.0),
            Cards(self.0 & Self::DIAMONDS.0),
            Cards(self.0 & Self::HEARTS.0),
            Cards(self.0 & Self::SPADES.0),
        ]
    }

    /// Folds all the suits on the first suit.
    ///
    /// A bit in the result means there is at least one card of that rank, the
    /// number of cards with the same rank is lost.
    pub const fn merge_suits(self) -> Cards {
        let [clubs, diamonds, hearts, spades] = self.extract_suits();
        Cards(clubs.0 | (diamonds.0 >> 13) | (hearts.0 >> 26) | (spades.0 >> 39))
    }

    /// Returns the ranks of the first non empty suit aligned to the first suit.
    ///
    /// Use only on cards of one suit.
    pub const fn value_without_suit(self) -> Cards {
        let mut c = self.0;
        while c != 0 {
            let value = c & Self::ONE_SUIT.0;
            if value != 0 {
                return Cards(value);
            }

            c >>= 13;
        }

        Self::EMPTY
    }

    /// Reduces the set to at most `n` cards by dropping whole suits starting
    /// from spades, so lower suits are kept.
    ///
    /// Use only on cards of the same rank.
    pub const fn reduce_to_count(self, n: usize) -> Cards {
        let mut mask = Self::ALL.0;
        let mut c = self.0;
        while c.count_ones() as usize > n {
            mask >>= 13;
            c &= mask;
        }

        Cards(c)
    }

    /// Keeps one card for each rank, preferring the lowest suit.
    pub fn reduce_straight_duplicates(self) -> Cards {
        Rank::ranks().rev().fold(Self::EMPTY, |acc, rank| {
            acc | (self & Cards::rank(rank)).reduce_to_count(1)
        })
    }

    /// Keeps the `n` highest ranks.
    ///
    /// Use only on cards of one suit.
    pub fn top_ranks(self, n: usize) -> Cards {
        let mut c = self;
        for rank in Rank::ranks() {
            if c.count() <= n {
                break;
            }

            c = c.quit(Cards::rank(rank));
        }

        c
    }

    /// Iterates the cards from aces to deuces, clubs first for the same rank.
    pub fn iter(&self) -> impl Iterator<Item = Card> + use<> {
        let cards = *self;
        Rank::ranks()
            .rev()
            .flat_map(|r| Suit::suits().map(move |s| Card::new(r, s)))
            .filter(move |c| cards.contains(*c))
    }
}

impl From<Card> for Cards {
    fn from(card: Card) -> Self {
        Cards(1 << card.bit())
    }
}

impl FromIterator<Card> for Cards {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        iter.into_iter().fold(Cards::EMPTY, |acc, c| acc | c)
    }
}

impl<'a> FromIterator<&'a Card> for Cards {
    fn from_iter<I: IntoIterator<Item = &'a Card>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl ops::BitOr for Cards {
    type Output = Cards;

    fn bitor(self, rhs: Cards) -> Cards {
        Cards(self.0 | rhs.0)
    }
}

impl ops::BitOr<Card> for Cards {
    type Output = Cards;

    fn bitor(self, rhs: Card) -> Cards {
        self | Cards::from(rhs)
    }
}

impl ops::BitOrAssign for Cards {
    fn bitor_assign(&mut self, rhs: Cards) {
        self.0 |= rhs.0;
    }
}

impl ops::BitAnd for Cards {
    type Output = Cards;

    fn bitand(self, rhs: Cards) -> Cards {
        Cards(self.0 & rhs.0)
    }
}

impl fmt::Display for Cards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Cards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cards({self})")
    }
}

impl FromStr for Cards {
    type Err = CardError;

    /// Parses cards tokens separated by spaces or commas, tokens can also be
    /// packed together like `AhKd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cards = Cards::EMPTY;

        for token in s.split(|c: char| c.is_whitespace() || c == ',') {
            let chars = token.chars().collect::<Vec<_>>();
            if chars.len() % 2 != 0 {
                return Err(CardError::InvalidLength(token.to_string()));
            }

            for pair in chars.chunks(2) {
                let card = pair.iter().collect::<String>().parse::<Card>()?;
                if !cards.insert(card) {
                    return Err(CardError::Duplicate(card));
                }
            }
        }

        Ok(cards)
    }
}

impl From<Cards> for String {
    fn from(cards: Cards) -> Self {
        cards.to_string()
    }
}

impl TryFrom<String> for Cards {
    type Error = CardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
