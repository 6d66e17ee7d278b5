// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards.
use rand::prelude::*;

use crate::{Card, Cards, Rank, Suit};

/// A cards Deck.
///
/// Each of the 52 cards is dealt at most once until the deck is shuffled
/// again.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Puts back all the cards and shuffles the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new_and_shuffled(rng);
    }

    /// Deals the next card, returns None if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes the given cards from the deck.
    pub fn remove(&mut self, cards: Cards) {
        self.cards.retain(|c| !cards.contains(*c));
    }

    /// The cards left in the deck as a set.
    pub fn cards(&self) -> Cards {
        self.cards.iter().collect()
    }

    /// Calls the `f` closure for each k-cards hand, does nothing if k is not
    /// 2 <= k <= 7 or the deck has less than k cards.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        if !(2..=7).contains(&k) || k > n {
            return;
        }

        // Indices of the current k-subset in lexicographic order.
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move right.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                break;
            };

            idx[pos] += 1;
            for i in (pos + 1)..k {
                idx[i] = idx[i - 1] + 1;
            }

            for i in pos..k {
                hand[i] = self.cards[idx[i]];
            }
        }
    }

    /// Calls the `f` closure with `n` random k-cards samples, does nothing if
    /// the deck has less than k cards.
    pub fn sample<R, F>(&self, n: usize, k: usize, rng: &mut R, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        for _ in 0..n {
            hand.clear();
            hand.extend(self.cards.choose_multiple(rng, k).copied());
            f(&hand);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
