// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The table board.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{BoardError, Card, Cards, Deck};

/// The maximum number of community cards.
pub const MAX_TABLE_CARDS: usize = 5;

/// The maximum number of burned cards.
pub const MAX_BURNED_CARDS: usize = 3;

/// The number of hole cards for each player.
pub const HOLE_CARDS: usize = 2;

/// A betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Street {
    /// No community cards.
    Preflop,
    /// Three community cards.
    Flop,
    /// Four community cards.
    Turn,
    /// Five community cards.
    River,
    /// Players show their cards.
    Showdown,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        };

        write!(f, "{street}")
    }
}

/// The community cards dealt from a deck street by street.
#[derive(Debug)]
pub struct Board {
    deck: Deck,
    table: Vec<Card>,
    burned: Vec<Card>,
    street: Street,
}

impl Board {
    /// Creates a board that deals from `deck`, the deck is shuffled.
    pub fn new<R: Rng>(mut deck: Deck, rng: &mut R) -> Self {
        deck.shuffle(rng);
        Self {
            deck,
            table: Vec::with_capacity(MAX_TABLE_CARDS),
            burned: Vec::with_capacity(MAX_BURNED_CARDS),
            street: Street::Preflop,
        }
    }

    /// Clears the board and shuffles the deck.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
        self.table.clear();
        self.burned.clear();
        self.street = Street::Preflop;
    }

    /// The current street.
    pub fn street(&self) -> Street {
        self.street
    }

    /// The community cards.
    pub fn table_cards(&self) -> Cards {
        self.table.iter().collect()
    }

    /// The community cards in the order they were shown.
    pub fn shown(&self) -> &[Card] {
        &self.table
    }

    /// The burned cards.
    pub fn burned(&self) -> Cards {
        self.burned.iter().collect()
    }

    /// Deals the hole cards one at a time to each of the `players`.
    pub fn deal_hole(&mut self, players: usize) -> Result<Vec<Cards>, BoardError> {
        let mut holes = vec![Cards::EMPTY; players];
        for _ in 0..HOLE_CARDS {
            for hole in holes.iter_mut() {
                *hole = *hole | self.deck.deal().ok_or(BoardError::DeckEmpty)?;
            }
        }

        Ok(holes)
    }

    /// Moves to the next street burning and showing cards as needed.
    pub fn next_street(&mut self) -> Result<Street, BoardError> {
        match self.street {
            Street::Preflop => {
                self.burn_card()?;
                for _ in 0..3 {
                    self.show_card()?;
                }
            }
            Street::Flop | Street::Turn => {
                self.burn_card()?;
                self.show_card()?;
            }
            Street::River => {}
            Street::Showdown => return Err(BoardError::NoCardsToFlip),
        }

        self.street = match self.street {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        };

        Ok(self.street)
    }

    fn show_card(&mut self) -> Result<(), BoardError> {
        if self.table.len() >= MAX_TABLE_CARDS {
            return Err(BoardError::NoCardsToFlip);
        }

        let card = self.deck.deal().ok_or(BoardError::DeckEmpty)?;
        self.table.push(card);
        Ok(())
    }

    fn burn_card(&mut self) -> Result<(), BoardError> {
        if self.burned.len() >= MAX_BURNED_CARDS {
            return Err(BoardError::NoCardsToFlip);
        }

        let card = self.deck.deal().ok_or(BoardError::DeckEmpty)?;
        self.burned.push(card);
        Ok(())
    }
}
