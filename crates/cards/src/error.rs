// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Error returned when parsing cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A token that is not exactly a rank and a suit.
    #[error("invalid card '{0}', expected a rank and a suit like 'Ah'")]
    InvalidLength(String),
    /// Unknown rank symbol.
    #[error("invalid rank '{0}', expected one of AKQJT98765432")]
    InvalidRank(char),
    /// Unknown suit symbol.
    #[error("invalid suit '{0}', expected one of schd")]
    InvalidSuit(char),
    /// A bit position past the last card.
    #[error("invalid card bit {0}, expected 0..52")]
    InvalidBit(u8),
    /// The same card appears twice.
    #[error("duplicate card {0}")]
    Duplicate(Card),
}

/// Error returned when dealing cards to the board or the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// There are no more cards in the deck.
    #[error("no more cards in deck")]
    DeckEmpty,
    /// All the table cards have been flipped.
    #[error("no more cards to flip")]
    NoCardsToFlip,
}
