// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bitpoker cards types.
//!
//! This crate defines a [Card] with its [Rank] and [Suit], parsed from and
//! printed as two characters tokens:
//!
//! ```
//! # use bitpoker_cards::{Card, Rank, Suit};
//! let ah = "Ah".parse::<Card>().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//! assert_eq!(ah.to_string(), "Ah");
//! assert!("Ax".parse::<Card>().is_err());
//! ```
//!
//! a [Cards] set that packs up to 52 cards in a 64 bits integer:
//!
//! ```
//! # use bitpoker_cards::{Card, Cards, Rank, Suit};
//! let hand = "Ah Ad 9c".parse::<Cards>().unwrap();
//! assert_eq!(hand.count(), 3);
//! assert_eq!((hand & Cards::rank(Rank::Ace)).count(), 2);
//! ```
//!
//! a [Deck] type for shuffling, dealing, sampling, and iterating cards:
//!
//! ```
//! # use bitpoker_cards::Deck;
//! // Iterate through all 3 cards hands.
//! let mut counter = 0;
//! Deck::default().for_each(3, |hand| {
//!     assert_eq!(hand.len(), 3);
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
//!
//! and a [Board] that burns and shows the community cards street by street:
//!
//! ```
//! # use bitpoker_cards::{Board, Deck, Street};
//! let mut board = Board::new(Deck::default(), &mut rand::rng());
//! let holes = board.deal_hole(2).unwrap();
//! assert_eq!(board.next_street().unwrap(), Street::Flop);
//! assert_eq!(board.table_cards().count(), 3);
//! assert!(holes.iter().all(|h| h.quit(board.table_cards()) == *h));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod board;
mod card;
mod cards;
mod deck;
mod error;

pub use board::{Board, HOLE_CARDS, MAX_BURNED_CARDS, MAX_TABLE_CARDS, Street};
pub use card::{Card, Rank, Suit};
pub use cards::Cards;
pub use deck::Deck;
pub use error::{BoardError, CardError};
