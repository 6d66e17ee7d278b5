// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bitpoker hand evaluator.
//!
//! Classifies the cards of a player into the best poker combination and finds
//! the winners at showdown. Cards are kept in a [Cards] bit set and each hand
//! category has a detector made of bit masks operations.
//!
//! To classify a hand use [EvaluatedHand::eval] with the player hole cards and
//! the table cards:
//!
//! ```
//! # use bitpoker_eval::*;
//! let hole = "3h 4h".parse::<Cards>().unwrap();
//! let table = "2c 3s 4d 5d Ac".parse::<Cards>().unwrap();
//! let hand = EvaluatedHand::eval(hole, table);
//! assert_eq!(hand.kind(), HandKind::Straight);
//! assert_eq!(hand.cards().to_string(), "Ac 5d 4d 3h 2c");
//! ```
//!
//! and [winners] to find who wins the pot:
//!
//! ```
//! # use bitpoker_eval::*;
//! let table = "Kd 3h 4d 6c 7h".parse::<Cards>().unwrap();
//! let holes = ["Ah Kh", "Ad Kc", "Qs Qd"].map(|h| h.parse::<Cards>().unwrap());
//! let seats = winners(table, &holes).iter().map(|w| w.seat()).collect::<Vec<_>>();
//! assert_eq!(seats, [0, 1]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub mod showdown;

pub use eval::{EvaluatedHand, HandKind, Showing};
pub use showdown::{Equity, EquityError, Winner, equity, winners};

// Reexport cards types.
pub use bitpoker_cards::{Board, Card, Cards, Deck, Rank, Suit, Street};
