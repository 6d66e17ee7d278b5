// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! The classifier works on [Cards](bitpoker_cards::Cards) sets, each hand
//! [kind](HandKind) has a [detector](detect) that extracts the best cards
//! for that kind, and [EvaluatedHand::eval] tries the detectors from the
//! strongest kind down, returning the first match.
//!
//! Hands of the same kind are ordered by the [compare] tie breakers that look
//! at the combination ranks and at the kickers left in the player cards.

pub mod compare;
pub mod detect;
mod hand;
mod kind;

pub use compare::{Showing, compare};
pub use hand::EvaluatedHand;
pub use kind::HandKind;
