// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand classification.
use bitpoker_cards::Cards;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{HandKind, detect};

/// The best combination in a player cards and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluatedHand {
    cards: Cards,
    kind: HandKind,
}

impl EvaluatedHand {
    /// Evaluates the player hole cards with the table cards.
    pub fn eval(hole: Cards, table: Cards) -> Self {
        Self::eval_pool(hole | table)
    }

    /// Evaluates a pool of cards trying the strongest kinds first.
    ///
    /// An empty pool evaluates to a high card with no cards.
    pub fn eval_pool(pool: Cards) -> Self {
        HandKind::kinds()
            .rev()
            .find_map(|kind| detect::detect(kind, pool).map(|cards| Self { cards, kind }))
            .unwrap_or(Self {
                cards: Cards::EMPTY,
                kind: HandKind::HighCard,
            })
    }

    /// The cards that make the combination.
    pub fn cards(&self) -> Cards {
        self.cards
    }

    /// The combination kind.
    pub fn kind(&self) -> HandKind {
        self.kind
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind, self.cards)
    }
}
