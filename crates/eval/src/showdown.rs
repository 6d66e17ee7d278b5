// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners and equity simulation.
use bitpoker_cards::{Cards, Deck, HOLE_CARDS, MAX_TABLE_CARDS};
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use crate::eval::{EvaluatedHand, Showing, compare};

/// A player that wins or splits the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    seat: usize,
    hole: Cards,
    hand: EvaluatedHand,
}

impl Winner {
    /// The player index in the showdown.
    pub fn seat(&self) -> usize {
        self.seat
    }

    /// The player hole cards.
    pub fn hole(&self) -> Cards {
        self.hole
    }

    /// The player best hand.
    pub fn hand(&self) -> EvaluatedHand {
        self.hand
    }
}

/// A showdown entry.
#[derive(Debug, Clone, Copy)]
struct Entry {
    seat: usize,
    hole: Cards,
    showing: Showing,
}

impl From<Entry> for Winner {
    fn from(e: Entry) -> Self {
        Winner {
            seat: e.seat,
            hole: e.hole,
            hand: e.showing.hand(),
        }
    }
}

/// Finds the winners given the table cards and each player hole cards.
///
/// Players are identified by their index in `holes`, more than one winner
/// means a split pot. Returns an empty list if there are no players.
///
/// ```
/// # use bitpoker_eval::*;
/// let table = "Ah Ac Kh 7d 2c".parse::<Cards>().unwrap();
/// let holes = ["As Ks", "Ad Kd", "Qs Qd"].map(|h| h.parse::<Cards>().unwrap());
/// let winners = winners(table, &holes);
/// assert_eq!(winners.len(), 2);
/// assert_eq!(winners[0].seat(), 0);
/// assert_eq!(winners[1].seat(), 1);
/// assert_eq!(winners[0].hand().kind(), HandKind::FullHouse);
/// ```
pub fn winners(table: Cards, holes: &[Cards]) -> Vec<Winner> {
    let mut entries = holes
        .iter()
        .enumerate()
        .map(|(seat, &hole)| {
            let showing = Showing::new(hole, table);
            debug!("Seat {seat} [{hole}] {}", showing.hand());
            Entry {
                seat,
                hole,
                showing,
            }
        })
        .collect::<Vec<_>>();

    // Strongest kinds first, sort is stable so seats order is kept.
    entries.sort_by(|a, b| b.showing.hand().kind().cmp(&a.showing.hand().kind()));

    let Some((first, rest)) = entries.split_first() else {
        return Vec::new();
    };

    let kind = first.showing.hand().kind();
    let mut group = vec![*first];

    for entry in rest {
        if entry.showing.hand().kind() < kind {
            break;
        }

        // Ties are transitive so the first entry stands for the group.
        match compare(kind, &entry.showing, &group[0].showing) {
            Ordering::Greater => {
                group.clear();
                group.push(*entry);
            }
            Ordering::Equal => group.push(*entry),
            Ordering::Less => {}
        }
    }

    debug!(
        "Winners {:?} with {kind}",
        group.iter().map(|e| e.seat).collect::<Vec<_>>()
    );

    group.into_iter().map(Winner::from).collect()
}

/// Monte Carlo equity of a hand against random opponents hands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Equity {
    games: u64,
    wins: u64,
    ties: u64,
    share: f64,
}

impl Equity {
    /// Number of simulated games.
    pub fn games(&self) -> u64 {
        self.games
    }

    /// Games won outright.
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// Games with a split pot.
    pub fn ties(&self) -> u64 {
        self.ties
    }

    /// Fraction of the pots won, split pots count for their share.
    pub fn equity(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.share / self.games as f64
        }
    }
}

/// Error returned when an equity simulation cannot be run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EquityError {
    /// The player doesn't have two hole cards.
    #[error("hole [{0}] must have {HOLE_CARDS} cards")]
    InvalidHole(Cards),
    /// More cards on the board than a table can hold.
    #[error("board has {0} cards, max is {MAX_TABLE_CARDS}")]
    TooManyBoardCards(usize),
    /// Hole cards that are also on the board.
    #[error("cards [{0}] are both in the hole and on the board")]
    Overlap(Cards),
    /// Not enough cards left to deal the opponents and the board.
    #[error("{needed} cards needed but only {left} left in the deck")]
    NotEnoughCards {
        /// Cards needed for each game.
        needed: usize,
        /// Cards left in the deck.
        left: usize,
    },
}

/// Simulates `samples` showdowns of `hole` against `opponents` random hands,
/// the table is completed with random cards after the known `board` cards.
pub fn equity<R: Rng>(
    hole: Cards,
    board: Cards,
    opponents: usize,
    samples: usize,
    rng: &mut R,
) -> Result<Equity, EquityError> {
    if hole.count() != HOLE_CARDS {
        return Err(EquityError::InvalidHole(hole));
    }

    if board.count() > MAX_TABLE_CARDS {
        return Err(EquityError::TooManyBoardCards(board.count()));
    }

    let overlap = hole & board;
    if !overlap.is_empty() {
        return Err(EquityError::Overlap(overlap));
    }

    let mut deck = Deck::default();
    deck.remove(hole | board);

    // Two cards for each opponent and the missing board cards.
    let board_start = opponents * HOLE_CARDS;
    let sample_size = board_start + MAX_TABLE_CARDS - board.count();
    if sample_size > deck.count() {
        return Err(EquityError::NotEnoughCards {
            needed: sample_size,
            left: deck.count(),
        });
    }

    let mut result = Equity::default();
    let mut holes = vec![Cards::EMPTY; opponents + 1];
    holes[0] = hole;

    deck.sample(samples, sample_size, rng, |sample| {
        for (idx, pair) in sample[..board_start].chunks(HOLE_CARDS).enumerate() {
            holes[idx + 1] = pair.iter().collect();
        }

        let table = board | sample[board_start..].iter().collect::<Cards>();
        let winners = winners(table, &holes);
        if winners.iter().any(|w| w.seat == 0) {
            if winners.len() == 1 {
                result.wins += 1;
            } else {
                result.ties += 1;
            }

            result.share += 1.0 / winners.len() as f64;
        }

        result.games += 1;
    });

    debug!(
        "Equity [{hole}] [{board}] vs {opponents}: {:.3} over {} games",
        result.equity(),
        result.games
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::HandKind;
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Cards {
        s.parse().unwrap()
    }

    fn seats(table: &str, holes: &[&str]) -> Vec<usize> {
        let holes = holes.iter().map(|h| cards(h)).collect::<Vec<_>>();
        winners(cards(table), &holes)
            .iter()
            .map(|w| w.seat())
            .collect()
    }

    #[test]
    fn no_players() {
        assert!(winners(cards("Ah Kh Qh 2c 3d"), &[]).is_empty());
    }

    #[test]
    fn single_player() {
        assert_eq!(seats("Ah Kh Qh 2c 3d", &["7s 8s"]), [0]);
    }

    #[test]
    fn high_card() {
        assert_eq!(seats("Ad Kh Jd Tc 9h", &["3h 4h", "3d 4c"]), [0, 1]);
        assert_eq!(seats("6d Kh Jd Tc 9h", &["Ah 4h", "3d 4c"]), [0]);
    }

    #[test]
    fn pair() {
        assert_eq!(seats("Kd 3h 4d 6c 7h", &["Ah Kh", "Ad Kc"]), [0, 1]);
        assert_eq!(seats("Td 3h 9d 6c 7h", &["Ah Kh", "5d 5c"]), [1]);
    }

    #[test]
    fn stronger_kind_wins() {
        // Hole cards overlap, each player is evaluated on its own.
        let table = "Qd Jd Td 4c 4s";
        let holes = [
            "8c 7s", // pair
            "Qc 2c", // two pair
            "4h 2c", // three of a kind
            "Ac Kh", // straight
            "2d 3d", // flush
            "Qh Qs", // full house
            "4d 4h", // four of a kind
            "9d 8d", // straight flush
            "Ad Kd", // royal flush
        ];

        // Each hand beats all the weaker hands, whatever the seats order.
        for n in 1..=holes.len() {
            let mut subset = holes[..n].to_vec();
            subset.reverse();
            assert_eq!(seats(table, &subset), [0], "{subset:?}");

            subset.reverse();
            assert_eq!(seats(table, &subset), [n - 1], "{subset:?}");
        }
    }

    #[test]
    fn wheel_loses_to_six_high() {
        assert_eq!(seats("2d 3s 4h 5c Td", &["Ah Kh", "6c Kc"]), [1]);
    }

    #[test]
    fn flushes_of_different_suits() {
        // Flushes compare by ranks whatever their suits.
        let hearts = Showing::new(cards("Ah 3h"), cards("2h 7h Qh 9s Ts"));
        let spades = Showing::new(cards("Ks 4s"), cards("2s 7s Qs 9h Th"));
        assert_eq!(hearts.hand().kind(), HandKind::Flush);
        assert_eq!(spades.hand().kind(), HandKind::Flush);
        assert_eq!(compare(HandKind::Flush, &hearts, &spades), Ordering::Greater);
        assert_eq!(compare(HandKind::Flush, &spades, &hearts), Ordering::Less);

        // A flush on the board against a flush with a hole card.
        assert_eq!(seats("2h 7h 9h Th Qh", &["Ah 3c", "4c 4d"]), [0]);
        assert_eq!(seats("6h Th Kh Ah 5h", &["3h 4h", "4d 4c"]), [0, 1]);
    }

    #[test]
    fn full_house_split_pot() {
        let table = "Ah Ac Kh 7d 2c";
        assert_eq!(seats(table, &["As Ks", "Ad Kd"]), [0, 1]);
        assert_eq!(seats(table, &["As Ks", "Ad Kd", "7s 7c"]), [0, 1]);
        assert_eq!(seats(table, &["7s 7c", "As Ks", "Ad Kd"]), [1, 2]);
    }

    #[test]
    fn royal_flush_never_ties() {
        let table = "Qh Jh Th 9h 2c";
        assert_eq!(seats(table, &["Ah Kh", "Ks Kd"]), [0]);
        assert_eq!(seats(table, &["8h 7h", "Ah Kh", "Qc Qs"]), [1]);
    }

    #[test]
    fn later_winner_replaces_group() {
        // The first two players tie, the third beats both.
        let table = "Ad Kh Jd 9c 2h";
        assert_eq!(seats(table, &["3h 4h", "3d 4c", "Js 5c"]), [2]);
        // The third player ties the first two.
        assert_eq!(seats(table, &["3h 4h", "3d 4c", "3s 4s"]), [0, 1, 2]);
    }

    #[test]
    fn group_matches_pairwise_comparison() {
        // Winners found against the group representative are the same as the
        // players that no other player beats.
        let mut rng = StdRng::seed_from_u64(99);
        let mut deck = Deck::default();

        for _ in 0..2_000 {
            deck.shuffle(&mut rng);
            let players = rng.random_range(2..=6);
            let holes = (0..players)
                .map(|_| {
                    (0..HOLE_CARDS)
                        .filter_map(|_| deck.deal())
                        .collect::<Cards>()
                })
                .collect::<Vec<_>>();
            let table = (0..MAX_TABLE_CARDS)
                .filter_map(|_| deck.deal())
                .collect::<Cards>();

            let showings = holes
                .iter()
                .map(|h| Showing::new(*h, table))
                .collect::<Vec<_>>();
            let expected = (0..players)
                .filter(|&i| {
                    showings
                        .iter()
                        .all(|s| s.cmp_hand(&showings[i]) != Ordering::Greater)
                })
                .collect::<Vec<_>>();

            let got = winners(table, &holes)
                .iter()
                .map(|w| w.seat())
                .collect::<Vec<_>>();
            assert_eq!(got, expected, "{table} {holes:?}");
        }
    }

    #[test]
    fn equity_simulation() {
        let mut rng = StdRng::seed_from_u64(5);

        // The nuts on the river always win.
        let eq = equity(cards("Ah Kh"), cards("Qh Jh Th 2c 3d"), 3, 500, &mut rng).unwrap();
        assert_eq!(eq.games(), 500);
        assert_eq!(eq.wins(), 500);
        assert_eq!(eq.ties(), 0);
        assert_eq!(eq.equity(), 1.0);

        // Aces are a big favorite against one random hand.
        let eq = equity(cards("Ac Ad"), Cards::EMPTY, 1, 5_000, &mut rng).unwrap();
        assert_eq!(eq.games(), 5_000);
        assert!(eq.equity() > 0.75 && eq.equity() < 0.9, "{eq:?}");

        // Seven deuce off is a big underdog against one random hand.
        let eq = equity(cards("7c 2d"), Cards::EMPTY, 1, 5_000, &mut rng).unwrap();
        assert!(eq.equity() > 0.25 && eq.equity() < 0.42, "{eq:?}");

        assert_eq!(Equity::default().equity(), 0.0);
    }

    #[test]
    fn equity_invalid_requests() {
        let mut rng = StdRng::seed_from_u64(5);
        let hole = cards("Ah Kh");

        // 30 opponents need 60 cards from a 50 cards deck.
        assert_eq!(
            equity(hole, Cards::EMPTY, 30, 1_000, &mut rng),
            Err(EquityError::NotEnoughCards {
                needed: 65,
                left: 50
            })
        );

        // 22 opponents and the board use the whole deck.
        assert_eq!(equity(hole, Cards::EMPTY, 22, 10, &mut rng).unwrap().games(), 10);
        assert!(equity(hole, Cards::EMPTY, 23, 10, &mut rng).is_err());

        assert_eq!(
            equity(hole, cards("2c 3c 4c 5c 6c 7c"), 1, 10, &mut rng),
            Err(EquityError::TooManyBoardCards(6))
        );
        assert_eq!(
            equity(hole, cards("Ah 3c 4c"), 1, 10, &mut rng),
            Err(EquityError::Overlap(cards("Ah")))
        );
        assert_eq!(
            equity(cards("Ah"), Cards::EMPTY, 1, 10, &mut rng),
            Err(EquityError::InvalidHole(cards("Ah")))
        );
    }
}
