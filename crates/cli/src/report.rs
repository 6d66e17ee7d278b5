// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown and equity reports.
use anyhow::Result;
use serde::Serialize;

use bitpoker_cards::Cards;
use bitpoker_eval::{Equity, EvaluatedHand, Showing, Winner};

/// A player at showdown.
#[derive(Debug, Serialize)]
struct Seat {
    seat: usize,
    hole: Cards,
    pool: Cards,
    hand: EvaluatedHand,
    winner: bool,
}

#[derive(Debug, Serialize)]
struct ShowdownReport {
    board: Cards,
    seats: Vec<Seat>,
    winners: Vec<usize>,
}

#[derive(Debug, Serialize)]
struct EquityReport {
    hole: Cards,
    board: Cards,
    opponents: usize,
    games: u64,
    wins: u64,
    ties: u64,
    equity: f64,
}

fn showdown_report(board: Cards, holes: &[Cards], winners: &[Winner]) -> ShowdownReport {
    let winners = winners.iter().map(|w| w.seat()).collect::<Vec<_>>();
    let seats = holes
        .iter()
        .enumerate()
        .map(|(seat, &hole)| {
            let showing = Showing::new(hole, board);
            Seat {
                seat,
                hole,
                pool: showing.pool(),
                hand: showing.hand(),
                winner: winners.contains(&seat),
            }
        })
        .collect();

    ShowdownReport {
        board,
        seats,
        winners,
    }
}

/// Prints the players hands and the winners.
pub fn showdown(board: Cards, holes: &[Cards], winners: &[Winner], json: bool) -> Result<()> {
    let report = showdown_report(board, holes, winners);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Board [{}]", report.board);
    for seat in &report.seats {
        let mark = if seat.winner { "*" } else { " " };
        println!("{mark} Seat {} [{}] {}", seat.seat, seat.hole, seat.hand);
    }

    if report.winners.len() > 1 {
        println!("Split pot between seats {:?}", report.winners);
    }

    Ok(())
}

/// Prints the equity simulation results.
pub fn equity(hole: Cards, board: Cards, opponents: usize, eq: &Equity, json: bool) -> Result<()> {
    let report = EquityReport {
        hole,
        board,
        opponents,
        games: eq.games(),
        wins: eq.wins(),
        ties: eq.ties(),
        equity: eq.equity(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "[{}] on [{}] vs {} opponents: {:.2}% equity, {} wins {} ties in {} games",
            report.hole,
            report.board,
            report.opponents,
            report.equity * 100.0,
            report.wins,
            report.ties,
            report.games
        );
    }

    Ok(())
}
