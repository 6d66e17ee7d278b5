// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bitpoker command line showdown tool.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use bitpoker_cards::{Board, Cards, Deck, HOLE_CARDS, MAX_TABLE_CARDS, Street};
use bitpoker_eval::{equity, winners};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// Prints results as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals a random hand to the showdown.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        /// Seed for the deck shuffle.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Finds the winners for the given cards.
    Eval {
        /// The table cards, for example "Ah Kd 7c 7s 2d".
        #[clap(long, short)]
        board: Cards,
        /// The hole cards of a player, repeat for each player.
        #[clap(long = "hole", short = 'H', required = true)]
        holes: Vec<Cards>,
    },
    /// Estimates a hand equity against random hands.
    Equity {
        /// The player hole cards.
        #[clap(long = "hole", short = 'H')]
        hole: Cards,
        /// The known table cards.
        #[clap(long, short, default_value = "")]
        board: Cards,
        /// Number of opponents.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=9))]
        opponents: u8,
        /// Number of simulated showdowns.
        #[clap(long, default_value_t = 100_000)]
        samples: usize,
        /// Seed for the simulation.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Deal { players, seed } => deal(players as usize, seed, cli.json),
        Command::Eval { board, holes } => eval(board, &holes, cli.json),
        Command::Equity {
            hole,
            board,
            opponents,
            samples,
            seed,
        } => {
            check_cards(board, &[hole])?;
            let mut rng = make_rng(seed);
            let eq = equity(hole, board, opponents as usize, samples, &mut rng)
                .context("Failed to run equity simulation")?;
            report::equity(hole, board, opponents as usize, &eq, cli.json)
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Deals the hole cards and the board street by street.
fn deal(players: usize, seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = make_rng(seed);
    let mut board = Board::new(Deck::default(), &mut rng);

    let holes = board
        .deal_hole(players)
        .context("Failed to deal hole cards")?;

    while board.street() != Street::Showdown {
        let street = board.next_street().context("Failed to deal board")?;
        info!("{street} [{}]", board.table_cards());
    }

    let table = board.table_cards();
    report::showdown(table, &holes, &winners(table, &holes), json)
}

/// Evaluates the given cards.
fn eval(board: Cards, holes: &[Cards], json: bool) -> Result<()> {
    check_cards(board, holes)?;
    report::showdown(board, holes, &winners(board, holes), json)
}

/// Checks that the cards make a valid showdown.
fn check_cards(board: Cards, holes: &[Cards]) -> Result<()> {
    if board.count() > MAX_TABLE_CARDS {
        bail!("Board has {} cards, max is {MAX_TABLE_CARDS}", board.count());
    }

    let mut seen = board;
    for hole in holes {
        if hole.count() != HOLE_CARDS {
            bail!("Hole [{hole}] must have {HOLE_CARDS} cards");
        }

        let dup = *hole & seen;
        if !dup.is_empty() {
            bail!("Cards [{dup}] are used more than once");
        }

        seen |= *hole;
    }

    Ok(())
}
