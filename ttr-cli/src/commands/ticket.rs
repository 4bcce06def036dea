//! Ticket command - Draw a random destination ticket

use super::Context;
use crate::output::{Output, OutputConfig, Outputter};
use anyhow::Result;
use colored::Colorize;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use ttr_core::{Board, Ticket};

#[derive(Debug, Serialize)]
pub struct TicketResult {
    /// Seed that reproduces this ticket with `--seed`.
    pub seed: u64,
    pub src: String,
    pub dst: String,
    pub goal: u32,
    pub stops: Vec<String>,
}

impl TicketResult {
    fn new(seed: u64, ticket: Ticket) -> Self {
        let stops = ticket.route.nodes().into_iter().cloned().collect();
        Self {
            seed,
            src: ticket.src,
            dst: ticket.dst,
            goal: ticket.goal,
            stops,
        }
    }
}

impl Outputter for TicketResult {
    fn to_table(&self, _config: &OutputConfig) -> String {
        format!(
            "{} {} {} {}\n  {}: {} cars\n  {}: {}\n  {}",
            "Ticket".bold(),
            self.src.cyan(),
            "->".dimmed(),
            self.dst.cyan(),
            "Goal".bold(),
            self.goal,
            "Best route".bold(),
            self.stops.join(" -> "),
            format!("(seed {})", self.seed).dimmed()
        )
    }
}

/// Draw a ticket with a generator seeded from `seed`.
pub fn draw(board: &Board, seed: u64) -> Result<TicketResult> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ticket = board.draw_ticket(&mut rng).ok_or_else(|| {
        anyhow::anyhow!(
            "No ticket available: the board needs more than two cities and a connected pair \
             without a direct route"
        )
    })?;
    Ok(TicketResult::new(seed, ticket))
}

pub fn run(ctx: &Context, seed: Option<u64>) -> Result<()> {
    let board = ctx.load_board()?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    tracing::debug!("Drawing ticket with seed {}", seed);
    Output::new(draw(&board, seed)?, ctx.output.clone()).render()
}
