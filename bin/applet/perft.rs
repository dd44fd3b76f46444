use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Position;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{info, instrument};

/// Counts the leaf nodes of the legal move tree.
#[derive(Debug, Parser)]
pub struct Perft {
    /// The depth of the tree.
    depth: u8,

    /// The root position in FEN-like notation.
    #[clap(default_value_t)]
    pos: Position,
}

impl Perft {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let timer = Instant::now();
        let nodes = perft(&self.pos, self.depth);
        info!(depth = self.depth, nodes, time = ?timer.elapsed());
        println!("{nodes}");
        Ok(())
    }
}

fn perft(pos: &Position, depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => pos.moves().count(),
        d => pos
            .moves()
            .par_bridge()
            .map(|m| {
                let mut next = *pos;
                assert!(next.play(m).is_ok());
                perft(&next, d - 1)
            })
            .sum(),
    }
}
