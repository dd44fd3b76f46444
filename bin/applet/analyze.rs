use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Grid, Position};
use tracing::{info, instrument};

/// Lists the legal moves and the outcome of a position.
#[derive(Debug, Default, Parser)]
pub struct Analyze {
    /// Also print the numeric grid encoding of the position.
    #[clap(short, long)]
    grid: bool,

    /// The position to analyze in FEN-like notation, e.g. `rnqkbs/pppppp/6/6/PPPPPP/RNQKBS w`.
    #[clap(default_value_t)]
    pos: Position,
}

impl Analyze {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        println!("{}", self.pos);

        if self.grid {
            println!("{}", ron::ser::to_string(&Grid::from(self.pos))?);
        }

        let moves: Vec<_> = self.pos.moves().collect();
        info!(turn = %self.pos.turn(), check = self.pos.is_check(), moves = moves.len());

        for m in moves {
            println!("{m}");
        }

        match self.pos.outcome() {
            None => println!("ongoing"),
            Some(o) => println!("{o}"),
        }

        Ok(())
    }
}
