use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod analyze;
mod perft;

#[derive(From, Subcommand)]
pub enum Applet {
    Analyze(analyze::Analyze),
    Perft(perft::Perft),
}

impl Default for Applet {
    fn default() -> Self {
        analyze::Analyze::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Analyze(a) => a.execute(),
            Applet::Perft(a) => a.execute(),
        }
    }
}
