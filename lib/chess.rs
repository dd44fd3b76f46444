mod bitboard;
mod board;
mod file;
mod grid;
mod r#move;
mod movegen;
mod outcome;
mod piece;
mod position;
mod rank;
mod role;
mod side;
mod square;

pub use bitboard::*;
pub use board::*;
pub use file::*;
pub use grid::*;
pub use outcome::*;
pub use piece::*;
pub use position::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use side::*;
pub use square::*;
