/// ACM Chess domain types and rules.
pub mod chess;
/// Assorted utilities.
pub mod util;
