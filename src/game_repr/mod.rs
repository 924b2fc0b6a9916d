mod moves;
mod piece;
mod position;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use piece::*;
pub use position::*;
