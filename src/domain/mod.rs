mod cell;
mod grid;
mod seeder;

pub use cell::Cell;
pub use grid::Grid;
pub use seeder::{SEED_LENGTH, initialize, random_seed};
