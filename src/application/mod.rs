mod game_state;
mod validation;

pub use game_state::{GameState, Phase};
pub use validation::{DimensionError, MAX_DIMENSION, parse_dimension, validate_dimensions};
