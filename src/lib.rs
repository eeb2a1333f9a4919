// Domain layer - the pure simulation core
pub mod domain;

// Application layer - driver state and input validation
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, initialize, random_seed};
pub use application::{DimensionError, GameState, Phase, parse_dimension, validate_dimensions};
pub use ui::Button;
