use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Cell, Grid};

/// Length of the seed strings produced by [`random_seed`]
pub const SEED_LENGTH: usize = 32;

const SEED_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Build the generation-0 grid for the given dimensions and seed string.
///
/// The seed is expanded into a ChaCha8 key, so the same (width, height,
/// seed) triple always produces the same grid. The first draw after seeding
/// picks how many placement draws to make (between 1 and width*height
/// inclusive); each placement draw then picks a column and a row, in that
/// order.
///
/// The placement scaling by `width - 1` / `height - 1` never selects the
/// last column or row, and draws may land on the same cell more than once,
/// so the draw count is only an upper bound on the live-cell count. Both
/// quirks are part of the documented seeding scheme: callers rely on
/// seed-for-seed stability, so do not change the formulas.
pub fn initialize(width: usize, height: usize, seed: &str) -> Grid {
    let mut grid = Grid::new(width, height);
    let mut rng = ChaCha8Rng::from_seed(expand_seed(seed));

    let cell_count = (width * height) as f64;
    let iterations = (rng.random::<f64>() * cell_count + 1.0).floor() as usize;

    for _ in 0..iterations {
        let x = (rng.random::<f64>() * (width - 1) as f64).floor() as usize;
        let y = (rng.random::<f64>() * (height - 1) as f64).floor() as usize;
        grid.set(x, y, Cell::Alive);
    }

    grid
}

/// Expand a seed string into ChaCha8 key material by cycling its UTF-8
/// bytes to 32 bytes. The empty seed maps to the all-zero key.
fn expand_seed(seed: &str) -> [u8; 32] {
    let mut key = [0u8; 32];
    if !seed.is_empty() {
        for (slot, byte) in key.iter_mut().zip(seed.bytes().cycle()) {
            *slot = byte;
        }
    }
    key
}

/// Generate a fresh 32-character lowercase-alphanumeric seed string
pub fn random_seed() -> String {
    let mut rng = rand::rng();
    (0..SEED_LENGTH)
        .map(|_| SEED_CHARSET[rng.random_range(0..SEED_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_reproduces_grid() {
        let a = initialize(20, 20, "a-reproducible-seed");
        let b = initialize(20, 20, "a-reproducible-seed");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = initialize(20, 20, "seed-one");
        let b = initialize(20, 20, "seed-two");
        assert_ne!(a, b);
    }

    #[test]
    fn test_live_count_within_bounds() {
        for seed in ["", "x", "hello world", "0123456789abcdef"] {
            let grid = initialize(10, 8, seed);
            let live = grid.live_count();
            assert!(live >= 1, "seed {seed:?} produced an empty board");
            assert!(live <= 10 * 8, "seed {seed:?} overfilled the board");
        }
    }

    #[test]
    fn test_last_row_and_column_stay_dead() {
        // The placement draws scale by width-1 / height-1, so index
        // width-1 / height-1 itself is unreachable.
        for seed in ["alpha", "beta", "gamma"] {
            let grid = initialize(12, 9, seed);
            for x in 0..12 {
                assert_eq!(grid.get(x, 8), Some(Cell::Dead));
            }
            for y in 0..9 {
                assert_eq!(grid.get(11, y), Some(Cell::Dead));
            }
        }
    }

    #[test]
    fn test_one_by_one_grid_gets_its_single_cell() {
        // With width == height == 1 every placement draw collapses to
        // (0, 0), which is also the only cell.
        let grid = initialize(1, 1, "tiny");
        assert_eq!(grid.live_count(), 1);
    }

    #[test]
    fn test_dimensions_participate_in_layout_not_seeding() {
        let grid = initialize(30, 15, "rectangular");
        assert_eq!(grid.dimensions(), (30, 15));
    }

    #[test]
    fn test_random_seed_shape() {
        let seed = random_seed();
        assert_eq!(seed.len(), SEED_LENGTH);
        assert!(seed.bytes().all(|b| SEED_CHARSET.contains(&b)));
    }
}
