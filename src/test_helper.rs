use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::Color;

/// A reproducible set of random colors for property-style tests.
pub fn random_colors(count: usize) -> Vec<Color> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x00c0_ffee);
    (0..count)
        .map(|_| Color::from_rgb(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}
