use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// Generate `n` strictly increasing breakpoints starting at `start`,
/// with uneven spacing between 0.1 and 1.1.
pub fn random_breakpoints(rng: &mut StdRng, n: usize, start: f64) -> Vec<f64> {
    randn::<f64>(rng, n)
        .iter()
        .scan(start, |x, dx| {
            let out = *x;
            *x += dx + 0.1;
            Some(out)
        })
        .collect()
}
