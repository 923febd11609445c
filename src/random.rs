use rand::Rng;

#[cfg(test)]
use mockall::automock;

/// Randomness seam for question generation. Everything the generator draws
/// goes through this trait so tests can pin down a specific branch (e.g. the
/// hard-division remainder path) without fighting a real RNG.
#[cfg_attr(test, automock)]
pub trait RandomSource {
    /// Random integer in `[min, max]`, inclusive on both ends.
    fn int_between(&mut self, min: i32, max: i32) -> i32;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Random index in `[0, len)`. Used for pool picks and shuffling.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Default source backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn int_between(&mut self, min: i32, max: i32) -> i32 {
        rand::thread_rng().gen_range(min..=max)
    }

    fn chance(&mut self, probability: f64) -> bool {
        rand::thread_rng().gen_bool(probability)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
