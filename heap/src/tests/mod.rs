
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const SEED: u64 = 0x5eed_1e55;

pub fn lt(a: &u32, b: &u32) -> bool {
    a < b
}

/// Distinct values in random order so that the retained set has a single valid answer
pub fn shuffled_stream(len: u32) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut stream: Vec<u32> = (0..len).collect();
    stream.shuffle(&mut rng);
    stream
}

pub fn random_stream(len: usize, upper: u32) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..len).map(|_| rng.gen_range(0..upper)).collect()
}
