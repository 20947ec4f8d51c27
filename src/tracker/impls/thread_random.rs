use rand::RngExt;
use crate::tracker::structs::thread_random::ThreadRandom;
use crate::tracker::traits::random_source::RandomSource;

impl RandomSource for ThreadRandom {
    #[inline]
    fn below(&self, upper: u64) -> u64 {
        if upper == 0 {
            return 0;
        }
        rand::rng().random_range(0..upper)
    }
}
