use std::sync::atomic::{AtomicUsize, Ordering};
use crate::tracker::structs::sequence_random::SequenceRandom;
use crate::tracker::traits::random_source::RandomSource;

impl SequenceRandom {
    pub fn new(values: Vec<u64>) -> SequenceRandom {
        SequenceRandom {
            values,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn below(&self, upper: u64) -> u64 {
        if self.values.is_empty() || upper == 0 {
            return 0;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[index] % upper
    }
}
