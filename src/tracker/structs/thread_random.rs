/// Randomness from the calling thread's generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;
