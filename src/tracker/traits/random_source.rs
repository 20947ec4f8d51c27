use std::fmt::Debug;

/// Source of the store's and the announce service's random picks.
pub trait RandomSource: Send + Sync + Debug {
    /// Uniform value in `[0, upper)`, zero when `upper` is zero.
    fn below(&self, upper: u64) -> u64;
}
