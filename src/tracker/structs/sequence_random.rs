use std::sync::atomic::AtomicUsize;

/// Replays `values` in a loop, each reduced modulo the requested bound.
#[derive(Debug)]
pub struct SequenceRandom {
    pub(crate) values: Vec<u64>,
    pub(crate) cursor: AtomicUsize,
}
