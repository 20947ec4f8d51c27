/// Generic recycler over a lock-free queue.
pub mod object_pool;

/// The set of pools shared by the store and the transports.
pub mod pools;
