//! Object recycling for hot-path allocations.
//!
//! Announces allocate the same few shapes over and over: compact peer list
//! buffers, bencode scratch space and peer records. `ObjectPool<T>` keeps
//! idle instances on a lock-free queue so callers on any thread can take
//! and return them without a shared lock. `Pools` bundles the instances a
//! tracker needs and is owned by the runtime context, never a global.

/// Pool structures.
pub mod structs;

/// Pool behaviour.
pub mod impls;
