use std::fmt;
use crossbeam::queue::SegQueue;
use crate::pool::structs::object_pool::ObjectPool;

impl<T> ObjectPool<T> {
    pub fn new<F>(factory: F) -> ObjectPool<T>
    where
        F: Fn() -> T + Send + Sync + 'static
    {
        ObjectPool {
            idle: SegQueue::new(),
            factory: Box::new(factory),
            reset: None,
        }
    }

    pub fn with_reset<F, R>(factory: F, reset: R) -> ObjectPool<T>
    where
        F: Fn() -> T + Send + Sync + 'static,
        R: Fn(&mut T) + Send + Sync + 'static
    {
        ObjectPool {
            idle: SegQueue::new(),
            factory: Box::new(factory),
            reset: Some(Box::new(reset)),
        }
    }

    /// Takes an idle instance, or builds a fresh one when none is parked.
    #[inline]
    pub fn get(&self) -> T {
        self.idle.pop().unwrap_or_else(|| (self.factory)())
    }

    /// Parks `value` for reuse after restoring its initial shape.
    #[inline]
    pub fn put(&self, mut value: T) {
        if let Some(reset) = &self.reset {
            reset(&mut value);
        }
        self.idle.push(value);
    }

    pub fn idle(&self) -> usize {
        self.idle.len()
    }
}

impl<T> fmt::Debug for ObjectPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("idle", &self.idle.len())
            .field("reset", &self.reset.is_some())
            .finish()
    }
}
