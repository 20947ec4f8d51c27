use crossbeam::queue::SegQueue;

pub type PoolFactory<T> = Box<dyn Fn() -> T + Send + Sync>;
pub type PoolReset<T> = Box<dyn Fn(&mut T) + Send + Sync>;

pub struct ObjectPool<T> {
    pub(crate) idle: SegQueue<T>,
    pub(crate) factory: PoolFactory<T>,
    pub(crate) reset: Option<PoolReset<T>>,
}
