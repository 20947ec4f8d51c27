pub mod object_pool;
pub mod pools;
