//! Cache backends for rendered dashboard pages.

mod memory;

pub use memory::MemoryCache;
