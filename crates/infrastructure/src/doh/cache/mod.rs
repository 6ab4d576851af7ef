mod memory;

pub use memory::MemoryResponseCache;
