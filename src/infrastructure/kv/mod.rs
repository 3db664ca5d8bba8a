//! Key-value store adapters

pub mod file;
pub mod memory;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;
