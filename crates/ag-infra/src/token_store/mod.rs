//! Token store adapters.

mod file_store;
mod memory;

pub use file_store::FileTokenStore;
pub use memory::MemoryTokenStore;
