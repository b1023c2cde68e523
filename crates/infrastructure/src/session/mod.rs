//! Session store implementations
//!
//! [`InMemorySessionStore`] is the default; [`FileSessionStore`] keeps the
//! session in a JSON file so it survives restarts.

mod file_store;
mod memory_store;

pub use file_store::FileSessionStore;
pub use memory_store::InMemorySessionStore;
