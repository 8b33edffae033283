//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
