//! Storage for menu items
//!
//! The service is deliberately volatile: everything lives in process memory
//! and a restart returns the store to its seed state.

pub mod memory;

pub use memory::MenuStore;
