// Entity Catalog - Core Library
// Exposes the shared-state containers and the four entity types for use
// in the demo harness and tests

pub mod entities;
pub mod shared;

// Re-export commonly used types
pub use entities::{
    Book, ConstructResult, InvalidAttribute, Person, Record, Rectangle,
};
pub use shared::{Registry, SharedValue};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
