//! Conversation store and sample data

mod loader;
mod seed;
mod types;

pub use loader::*;
pub use seed::*;
pub use types::*;
