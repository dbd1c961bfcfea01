//! Demo session: context provider plus the durable-storage abstraction

mod context;
mod storage;

pub use context::*;
pub use storage::*;
