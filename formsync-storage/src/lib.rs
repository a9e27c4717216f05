//! Storage layer for formsync.
//!
//! Defines the pluggable persistence contract and the two built-in backends:
//!
//! - `MemoryStore` — process-lifetime map, the session-storage analogue and
//!   the default when no backend is chosen
//! - `FileStore` — one file per key under a root directory, the
//!   local-storage analogue for cross-session persistence
//!
//! # Architecture
//!
//! Callers pick a backend through the `StorageChoice` tagged union; `resolve`
//! turns the choice into a `BackendHandle`, the failure-swallowing boundary
//! the engine talks to. Backend failures are logged and degrade to no-ops —
//! they never reach engine logic.

mod adapter;
mod error;
mod file;
mod handle;
mod memory;

pub use adapter::{resolve, StorageAdapter, StorageChoice};
pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use handle::BackendHandle;
pub use memory::MemoryStore;
