//! Form synchronization engine.
//!
//! Automatically persists a form's field values to a pluggable storage
//! backend as the user edits, restores them when the form comes back, and
//! clears them on successful submission.
//!
//! # Architecture
//!
//! - **Registry/Keys**: derives a unique storage key per form and enforces
//!   uniqueness through an injectable `KeyRegistry`
//! - **Filter**: decides which controls participate in sync
//! - **Debounce**: coalesces edit bursts into one trailing persist
//! - **FieldSource**: the seam to the live form (an in-memory
//!   implementation ships for headless hosts and tests)
//! - **Engine**: orchestrates restore → listen → persist/clear
//! - **Binding**: one-shot mount/unmount holder for host lifecycles
//!
//! # Lifecycle
//!
//! 1. **Start**: resolve the storage key and backend; configuration errors
//!    abort before any listener is attached
//! 2. **Restore**: apply any previously persisted snapshot to live fields
//! 3. **Listen**: attach one listener per syncable field plus a submit
//!    listener; edits persist after the quiet period
//! 4. **Dispose**: detach exactly what was attached, exactly once
//!
//! # Example
//!
//! ```no_run
//! use formsync_engine::{FieldSpec, KeyRegistry, MemoryForm, SyncEngine, SyncOptions};
//! use std::sync::Arc;
//!
//! # async fn demo() -> formsync_engine::ConfigResult<()> {
//! let form = Arc::new(
//!     MemoryForm::new("login")
//!         .field(FieldSpec::text("username"))
//!         .field(FieldSpec::checkbox("remember")),
//! );
//!
//! let registry = KeyRegistry::new();
//! let options = SyncOptions::default().with_clear_on_submit(true);
//! let mut handle = SyncEngine::start(form, options, &registry).await?;
//! // ... later, on unmount:
//! handle.dispose();
//! # Ok(())
//! # }
//! ```

mod binding;
mod debounce;
mod engine;
mod error;
mod filter;
mod form;
mod keys;
mod options;
mod registry;
mod restore;
mod serialize;

pub use binding::FormBinding;
pub use debounce::Debouncer;
pub use engine::{EngineState, SyncEngine, SyncHandle};
pub use error::{ConfigError, ConfigResult};
pub use filter::{is_syncable, listen_kind};
pub use form::memory::{FieldSpec, MemoryForm, SubmitHandler};
pub use form::{EventSender, FieldSource, FormEvent, SubmitFuture, Subscription};
pub use keys::resolve_key;
pub use options::{ClearCallback, SnapshotCallback, SyncOptions};
pub use registry::{KeyRegistration, KeyRegistry};
pub use serialize::snapshot;
