//! Host lifecycle binding.
//!
//! One-shot strategy: a binding holds everything needed to start, mounts at
//! most once at a time, and disposes exactly once on unmount. Hosts that
//! re-create their views (or change which form they point at) drop the
//! binding and build a new one.

use crate::engine::{SyncEngine, SyncHandle};
use crate::error::ConfigResult;
use crate::form::FieldSource;
use crate::options::SyncOptions;
use crate::registry::KeyRegistry;
use std::sync::Arc;
use tracing::{debug, warn};

/// Binds one form to one engine across the host's mount/unmount cycle.
pub struct FormBinding {
    form: Arc<dyn FieldSource>,
    options: SyncOptions,
    registry: KeyRegistry,
    handle: Option<SyncHandle>,
}

impl FormBinding {
    /// Creates an unmounted binding.
    #[must_use]
    pub fn new(form: Arc<dyn FieldSource>, options: SyncOptions, registry: KeyRegistry) -> Self {
        Self {
            form,
            options,
            registry,
            handle: None,
        }
    }

    /// Whether an engine is currently mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    /// Starts the engine. Mounting while already mounted is a guarded
    /// no-op. A start failure leaves the binding unmounted.
    pub async fn mount(&mut self) -> ConfigResult<()> {
        if self.handle.is_some() {
            debug!("binding already mounted, ignoring duplicate mount");
            return Ok(());
        }

        match SyncEngine::start(
            Arc::clone(&self.form),
            self.options.clone(),
            &self.registry,
        )
        .await
        {
            Ok(handle) => {
                self.handle = Some(handle);
                Ok(())
            }
            Err(e) => {
                warn!("failed to mount form binding: {}", e);
                Err(e)
            }
        }
    }

    /// Disposes the engine. Unmounting while unmounted is a no-op; the
    /// disposer runs exactly once per mount.
    pub fn unmount(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.dispose();
        }
    }
}
