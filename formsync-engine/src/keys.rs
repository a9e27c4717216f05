//! Storage-key resolution.

use crate::error::{ConfigError, ConfigResult};
use crate::registry::{KeyRegistration, KeyRegistry};
use tracing::debug;

/// Resolves and registers the storage key for one form.
///
/// The key is the explicit option when given, else the form's own identity
/// attribute. Fails with [`ConfigError::EmptyKey`] if the resolved string is
/// empty after trimming, or [`ConfigError::DuplicateKey`] if another active
/// engine holds it. On success the key is registered before this function
/// returns, so a second resolution of the same key fails deterministically.
/// No other side effects.
pub fn resolve_key(
    identity: &str,
    explicit: Option<&str>,
    registry: &KeyRegistry,
) -> ConfigResult<KeyRegistration> {
    let key = explicit.unwrap_or(identity).trim();

    if key.is_empty() {
        return Err(ConfigError::EmptyKey);
    }
    if !registry.register(key) {
        return Err(ConfigError::DuplicateKey(key.to_string()));
    }

    debug!("registered storage key: {}", key);
    Ok(KeyRegistration::new(key.to_string(), registry.clone()))
}
