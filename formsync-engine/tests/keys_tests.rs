use formsync_engine::{resolve_key, ConfigError, KeyRegistry};

#[test]
fn explicit_key_wins_over_identity() {
    let registry = KeyRegistry::new();
    let reg = resolve_key("login", Some("custom"), &registry).unwrap();

    assert_eq!(reg.key(), "custom");
    assert!(registry.contains("custom"));
    assert!(!registry.contains("login"));
}

#[test]
fn identity_is_the_fallback() {
    let registry = KeyRegistry::new();
    let reg = resolve_key("login", None, &registry).unwrap();
    assert_eq!(reg.key(), "login");
}

#[test]
fn key_is_trimmed() {
    let registry = KeyRegistry::new();
    let reg = resolve_key("  login  ", None, &registry).unwrap();

    assert_eq!(reg.key(), "login");
    assert!(registry.contains("login"));
}

#[test]
fn empty_identity_without_explicit_key_fails() {
    let registry = KeyRegistry::new();
    let err = resolve_key("", None, &registry).unwrap_err();

    assert!(matches!(err, ConfigError::EmptyKey));
    assert!(registry.is_empty());
}

#[test]
fn whitespace_only_explicit_key_fails() {
    let registry = KeyRegistry::new();
    let err = resolve_key("login", Some("   "), &registry).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyKey));
}

#[test]
fn duplicate_key_fails_deterministically() {
    let registry = KeyRegistry::new();
    let _held = resolve_key("login", None, &registry).unwrap();

    let err = resolve_key("login", None, &registry).unwrap_err();
    match err {
        ConfigError::DuplicateKey(key) => assert_eq!(key, "login"),
        other => panic!("expected DuplicateKey, got {other:?}"),
    }

    // The failed resolution must not have disturbed the first registration.
    assert!(registry.contains("login"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn registration_is_made_before_resolve_returns() {
    let registry = KeyRegistry::new();
    let reg = resolve_key("login", None, &registry).unwrap();

    // Registered the moment we hold the guard.
    assert!(registry.contains(reg.key()));
}

#[test]
fn dropping_registration_releases_the_key() {
    let registry = KeyRegistry::new();
    {
        let _reg = resolve_key("login", None, &registry).unwrap();
        assert!(registry.contains("login"));
    }
    assert!(!registry.contains("login"));

    // Re-registering after release works.
    let reg = resolve_key("login", None, &registry).unwrap();
    assert_eq!(reg.key(), "login");
}

#[test]
fn registries_are_independent() {
    let a = KeyRegistry::new();
    let b = KeyRegistry::new();

    let _reg_a = resolve_key("login", None, &a).unwrap();
    let _reg_b = resolve_key("login", None, &b).unwrap();
}

#[test]
fn cloned_registry_shares_state() {
    let registry = KeyRegistry::new();
    let clone = registry.clone();

    let _reg = resolve_key("login", None, &registry).unwrap();
    assert!(clone.contains("login"));
    assert!(matches!(
        resolve_key("login", None, &clone),
        Err(ConfigError::DuplicateKey(_))
    ));
}
