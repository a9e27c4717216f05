use formsync_storage::{MemoryStore, StorageAdapter};

#[tokio::test]
async fn save_then_load() {
    let store = MemoryStore::new();
    store.save("login", r#"[{"name":"a"}]"#).await.unwrap();

    let loaded = store.load("login").await.unwrap();
    assert_eq!(loaded.as_deref(), Some(r#"[{"name":"a"}]"#));
}

#[tokio::test]
async fn load_absent_key() {
    let store = MemoryStore::new();
    assert!(store.load("nothing").await.unwrap().is_none());
}

#[tokio::test]
async fn save_overwrites() {
    let store = MemoryStore::new();
    store.save("k", "first").await.unwrap();
    store.save("k", "second").await.unwrap();

    assert_eq!(store.load("k").await.unwrap().as_deref(), Some("second"));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn remove_deletes_record() {
    let store = MemoryStore::new();
    store.save("k", "v").await.unwrap();
    store.remove("k").await.unwrap();

    assert!(store.load("k").await.unwrap().is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn remove_absent_key_is_ok() {
    let store = MemoryStore::new();
    store.remove("never-saved").await.unwrap();
}

#[tokio::test]
async fn keys_are_independent() {
    let store = MemoryStore::new();
    store.save("a", "1").await.unwrap();
    store.save("b", "2").await.unwrap();
    store.remove("a").await.unwrap();

    assert!(store.load("a").await.unwrap().is_none());
    assert_eq!(store.load("b").await.unwrap().as_deref(), Some("2"));
}
