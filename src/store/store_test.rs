use super::*;

fn temp_token_path() -> PathBuf {
    std::env::temp_dir().join(format!("shopwise-token-{}", uuid::Uuid::new_v4()))
}

// =============================================================================
// MemoryTokenStore
// =============================================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::new();
    assert!(store.get().is_none());
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryTokenStore::new();
    store.set("tok-1");
    assert_eq!(store.get().as_deref(), Some("tok-1"));
}

#[test]
fn memory_store_set_replaces_previous() {
    let store = MemoryTokenStore::new();
    store.set("tok-1");
    store.set("tok-2");
    assert_eq!(store.get().as_deref(), Some("tok-2"));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryTokenStore::new();
    store.set("tok-1");
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryTokenStore::new();
    store.clear();
    store.clear();
    assert!(store.get().is_none());
}

// =============================================================================
// FileTokenStore
// =============================================================================

#[test]
fn file_store_missing_file_is_empty() {
    let store = FileTokenStore::new(temp_token_path());
    assert!(store.get().is_none());
}

#[test]
fn file_store_round_trips_token() {
    let path = temp_token_path();
    let store = FileTokenStore::new(&path);
    store.set("tok-file");
    assert_eq!(store.get().as_deref(), Some("tok-file"));
    store.clear();
    let _ = std::fs::remove_file(path);
}

#[test]
fn file_store_trims_whitespace() {
    let path = temp_token_path();
    std::fs::write(&path, "  tok-padded\n").unwrap();
    let store = FileTokenStore::new(&path);
    assert_eq!(store.get().as_deref(), Some("tok-padded"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn file_store_blank_file_is_empty() {
    let path = temp_token_path();
    std::fs::write(&path, "\n").unwrap();
    let store = FileTokenStore::new(&path);
    assert!(store.get().is_none());
    let _ = std::fs::remove_file(path);
}

#[test]
fn file_store_clear_removes_file() {
    let path = temp_token_path();
    let store = FileTokenStore::new(&path);
    store.set("tok-file");
    store.clear();
    assert!(!path.exists());
    assert!(store.get().is_none());
}

#[test]
fn file_store_clear_missing_file_is_ok() {
    let store = FileTokenStore::new(temp_token_path());
    store.clear();
    store.clear();
}

#[test]
fn file_store_survives_reopen() {
    let path = temp_token_path();
    FileTokenStore::new(&path).set("tok-reload");
    let reopened = FileTokenStore::new(&path);
    assert_eq!(reopened.get().as_deref(), Some("tok-reload"));
    let _ = std::fs::remove_file(path);
}
