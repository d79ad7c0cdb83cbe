use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_get_missing_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("user"), Ok(None));
    assert!(store.is_empty());
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set("isAuthenticated", "true").unwrap();
    assert_eq!(store.get("isAuthenticated").unwrap().as_deref(), Some("true"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_absent_key_succeeds() {
    let store = MemoryStore::new();
    assert_eq!(store.remove("user"), Ok(()));
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let reloaded = store.clone();
    store.set("user", "{}").unwrap();
    assert_eq!(reloaded.get("user").unwrap().as_deref(), Some("{}"));
    reloaded.remove("user").unwrap();
    assert!(store.is_empty());
}

#[test]
fn memory_store_with_entries_seeds_map() {
    let store = MemoryStore::with_entries([("a", "1"), ("b", "2")]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
}

// =============================================================
// BrowserStore (non-browser build)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_inert_off_browser() {
    let store = BrowserStore;
    assert_eq!(store.set("user", "x"), Ok(()));
    assert_eq!(store.get("user"), Ok(None));
    assert_eq!(store.remove("user"), Ok(()));
}
