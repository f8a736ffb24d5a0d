use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.load("dark_mode").unwrap(), None);
}

#[test]
fn memory_store_save_overwrites() {
    let mut store = MemoryStore::with_item("dark_mode", "on");
    store.save("dark_mode", "off").unwrap();
    assert_eq!(store.get("dark_mode"), Some("off"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_keys_are_independent() {
    let mut store = MemoryStore::new();
    store.save("a", "on").unwrap();
    assert_eq!(store.load("b").unwrap(), None);
}

// =============================================================
// MemorySurface
// =============================================================

#[test]
fn memory_surface_marker_add_and_remove() {
    let mut surface = MemorySurface::new();
    surface.set_marker("dark", true).unwrap();
    assert!(surface.has_marker("dark").unwrap());
    surface.set_marker("dark", false).unwrap();
    assert!(!surface.has_marker("dark").unwrap());
}

#[test]
fn memory_surface_remove_keeps_other_classes() {
    let mut surface = MemorySurface::with_classes(false, ["dark", "layout-wide"]);
    surface.set_marker("dark", false).unwrap();
    assert_eq!(surface.classes().collect::<Vec<_>>(), vec!["layout-wide"]);
}

#[test]
fn memory_surface_remove_missing_class_is_noop() {
    let mut surface = MemorySurface::new();
    surface.set_marker("dark", false).unwrap();
    assert_eq!(surface.classes().count(), 0);
}

#[test]
fn memory_surface_checked_round_trips() {
    let mut surface = MemorySurface::new();
    assert!(!surface.is_checked().unwrap());
    surface.set_checked(true).unwrap();
    assert!(surface.checked());
}
