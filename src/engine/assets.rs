//! Asset store
//!
//! Screens register bitmaps by name. The store only records where each bitmap
//! lives and hands out a cheap [`Bitmap`] handle; decoding is left to the
//! rendering backend, which does it on first draw.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Stable identifier assigned when a bitmap is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitmapId(u32);

/// Handle to a registered bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    id: BitmapId,
    key: String,
    path: PathBuf,
}

impl Bitmap {
    pub fn id(&self) -> BitmapId {
        self.id
    }

    /// Name the bitmap was registered under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolved file path (asset root joined with the registered path)
    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub struct AssetStore {
    root: PathBuf,
    bitmaps: HashMap<String, Bitmap>,
    next_id: u32,
}

impl AssetStore {
    /// Creates an empty store resolving relative paths against `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        AssetStore {
            root: root.as_ref().to_path_buf(),
            bitmaps: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers a bitmap under `name`.
    ///
    /// Returns `false` if a bitmap with that name is already registered, in
    /// which case the existing entry is kept. A missing file is logged but
    /// still registered; the backend decides what to draw for it.
    pub fn load_and_add_bitmap(&mut self, name: &str, path: impl AsRef<Path>) -> bool {
        if self.bitmaps.contains_key(name) {
            log::debug!("Bitmap '{}' already registered", name);
            return false;
        }

        let full_path = self.root.join(path);
        if !full_path.exists() {
            log::warn!("Bitmap '{}' not found at {}", name, full_path.display());
        }

        let bitmap = Bitmap {
            id: BitmapId(self.next_id),
            key: name.to_string(),
            path: full_path,
        };
        self.next_id += 1;

        log::debug!("Registered bitmap '{}' -> {}", name, bitmap.path.display());
        self.bitmaps.insert(name.to_string(), bitmap);
        true
    }

    pub fn get_bitmap(&self, name: &str) -> Option<&Bitmap> {
        self.bitmaps.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut store = AssetStore::new("assets");
        assert!(store.load_and_add_bitmap("Background", "img/stage.png"));

        let bitmap = store.get_bitmap("Background").expect("registered");
        assert_eq!(bitmap.key(), "Background");
        assert_eq!(bitmap.path(), Path::new("assets/img/stage.png"));
    }

    #[test]
    fn test_duplicate_name_keeps_first_entry() {
        let mut store = AssetStore::new("assets");
        assert!(store.load_and_add_bitmap("Icon", "img/a.png"));
        assert!(!store.load_and_add_bitmap("Icon", "img/b.png"));

        let bitmap = store.get_bitmap("Icon").expect("registered");
        assert_eq!(bitmap.path(), Path::new("assets/img/a.png"));
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut store = AssetStore::new("assets");
        store.load_and_add_bitmap("A", "a.png");
        store.load_and_add_bitmap("B", "b.png");

        let a = store.get_bitmap("A").expect("registered").id();
        let b = store.get_bitmap("B").expect("registered").id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unknown_name() {
        let store = AssetStore::new("assets");
        assert!(store.get_bitmap("Nope").is_none());
    }
}
