use crate::error::Result;
use crate::model::Recipe;
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

/// Key under which the bookmark collection is persisted
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Durable key-value store holding string blobs
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn clear(&mut self, key: &str) -> Result<()>;
}

/// Stores each key as a `<key>.json` file inside a directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}

/// Insertion-ordered set of bookmarked recipes, written through to a [`BlobStore`]
/// after every mutation.
pub struct BookmarkStore {
    bookmarks: Vec<Recipe>,
    store: Box<dyn BlobStore>,
}

impl BookmarkStore {
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        Self {
            bookmarks: Vec::new(),
            store,
        }
    }

    /// Replace the set with the persisted one, if any.
    ///
    /// A blob that does not parse is returned as [`crate::AppError::Persistence`]; nothing is
    /// recovered from it.
    pub fn load(&mut self) -> Result<()> {
        if let Some(blob) = self.store.get(BOOKMARKS_KEY)? {
            self.bookmarks = serde_json::from_str(&blob)?;
            debug!("Loaded {} bookmarks", self.bookmarks.len());
        }
        Ok(())
    }

    /// Overwrite the persisted blob with the whole set
    pub fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.bookmarks)?;
        self.store.set(BOOKMARKS_KEY, &blob)
    }

    /// Append `recipe` and persist.
    ///
    /// Uniqueness is not checked here; use [`BookmarkStore::contains`] first. When `current`
    /// is the same recipe it is flagged as bookmarked.
    pub fn add(&mut self, mut recipe: Recipe, current: Option<&mut Recipe>) -> Result<()> {
        recipe.bookmarked = true;
        if let Some(current) = current {
            if current.id == recipe.id {
                current.bookmarked = true;
            }
        }
        debug!("Bookmarking recipe {}", recipe.id);
        self.bookmarks.push(recipe);
        self.persist()
    }

    /// Remove the bookmark with `id` and persist. Returns false, leaving the set untouched,
    /// when no such bookmark exists.
    pub fn remove(&mut self, id: &str, current: Option<&mut Recipe>) -> Result<bool> {
        let Some(index) = self.bookmarks.iter().position(|b| b.id == id) else {
            warn!("No bookmark with id {} to remove", id);
            return Ok(false);
        };

        self.bookmarks.remove(index);
        if let Some(current) = current {
            if current.id == id {
                current.bookmarked = false;
            }
        }
        debug!("Removed bookmark {}", id);
        self.persist()?;
        Ok(true)
    }

    /// Drop every bookmark and delete the persisted blob
    pub fn clear(&mut self) -> Result<()> {
        self.bookmarks.clear();
        self.store.clear(BOOKMARKS_KEY)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b.id == id)
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}

impl std::fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookmarkStore")
            .field("bookmarks", &self.bookmarks)
            .finish_non_exhaustive()
    }
}
