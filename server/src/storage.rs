//! Object storage for guest photo binaries.
//!
//! DESIGN
//! ======
//! Objects live as flat files under one directory, served read-only by
//! `ServeDir` at the configured public prefix. Names are generated by
//! [`object_name`] and never reused: `put` opens with `create_new`, so an
//! upload can never overwrite another guest's photo.
//!
//! ERROR HANDLING
//! ==============
//! `remove` treats a missing file as success. The photo saga may compensate
//! for an object that a concurrent sweep already removed, and that must not
//! turn a reported insert failure into a second error.

use std::path::PathBuf;

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

const MAX_EXTENSION_LEN: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum ObjectStoreError {
    #[error("object already exists: {0}")]
    Exists(String),
    #[error("invalid object name: {0:?}")]
    InvalidName(String),
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Flat namespace of binary objects.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store a new object. Fails with [`ObjectStoreError::Exists`] rather than overwrite.
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<(), ObjectStoreError>;

    /// Delete an object. Deleting a missing object succeeds.
    async fn remove(&self, name: &str) -> Result<(), ObjectStoreError>;

    /// Names of every stored object.
    async fn list(&self) -> Result<Vec<String>, ObjectStoreError>;
}

// =============================================================================
// NAMING
// =============================================================================

/// Generate a unique object name `{unix_ms}-{random}.{ext}`, keeping the
/// uploaded file's extension.
#[must_use]
pub fn object_name(original_file_name: &str, now_ms: i64) -> String {
    let suffix: u64 = rand::random();
    match file_extension(original_file_name) {
        Some(ext) => format!("{now_ms}-{suffix:016x}.{ext}"),
        None => format!("{now_ms}-{suffix:016x}"),
    }
}

/// Lowercased alphanumeric extension of `file_name`, if it has a usable one.
fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.len() > MAX_EXTENSION_LEN {
        return None;
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Upload time encoded in an [`object_name`], in epoch milliseconds.
#[must_use]
pub fn object_timestamp(name: &str) -> Option<i64> {
    name.split_once('-').and_then(|(ms, _)| ms.parse().ok())
}

fn validate_name(name: &str) -> Result<(), ObjectStoreError> {
    let bad = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.contains("..");
    if bad {
        return Err(ObjectStoreError::InvalidName(name.to_owned()));
    }
    Ok(())
}

// =============================================================================
// DISK STORE
// =============================================================================

pub struct DiskStore {
    dir: PathBuf,
}

impl DiskStore {
    /// Open (creating if needed) the storage directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn open(dir: PathBuf) -> Result<Self, ObjectStoreError> {
        fs::create_dir_all(&dir).await?;
        info!(dir = %dir.display(), "photo storage ready");
        Ok(Self { dir })
    }

    fn path(&self, name: &str) -> Result<PathBuf, ObjectStoreError> {
        validate_name(name)?;
        Ok(self.dir.join(name))
    }
}

#[async_trait::async_trait]
impl ObjectStore for DiskStore {
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<(), ObjectStoreError> {
        let path = self.path(name)?;
        let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(ObjectStoreError::Exists(name.to_owned()));
            }
            Err(e) => return Err(e.into()),
        };

        let written = async {
            file.write_all(bytes).await?;
            file.flush().await
        }
        .await;

        if let Err(e) = written {
            // Leave no partial object behind.
            drop(file);
            if let Err(cleanup) = fs::remove_file(&path).await {
                warn!(%name, error = %cleanup, "failed to remove partial object");
            }
            return Err(e.into());
        }
        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<(), ObjectStoreError> {
        let path = self.path(name)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                info!(%name, "object removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(%name, "object already gone");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    /// In-memory object store with injectable write failures.
    #[derive(Default)]
    pub struct MemoryObjects {
        objects: Mutex<BTreeMap<String, Vec<u8>>>,
        fail_put: AtomicBool,
    }

    impl MemoryObjects {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        pub fn fail_put(&self, fail: bool) {
            self.fail_put.store(fail, Ordering::SeqCst);
        }

        pub fn insert(&self, name: &str, bytes: &[u8]) {
            self.lock().insert(name.to_owned(), bytes.to_vec());
        }

        #[must_use]
        pub fn names(&self) -> Vec<String> {
            self.lock().keys().cloned().collect()
        }

        #[must_use]
        pub fn get(&self, name: &str) -> Option<Vec<u8>> {
            self.lock().get(name).cloned()
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Vec<u8>>> {
            self.objects.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
        }
    }

    #[async_trait::async_trait]
    impl ObjectStore for MemoryObjects {
        async fn put(&self, name: &str, bytes: &[u8]) -> Result<(), ObjectStoreError> {
            validate_name(name)?;
            if self.fail_put.load(Ordering::SeqCst) {
                return Err(ObjectStoreError::Io(std::io::Error::other("injected put failure")));
            }
            let mut objects = self.lock();
            if objects.contains_key(name) {
                return Err(ObjectStoreError::Exists(name.to_owned()));
            }
            objects.insert(name.to_owned(), bytes.to_vec());
            Ok(())
        }

        async fn remove(&self, name: &str) -> Result<(), ObjectStoreError> {
            validate_name(name)?;
            self.lock().remove(name);
            Ok(())
        }

        async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
            Ok(self.names())
        }
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
