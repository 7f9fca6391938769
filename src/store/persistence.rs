/// Review file persistence
///
/// The whole store is one JSON object on disk. Saves go through a temp
/// file and a rename, so a crash mid-write never leaves a truncated file.

use crate::core::Validator;
use crate::error::{ReviewError, Result};
use crate::store::Store;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default file name, relative to the working directory
pub const DEFAULT_FILE_NAME: &str = "reviews.json";

/// What came back from a forgiving load
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: Store,
    /// Set when the file existed but couldn't be used
    pub warning: Option<ReviewError>,
}

/// A review file on disk
#[derive(Debug, Clone)]
pub struct ReviewFile {
    path: PathBuf,
}

impl ReviewFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the store back from disk
    ///
    /// # Returns
    /// * `Ok(Store)` - The saved reviews, or an empty store on first run
    /// * `Err(ReviewError::CorruptStore)` - Bad JSON or a record that breaks the rules
    /// * `Err(ReviewError::Io)` - The file is there but can't be read
    pub fn load(&self) -> Result<Store> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No review file at {}, starting fresh", self.path.display());
                return Ok(Store::new());
            }
            Err(e) => return Err(e.into()),
        };

        let store: Store = serde_json::from_str(&json).map_err(|e| self.corrupt(e))?;

        for (title, record) in store.iter() {
            Validator::existing(title, record)
                .map_err(|e| self.corrupt(format!("review '{}': {}", title, e)))?;
        }

        tracing::info!(
            "Loaded {} review(s) from {}",
            store.len(),
            self.path.display()
        );

        Ok(store)
    }

    /// Load, falling back to an empty store on any failure
    ///
    /// The failure is logged and handed back so the caller can tell the user.
    /// A corrupt file is moved aside first, so the next save can't clobber it.
    pub fn load_or_empty(&self) -> LoadOutcome {
        let warning = match self.load() {
            Ok(store) => {
                return LoadOutcome {
                    store,
                    warning: None,
                }
            }
            Err(ReviewError::CorruptStore { path, reason, .. }) => {
                let backup = match self.move_aside() {
                    Ok(backup) => Some(backup),
                    Err(e) => {
                        tracing::warn!("Could not back up {}: {}", path.display(), e);
                        None
                    }
                };
                ReviewError::CorruptStore {
                    path,
                    reason,
                    backup,
                }
            }
            Err(e) => e,
        };

        tracing::warn!("Falling back to an empty store: {}", warning);
        LoadOutcome {
            store: Store::new(),
            warning: Some(warning),
        }
    }

    /// Write the whole store, replacing the file
    pub fn save(&self, store: &Store) -> Result<()> {
        let json = serde_json::to_string_pretty(store)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        if let Err(e) = write_and_rename(&temp_path, &self.path, json.as_bytes()) {
            // leftover temp file is useless
            let _ = fs::remove_file(&temp_path);
            tracing::warn!("Failed to save reviews to {}: {}", self.path.display(), e);
            return Err(e.into());
        }

        tracing::info!(
            "Saved {} review(s) to {}",
            store.len(),
            self.path.display()
        );

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling(".tmp")
    }

    // Same directory, file name plus `suffix`
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(suffix);
        self.path.with_file_name(name)
    }

    /// Rename the file to the first free `<name>.corrupt[.N]`
    fn move_aside(&self) -> std::io::Result<PathBuf> {
        let mut backup = self.sibling(".corrupt");
        let mut n = 1;
        while backup.exists() {
            backup = self.sibling(&format!(".corrupt.{}", n));
            n += 1;
        }

        fs::rename(&self.path, &backup)?;
        tracing::info!("Moved unreadable review file to {}", backup.display());
        Ok(backup)
    }

    fn corrupt(&self, reason: impl ToString) -> ReviewError {
        ReviewError::CorruptStore {
            path: self.path.clone(),
            reason: reason.to_string(),
            backup: None,
        }
    }
}

fn write_and_rename(temp_path: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    {
        let mut file = fs::File::create(temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
    }
    fs::rename(temp_path, path)
}
