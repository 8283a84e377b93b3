// src/drift/store.rs

//! Persistent storage for the last accepted digest + snapshot pair.
//!
//! One storage directory tracks one configuration. The digest and the
//! full snapshot live in a single combined record (`drift-state.yaml`)
//! so a commit replaces both atomically: the record is written to a temp
//! file in the same directory and renamed into place. A crash can never
//! leave a digest pointing at a different document than the stored
//! snapshot.
//!
//! Records with only one half present (e.g. hand-seeded digests) are
//! valid; the missing half reads back as "no prior baseline".

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::Document;
use crate::drift::hash::Digest;
use crate::errors::{DriftrunError, Result};

/// File name of the combined state record inside a storage directory.
pub const STATE_FILE: &str = "drift-state.yaml";

const STATE_TMP_FILE: &str = ".drift-state.yaml.tmp";

/// Abstract storage for the last-seen digest and snapshot.
pub trait SnapshotStore {
    /// Digest of the last accepted document, if any.
    fn load_digest(&self) -> Result<Option<Digest>>;

    /// Last accepted document, or an empty mapping if none was stored.
    fn load_snapshot(&self) -> Result<Document>;

    /// Persist the digest and snapshot as one unit, replacing any prior
    /// state. Last writer wins.
    fn commit(&mut self, digest: &Digest, snapshot: &Document) -> Result<()>;
}

/// On-disk shape of the combined record.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    digest: Option<Digest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    snapshot: Option<Document>,
}

/// Stores state in `<dir>/drift-state.yaml`.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if dir.as_os_str().is_empty() {
            return Err(DriftrunError::Usage(
                "storage directory path must not be empty".to_string(),
            ));
        }
        Ok(Self { dir })
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    fn load_record(&self) -> Result<StateRecord> {
        let path = self.state_path();
        if !path.exists() {
            debug!(path = %path.display(), "no prior state record");
            return Ok(StateRecord::default());
        }
        let text = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load_digest(&self) -> Result<Option<Digest>> {
        Ok(self.load_record()?.digest)
    }

    fn load_snapshot(&self) -> Result<Document> {
        Ok(self.load_record()?.snapshot.unwrap_or_default())
    }

    fn commit(&mut self, digest: &Digest, snapshot: &Document) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let record = StateRecord {
            digest: Some(digest.clone()),
            snapshot: Some(snapshot.clone()),
        };
        let text = serde_yaml::to_string(&record)?;

        // Temp file lives in the same directory so the rename stays on
        // one filesystem.
        let tmp_path = self.dir.join(STATE_TMP_FILE);
        fs::write(&tmp_path, text.as_bytes())?;
        fs::rename(&tmp_path, self.state_path())?;

        info!(digest = %digest, path = %self.state_path().display(), "committed snapshot state (file)");
        Ok(())
    }
}

/// Stores state in memory only. Used in tests and by hosts that track
/// drift within a single process lifetime.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    digest: Option<Digest>,
    snapshot: Option<Document>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load_digest(&self) -> Result<Option<Digest>> {
        Ok(self.digest.clone())
    }

    fn load_snapshot(&self) -> Result<Document> {
        Ok(self.snapshot.clone().unwrap_or_default())
    }

    fn commit(&mut self, digest: &Digest, snapshot: &Document) -> Result<()> {
        self.digest = Some(digest.clone());
        self.snapshot = Some(snapshot.clone());
        info!(digest = %digest, "committed snapshot state (memory)");
        Ok(())
    }
}

/// Helper used by tests and hosts that seed a storage directory by hand:
/// absolute path of the state record for `dir`.
pub fn state_path(dir: &Path) -> PathBuf {
    dir.join(STATE_FILE)
}
