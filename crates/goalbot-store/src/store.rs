//! JSON-file persistence with atomic replace and corrupt-file quarantine.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use goalbot_core::document::Document;
use goalbot_core::models::{Goal, GoalStatus};
use goalbot_core::time::now_ts;

use crate::error::StoreError;

/// Goals seeded into a fresh document.
const DEFAULT_GOALS: [&str; 5] = [
    "Improve sleep routine",
    "Exercise consistently",
    "Reduce work stress",
    "Learn a new skill",
    "Practice mindfulness",
];

/// A fresh document: the five seeded goals, all active, nothing logged.
pub fn default_document() -> Document {
    Document {
        goals: DEFAULT_GOALS
            .iter()
            .map(|name| Goal {
                name: (*name).to_string(),
                status: GoalStatus::Active,
            })
            .collect(),
        ..Document::default()
    }
}

/// File-backed store for the whole document.
///
/// Every save rewrites the full document: a temp file is written next to
/// the canonical one and renamed over it, so a reader never observes a
/// truncated document. No cross-process locking; one local writer is
/// assumed.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted document.
    ///
    /// A missing or empty file is replaced with the seeded defaults.
    /// Unparseable content is renamed to a timestamped backup alongside
    /// the canonical file and replaced with the seeded defaults: the bad
    /// bytes stay recoverable and the load still succeeds. Only real I/O
    /// failures error.
    pub fn load(&self) -> Result<Document, StoreError> {
        if !self.path.exists() {
            let doc = default_document();
            self.save(&doc)?;
            info!(path = %self.path.display(), "initialized new document");
            return Ok(doc);
        }

        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            let doc = default_document();
            self.save(&doc)?;
            warn!(path = %self.path.display(), "document file was empty, reseeded defaults");
            return Ok(doc);
        }

        match serde_json::from_str::<Document>(&raw) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                let backup = self.quarantine()?;
                warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "document file was corrupt, quarantined and reseeded defaults"
                );
                let doc = default_document();
                self.save(&doc)?;
                Ok(doc)
            }
        }
    }

    /// Persist the full document atomically: write a sibling temp file,
    /// then rename it over the canonical path. Creates the parent
    /// directory when missing.
    pub fn save(&self, doc: &Document) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("tmp.json");
        fs::write(&tmp, json.as_bytes())?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Move the corrupt file to `{stem}_corrupt_{timestamp}.json` next to
    /// the canonical file. Colons in the timestamp are replaced to keep
    /// the name filesystem-safe.
    fn quarantine(&self) -> Result<PathBuf, StoreError> {
        let stamp = now_ts().replace(':', "-");
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("document");
        let backup = self.path.with_file_name(format!("{stem}_corrupt_{stamp}.json"));
        fs::rename(&self.path, &backup)?;
        Ok(backup)
    }
}
