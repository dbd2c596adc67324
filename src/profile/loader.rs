//! One-shot loading of the profile document into a [`ProfileStore`].
//!
//! A load is attempted exactly once. Failures are logged and leave the
//! previous snapshot in place so the chat keeps answering in degraded mode.

use super::store::{ProfileSnapshot, ProfileStore};
use super::ProfileDocument;
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Where the profile document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    File(PathBuf),
}

impl ProfileSource {
    pub fn file<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    fn detect(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

pub struct ProfileLoader {
    source: ProfileSource,
}

impl ProfileLoader {
    pub fn new(source: ProfileSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &ProfileSource {
        &self.source
    }

    /// Reads and parses the document without touching any store.
    pub fn read_snapshot(&self) -> Result<ProfileSnapshot> {
        match &self.source {
            ProfileSource::File(path) => {
                let bytes = fs::read(path)
                    .with_context(|| format!("Failed reading profile document {:?}", path))?;
                let document = parse_document(&bytes, DocumentFormat::detect(path))
                    .with_context(|| format!("Failed parsing profile document {:?}", path))?;
                Ok(ProfileSnapshot::from_source(document, &bytes))
            }
        }
    }

    /// Loads once and installs the result. Returns whether a new snapshot
    /// was installed; on failure the prior snapshot is kept.
    pub fn load_into(&self, store: &ProfileStore) -> bool {
        match self.read_snapshot() {
            Ok(snapshot) => {
                info!(
                    "event=profile_load status=ok source={} fingerprint={} empty={}",
                    self.source.describe(),
                    snapshot.fingerprint.as_deref().unwrap_or("-"),
                    snapshot.document.is_empty()
                );
                store.install(snapshot);
                true
            }
            Err(err) => {
                warn!(
                    "event=profile_load status=failed source={} error={:#}",
                    self.source.describe(),
                    err
                );
                false
            }
        }
    }

    /// Runs [`ProfileLoader::load_into`] on a background thread.
    pub fn spawn(self, store: Arc<ProfileStore>) -> Result<JoinHandle<bool>> {
        thread::Builder::new()
            .name("profile-loader".into())
            .spawn(move || self.load_into(&store))
            .context("Failed to spawn profile loader thread")
    }
}

fn parse_document(bytes: &[u8], format: DocumentFormat) -> Result<ProfileDocument> {
    let document = match format {
        DocumentFormat::Json => serde_json::from_slice(bytes)?,
        DocumentFormat::Yaml => serde_yaml::from_slice(bytes)?,
    };
    Ok(document)
}
