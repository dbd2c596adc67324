//! Holds the current profile snapshot and swaps it atomically on reload.

use super::ProfileDocument;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::sync::{Arc, RwLock};

/// Immutable copy of the profile document used for one or more router calls.
#[derive(Debug, Clone, Default)]
pub struct ProfileSnapshot {
    pub document: ProfileDocument,
    /// SHA-256 of the source bytes; `None` for the initial empty snapshot.
    pub fingerprint: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl ProfileSnapshot {
    pub fn from_source(document: ProfileDocument, source_bytes: &[u8]) -> Self {
        Self {
            document,
            fingerprint: Some(compute_fingerprint(source_bytes)),
            loaded_at: Some(Utc::now()),
        }
    }

    /// Snapshot built in memory, without a backing file.
    pub fn from_document(document: ProfileDocument) -> Self {
        Self {
            document,
            fingerprint: None,
            loaded_at: Some(Utc::now()),
        }
    }
}

/// Shared slot for the current snapshot.
///
/// Readers clone the inner `Arc`, so a reload never changes a snapshot that a
/// router call is already holding.
#[derive(Debug, Default)]
pub struct ProfileStore {
    current: RwLock<Arc<ProfileSnapshot>>,
}

impl ProfileStore {
    /// Store seeded with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: ProfileDocument) -> Self {
        Self {
            current: RwLock::new(Arc::new(ProfileSnapshot::from_document(document))),
        }
    }

    pub fn snapshot(&self) -> Arc<ProfileSnapshot> {
        let guard = self
            .current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Replaces the current snapshot and returns the one it displaced.
    pub fn install(&self, snapshot: ProfileSnapshot) -> Arc<ProfileSnapshot> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, Arc::new(snapshot))
    }
}

/// Lowercase hex SHA-256 of the provided bytes.
pub fn compute_fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}
