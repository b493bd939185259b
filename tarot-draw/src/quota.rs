//! Daily quota bookkeeping backed by a single key-value entry.
//!
//! The store never fails loudly: unreadable or corrupt records read as
//! absent, and write failures are logged and dropped. In-session state in the
//! controller stays correct whether or not persistence works.
use crate::constants::{MAX_DAILY_PICKS, STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;
use thiserror::Error;

/// Persisted record of today's draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPickRecord {
    /// Calendar date in the fixed local offset, `YYYY-MM-DD`.
    pub date: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_card_id: Option<u32>,
}

impl DailyPickRecord {
    /// Draw count that applies on `today`; a record from another day counts as zero.
    #[must_use]
    pub fn count_on(&self, today: &str) -> u32 {
        if self.date == today { self.count } else { 0 }
    }
}

/// Key-value persistence the quota store writes through.
pub trait QuotaBackend {
    type Error: std::error::Error + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be accessed.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

impl<B: QuotaBackend + ?Sized> QuotaBackend for &B {
    type Error = B::Error;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).write(key, value)
    }
}

#[derive(Debug, Error)]
pub enum QuotaError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("stored record is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[error("memory backend is unavailable")]
pub struct MemoryUnavailable;

/// In-memory backend; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_reads: Rc<Cell<bool>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent reads fail, mimicking blocked storage.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make subsequent writes fail, mimicking a full or disabled storage.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw entry access, bypassing failure injection.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl QuotaBackend for MemoryBackend {
    type Error = MemoryUnavailable;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.fail_reads.get() {
            return Err(MemoryUnavailable);
        }
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.fail_writes.get() {
            return Err(MemoryUnavailable);
        }
        self.insert_raw(key, value);
        Ok(())
    }
}

/// Backend with no storage at all; every load is empty and writes vanish.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl QuotaBackend for NullBackend {
    type Error = Infallible;

    fn read(&self, _key: &str) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Owner of the persisted daily record.
#[derive(Debug, Clone)]
pub struct QuotaStore<B> {
    backend: B,
    key: String,
}

impl<B: QuotaBackend> QuotaStore<B> {
    /// Store using the default storage key.
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Read and parse the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails or the value does not parse.
    pub fn try_load(&self) -> Result<Option<DailyPickRecord>, QuotaError> {
        let raw = self
            .backend
            .read(&self.key)
            .map_err(|err| QuotaError::Backend(err.to_string()))?;
        match raw {
            Some(text) if !text.is_empty() => Ok(Some(serde_json::from_str(&text)?)),
            _ => Ok(None),
        }
    }

    /// Stored record, or `None` when missing, unreadable, or corrupt.
    #[must_use]
    pub fn load(&self) -> Option<DailyPickRecord> {
        self.try_load().unwrap_or_else(|err| {
            log::warn!("ignoring stored daily record: {err}");
            None
        })
    }

    /// Serialize and write `record`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn try_save(&self, record: &DailyPickRecord) -> Result<(), QuotaError> {
        let text = serde_json::to_string(record)?;
        self.backend
            .write(&self.key, &text)
            .map_err(|err| QuotaError::Backend(err.to_string()))
    }

    /// Best-effort persist; failures are logged and swallowed.
    pub fn save(&self, record: &DailyPickRecord) {
        if let Err(err) = self.try_save(record) {
            log::warn!("daily record not persisted: {err}");
        }
    }

    /// Draws already completed on `today`.
    #[must_use]
    pub fn count_for(&self, today: &str) -> u32 {
        self.load().map_or(0, |record| record.count_on(today))
    }

    /// Record one completed draw of `card_id` on `today`.
    ///
    /// Re-reads the store instead of trusting a cached count, so a date that
    /// rolled over since the pick restarts the tally at one.
    pub fn commit_draw(&self, today: &str, card_id: u32) -> DailyPickRecord {
        let next = DailyPickRecord {
            date: today.to_string(),
            count: self.count_for(today).saturating_add(1),
            last_card_id: Some(card_id),
        };
        self.save(&next);
        next
    }
}

/// Draws left before the daily limit.
#[must_use]
pub const fn remaining(count: u32) -> u32 {
    MAX_DAILY_PICKS.saturating_sub(count)
}

/// Whether `count` has reached the daily limit.
#[must_use]
pub const fn is_over_quota(count: u32) -> bool {
    count >= MAX_DAILY_PICKS
}
