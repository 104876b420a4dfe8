//! Session Module
//!
//! Explicit ownership of the "current save".
//!
//! ## Concurrency Model
//! `SaveModel` is not internally synchronized. A single caller owns it via
//! [`Session`]; callers that need to share one across threads go through
//! [`SharedSave`], which serializes every get/set/export behind one mutex so
//! an export never observes a half-written field.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Result, SaveError};
use crate::io::{ByteSink, ByteSource};
use crate::model::SaveModel;

/// Holds at most one loaded save
#[derive(Debug, Default)]
pub struct Session {
    current: Option<SaveModel>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `bytes` as the current save
    ///
    /// On failure the previously loaded save, if any, stays current.
    pub fn open(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Result<&mut SaveModel> {
        let model = SaveModel::load(name, bytes)?;
        if let Some(old) = self.current.replace(model) {
            tracing::debug!("Replacing {}", old.name());
        }
        self.current_mut()
    }

    /// Load the current save from a byte source
    pub fn open_from<S: ByteSource>(&mut self, source: &mut S) -> Result<&mut SaveModel> {
        let (name, bytes) = source.read()?;
        self.open(name, bytes)
    }

    /// Hand the current save to a byte sink under its original name
    pub fn save_as<S: ByteSink>(&self, sink: &mut S) -> Result<()> {
        let model = self.current()?;
        sink.write(model.name(), model.export())
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Result<&SaveModel> {
        self.current.as_ref().ok_or(SaveError::NoSaveLoaded)
    }

    pub fn current_mut(&mut self) -> Result<&mut SaveModel> {
        self.current.as_mut().ok_or(SaveError::NoSaveLoaded)
    }

    /// Drop the current save and return it
    pub fn close(&mut self) -> Option<SaveModel> {
        self.current.take()
    }
}

/// A save shared between threads; every operation takes the lock
#[derive(Debug, Clone)]
pub struct SharedSave {
    inner: Arc<Mutex<SaveModel>>,
}

impl SharedSave {
    pub fn new(model: SaveModel) -> Self {
        Self {
            inner: Arc::new(Mutex::new(model)),
        }
    }

    pub fn get(&self, field: &str, index: Option<usize>) -> Result<u32> {
        self.inner.lock().get(field, index)
    }

    pub fn set(&self, field: &str, value: i64, index: Option<usize>) -> Result<u32> {
        self.inner.lock().set(field, value, index)
    }

    pub fn set_input(&self, field: &str, text: &str, index: Option<usize>) -> Result<u32> {
        self.inner.lock().set_input(field, text, index)
    }

    /// Copy of the buffer taken under the lock
    pub fn export(&self) -> Vec<u8> {
        self.inner.lock().export().to_vec()
    }

    pub fn name(&self) -> String {
        self.inner.lock().name().to_string()
    }

    /// Run several operations under a single lock acquisition
    pub fn with<R>(&self, f: impl FnOnce(&mut SaveModel) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
