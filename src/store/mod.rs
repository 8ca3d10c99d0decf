//! JSON-file-backed hotel reservation store.
//!
//! The whole document is loaded, changed and written back on every
//! operation. A missing file is an empty store; a file that is not a JSON
//! object is reported and treated as empty. A JSON object holding a record
//! that does not fit the model is an error, so the file is never rewritten
//! without it.

pub mod customers;
pub mod hotels;
pub mod reservations;

use crate::core::Storage;
use crate::domain::model::StoreData;
use crate::utils::error::{BatchError, Result};
use serde::Serialize;

pub use customers::CustomerChanges;
pub use hotels::HotelChanges;

pub struct JsonStore<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> JsonStore<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub async fn load(&self) -> Result<StoreData> {
        if !self.storage.exists(&self.path).await {
            tracing::debug!("Data file {} does not exist yet, starting empty", self.path);
            return Ok(StoreData::default());
        }

        let bytes = self.storage.read_file(&self.path).await?;
        let value: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Could not load {}: {}", self.path, e);
                return Ok(StoreData::default());
            }
        };

        if !value.is_object() {
            tracing::error!("Could not load {}: the data file must hold a JSON object", self.path);
            return Ok(StoreData::default());
        }

        serde_json::from_value(value).map_err(|e| {
            tracing::error!("Could not load {}: {}", self.path, e);
            BatchError::UnreadableRecord {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })
    }

    pub async fn save(&self, data: &StoreData) -> Result<()> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        data.serialize(&mut serializer)?;

        self.storage.write_file(&self.path, &buffer).await?;
        tracing::debug!("Saved {} bytes to {}", buffer.len(), self.path);
        Ok(())
    }
}
