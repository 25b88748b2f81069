//! Reconciliation records
//!
//! A [`ResourceRecord`] links one declared resource to the remote object it
//! manages. The host owns and persists it; lifecycle operations receive it by
//! mutable reference and either update it completely or leave it untouched.

use crate::error::{CloudError, Result};
use crate::schema::AttributeMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Last-known state of a single resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Remote identity in its external string form. `None` until created or imported.
    pub id: Option<String>,

    /// Resource type (e.g., "tracker_project")
    pub resource_type: String,

    /// Last-known attribute values
    pub attributes: AttributeMap,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl ResourceRecord {
    pub fn new(resource_type: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            resource_type: resource_type.into(),
            attributes: AttributeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Stored identity, or [`CloudError::MissingIdentifier`] for an untracked record
    pub fn id(&self) -> Result<&str> {
        self.id.as_deref().ok_or(CloudError::MissingIdentifier)
    }

    /// Whether the record points at a remote object
    pub fn is_tracked(&self) -> bool {
        self.id.is_some()
    }

    /// Store the identity. Re-storing the same value leaves the timestamp alone.
    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.id.as_deref() != Some(id.as_str()) {
            self.id = Some(id);
            self.updated_at = Utc::now();
        }
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key, value);
        self.updated_at = Utc::now();
    }

    /// Overwrite the given attributes, keeping every other stored value
    pub fn merge_attributes(&mut self, attributes: AttributeMap) {
        self.attributes.merge(attributes);
        self.updated_at = Utc::now();
    }

    /// Forget the remote object; used after a successful delete
    pub fn clear(&mut self) {
        self.id = None;
        self.attributes = AttributeMap::new();
        self.updated_at = Utc::now();
    }
}
