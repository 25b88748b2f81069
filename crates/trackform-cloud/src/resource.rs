//! Resource lifecycle trait

use crate::error::Result;
use crate::record::ResourceRecord;
use crate::schema::{AttributeMap, Schema};
use async_trait::async_trait;

/// Lifecycle operations of one managed resource type
///
/// The host calls these in response to a diff between declared and recorded
/// state. Each call performs at most one remote round trip, and no call
/// touches `record` unless it succeeds.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Strongly typed desired state
    type Config: Send + Sync;

    /// Returns the resource type name (e.g., "tracker_project")
    fn resource_type(&self) -> &str;

    /// Attribute declaration for this resource type
    fn schema(&self) -> Schema;

    /// Build the typed desired state from validated declarative input
    fn config_from_attributes(&self, attributes: &AttributeMap) -> Result<Self::Config>;

    /// Create the remote object and store its identity
    async fn create(&self, desired: &Self::Config, record: &mut ResourceRecord) -> Result<()>;

    /// Refresh the record from the remote object
    async fn read(&self, record: &mut ResourceRecord) -> Result<()>;

    /// Overwrite the remote object with the desired state
    async fn update(&self, desired: &Self::Config, record: &mut ResourceRecord) -> Result<()>;

    /// Delete the remote object and clear the record
    async fn delete(&self, record: &mut ResourceRecord) -> Result<()>;

    /// Authoritative existence check
    async fn exists(&self, record: &ResourceRecord) -> Result<bool>;

    /// Adopt an existing remote object by identifier
    ///
    /// The identifier is stored verbatim; it is checked by the read the host
    /// performs afterwards.
    fn import(&self, id: &str) -> Result<ResourceRecord> {
        tracing::info!("Importing {} {}", self.resource_type(), id);
        Ok(ResourceRecord::new(self.resource_type()).with_id(id))
    }
}
