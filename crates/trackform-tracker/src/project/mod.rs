//! The `tracker_project` resource

pub mod config;
pub mod resource;
pub mod schema;

pub use config::ProjectConfig;
pub use resource::{ProjectResource, RESOURCE_TYPE};
pub use schema::{SYNCED_ATTRIBUTES, project_schema};
