//! Tracker provider for trackform
//!
//! This crate implements the `tracker_project` resource: it reconciles a
//! declared project with the Tracker REST API through create, read, update,
//! delete, exists and import.
//!
//! # Requirements
//!
//! - An API token in `TRACKER_API_TOKEN` or `~/.config/trackform/config.yaml`
//!
//! # Example
//!
//! ```ignore
//! use trackform_cloud::{Resource, ResourceRecord};
//! use trackform_tracker::{ProjectConfig, ProjectResource, TrackerClient, TrackerConfig};
//!
//! let client = TrackerClient::new(TrackerConfig::from_env()?)?;
//! let projects = ProjectResource::new(client);
//!
//! let mut record = ResourceRecord::new("tracker_project");
//! projects.create(&ProjectConfig::new("Demo"), &mut record).await?;
//! projects.read(&mut record).await?;
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod project;

#[cfg(test)]
mod testing;

pub use client::{ProjectApi, TrackerClient, TrackerConfig};
pub use error::{Result, TrackerError};
pub use model::{CreateProjectRequest, Project, ProjectFields, TimeZone, UpdateProjectRequest};
pub use project::{ProjectConfig, ProjectResource, RESOURCE_TYPE, project_schema};
