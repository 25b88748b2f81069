//! trackform resource reconciliation
//!
//! This crate defines the contract between a declarative host and the
//! providers that synchronize one declared resource with a remote object
//! through a narrow CRUD API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                     host                         │
//! │   (parses declarations, diffs, schedules)        │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               trackform-cloud                    │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │          Resource lifecycle               │   │
//! │  │  trait Resource { create, read, ... }     │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────┐            │
//! │  │    Schema    │  │  Drift plan  │            │
//! │  └──────────────┘  └──────────────┘            │
//! └───────┬─────────────────────────────────────────┘
//!         │
//! ┌───────▼───────────┐
//! │ trackform-tracker │
//! │  project resource │
//! └───────────────────┘
//! ```

pub mod error;
pub mod id;
pub mod logging;
pub mod plan;
pub mod record;
pub mod resource;
pub mod schema;

// Re-exports
pub use error::{CloudError, RemoteError, Result};
pub use id::NumericId;
pub use plan::{Action, ActionType, AttributeChange, Plan, PlanSummary, apply_action, plan_resource};
pub use record::ResourceRecord;
pub use resource::Resource;
pub use schema::{Attribute, AttributeMap, AttributeType, Schema, SchemaError};
