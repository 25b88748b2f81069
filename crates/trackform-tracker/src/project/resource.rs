//! `tracker_project` lifecycle

use super::config::ProjectConfig;
use super::schema::project_schema;
use crate::client::ProjectApi;
use crate::model::Project;
use async_trait::async_trait;
use trackform_cloud::{
    AttributeMap, CloudError, NumericId, Resource, ResourceRecord, Result, Schema,
};

pub const RESOURCE_TYPE: &str = "tracker_project";

const CREATE_FAILED: &str = "creating new project failed";
const GET_FAILED: &str = "get project api call failed";
const UPDATE_FAILED: &str = "update project failed";
const DELETE_FAILED: &str = "delete project failed";

/// Reconciles one declared project with the Tracker API
pub struct ProjectResource<C> {
    client: C,
}

impl<C: ProjectApi> ProjectResource<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

/// Attributes a read overwrites from the remote project
fn synced_attributes(project: &Project) -> AttributeMap {
    AttributeMap::new()
        .with("account_id", project.account_id)
        .with("atom_enabled", project.atom_enabled)
        .with("automatic_planning", project.automatic_planning)
        .with(
            "bugs_and_chores_are_estimatable",
            project.bugs_and_chores_are_estimatable,
        )
        .with("description", project.description.clone())
        .with("enable_incoming_emails", project.enable_incoming_emails)
        .with("enable_tasks", project.enable_tasks)
        .with("initial_velocity", project.initial_velocity)
        .with("iteration_length", project.iteration_length)
        .with("name", project.name.clone())
        .with(
            "number_of_done_iterations_to_show",
            project.number_of_done_iterations_to_show,
        )
        .with("point_scale", project.point_scale.clone())
        .with("profile_content", project.profile_content.clone())
        .with("project_type", project.project_type.clone())
        .with("public", project.public)
        .with("velocity_averaged_over", project.velocity_averaged_over)
}

#[async_trait]
impl<C: ProjectApi> Resource for ProjectResource<C> {
    type Config = ProjectConfig;

    fn resource_type(&self) -> &str {
        RESOURCE_TYPE
    }

    fn schema(&self) -> Schema {
        project_schema()
    }

    fn config_from_attributes(&self, attributes: &AttributeMap) -> Result<ProjectConfig> {
        Ok(ProjectConfig::from_attributes(attributes)?)
    }

    async fn create(&self, desired: &ProjectConfig, record: &mut ResourceRecord) -> Result<()> {
        let request = desired.create_request();
        let project = self
            .client
            .create_project(&request)
            .await
            .map_err(|e| CloudError::remote(CREATE_FAILED, e))?;

        let id = NumericId::new(project.id);
        record.attributes = desired.to_attributes();
        record.set_id(id.to_string());

        tracing::info!("Created project {} ({})", desired.fields.name, id);
        Ok(())
    }

    async fn read(&self, record: &mut ResourceRecord) -> Result<()> {
        let id = NumericId::parse(record.id()?)?;
        let project = self
            .client
            .get_project(id.get())
            .await
            .map_err(|e| CloudError::remote(GET_FAILED, e))?;

        record.merge_attributes(synced_attributes(&project));
        let remote_id = NumericId::new(project.id);
        if remote_id.is_positive() {
            record.set_id(remote_id.to_string());
        }

        tracing::debug!("Refreshed project {}", id);
        Ok(())
    }

    async fn update(&self, desired: &ProjectConfig, record: &mut ResourceRecord) -> Result<()> {
        let id = NumericId::parse(record.id()?)?;
        let mut desired = desired.clone();
        desired.fill_computed_from(&record.attributes)?;
        let request = desired.update_request();
        let project = self
            .client
            .update_project(id.get(), &request)
            .await
            .map_err(|e| CloudError::remote(UPDATE_FAILED, e))?;

        record.merge_attributes(desired.to_attributes());
        let remote_id = NumericId::new(project.id);
        let stored = if remote_id.is_positive() { remote_id } else { id };
        record.set_id(stored.to_string());

        tracing::info!("Updated project {}", id);
        Ok(())
    }

    async fn delete(&self, record: &mut ResourceRecord) -> Result<()> {
        let id = NumericId::parse(record.id()?)?;
        self.client
            .delete_project(id.get())
            .await
            .map_err(|e| CloudError::remote(DELETE_FAILED, e))?;

        record.clear();

        tracing::info!("Deleted project {}", id);
        Ok(())
    }

    async fn exists(&self, record: &ResourceRecord) -> Result<bool> {
        let id = NumericId::parse(record.id()?)?;
        let project = self
            .client
            .get_project(id.get())
            .await
            .map_err(|e| CloudError::remote(GET_FAILED, e))?;

        let remote_id = NumericId::new(project.id);
        if !remote_id.is_positive() {
            tracing::warn!("Project {} reported with id {}; treating as absent", id, remote_id);
            return Ok(false);
        }
        Ok(true)
    }
}
