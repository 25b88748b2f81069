//! In-memory `ProjectApi` used by the resource tests

use crate::client::ProjectApi;
use crate::error::{Result, TrackerError};
use crate::model::{CreateProjectRequest, Project, UpdateProjectRequest};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Calls {
    created: Vec<CreateProjectRequest>,
    fetched: Vec<i64>,
    updated: Vec<(i64, UpdateProjectRequest)>,
    deleted: Vec<i64>,
}

/// Records every request and answers with a fixed project
#[derive(Debug, Default)]
pub(crate) struct FakeProjectApi {
    response: Project,
    fail_status: Option<u16>,
    calls: Mutex<Calls>,
}

impl FakeProjectApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_response(mut self, project: Project) -> Self {
        self.response = project;
        self
    }

    pub(crate) fn failing(self) -> Self {
        self.failing_with_status(500)
    }

    pub(crate) fn failing_with_status(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    fn answer(&self) -> Result<Project> {
        match self.fail_status {
            Some(status) => Err(TrackerError::Api {
                status,
                code: "simulated".to_string(),
                message: "simulated failure".to_string(),
            }),
            None => Ok(self.response.clone()),
        }
    }

    fn calls(&self) -> std::sync::MutexGuard<'_, Calls> {
        self.calls.lock().unwrap()
    }

    pub(crate) fn create_requests(&self) -> Vec<CreateProjectRequest> {
        self.calls().created.clone()
    }

    pub(crate) fn fetched_ids(&self) -> Vec<i64> {
        self.calls().fetched.clone()
    }

    pub(crate) fn update_requests(&self) -> Vec<(i64, UpdateProjectRequest)> {
        self.calls().updated.clone()
    }

    pub(crate) fn deleted_ids(&self) -> Vec<i64> {
        self.calls().deleted.clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        let calls = self.calls();
        calls.created.len() + calls.fetched.len() + calls.updated.len() + calls.deleted.len()
    }
}

#[async_trait]
impl ProjectApi for FakeProjectApi {
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project> {
        self.calls().created.push(request.clone());
        self.answer()
    }

    async fn get_project(&self, id: i64) -> Result<Project> {
        self.calls().fetched.push(id);
        self.answer()
    }

    async fn update_project(&self, id: i64, request: &UpdateProjectRequest) -> Result<Project> {
        self.calls().updated.push((id, request.clone()));
        self.answer()
    }

    async fn delete_project(&self, id: i64) -> Result<()> {
        self.calls().deleted.push(id);
        self.answer().map(|_| ())
    }
}
