//! Tracker project payloads

use serde::{Deserialize, Serialize};

/// Writable project attributes shared by create and update requests
///
/// Server-computed attributes are `None` when the user left them out, so the
/// server keeps its own value. Enumerations and dates are omitted while
/// empty since the API rejects blank values for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub profile_content: String,
    pub atom_enabled: bool,
    pub bugs_and_chores_are_estimatable: bool,
    pub public: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub join_as: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub week_start_day: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time_zone: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_planning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_incoming_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_tasks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_velocity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iteration_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_done_iterations_to_show: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_scale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_averaged_over: Option<i64>,
}

/// Body of `POST /projects`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateProjectRequest {
    #[serde(flatten)]
    pub fields: ProjectFields,

    /// Leave the project without the authenticated user as owner
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_owner: bool,

    /// Create a new account with this name and put the project in it
    #[serde(skip_serializing_if = "String::is_empty")]
    pub new_account_name: String,
}

/// Body of `PUT /projects/{id}`
pub type UpdateProjectRequest = ProjectFields;

/// Project as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub profile_content: String,
    pub account_id: i64,
    pub atom_enabled: bool,
    pub automatic_planning: bool,
    pub bugs_and_chores_are_estimatable: bool,
    pub enable_incoming_emails: bool,
    pub enable_tasks: bool,
    pub initial_velocity: i64,
    pub iteration_length: i64,
    pub number_of_done_iterations_to_show: i64,
    pub point_scale: String,
    pub project_type: String,
    pub public: bool,
    pub velocity_averaged_over: i64,
    pub week_start_day: String,
    pub start_date: Option<String>,
    pub time_zone: Option<TimeZone>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimeZone {
    pub olson_name: String,
    pub offset: String,
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApiErrorBody {
    pub code: String,
    pub error: String,
    pub general_problem: Option<String>,
    pub possible_fix: Option<String>,
}

impl ApiErrorBody {
    pub(crate) fn message(&self) -> String {
        let mut message = self.error.clone();
        if let Some(problem) = &self.general_problem {
            message = format!("{} ({})", message, problem);
        }
        if let Some(fix) = &self.possible_fix {
            message = format!("{}; {}", message, fix);
        }
        message
    }
}
