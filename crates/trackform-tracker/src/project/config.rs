//! Typed desired state of a project

use crate::model::{CreateProjectRequest, ProjectFields, UpdateProjectRequest};
use serde_json::Value;
use trackform_cloud::{AttributeMap, SchemaError};

/// Desired state of one `tracker_project`
///
/// Plain optional attributes default to their zero value. Attributes the
/// server computes stay `None` unless declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    pub fields: ProjectFields,
    pub no_owner: bool,
    pub new_account_name: String,
}

fn optional_int(attributes: &AttributeMap, name: &str) -> Result<Option<i64>, SchemaError> {
    Ok(match attributes.get(name) {
        None | Some(Value::Null) => None,
        Some(_) => Some(attributes.get_int(name)?),
    })
}

fn optional_bool(attributes: &AttributeMap, name: &str) -> Result<Option<bool>, SchemaError> {
    Ok(match attributes.get(name) {
        None | Some(Value::Null) => None,
        Some(_) => Some(attributes.get_bool(name)?),
    })
}

fn optional_string(attributes: &AttributeMap, name: &str) -> Result<Option<String>, SchemaError> {
    Ok(match attributes.get(name) {
        None | Some(Value::Null) => None,
        Some(_) => Some(attributes.get_string(name)?),
    })
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: ProjectFields {
                name: name.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Build from declarative input already checked against the project schema
    pub fn from_attributes(attributes: &AttributeMap) -> Result<Self, SchemaError> {
        let fields = ProjectFields {
            name: attributes.get_string("name")?,
            description: attributes.get_string("description")?,
            profile_content: attributes.get_string("profile_content")?,
            atom_enabled: attributes.get_bool("atom_enabled")?,
            bugs_and_chores_are_estimatable: attributes.get_bool("bugs_and_chores_are_estimatable")?,
            public: attributes.get_bool("public")?,
            status: attributes.get_string("status")?,
            join_as: attributes.get_string("join_as")?,
            week_start_day: attributes.get_string("week_start_day")?,
            start_date: attributes.get_string("start_date")?,
            time_zone: attributes.get_string("time_zone")?,
            account_id: optional_int(attributes, "account_id")?,
            automatic_planning: optional_bool(attributes, "automatic_planning")?,
            enable_incoming_emails: optional_bool(attributes, "enable_incoming_emails")?,
            enable_tasks: optional_bool(attributes, "enable_tasks")?,
            initial_velocity: optional_int(attributes, "initial_velocity")?,
            iteration_length: optional_int(attributes, "iteration_length")?,
            number_of_done_iterations_to_show: optional_int(
                attributes,
                "number_of_done_iterations_to_show",
            )?,
            point_scale: optional_string(attributes, "point_scale")?,
            project_type: optional_string(attributes, "project_type")?,
            velocity_averaged_over: optional_int(attributes, "velocity_averaged_over")?,
        };

        Ok(Self {
            fields,
            no_owner: attributes.get_bool("no_owner")?,
            new_account_name: attributes.get_string("new_account_name")?,
        })
    }

    /// Take undeclared server-computed values from the recorded attributes
    ///
    /// Used before an update so every writable attribute is resent, including
    /// the ones the server filled in and a read stored.
    pub fn fill_computed_from(&mut self, recorded: &AttributeMap) -> Result<(), SchemaError> {
        fn fill<T>(
            slot: &mut Option<T>,
            recorded: &AttributeMap,
            name: &str,
            read: fn(&AttributeMap, &str) -> Result<Option<T>, SchemaError>,
        ) -> Result<(), SchemaError> {
            if slot.is_none() {
                *slot = read(recorded, name)?;
            }
            Ok(())
        }

        let f = &mut self.fields;
        fill(&mut f.account_id, recorded, "account_id", optional_int)?;
        fill(&mut f.automatic_planning, recorded, "automatic_planning", optional_bool)?;
        fill(
            &mut f.enable_incoming_emails,
            recorded,
            "enable_incoming_emails",
            optional_bool,
        )?;
        fill(&mut f.enable_tasks, recorded, "enable_tasks", optional_bool)?;
        fill(&mut f.initial_velocity, recorded, "initial_velocity", optional_int)?;
        fill(&mut f.iteration_length, recorded, "iteration_length", optional_int)?;
        fill(
            &mut f.number_of_done_iterations_to_show,
            recorded,
            "number_of_done_iterations_to_show",
            optional_int,
        )?;
        fill(&mut f.point_scale, recorded, "point_scale", optional_string)?;
        fill(&mut f.project_type, recorded, "project_type", optional_string)?;
        fill(
            &mut f.velocity_averaged_over,
            recorded,
            "velocity_averaged_over",
            optional_int,
        )?;
        Ok(())
    }

    pub fn create_request(&self) -> CreateProjectRequest {
        CreateProjectRequest {
            fields: self.fields.clone(),
            no_owner: self.no_owner,
            new_account_name: self.new_account_name.clone(),
        }
    }

    /// Every writable attribute, changed or not
    pub fn update_request(&self) -> UpdateProjectRequest {
        self.fields.clone()
    }

    /// Attribute values as recorded after a successful create or update
    pub fn to_attributes(&self) -> AttributeMap {
        let f = &self.fields;
        let mut attributes = AttributeMap::new()
            .with("name", f.name.clone())
            .with("description", f.description.clone())
            .with("profile_content", f.profile_content.clone())
            .with("atom_enabled", f.atom_enabled)
            .with("bugs_and_chores_are_estimatable", f.bugs_and_chores_are_estimatable)
            .with("public", f.public)
            .with("status", f.status.clone())
            .with("join_as", f.join_as.clone())
            .with("week_start_day", f.week_start_day.clone())
            .with("start_date", f.start_date.clone())
            .with("time_zone", f.time_zone.clone())
            .with("no_owner", self.no_owner)
            .with("new_account_name", self.new_account_name.clone());

        let computed: [(&str, Option<Value>); 10] = [
            ("account_id", f.account_id.map(Value::from)),
            ("automatic_planning", f.automatic_planning.map(Value::from)),
            ("enable_incoming_emails", f.enable_incoming_emails.map(Value::from)),
            ("enable_tasks", f.enable_tasks.map(Value::from)),
            ("initial_velocity", f.initial_velocity.map(Value::from)),
            ("iteration_length", f.iteration_length.map(Value::from)),
            (
                "number_of_done_iterations_to_show",
                f.number_of_done_iterations_to_show.map(Value::from),
            ),
            ("point_scale", f.point_scale.clone().map(Value::from)),
            ("project_type", f.project_type.clone().map(Value::from)),
            ("velocity_averaged_over", f.velocity_averaged_over.map(Value::from)),
        ];
        for (name, value) in computed {
            if let Some(value) = value {
                attributes.insert(name, value);
            }
        }

        attributes
    }
}
