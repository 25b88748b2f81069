//! Drift detection and planned actions

use crate::error::Result;
use crate::record::ResourceRecord;
use crate::resource::Resource;
use crate::schema::{AttributeMap, Schema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents a planned action for a managed resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Type of action to perform
    pub action_type: ActionType,

    /// Resource type (e.g., "tracker_project")
    pub resource_type: String,

    /// Host-side resource key
    pub resource_key: String,

    /// Remote identity, when the resource is already tracked
    pub resource_id: Option<String>,

    /// Attributes whose desired value differs from the record
    pub changes: Vec<AttributeChange>,
}

impl Action {
    pub fn description(&self) -> String {
        match self.action_type {
            ActionType::Create => format!("create {} {}", self.resource_type, self.resource_key),
            ActionType::Update => format!(
                "update {} {} ({} attribute(s) drifted)",
                self.resource_type,
                self.resource_key,
                self.changes.len()
            ),
            ActionType::Delete => format!("delete {} {}", self.resource_type, self.resource_key),
            ActionType::NoOp => format!("{} {} is up to date", self.resource_type, self.resource_key),
        }
    }
}

/// Type of action to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Create a new resource
    Create,
    /// Update an existing resource
    Update,
    /// Delete a resource
    Delete,
    /// No changes needed
    NoOp,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionType::Create => write!(f, "create"),
            ActionType::Update => write!(f, "update"),
            ActionType::Delete => write!(f, "delete"),
            ActionType::NoOp => write!(f, "no-op"),
        }
    }
}

/// A single drifted attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeChange {
    pub name: String,
    pub before: Option<Value>,
    pub after: Value,
}

/// Compare desired attributes with the record and decide what to do
///
/// `desired` is `None` when the resource was removed from the declaration.
/// Computed attributes the user left out never count as drift, and write-only
/// attributes are compared only once the record holds a value for them.
pub fn plan_resource(
    resource_key: &str,
    schema: &Schema,
    desired: Option<&AttributeMap>,
    record: &ResourceRecord,
) -> Action {
    let mut action = Action {
        action_type: ActionType::NoOp,
        resource_type: record.resource_type.clone(),
        resource_key: resource_key.to_string(),
        resource_id: record.id.clone(),
        changes: Vec::new(),
    };

    let Some(desired) = desired else {
        if record.is_tracked() {
            action.action_type = ActionType::Delete;
        }
        return action;
    };

    if !record.is_tracked() {
        action.action_type = ActionType::Create;
        action.changes = desired
            .iter()
            .map(|(name, value)| AttributeChange {
                name: name.clone(),
                before: None,
                after: value.clone(),
            })
            .collect();
        return action;
    }

    for (name, attribute) in &schema.attributes {
        let after = match desired.get(name).filter(|v| !v.is_null()) {
            Some(value) => value.clone(),
            None if attribute.computed => continue,
            None => attribute.attr_type.zero(),
        };
        let before = record.attributes.get(name).filter(|v| !v.is_null());
        if before.is_none() && attribute.write_only {
            continue;
        }
        let current = before.cloned().unwrap_or_else(|| attribute.attr_type.zero());
        if current != after {
            action.changes.push(AttributeChange {
                name: name.clone(),
                before: before.cloned(),
                after,
            });
        }
    }

    if !action.changes.is_empty() {
        action.action_type = ActionType::Update;
    }
    action
}

/// Carry out a planned action
pub async fn apply_action<R: Resource>(
    resource: &R,
    action: &Action,
    desired: Option<&AttributeMap>,
    record: &mut ResourceRecord,
) -> Result<()> {
    let config = |attributes: Option<&AttributeMap>| -> Result<R::Config> {
        let attributes = attributes.cloned().unwrap_or_default();
        resource.schema().validate(&attributes)?;
        resource.config_from_attributes(&attributes)
    };

    match action.action_type {
        ActionType::Create => {
            let config = config(desired)?;
            resource.create(&config, record).await?;
        }
        ActionType::Update => {
            let config = config(desired)?;
            resource.update(&config, record).await?;
        }
        ActionType::Delete => resource.delete(record).await?,
        ActionType::NoOp => {}
    }

    tracing::debug!("{}", action.description());
    Ok(())
}

/// Plan containing all actions to be applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// List of actions to perform
    pub actions: Vec<Action>,

    /// Whether the plan has any changes
    pub has_changes: bool,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        let has_changes = actions.iter().any(|a| a.action_type != ActionType::NoOp);
        Self {
            actions,
            has_changes,
        }
    }

    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            has_changes: false,
        }
    }

    /// Get actions by type
    pub fn actions_by_type(&self, action_type: ActionType) -> Vec<&Action> {
        self.actions
            .iter()
            .filter(|a| a.action_type == action_type)
            .collect()
    }

    /// Summary of the plan
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            create: self.actions_by_type(ActionType::Create).len(),
            update: self.actions_by_type(ActionType::Update).len(),
            delete: self.actions_by_type(ActionType::Delete).len(),
            no_change: self.actions_by_type(ActionType::NoOp).len(),
        }
    }
}

/// Summary of planned actions
#[derive(Debug, Clone)]
pub struct PlanSummary {
    pub create: usize,
    pub update: usize,
    pub delete: usize,
    pub no_change: usize,
}

impl std::fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to create, {} to update, {} to delete, {} unchanged",
            self.create, self.update, self.delete, self.no_change
        )
    }
}
