//! Attribute schema declaration
//!
//! A resource declares its attributes once as a [`Schema`]. Hosts validate
//! declarative input against it before handing it to a resource, which then
//! builds its own strongly typed configuration through the typed accessors on
//! [`AttributeMap`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Schema validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("attribute {name:?} expects {expected} but got {found}")]
    TypeMismatch {
        name: String,
        expected: AttributeType,
        found: &'static str,
    },

    #[error("required attribute {0:?} is missing")]
    MissingRequired(String),

    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),
}

/// Semantic type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    Int,
}

impl AttributeType {
    fn matches(self, value: &Value) -> bool {
        match self {
            AttributeType::String => value.is_string(),
            AttributeType::Bool => value.is_boolean(),
            AttributeType::Int => value.is_i64(),
        }
    }

    /// Zero value used when an optional attribute is absent
    pub fn zero(self) -> Value {
        match self {
            AttributeType::String => Value::String(String::new()),
            AttributeType::Bool => Value::Bool(false),
            AttributeType::Int => Value::from(0),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::String => write!(f, "string"),
            AttributeType::Bool => write!(f, "bool"),
            AttributeType::Int => write!(f, "int"),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() => "int",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Declaration of a single attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub attr_type: AttributeType,
    pub required: bool,
    pub optional: bool,
    /// The remote side may populate the value when the user leaves it out
    pub computed: bool,
    /// Sent to the remote side but never refreshed from it
    pub write_only: bool,
    pub description: String,
}

impl Attribute {
    fn new(attr_type: AttributeType, required: bool) -> Self {
        Self {
            attr_type,
            required,
            optional: !required,
            computed: false,
            write_only: false,
            description: String::new(),
        }
    }

    pub fn required_string() -> Self {
        Self::new(AttributeType::String, true)
    }

    pub fn optional_string() -> Self {
        Self::new(AttributeType::String, false)
    }

    pub fn optional_bool() -> Self {
        Self::new(AttributeType::Bool, false)
    }

    pub fn optional_int() -> Self {
        Self::new(AttributeType::Int, false)
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn write_only(mut self) -> Self {
        self.write_only = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Attribute table of one resource type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub version: u32,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Check declarative input against the table
    ///
    /// Enum membership and length limits are left to the remote side.
    pub fn validate(&self, values: &AttributeMap) -> Result<(), SchemaError> {
        for (name, value) in values.iter() {
            let attribute = self
                .attributes
                .get(name)
                .ok_or_else(|| SchemaError::UnknownAttribute(name.clone()))?;
            if !value.is_null() && !attribute.attr_type.matches(value) {
                return Err(SchemaError::TypeMismatch {
                    name: name.clone(),
                    expected: attribute.attr_type,
                    found: json_kind(value),
                });
            }
        }

        for (name, attribute) in &self.attributes {
            if attribute.required && values.get(name).is_none_or(Value::is_null) {
                return Err(SchemaError::MissingRequired(name.clone()));
            }
        }

        Ok(())
    }
}

/// Attribute values keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(BTreeMap<String, Value>);

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy every entry of `other` over this map
    pub fn merge(&mut self, other: AttributeMap) {
        self.0.extend(other.0);
    }

    fn typed<T>(
        &self,
        name: &str,
        expected: AttributeType,
        extract: impl Fn(&Value) -> Option<T>,
    ) -> Result<Option<T>, SchemaError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => extract(value)
                .map(Some)
                .ok_or_else(|| SchemaError::TypeMismatch {
                    name: name.to_string(),
                    expected,
                    found: json_kind(value),
                }),
        }
    }

    /// String value, empty when absent
    pub fn get_string(&self, name: &str) -> Result<String, SchemaError> {
        self.typed(name, AttributeType::String, |v| v.as_str().map(str::to_string))
            .map(Option::unwrap_or_default)
    }

    /// Boolean value, false when absent
    pub fn get_bool(&self, name: &str) -> Result<bool, SchemaError> {
        self.typed(name, AttributeType::Bool, Value::as_bool)
            .map(Option::unwrap_or_default)
    }

    /// Integer value, zero when absent
    pub fn get_int(&self, name: &str) -> Result<i64, SchemaError> {
        self.typed(name, AttributeType::Int, Value::as_i64)
            .map(Option::unwrap_or_default)
    }
}

impl FromIterator<(String, Value)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
