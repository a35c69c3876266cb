//! Global identifiers of audited objects
//!
//! An entity instance is identified by its type and local id. A value object
//! has no identity of its own and is identified by its owning entity plus the
//! property path leading to it.

use crate::errors::Result;
use crate::rules::validation::{require_local_id, require_text, require_type};
use serde::Serialize;
use serde_json::Value;
use snapql_core_types::TypeName;
use std::fmt;

/// Identifier of one entity instance, rendered as `Type/localId`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceIdDto {
    type_name: TypeName,
    local_id: Value,
}

impl InstanceIdDto {
    /// Create an instance id
    ///
    /// # Errors
    /// Returns `NullArgument` when the local id is null or the type name is blank.
    pub fn new(local_id: impl Into<Value>, type_name: impl Into<TypeName>) -> Result<Self> {
        let local_id = require_local_id("local_id", local_id.into())?;
        let type_name = require_type("entity_type", type_name.into())?;
        Ok(Self {
            type_name,
            local_id,
        })
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn local_id(&self) -> &Value {
        &self.local_id
    }

    /// Canonical string form, e.g. `Person/123`
    pub fn value(&self) -> String {
        format!("{}/{}", self.type_name, render_local_id(&self.local_id))
    }
}

/// Identifier of a value object, rendered as `Owner/ownerId#path`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueObjectIdDto {
    owner: InstanceIdDto,
    path: String,
}

impl ValueObjectIdDto {
    /// Create a value object id from its owner's local id and type plus a path
    ///
    /// # Errors
    /// Returns `NullArgument` when any argument is absent.
    pub fn new(
        owner_local_id: impl Into<Value>,
        owner_type: impl Into<TypeName>,
        path: &str,
    ) -> Result<Self> {
        let owner_type = require_type("owner_type", owner_type.into())?;
        let owner_local_id = require_local_id("owner_local_id", owner_local_id.into())?;
        let path = require_text("path", path)?;
        Ok(Self {
            owner: InstanceIdDto {
                type_name: owner_type,
                local_id: owner_local_id,
            },
            path,
        })
    }

    pub fn owner(&self) -> &InstanceIdDto {
        &self.owner
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Canonical string form, e.g. `Order/123#items/0`
    pub fn value(&self) -> String {
        format!("{}#{}", self.owner.value(), self.path)
    }
}

/// Identifier of either an entity instance or a value object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalIdDto {
    Instance(InstanceIdDto),
    ValueObject(ValueObjectIdDto),
}

impl GlobalIdDto {
    /// Canonical string form
    pub fn value(&self) -> String {
        match self {
            GlobalIdDto::Instance(id) => id.value(),
            GlobalIdDto::ValueObject(id) => id.value(),
        }
    }

    /// The entity type this id is anchored on (the owner type for value objects)
    pub fn type_name(&self) -> &TypeName {
        match self {
            GlobalIdDto::Instance(id) => id.type_name(),
            GlobalIdDto::ValueObject(id) => id.owner().type_name(),
        }
    }

    pub fn is_value_object(&self) -> bool {
        matches!(self, GlobalIdDto::ValueObject(_))
    }
}

impl From<InstanceIdDto> for GlobalIdDto {
    fn from(id: InstanceIdDto) -> Self {
        GlobalIdDto::Instance(id)
    }
}

impl From<ValueObjectIdDto> for GlobalIdDto {
    fn from(id: ValueObjectIdDto) -> Self {
        GlobalIdDto::ValueObject(id)
    }
}

impl fmt::Display for GlobalIdDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

// strings render bare, everything else as compact JSON
fn render_local_id(local_id: &Value) -> String {
    match local_id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
