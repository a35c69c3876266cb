//! Filters narrowing which historical records a query returns
//!
//! Filters are descriptors only. The execution engine evaluates them by
//! matching on the variant:
//!
//! - `Class`: records whose type equals `required_type` or is a subtype of it
//! - `Id`: records of exactly the identified object
//! - `VoOwner`: value-object records reachable from `owner_type` at `path`
//! - `Property`: records where `property_name` is present or changed
//! - `GlobalId`: legacy spelling of `Id`, evaluated identically
//!
//! A query's filters are ANDed in insertion order; the first one is the anchor.

use crate::model::global_id::GlobalIdDto;
use serde::Serialize;
use snapql_core_types::TypeName;
use std::fmt;

/// Predicate descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    Class {
        required_type: TypeName,
    },
    Id {
        global_id: GlobalIdDto,
    },
    VoOwner {
        owner_type: TypeName,
        path: String,
    },
    Property {
        property_name: String,
    },
    /// Superseded by `Id`. Engines treat it exactly like `Id`; removing it
    /// touches no other variant.
    #[deprecated(note = "use Filter::Id")]
    GlobalId {
        global_id: GlobalIdDto,
    },
}

/// Tag of a filter variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Class,
    Id,
    VoOwner,
    Property,
    GlobalId,
}

#[allow(deprecated)]
impl Filter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Class { .. } => FilterKind::Class,
            Filter::Id { .. } => FilterKind::Id,
            Filter::VoOwner { .. } => FilterKind::VoOwner,
            Filter::Property { .. } => FilterKind::Property,
            Filter::GlobalId { .. } => FilterKind::GlobalId,
        }
    }

    /// True for variants that can establish a query's root scope
    pub fn is_anchor_kind(&self) -> bool {
        !matches!(self, Filter::Property { .. })
    }

    /// The identified object, for `Id` and legacy `GlobalId` filters
    pub fn global_id(&self) -> Option<&GlobalIdDto> {
        match self {
            Filter::Id { global_id } | Filter::GlobalId { global_id } => Some(global_id),
            _ => None,
        }
    }

    /// The property name, for `Property` filters
    pub fn property_name(&self) -> Option<&str> {
        match self {
            Filter::Property { property_name } => Some(property_name),
            _ => None,
        }
    }
}

#[allow(deprecated)]
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Class { required_type } => {
                write!(f, "ClassFilter{{ requiredClass: {} }}", required_type)
            }
            Filter::Id { global_id } => write!(f, "IdFilter{{ globalId: {} }}", global_id),
            Filter::VoOwner { owner_type, path } => write!(
                f,
                "VoOwnerFilter{{ ownerEntityClass: {}, path: {} }}",
                owner_type, path
            ),
            Filter::Property { property_name } => {
                write!(f, "PropertyFilter{{ propertyName: {} }}", property_name)
            }
            Filter::GlobalId { global_id } => {
                write!(f, "GlobalIdFilter{{ globalId: {} }}", global_id)
            }
        }
    }
}
