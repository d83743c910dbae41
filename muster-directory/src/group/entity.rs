use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::str::FromStr;

use paged::{collate, UnknownOrderBy};

use crate::operation::Operation;
use crate::primitives::{GroupId, OperationId, UserId};

use super::error::GroupError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub title: String,
    pub description: String,
    pub operation: Option<OperationId>,
    pub members: Vec<UserId>,
}

/// A group as submitted for creation. The id is assigned by the directory.
#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate", error = "GroupError"))]
pub struct NewGroup {
    #[builder(setter(into))]
    pub title: String,
    #[builder(setter(into))]
    pub description: String,
    #[builder(setter(strip_option, into), default)]
    pub operation: Option<OperationId>,
    #[builder(default)]
    pub members: Vec<UserId>,
}

impl NewGroup {
    pub fn builder() -> NewGroupBuilder {
        NewGroupBuilder::default()
    }
}

impl NewGroupBuilder {
    fn validate(&self) -> Result<(), String> {
        for (field, value) in [("title", &self.title), ("description", &self.description)] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(format!("{} must not be empty", field));
            }
        }
        Ok(())
    }
}

/// Columns the directory can order groups by, keyed the way the group table
/// names its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupSort {
    #[serde(rename = "byTitle")]
    ByTitle,
    #[serde(rename = "byDescription")]
    ByDescription,
}

impl GroupSort {
    pub fn compare(&self, a: &Group, b: &Group) -> Ordering {
        match self {
            GroupSort::ByTitle => collate(&a.title, &b.title),
            GroupSort::ByDescription => collate(&a.description, &b.description),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            GroupSort::ByTitle => "byTitle",
            GroupSort::ByDescription => "byDescription",
        }
    }
}

impl FromStr for GroupSort {
    type Err = UnknownOrderBy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "byTitle" => Ok(GroupSort::ByTitle),
            "byDescription" => Ok(GroupSort::ByDescription),
            other => Err(UnknownOrderBy::from(other)),
        }
    }
}

impl std::fmt::Display for GroupSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupFilter {
    pub for_operation: Option<OperationId>,
    pub with_member: Option<UserId>,
}

/// A group row ready for display: the operation reference is resolved
/// before the row is handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRow {
    pub group: Group,
    pub operation: Option<Operation>,
}
