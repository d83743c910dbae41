use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::str::FromStr;

use paged::{collate, UnknownOrderBy};

use crate::primitives::OperationId;

/// The wire format keeps `is_archived` in snake case, unlike the other
/// entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub id: OperationId,
    pub title: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub is_archived: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationSort {
    #[serde(rename = "title")]
    ByTitle,
    #[serde(rename = "description")]
    ByDescription,
    #[serde(rename = "start")]
    ByStart,
}

impl OperationSort {
    pub fn compare(&self, a: &Operation, b: &Operation) -> Ordering {
        match self {
            OperationSort::ByTitle => collate(&a.title, &b.title),
            OperationSort::ByDescription => collate(&a.description, &b.description),
            OperationSort::ByStart => a.start.cmp(&b.start),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            OperationSort::ByTitle => "title",
            OperationSort::ByDescription => "description",
            OperationSort::ByStart => "start",
        }
    }
}

impl FromStr for OperationSort {
    type Err = UnknownOrderBy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(OperationSort::ByTitle),
            "description" => Ok(OperationSort::ByDescription),
            "start" => Ok(OperationSort::ByStart),
            other => Err(UnknownOrderBy::from(other)),
        }
    }
}

impl std::fmt::Display for OperationSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationFilter {
    pub include_archived: bool,
}
