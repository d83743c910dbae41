use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::str::FromStr;

use paged::{collate, UnknownOrderBy};

use crate::primitives::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_admin: bool,
}

/// Columns the directory can order users by. The serialized form doubles as
/// the table column key, so parsing a header click and building a request
/// use the same names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserSort {
    #[serde(rename = "lastName")]
    ByLastName,
    #[serde(rename = "firstName")]
    ByFirstName,
    #[serde(rename = "username")]
    ByUsername,
}

impl UserSort {
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        match self {
            UserSort::ByLastName => collate(&a.last_name, &b.last_name),
            UserSort::ByFirstName => collate(&a.first_name, &b.first_name),
            UserSort::ByUsername => collate(&a.username, &b.username),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            UserSort::ByLastName => "lastName",
            UserSort::ByFirstName => "firstName",
            UserSort::ByUsername => "username",
        }
    }
}

impl FromStr for UserSort {
    type Err = UnknownOrderBy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lastName" => Ok(UserSort::ByLastName),
            "firstName" => Ok(UserSort::ByFirstName),
            "username" => Ok(UserSort::ByUsername),
            other => Err(UnknownOrderBy::from(other)),
        }
    }
}

impl std::fmt::Display for UserSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    pub include_inactive: bool,
}
