// Query intents: filters, sort keys and distinct-value fields

use crate::domain::error::{DomainError, Result};
use crate::domain::JobId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Longest `name`/`company` value accepted in a filter
pub const MAX_FILTER_TEXT_LEN: usize = 100;

/// Conjunctive filter; `None` predicates are left out of the query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFilter {
    pub name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub id: Option<JobId>,
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.company.is_none()
            && self.address.is_none()
            && self.job_type.is_none()
            && self.id.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("name", &self.name), ("company", &self.company)] {
            if let Some(v) = value {
                if v.chars().count() > MAX_FILTER_TEXT_LEN {
                    return Err(DomainError::ValidationError(format!(
                        "{} must be at most {} characters",
                        field, MAX_FILTER_TEXT_LEN
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Closed set of sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreateTime,
    Deadline,
    RequirePerson,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::CreateTime => "create_time",
            SortField::Deadline => "deadline",
            SortField::RequirePerson => "require_person",
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "create_time" => Ok(SortField::CreateTime),
            "deadline" => Ok(SortField::Deadline),
            "require_person" => Ok(SortField::RequirePerson),
            other => Err(DomainError::UnknownSortField(other.to_string())),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(DomainError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Columns whose distinct values can be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctField {
    Name,
    Company,
    Education,
    Address,
    Experience,
    RequirePerson,
    Type,
    Deadline,
}

impl DistinctField {
    pub fn column(&self) -> &'static str {
        match self {
            DistinctField::Name => "name",
            DistinctField::Company => "company",
            DistinctField::Education => "education",
            DistinctField::Address => "address",
            DistinctField::Experience => "experience",
            DistinctField::RequirePerson => "require_person",
            DistinctField::Type => "type",
            DistinctField::Deadline => "deadline",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, DistinctField::RequirePerson)
    }

    /// Resolve a request that must name exactly one field
    pub fn from_requested<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        match fields {
            [single] => single.as_ref().parse(),
            _ => Err(DomainError::FieldCount(fields.len())),
        }
    }
}

impl FromStr for DistinctField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name" => Ok(DistinctField::Name),
            "company" => Ok(DistinctField::Company),
            "education" => Ok(DistinctField::Education),
            "address" => Ok(DistinctField::Address),
            "experience" => Ok(DistinctField::Experience),
            "require_person" => Ok(DistinctField::RequirePerson),
            "type" => Ok(DistinctField::Type),
            "deadline" => Ok(DistinctField::Deadline),
            other => Err(DomainError::UnknownField(other.to_string())),
        }
    }
}

/// One distinct column value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Text(String),
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map(FieldValue::Text).unwrap_or(FieldValue::Null)
    }
}
