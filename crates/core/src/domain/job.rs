// Job Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job ID (UUID v4)
pub type JobId = uuid::Uuid;

pub const DEFAULT_EDUCATION: &str = "not specified";
pub const DEFAULT_ADDRESS: &str = "somewhere on Earth";
pub const DEFAULT_EXPERIENCE: &str = "no requirement";
pub const DEFAULT_DEADLINE: &str = "open all year";
pub const DEFAULT_REQUIRE_PERSON: i64 = 1;

/// Caller-editable columns of a job posting.
///
/// Fields missing from a request body take their semantic defaults, so a
/// create request may carry as little as `{"name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFields {
    pub name: Option<String>,
    pub company: Option<String>,
    /// Minimum education level
    pub education: String,
    pub address: String,
    /// Minimum working experience
    pub experience: String,
    pub require_skill: Option<String>,
    /// Number of openings
    pub require_person: i64,
    /// Link to the original posting
    pub original_url: String,
    /// Recruiting season, e.g. "2024 autumn"
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub deadline: String,
}

impl Default for JobFields {
    fn default() -> Self {
        Self {
            name: None,
            company: None,
            education: DEFAULT_EDUCATION.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            experience: DEFAULT_EXPERIENCE.to_string(),
            require_skill: None,
            require_person: DEFAULT_REQUIRE_PERSON,
            original_url: String::new(),
            job_type: None,
            deadline: DEFAULT_DEADLINE.to_string(),
        }
    }
}

impl JobFields {
    /// Shorthand used by tests and seed data
    pub fn named(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            company: Some(company.into()),
            ..Self::default()
        }
    }
}

/// A job that has not been stored yet.
///
/// The store assigns `id` when it is `None` and always assigns `create_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub id: Option<JobId>,
    pub fields: JobFields,
}

impl JobDraft {
    pub fn new(fields: JobFields) -> Self {
        Self { id: None, fields }
    }

    pub fn with_id(id: JobId, fields: JobFields) -> Self {
        Self {
            id: Some(id),
            fields,
        }
    }
}

/// Job Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    #[serde(flatten)]
    pub fields: JobFields,
    /// Set once by the store at insertion
    pub create_time: DateTime<Utc>,
}

impl Job {
    /// Replace every editable field, keeping identity and creation time
    pub fn apply(&mut self, fields: JobFields) {
        self.fields = fields;
    }
}
