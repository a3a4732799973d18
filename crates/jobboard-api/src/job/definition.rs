//! Job record and field constraints.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldErrors};

/// Maximum length of `first_name` and `last_name`, in characters.
pub const NAME_MAX_CHARS: usize = 50;

/// Maximum length of `job_title` and `company`, in characters.
pub const TITLE_MAX_CHARS: usize = 80;

/// A stored job listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub company: String,
}

/// Job fields as received in a request body.
///
/// Bodies may carry an `id` of any shape; it is not part of the fields and
/// serde skips it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFields {
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub company: String,
}

impl JobFields {
    /// Create a new set of job fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        job_title: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            job_title: job_title.into(),
            company: company.into(),
        }
    }

    /// Turn the fields into a seed record that keeps `id`.
    pub fn with_id(self, id: u64) -> SeedJob {
        SeedJob {
            id: Some(id),
            fields: self,
        }
    }

    /// Check every field against its length limit.
    ///
    /// All offending fields are reported at once.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();

        check_max_chars(&mut errors, "first_name", &self.first_name, NAME_MAX_CHARS);
        check_max_chars(&mut errors, "last_name", &self.last_name, NAME_MAX_CHARS);
        check_max_chars(&mut errors, "job_title", &self.job_title, TITLE_MAX_CHARS);
        check_max_chars(&mut errors, "company", &self.company, TITLE_MAX_CHARS);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }

    /// Build the stored record under `id`.
    pub fn into_job(self, id: u64) -> Job {
        Job {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            job_title: self.job_title,
            company: self.company,
        }
    }
}

/// A record from the seed file.
///
/// Seed records keep their original id when they have one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedJob {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub fields: JobFields,
}

impl From<JobFields> for SeedJob {
    fn from(fields: JobFields) -> Self {
        Self { id: None, fields }
    }
}

fn check_max_chars(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.insert(
            field.to_string(),
            format!("Must have no more than {} characters.", max),
        );
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
