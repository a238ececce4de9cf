use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;

/// An award or certification entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kept as text; the backend stores whatever date string was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// URL of the uploaded certificate image, assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Award {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

impl Entity for Award {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Award {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(date) = &self.date {
            write!(f, " ({})", date)?;
        }
        if let Some(description) = &self.description {
            write!(f, "\n  {}", description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_builder() {
        let award = Award::new("Hackathon Winner")
            .with_description("First place, regional hackathon")
            .with_date("2024-01-01");
        assert_eq!(award.title, "Hackathon Winner");
        assert_eq!(award.date.as_deref(), Some("2024-01-01"));
        assert!(award.id.is_none());
    }

    #[test]
    fn test_award_display() {
        let award = Award::new("Best Paper").with_date("2023-06-10");
        assert_eq!(format!("{}", award), "Best Paper (2023-06-10)");
    }
}
