use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;

/// One work-experience entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    /// Display text like "Jan 2023 - Present".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Experience {
    pub fn new(company: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Entity for Experience {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.role, self.company)?;
        if let Some(duration) = &self.duration {
            write!(f, " ({})", duration)?;
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
    fn test_experience_new() {
        let exp = Experience::new("Acme Corp", "Backend Engineer")
            .with_duration("2022 - 2024")
            .with_description("Built the billing pipeline.");
        assert_eq!(exp.company, "Acme Corp");
        assert_eq!(exp.role, "Backend Engineer");
        assert!(exp.id.is_none());
    }

    #[test]
    fn test_experience_json_roundtrip() {
        let exp = Experience::new("Acme Corp", "Engineer").with_duration("2023");
        let json = serde_json::to_string(&exp).unwrap();
        let parsed: Experience = serde_json::from_str(&json).unwrap();
        assert_eq!(exp, parsed);
    }
}
