use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;

/// A technology reference attached to a project.
///
/// The backend is inconsistent here: depending on how a project was written
/// it returns either a plain skill name or a reference object whose `skill`
/// field may or may not be populated alongside the raw `skillId`. Both shapes
/// are accepted; [`Technology::display_name`] picks the best label available.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Technology {
    Name(String),
    Reference {
        #[serde(rename = "skillId", default, skip_serializing_if = "Option::is_none")]
        skill_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        skill: Option<String>,
    },
}

impl Technology {
    pub fn display_name(&self) -> &str {
        match self {
            Technology::Name(name) => name,
            Technology::Reference { skill: Some(name), .. } => name,
            Technology::Reference { skill_id: Some(id), .. } => id,
            Technology::Reference { .. } => "",
        }
    }
}

impl From<&str> for Technology {
    fn from(name: &str) -> Self {
        Technology::Name(name.to_string())
    }
}

/// A portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    /// URL of the uploaded screenshot, assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_image: Option<String>,
    #[serde(default)]
    pub technologies_used: Vec<Technology>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Project {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.project_description = Some(description.into());
        self
    }

    pub fn with_technologies(mut self, technologies: Vec<Technology>) -> Self {
        self.technologies_used = technologies;
        self
    }

    pub fn with_preview_link(mut self, link: impl Into<String>) -> Self {
        self.preview_link = Some(link.into());
        self
    }

    pub fn with_github_link(mut self, link: impl Into<String>) -> Self {
        self.github_link = Some(link.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Non-empty technology labels in declaration order.
    pub fn technology_names(&self) -> Vec<&str> {
        self.technologies_used
            .iter()
            .map(|t| t.display_name())
            .filter(|n| !n.is_empty())
            .collect()
    }
}

impl Entity for Project {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.project_name)?;
        if let Some(category) = &self.category {
            write!(f, " [{}]", category)?;
        }
        let techs = self.technology_names();
        if !techs.is_empty() {
            write!(f, "\n  Tech: {}", techs.join(", "))?;
        }
        if let Some(description) = &self.project_description {
            write!(f, "\n  {}", description)?;
        }
        if let Some(link) = &self.preview_link {
            write!(f, "\n  Preview: {}", link)?;
        }
        if let Some(link) = &self.github_link {
            write!(f, "\n  Source: {}", link)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technology_accepts_both_wire_shapes() {
        let json = r#"["Rust", {"skillId": "s1", "skill": "Postgres"}, {"skillId": "s2"}]"#;
        let techs: Vec<Technology> = serde_json::from_str(json).unwrap();
        assert_eq!(techs[0].display_name(), "Rust");
        assert_eq!(techs[1].display_name(), "Postgres");
        // Unpopulated reference falls back to the raw id.
        assert_eq!(techs[2].display_name(), "s2");
    }

    #[test]
    fn test_project_builder() {
        let project = Project::new("Portfolio Site")
            .with_description("This very site.")
            .with_technologies(vec!["Rust".into(), "Axum".into()])
            .with_github_link("https://github.com/me/portfolio")
            .with_category("web");

        assert_eq!(project.technology_names(), vec!["Rust", "Axum"]);
        assert!(project.id.is_none());
    }

    #[test]
    fn test_project_wire_names() {
        let json = r#"{"_id":"p1","projectName":"Folio","projectDescription":"desc",
                       "technologiesUsed":["Rust"],"previewLink":"https://x.dev",
                       "githubLink":"https://github.com/x","category":"web"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id.as_deref(), Some("p1"));
        assert_eq!(project.project_name, "Folio");
        assert_eq!(project.technology_names(), vec!["Rust"]);
    }
}
