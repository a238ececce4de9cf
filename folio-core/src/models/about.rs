use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;

/// The "about me" section of the site. A singleton on the server side:
/// saving always replaces whatever is there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub about_text: String,
    /// Free-text stack summary rendered next to the bio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    /// URL of the uploaded portrait, assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl About {
    pub fn new(about_text: impl Into<String>) -> Self {
        Self {
            about_text: about_text.into(),
            ..Self::default()
        }
    }

    pub fn with_tech_stack(mut self, tech_stack: impl Into<String>) -> Self {
        self.tech_stack = Some(tech_stack.into());
        self
    }
}

impl Entity for About {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for About {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.about_text)?;
        if let Some(stack) = &self.tech_stack {
            writeln!(f, "\nStack: {}", stack)?;
        }
        if let Some(image) = &self.image {
            writeln!(f, "Image: {}", image)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_wire_field_names() {
        let json = r#"{"_id":"ab1","aboutText":"Hi there","techStack":"Rust, SQL"}"#;
        let about: About = serde_json::from_str(json).unwrap();
        assert_eq!(about.id.as_deref(), Some("ab1"));
        assert_eq!(about.about_text, "Hi there");
        assert_eq!(about.tech_stack.as_deref(), Some("Rust, SQL"));
        assert!(about.image.is_none());
    }

    #[test]
    fn test_about_draft_serializes_without_id() {
        let about = About::new("Hello").with_tech_stack("Rust");
        let json = serde_json::to_string(&about).unwrap();
        assert!(!json.contains("_id"));
        assert!(json.contains("aboutText"));
    }
}
