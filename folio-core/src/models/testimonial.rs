use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;

/// A testimonial shown on the public site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// The quote itself.
    #[serde(default)]
    pub testimonial: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Testimonial {
    pub fn new(name: impl Into<String>, testimonial: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            testimonial: testimonial.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

impl Entity for Testimonial {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Testimonial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"\n  - {}", self.testimonial, self.name)?;
        if let Some(role) = &self.role {
            write!(f, ", {}", role)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_builder() {
        let t = Testimonial::new("Sam", "Great to work with.").with_role("CTO, Acme");
        assert_eq!(t.name, "Sam");
        assert_eq!(t.role.as_deref(), Some("CTO, Acme"));
        assert!(t.id.is_none());
    }
}
