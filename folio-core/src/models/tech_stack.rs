use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;

/// A named skill inside a tech-stack category.
///
/// `level` is free text on the wire ("Advanced", "intermediate", ...); the
/// comparison helpers are case-insensitive so display logic does not have to
/// care how the admin typed it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Some(level.into()),
        }
    }

    pub fn is_advanced(&self) -> bool {
        self.level
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case("advanced"))
    }
}

/// One tech-stack category (e.g. "Backend") with its skills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl TechStack {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    /// Skills highlighted on the public page. Always derived from the
    /// canonical list; never cached.
    pub fn advanced_skills(&self) -> Vec<&Skill> {
        self.skills.iter().filter(|s| s.is_advanced()).collect()
    }
}

impl Entity for TechStack {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for TechStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.category)?;
        let names: Vec<&str> = self.skills.iter().map(|s| s.name.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advanced_skills_derived() {
        let stack = TechStack::new("Backend").with_skills(vec![
            Skill::new("Rust", "Advanced"),
            Skill::new("Go", "intermediate"),
            Skill::new("Postgres", "ADVANCED"),
        ]);

        let advanced = stack.advanced_skills();
        assert_eq!(advanced.len(), 2);
        assert_eq!(advanced[0].name, "Rust");
        assert_eq!(advanced[1].name, "Postgres");
    }

    #[test]
    fn test_skill_without_level_is_not_advanced() {
        let skill = Skill {
            name: "HTML".to_string(),
            level: None,
        };
        assert!(!skill.is_advanced());
    }

    #[test]
    fn test_tech_stack_display() {
        let stack = TechStack::new("Frontend")
            .with_skills(vec![Skill::new("React", "Advanced"), Skill::new("CSS", "Basic")]);
        assert_eq!(format!("{}", stack), "Frontend: React, CSS");
    }
}
