use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;

/// One education entry (school, degree, result, year).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Institution name.
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub qualification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_or_percentage: Option<String>,
    /// Kept as text: entries hold either a year or a range like "2020-2024".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_of_completion: Option<String>,
}

impl Education {
    pub fn new(name: impl Into<String>, qualification: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualification: qualification.into(),
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade_or_percentage = Some(grade.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year_of_completion = Some(year.into());
        self
    }
}

impl Entity for Education {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.qualification, self.name)?;
        if let Some(year) = &self.year_of_completion {
            write!(f, " ({})", year)?;
        }
        if let Some(grade) = &self.grade_or_percentage {
            write!(f, " [{}]", grade)?;
        }
        Ok(())
    }
}
