use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;

/// The admin user profile.
///
/// The login response carries the bearer token alongside these fields; the
/// token is peeled off into the credential store and never kept on the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl Entity for User {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.email),
            None => write!(f, "{}", self.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_ignores_token_field() {
        // Login responses include a token; the model silently skips it.
        let json = r#"{"_id":"u1","name":"Admin","email":"x@y.com","token":"tok123"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.email, "x@y.com");
        assert_eq!(format!("{}", user), "Admin <x@y.com>");
    }
}
