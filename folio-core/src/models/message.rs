use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::Entity;

/// A message submitted through the public contact form.
///
/// `reply`/`replied_at` are written by the admin backend; this client only
/// ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Self::default()
        }
    }
}

impl Entity for Message {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "From {} <{}>:\n  {}", self.name, self.email, self.message)?;
        if let Some(reply) = &self.reply {
            write!(f, "\n  Reply: {}", reply)?;
            if let Some(at) = &self.replied_at {
                write!(f, " ({})", at.format("%Y-%m-%d"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_reply_fields_optional() {
        let json = r#"{"_id":"m1","name":"Ana","email":"ana@x.dev","message":"Hi!"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert!(msg.reply.is_none());
        assert!(msg.replied_at.is_none());
    }

    #[test]
    fn test_message_parses_replied_at() {
        let json = r#"{"_id":"m1","name":"Ana","email":"ana@x.dev","message":"Hi!",
                       "reply":"Thanks!","repliedAt":"2024-03-05T10:00:00Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.reply.as_deref(), Some("Thanks!"));
        assert!(msg.replied_at.is_some());
    }
}
