//! The backend's JSON response envelope and its normalization rules.
//!
//! Endpoints answer with `{success, error, message, result?, results?}`, but
//! the deployed backend is not consistent: list payloads sometimes arrive
//! under `results`, sometimes under `data`, and occasionally as a bare array.
//! Normalization happens in exactly one place with a fixed precedence so the
//! tolerance contract stays auditable:
//!
//! - lists: `results` -> `data` -> bare array -> `[]`
//! - singletons: `result` -> `data` -> `None`

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A decoded response body, before payload extraction.
#[derive(Debug, Clone, Default)]
pub struct Envelope {
    pub success: bool,
    pub error: bool,
    pub message: Option<String>,
    pub result: Option<Value>,
    pub results: Option<Value>,
    pub data: Option<Value>,
}

impl Envelope {
    /// Builds an envelope from any JSON body the server might send.
    ///
    /// A bare array is treated as a list payload; anything that is neither
    /// an object nor an array yields an empty envelope.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(_) => Envelope {
                results: Some(value),
                ..Envelope::default()
            },
            Value::Object(mut map) => Envelope {
                success: map.get("success").and_then(Value::as_bool).unwrap_or(false),
                error: map.get("error").and_then(Value::as_bool).unwrap_or(false),
                message: map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                result: map.remove("result"),
                results: map.remove("results"),
                data: map.remove("data"),
            },
            _ => Envelope::default(),
        }
    }

    /// Extracts the list payload, normalized to a concrete `Vec<T>`.
    ///
    /// Candidates are tried in precedence order; the first one that is an
    /// array wins. A candidate that does not decode as `Vec<T>` counts as
    /// malformed and the result is the empty default, never an error.
    pub fn into_list<T: DeserializeOwned>(self) -> Vec<T> {
        for candidate in [self.results, self.data] {
            if let Some(value @ Value::Array(_)) = candidate {
                return serde_json::from_value(value).unwrap_or_default();
            }
        }
        Vec::new()
    }

    /// Extracts the single-entity payload, or `None` when absent/malformed.
    pub fn into_single<T: DeserializeOwned>(self) -> Option<T> {
        for candidate in [self.result, self.data] {
            if let Some(value) = candidate {
                if !value.is_null() {
                    if let Ok(decoded) = serde_json::from_value(value) {
                        return Some(decoded);
                    }
                }
            }
        }
        None
    }

    /// The raw single-entity payload, for callers that need a field the
    /// model does not carry (the login token, for instance).
    pub fn result_value(&self) -> Option<&Value> {
        self.result.as_ref().or(self.data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Row {
        #[serde(rename = "_id")]
        id: String,
    }

    #[test]
    fn test_list_normalization_is_shape_independent() {
        let rows = json!([{"_id": "a"}, {"_id": "b"}]);

        let shapes = [
            rows.clone(),
            json!({"success": true, "error": false, "message": "ok", "results": rows.clone()}),
            json!({"success": true, "error": false, "message": "ok", "data": rows.clone()}),
        ];

        for shape in shapes {
            let list: Vec<Row> = Envelope::from_value(shape).into_list();
            assert_eq!(
                list,
                vec![Row { id: "a".into() }, Row { id: "b".into() }]
            );
        }
    }

    #[test]
    fn test_results_takes_precedence_over_data() {
        let body = json!({"results": [{"_id": "r"}], "data": [{"_id": "d"}]});
        let list: Vec<Row> = Envelope::from_value(body).into_list();
        assert_eq!(list, vec![Row { id: "r".into() }]);
    }

    #[test]
    fn test_non_array_results_falls_through_to_data() {
        let body = json!({"results": "oops", "data": [{"_id": "d"}]});
        let list: Vec<Row> = Envelope::from_value(body).into_list();
        assert_eq!(list, vec![Row { id: "d".into() }]);
    }

    #[test]
    fn test_malformed_list_defaults_to_empty() {
        let body = json!({"results": [{"_id": 42}]});
        let list: Vec<Row> = Envelope::from_value(body).into_list();
        assert!(list.is_empty());

        let list: Vec<Row> = Envelope::from_value(json!({"message": "no payload"})).into_list();
        assert!(list.is_empty());

        let list: Vec<Row> = Envelope::from_value(json!("just a string")).into_list();
        assert!(list.is_empty());
    }

    #[test]
    fn test_single_precedence_and_null_handling() {
        let body = json!({"result": {"_id": "r"}, "data": {"_id": "d"}});
        let single: Option<Row> = Envelope::from_value(body).into_single();
        assert_eq!(single, Some(Row { id: "r".into() }));

        let body = json!({"result": null, "data": {"_id": "d"}});
        let single: Option<Row> = Envelope::from_value(body).into_single();
        assert_eq!(single, Some(Row { id: "d".into() }));

        let single: Option<Row> = Envelope::from_value(json!({"success": true})).into_single();
        assert!(single.is_none());
    }

    #[test]
    fn test_message_extraction() {
        let env = Envelope::from_value(json!({"message": "Created successfully"}));
        assert_eq!(env.message.as_deref(), Some("Created successfully"));
    }
}
