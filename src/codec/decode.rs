//! Response body decoding.
//!
//! Bodies are decoded in serde's default mode, so fields the API adds later
//! are ignored instead of failing the call.

use crate::transport::ResponseEnvelope;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

/// Decode the body of a successful response into `T`.
///
/// An absent or blank body is "no content" and yields `Ok(None)`.
pub fn decode<T: DeserializeOwned>(response: &ResponseEnvelope) -> Result<Option<T>> {
    let body = match response.body.as_deref() {
        Some(body) if !body.trim().is_empty() => body,
        _ => return Ok(None),
    };

    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| Error::decoding(format!("invalid response body: {}", e)))
}

/// The outer shape shared by every resource response:
///
/// ```json
/// {
///   "request_status": "SUCCESS",
///   "request_id": "57b...",
///   "campaigns": [
///     { "sub_request_status": "SUCCESS", "campaign": { "id": "..." } }
///   ]
/// }
/// ```
///
/// Entries may also carry the entity directly (`"campaigns": [{"id": "..."}]`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseWrapper {
    #[serde(default)]
    pub request_status: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(flatten)]
    pub collections: Map<String, Value>,
}

impl ResponseWrapper {
    /// Project the entities listed under `collection`.
    ///
    /// A wrapped entry contributes its `entity` member; a bare entry is the
    /// entity itself. Entries whose `sub_request_status` is `ERROR` are
    /// skipped and logged.
    pub fn into_entities<T: DeserializeOwned>(
        mut self,
        collection: &str,
        entity: &str,
    ) -> Result<Vec<T>> {
        let entries = match self.collections.remove(collection) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(Error::decoding(format!(
                    "expected '{}' to be an array, found {}",
                    collection,
                    json_kind(&other)
                )))
            }
        };

        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            let value = match entry {
                Value::Object(mut obj) => {
                    let wrapped = obj.contains_key("sub_request_status");
                    if sub_request_failed(&obj) {
                        let reason = obj
                            .get("sub_request_error_reason")
                            .and_then(serde_json::Value::as_str)
                            .unwrap_or("");
                        warn!(
                            collection,
                            request_id = self.request_id.as_deref().unwrap_or(""),
                            reason,
                            "sub-request failed; entry skipped"
                        );
                        continue;
                    }
                    match obj.remove(entity) {
                        Some(inner) => inner,
                        None if wrapped => {
                            warn!(
                                collection,
                                entity,
                                request_id = self.request_id.as_deref().unwrap_or(""),
                                "wrapped entry without entity; entry skipped"
                            );
                            continue;
                        }
                        None => Value::Object(obj),
                    }
                }
                other => other,
            };
            let item = serde_json::from_value(value).map_err(|e| {
                Error::decoding(format!("invalid '{}' entry: {}", entity, e))
            })?;
            out.push(item);
        }
        Ok(out)
    }
}

fn sub_request_failed(obj: &Map<String, Value>) -> bool {
    obj.get("sub_request_status")
        .and_then(Value::as_str)
        .map(|s| s.eq_ignore_ascii_case("ERROR"))
        .unwrap_or(false)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: String,
        #[serde(default)]
        name: Option<String>,
    }

    fn ok(body: &str) -> ResponseEnvelope {
        ResponseEnvelope {
            status: 200,
            body: Some(body.to_string()),
        }
    }

    #[test]
    fn empty_body_is_no_content() {
        let none = ResponseEnvelope {
            status: 204,
            body: None,
        };
        assert!(decode::<Thing>(&none).unwrap().is_none());
        assert!(decode::<Thing>(&ok("   ")).unwrap().is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let thing: Thing = decode(&ok(r#"{"id":"a","name":"n","brand_new_field":[1,2]}"#))
            .unwrap()
            .unwrap();
        assert_eq!(
            thing,
            Thing {
                id: "a".into(),
                name: Some("n".into())
            }
        );
    }

    #[test]
    fn malformed_json_is_a_decoding_error() {
        let err = decode::<Thing>(&ok("not json")).unwrap_err();
        assert!(matches!(err, Error::Decoding { .. }));
    }

    #[test]
    fn projects_bare_and_wrapped_entries() {
        let body = r#"{
            "request_status": "SUCCESS",
            "request_id": "r1",
            "things": [
                {"id": "bare"},
                {"sub_request_status": "SUCCESS", "thing": {"id": "wrapped", "name": "w"}}
            ]
        }"#;
        let wrapper: ResponseWrapper = decode(&ok(body)).unwrap().unwrap();
        assert_eq!(wrapper.request_id.as_deref(), Some("r1"));
        let things: Vec<Thing> = wrapper.into_entities("things", "thing").unwrap();
        assert_eq!(things.len(), 2);
        assert_eq!(things[0].id, "bare");
        assert_eq!(things[1].name.as_deref(), Some("w"));
    }

    #[test]
    fn failed_sub_requests_are_skipped() {
        let body = r#"{"things": [
            {"sub_request_status": "ERROR", "sub_request_error_reason": "nope"},
            {"sub_request_status": "SUCCESS", "thing": {"id": "kept"}}
        ]}"#;
        let wrapper: ResponseWrapper = decode(&ok(body)).unwrap().unwrap();
        let things: Vec<Thing> = wrapper.into_entities("things", "thing").unwrap();
        assert_eq!(things, vec![Thing { id: "kept".into(), name: None }]);
    }

    #[test]
    fn wrapped_entry_without_entity_is_skipped() {
        let body = r#"{"things": [
            {"sub_request_status": "SUCCESS"},
            {"sub_request_status": "SUCCESS", "thing": {"id": "kept"}}
        ]}"#;
        let wrapper: ResponseWrapper = decode(&ok(body)).unwrap().unwrap();
        let things: Vec<Thing> = wrapper.into_entities("things", "thing").unwrap();
        assert_eq!(things, vec![Thing { id: "kept".into(), name: None }]);
    }

    #[test]
    fn lone_empty_wrapper_projects_nothing() {
        let wrapper: ResponseWrapper =
            decode(&ok(r#"{"things":[{"sub_request_status":"SUCCESS"}]}"#)).unwrap().unwrap();
        assert!(wrapper.into_entities::<Thing>("things", "thing").unwrap().is_empty());
    }

    #[test]
    fn missing_collection_is_empty() {
        let wrapper: ResponseWrapper = decode(&ok(r#"{"request_status":"SUCCESS"}"#))
            .unwrap()
            .unwrap();
        assert!(wrapper.into_entities::<Thing>("things", "thing").unwrap().is_empty());
    }

    #[test]
    fn non_array_collection_is_rejected() {
        let wrapper: ResponseWrapper = decode(&ok(r#"{"things":{"id":"x"}}"#)).unwrap().unwrap();
        let err = wrapper.into_entities::<Thing>("things", "thing").unwrap_err();
        assert!(err.to_string().contains("an object"));
    }
}
