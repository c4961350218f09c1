use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::dtos::SelectedClass;
use crate::error::{ErrorKind, Result};

pub const UNKNOWN_DAY: &str = "Unknown Day";
pub const DEFAULT_TIME: &str = "00:00";

/// One master class as published in `master_classes.json`
///
/// Every known field is optional so that `null` or missing values survive
/// decoding; fields this crate does not know about are kept in `extra` and
/// written back out when the record is re-encoded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClassRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presenter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wines: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClassRecord {
    /// Day used for grouping; empty and missing days fall back to `Unknown Day`
    pub fn day_or_default(&self) -> &str {
        non_empty(self.day.as_deref()).unwrap_or(UNKNOWN_DAY)
    }

    /// Time used for ordering; empty and missing times sort as `00:00`
    pub fn time_or_default(&self) -> &str {
        non_empty(self.time.as_deref()).unwrap_or(DEFAULT_TIME)
    }

    /// `time - presenter: title`, missing parts left blank
    pub fn label(&self) -> String {
        format!(
            "{} - {}: {}",
            self.time.as_deref().unwrap_or_default(),
            self.presenter.as_deref().unwrap_or_default(),
            self.title.as_deref().unwrap_or_default(),
        )
    }

    pub fn identity(&self) -> SelectedClass {
        SelectedClass {
            title: self.title.clone(),
            presenter: self.presenter.clone(),
            link: self.link.clone(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Decodes a fetched document into class records.
///
/// The document must be a JSON array of objects whose known fields are
/// strings or `null`; anything else is a decode error.
pub fn decode_class_list(body: &str) -> Result<Vec<ClassRecord>> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(ErrorKind::DecodeError(format!(
            "expected an array of master classes, got {}",
            json_type_name(&value)
        ))
        .into());
    }
    Ok(serde_json::from_value(value)?)
}

fn json_type_name(value: &Value) -> &'static str {
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
    use crate::error::Failure;

    #[test]
    fn decodes_records_and_keeps_unknown_fields() {
        let body = r#"[
            {"day": "Torstai", "time": "16:00", "presenter": "Anna", "title": "Blanc de Blancs",
             "link": "https://example.org/mc/1", "room": "Sali 2"}
        ]"#;

        let classes = decode_class_list(body).unwrap();
        assert_eq!(classes.len(), 1);
        let class = &classes[0];
        assert_eq!(class.day.as_deref(), Some("Torstai"));
        assert_eq!(class.extra.get("room"), Some(&Value::from("Sali 2")));

        let encoded: Value = serde_json::to_value(class).unwrap();
        assert_eq!(encoded["room"], "Sali 2");
        assert_eq!(encoded["title"], "Blanc de Blancs");
    }

    #[test]
    fn nulls_and_missing_fields_use_defaults() {
        let classes =
            decode_class_list(r#"[{"day": null, "title": "Rosé"}, {"day": "", "time": ""}]"#)
                .unwrap();

        assert_eq!(classes[0].day_or_default(), UNKNOWN_DAY);
        assert_eq!(classes[0].time_or_default(), DEFAULT_TIME);
        assert_eq!(classes[1].day_or_default(), UNKNOWN_DAY);
        assert_eq!(classes[1].time_or_default(), DEFAULT_TIME);
        assert_eq!(classes[0].label(), " - : Rosé");
    }

    #[test]
    fn rejects_documents_that_are_not_arrays() {
        let err = decode_class_list(r#"{"day": "Mon"}"#).unwrap_err();
        assert_eq!(err.failure(), Failure::Decode);
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn rejects_malformed_json_and_wrong_field_types() {
        assert_eq!(
            decode_class_list("[{").unwrap_err().failure(),
            Failure::Decode
        );
        assert_eq!(
            decode_class_list(r#"[{"time": 900}]"#).unwrap_err().failure(),
            Failure::Decode
        );
        assert_eq!(
            decode_class_list(r#"["not an object"]"#).unwrap_err().failure(),
            Failure::Decode
        );
    }

    #[test]
    fn identity_keeps_only_title_presenter_and_link() {
        let class = ClassRecord {
            day: Some("Mon".into()),
            time: Some("10:00".into()),
            presenter: Some("A".into()),
            title: Some("X".into()),
            link: Some("l1".into()),
            ..Default::default()
        };

        let encoded = serde_json::to_string(&class.identity()).unwrap();
        assert_eq!(encoded, r#"{"title":"X","presenter":"A","link":"l1"}"#);
    }
}
