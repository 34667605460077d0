use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Column headers of the custom field table, in display order.
pub const CUSTOM_FIELD_COLUMNS: [&str; 5] = ["ID", "Name", "Type", "Field Type", "Value Type"];

/// One custom field definition as returned by `GET /custom-fields`.
///
/// Missing or `null` keys decode as empty strings, other scalars keep their
/// JSON text and unknown keys (`href`, `format`, `values`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    #[serde(deserialize_with = "lenient_string")]
    pub custom_field_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_string")]
    pub field_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub value_type: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl CustomField {
    pub fn new(
        custom_field_id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        field_type: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            custom_field_id: custom_field_id.into(),
            name: name.into(),
            kind: kind.into(),
            field_type: field_type.into(),
            value_type: value_type.into(),
        }
    }

    /// Cell values in the same order as [`CUSTOM_FIELD_COLUMNS`].
    pub fn row_cells(&self) -> [&str; 5] {
        [
            self.custom_field_id.as_str(),
            self.name.as_str(),
            self.kind.as_str(),
            self.field_type.as_str(),
            self.value_type.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_names() {
        let body = r#"[{"customFieldId":"1","name":"Foo","type":"text","fieldType":"text","valueType":"string"}]"#;
        let fields: Vec<CustomField> = serde_json::from_str(body).expect("decode");

        assert_eq!(fields, vec![CustomField::new("1", "Foo", "text", "text", "string")]);
    }

    #[test]
    fn ignores_unknown_keys_and_defaults_missing_ones() {
        let body = r#"{
            "customFieldId": "pas",
            "href": "https://api.getresponse.com/v3/custom-fields/pas",
            "name": "country",
            "hidden": "false",
            "values": ["PL", "DE"]
        }"#;
        let field: CustomField = serde_json::from_str(body).expect("decode");

        assert_eq!(field.custom_field_id, "pas");
        assert_eq!(field.name, "country");
        assert_eq!(field.kind, "");
        assert_eq!(field.value_type, "");
    }

    #[test]
    fn null_values_decode_as_empty_strings() {
        let body = r#"[
            {"customFieldId":"1","name":null,"type":"text","fieldType":null,"valueType":"string"},
            {"customFieldId":"2","name":"Bar","type":"number","fieldType":"number","valueType":"number"}
        ]"#;
        let fields: Vec<CustomField> = serde_json::from_str(body).expect("decode");

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], CustomField::new("1", "", "text", "", "string"));
        assert_eq!(fields[1].name, "Bar");
    }

    #[test]
    fn non_string_scalars_keep_their_json_text() {
        let body = r#"{"customFieldId":42,"name":"Opt-in","type":true}"#;
        let field: CustomField = serde_json::from_str(body).expect("decode");

        assert_eq!(field.custom_field_id, "42");
        assert_eq!(field.kind, "true");
    }

    #[test]
    fn row_cells_follow_column_order() {
        let field = CustomField::new("z9", "Loyalty tier", "single_select", "single_select", "string");

        assert_eq!(
            field.row_cells(),
            ["z9", "Loyalty tier", "single_select", "single_select", "string"]
        );
        assert_eq!(field.row_cells().len(), CUSTOM_FIELD_COLUMNS.len());
    }

    #[test]
    fn keeps_payload_order() {
        let body = r#"[{"customFieldId":"b"},{"customFieldId":"a"},{"customFieldId":"c"}]"#;
        let fields: Vec<CustomField> = serde_json::from_str(body).expect("decode");
        let ids: Vec<&str> = fields.iter().map(|f| f.custom_field_id.as_str()).collect();

        assert_eq!(ids, ["b", "a", "c"]);
    }
}
