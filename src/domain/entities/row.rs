use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TITLE_FIELD: &str = "title";
pub const OPTIONAL_FIELDS: [&str; 3] = ["field1", "field2", "field3"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new(fields: Map<String, Value>) -> Self {
        Row(fields)
    }

    pub fn from_form(title: &str, optional: [&str; 3]) -> Self {
        let mut fields = Map::new();
        fields.insert(TITLE_FIELD.to_string(), Value::String(title.to_string()));
        for (key, value) in OPTIONAL_FIELDS.iter().zip(optional) {
            let value = if value.trim().is_empty() {
                Value::Null
            } else {
                Value::String(value.to_string())
            };
            fields.insert(key.to_string(), value);
        }
        Row(fields)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get(TITLE_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn display_value(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl From<Map<String, Value>> for Row {
    fn from(value: Map<String, Value>) -> Self {
        Row(value)
    }
}
