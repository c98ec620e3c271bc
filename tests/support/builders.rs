// tests/support/builders.rs
use serde_json::{Map, Value, json};

/// JSON body for `POST /api/v1/articles/generate`.
#[derive(Default)]
pub struct GeneratePayload {
    fields: Map<String, Value>,
}

impl GeneratePayload {
    pub fn new(topic: impl Into<String>) -> Self {
        Self::default().field("topic", json!(topic.into()))
    }

    pub fn keywords(self, keywords: &[&str]) -> Self {
        self.field("keywords", json!(keywords))
    }

    pub fn word_count(self, word_count: i64) -> Self {
        self.field("wordCount", json!(word_count))
    }

    pub fn kind(self, kind: &str) -> Self {
        self.field("articleKind", json!(kind))
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
