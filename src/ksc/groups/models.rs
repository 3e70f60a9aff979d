//! Group data models

use serde::{Deserialize, Serialize};

use crate::ksc::traits::InventoryRecord;

/// Administration group record as returned by `ChunkAccessor.GetItemsChunk`
///
/// The server record is kept untouched; `value.id` and `value.name` are read
/// on demand.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Group(serde_json::Value);

impl Group {
    /// Stand-in record for a group known only by id
    pub fn with_id(id: i64) -> Self {
        Self(serde_json::json!({ "value": { "id": id } }))
    }

    /// Group id, if the record carries an integer `value.id`
    pub fn id(&self) -> Option<i64> {
        self.0.pointer("/value/id").and_then(serde_json::Value::as_i64)
    }

    /// Get group name, empty if the server did not send one
    pub fn name(&self) -> &str {
        self.0
            .pointer("/value/name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("")
    }

    /// The record exactly as the server sent it
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl InventoryRecord for Group {
    fn display_name(&self) -> &str {
        self.name()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name()]
    }
}
