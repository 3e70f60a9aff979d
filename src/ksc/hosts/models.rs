//! Host data models

use serde::{Deserialize, Serialize};

use crate::ksc::traits::InventoryRecord;

/// Managed host record as returned by `ChunkAccessor.GetItemsChunk`
///
/// The client does not interpret host records; the accessors below read
/// `value.KLHST_WKS_FQDN` and `value.KLHST_WKS_HOSTNAME` for display and
/// filtering only.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Host(serde_json::Value);

impl Host {
    fn attribute(&self, name: &str) -> &str {
        self.0
            .get("value")
            .and_then(|value| value.get(name))
            .and_then(serde_json::Value::as_str)
            .unwrap_or("")
    }

    pub fn fqdn(&self) -> &str {
        self.attribute("KLHST_WKS_FQDN")
    }

    /// KSC internal host name (usually a GUID)
    pub fn hostname(&self) -> &str {
        self.attribute("KLHST_WKS_HOSTNAME")
    }

    /// The record exactly as the server sent it
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl InventoryRecord for Host {
    fn display_name(&self) -> &str {
        self.fqdn()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.fqdn(), self.hostname()]
    }
}
