//! Common traits for inventory records

/// Shared interface of groups and hosts for listing and filtering
pub trait InventoryRecord {
    /// Name shown first in table output
    fn display_name(&self) -> &str;

    /// Values a `--filter` substring is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&filter))
    }
}
