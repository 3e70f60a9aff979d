//! Group API operations

use crate::config::api;
use crate::error::{KscError, Result};
use crate::ksc::KscClient;

use super::models::Group;

impl KscClient {
    /// Open an accessor over every administration group
    pub async fn find_groups(&self) -> Result<String> {
        self.find(api::FIND_GROUPS, "", api::GROUP_FIELDS)
            .await?
            .ok_or_else(|| {
                KscError::UnexpectedResponse(format!("{} returned no strAccessor", api::FIND_GROUPS))
            })
    }

    /// List all administration groups, in server order
    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        let accessor = self.find_groups().await?;
        self.fetch_all_items(&accessor).await
    }
}
