//! Chunk accessor operations
//!
//! KSC search methods (`HostGroup.FindGroups`, `HostGroup.FindHosts`) do not
//! return records directly. They return an accessor: an opaque server-side
//! cursor that is read through `ChunkAccessor.GetItemsCount` and
//! `ChunkAccessor.GetItemsChunk`.

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::Result;
use crate::ksc::KscClient;

/// Body of a `HostGroup.Find*` call
#[derive(Serialize, Debug)]
pub(crate) struct FindRequest<'a> {
    #[serde(rename = "wstrFilter")]
    pub filter: &'a str,
    #[serde(rename = "vecFieldsToReturn")]
    pub fields: &'a [&'a str],
    #[serde(rename = "lMaxLifeTime")]
    pub max_lifetime: u32,
}

/// Answer of a `HostGroup.Find*` call
#[derive(Deserialize, Debug)]
pub(crate) struct FindResponse {
    #[serde(rename = "strAccessor")]
    pub accessor: Option<String>,
}

#[derive(Serialize, Debug)]
struct AccessorRequest<'a> {
    #[serde(rename = "strAccessor")]
    accessor: &'a str,
}

#[derive(Serialize, Debug)]
struct ChunkRequest<'a> {
    #[serde(rename = "strAccessor")]
    accessor: &'a str,
    #[serde(rename = "nStart")]
    start: i64,
    #[serde(rename = "nCount")]
    count: i64,
}

#[derive(Deserialize, Debug)]
struct ItemsCountResponse {
    #[serde(rename = "PxgRetVal")]
    count: i64,
}

#[derive(Deserialize, Debug)]
struct ItemsChunkResponse<T> {
    #[serde(rename = "pChunk")]
    chunk: Chunk<T>,
}

#[derive(Deserialize, Debug)]
struct Chunk<T> {
    #[serde(rename = "KLCSP_ITERATOR_ARRAY")]
    items: Vec<T>,
}

impl KscClient {
    /// Run a search and return its accessor, if the server issued one
    pub(crate) async fn find(
        &self,
        endpoint: &str,
        filter: &str,
        fields: &[&str],
    ) -> Result<Option<String>> {
        let body = FindRequest {
            filter,
            fields,
            max_lifetime: api::MAX_LIFETIME,
        };
        let response: FindResponse = self.call(endpoint, &body).await?;

        debug!(
            "{} with filter '{}' returned accessor {:?}",
            endpoint, filter, response.accessor
        );
        Ok(response.accessor)
    }

    /// Total number of items behind an accessor
    pub async fn get_items_count(&self, accessor: &str) -> Result<i64> {
        let response: ItemsCountResponse = self
            .call(api::GET_ITEMS_COUNT, &AccessorRequest { accessor })
            .await?;
        Ok(response.count)
    }

    /// Fetch `count` items starting at `start`
    pub async fn get_items_chunk<T>(&self, accessor: &str, start: i64, count: i64) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let body = ChunkRequest {
            accessor,
            start,
            count,
        };
        let response: ItemsChunkResponse<T> = self.call(api::GET_ITEMS_CHUNK, &body).await?;
        Ok(response.chunk.items)
    }

    /// Read every item behind an accessor
    ///
    /// Each pass requests the whole range (`nStart = 0`, `nCount = total`)
    /// while the loop offset advances by [`api::CHUNK_STEP`]. Up to
    /// `CHUNK_STEP` items this is a single request; beyond that the full range
    /// is fetched once per step. See DESIGN.md before changing it.
    pub async fn fetch_all_items<T>(&self, accessor: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let total = self.get_items_count(accessor).await?;
        debug!("Accessor {} holds {} items", accessor, total);

        let mut items = Vec::new();
        let mut start = 0;
        while start < total {
            let chunk: Vec<T> = self.get_items_chunk(accessor, 0, total).await?;
            debug!("Chunk at offset {} returned {} items", start, chunk.len());
            items.extend(chunk);
            start += api::CHUNK_STEP;
        }

        Ok(items)
    }
}
