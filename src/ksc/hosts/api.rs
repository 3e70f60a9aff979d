//! Host API operations

use log::debug;

use crate::config::api;
use crate::error::{KscError, Result};
use crate::ksc::groups::Group;
use crate::ksc::KscClient;

use super::models::Host;

/// Search filter selecting the hosts of one group
pub fn group_filter(group_id: i64) -> String {
    format!("({} = {})", api::HOST_GROUP_ATTR, group_id)
}

impl KscClient {
    /// Open an accessor over the hosts of one group
    ///
    /// Returns `None` when the server issues no accessor (e.g. empty group).
    pub async fn find_hosts(&self, group_id: i64) -> Result<Option<String>> {
        self.find(api::FIND_HOSTS, &group_filter(group_id), api::HOST_FIELDS)
            .await
    }

    /// List hosts of one group, or of every group when `group_id` is `None`
    ///
    /// Groups are searched one after another; the result keeps group order.
    /// Any failure aborts the whole listing, including a group record
    /// without an integer `value.id`.
    pub async fn list_hosts(&self, group_id: Option<i64>) -> Result<Vec<Host>> {
        let groups = match group_id {
            Some(id) => {
                debug!("Using specified group: {}", id);
                vec![Group::with_id(id)]
            }
            None => {
                debug!("Fetching all groups");
                self.list_groups().await?
            }
        };

        let mut hosts = Vec::new();
        for group in &groups {
            let id = group.id().ok_or_else(|| {
                KscError::UnexpectedResponse(format!(
                    "group record without id: {}",
                    group.as_value()
                ))
            })?;

            let Some(accessor) = self.find_hosts(id).await? else {
                debug!("Group {} returned no accessor, skipping", id);
                continue;
            };

            let group_hosts: Vec<Host> = self.fetch_all_items(&accessor).await?;
            debug!("Found {} hosts in group {}", group_hosts.len(), id);
            hosts.extend(group_hosts);
        }

        debug!(
            "Fetched {} hosts from {} group(s)",
            hosts.len(),
            groups.len()
        );
        Ok(hosts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ksc::client::test_support::test_client;
    use wiremock::matchers::{body_json, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn host_json(fqdn: &str) -> serde_json::Value {
        serde_json::json!({
            "type": "params",
            "value": { "KLHST_WKS_FQDN": fqdn, "KLHST_WKS_HOSTNAME": format!("guid-{}", fqdn) }
        })
    }

    fn find_hosts_body(group_id: i64) -> serde_json::Value {
        serde_json::json!({
            "wstrFilter": format!("(KLHST_WKS_GROUPID = {})", group_id),
            "vecFieldsToReturn": ["KLHST_WKS_FQDN", "KLHST_WKS_HOSTNAME"],
            "lMaxLifeTime": 100
        })
    }

    async fn mount_find_hosts(server: &MockServer, group_id: i64, accessor: Option<&str>) {
        let response = match accessor {
            Some(acc) => serde_json::json!({ "strAccessor": acc, "PxgRetVal": 1 }),
            None => serde_json::json!({ "PxgRetVal": 0 }),
        };

        Mock::given(method("POST"))
            .and(path("/HostGroup.FindHosts"))
            .and(body_json(find_hosts_body(group_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn mount_accessor(server: &MockServer, accessor: &str, items: Vec<serde_json::Value>) {
        let count = items.len();

        Mock::given(method("POST"))
            .and(path("/ChunkAccessor.GetItemsCount"))
            .and(body_partial_json(serde_json::json!({ "strAccessor": accessor })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "PxgRetVal": count })),
            )
            .expect(1)
            .mount(server)
            .await;

        Mock::given(method("POST"))
            .and(path("/ChunkAccessor.GetItemsChunk"))
            .and(body_partial_json(serde_json::json!({ "strAccessor": accessor })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "pChunk": { "KLCSP_ITERATOR_ARRAY": items }
            })))
            .expect(if count > 0 { 1 } else { 0 })
            .mount(server)
            .await;
    }

    #[test]
    fn test_group_filter() {
        assert_eq!(group_filter(5), "(KLHST_WKS_GROUPID = 5)");
    }

    #[tokio::test]
    async fn test_list_hosts_single_group_skips_group_listing() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;

        Mock::given(method("POST"))
            .and(path("/HostGroup.FindGroups"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        mount_find_hosts(&mock_server, 5, Some("hosts-5")).await;
        mount_accessor(
            &mock_server,
            "hosts-5",
            vec![host_json("ws-01.corp.local"), host_json("ws-02.corp.local")],
        )
        .await;

        let hosts = client.list_hosts(Some(5)).await.unwrap();

        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].fqdn(), "ws-01.corp.local");
        assert_eq!(hosts[1].fqdn(), "ws-02.corp.local");
    }

    #[tokio::test]
    async fn test_list_hosts_all_groups_in_order() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;

        Mock::given(method("POST"))
            .and(path("/HostGroup.FindGroups"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "strAccessor": "groups" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        mount_accessor(
            &mock_server,
            "groups",
            vec![
                serde_json::json!({ "value": { "id": 1, "name": "Servers" } }),
                serde_json::json!({ "value": { "id": 2, "name": "Workstations" } }),
            ],
        )
        .await;

        mount_find_hosts(&mock_server, 1, Some("hosts-1")).await;
        mount_accessor(&mock_server, "hosts-1", vec![host_json("srv-01.corp.local")]).await;

        mount_find_hosts(&mock_server, 2, Some("hosts-2")).await;
        mount_accessor(
            &mock_server,
            "hosts-2",
            vec![host_json("ws-01.corp.local"), host_json("ws-02.corp.local")],
        )
        .await;

        let hosts = client.list_hosts(None).await.unwrap();

        let fqdns: Vec<&str> = hosts.iter().map(Host::fqdn).collect();
        assert_eq!(
            fqdns,
            vec!["srv-01.corp.local", "ws-01.corp.local", "ws-02.corp.local"]
        );
    }

    #[tokio::test]
    async fn test_list_hosts_skips_group_without_accessor() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;

        Mock::given(method("POST"))
            .and(path("/HostGroup.FindGroups"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "strAccessor": "groups" })),
            )
            .mount(&mock_server)
            .await;
        mount_accessor(
            &mock_server,
            "groups",
            vec![
                serde_json::json!({ "value": { "id": 1 } }),
                serde_json::json!({ "value": { "id": 2 } }),
            ],
        )
        .await;

        // Group 1 is empty: no accessor, so no count/chunk calls for it
        mount_find_hosts(&mock_server, 1, None).await;
        mount_find_hosts(&mock_server, 2, Some("hosts-2")).await;
        mount_accessor(&mock_server, "hosts-2", vec![host_json("ws-09.corp.local")]).await;

        let hosts = client.list_hosts(None).await.unwrap();

        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].fqdn(), "ws-09.corp.local");
    }

    #[tokio::test]
    async fn test_list_hosts_single_group_without_accessor() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;

        mount_find_hosts(&mock_server, 9, None).await;

        Mock::given(method("POST"))
            .and(path("/ChunkAccessor.GetItemsCount"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let hosts = client.list_hosts(Some(9)).await.unwrap();
        assert!(hosts.is_empty());
    }

    #[tokio::test]
    async fn test_list_hosts_failure_aborts_listing() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;

        Mock::given(method("POST"))
            .and(path("/HostGroup.FindGroups"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "strAccessor": "groups" })),
            )
            .mount(&mock_server)
            .await;
        mount_accessor(
            &mock_server,
            "groups",
            vec![
                serde_json::json!({ "value": { "id": 1 } }),
                serde_json::json!({ "value": { "id": 2 } }),
            ],
        )
        .await;

        Mock::given(method("POST"))
            .and(path("/HostGroup.FindHosts"))
            .and(body_json(find_hosts_body(1)))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        // Group 2 is never searched
        Mock::given(method("POST"))
            .and(path("/HostGroup.FindHosts"))
            .and(body_json(find_hosts_body(2)))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result = client.list_hosts(None).await;
        assert!(matches!(result, Err(KscError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_list_hosts_group_without_id_is_rejected() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;

        Mock::given(method("POST"))
            .and(path("/HostGroup.FindGroups"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "strAccessor": "groups" })),
            )
            .mount(&mock_server)
            .await;
        mount_accessor(
            &mock_server,
            "groups",
            vec![serde_json::json!({ "type": "params", "value": { "name": "A" } })],
        )
        .await;

        Mock::given(method("POST"))
            .and(path("/HostGroup.FindHosts"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        match client.list_hosts(None).await.unwrap_err() {
            KscError::UnexpectedResponse(msg) => assert!(msg.contains("without id")),
            other => panic!("Expected UnexpectedResponse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_hosts_keeps_records_verbatim() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server).await;

        let records = vec![
            serde_json::json!({ "type": "params", "value": null }),
            serde_json::json!({
                "type": "params",
                "value": { "KLHST_WKS_FQDN": "ws-01.corp.local", "KLHST_WKS_DN": "WS-01" },
                "extra": "kept"
            }),
        ];

        mount_find_hosts(&mock_server, 3, Some("hosts-3")).await;
        mount_accessor(&mock_server, "hosts-3", records.clone()).await;

        let hosts = client.list_hosts(Some(3)).await.unwrap();

        assert_eq!(hosts[0].fqdn(), "");
        assert_eq!(hosts[1].fqdn(), "ws-01.corp.local");
        assert_eq!(
            serde_json::to_value(&hosts).unwrap(),
            serde_json::Value::Array(records)
        );
    }
}
