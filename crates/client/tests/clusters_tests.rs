//! Integration tests for cluster endpoints.

mod common;

use atlas_client::models::{
    AdvancedOptions, BasicReplicaSet, ClusterState, ClusterType, InstanceSizeName, ProviderName,
    TlsProtocol,
};
use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};

#[tokio::test]
async fn test_list_clusters() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("clusters/list_clusters.json");

    Mock::given(method("GET"))
        .and(path(group_path("/clusters")))
        .and(query_param("pageNum", "1"))
        .and(query_param("itemsPerPage", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let clusters = client(&mock_server).list_clusters().await.unwrap();

    assert_eq!(clusters.len(), 3);
    assert_eq!(clusters[0].name, "Cluster0");
    assert_eq!(clusters[0].state_name, Some(ClusterState::Idle));
    assert!(clusters[1].is_sharded());
    // Values this crate does not know survive decoding.
    let future = &clusters[2];
    assert_eq!(
        future.state_name,
        Some(ClusterState::Unknown("HIBERNATING".to_string()))
    );
    assert!(
        future
            .provider_settings
            .as_ref()
            .unwrap()
            .instance_size_name
            .is_unknown()
    );
}

#[tokio::test]
async fn test_get_cluster() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("clusters/get_cluster.json");

    Mock::given(method("GET"))
        .and(path(group_path("/clusters/Cluster0")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let cluster = client(&mock_server).get_cluster("Cluster0").await.unwrap();

    assert_eq!(cluster.cluster_type, Some(ClusterType::ReplicaSet));
    assert_eq!(cluster.disk_size_gb, Some(10.0));
    assert_eq!(
        cluster.srv_address.as_deref(),
        Some("mongodb+srv://cluster0.ab12c.mongodb.net")
    );
    let settings = cluster.provider_settings.unwrap();
    assert_eq!(settings.provider_name, ProviderName::Aws);
    assert_eq!(settings.instance_size_name, InstanceSizeName::M10);
    assert_eq!(settings.disk_iops, Some(100));
    assert_eq!(cluster.replication_specs[0].num_shards, 1);
    assert_eq!(
        cluster.auto_scaling.unwrap().disk_gb_enabled,
        Some(true)
    );
}

#[tokio::test]
async fn test_cluster_exists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/clusters/Cluster0")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("clusters/get_cluster.json")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(group_path("/clusters/Missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "No cluster named Missing exists in group 5b1e2b8e0f2912c1a6e1c8a7.",
            "error": 404,
            "errorCode": "CLUSTER_NOT_FOUND",
            "parameters": ["Missing", "5b1e2b8e0f2912c1a6e1c8a7"],
            "reason": "Not Found"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(group_path("/clusters/Broken")))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream failure"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    assert!(client.cluster_exists("Cluster0").await.unwrap());
    assert!(!client.cluster_exists("Missing").await.unwrap());
    let err = client.cluster_exists("Broken").await.unwrap_err();
    assert!(matches!(err, ClientError::ServerError(_)), "got {err:?}");
}

#[tokio::test]
async fn test_create_basic_replica_set_strips_read_only_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(group_path("/clusters")))
        .and(body_partial_json(json!({
            "name": "Cluster1",
            "clusterType": "REPLICASET",
            "diskSizeGB": 10.0,
            "mongoDBMajorVersion": "4.0",
            "providerSettings": {
                "instanceSizeName": "M10",
                "providerName": "AWS",
                "regionName": "US_WEST_2"
            }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("clusters/get_cluster.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client(&mock_server)
        .create_basic_replica_set(BasicReplicaSet::new("Cluster1"))
        .await;
    assert!(created.is_ok(), "create failed: {created:?}");

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    for field in ["id", "stateName", "mongoURI", "srvAddress", "numShards", "links"] {
        assert!(body.get(field).is_none(), "{field} must not be sent");
    }
    let region = &body["replicationSpecs"][0]["regionsConfig"]["US_WEST_2"];
    assert_eq!(region["electableNodes"], 3);
    assert_eq!(region["priority"], 7);
}

#[tokio::test]
async fn test_duplicate_cluster_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(group_path("/clusters")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "A cluster named Cluster0 is already present in group 5b1e2b8e0f2912c1a6e1c8a7.",
            "error": 400,
            "errorCode": "DUPLICATE_CLUSTER_NAME",
            "parameters": ["Cluster0"],
            "reason": "Bad Request"
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .create_basic_replica_set(BasicReplicaSet::new("Cluster0"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::DuplicateClusterName(_)));
    assert!(err.is_bad_request());
    let (status, body) = err.atlas_response().unwrap();
    assert_eq!(status, 400);
    assert_eq!(body.parameters, vec![json!("Cluster0")]);
}

#[tokio::test]
async fn test_modify_cluster_instance_size_keeps_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/clusters/Cluster0")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("clusters/get_cluster.json")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(group_path("/clusters/Cluster0")))
        .and(body_json(json!({
            "providerSettings": {"providerName": "AWS", "instanceSizeName": "M40_NVME"}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("clusters/get_cluster.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .modify_cluster_instance_size("Cluster0", InstanceSizeName::M40Nvme)
        .await;

    assert!(result.is_ok(), "resize failed: {result:?}");
}

#[tokio::test]
async fn test_pause_cluster() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(group_path("/clusters/Cluster0")))
        .and(body_json(json!({"paused": true})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("clusters/get_cluster.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).pause_cluster("Cluster0", true).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_cluster_requires_confirmation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(group_path("/clusters/Cluster0")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let err = client.delete_cluster("Cluster0", false).await.unwrap_err();
    assert!(matches!(err, ClientError::ConfirmationRequired(_)));

    client.delete_cluster("Cluster0", true).await.unwrap();
}

#[tokio::test]
async fn test_test_failover() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(group_path("/clusters/Cluster0/restartPrimaries")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server).test_failover("Cluster0").await.unwrap();
}

#[tokio::test]
async fn test_advanced_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/clusters/Cluster0/processArgs")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("clusters/process_args.json")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(group_path("/clusters/Cluster0/processArgs")))
        .and(body_json(json!({"javascriptEnabled": false})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("clusters/process_args.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let options = client.get_cluster_advanced_options("Cluster0").await.unwrap();
    assert_eq!(options.minimum_enabled_tls_protocol, Some(TlsProtocol::Tls1_2));
    assert_eq!(options.oplog_size_mb, Some(2048));

    let change = AdvancedOptions {
        javascript_enabled: Some(false),
        ..AdvancedOptions::default()
    };
    client
        .modify_cluster_advanced_options("Cluster0", &change)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cluster_calls_require_group() {
    let mock_server = MockServer::start().await;

    let err = unscoped_client(&mock_server)
        .list_clusters()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MissingGroupId));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
