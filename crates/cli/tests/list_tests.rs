//! Integration tests for `atlascli --list`.
//!
//! Tests cover:
//! - Default resource (cluster) in short format with the count line
//! - `--id` printing a single resource without the count line
//! - `--format full` and `--format yaml`
//! - Non-project resources (organizations, projects)
//! - Processes matched by `hostname:port`

mod common;

use common::*;
use predicates::prelude::*;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_list_clusters_short_is_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/clusters")))
        .and(query_param("pageNum", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("clusters/list_clusters.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    atlascli(&server)
        .arg("--list")
        .assert()
        .success()
        .stdout("Cluster0\nAnalytics\nFuture\n3 cluster(s)\n");
}

#[tokio::test]
async fn test_single_cluster_full() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/clusters/Cluster0")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("clusters/get_cluster.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = atlascli(&server)
        .args(["--list", "--id", "Cluster0", "--format", "full"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("cluster(s)"), "{stdout}");
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["name"], "Cluster0");
    assert_eq!(doc["id"], "5cf5a45a9ccf6400e60981b6");
}

#[tokio::test]
async fn test_database_users_yaml() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/databaseUsers")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("database_users/list_database_users.json")),
        )
        .mount(&server)
        .await;

    atlascli(&server)
        .args(["--list", "--resource", "database-user", "--format", "yaml"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("---\n")
                .and(predicate::str::contains("username: app-writer"))
                .and(predicate::str::contains("username: ops-admin"))
                .and(predicate::str::ends_with("2 database-user(s)\n")),
        );
}

#[tokio::test]
async fn test_organizations_do_not_need_a_project() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/atlas/v1.0/orgs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("projects/list_organizations.json")),
        )
        .mount(&server)
        .await;

    atlascli(&server)
        .env_remove("ATLAS_GROUP")
        .args(["--list", "--resource", "organization"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("5a0a1e7e0f2912c554080adc\n")
                .and(predicate::str::ends_with("3 organization(s)\n")),
        );
}

#[tokio::test]
async fn test_single_project() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/atlas/v1.0/groups/{GROUP}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": GROUP,
            "name": "Production",
            "orgId": "5a0a1e7e0f2912c554080adc",
            "clusterCount": 2,
            "links": []
        })))
        .mount(&server)
        .await;

    atlascli(&server)
        .args(["--list", "--resource", "project", "--id", GROUP])
        .assert()
        .success()
        .stdout(format!("{GROUP}\n"));
}

#[tokio::test]
async fn test_process_by_host_and_port() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/processes")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("hosts/list_processes.json")),
        )
        .mount(&server)
        .await;

    atlascli(&server)
        .args([
            "--list",
            "--resource",
            "process",
            "--id",
            "cluster0-shard-00-01.ab12c.mongodb.net:27017",
        ])
        .assert()
        .success()
        .stdout("cluster0-shard-00-01.ab12c.mongodb.net:27017\n");
}

#[tokio::test]
async fn test_unknown_process_exits_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/processes")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("hosts/list_processes.json")),
        )
        .mount(&server)
        .await;

    atlascli(&server)
        .args(["--list", "--resource", "process", "--id", "nowhere:1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("nowhere:1"));
}

#[tokio::test]
async fn test_maintenance_window_counts_as_one() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/maintenanceWindow")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("maintenance/get_maintenance_window.json")),
        )
        .mount(&server)
        .await;

    atlascli(&server)
        .args(["--list", "--resource", "maintenance-window"])
        .assert()
        .success()
        .stdout("Tuesday 04:00\n1 maintenance-window(s)\n");
}

#[tokio::test]
async fn test_empty_whitelist() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/whitelist")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .mount(&server)
        .await;

    atlascli(&server)
        .args(["--list", "--resource", "whitelist"])
        .assert()
        .success()
        .stdout("0 whitelist(s)\n");
}

#[test]
fn test_help_lists_flags() {
    atlascli_bare().arg("--help").assert().success().stdout(
        predicate::str::contains("--publickey")
            .and(predicate::str::contains("--privatekey"))
            .and(predicate::str::contains("--atlasgroup"))
            .and(predicate::str::contains("--resource"))
            .and(predicate::str::contains("maintenance-window")),
    );
}
