//! Integration tests for database user endpoints.

mod common;

use atlas_client::models::{DatabaseUserPermissions, DatabaseUserUpdate, RoleName};
use common::*;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_list_database_users() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/databaseUsers")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("database_users/list_database_users.json")),
        )
        .mount(&mock_server)
        .await;

    let users = client(&mock_server).list_database_users().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "app-writer");
    assert_eq!(users[0].roles.len(), 2);
    assert_eq!(users[0].roles[1].collection_name.as_deref(), Some("audit"));
    assert_eq!(users[1].roles[0].role_name, RoleName::AtlasAdmin);
}

#[tokio::test]
async fn test_get_database_user_uses_admin_database() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(group_path("/databaseUsers/admin/app-writer")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("database_users/get_database_user.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = client(&mock_server)
        .get_database_user("app-writer")
        .await
        .unwrap();
    assert_eq!(user.database_name, "admin");
}

#[tokio::test]
async fn test_create_database_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(group_path("/databaseUsers")))
        .and(body_json(json!({
            "databaseName": "admin",
            "username": "app-writer",
            "password": "s3cret",
            "roles": [
                {"databaseName": "orders", "roleName": "readWrite"},
                {"databaseName": "orders", "roleName": "read", "collectionName": "audit"}
            ]
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(load_fixture("database_users/get_database_user.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut user =
        DatabaseUserPermissions::new("app-writer", SecretString::from("s3cret".to_string()));
    user.add_role("orders", RoleName::ReadWrite, None).unwrap();
    user.add_role("orders", RoleName::Read, Some("audit")).unwrap();
    // Duplicates are ignored.
    user.add_role("orders", RoleName::ReadWrite, None).unwrap();

    client(&mock_server)
        .create_database_user(&user)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_role_sends_nothing() {
    let mut user = DatabaseUserPermissions::new("ops", SecretString::from("pw".to_string()));

    let err = user
        .add_role("orders", RoleName::DbAdmin, Some("audit"))
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidRole(_)));

    let err = user
        .add_role("orders", RoleName::ClusterMonitor, None)
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidRole(_)));

    assert!(user.roles().is_empty());
}

#[tokio::test]
async fn test_update_database_user_sends_only_changes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(group_path("/databaseUsers/admin/app-writer")))
        .and(body_json(json!({
            "roles": [{"databaseName": "reports", "roleName": "read"}]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("database_users/get_database_user.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut update = DatabaseUserUpdate::new();
    update.add_role("reports", RoleName::Read, None).unwrap();

    client(&mock_server)
        .update_database_user("app-writer", &update)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_database_user_encodes_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(group_path("/databaseUsers/admin/ops%20team")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server)
        .delete_database_user("ops team")
        .await
        .unwrap();
}
