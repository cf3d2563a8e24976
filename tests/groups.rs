//! Wire-level tests for the group operations.

mod common;

use nextcloud_provisioning::ClientError;
use wiremock::matchers::{body_string, query_param};
use wiremock::{MockServer, ResponseTemplate};

use common::{failure_envelope, ocs_endpoint, ok_envelope, simple_ok, TestCase};

#[tokio::test]
async fn get_groups_returns_ids_in_order() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "GET", "cloud/groups")
        .respond_with(ResponseTemplate::new(200).set_body_string(ok_envelope(
            "<data><groups><element>admin</element><element>testGroup</element></groups></data>",
        )))
        .mount(&server)
        .await;

    let groups = case.client(&server).get_groups().await.unwrap();
    assert_eq!(groups, vec!["admin", "testGroup"]);
}

#[tokio::test]
async fn get_groups_empty_listing_is_empty_success() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "GET", "cloud/groups")
        .respond_with(
            ResponseTemplate::new(200).set_body_string(ok_envelope("<data><groups/></data>")),
        )
        .mount(&server)
        .await;

    let groups = case.client(&server).get_groups().await.unwrap();
    assert!(groups.is_empty());
}

#[tokio::test]
async fn get_group_finds_exact_match_in_search_listing() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "GET", "cloud/groups")
        .and(query_param("search", "testGroup"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ok_envelope(
            "<data><groups><element>testGroup</element><element>testGroup2</element></groups></data>",
        )))
        .mount(&server)
        .await;

    let group = case.client(&server).get_group("testGroup").await.unwrap();
    assert_eq!(group, "testGroup");
}

#[tokio::test]
async fn get_group_without_match_is_not_found() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "GET", "cloud/groups")
        .and(query_param("search", "unknownGroup"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(ok_envelope("<data><groups/></data>")),
        )
        .mount(&server)
        .await;

    let err = case
        .client(&server)
        .get_group("unknownGroup")
        .await
        .unwrap_err();
    match err {
        ClientError::GroupNotFound { group_id } => assert_eq!(group_id, "unknownGroup"),
        other => panic!("expected GroupNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn get_group_ignores_near_matches() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "GET", "cloud/groups")
        .and(query_param("search", "test"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ok_envelope(
            "<data><groups><element>testGroup</element><element>testers</element></groups></data>",
        )))
        .mount(&server)
        .await;

    let err = case.client(&server).get_group("test").await.unwrap_err();
    assert!(matches!(err, ClientError::GroupNotFound { .. }));
}

#[tokio::test]
async fn create_group_posts_groupid() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "POST", "cloud/groups")
        .and(body_string("groupid=testGroup01"))
        .respond_with(ResponseTemplate::new(200).set_body_string(simple_ok()))
        .expect(1)
        .mount(&server)
        .await;

    case.client(&server).create_group("testGroup01").await.unwrap();
}

#[tokio::test]
async fn create_group_duplicate_surfaces_api_failure() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "POST", "cloud/groups")
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(failure_envelope(102, "group exists")),
        )
        .mount(&server)
        .await;

    let err = case
        .client(&server)
        .create_group("testGroup01")
        .await
        .unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 102);
            assert_eq!(message, "group exists");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_group_succeeds_on_status_100() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "DELETE", "cloud/groups/testGroup01")
        .respond_with(ResponseTemplate::new(200).set_body_string(simple_ok()))
        .expect(1)
        .mount(&server)
        .await;

    case.client(&server).delete_group("testGroup01").await.unwrap();
}

#[tokio::test]
async fn get_group_members_reads_user_list() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "GET", "cloud/groups/testGroup")
        .respond_with(ResponseTemplate::new(200).set_body_string(ok_envelope(
            "<data><users><element>john.doe</element><element>jane.doe</element></users></data>",
        )))
        .mount(&server)
        .await;

    let members = case
        .client(&server)
        .get_group_members("testGroup")
        .await
        .unwrap();
    assert_eq!(members, vec!["john.doe", "jane.doe"]);
}

#[tokio::test]
async fn get_group_subadmins_reads_flat_list() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "GET", "cloud/groups/testGroup/subadmins")
        .respond_with(ResponseTemplate::new(200).set_body_string(ok_envelope(
            "<data><element>john.doe</element></data>",
        )))
        .mount(&server)
        .await;

    let subadmins = case
        .client(&server)
        .get_group_subadmins("testGroup")
        .await
        .unwrap();
    assert_eq!(subadmins, vec!["john.doe"]);
}

#[tokio::test]
async fn not_authorized_envelope_is_api_failure() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "GET", "cloud/groups")
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(failure_envelope(997, "Current user is not logged in")),
        )
        .mount(&server)
        .await;

    let err = case.client(&server).get_groups().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 997, .. }));
    assert!(err.is_auth_failure());
}

#[tokio::test]
async fn malformed_response_body_is_decode_error() {
    let server = MockServer::start().await;
    let case = TestCase::default();
    ocs_endpoint(&case, "GET", "cloud/groups")
        .respond_with(ResponseTemplate::new(200).set_body_string("<ocs><meta>"))
        .mount(&server)
        .await;

    let err = case.client(&server).get_groups().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
