//! Federated identity integration tests.

use kc_admin_client::FederatedIdentityRepresentation;

use crate::common::{TestEnv, TEST_USER};

fn test_oidc_link() -> FederatedIdentityRepresentation {
    FederatedIdentityRepresentation::new("test-oidc", "test-oidc-user-id", "test-oidc-user")
}

/// Tests that a created link is listed exactly once.
#[tokio::test]
async fn test_create_federated_identity() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let federated = env.client.federated_identity();

    federated
        .create("master", TEST_USER, "test-oidc", &test_oidc_link())
        .await?;

    let links = federated.find("master", TEST_USER).await?;
    let matching: Vec<_> = links
        .iter()
        .filter(|l| l.identity_provider == "test-oidc")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].user_id, "test-oidc-user-id");
    assert_eq!(matching[0].user_name, "test-oidc-user");

    Ok(())
}

/// Tests that linking the same provider twice is a conflict.
#[tokio::test]
async fn test_duplicate_link_is_conflict() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let federated = env.client.federated_identity();

    federated
        .create("master", TEST_USER, "test-oidc", &test_oidc_link())
        .await?;
    let err = federated
        .create("master", TEST_USER, "test-oidc", &test_oidc_link())
        .await
        .expect_err("second link must be rejected");

    assert!(err.is_conflict());
    assert_eq!(env.links.lock().len(), 1);

    Ok(())
}

/// Tests that removal drops the link and is sent without JSON negotiation.
#[tokio::test]
async fn test_remove_federated_identity() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let federated = env.client.federated_identity();

    federated
        .create("master", TEST_USER, "test-oidc", &test_oidc_link())
        .await?;
    federated.remove("master", TEST_USER, "test-oidc").await?;

    let delete = env.last_request().await.expect("remove request was sent");
    assert_eq!(delete.method.as_str(), "DELETE");
    let accept = delete
        .headers
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!accept.contains("application/json"));

    let links = federated.find("master", TEST_USER).await?;
    assert!(links.iter().all(|l| l.identity_provider != "test-oidc"));

    Ok(())
}

/// Tests that removing a link that does not exist surfaces the 404.
#[tokio::test]
async fn test_remove_missing_link_is_not_found() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let err = env
        .client
        .federated_identity()
        .remove("master", TEST_USER, "unknown-idp")
        .await
        .expect_err("missing link must fail");

    assert!(err.is_not_found());

    Ok(())
}

/// Tests that empty arguments are rejected before any request is made.
#[tokio::test]
async fn test_validation_sends_nothing() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let federated = env.client.federated_identity();

    assert!(federated
        .find("master", "")
        .await
        .expect_err("empty user id")
        .is_validation());
    assert!(federated
        .create("master", TEST_USER, " ", &test_oidc_link())
        .await
        .expect_err("blank provider id")
        .is_validation());
    assert!(federated
        .remove("", TEST_USER, "test-oidc")
        .await
        .expect_err("empty realm")
        .is_validation());

    assert_eq!(env.request_count().await, 0);

    Ok(())
}
