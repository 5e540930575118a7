//! Authorization resource integration tests.

use kc_admin_client::{AdminError, ResourceRepresentation};

use crate::common::{TestEnv, RESOURCE_CLIENT};

/// Tests that a created resource shows up in the list and disappears after removal.
#[tokio::test]
async fn test_create_and_remove_resource() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let resources = env.client.resources();

    let before = resources.find("master", RESOURCE_CLIENT).await?;

    let created = resources
        .create("master", RESOURCE_CLIENT, &ResourceRepresentation::new("test:2"))
        .await?;
    assert_eq!(created.name, "test:2");
    let resource_id = created.id.clone().expect("created resource has an id");

    let listed = resources.find("master", RESOURCE_CLIENT).await?;
    assert_eq!(listed.len(), before.len() + 1);

    resources
        .remove("master", RESOURCE_CLIENT, &resource_id)
        .await?;

    let after = resources.find("master", RESOURCE_CLIENT).await?;
    assert_eq!(after.len(), before.len());
    assert!(after.iter().all(|r| r.name != "test:2"));

    Ok(())
}

/// Tests that the create request carries an empty scope list.
#[tokio::test]
async fn test_create_sends_scopes() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    env.client
        .resources()
        .create("master", RESOURCE_CLIENT, &ResourceRepresentation::new("test:2"))
        .await?;

    let requests = env.server.received_requests().await.unwrap_or_default();
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .expect("create request was sent");
    let body: serde_json::Value = post.body_json()?;
    assert_eq!(body["name"], "test:2");
    assert_eq!(body["scopes"], serde_json::json!([]));

    Ok(())
}

/// Tests that a duplicate name is reported as a conflict carrying the server message.
#[tokio::test]
async fn test_duplicate_resource_is_conflict() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let err = env
        .client
        .resources()
        .create("master", RESOURCE_CLIENT, &ResourceRepresentation::new("test:1"))
        .await
        .expect_err("duplicate name must be rejected");

    assert!(err.is_conflict());
    assert_eq!(
        err.server_message(),
        Some("Resource with name [test:1] already exists.")
    );
    assert_eq!(env.resources.lock().len(), 1);

    Ok(())
}

/// Tests that updating with unchanged content is accepted and changes nothing.
#[tokio::test]
async fn test_update_is_idempotent() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let resources = env.client.resources();

    let original = resources
        .find_one("master", RESOURCE_CLIENT, "seed-1")
        .await?;

    let first = resources
        .update("master", RESOURCE_CLIENT, &original)
        .await?;
    let second = resources.update("master", RESOURCE_CLIENT, &first).await?;

    assert_eq!(first, original);
    assert_eq!(second, original);

    Ok(())
}

/// Tests that updated fields come back in the refreshed document.
#[tokio::test]
async fn test_update_returns_refreshed_resource() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let resources = env.client.resources();

    let mut resource = resources
        .find_one("master", RESOURCE_CLIENT, "seed-1")
        .await?;
    resource.display_name = Some("Test One".to_string());

    let updated = resources
        .update("master", RESOURCE_CLIENT, &resource)
        .await?;
    assert_eq!(updated.display_name.as_deref(), Some("Test One"));
    assert_eq!(updated.id.as_deref(), Some("seed-1"));

    Ok(())
}

/// Tests that a missing resource is a distinguishable not-found error.
#[tokio::test]
async fn test_missing_resource_is_not_found() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let err = env
        .client
        .resources()
        .find_one("master", RESOURCE_CLIENT, "does-not-exist")
        .await
        .expect_err("unknown id must fail");

    assert!(err.is_not_found());
    assert!(matches!(err, AdminError::Server { status: 404, .. }));

    Ok(())
}

/// Tests that validation failures never reach the server.
#[tokio::test]
async fn test_validation_sends_nothing() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let resources = env.client.resources();

    let err = resources
        .remove("master", RESOURCE_CLIENT, "")
        .await
        .expect_err("empty resource id must be rejected");
    assert!(err.is_validation());

    let err = resources
        .find("", RESOURCE_CLIENT)
        .await
        .expect_err("empty realm must be rejected");
    assert!(err.is_validation());

    let err = resources
        .update("master", RESOURCE_CLIENT, &ResourceRepresentation::new("test:1"))
        .await
        .expect_err("update without _id must be rejected");
    assert!(err.is_validation());

    assert_eq!(env.request_count().await, 0);

    Ok(())
}

/// Tests that a wrong token surfaces the server's 401 without a retry.
#[tokio::test]
async fn test_wrong_token_is_server_error() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;
    let client = kc_admin_client::AdminClient::with_reqwest(
        &format!("{}/auth", env.server.uri()),
        kc_admin_client::AccessToken::new("stale-token"),
    )?;

    let err = client
        .resources()
        .find("master", RESOURCE_CLIENT)
        .await
        .expect_err("unauthorized call must fail");

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.server_message(), Some("HTTP 401 Unauthorized"));
    assert_eq!(env.request_count().await, 1);

    Ok(())
}
