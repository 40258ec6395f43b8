// Auxiliary REST lookups

use anyhow::ensure;

use orangehrm_pom::api::ApiClient;

#[tokio::test]
#[ignore = "requires API_URL and BEARER_TOKEN for the project-admins service"]
async fn project_admins_listing_returns_data() -> anyhow::Result<()> {
    let client = ApiClient::from_env()?;
    let admins = client.list_project_admins().await?;
    ensure!(
        admins.get("data").is_some(),
        "project-admins response should carry a data array, got: {admins}"
    );
    Ok(())
}
