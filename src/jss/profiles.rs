use crate::domain::ProfileTable;
use crate::jss::client::JssClient;
use crate::jss::domain::ProfilesResponse;
use crate::jss::error::JssError;
use tracing::{info, instrument};

#[instrument(skip_all)]
pub async fn fetch_profiles(client: &JssClient) -> Result<ProfileTable, JssError> {
    info!("Retrieving configuration profiles...");
    let response = client.get_json::<ProfilesResponse>("osxconfigurationprofiles").await?;

    let table = response
        .os_x_configuration_profiles
        .into_iter()
        .map(|profile| (profile.id, profile.name))
        .collect::<ProfileTable>();
    info!("Retrieving configuration profiles... OK, {} found", table.len());

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::jss::client::new_client;

    #[tokio::test]
    async fn fetch_profiles_builds_the_lookup_table() -> Result<(), JssError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/JSSResource/osxconfigurationprofiles")
            .with_status(200)
            .with_body(r#"{"os_x_configuration_profiles": [{"id": 1, "name": "Wi-Fi"}, {"id": 3, "name": "FileVault"}]}"#)
            .create_async()
            .await;
        let client = new_client(&AppConfigBuilder::new().jss_url(server.url()).build())?;

        let table = fetch_profiles(&client).await?;

        mock.assert();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve(3), Ok("FileVault"));

        Ok(())
    }
}
