use crate::jss::client::JssClient;
use crate::jss::domain::AccountResponse;
use crate::jss::error::JssError;
use crate::jss::path_segment;
use tracing::{info, instrument, warn};

/// Returns the privileges in `required` that the signed in account lacks. Empty means the
/// account may use the tools.
#[instrument(skip(client, required), fields(username = client.username()))]
pub async fn missing_privileges(client: &JssClient, required: &[String]) -> Result<Vec<String>, JssError> {
    info!("Checking account privileges...");
    let response = client
        .get_json::<AccountResponse>(&format!("accounts/username/{}", path_segment(client.username())))
        .await?;

    let granted = response.account.privileges.jss_objects;
    let missing = required
        .iter()
        .filter(|privilege| !granted.contains(privilege))
        .cloned()
        .collect::<Vec<_>>();

    if missing.is_empty() {
        info!("Checking account privileges... OK");
    } else {
        warn!(?missing, "⚠️ Account lacks required privileges");
    }
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::jss::client::new_client;

    #[tokio::test]
    async fn missing_privileges_lists_what_the_account_lacks() -> Result<(), JssError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/JSSResource/accounts/username/user")
            .with_status(200)
            .with_body(r#"{"account": {"id": 3, "name": "user", "privileges": {"jss_objects": ["Read Computers", "Read Accounts"]}}}"#)
            .create_async()
            .await;
        let client = new_client(&AppConfigBuilder::new().jss_url(server.url()).build())?;
        let required = vec!["Read Computers".to_string(), "Update Computers".to_string()];

        let missing = missing_privileges(&client, &required).await?;

        mock.assert();
        assert_eq!(missing, vec!["Update Computers".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn missing_privileges_is_empty_for_a_fully_privileged_account() -> Result<(), JssError> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/JSSResource/accounts/username/user")
            .with_status(200)
            .with_body(r#"{"account": {"privileges": {"jss_objects": ["Read Computers"]}}}"#)
            .create_async()
            .await;
        let client = new_client(&AppConfigBuilder::new().jss_url(server.url()).build())?;

        let missing = missing_privileges(&client, &["Read Computers".to_string()]).await?;

        assert!(missing.is_empty());

        Ok(())
    }
}
