use crate::domain::DeviceId;
use crate::jss::client::JssClient;
use crate::jss::domain::ComputerPut;
use crate::jss::error::JssError;
use thiserror::Error;
use tracing::{info, instrument};

#[instrument(skip(client, update))]
pub async fn update_device(client: &JssClient, id: DeviceId, update: &ComputerPut) -> Result<(), UpdateError> {
    if update.is_empty() {
        return Err(UpdateError::NothingToUpdate);
    }

    let body = to_xml(update)?;
    info!("Updating device...");
    client.put_xml(&format!("computers/id/{}", id), body).await?;
    info!("Updating device... OK");

    Ok(())
}

fn to_xml(update: &ComputerPut) -> Result<String, JssError> {
    Ok(quick_xml::se::to_string_with_root("computer", update)?)
}

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("no fields to update")]
    NothingToUpdate,
    #[error(transparent)]
    Jss(#[from] JssError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::jss::client::new_client;
    use crate::jss::domain::{GeneralPut, LocationPut};
    use crate::jss::error::HttpErrorKind;
    use pretty_assertions::assert_eq;

    fn rename_and_move() -> ComputerPut {
        ComputerPut {
            general: GeneralPut {
                name: Some("labmac-8".to_string()),
                asset_tag: Some("A-1008".to_string()),
                ..Default::default()
            },
            location: LocationPut {
                building: Some("Babbage & Lovelace Hall".to_string()),
                room: Some("102".to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn to_xml_writes_only_the_supplied_fields() -> Result<(), JssError> {
        let xml = to_xml(&rename_and_move())?;

        assert_eq!(
            xml,
            "<computer>\
             <general><name>labmac-8</name><asset_tag>A-1008</asset_tag></general>\
             <location><building>Babbage &amp; Lovelace Hall</building><room>102</room></location>\
             </computer>"
        );

        Ok(())
    }

    #[test]
    fn to_xml_omits_an_untouched_section() -> Result<(), JssError> {
        let update = ComputerPut {
            location: LocationPut {
                username: Some("grace".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(to_xml(&update)?, "<computer><location><username>grace</username></location></computer>");

        Ok(())
    }

    #[tokio::test]
    async fn update_device_puts_the_xml_document() -> Result<(), UpdateError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/JSSResource/computers/id/42")
            .match_header("content-type", "text/xml")
            .match_body(mockito::Matcher::Regex("<name>labmac-8</name>".to_string()))
            .with_status(201)
            .with_body("<computer><id>42</id></computer>")
            .create_async()
            .await;
        let client = new_client(&AppConfigBuilder::new().jss_url(server.url()).build())?;

        update_device(&client, 42, &rename_and_move()).await?;

        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn update_device_surfaces_a_conflict() -> Result<(), JssError> {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/JSSResource/computers/id/42")
            .with_status(409)
            .with_body("<html>\n<p>Error: Duplicate name</p>\n</html>")
            .create_async()
            .await;
        let client = new_client(&AppConfigBuilder::new().jss_url(server.url()).build())?;

        let result = update_device(&client, 42, &rename_and_move()).await;

        assert!(matches!(
            result,
            Err(UpdateError::Jss(JssError::HttpStatus { code: 409, kind: HttpErrorKind::Conflict(ref detail) })) if detail == "Duplicate name"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn update_device_refuses_an_empty_update() -> Result<(), JssError> {
        let client = new_client(&AppConfigBuilder::new().build())?;

        let result = update_device(&client, 42, &ComputerPut::default()).await;

        assert!(matches!(result, Err(UpdateError::NothingToUpdate)));

        Ok(())
    }
}
