use crate::domain::{DeviceId, DeviceRecord, ExtensionAttribute, InventoryFields};
use crate::jss::client::JssClient;
use crate::jss::domain::{ComputerGet, ComputerResponse};
use crate::jss::error::JssError;
use crate::jss::path_segment;
use tracing::{info, instrument};

#[instrument(skip(client))]
pub async fn fetch_device(client: &JssClient, id: DeviceId) -> Result<DeviceRecord, JssError> {
    info!("Retrieving device...");
    let response = client.get_json::<ComputerResponse>(&format!("computers/id/{}", id)).await?;
    info!("Retrieving device... OK, '{}'", response.computer.general.name);

    Ok(map_device(response.computer))
}

/// Looks a device up by its hardware UUID.
#[instrument(skip(client))]
pub async fn fetch_device_by_udid(client: &JssClient, udid: &str) -> Result<DeviceRecord, JssError> {
    info!("Retrieving device by hardware UUID...");
    let response = client
        .get_json::<ComputerResponse>(&format!("computers/udid/{}", path_segment(udid)))
        .await?;
    info!(device_id = response.computer.general.id, "Retrieving device by hardware UUID... OK");

    Ok(map_device(response.computer))
}

fn map_device(computer: ComputerGet) -> DeviceRecord {
    let general = computer.general;
    let location = computer.location;
    DeviceRecord {
        id: general.id,
        name: general.name,
        owner: location.real_name.clone(),
        last_checkin: non_empty(general.last_contact_time),
        last_inventory: non_empty(general.report_date),
        inventory: InventoryFields {
            asset_tag: general.asset_tag,
            barcode: general.barcode_1,
            platform: general.platform,
            managed: general.remote_management.managed,
            username: location.username,
            email_address: location.email_address,
            real_name: location.real_name,
            phone: location.phone,
            building: location.building,
            room: location.room,
            position: location.position,
            department: location.department,
        },
        printers: computer.hardware.mapped_printers.into_iter().map(|printer| printer.name).collect(),
        groups: computer.groups_accounts.computer_group_memberships,
        profile_ids: computer.configuration_profiles.into_iter().map(|profile| profile.id).collect(),
        extension_attributes: computer
            .extension_attributes
            .into_iter()
            .map(|attribute| ExtensionAttribute::new(attribute.name, attribute.value))
            .collect(),
        installed_by_installer: computer.software.installed_by_installer_swu,
        installed_by_management_tool: computer.software.installed_by_casper,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
