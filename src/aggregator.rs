use crate::app_config::AppConfig;
use crate::domain::{
    AttributeValue, DeviceId, DeviceRecord, DeviceSummary, ExtensionAttributeEntry, InstallSource, Policy, ProfileId, ProfileTable,
    SoftwareEntry,
};
use crate::extensions::collation_ext::Collate;
use crate::jss::devices::{fetch_device, fetch_device_by_udid};
use crate::jss::policy_fetcher::{FetchOptions, PolicyFetchError, PolicyFetchFailure, fetch_policies, fetch_policy_ids};
use crate::jss::profiles::fetch_profiles;
use crate::jss::{JssClient, JssError};
use crate::scope_resolver::{applies, normalize};
use std::cmp::Reverse;
use thiserror::Error;
use tracing::{info, instrument, trace};

/// Session wide lookup data, fetched once and only read afterwards.
#[derive(Debug, Default)]
pub struct Directory {
    pub profiles: ProfileTable,
    pub policies: Vec<Policy>,
    pub policy_failures: Vec<PolicyFetchFailure>,
}

#[derive(Debug, Clone)]
pub enum DeviceQuery {
    Id(DeviceId),
    Udid(String),
}

#[instrument(skip_all)]
pub async fn load_directory(client: &JssClient, config: &AppConfig) -> Result<Directory, DirectoryError> {
    let profiles = fetch_profiles(client).await?;

    let ids = fetch_policy_ids(client).await?;
    let options = FetchOptions {
        concurrency: config.policies().concurrency(),
        failure_mode: config.policies().failure_mode(),
    };
    let batch = fetch_policies(client, ids, options).await?;
    let mut policies = batch.records.into_iter().map(normalize).collect::<Vec<_>>();
    policies.sort_by_key(|policy| policy.id);
    info!(profiles = profiles.len(), policies = policies.len(), "✅  Loaded directory");

    Ok(Directory {
        profiles,
        policies,
        policy_failures: batch.failures,
    })
}

impl Directory {
    /// Fetches one device and summarizes it against this directory. A failure only concerns
    /// this device, the directory stays usable.
    #[instrument(skip(self, client))]
    pub async fn summarize_device(&self, client: &JssClient, query: &DeviceQuery) -> Result<DeviceSummary, JssError> {
        let record = match query {
            DeviceQuery::Id(id) => fetch_device(client, *id).await?,
            DeviceQuery::Udid(udid) => fetch_device_by_udid(client, udid).await?,
        };

        Ok(summarize(&record, &self.profiles, &self.policies))
    }
}

/// Merges a device record with the profile and policy data into its display ordered summary.
pub fn summarize(record: &DeviceRecord, profiles: &ProfileTable, policies: &[Policy]) -> DeviceSummary {
    DeviceSummary {
        id: record.id,
        name: record.name.clone(),
        owner: record.owner.clone(),
        last_checkin: record.last_checkin.clone(),
        last_inventory: record.last_inventory.clone(),
        inventory: record.inventory.clone(),
        printers: record.printers.clone(),
        groups: sorted_groups(&record.groups),
        extension_attributes: sorted_extension_attributes(record),
        profiles: profile_names(&record.profile_ids, profiles),
        software: installed_software(record),
        policies: applicable_policies(&record.groups, policies),
    }
}

fn sorted_groups(groups: &[String]) -> Vec<String> {
    let mut groups = groups.to_vec();
    groups.sort_by_cached_key(|group| (group.to_lowercase(), group.clone()));
    groups
}

fn sorted_extension_attributes(record: &DeviceRecord) -> Vec<ExtensionAttributeEntry> {
    let mut attributes = record.extension_attributes.iter().collect::<Vec<_>>();
    attributes.sort_by_cached_key(|attribute| Reverse((attribute.name.to_lowercase(), attribute.name.clone(), attribute.value.clone())));

    attributes
        .into_iter()
        .map(|attribute| ExtensionAttributeEntry {
            name: attribute.name.clone(),
            value: AttributeValue::from(attribute.value.as_str()),
        })
        .collect()
}

fn profile_names(profile_ids: &[ProfileId], profiles: &ProfileTable) -> Vec<String> {
    let mut ids = profile_ids.to_vec();
    ids.sort_by_key(|id| Reverse(*id));

    ids.into_iter()
        .filter_map(|id| match profiles.resolve(id) {
            Ok(name) => Some(name.to_string()),
            Err(miss) => {
                trace!("Skipping {}", miss);
                None
            }
        })
        .collect()
}

fn installed_software(record: &DeviceRecord) -> Vec<SoftwareEntry> {
    let management_tool = collated_descending(&record.installed_by_management_tool, InstallSource::ManagementTool);
    let installer = collated_descending(&record.installed_by_installer, InstallSource::Installer);

    management_tool.chain(installer).collect()
}

fn collated_descending(names: &[String], source: InstallSource) -> impl Iterator<Item = SoftwareEntry> {
    let mut names = names.to_vec();
    names.sort_by(|a, b| b.collate(a));
    names.into_iter().map(move |name| SoftwareEntry { source, name })
}

fn applicable_policies(groups: &[String], policies: &[Policy]) -> Vec<String> {
    let mut names = policies
        .iter()
        .filter(|policy| applies(policy, groups))
        .map(|policy| policy.name.clone())
        .collect::<Vec<_>>();
    names.sort_by_cached_key(|name| Reverse((name.to_lowercase(), name.clone())));
    names.dedup();
    names
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Jss(#[from] JssError),
    #[error(transparent)]
    PolicyFetch(#[from] PolicyFetchError),
}
