use crate::app_config::FailureMode;
use crate::domain::PolicyId;
use crate::jss::client::JssClient;
use crate::jss::domain::{PoliciesResponse, PolicyGet, PolicyResponse};
use crate::jss::error::JssError;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub concurrency: usize,
    pub failure_mode: FailureMode,
}

/// Raw policy records in completion order. Match them up by `general.id`, not by position.
#[derive(Debug, Default)]
pub struct PolicyBatch {
    pub records: Vec<PolicyGet>,
    pub failures: Vec<PolicyFetchFailure>,
}

#[derive(Debug)]
pub struct PolicyFetchFailure {
    pub policy_id: PolicyId,
    pub error: JssError,
}

#[instrument(skip_all)]
pub async fn fetch_policy_ids(client: &JssClient) -> Result<Vec<PolicyId>, JssError> {
    info!("Retrieving policy list...");
    let response = client.get_json::<PoliciesResponse>("policies").await?;
    info!("Retrieving policy list... OK, {} found", response.policies.len());

    Ok(response.policies.into_iter().map(|policy| policy.id).collect())
}

/// Fetches the general and scope subsets of every policy in `ids`, at most
/// `options.concurrency` at a time. Blocks until every worker is done.
///
/// With [`FailureMode::Abort`] the first failure cancels the outstanding requests and is
/// returned as the error. With [`FailureMode::Collect`] failures end up in
/// [`PolicyBatch::failures`].
#[instrument(skip(client, ids), fields(policies = ids.len()))]
pub async fn fetch_policies(client: &JssClient, ids: Vec<PolicyId>, options: FetchOptions) -> Result<PolicyBatch, PolicyFetchError> {
    info!(concurrency = options.concurrency, "Retrieving policies...");
    let start = Instant::now();

    let semaphore = Arc::new(Semaphore::new(options.concurrency.max(1)));
    let mut workers = JoinSet::new();
    for id in ids {
        let client = client.clone();
        let semaphore = semaphore.clone();
        workers.spawn(async move {
            let _permit = semaphore.acquire_owned().await.expect("semaphore is never closed");
            (id, fetch_policy(&client, id).await)
        });
    }

    let mut batch = PolicyBatch {
        records: Vec::with_capacity(workers.len()),
        failures: Vec::new(),
    };
    while let Some(joined) = workers.join_next().await {
        let (policy_id, result) = joined?;
        match result {
            Ok(record) => batch.records.push(record),
            Err(error) if options.failure_mode == FailureMode::Abort => {
                error!(policy_id, "❌ Unable to retrieve policy, aborting: {}", error);
                workers.abort_all();
                return Err(PolicyFetchError::Policy { policy_id, source: error });
            }
            Err(error) => {
                warn!(policy_id, "⚠️ Unable to retrieve policy, skipping: {}", error);
                batch.failures.push(PolicyFetchFailure { policy_id, error });
            }
        }
    }

    info!(
        duration = ?start.elapsed(),
        "Retrieving policies... OK, {} retrieved, {} failed",
        batch.records.len(),
        batch.failures.len()
    );
    Ok(batch)
}

async fn fetch_policy(client: &JssClient, id: PolicyId) -> Result<PolicyGet, JssError> {
    debug!(policy_id = id, "Fetching policy");
    let response = client
        .get_json::<PolicyResponse>(&format!("policies/id/{}/subset/general&scope", id))
        .await?;
    Ok(response.policy)
}

#[derive(Error, Debug)]
pub enum PolicyFetchError {
    #[error("policy {policy_id}: {source}")]
    Policy { policy_id: PolicyId, source: JssError },
    #[error(transparent)]
    Join(#[from] JoinError),
}
