//! Snapshot assembly: list the stack sets, fan the per-stack-set reads out
//! over a small bounded pool, and merge results as they complete.

use std::future::Future;

use futures::stream::{self, StreamExt};
use log::debug;

use crate::aws::{CloudFormationApi, Page};
use crate::error::{SnapshotError, SnapshotResult};
use crate::types::{StackSetRecord, StackSetSupplement};

/// Supplementary fetches in flight at once. Kept small to stay clear of
/// the CloudFormation read throttle; tune it if the account allows a
/// higher request rate.
const FETCH_CONCURRENCY: usize = 2;

/// The three supplementary reads issued for every stack set.
#[derive(Debug, Clone, Copy)]
enum FetchKind {
    Instances,
    Operations,
    Description,
}

impl super::service::StackSetSnapshotService {
    /// Collect the full snapshot: every stack set with its instances,
    /// operations, and description merged in.
    pub async fn snapshot(&self) -> SnapshotResult<Vec<StackSetRecord>> {
        collect_snapshot(&self.client).await
    }
}

/// Snapshot every stack set visible through `api`.
///
/// The listing order of ListStackSets is the output order. Any fetch
/// error aborts the whole run; no partial snapshot is ever returned.
pub async fn collect_snapshot<A: CloudFormationApi + ?Sized>(
    api: &A,
) -> SnapshotResult<Vec<StackSetRecord>> {
    let summaries = collate(|token| api.list_stack_sets(token)).await?;
    debug!("listed {} stack sets", summaries.len());

    let mut records: Vec<StackSetRecord> =
        summaries.into_iter().map(StackSetRecord::from).collect();

    let mut work = Vec::with_capacity(records.len() * 3);
    for (index, record) in records.iter().enumerate() {
        let id = record.stack_set_id.clone().ok_or_else(|| {
            SnapshotError::Response("stack set summary is missing StackSetId".to_string())
        })?;
        for kind in [
            FetchKind::Instances,
            FetchKind::Operations,
            FetchKind::Description,
        ] {
            work.push((index, id.clone(), kind));
        }
    }

    // Merge happens on the collecting side as each fetch completes. The
    // three supplements of a record write disjoint fields, so completion
    // order cannot change the result.
    let results = stream::iter(work)
        .map(|(index, id, kind)| async move {
            fetch_supplement(api, &id, kind)
                .await
                .map(|supplement| (index, supplement))
        })
        .buffer_unordered(FETCH_CONCURRENCY);
    futures::pin_mut!(results);

    while let Some(completed) = results.next().await {
        let (index, supplement) = completed?;
        records[index].merge(supplement);
    }

    Ok(records)
}

async fn fetch_supplement<A: CloudFormationApi + ?Sized>(
    api: &A,
    stack_set_id: &str,
    kind: FetchKind,
) -> SnapshotResult<StackSetSupplement> {
    match kind {
        FetchKind::Instances => {
            let instances = collate(|token| api.list_stack_instances(stack_set_id, token)).await?;
            debug!("collated {} instances for '{stack_set_id}'", instances.len());
            Ok(StackSetSupplement::Instances(instances))
        }
        FetchKind::Operations => {
            let operations =
                collate(|token| api.list_stack_set_operations(stack_set_id, token)).await?;
            debug!(
                "collated {} operations for '{stack_set_id}'",
                operations.len()
            );
            Ok(StackSetSupplement::Operations(operations))
        }
        FetchKind::Description => {
            let detail = api.describe_stack_set(stack_set_id).await?;
            Ok(StackSetSupplement::Description(detail))
        }
    }
}

/// Drain a paginated listing into one vector, following continuation
/// tokens and concatenating pages in the order the service returns them.
async fn collate<T, F, Fut>(mut fetch_page: F) -> SnapshotResult<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = SnapshotResult<Page<T>>>,
{
    let mut items = Vec::new();
    let mut next_token = None;
    loop {
        let page = fetch_page(next_token).await?;
        items.extend(page.items);
        next_token = page.next_token;
        if next_token.is_none() {
            return Ok(items);
        }
    }
}
