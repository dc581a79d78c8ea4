// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod lookup by label selector

use crate::constants::{labels::primary_instance_labels, CONTAINER_DATABASE};
use crate::error::{PgoError, Result};
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, instrument};

/// The container a command is executed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodReference {
    pub namespace: String,
    pub name: String,
    pub container: String,
}

/// List the Pods in a namespace matching a label selector.
///
/// Returns every match; callers decide how many they expect.
#[instrument(skip(client))]
pub async fn list_pods_by_label(
    client: &Client,
    namespace: &str,
    selector: &str,
) -> Result<Vec<Pod>> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let lp = ListParams::default().labels(selector);

    let pod_list = pods.list(&lp).await?;
    debug!("{} Pods matched {}", pod_list.items.len(), selector);

    Ok(pod_list.items)
}

/// Find the database container of the cluster's primary instance Pod.
///
/// Exactly one Pod must carry the primary labels; there is no fallback to
/// replicas.
#[instrument(skip(client))]
pub async fn find_primary_pod(
    client: &Client,
    namespace: &str,
    cluster: &str,
) -> Result<PodReference> {
    let mut pods =
        list_pods_by_label(client, namespace, &primary_instance_labels(cluster)).await?;

    if pods.len() != 1 {
        return Err(PgoError::PrimaryPodNotFound {
            cluster: cluster.to_string(),
            matched: pods.len(),
        });
    }

    let pod = pods.remove(0);
    Ok(PodReference {
        namespace: pod.namespace().unwrap_or_else(|| namespace.to_string()),
        name: pod.name_any(),
        container: CONTAINER_DATABASE.to_string(),
    })
}
