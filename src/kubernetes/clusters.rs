// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! PostgresCluster custom resource operations

use crate::error::Result;
use crate::types::postgrescluster::api_resource;
use kube::{
    api::{DynamicObject, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{info, instrument};

/// Submit a PostgresCluster to the API server and return the name the
/// server echoed back.
#[instrument(skip(client, cluster), fields(cluster = %cluster.name_any()))]
pub async fn create_postgres_cluster(
    client: &Client,
    namespace: &str,
    cluster: &DynamicObject,
) -> Result<String> {
    let clusters: Api<DynamicObject> =
        Api::namespaced_with(client.clone(), namespace, &api_resource());

    let created = clusters.create(&PostParams::default(), cluster).await?;
    info!(
        "PostgresCluster {}/{} created",
        namespace,
        created.name_any()
    );

    Ok(created.name_any())
}
