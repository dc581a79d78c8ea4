// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::postgrescluster::{GROUP, KIND, PLURAL, VERSION};
use crate::error::{PgoError, Result};
use kube::api::{ApiResource, DynamicObject, GroupVersionKind};

/// Basic PostgresCluster: one instance, one pgBackRest repo, 1Gi volumes.
const TEMPLATE: &str = include_str!("postgrescluster.yaml");

/// The dynamic type used to address PostgresCluster objects
pub fn api_resource() -> ApiResource {
    ApiResource::from_gvk_with_plural(&GroupVersionKind::gvk(GROUP, VERSION, KIND), PLURAL)
}

/// Build an unstructured PostgresCluster with the given name and the
/// template defaults.
pub fn generate_postgres_cluster(name: &str) -> Result<DynamicObject> {
    parse_cluster(TEMPLATE, name)
}

/// Reject names the API server would never accept as a PostgresCluster name.
pub fn validate_cluster_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PgoError::ValidationError(
            "PostgresCluster name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn parse_cluster(template: &str, name: &str) -> Result<DynamicObject> {
    validate_cluster_name(name)?;

    let mut cluster: DynamicObject = serde_yaml::from_str(template)?;
    cluster.metadata.name = Some(name.to_string());

    Ok(cluster)
}
