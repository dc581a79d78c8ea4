// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// PostgresCluster custom resource coordinates
pub mod postgrescluster {
    pub const GROUP: &str = "postgres-operator.crunchydata.com";
    pub const VERSION: &str = "v1beta1";
    pub const KIND: &str = "PostgresCluster";
    pub const PLURAL: &str = "postgresclusters";
}

/// Pod label keys and values set by the operator
pub mod labels {
    pub const CLUSTER: &str = "postgres-operator.crunchydata.com/cluster";
    pub const DATA: &str = "postgres-operator.crunchydata.com/data";
    pub const ROLE: &str = "postgres-operator.crunchydata.com/role";

    pub const DATA_POSTGRES: &str = "postgres";
    /// Patroni marks the current leader with this role
    pub const ROLE_PRIMARY: &str = "master";

    /// Label selector matching the primary instance Pod of a cluster.
    ///
    /// Must stay in sync with the operator's labeling convention, otherwise
    /// lookups silently match nothing.
    pub fn primary_instance_labels(cluster: &str) -> String {
        format!(
            "{}={},{}={},{}={}",
            CLUSTER, cluster, DATA, DATA_POSTGRES, ROLE, ROLE_PRIMARY
        )
    }
}

/// Name of the container running Postgres in every instance Pod
pub const CONTAINER_DATABASE: &str = "database";
