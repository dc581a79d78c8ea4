// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod postgrescluster;

pub use postgrescluster::{api_resource, generate_postgres_cluster, validate_cluster_name};
