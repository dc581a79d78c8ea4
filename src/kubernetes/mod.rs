// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, PostgresCluster submission, Pod lookup and exec.

pub mod client;
pub mod clusters;
pub mod exec;
pub mod pods;

pub use client::{create_client, ClusterContext};
pub use clusters::create_postgres_cluster;
pub use exec::{ExecutionResult, Executor, ExitStatus, PodExecutor};
pub use pods::{find_primary_pod, list_pods_by_label, PodReference};
