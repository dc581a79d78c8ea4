// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PgoError {
    #[error("Failed to load Kubernetes configuration: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    ValidationError(String),

    #[error("Failed to parse PostgresCluster template: {0}")]
    TemplateError(#[from] serde_yaml::Error),

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    /// Zero or more than one Pod carried the primary instance labels.
    #[error("Primary instance Pod not found for cluster {cluster} (matched {matched})")]
    PrimaryPodNotFound { cluster: String, matched: usize },

    #[error("Pod exec failed: {0}")]
    TransportError(String),

    #[error("Failed to write output: {0}")]
    OutputError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PgoError>;
