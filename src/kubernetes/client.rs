// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from kubeconfig flags and ambient configuration

use crate::config::Config;
use crate::error::{PgoError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use tracing::{debug, instrument};

/// A connected client together with the namespace commands operate in
#[derive(Clone)]
pub struct ClusterContext {
    pub client: Client,
    pub namespace: String,
}

/// Create a Kubernetes client and resolve the target namespace.
///
/// An explicit `--kubeconfig` path is read directly. Otherwise the usual
/// inference applies (`KUBECONFIG`, `~/.kube/config`, in-cluster), with
/// `--context` selecting a non-current context.
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<ClusterContext> {
    let kube_config = load_kube_config(config).await?;
    let namespace = config.resolve_namespace(&kube_config.default_namespace);

    debug!(
        "Using cluster {} in namespace {}",
        kube_config.cluster_url, namespace
    );

    let client = Client::try_from(kube_config)
        .map_err(|e| PgoError::ConfigError(format!("Failed to create client: {}", e)))?;

    Ok(ClusterContext { client, namespace })
}

async fn load_kube_config(config: &Config) -> Result<KConfig> {
    let options = KubeConfigOptions {
        context: config.context.clone(),
        ..Default::default()
    };

    match (&config.kubeconfig, &config.context) {
        (Some(path), _) => {
            let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                PgoError::ConfigError(format!(
                    "Failed to read kubeconfig {}: {}",
                    path.display(),
                    e
                ))
            })?;
            KConfig::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(|e| PgoError::ConfigError(format!("Failed to create config: {}", e)))
        }
        (None, Some(context)) => KConfig::from_kubeconfig(&options).await.map_err(|e| {
            PgoError::ConfigError(format!(
                "Failed to load context {} from kubeconfig: {}",
                context, e
            ))
        }),
        (None, None) => KConfig::infer()
            .await
            .map_err(|e| PgoError::ConfigError(format!("Failed to infer config: {}", e))),
    }
}
