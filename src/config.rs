// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::Args;
use std::path::PathBuf;

/// Kubernetes connection settings shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    /// Path to the kubeconfig file to use
    #[arg(long, global = true, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// The name of the kubeconfig context to use
    #[arg(long, global = true, value_name = "CONTEXT")]
    pub context: Option<String>,

    /// If present, the namespace scope for this request
    #[arg(short, long, global = true, value_name = "NAMESPACE")]
    pub namespace: Option<String>,
}

impl Config {
    /// Pick the namespace to work in: the explicit flag wins over the
    /// namespace of the kubeconfig context.
    pub fn resolve_namespace(&self, context_namespace: &str) -> String {
        self.namespace
            .clone()
            .unwrap_or_else(|| context_namespace.to_string())
    }
}
