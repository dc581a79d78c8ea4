// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface of the plugin

pub mod create;
pub mod show;

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{create_client, ClusterContext, PodExecutor};
use clap::{Parser, Subcommand};
use std::io::Write;

pub use create::CreateCommand;
pub use show::ShowCommand;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "kubectl-pgo",
    version,
    about = "pgo is a kubectl plugin for PostgresClusters managed by the Postgres Operator"
)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a resource
    #[command(subcommand)]
    Create(CreateCommand),
    /// Show PostgresCluster details
    #[command(
        subcommand,
        long_about = "Show allows you to display particular details related to the PostgresCluster"
    )]
    Show(ShowCommand),
}

impl Cli {
    /// Connect with the configured credentials and run the selected command,
    /// writing its output to `out`.
    pub async fn run<W: Write>(self, out: &mut W) -> Result<()> {
        self.command.validate()?;

        let context = create_client(&self.config).await?;
        self.command.run(&context, out).await
    }
}

impl Commands {
    pub fn validate(&self) -> Result<()> {
        match self {
            Commands::Create(command) => command.validate(),
            Commands::Show(command) => command.validate(),
        }
    }

    /// Run against an already connected cluster. Remote commands go through
    /// the exec subresource of the resolved Pod.
    pub async fn run<W: Write>(&self, context: &ClusterContext, out: &mut W) -> Result<()> {
        match self {
            Commands::Create(command) => command.run(context, out).await,
            Commands::Show(command) => {
                let client = context.client.clone();
                command
                    .run(context, |pod| PodExecutor::new(client, pod), out)
                    .await
            }
        }
    }
}
