// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `create` subcommands

use crate::error::Result;
use crate::kubernetes::{create_postgres_cluster, ClusterContext};
use crate::types::{generate_postgres_cluster, validate_cluster_name};
use clap::{Args, Subcommand};
use std::io::Write;

#[derive(Subcommand, Debug, Clone)]
pub enum CreateCommand {
    /// Create PostgresCluster with a given name
    #[command(name = "postgrescluster", long_about = "Create basic PostgresCluster with a given name.")]
    PostgresCluster(CreatePostgresClusterArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CreatePostgresClusterArgs {
    /// Name of the PostgresCluster
    pub name: String,
}

impl CreateCommand {
    /// Check the arguments before any connection is made
    pub fn validate(&self) -> Result<()> {
        match self {
            CreateCommand::PostgresCluster(args) => validate_cluster_name(&args.name),
        }
    }

    pub async fn run<W: Write>(&self, context: &ClusterContext, out: &mut W) -> Result<()> {
        match self {
            CreateCommand::PostgresCluster(args) => {
                create_postgrescluster(context, args, out).await
            }
        }
    }
}

/// Submit a basic PostgresCluster and report the created name.
pub async fn create_postgrescluster<W: Write>(
    context: &ClusterContext,
    args: &CreatePostgresClusterArgs,
    out: &mut W,
) -> Result<()> {
    let cluster = generate_postgres_cluster(&args.name)?;
    let name = create_postgres_cluster(&context.client, &context.namespace, &cluster).await?;

    writeln!(out, "postgresclusters/{} created", name)?;
    Ok(())
}
