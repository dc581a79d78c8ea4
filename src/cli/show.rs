// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `show` subcommands

use crate::error::Result;
use crate::kubernetes::{find_primary_pod, ClusterContext, ExecutionResult, Executor, PodReference};
use crate::types::validate_cluster_name;
use clap::{Args, Subcommand, ValueEnum};
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

const SHOW_BACKUP_EXAMPLES: &str = "Examples:
  kubectl pgo show backup hippo
  kubectl pgo show backup hippo --output=json
  kubectl pgo show backup hippo --repoName=repo1";

#[derive(Subcommand, Debug, Clone)]
pub enum ShowCommand {
    /// Show backup information for a PostgresCluster
    #[command(
        visible_alias = "backups",
        long_about = "Show backup information for a PostgresCluster from 'pgbackrest info' command.",
        after_help = SHOW_BACKUP_EXAMPLES
    )]
    Backup(ShowBackupArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ShowBackupArgs {
    /// Name of the PostgresCluster
    pub cluster: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = BackupOutput::Text)]
    pub output: BackupOutput,

    /// Set the repository name for the command. example: repo1
    #[arg(long = "repoName", value_name = "REPO")]
    pub repo_name: Option<String>,
}

/// Output formats understood by `pgbackrest info --output`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutput {
    Text,
    Json,
}

impl fmt::Display for BackupOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackupOutput::Text => write!(f, "text"),
            BackupOutput::Json => write!(f, "json"),
        }
    }
}

impl ShowCommand {
    /// Check the arguments before any connection is made
    pub fn validate(&self) -> Result<()> {
        match self {
            ShowCommand::Backup(args) => validate_cluster_name(&args.cluster),
        }
    }

    /// Run the command in the database container of the cluster's primary,
    /// using `executor_for` to reach it.
    pub async fn run<X, F, W>(&self, context: &ClusterContext, executor_for: F, out: &mut W) -> Result<()>
    where
        X: Executor + Sync,
        F: FnOnce(PodReference) -> X,
        W: Write,
    {
        match self {
            ShowCommand::Backup(args) => show_backup(context, args, executor_for, out).await,
        }
    }
}

/// Print `pgbackrest info` as seen from the primary instance.
pub async fn show_backup<X, F, W>(
    context: &ClusterContext,
    args: &ShowBackupArgs,
    executor_for: F,
    out: &mut W,
) -> Result<()>
where
    X: Executor + Sync,
    F: FnOnce(PodReference) -> X,
    W: Write,
{
    let pod = find_primary_pod(&context.client, &context.namespace, &args.cluster).await?;
    debug!("Using primary instance Pod {}/{}", pod.namespace, pod.name);

    let executor = executor_for(pod);
    let result = pgbackrest_info(&executor, args.output, args.repo_name.as_deref()).await?;

    // A failed info run still has something worth showing
    if !result.exit.is_success() {
        info!(
            "pgbackrest info exited with code {:?}: {}",
            result.exit.code,
            result.exit.message.as_deref().unwrap_or_default()
        );
    }

    write_backup_info(&result, out)?;
    Ok(())
}

/// Strip the `repo` prefix, leaving validation of the rest to pgBackRest.
pub fn repo_number(repo_name: &str) -> &str {
    repo_name.strip_prefix("repo").unwrap_or(repo_name)
}

/// The shell command line for `pgbackrest info`.
pub fn pgbackrest_info_command(output: BackupOutput, repo_name: Option<&str>) -> String {
    let mut command = format!("pgbackrest info --output={}", output);

    if let Some(repo) = repo_name.map(repo_number).filter(|r| !r.is_empty()) {
        command.push_str(" --repo=");
        command.push_str(repo);
    }

    command
}

/// Run `pgbackrest info` through a shell in the target container.
pub async fn pgbackrest_info<X>(
    executor: &X,
    output: BackupOutput,
    repo_name: Option<&str>,
) -> Result<ExecutionResult>
where
    X: Executor + Sync,
{
    let command = pgbackrest_info_command(output, repo_name);
    executor.capture(&["bash", "-ceu", "--", &command]).await
}

fn write_backup_info<W: Write>(result: &ExecutionResult, out: &mut W) -> std::io::Result<()> {
    write!(out, "{}", result.stdout)?;
    if !result.stderr.is_empty() {
        write!(out, "\nError returned: {}\n", result.stderr)?;
    }
    out.flush()
}
