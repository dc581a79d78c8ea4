// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Running commands inside a Pod container through the exec subresource

use crate::error::{PgoError, Result};
use crate::kubernetes::pods::PodReference;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Status;
use kube::{api::AttachParams, Api, Client};
use std::future::Future;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

/// How the remote process ended, as reported by the API server.
///
/// A non-zero exit is data for the caller to show, not a failure of the
/// exec itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitStatus {
    /// Exit code, when the server reported one
    pub code: Option<i32>,
    pub message: Option<String>,
}

impl ExitStatus {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Interpret the status sent on the exec error channel.
    ///
    /// Success carries no details; a non-zero exit is a Failure with reason
    /// `NonZeroExitCode` and an `ExitCode` cause holding the code.
    pub fn from_status(status: Option<Status>) -> Self {
        let Some(status) = status else {
            return Self::default();
        };

        if status.status.as_deref() == Some("Success") {
            return Self::success();
        }

        let code = status
            .details
            .as_ref()
            .and_then(|d| d.causes.as_ref())
            .and_then(|causes| {
                causes
                    .iter()
                    .find(|c| c.reason.as_deref() == Some("ExitCode"))
            })
            .and_then(|c| c.message.as_deref())
            .and_then(|m| m.trim().parse().ok());

        Self {
            code,
            message: status.message,
        }
    }
}

/// Output captured from a remote command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit: ExitStatus,
}

/// Runs a command in one specific container.
pub trait Executor {
    /// Run `command`, feeding `stdin` when given and copying the remote
    /// output into `stdout` and `stderr` until the process exits.
    fn exec<I, O, E>(
        &self,
        stdin: Option<I>,
        stdout: &mut O,
        stderr: &mut E,
        command: &[&str],
    ) -> impl Future<Output = Result<ExitStatus>> + Send
    where
        I: AsyncRead + Unpin + Send,
        O: AsyncWrite + Unpin + Send,
        E: AsyncWrite + Unpin + Send;

    /// Run `command` without input and capture its output as text.
    fn capture(&self, command: &[&str]) -> impl Future<Output = Result<ExecutionResult>> + Send
    where
        Self: Sync,
    {
        async move {
            let mut stdout = Vec::new();
            let mut stderr = Vec::new();
            let exit = self
                .exec(None::<tokio::io::Empty>, &mut stdout, &mut stderr, command)
                .await?;

            Ok(ExecutionResult {
                stdout: String::from_utf8_lossy(&stdout).into_owned(),
                stderr: String::from_utf8_lossy(&stderr).into_owned(),
                exit,
            })
        }
    }
}

/// [`Executor`] backed by the Kubernetes exec subresource
#[derive(Clone)]
pub struct PodExecutor {
    client: Client,
    pod: PodReference,
}

impl PodExecutor {
    pub fn new(client: Client, pod: PodReference) -> Self {
        Self { client, pod }
    }
}

impl Executor for PodExecutor {
    #[instrument(skip_all, fields(pod = %self.pod.name, container = %self.pod.container))]
    async fn exec<I, O, E>(
        &self,
        stdin: Option<I>,
        stdout: &mut O,
        stderr: &mut E,
        command: &[&str],
    ) -> Result<ExitStatus>
    where
        I: AsyncRead + Unpin + Send,
        O: AsyncWrite + Unpin + Send,
        E: AsyncWrite + Unpin + Send,
    {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), &self.pod.namespace);
        let params = AttachParams::default()
            .container(self.pod.container.clone())
            .stdin(stdin.is_some())
            .stdout(true)
            .stderr(true);

        debug!("Executing {:?}", command);
        let mut process = pods
            .exec(&self.pod.name, command.to_vec(), &params)
            .await
            .map_err(|e| {
                PgoError::TransportError(format!(
                    "Failed to exec in Pod {}/{}: {}",
                    self.pod.namespace, self.pod.name, e
                ))
            })?;

        let status = process.take_status();
        let remote_stdin = process.stdin();
        let remote_stdout = process.stdout();
        let remote_stderr = process.stderr();

        // All three streams move at once so a full stderr pipe cannot stall stdout
        tokio::try_join!(
            forward_stdin(stdin, remote_stdin),
            relay(remote_stdout, stdout),
            relay(remote_stderr, stderr),
        )
        .map_err(|e| PgoError::TransportError(format!("Exec stream failed: {}", e)))?;

        let exit = match status {
            Some(status) => ExitStatus::from_status(status.await),
            None => ExitStatus::default(),
        };

        process
            .join()
            .await
            .map_err(|e| PgoError::TransportError(format!("Exec stream failed: {}", e)))?;

        debug!("Remote command finished: {:?}", exit);
        Ok(exit)
    }
}

async fn forward_stdin<I, W>(source: Option<I>, remote: Option<W>) -> std::io::Result<()>
where
    I: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if let (Some(mut source), Some(mut remote)) = (source, remote) {
        tokio::io::copy(&mut source, &mut remote).await?;
        // EOF for the remote process
        remote.shutdown().await?;
    }
    Ok(())
}

async fn relay<R, W>(remote: Option<R>, sink: &mut W) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if let Some(mut remote) = remote {
        tokio::io::copy(&mut remote, sink).await?;
        sink.flush().await?;
    }
    Ok(())
}
