// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::consumer::LogsConsumer;
use async_trait::async_trait;
use libdd_pdata::Logs;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, error};

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Sends a batch to its destination and returns the number of records that could not be sent.
pub type PushLogs = Box<dyn Fn(Logs) -> BoxFuture<anyhow::Result<usize>> + Send + Sync>;

/// Releases the resources held by an exporter.
pub type Shutdown = Box<dyn Fn() -> BoxFuture<anyhow::Result<()>> + Send + Sync>;

#[derive(Default)]
pub struct ExporterOptions {
    shutdown: Option<Shutdown>,
}

impl ExporterOptions {
    pub fn with_shutdown(mut self, shutdown: Shutdown) -> Self {
        self.shutdown = Some(shutdown);
        self
    }
}

/// Last stage of a logs pipeline, built around a push function.
pub struct LogsExporter {
    name: String,
    push: PushLogs,
    shutdown: Option<Shutdown>,
}

impl LogsExporter {
    pub fn new(
        name: impl Into<String>,
        push: PushLogs,
        options: ExporterOptions,
    ) -> anyhow::Result<Self> {
        let name = name.into();
        anyhow::ensure!(!name.is_empty(), "exporter name must not be empty");
        Ok(LogsExporter {
            name,
            push,
            shutdown: options.shutdown,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the shutdown hook, if any.
    pub async fn shutdown(&self) -> anyhow::Result<()> {
        match &self.shutdown {
            Some(shutdown) => shutdown().await,
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LogsConsumer for LogsExporter {
    async fn consume_logs(&self, logs: Logs) -> anyhow::Result<()> {
        let count = logs.log_record_count();
        match (self.push)(logs).await {
            Ok(dropped) => {
                debug!(exporter = %self.name, count, dropped, "exported log records");
                Ok(())
            }
            Err(e) => {
                error!(exporter = %self.name, "Error exporting {count} log records: {e:#}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_push(received: Arc<AtomicUsize>) -> PushLogs {
        Box::new(move |logs: Logs| -> BoxFuture<anyhow::Result<usize>> {
            let received = received.clone();
            Box::pin(async move {
                received.fetch_add(logs.log_record_count(), Ordering::SeqCst);
                anyhow::Ok(0usize)
            })
        })
    }

    fn one_log() -> Logs {
        let mut logs = Logs::new();
        logs.resource_logs_mut()
            .append_empty()
            .logs_mut()
            .append_empty()
            .set_body("My example log");
        logs
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let received = Arc::new(AtomicUsize::new(0));
        let err = LogsExporter::new("", counting_push(received), ExporterOptions::default())
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "exporter name must not be empty");
    }

    #[tokio::test]
    async fn test_push_receives_batches() {
        let received = Arc::new(AtomicUsize::new(0));
        let exporter = LogsExporter::new(
            "logging",
            counting_push(received.clone()),
            ExporterOptions::default(),
        )
        .unwrap();

        exporter.consume_logs(one_log()).await.unwrap();
        exporter.consume_logs(one_log()).await.unwrap();
        assert_eq!(received.load(Ordering::SeqCst), 2);
        assert_eq!(exporter.name(), "logging");
        exporter.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_push_error_is_returned() {
        let exporter = LogsExporter::new(
            "failing",
            Box::new(|_: Logs| -> BoxFuture<anyhow::Result<usize>> {
                Box::pin(async { Err::<usize, _>(anyhow::anyhow!("connection refused")) })
            }),
            ExporterOptions::default(),
        )
        .unwrap();

        let err = exporter.consume_logs(one_log()).await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn test_shutdown_hook() {
        let calls = Arc::new(AtomicUsize::new(0));
        let hook_calls = calls.clone();
        let exporter = LogsExporter::new(
            "logging",
            counting_push(Arc::new(AtomicUsize::new(0))),
            ExporterOptions::default().with_shutdown(Box::new(
                move || -> BoxFuture<anyhow::Result<()>> {
                    let calls = hook_calls.clone();
                    Box::pin(async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        anyhow::Ok(())
                    })
                },
            )),
        )
        .unwrap();

        exporter.shutdown().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
