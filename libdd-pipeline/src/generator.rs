// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::consumer::LogsConsumer;
use libdd_pdata::{AttributeMap, AttributeValue, Logs, RecordItem};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Time between two batches.
    pub interval: Duration,
    pub body: String,
    pub attributes: AttributeMap,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            interval: Duration::from_secs(1),
            body: "My example log".to_string(),
            attributes: [("pod", AttributeValue::from("pod_name"))]
                .into_iter()
                .collect(),
        }
    }
}

/// Feeds a logs pipeline with a fixed log record at a fixed interval.
#[derive(Debug, Clone, Default)]
pub struct LogsGenerator {
    config: GeneratorConfig,
}

impl LogsGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        LogsGenerator { config }
    }

    /// Builds one batch: a single resource group holding a single record.
    pub fn generate(&self) -> Logs {
        let mut logs = Logs::new();
        let resources = logs.resource_logs_mut();
        resources.resize(1);
        if let Ok(slot) = resources.at_mut(0) {
            let records = slot.init_empty().logs_mut();
            records.resize(1);
            if let Ok(slot) = records.at_mut(0) {
                let record = slot.init_empty();
                record.set_body(self.config.body.as_str());
                for (key, value) in &self.config.attributes {
                    record.attributes_mut().upsert(key.as_str(), value.clone());
                }
            }
        }
        logs
    }

    /// Sends a batch to `consumer` on every tick until `token` is cancelled. The first batch is
    /// sent right away. Consumer errors are logged and do not stop the generator.
    pub async fn run(&self, consumer: &dyn LogsConsumer, token: CancellationToken) {
        let mut interval = tokio::time::interval(self.config.interval.max(MIN_INTERVAL));
        debug!(interval = ?self.config.interval, "Starting logs generator");
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Stopping logs generator");
                    return;
                }
                _ = interval.tick() => {
                    if let Err(e) = consumer.consume_logs(self.generate()).await {
                        error!("Error sending generated logs: {e:#}");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_generate() {
        let logs = LogsGenerator::default().generate();
        assert_eq!(logs.log_record_count(), 1);

        let group = logs.resource_logs().at(0).unwrap().get().unwrap();
        assert!(group.resource().attributes().is_empty());
        let record = group.logs().at(0).unwrap().get().unwrap();
        assert_eq!(record.body(), Some(&AttributeValue::from("My example log")));
        assert_eq!(
            record.attributes().get("pod"),
            Some(&AttributeValue::from("pod_name"))
        );
    }

    #[derive(Default)]
    struct Counter {
        records: AtomicUsize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LogsConsumer for Counter {
        async fn consume_logs(&self, logs: Logs) -> anyhow::Result<()> {
            self.records
                .fetch_add(logs.log_record_count(), Ordering::SeqCst);
            // Every other batch fails; the generator must keep going.
            if self.calls.fetch_add(1, Ordering::SeqCst) % 2 == 1 {
                anyhow::bail!("downstream unavailable");
            }
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_until_cancelled() {
        let generator = LogsGenerator::new(GeneratorConfig {
            interval: Duration::from_millis(100),
            ..Default::default()
        });
        let counter = Counter::default();
        let token = CancellationToken::new();

        let stop = token.clone();
        let run = generator.run(&counter, token);
        let cancel = async move {
            tokio::time::sleep(Duration::from_millis(250)).await;
            stop.cancel();
        };
        tokio::join!(run, cancel);

        // Ticks at 0ms, 100ms and 200ms.
        assert_eq!(counter.records.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let counter = Counter::default();
        let token = CancellationToken::new();
        token.cancel();
        LogsGenerator::default().run(&counter, token).await;
        assert!(counter.calls.load(Ordering::SeqCst) <= 1);
    }
}
