// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use libdd_pdata::{Logs, Traces};

/// Next stage of a logs pipeline. The batch is moved into the stage: a stage handing the same data
/// to several consumers clones it once per consumer.
#[async_trait]
pub trait LogsConsumer: Send + Sync {
    async fn consume_logs(&self, logs: Logs) -> anyhow::Result<()>;
}

/// Next stage of a traces pipeline.
#[async_trait]
pub trait TracesConsumer: Send + Sync {
    async fn consume_traces(&self, traces: Traces) -> anyhow::Result<()>;
}
