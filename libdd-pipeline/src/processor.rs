// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::consumer::{LogsConsumer, TracesConsumer};
use async_trait::async_trait;
use libdd_filter::{FilterConfig, MatchError, Matcher};
use libdd_pdata::{Batch, LogRecord, Logs, RecordItem, Resource, Span, Traces};
use std::sync::Arc;
use tracing::debug;

/// Resource attribute naming the service that emitted a resource group.
pub const SERVICE_NAME_KEY: &str = "service.name";

/// Name matched against `services`: the `service.name` resource attribute when it is a string,
/// empty otherwise.
pub fn resource_name(resource: &Resource) -> &str {
    resource
        .attributes()
        .get(SERVICE_NAME_KEY)
        .and_then(|value| value.as_str())
        .unwrap_or_default()
}

/// Include/exclude decision for records of kind `R`.
#[derive(Debug, Clone)]
pub struct RecordFilter<R> {
    include: Option<Matcher<R>>,
    exclude: Option<Matcher<R>>,
}

impl<R: RecordItem> RecordFilter<R> {
    pub fn new(config: &FilterConfig) -> Result<Self, MatchError> {
        let include = config.include.as_ref().map(Matcher::new).transpose()?;
        let exclude = config.exclude.as_ref().map(Matcher::new).transpose()?;
        Ok(RecordFilter { include, exclude })
    }

    /// A record is kept when it matches `include` (if set) and does not match `exclude` (if
    /// set).
    pub fn keep(&self, record: &R, resource_name: &str) -> bool {
        self.include
            .as_ref()
            .is_none_or(|include| include.matches(record, resource_name))
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.matches(record, resource_name))
    }

    /// Drops the records that are not kept, in place. Resource groups left without records are
    /// dropped too, as are uninitialized resource groups and records.
    ///
    /// Returns the number of initialized records dropped.
    pub fn filter(&self, batch: &mut Batch<R>) -> usize {
        let mut dropped = 0;
        let groups = batch.resource_groups_mut();
        for group in groups.initialized_mut() {
            let (resource, records) = group.split_mut();
            let name = resource_name(resource);
            records.retain(|record| {
                let keep = self.keep(record, name);
                if !keep {
                    dropped += 1;
                }
                keep
            });
        }
        groups.retain(|group| !group.records().is_empty());
        dropped
    }
}

/// Filter stage of a logs pipeline.
pub struct FilterLogsProcessor {
    filter: RecordFilter<LogRecord>,
    next: Arc<dyn LogsConsumer>,
}

impl FilterLogsProcessor {
    pub fn new(config: &FilterConfig, next: Arc<dyn LogsConsumer>) -> Result<Self, MatchError> {
        Ok(FilterLogsProcessor {
            filter: RecordFilter::new(config)?,
            next,
        })
    }
}

#[async_trait]
impl LogsConsumer for FilterLogsProcessor {
    async fn consume_logs(&self, mut logs: Logs) -> anyhow::Result<()> {
        let dropped = self.filter.filter(&mut logs);
        debug!(dropped, remaining = logs.log_record_count(), "filtered log records");
        if logs.is_empty() {
            return Ok(());
        }
        self.next.consume_logs(logs).await
    }
}

/// Filter stage of a traces pipeline.
pub struct FilterSpansProcessor {
    filter: RecordFilter<Span>,
    next: Arc<dyn TracesConsumer>,
}

impl FilterSpansProcessor {
    pub fn new(config: &FilterConfig, next: Arc<dyn TracesConsumer>) -> Result<Self, MatchError> {
        Ok(FilterSpansProcessor {
            filter: RecordFilter::new(config)?,
            next,
        })
    }
}

#[async_trait]
impl TracesConsumer for FilterSpansProcessor {
    async fn consume_traces(&self, mut traces: Traces) -> anyhow::Result<()> {
        let dropped = self.filter.filter(&mut traces);
        debug!(dropped, remaining = traces.span_count(), "filtered spans");
        if traces.is_empty() {
            return Ok(());
        }
        self.next.consume_traces(traces).await
    }
}
