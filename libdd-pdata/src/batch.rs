// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{LogRecord, RecordItem, Resource, ResourceGroup, Sequence, Span};
use libdd_pdata_protobuf::pb::{logs::v1 as logs_pb, trace::v1 as trace_pb};

/// A batch of records grouped by the resource that emitted them. This is the value that flows
/// through a pipeline.
///
/// The batch owns all of its storage. Resource groups and records are reached through borrowed
/// views ([`Batch::resource_groups_mut`], [`Sequence::at_mut`], ...), so a stage that mutates a
/// view mutates the batch itself. Only one stage can hold a batch at a time; handing the same data
/// to several independent consumers requires a [`Clone`] per consumer, which is a deep copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<R> {
    resource_groups: Sequence<ResourceGroup<R>>,
}

/// Batch of log records.
pub type Logs = Batch<LogRecord>;
/// Batch of spans.
pub type Traces = Batch<Span>;

impl<R> Default for Batch<R> {
    fn default() -> Self {
        Batch {
            resource_groups: Sequence::new(),
        }
    }
}

impl<R: RecordItem> Batch<R> {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resource_groups(&self) -> &Sequence<ResourceGroup<R>> {
        &self.resource_groups
    }

    pub fn resource_groups_mut(&mut self) -> &mut Sequence<ResourceGroup<R>> {
        &mut self.resource_groups
    }

    /// Total number of records in the initialized resource groups. Uninitialized groups count as
    /// zero.
    pub fn record_count(&self) -> usize {
        self.resource_groups
            .initialized()
            .map(|group| group.records().len())
            .sum()
    }

    /// True when the batch holds no initialized record, i.e. nothing to export. Uninitialized
    /// record slots still count in [`Batch::record_count`].
    pub fn is_empty(&self) -> bool {
        self.resource_groups
            .initialized()
            .all(|group| group.records().initialized().next().is_none())
    }

    fn from_groups<G>(groups: Vec<G>, split: impl Fn(G) -> (Resource, Vec<R>)) -> Self {
        Batch {
            resource_groups: groups
                .into_iter()
                .map(|group| {
                    let (resource, records) = split(group);
                    ResourceGroup::from_parts(resource, records.into_iter().collect())
                })
                .collect(),
        }
    }

    fn into_groups<G>(self, join: impl Fn(Resource, Vec<R>) -> G) -> Vec<G> {
        self.resource_groups
            .into_initialized()
            .map(|group| {
                let (resource, records) = group.into_parts();
                join(resource, records.into_initialized().collect())
            })
            .collect()
    }
}

impl Logs {
    /// Builds a batch from its protobuf representation. Strings and buffers are moved, not
    /// copied.
    pub fn from_proto(orig: Vec<logs_pb::ResourceLogs>) -> Self {
        Self::from_groups(orig, |group| {
            (
                Resource::from_proto(group.resource),
                group.log_records.into_iter().map(LogRecord::from).collect(),
            )
        })
    }

    /// Converts the batch to its protobuf representation. Uninitialized resource groups and
    /// records carry no data and are left out.
    pub fn into_proto(self) -> Vec<logs_pb::ResourceLogs> {
        self.into_groups(|resource, records| logs_pb::ResourceLogs {
            resource: resource.into_proto(),
            log_records: records.into_iter().map(logs_pb::LogRecord::from).collect(),
        })
    }

    pub fn resource_logs(&self) -> &Sequence<ResourceGroup<LogRecord>> {
        &self.resource_groups
    }

    pub fn resource_logs_mut(&mut self) -> &mut Sequence<ResourceGroup<LogRecord>> {
        &mut self.resource_groups
    }

    pub fn log_record_count(&self) -> usize {
        self.record_count()
    }
}

impl From<logs_pb::LogsData> for Logs {
    fn from(data: logs_pb::LogsData) -> Self {
        Logs::from_proto(data.resource_logs)
    }
}

impl From<Logs> for logs_pb::LogsData {
    fn from(logs: Logs) -> Self {
        logs_pb::LogsData {
            resource_logs: logs.into_proto(),
        }
    }
}

impl Traces {
    /// Builds a batch from its protobuf representation. Strings and buffers are moved, not
    /// copied.
    pub fn from_proto(orig: Vec<trace_pb::ResourceSpans>) -> Self {
        Self::from_groups(orig, |group| {
            (
                Resource::from_proto(group.resource),
                group.spans.into_iter().map(Span::from).collect(),
            )
        })
    }

    /// Converts the batch to its protobuf representation. Uninitialized resource groups and
    /// spans carry no data and are left out.
    pub fn into_proto(self) -> Vec<trace_pb::ResourceSpans> {
        self.into_groups(|resource, spans| trace_pb::ResourceSpans {
            resource: resource.into_proto(),
            spans: spans.into_iter().map(trace_pb::Span::from).collect(),
        })
    }

    pub fn resource_spans(&self) -> &Sequence<ResourceGroup<Span>> {
        &self.resource_groups
    }

    pub fn resource_spans_mut(&mut self) -> &mut Sequence<ResourceGroup<Span>> {
        &mut self.resource_groups
    }

    pub fn span_count(&self) -> usize {
        self.record_count()
    }
}

impl From<trace_pb::TracesData> for Traces {
    fn from(data: trace_pb::TracesData) -> Self {
        Traces::from_proto(data.resource_spans)
    }
}

impl From<Traces> for trace_pb::TracesData {
    fn from(traces: Traces) -> Self {
        trace_pb::TracesData {
            resource_spans: traces.into_proto(),
        }
    }
}
