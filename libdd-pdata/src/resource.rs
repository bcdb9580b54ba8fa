// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{AttributeMap, LogRecord, RecordItem, Sequence, Span};
use libdd_pdata_protobuf::pb::resource::v1 as pb;

/// The entity (process, host, service) that emitted a group of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    attributes: AttributeMap,
    dropped_attributes_count: u32,
    // Set when read from a message carrying the field, even empty.
    present: bool,
}

impl Resource {
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }

    pub fn dropped_attributes_count(&self) -> u32 {
        self.dropped_attributes_count
    }

    pub fn set_dropped_attributes_count(&mut self, value: u32) {
        self.dropped_attributes_count = value;
    }

    fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.dropped_attributes_count == 0
    }

    pub(crate) fn from_proto(orig: Option<pb::Resource>) -> Self {
        match orig {
            Some(orig) => Resource {
                attributes: AttributeMap::from_proto(orig.attributes),
                dropped_attributes_count: orig.dropped_attributes_count,
                present: true,
            },
            None => Resource::default(),
        }
    }

    /// An empty resource is emitted as an unset field, unless it was read from a set one.
    pub(crate) fn into_proto(self) -> Option<pb::Resource> {
        if self.is_empty() && !self.present {
            return None;
        }
        Some(pb::Resource {
            attributes: self.attributes.into_proto(),
            dropped_attributes_count: self.dropped_attributes_count,
        })
    }
}

/// A resource and the ordered records it emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceGroup<R> {
    resource: Resource,
    records: Sequence<R>,
}

pub type ResourceLogs = ResourceGroup<LogRecord>;
pub type ResourceSpans = ResourceGroup<Span>;

impl<R> Default for ResourceGroup<R> {
    fn default() -> Self {
        ResourceGroup {
            resource: Resource::default(),
            records: Sequence::new(),
        }
    }
}

impl<R: RecordItem> ResourceGroup<R> {
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }

    pub fn records(&self) -> &Sequence<R> {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Sequence<R> {
        &mut self.records
    }

    /// Borrows the resource and the records at the same time, e.g. to edit records based on
    /// resource attributes.
    pub fn split_mut(&mut self) -> (&mut Resource, &mut Sequence<R>) {
        (&mut self.resource, &mut self.records)
    }

    pub(crate) fn from_parts(resource: Resource, records: Sequence<R>) -> Self {
        ResourceGroup { resource, records }
    }

    pub(crate) fn into_parts(self) -> (Resource, Sequence<R>) {
        (self.resource, self.records)
    }
}

impl ResourceLogs {
    pub fn logs(&self) -> &Sequence<LogRecord> {
        &self.records
    }

    pub fn logs_mut(&mut self) -> &mut Sequence<LogRecord> {
        &mut self.records
    }
}

impl ResourceSpans {
    pub fn spans(&self) -> &Sequence<Span> {
        &self.records
    }

    pub fn spans_mut(&mut self) -> &mut Sequence<Span> {
        &mut self.records
    }
}
