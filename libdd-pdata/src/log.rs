// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{AttributeMap, AttributeValue, RecordItem, RecordKind};
use libdd_pdata_protobuf::pb::common::v1::AnyValue;
use libdd_pdata_protobuf::pb::logs::v1 as pb;

pub use libdd_pdata_protobuf::pb::logs::v1::SeverityNumber;

/// A single log entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogRecord {
    timestamp: u64,
    severity_number: i32,
    severity_text: String,
    name: String,
    body: Option<AttributeValue>,
    attributes: AttributeMap,
    dropped_attributes_count: u32,
    flags: u32,
    trace_id: Vec<u8>,
    span_id: Vec<u8>,
}

impl LogRecord {
    /// Time of the event, in nanoseconds since the unix epoch. 0 means unknown.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, value: u64) {
        self.timestamp = value;
    }

    /// Severity of the record. Values unknown to this version read as `Unspecified`.
    pub fn severity_number(&self) -> SeverityNumber {
        SeverityNumber::try_from(self.severity_number).unwrap_or(SeverityNumber::Unspecified)
    }

    pub fn set_severity_number(&mut self, value: SeverityNumber) {
        self.severity_number = value as i32;
    }

    pub fn severity_text(&self) -> &str {
        &self.severity_text
    }

    pub fn set_severity_text(&mut self, value: impl Into<String>) {
        self.severity_text = value.into();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn body(&self) -> Option<&AttributeValue> {
        self.body.as_ref()
    }

    pub fn set_body(&mut self, value: impl Into<AttributeValue>) {
        self.body = Some(value.into());
    }

    pub fn dropped_attributes_count(&self) -> u32 {
        self.dropped_attributes_count
    }

    pub fn set_dropped_attributes_count(&mut self, value: u32) {
        self.dropped_attributes_count = value;
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn set_flags(&mut self, value: u32) {
        self.flags = value;
    }

    pub fn trace_id(&self) -> &[u8] {
        &self.trace_id
    }

    pub fn set_trace_id(&mut self, value: [u8; 16]) {
        self.trace_id = value.to_vec();
    }

    pub fn span_id(&self) -> &[u8] {
        &self.span_id
    }

    pub fn set_span_id(&mut self, value: [u8; 8]) {
        self.span_id = value.to_vec();
    }
}

impl RecordItem for LogRecord {
    const KIND: RecordKind = RecordKind::Log;

    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut AttributeMap {
        &mut self.attributes
    }
}

impl From<pb::LogRecord> for LogRecord {
    fn from(orig: pb::LogRecord) -> Self {
        LogRecord {
            timestamp: orig.time_unix_nano,
            severity_number: orig.severity_number,
            severity_text: orig.severity_text,
            name: orig.name,
            body: orig.body.map(AttributeValue::from),
            attributes: AttributeMap::from_proto(orig.attributes),
            dropped_attributes_count: orig.dropped_attributes_count,
            flags: orig.flags,
            trace_id: orig.trace_id,
            span_id: orig.span_id,
        }
    }
}

impl From<LogRecord> for pb::LogRecord {
    fn from(record: LogRecord) -> Self {
        pb::LogRecord {
            time_unix_nano: record.timestamp,
            severity_number: record.severity_number,
            severity_text: record.severity_text,
            name: record.name,
            body: record.body.map(AnyValue::from),
            attributes: record.attributes.into_proto(),
            dropped_attributes_count: record.dropped_attributes_count,
            flags: record.flags,
            trace_id: record.trace_id,
            span_id: record.span_id,
        }
    }
}
