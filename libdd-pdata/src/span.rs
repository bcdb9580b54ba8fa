// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{AttributeMap, RecordItem, RecordKind};
use libdd_pdata_protobuf::pb::trace::v1 as pb;

pub use libdd_pdata_protobuf::pb::trace::v1::span::SpanKind;
pub use libdd_pdata_protobuf::pb::trace::v1::status::StatusCode;

/// Final status of a span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Status {
    code: i32,
    message: String,
}

impl Status {
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Status {
            code: code as i32,
            message: message.into(),
        }
    }

    /// Codes unknown to this version read as `Unset`.
    pub fn code(&self) -> StatusCode {
        StatusCode::try_from(self.code).unwrap_or(StatusCode::Unset)
    }

    pub fn set_code(&mut self, value: StatusCode) {
        self.code = value as i32;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }
}

/// A single operation within a trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Span {
    trace_id: Vec<u8>,
    span_id: Vec<u8>,
    trace_state: String,
    parent_span_id: Vec<u8>,
    name: String,
    kind: i32,
    start_timestamp: u64,
    end_timestamp: u64,
    attributes: AttributeMap,
    dropped_attributes_count: u32,
    status: Option<Status>,
}

impl Span {
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

    pub fn trace_state(&self) -> &str {
        &self.trace_state
    }

    pub fn set_trace_state(&mut self, value: impl Into<String>) {
        self.trace_state = value.into();
    }

    /// Empty for root spans.
    pub fn parent_span_id(&self) -> &[u8] {
        &self.parent_span_id
    }

    pub fn set_parent_span_id(&mut self, value: [u8; 8]) {
        self.parent_span_id = value.to_vec();
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn kind(&self) -> SpanKind {
        SpanKind::try_from(self.kind).unwrap_or(SpanKind::Unspecified)
    }

    pub fn set_kind(&mut self, value: SpanKind) {
        self.kind = value as i32;
    }

    pub fn start_timestamp(&self) -> u64 {
        self.start_timestamp
    }

    pub fn set_start_timestamp(&mut self, value: u64) {
        self.start_timestamp = value;
    }

    pub fn end_timestamp(&self) -> u64 {
        self.end_timestamp
    }

    pub fn set_end_timestamp(&mut self, value: u64) {
        self.end_timestamp = value;
    }

    pub fn dropped_attributes_count(&self) -> u32 {
        self.dropped_attributes_count
    }

    pub fn set_dropped_attributes_count(&mut self, value: u32) {
        self.dropped_attributes_count = value;
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, value: Status) {
        self.status = Some(value);
    }
}

impl RecordItem for Span {
    const KIND: RecordKind = RecordKind::Span;

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

impl From<pb::Span> for Span {
    fn from(orig: pb::Span) -> Self {
        Span {
            trace_id: orig.trace_id,
            span_id: orig.span_id,
            trace_state: orig.trace_state,
            parent_span_id: orig.parent_span_id,
            name: orig.name,
            kind: orig.kind,
            start_timestamp: orig.start_time_unix_nano,
            end_timestamp: orig.end_time_unix_nano,
            attributes: AttributeMap::from_proto(orig.attributes),
            dropped_attributes_count: orig.dropped_attributes_count,
            status: orig.status.map(|status| Status {
                code: status.code,
                message: status.message,
            }),
        }
    }
}

impl From<Span> for pb::Span {
    fn from(span: Span) -> Self {
        pb::Span {
            trace_id: span.trace_id,
            span_id: span.span_id,
            trace_state: span.trace_state,
            parent_span_id: span.parent_span_id,
            name: span.name,
            kind: span.kind,
            start_time_unix_nano: span.start_timestamp,
            end_time_unix_nano: span.end_timestamp,
            attributes: span.attributes.into_proto(),
            dropped_attributes_count: span.dropped_attributes_count,
            status: span.status.map(|status| pb::Status {
                message: status.message,
                code: status.code,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeValue;

    #[test]
    fn test_span_accessors() {
        let mut span = Span::default();
        assert_eq!(span.kind(), SpanKind::Unspecified);
        assert!(span.parent_span_id().is_empty());
        assert_eq!(span.status(), None);

        span.set_name("spanName");
        span.set_kind(SpanKind::Server);
        span.set_start_timestamp(10);
        span.set_end_timestamp(20);
        span.set_parent_span_id([7; 8]);
        span.set_status(Status::new(StatusCode::Error, "boom"));
        span.attributes_mut().insert_int("keyInt", 123);

        assert_eq!(span.name(), "spanName");
        assert_eq!(span.kind(), SpanKind::Server);
        assert_eq!(span.end_timestamp() - span.start_timestamp(), 10);
        assert_eq!(span.parent_span_id(), &[7u8; 8]);
        assert_eq!(span.status().map(Status::code), Some(StatusCode::Error));
        assert_eq!(span.status().map(Status::message), Some("boom"));
        assert_eq!(
            span.attributes().get("keyInt"),
            Some(&AttributeValue::Int(123))
        );
    }

    #[test]
    fn test_proto_round_trip() {
        let orig = pb::Span {
            trace_id: vec![1; 16],
            span_id: vec![2; 8],
            name: "GET /users".to_string(),
            kind: SpanKind::Client as i32,
            start_time_unix_nano: 1,
            end_time_unix_nano: 2,
            status: Some(pb::Status {
                message: String::new(),
                code: StatusCode::Ok as i32,
            }),
            ..Default::default()
        };
        assert_eq!(pb::Span::from(Span::from(orig.clone())), orig);
    }

    #[test]
    fn test_unknown_status_code_is_kept() {
        let orig = pb::Span {
            name: "spanName".to_string(),
            kind: 42,
            status: Some(pb::Status {
                message: "later".to_string(),
                code: 7,
            }),
            ..Default::default()
        };
        let span = Span::from(orig.clone());
        assert_eq!(span.kind(), SpanKind::Unspecified);
        assert_eq!(span.status().map(Status::code), Some(StatusCode::Unset));
        assert_eq!(pb::Span::from(span), orig);
    }
}
