// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use libdd_pdata::{AttributeValue, Logs, RecordItem, Sequence, SeverityNumber, Traces};
use libdd_pdata_protobuf::pb::common::v1::{any_value, AnyValue, KeyValue};
use libdd_pdata_protobuf::pb::logs::v1::{LogRecord, LogsData, ResourceLogs};
use libdd_pdata_protobuf::pb::resource::v1::Resource;
use libdd_pdata_protobuf::pb::trace::v1::{ResourceSpans, Span, Status, TracesData};
use proptest::prelude::*;
use prost::Message;

fn kv(key: &str, value: any_value::Value) -> KeyValue {
    KeyValue {
        key: key.to_string(),
        value: Some(AnyValue { value: Some(value) }),
    }
}

fn sample_logs_data() -> LogsData {
    LogsData {
        resource_logs: vec![
            ResourceLogs {
                resource: Some(Resource {
                    attributes: vec![kv(
                        "service.name",
                        any_value::Value::StringValue("svcA".to_string()),
                    )],
                    dropped_attributes_count: 0,
                }),
                log_records: vec![
                    LogRecord {
                        time_unix_nano: 1_448_466_874_000_000_000,
                        severity_number: SeverityNumber::Info as i32,
                        name: "first".to_string(),
                        body: Some(AnyValue {
                            value: Some(any_value::Value::StringValue("hello".to_string())),
                        }),
                        attributes: vec![
                            kv("keyInt", any_value::Value::IntValue(123)),
                            kv("keyDouble", any_value::Value::DoubleValue(3245.6)),
                            KeyValue {
                                key: "keyExists".to_string(),
                                value: None,
                            },
                        ],
                        ..Default::default()
                    },
                    LogRecord {
                        name: "second".to_string(),
                        trace_id: vec![1; 16],
                        span_id: vec![2; 8],
                        ..Default::default()
                    },
                ],
            },
            ResourceLogs {
                resource: None,
                log_records: vec![],
            },
        ],
    }
}

#[test]
fn logs_proto_round_trip_is_lossless() {
    let data = sample_logs_data();
    let logs = Logs::from(data.clone());
    assert_eq!(logs.log_record_count(), 2);
    assert_eq!(LogsData::from(logs), data);
}

#[test]
fn logs_survive_the_wire() {
    let bytes = sample_logs_data().encode_to_vec();
    let logs = Logs::from(LogsData::decode(bytes.as_slice()).unwrap());

    let group = logs.resource_logs().at(0).unwrap().get().unwrap();
    assert_eq!(
        group.resource().attributes().get("service.name"),
        Some(&AttributeValue::from("svcA"))
    );
    let record = group.logs().at(0).unwrap().get().unwrap();
    assert_eq!(record.name(), "first");
    assert_eq!(record.severity_number(), SeverityNumber::Info);
    assert_eq!(
        record.attributes().get("keyInt"),
        Some(&AttributeValue::Int(123))
    );
    assert_eq!(
        record.attributes().get("keyExists"),
        Some(&AttributeValue::KeyOnly)
    );
}

#[test]
fn traces_proto_round_trip_is_lossless() {
    let data = TracesData {
        resource_spans: vec![ResourceSpans {
            resource: Some(Resource {
                attributes: vec![kv("host", any_value::Value::StringValue("h1".to_string()))],
                dropped_attributes_count: 2,
            }),
            spans: vec![Span {
                name: "spanName".to_string(),
                attributes: vec![kv("keyBool", any_value::Value::BoolValue(true))],
                ..Default::default()
            }],
        }],
    };
    let traces = Traces::from(data.clone());
    assert_eq!(traces.span_count(), 1);
    assert_eq!(TracesData::from(traces), data);
}

#[test]
fn unusual_but_well_formed_input_round_trips() {
    let data = TracesData {
        resource_spans: vec![
            ResourceSpans {
                resource: Some(Resource::default()),
                spans: vec![Span {
                    name: "future".to_string(),
                    kind: 99,
                    status: Some(Status {
                        message: "unknown code".to_string(),
                        code: 7,
                    }),
                    attributes: vec![
                        KeyValue {
                            key: "bare".to_string(),
                            value: None,
                        },
                        KeyValue {
                            key: "empty".to_string(),
                            value: Some(AnyValue { value: None }),
                        },
                    ],
                    ..Default::default()
                }],
            },
            ResourceSpans {
                resource: None,
                spans: vec![Span::default()],
            },
        ],
    };
    let traces = Traces::from(data.clone());

    let group = traces.resource_spans().at(0).unwrap().get().unwrap();
    let span = group.spans().at(0).unwrap().get().unwrap();
    assert_eq!(span.attributes().get("bare"), Some(&AttributeValue::KeyOnly));
    assert_eq!(span.attributes().get("empty"), Some(&AttributeValue::Empty));
    assert_eq!(TracesData::from(traces), data);
}

#[test]
fn repeated_attribute_keys_are_normalized() {
    let data = LogsData {
        resource_logs: vec![ResourceLogs {
            resource: None,
            log_records: vec![LogRecord {
                attributes: vec![
                    kv("pod", any_value::Value::StringValue("a".to_string())),
                    kv("node", any_value::Value::IntValue(1)),
                    kv("pod", any_value::Value::StringValue("b".to_string())),
                ],
                ..Default::default()
            }],
        }],
    };
    let out = LogsData::from(Logs::from(data));
    assert_eq!(
        out.resource_logs[0].log_records[0].attributes,
        vec![
            kv("pod", any_value::Value::StringValue("b".to_string())),
            kv("node", any_value::Value::IntValue(1)),
        ]
    );
}

#[test]
fn mutating_a_view_mutates_the_batch() {
    let mut logs = Logs::from(sample_logs_data());
    let group = logs.resource_logs_mut().at_mut(0).unwrap().get_mut().unwrap();
    let record = group.logs_mut().at_mut(1).unwrap().get_mut().unwrap();
    record.attributes_mut().upsert("added", 1i64);

    let record = logs.resource_logs().at(0).unwrap().get().unwrap().logs().at(1).unwrap();
    assert_eq!(
        record.get().unwrap().attributes().get("added"),
        Some(&AttributeValue::Int(1))
    );
}

#[test]
fn clone_is_independent() {
    let mut source = Logs::from(sample_logs_data());
    let mut copy = source.clone();
    assert_eq!(source, copy);

    copy.resource_logs_mut()
        .at_mut(0)
        .unwrap()
        .get_mut()
        .unwrap()
        .resource_mut()
        .attributes_mut()
        .upsert("service.name", "svcB");
    source.resource_logs_mut().resize(1);

    let service = |logs: &Logs| {
        logs.resource_logs()
            .at(0)
            .unwrap()
            .get()
            .unwrap()
            .resource()
            .attributes()
            .get("service.name")
            .cloned()
    };
    assert_eq!(service(&source), Some(AttributeValue::from("svcA")));
    assert_eq!(service(&copy), Some(AttributeValue::from("svcB")));
    assert_eq!(source.resource_logs().len(), 1);
    assert_eq!(copy.resource_logs().len(), 2);
}

#[test]
fn out_of_range_access_is_an_error() {
    let mut logs = Logs::new();
    assert!(logs.resource_logs().at(0).is_err());
    logs.resource_logs_mut().resize(1);
    assert!(logs.resource_logs().at(0).is_ok());
    assert!(logs.resource_logs_mut().at_mut(1).is_err());
}

proptest! {
    #[test]
    fn resize_preserves_prefix(values in proptest::collection::vec(any::<u32>(), 0..32), extra in 1usize..16) {
        let mut seq: Sequence<u32> = values.iter().copied().collect();
        let n = values.len();
        seq.resize(n + extra);
        for i in n..n + extra {
            prop_assert!(seq.at(i).unwrap().is_uninitialized());
        }
        seq.resize(n);
        prop_assert_eq!(seq.initialized().copied().collect::<Vec<_>>(), values);
    }

    #[test]
    fn record_count_matches_initialized_groups(sizes in proptest::collection::vec(proptest::option::of(0usize..8), 0..16)) {
        let mut logs = Logs::new();
        let groups = logs.resource_logs_mut();
        groups.resize(sizes.len());
        for (i, size) in sizes.iter().enumerate() {
            if let Some(size) = size {
                groups.at_mut(i).unwrap().init_empty().logs_mut().resize(*size);
            }
        }
        let expected: usize = sizes.iter().flatten().sum();
        prop_assert_eq!(logs.log_record_count(), expected);
    }
}
