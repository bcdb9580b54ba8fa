// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

pub mod common {
    pub mod v1 {
        /// AnyValue is used to represent any type of attribute value. AnyValue may contain a
        /// primitive value such as a string or integer. An empty AnyValue (no `value` set) is
        /// used for attributes whose key is present but whose value is unspecified.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct AnyValue {
            /// The value is one of the listed fields. It is valid for all values to be unspecified
            /// in which case this AnyValue is considered to be "empty".
            #[prost(oneof = "any_value::Value", tags = "1, 2, 3, 4")]
            pub value: ::core::option::Option<any_value::Value>,
        }
        /// Nested message and enum types in `AnyValue`.
        pub mod any_value {
            /// The value is one of the listed fields. It is valid for all values to be unspecified
            /// in which case this AnyValue is considered to be "empty".
            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum Value {
                #[prost(string, tag = "1")]
                StringValue(::prost::alloc::string::String),
                #[prost(bool, tag = "2")]
                BoolValue(bool),
                #[prost(int64, tag = "3")]
                IntValue(i64),
                #[prost(double, tag = "4")]
                DoubleValue(f64),
            }
        }
        /// KeyValue is a key-value pair that is used to store Span and Log attributes.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct KeyValue {
            #[prost(string, tag = "1")]
            pub key: ::prost::alloc::string::String,
            /// A missing value means the key is present but the value is unspecified.
            #[prost(message, optional, tag = "2")]
            pub value: ::core::option::Option<AnyValue>,
        }
    }
}

pub mod resource {
    pub mod v1 {
        /// Resource information.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Resource {
            /// Set of attributes that describe the resource.
            /// Attribute keys MUST be unique (it is not allowed to have more than one
            /// attribute with the same key).
            #[prost(message, repeated, tag = "1")]
            pub attributes: ::prost::alloc::vec::Vec<super::super::common::v1::KeyValue>,
            /// dropped_attributes_count is the number of dropped attributes. If the value is 0, then
            /// no attributes were dropped.
            #[prost(uint32, tag = "2")]
            pub dropped_attributes_count: u32,
        }
    }
}

pub mod logs {
    pub mod v1 {
        /// LogsData represents the logs data that flows through a pipeline.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct LogsData {
            /// An array of ResourceLogs.
            /// For data coming from a single resource this array will typically contain
            /// one element. Intermediary nodes that receive data from multiple origins
            /// typically batch the data before forwarding further and in that case this
            /// array will contain multiple elements.
            #[prost(message, repeated, tag = "1")]
            pub resource_logs: ::prost::alloc::vec::Vec<ResourceLogs>,
        }
        /// A collection of logs from a Resource.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResourceLogs {
            /// The resource for the logs in this message.
            /// If this field is not set then no resource info is known.
            #[prost(message, optional, tag = "1")]
            pub resource: ::core::option::Option<super::super::resource::v1::Resource>,
            /// A list of log records that originate from the resource.
            #[prost(message, repeated, tag = "2")]
            pub log_records: ::prost::alloc::vec::Vec<LogRecord>,
        }
        /// A log record.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct LogRecord {
            /// time_unix_nano is the time when the event occurred.
            /// Value is UNIX Epoch time in nanoseconds since 00:00:00 UTC on 1 January 1970.
            /// Value of 0 indicates unknown or missing timestamp.
            #[prost(fixed64, tag = "1")]
            pub time_unix_nano: u64,
            /// Numerical value of the severity, normalized to values described in Log Data Model.
            #[prost(enumeration = "SeverityNumber", tag = "2")]
            pub severity_number: i32,
            /// The severity text (also known as log level).
            #[prost(string, tag = "3")]
            pub severity_text: ::prost::alloc::string::String,
            /// Short event identifier that does not contain varying parts.
            #[prost(string, tag = "4")]
            pub name: ::prost::alloc::string::String,
            /// A value containing the body of the log record.
            #[prost(message, optional, tag = "5")]
            pub body: ::core::option::Option<super::super::common::v1::AnyValue>,
            /// Additional attributes that describe the specific event occurrence.
            #[prost(message, repeated, tag = "6")]
            pub attributes: ::prost::alloc::vec::Vec<super::super::common::v1::KeyValue>,
            #[prost(uint32, tag = "7")]
            pub dropped_attributes_count: u32,
            /// Flags, a bit field. 8 least significant bits are the trace flags as
            /// defined in W3C Trace Context specification.
            #[prost(fixed32, tag = "8")]
            pub flags: u32,
            /// A unique identifier for a trace. The ID is a 16-byte array.
            #[prost(bytes = "vec", tag = "9")]
            pub trace_id: ::prost::alloc::vec::Vec<u8>,
            /// A unique identifier for a span within a trace. The ID is an 8-byte array.
            #[prost(bytes = "vec", tag = "10")]
            pub span_id: ::prost::alloc::vec::Vec<u8>,
        }
        /// Possible values for LogRecord.SeverityNumber.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum SeverityNumber {
            /// UNSPECIFIED is the default SeverityNumber, it MUST NOT be used.
            Unspecified = 0,
            Trace = 1,
            Trace2 = 2,
            Trace3 = 3,
            Trace4 = 4,
            Debug = 5,
            Debug2 = 6,
            Debug3 = 7,
            Debug4 = 8,
            Info = 9,
            Info2 = 10,
            Info3 = 11,
            Info4 = 12,
            Warn = 13,
            Warn2 = 14,
            Warn3 = 15,
            Warn4 = 16,
            Error = 17,
            Error2 = 18,
            Error3 = 19,
            Error4 = 20,
            Fatal = 21,
            Fatal2 = 22,
            Fatal3 = 23,
            Fatal4 = 24,
        }
    }
}

pub mod trace {
    pub mod v1 {
        /// TracesData represents the traces data that flows through a pipeline.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct TracesData {
            /// An array of ResourceSpans.
            #[prost(message, repeated, tag = "1")]
            pub resource_spans: ::prost::alloc::vec::Vec<ResourceSpans>,
        }
        /// A collection of spans from a Resource.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ResourceSpans {
            /// The resource for the spans in this message.
            /// If this field is not set then no resource info is known.
            #[prost(message, optional, tag = "1")]
            pub resource: ::core::option::Option<super::super::resource::v1::Resource>,
            /// A list of spans that originate from the resource.
            #[prost(message, repeated, tag = "2")]
            pub spans: ::prost::alloc::vec::Vec<Span>,
        }
        /// Span represents a single operation within a trace.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Span {
            /// A unique identifier for a trace. The ID is a 16-byte array.
            #[prost(bytes = "vec", tag = "1")]
            pub trace_id: ::prost::alloc::vec::Vec<u8>,
            /// A unique identifier for a span within a trace. The ID is an 8-byte array.
            #[prost(bytes = "vec", tag = "2")]
            pub span_id: ::prost::alloc::vec::Vec<u8>,
            /// trace_state conveys information about request position in multiple distributed
            /// tracing graphs.
            #[prost(string, tag = "3")]
            pub trace_state: ::prost::alloc::string::String,
            /// The `span_id` of this span's parent span. If this is a root span, then this
            /// field must be empty.
            #[prost(bytes = "vec", tag = "4")]
            pub parent_span_id: ::prost::alloc::vec::Vec<u8>,
            /// A description of the span's operation.
            #[prost(string, tag = "5")]
            pub name: ::prost::alloc::string::String,
            /// Distinguishes between spans generated in a particular context.
            #[prost(enumeration = "span::SpanKind", tag = "6")]
            pub kind: i32,
            /// start_time_unix_nano is the start time of the span.
            #[prost(fixed64, tag = "7")]
            pub start_time_unix_nano: u64,
            /// end_time_unix_nano is the end time of the span.
            #[prost(fixed64, tag = "8")]
            pub end_time_unix_nano: u64,
            /// attributes is a collection of key/value pairs.
            #[prost(message, repeated, tag = "9")]
            pub attributes: ::prost::alloc::vec::Vec<super::super::common::v1::KeyValue>,
            #[prost(uint32, tag = "10")]
            pub dropped_attributes_count: u32,
            /// An optional final status for this span.
            #[prost(message, optional, tag = "15")]
            pub status: ::core::option::Option<Status>,
        }
        /// Nested message and enum types in `Span`.
        pub mod span {
            /// SpanKind is the type of span.
            #[derive(
                Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
            )]
            #[repr(i32)]
            pub enum SpanKind {
                /// Unspecified. Do NOT use as default.
                Unspecified = 0,
                /// Indicates that the span represents an internal operation within an application.
                Internal = 1,
                /// Indicates that the span covers server-side handling of an RPC or other
                /// remote network request.
                Server = 2,
                /// Indicates that the span describes a request to some remote service.
                Client = 3,
                /// Indicates that the span describes a producer sending a message to a broker.
                Producer = 4,
                /// Indicates that the span describes consumer receiving a message from a broker.
                Consumer = 5,
            }
            impl SpanKind {
                /// String value of the enum field names used in the ProtoBuf definition.
                pub fn as_str_name(&self) -> &'static str {
                    match self {
                        Self::Unspecified => "SPAN_KIND_UNSPECIFIED",
                        Self::Internal => "SPAN_KIND_INTERNAL",
                        Self::Server => "SPAN_KIND_SERVER",
                        Self::Client => "SPAN_KIND_CLIENT",
                        Self::Producer => "SPAN_KIND_PRODUCER",
                        Self::Consumer => "SPAN_KIND_CONSUMER",
                    }
                }
            }
        }
        /// The Status type defines a logical error model.
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Status {
            /// A developer-facing human readable error message.
            #[prost(string, tag = "2")]
            pub message: ::prost::alloc::string::String,
            /// The status code.
            #[prost(enumeration = "status::StatusCode", tag = "3")]
            pub code: i32,
        }
        /// Nested message and enum types in `Status`.
        pub mod status {
            #[derive(
                Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
            )]
            #[repr(i32)]
            pub enum StatusCode {
                /// The default status.
                Unset = 0,
                /// The Span has been validated by an Application developer or Operator to
                /// have completed successfully.
                Ok = 1,
                /// The Span contains an error.
                Error = 2,
            }
            impl StatusCode {
                /// String value of the enum field names used in the ProtoBuf definition.
                pub fn as_str_name(&self) -> &'static str {
                    match self {
                        Self::Unset => "STATUS_CODE_UNSET",
                        Self::Ok => "STATUS_CODE_OK",
                        Self::Error => "STATUS_CODE_ERROR",
                    }
                }
            }
        }
    }
}
