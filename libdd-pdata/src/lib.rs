// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! In-memory representation of the log and span batches flowing through a pipeline.
//!
//! A [`Batch`] owns an ordered [`Sequence`] of [`ResourceGroup`]s, each owning a `Sequence` of
//! records. Sequence elements are [`Slot`]s: growing a sequence with [`Sequence::resize`] leaves
//! the new elements uninitialized until they are explicitly initialized.
//!
//! ```
//! use libdd_pdata::{Logs, RecordItem};
//!
//! let mut logs = Logs::new();
//! let resources = logs.resource_logs_mut();
//! resources.resize(1);
//! let group = resources.at_mut(0).unwrap().init_empty();
//! group.resource_mut().attributes_mut().insert_string("service.name", "svcA");
//! let record = group.logs_mut().append_empty();
//! record.set_body("My example log");
//! record.attributes_mut().insert_string("pod", "pod_name");
//!
//! assert_eq!(logs.log_record_count(), 1);
//! ```

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

mod attributes;
mod batch;
mod error;
mod log;
mod record;
mod resource;
mod sequence;
mod slot;
mod span;

pub use attributes::{AttributeMap, AttributeValue, AttributeValueType};
pub use batch::{Batch, Logs, Traces};
pub use error::DataError;
pub use log::{LogRecord, SeverityNumber};
pub use record::{RecordItem, RecordKind};
pub use resource::{Resource, ResourceGroup, ResourceLogs, ResourceSpans};
pub use sequence::Sequence;
pub use slot::Slot;
pub use span::{Span, SpanKind, Status, StatusCode};
