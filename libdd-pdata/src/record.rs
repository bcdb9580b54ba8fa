// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::AttributeMap;
use std::fmt::{self, Debug};

/// Kind of record held by a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Log,
    Span,
}

impl RecordKind {
    /// Name of the configuration field listing record names for this kind.
    pub const fn names_field(&self) -> &'static str {
        match self {
            RecordKind::Log => "log_names",
            RecordKind::Span => "span_names",
        }
    }

    /// The record kind whose names must not be configured alongside this one.
    pub const fn other(&self) -> RecordKind {
        match self {
            RecordKind::Log => RecordKind::Span,
            RecordKind::Span => RecordKind::Log,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::Log => "log records",
            RecordKind::Span => "trace spans",
        })
    }
}

/// A single record owned by a resource group: a log entry or a span.
pub trait RecordItem: Clone + Debug + Default + PartialEq {
    const KIND: RecordKind;

    fn name(&self) -> &str;

    fn attributes(&self) -> &AttributeMap;

    fn attributes_mut(&mut self) -> &mut AttributeMap;
}
