// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use libdd_pdata::RecordKind;
use std::fmt;

/// Name list a pattern was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternList {
    Services,
    SpanNames,
    LogNames,
}

impl PatternList {
    pub(crate) fn record_names(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Log => PatternList::LogNames,
            RecordKind::Span => PatternList::SpanNames,
        }
    }
}

impl fmt::Display for PatternList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PatternList::Services => "service name",
            PatternList::SpanNames => "span name",
            PatternList::LogNames => "log name",
        })
    }
}

fn filters_prefix(list: &Option<PatternList>) -> String {
    list.map(|list| format!("error creating {list} filters: "))
        .unwrap_or_default()
}

/// Configuration errors reported by [`crate::Matcher::new`]. Evaluation never fails.
#[derive(thiserror::Error, Debug, Clone)]
#[non_exhaustive]
pub enum MatchError {
    /// No services, record names or attributes configured.
    #[error(
        "at least one of \"services\", \"{}\" or \"attributes\" field must be specified",
        .kind.names_field()
    )]
    EmptyCriteria { kind: RecordKind },

    /// A names list meant for the other record kind was set.
    #[error("{field} should not be specified for {kind}")]
    WrongRecordKind {
        field: &'static str,
        kind: RecordKind,
    },

    /// `list` is the first names list that would have been built with the unknown match type, if
    /// any.
    #[error(
        "{}unrecognized match_type: '{match_type}', valid types are: [regexp strict]",
        filters_prefix(.list)
    )]
    UnrecognizedMatchType {
        match_type: String,
        list: Option<PatternList>,
    },

    #[error("error creating {list} filters: {error}")]
    PatternCompile {
        list: PatternList,
        #[source]
        error: regex::Error,
    },

    #[error("match_type=regexp is not supported for \"attributes\"")]
    UnsupportedMatchTypeForAttributes,

    #[error("error creating processor. Can't have empty key in the list of attributes")]
    EmptyAttributeKey,
}
