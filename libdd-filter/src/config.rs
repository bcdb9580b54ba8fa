// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::MatchError;
use libdd_pdata::{AttributeValue, RecordKind};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How names in `services`, `span_names` and `log_names` are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Literal string equality.
    Strict,
    /// The whole name must match one of the regular expressions.
    Regexp,
}

impl MatchType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MatchType::Strict => "strict",
            MatchType::Regexp => "regexp",
        }
    }
}

impl FromStr for MatchType {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(MatchType::Strict),
            "regexp" => Ok(MatchType::Regexp),
            _ => Err(MatchError::UnrecognizedMatchType {
                match_type: s.to_string(),
                list: None,
            }),
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute a record must carry. Without a value, presence of the key is enough.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Attribute {
    pub key: String,
    #[serde(default)]
    pub value: Option<AttributeValue>,
}

/// Raw filter criteria as written in a pipeline configuration file.
///
/// Nothing is validated here; see [`crate::Matcher::new`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchProperties {
    /// `strict` or `regexp`. Left empty, it is rejected when the matcher is built.
    pub match_type: String,
    /// Names of the resources emitting the records.
    pub services: Vec<String>,
    pub span_names: Vec<String>,
    pub log_names: Vec<String>,
    pub attributes: Vec<Attribute>,
}

impl MatchProperties {
    pub(crate) fn record_names(&self, kind: RecordKind) -> &[String] {
        match kind {
            RecordKind::Log => &self.log_names,
            RecordKind::Span => &self.span_names,
        }
    }
}

/// Configuration of a filter stage. Records matching `include` are kept, records matching
/// `exclude` are dropped; exclusion wins when both match.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub include: Option<MatchProperties>,
    pub exclude: Option<MatchProperties>,
}
