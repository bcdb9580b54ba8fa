// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{MatchType, PatternList};
use regex::{Regex, RegexSet};
use std::collections::HashSet;

/// A compiled list of names. A name matches the set when it matches any entry.
#[derive(Debug, Clone)]
pub enum FilterSet {
    Strict(HashSet<String>),
    /// Anchored patterns: an entry must match the whole name.
    Regexp(RegexSet),
}

impl FilterSet {
    /// Builds the set for `patterns`. On failure, returns the first offending pattern's error.
    pub(crate) fn new(
        match_type: MatchType,
        patterns: &[String],
    ) -> Result<FilterSet, regex::Error> {
        match match_type {
            MatchType::Strict => Ok(FilterSet::Strict(patterns.iter().cloned().collect())),
            MatchType::Regexp => {
                // Compiled one by one first so the error quotes the pattern as configured.
                for pattern in patterns {
                    Regex::new(pattern)?;
                }
                let set = RegexSet::new(patterns.iter().map(|p| format!("^(?:{p})$")))?;
                Ok(FilterSet::Regexp(set))
            }
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            FilterSet::Strict(names) => names.contains(name),
            FilterSet::Regexp(set) => set.is_match(name),
        }
    }

    pub fn match_type(&self) -> MatchType {
        match self {
            FilterSet::Strict(_) => MatchType::Strict,
            FilterSet::Regexp(_) => MatchType::Regexp,
        }
    }
}

/// Builds a filter set for a non-empty list. Empty lists carry no constraint.
pub(crate) fn build(
    match_type: MatchType,
    list: PatternList,
    patterns: &[String],
) -> Result<Option<FilterSet>, crate::MatchError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    FilterSet::new(match_type, patterns)
        .map(Some)
        .map_err(|error| crate::MatchError::PatternCompile { list, error })
}
