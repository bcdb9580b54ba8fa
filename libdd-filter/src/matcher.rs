// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::filterset::{self, FilterSet};
use crate::{MatchError, MatchProperties, MatchType, PatternList};
use libdd_pdata::{AttributeMap, AttributeValue, LogRecord, RecordItem, Span};
use std::marker::PhantomData;
use tracing::debug;

/// Requirement on a single attribute of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeMatcher {
    pub key: String,
    /// `None` only requires the key to be present.
    pub value: Option<AttributeValue>,
}

impl AttributeMatcher {
    fn matches(&self, attributes: &AttributeMap) -> bool {
        match (attributes.get(&self.key), &self.value) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(actual), Some(expected)) => actual == expected,
        }
    }
}

/// Predicate over records of kind `R`, compiled once from [`MatchProperties`].
///
/// A matcher is immutable: it can be shared between threads and evaluated concurrently.
#[derive(Debug, Clone)]
pub struct Matcher<R> {
    services: Option<FilterSet>,
    names: Option<FilterSet>,
    attributes: Vec<AttributeMatcher>,
    _record: PhantomData<fn(&R)>,
}

pub type LogMatcher = Matcher<LogRecord>;
pub type SpanMatcher = Matcher<Span>;

impl<R: RecordItem> Matcher<R> {
    /// Validates `properties` and compiles them. The first configuration error found is returned,
    /// checked in this order:
    ///
    /// 1. no services, record names or attributes
    /// 2. record names of the other record kind
    /// 3. unknown `match_type`
    /// 4. invalid service or record name pattern
    /// 5. `regexp` used together with attributes
    /// 6. attribute with an empty key
    pub fn new(properties: &MatchProperties) -> Result<Self, MatchError> {
        let kind = R::KIND;
        let names = properties.record_names(kind);

        if properties.services.is_empty()
            && properties.span_names.is_empty()
            && properties.log_names.is_empty()
            && properties.attributes.is_empty()
        {
            return Err(MatchError::EmptyCriteria { kind });
        }

        let other = kind.other();
        if !properties.record_names(other).is_empty() {
            return Err(MatchError::WrongRecordKind {
                field: other.names_field(),
                kind,
            });
        }

        let names_list = PatternList::record_names(kind);
        let match_type = properties
            .match_type
            .parse::<MatchType>()
            .map_err(|_| MatchError::UnrecognizedMatchType {
                match_type: properties.match_type.clone(),
                list: if !properties.services.is_empty() {
                    Some(PatternList::Services)
                } else if !names.is_empty() {
                    Some(names_list)
                } else {
                    None
                },
            })?;

        let services = filterset::build(match_type, PatternList::Services, &properties.services)?;
        let name_set = filterset::build(match_type, names_list, names)?;

        if match_type == MatchType::Regexp && !properties.attributes.is_empty() {
            return Err(MatchError::UnsupportedMatchTypeForAttributes);
        }

        let attributes = properties
            .attributes
            .iter()
            .map(|attribute| {
                if attribute.key.is_empty() {
                    return Err(MatchError::EmptyAttributeKey);
                }
                Ok(AttributeMatcher {
                    key: attribute.key.clone(),
                    value: attribute.value.clone().filter(|v| !v.is_key_only()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            record_kind = %kind,
            %match_type,
            services = properties.services.len(),
            names = names.len(),
            attributes = attributes.len(),
            "compiled record matcher"
        );

        Ok(Matcher {
            services,
            names: name_set,
            attributes,
            _record: PhantomData,
        })
    }

    /// Returns true when `record`, emitted by the resource named `resource_name`, satisfies every
    /// configured criterion. Criteria left empty in the configuration are ignored.
    pub fn matches(&self, record: &R, resource_name: &str) -> bool {
        if let Some(services) = &self.services {
            if resource_name.is_empty() || !services.matches(resource_name) {
                return false;
            }
        }
        if let Some(names) = &self.names {
            if !names.matches(record.name()) {
                return false;
            }
        }
        let attributes = record.attributes();
        self.attributes
            .iter()
            .all(|matcher| matcher.matches(attributes))
    }

    pub fn attributes(&self) -> &[AttributeMatcher] {
        &self.attributes
    }
}
