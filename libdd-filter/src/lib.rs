// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Record matchers for pipeline filter stages.
//!
//! [`MatchProperties`] is the raw configuration. [`Matcher::new`] validates it once and produces
//! an immutable predicate that is evaluated for every record.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

mod config;
mod error;
mod filterset;
mod matcher;

pub use config::{Attribute, FilterConfig, MatchProperties, MatchType};
pub use error::{MatchError, PatternList};
pub use filterset::FilterSet;
pub use matcher::{AttributeMatcher, LogMatcher, Matcher, SpanMatcher};
