//! Resource identifiers
//!
//! ARM addresses every resource with a hierarchical path such as
//! `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}`.
//! Each identifier type lists its path as an ordered set of [`Segment`]s; a
//! single [`Parser`] walks that list for every type.
//!
//! # Module Structure
//!
//! - [`common`] - identifiers shared by every API group (subscription, resource group)

mod common;

pub use common::{ResourceGroupId, SubscriptionId};

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// What kind of value a segment holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    /// A fixed literal such as `resourceGroups`
    Static,
    /// A provider namespace such as `Microsoft.DataMigration`
    ResourceProvider,
    SubscriptionId,
    ResourceGroup,
    /// A name chosen by the user
    UserSpecified,
}

/// One position in a resource identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: &'static str,
    pub kind: SegmentType,
    /// Literal value for static and provider segments
    pub fixed_value: Option<&'static str>,
    pub example_value: &'static str,
}

impl Segment {
    pub fn static_segment(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentType::Static,
            fixed_value: Some(value),
            example_value: value,
        }
    }

    pub fn resource_provider(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentType::ResourceProvider,
            fixed_value: Some(value),
            example_value: value,
        }
    }

    pub fn subscription_id(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentType::SubscriptionId,
            fixed_value: None,
            example_value: "12345678-1234-9876-4563-123456789012",
        }
    }

    pub fn resource_group(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentType::ResourceGroup,
            fixed_value: None,
            example_value: "example-resource-group",
        }
    }

    pub fn user_specified(name: &'static str, example_value: &'static str) -> Self {
        Self {
            name,
            kind: SegmentType::UserSpecified,
            fixed_value: None,
            example_value,
        }
    }

    fn is_fixed(&self) -> bool {
        matches!(self.kind, SegmentType::Static | SegmentType::ResourceProvider)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parsing {input:?} as {id_type} ID: the segment {segment:?} was not specified{}", expected_hint(.expected))]
    SegmentNotSpecified {
        id_type: &'static str,
        segment: &'static str,
        expected: Option<&'static str>,
        input: String,
    },

    #[error("parsing {input:?} as {id_type} ID: expected {expected} segments but got {actual}")]
    UnexpectedSegmentCount {
        id_type: &'static str,
        expected: usize,
        actual: usize,
        input: String,
    },

    #[error("validating {key:?}: {source}")]
    Field {
        key: String,
        #[source]
        source: Box<ParseError>,
    },
}

fn expected_hint(expected: &Option<&'static str>) -> String {
    match expected {
        Some(value) => format!(" (expected {:?})", value),
        None => String::new(),
    }
}

/// Values captured by the parser, keyed by segment name
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub parsed: HashMap<&'static str, String>,
    pub raw_input: String,
    id_type: &'static str,
}

impl ParseResult {
    pub fn get(&self, segment: &'static str) -> Option<&str> {
        self.parsed.get(segment).map(String::as_str)
    }

    /// Fetch a captured value, failing with the segment's name when absent
    pub fn require(&self, segment: &'static str) -> Result<String, ParseError> {
        match self.get(segment) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(ParseError::SegmentNotSpecified {
                id_type: self.id_type,
                segment,
                expected: None,
                input: self.raw_input.clone(),
            }),
        }
    }
}

/// A typed ARM resource identifier
pub trait ResourceId: Sized + fmt::Display {
    /// Human readable type name, e.g. `Resource Group`
    const TYPE_NAME: &'static str;

    /// Ordered segment specification shared by parsing and formatting
    fn segments() -> Vec<Segment>;

    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError>;

    /// Canonical string form
    fn id(&self) -> String;

    /// Labelled values of the user-facing components
    fn components(&self) -> Vec<(&'static str, &str)>;

    fn parse_id(input: &str) -> Result<Self, ParseError> {
        let result = Parser::new(Self::TYPE_NAME, Self::segments()).parse(input, false)?;
        Self::from_parse_result(&result)
    }

    /// Case-insensitive parse, intended for IDs returned by the service
    fn parse_id_insensitively(input: &str) -> Result<Self, ParseError> {
        let result = Parser::new(Self::TYPE_NAME, Self::segments()).parse(input, true)?;
        Self::from_parse_result(&result)
    }

    /// Multi-line description such as `Resource Group (Subscription: "sub"\n...)`
    fn describe(&self) -> String {
        let components: Vec<String> = self
            .components()
            .into_iter()
            .map(|(label, value)| format!("{}: {:?}", label, value))
            .collect();
        format!("{} ({})", Self::TYPE_NAME, components.join("\n"))
    }
}

/// Validate that `input` parses as `T`, reporting failures against `key`
pub fn validate_resource_id<T: ResourceId>(input: &str, key: &str) -> Vec<ParseError> {
    match T::parse_id(input) {
        Ok(_) => Vec::new(),
        Err(source) => vec![ParseError::Field {
            key: key.to_string(),
            source: Box::new(source),
        }],
    }
}

/// Walks a segment specification over an input string
pub struct Parser {
    id_type: &'static str,
    segments: Vec<Segment>,
}

impl Parser {
    pub fn new(id_type: &'static str, segments: Vec<Segment>) -> Self {
        Self { id_type, segments }
    }

    pub fn parse(&self, input: &str, insensitively: bool) -> Result<ParseResult, ParseError> {
        let trimmed = input.strip_prefix('/').unwrap_or(input);
        let parts: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        let mut result = ParseResult {
            parsed: HashMap::new(),
            raw_input: input.to_string(),
            id_type: self.id_type,
        };

        for (position, segment) in self.segments.iter().enumerate() {
            let value = parts.get(position).copied().unwrap_or_default();
            let missing = || ParseError::SegmentNotSpecified {
                id_type: self.id_type,
                segment: segment.name,
                expected: segment.fixed_value,
                input: input.to_string(),
            };

            if value.is_empty() {
                return Err(missing());
            }

            if segment.is_fixed() {
                let expected = segment.fixed_value.unwrap_or_default();
                let matched = if insensitively {
                    value.eq_ignore_ascii_case(expected)
                } else {
                    value == expected
                };
                if !matched {
                    return Err(missing());
                }
                result.parsed.insert(segment.name, expected.to_string());
            } else {
                result.parsed.insert(segment.name, value.to_string());
            }
        }

        if parts.len() != self.segments.len() {
            return Err(ParseError::UnexpectedSegmentCount {
                id_type: self.id_type,
                expected: self.segments.len(),
                actual: parts.len(),
                input: input.to_string(),
            });
        }

        Ok(result)
    }
}
