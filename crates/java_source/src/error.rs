// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

use crate::TypeName;

/// A Java type expression that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid Java type `{input}`: {}", .reasons.join("; "))]
pub struct ParseError {
    input: String,
    reasons: Vec<String>,
}

impl ParseError {
    pub(crate) fn new(input: &str, reasons: impl IntoIterator<Item = String>) -> Self {
        Self {
            input: input.to_string(),
            reasons: reasons.into_iter().collect(),
        }
    }

    pub(crate) fn not_a_class(input: &str, actual: &TypeName) -> Self {
        Self::new(input, [format!("expected a class reference, found `{actual}`")])
    }

    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// One human-readable reason per problem found.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }
}
