// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use java_source::ParseError;
use thiserror::Error;

/// Input the host handed over that cannot be processed at all.
///
/// Problems with the annotated code itself are not errors of this type; they are reported as
/// [`Diagnostic`](crate::Diagnostic)s attributed to the offending element.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The round description is not valid JSON or does not match the expected shape.
    #[error("malformed round description: {0}")]
    Json(#[source] serde_json::Error),

    /// An element of the round description names something that cannot exist in Java, such
    /// as an invalid identifier.
    #[error("invalid {element}: {reason}")]
    Model {
        /// The offending element.
        element: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A type expression in the round description could not be parsed.
    #[error("invalid type in {element}")]
    Type {
        /// The element whose type is invalid.
        element: String,
        /// What the type parser found.
        #[source]
        source: ParseError,
    },

    /// The processor options are not valid.
    #[error("invalid processor options: {0}")]
    Options(String),
}

impl Error {
    pub(crate) fn model(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Model {
            element: element.into(),
            reason: reason.into(),
        }
    }
}

/// A specialized `Result` for processor operations.
pub type Result<T> = std::result::Result<T, Error>;
