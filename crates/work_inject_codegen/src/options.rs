// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use java_source::{AnnotationSpec, AnnotationValue, ClassName};
use serde::{Deserialize, Serialize};

use crate::names::{DEFAULT_GENERATED_ANNOTATION, PROCESSOR_COMMENTS, PROCESSOR_NAME};
use crate::naming::NestingStyle;
use crate::{Error, Result};

/// Configuration of a processing run.
///
/// Every field is optional when loading from JSON:
///
/// ```
/// use work_inject_codegen::{NestingStyle, ProcessorOptions};
///
/// let options = ProcessorOptions::from_json(r#"{ "generated_marker": true }"#).unwrap();
///
/// assert!(options.generated_marker());
/// assert!(!options.public_module());
/// assert_eq!(options.nesting_style(), NestingStyle::Flattened);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessorOptions {
    public_module: bool,
    generated_marker: bool,
    generated_annotation: String,
    nesting_style: NestingStyle,
}

impl ProcessorOptions {
    /// Loads options from JSON and checks them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Options`] if the JSON is malformed or a value is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json).map_err(|error| Error::Options(error.to_string()))?;
        options.generated_annotation_type()?;
        Ok(options)
    }

    /// Emits the binding module `public` even when the module class is not.
    #[must_use]
    pub const fn with_public_module(mut self, public_module: bool) -> Self {
        self.public_module = public_module;
        self
    }

    /// Attaches a `@Generated` marker to every generated class.
    #[must_use]
    pub const fn with_generated_marker(mut self, generated_marker: bool) -> Self {
        self.generated_marker = generated_marker;
        self
    }

    /// Sets the marker annotation type, `javax.annotation.Generated` by default.
    #[must_use]
    pub fn with_generated_annotation(mut self, generated_annotation: impl Into<String>) -> Self {
        self.generated_annotation = generated_annotation.into();
        self
    }

    /// Sets how nested class names are flattened.
    #[must_use]
    pub const fn with_nesting_style(mut self, nesting_style: NestingStyle) -> Self {
        self.nesting_style = nesting_style;
        self
    }

    /// Whether the binding module is always public.
    #[must_use]
    pub const fn public_module(&self) -> bool {
        self.public_module
    }

    /// Whether generated types carry a `@Generated` marker.
    #[must_use]
    pub const fn generated_marker(&self) -> bool {
        self.generated_marker
    }

    /// The canonical name of the marker annotation.
    #[must_use]
    pub fn generated_annotation(&self) -> &str {
        &self.generated_annotation
    }

    /// How nested class names are flattened.
    #[must_use]
    pub const fn nesting_style(&self) -> NestingStyle {
        self.nesting_style
    }

    fn generated_annotation_type(&self) -> Result<ClassName> {
        ClassName::best_guess(&self.generated_annotation)
            .map_err(|error| Error::Options(format!("generated_annotation: {error}")))
    }

    /// The marker to attach to generated classes, if requested.
    pub(crate) fn marker(&self) -> Result<Option<AnnotationSpec>> {
        if !self.generated_marker {
            return Ok(None);
        }

        let marker = AnnotationSpec::marker(self.generated_annotation_type()?)
            .with_member("value", AnnotationValue::String(PROCESSOR_NAME.to_string()))
            .with_member("comments", AnnotationValue::String(PROCESSOR_COMMENTS.to_string()));

        Ok(Some(marker))
    }
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            public_module: false,
            generated_marker: false,
            generated_annotation: DEFAULT_GENERATED_ANNOTATION.to_string(),
            nesting_style: NestingStyle::default(),
        }
    }
}
