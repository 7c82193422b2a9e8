// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use crate::ParseError;

/// A fully-qualified reference to a (possibly nested) Java class.
///
/// The nesting chain is kept explicitly, outermost class first, so the canonical name
/// (`test.Outer.Inner`) and the reflection name (`test.Outer$Inner`) can both be derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: String,
    simple_names: Vec<String>,
}

impl ClassName {
    /// Creates a top-level class in `package`. An empty package means the default package.
    #[must_use]
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Creates a class from its package and its nesting chain, outermost first.
    ///
    /// Returns `None` if the chain is empty.
    #[must_use]
    pub fn from_parts<I, S>(package: impl Into<String>, simple_names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let simple_names: Vec<String> = simple_names.into_iter().map(Into::into).collect();
        if simple_names.is_empty() {
            return None;
        }

        Some(Self {
            package: package.into(),
            simple_names,
        })
    }

    /// Parses a dotted class reference such as `androidx.work.ListenableWorker` or
    /// `test.Outer.Inner`.
    ///
    /// Leading segments that start with a lowercase letter are taken as the package, the
    /// remaining segments as the nesting chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a plain class reference.
    pub fn best_guess(text: &str) -> Result<Self, ParseError> {
        match crate::parser::parse_type(text)? {
            crate::TypeName::Class(class_name) => Ok(class_name),
            other => Err(ParseError::not_a_class(text, &other)),
        }
    }

    /// Returns a class nested directly inside this one.
    #[must_use]
    pub fn nested(&self, simple_name: impl Into<String>) -> Self {
        let mut simple_names = self.simple_names.clone();
        simple_names.push(simple_name.into());

        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// Returns a class with the given name declared in the same scope as this one.
    #[must_use]
    pub fn peer(&self, simple_name: impl Into<String>) -> Self {
        let mut simple_names = self.simple_names.clone();
        if let Some(last) = simple_names.last_mut() {
            *last = simple_name.into();
        }

        Self {
            package: self.package.clone(),
            simple_names,
        }
    }

    /// The package, empty for the default package.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The innermost simple name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map_or("", String::as_str)
    }

    /// The nesting chain, outermost class first.
    #[must_use]
    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The class this one is nested in, if any.
    #[must_use]
    pub fn enclosing_class_name(&self) -> Option<Self> {
        if self.simple_names.len() < 2 {
            return None;
        }

        Some(Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..self.simple_names.len() - 1].to_vec(),
        })
    }

    /// Whether this class is nested in another class.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.simple_names.len() > 1
    }

    /// The outermost class of the nesting chain.
    #[must_use]
    pub fn top_level_class_name(&self) -> Self {
        Self {
            package: self.package.clone(),
            simple_names: self.simple_names[..1].to_vec(),
        }
    }

    /// The name as written in source: package and nesting chain joined with `.`.
    #[must_use]
    pub fn canonical_name(&self) -> String {
        self.qualified_with(".")
    }

    /// The binary name reported by `Class.getName()`: nested classes are joined with `$`.
    #[must_use]
    pub fn reflection_name(&self) -> String {
        self.qualified_with("$")
    }

    /// Joins the package with `.` and the nesting chain with `nesting_separator`.
    #[must_use]
    pub fn qualified_with(&self, nesting_separator: &str) -> String {
        let nesting = self.simple_names.join(nesting_separator);
        if self.package.is_empty() {
            nesting
        } else {
            format!("{}.{nesting}", self.package)
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}
