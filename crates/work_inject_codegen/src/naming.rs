// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Derives generated type names, binding keys and binding method names from a worker or
//! module class.
//!
//! Every derived name goes through [`flatten`], so the factory name and the binding key of
//! one target always agree on how its nesting chain is spelled.

use java_source::ClassName;
use serde::{Deserialize, Serialize};

use crate::names::{BIND_METHOD_PREFIX, FACTORY_SUFFIX, MODULE_PREFIX};

/// How the nesting chain of a nested class is spelled in derived names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestingStyle {
    /// `Outer.Worker` becomes `Outer_Worker_AssistedFactory`, keyed `test.Outer.Worker`.
    #[default]
    Flattened,
    /// `Outer.Worker` becomes `Outer$Worker_AssistedFactory`, keyed `test.Outer$Worker`, the
    /// name reported by `Class.getName()`.
    Reflection,
}

impl NestingStyle {
    /// Separator between nesting levels in generated simple names.
    #[must_use]
    pub const fn name_separator(self) -> &'static str {
        match self {
            Self::Flattened => "_",
            Self::Reflection => "$",
        }
    }

    /// Separator between nesting levels in binding keys.
    #[must_use]
    pub const fn key_separator(self) -> &'static str {
        match self {
            Self::Flattened => ".",
            Self::Reflection => "$",
        }
    }
}

/// Joins a nesting chain into a single simple name.
#[must_use]
pub fn flatten(simple_names: &[String], style: NestingStyle) -> String {
    simple_names.join(style.name_separator())
}

/// The factory generated for `owner`, a top-level class in the owner's package.
#[must_use]
pub fn factory_name(owner: &ClassName, style: NestingStyle) -> ClassName {
    ClassName::new(owner.package(), format!("{}{FACTORY_SUFFIX}", flatten(owner.simple_names(), style)))
}

/// The binding module generated for the module class `owner`.
///
/// The prefix applies to the simple name; the enclosing chain is flattened in front of it,
/// so `Outer.AppModule` yields `Outer_WorkerInject_AppModule`.
#[must_use]
pub fn module_name(owner: &ClassName, style: NestingStyle) -> ClassName {
    let simple_names = owner.simple_names();
    let enclosing = &simple_names[..simple_names.len().saturating_sub(1)];

    let mut name = flatten(enclosing, style);
    if !name.is_empty() {
        name.push_str(style.name_separator());
    }
    name.push_str(MODULE_PREFIX);
    name.push_str(owner.simple_name());

    ClassName::new(owner.package(), name)
}

/// The map key `owner`'s factory is bound under.
#[must_use]
pub fn binding_key(owner: &ClassName, style: NestingStyle) -> String {
    owner.qualified_with(style.key_separator())
}

/// `bind_` followed by the key, with every character that cannot appear in a Java identifier
/// replaced by `_`.
#[must_use]
pub fn bind_method_name(binding_key: &str) -> String {
    let sanitized: String = binding_key
        .chars()
        .map(|c| if is_identifier_part(c) { c } else { '_' })
        .collect();

    format!("{BIND_METHOD_PREFIX}{sanitized}")
}

/// Whether `text` is usable as a Java identifier.
#[must_use]
pub fn is_java_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_part) && !is_reserved(text)
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_numeric()
}

fn is_reserved(text: &str) -> bool {
    const RESERVED: &[&str] = &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const", "continue",
        "default", "do", "double", "else", "enum", "extends", "false", "final", "finally", "float", "for", "goto",
        "if", "implements", "import", "instanceof", "int", "interface", "long", "native", "new", "null", "package",
        "private", "protected", "public", "return", "short", "static", "strictfp", "super", "switch",
        "synchronized", "this", "throw", "throws", "transient", "true", "try", "void", "volatile", "while", "_",
    ];

    RESERVED.contains(&text)
}
