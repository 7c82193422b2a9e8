// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Models Java types and class declarations and renders them as formatted source files.
//!
//! The model covers classes with fields, constructors and methods
//! whose bodies are built from structured [`Expr`] and [`Statement`] values rather than
//! free-form text. Because every class reference is a [`ClassName`], a [`JavaFile`] can work
//! out its own import block and decide where a name must be written fully qualified.
//!
//! # Example
//!
//! ```
//! use java_source::{ClassName, JavaFile, MethodSpec, Modifier, TypeName, TypeSpec};
//!
//! let type_spec = TypeSpec::class("Holder")
//!     .with_modifiers([Modifier::Public, Modifier::Final])
//!     .with_method(
//!         MethodSpec::method("items")
//!             .with_modifiers([Modifier::Abstract])
//!             .returns(TypeName::parse("java.util.List<java.lang.String>").unwrap()),
//!     );
//! let file = JavaFile::new("com.example", type_spec);
//!
//! let source = file.to_string();
//! assert!(source.starts_with("package com.example;\n\nimport java.util.List;\n"));
//! assert!(source.contains("  abstract List<String> items();"));
//! assert_eq!(file.class_name(), ClassName::new("com.example", "Holder"));
//! ```
//!
//! # Type Expressions
//!
//! [`TypeName::parse`] accepts the subset of Java type syntax needed to describe declarations:
//! dotted names, type arguments, wildcards with bounds and array dimensions. Leading
//! lowercase segments of a dotted name are taken as the package.

mod annotation;
mod class_name;
mod code;
mod error;
mod file;
mod parser;
mod spec;
mod type_name;

pub use annotation::{AnnotationSpec, AnnotationValue};
pub use class_name::ClassName;
pub use code::{Expr, Statement};
pub use error::ParseError;
pub use file::JavaFile;
pub use spec::{FieldSpec, MethodSpec, Modifier, ParameterSpec, TypeSpec};
pub use type_name::{Primitive, TypeName, Wildcard};
