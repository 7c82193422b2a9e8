// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use crate::{ClassName, ParseError};

/// A Java primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Primitive {
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `char`
    Char,
    /// `float`
    Float,
    /// `double`
    Double,
}

impl Primitive {
    /// Looks up a primitive by its keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "short" => Self::Short,
            "int" => Self::Int,
            "long" => Self::Long,
            "char" => Self::Char,
            "float" => Self::Float,
            "double" => Self::Double,
            _ => return None,
        })
    }

    /// The Java keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// The `java.lang` wrapper class of this primitive.
    #[must_use]
    pub fn boxed(self) -> ClassName {
        let simple_name = match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::Char => "Character",
            Self::Float => "Float",
            Self::Double => "Double",
        };

        ClassName::new("java.lang", simple_name)
    }
}

/// A type argument wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wildcard {
    /// `?`
    Unbounded,
    /// `? extends T`
    Extends(Box<TypeName>),
    /// `? super T`
    Super(Box<TypeName>),
}

/// Any Java type that can appear in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeName {
    /// A primitive type such as `long`.
    Primitive(Primitive),
    /// A non-generic class.
    Class(ClassName),
    /// A generic class applied to type arguments, e.g. `java.util.List<java.lang.String>`.
    Parameterized {
        /// The generic class.
        raw: ClassName,
        /// Type arguments in order.
        arguments: Vec<TypeName>,
    },
    /// An array of the element type.
    Array(Box<TypeName>),
    /// Only valid as a type argument.
    Wildcard(Wildcard),
}

impl TypeName {
    /// Parses a Java type expression, e.g. `java.util.Map<java.lang.String, int[]>`.
    ///
    /// # Errors
    ///
    /// Returns an error describing every problem the parser found.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        crate::parser::parse_type(text)
    }

    /// `raw<arguments...>`.
    #[must_use]
    pub fn parameterized(raw: ClassName, arguments: impl IntoIterator<Item = Self>) -> Self {
        Self::Parameterized {
            raw,
            arguments: arguments.into_iter().collect(),
        }
    }

    /// Replaces a primitive with its wrapper class; other types are returned unchanged.
    #[must_use]
    pub fn boxed(self) -> Self {
        match self {
            Self::Primitive(primitive) => Self::Class(primitive.boxed()),
            other => other,
        }
    }

    /// Whether this is a primitive type.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// The raw class of a class or parameterized type.
    #[must_use]
    pub const fn raw_class(&self) -> Option<&ClassName> {
        match self {
            Self::Class(class_name) | Self::Parameterized { raw: class_name, .. } => Some(class_name),
            _ => None,
        }
    }

    /// The single type argument if this is `raw<T>`.
    #[must_use]
    pub fn single_argument_of(&self, raw: &ClassName) -> Option<&Self> {
        match self {
            Self::Parameterized { raw: actual, arguments } if actual == raw && arguments.len() == 1 => arguments.first(),
            _ => None,
        }
    }

    /// Visits every class referenced by this type, including type arguments and bounds.
    pub fn visit_classes<'a>(&'a self, visit: &mut impl FnMut(&'a ClassName)) {
        match self {
            Self::Primitive(_) | Self::Wildcard(Wildcard::Unbounded) => {}
            Self::Class(class_name) => visit(class_name),
            Self::Parameterized { raw, arguments } => {
                visit(raw);
                for argument in arguments {
                    argument.visit_classes(visit);
                }
            }
            Self::Array(component) | Self::Wildcard(Wildcard::Extends(component) | Wildcard::Super(component)) => {
                component.visit_classes(visit);
            }
        }
    }

    /// Renders the type, naming classes through `class_name`.
    pub(crate) fn write_with(&self, f: &mut impl fmt::Write, class_name: &impl Fn(&ClassName) -> String) -> fmt::Result {
        match self {
            Self::Primitive(primitive) => f.write_str(primitive.keyword()),
            Self::Class(raw) => f.write_str(&class_name(raw)),
            Self::Parameterized { raw, arguments } => {
                f.write_str(&class_name(raw))?;
                f.write_char('<')?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    argument.write_with(f, class_name)?;
                }
                f.write_char('>')
            }
            Self::Array(component) => {
                component.write_with(f, class_name)?;
                f.write_str("[]")
            }
            Self::Wildcard(Wildcard::Unbounded) => f.write_char('?'),
            Self::Wildcard(Wildcard::Extends(bound)) => {
                f.write_str("? extends ")?;
                bound.write_with(f, class_name)
            }
            Self::Wildcard(Wildcard::Super(bound)) => {
                f.write_str("? super ")?;
                bound.write_with(f, class_name)
            }
        }
    }
}

impl From<ClassName> for TypeName {
    fn from(class_name: ClassName) -> Self {
        Self::Class(class_name)
    }
}

impl From<Primitive> for TypeName {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

/// Renders the type with every class fully qualified.
impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &ClassName::canonical_name)
    }
}
