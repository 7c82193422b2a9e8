// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeSet;

use crate::{AnnotationSpec, ClassName, Statement, TypeName};

/// Declaration modifiers, ordered the way the Java style guide orders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `abstract`
    Abstract,
    /// `static`
    Static,
    /// `final`
    Final,
}

impl Modifier {
    /// The Java keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Final => "final",
        }
    }
}

pub(crate) fn modifiers_prefix(modifiers: &BTreeSet<Modifier>) -> String {
    modifiers.iter().map(|modifier| format!("{} ", modifier.keyword())).collect()
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub(crate) modifiers: BTreeSet<Modifier>,
    pub(crate) type_name: TypeName,
    pub(crate) name: String,
}

impl FieldSpec {
    /// A field of `type_name` with the given modifiers.
    #[must_use]
    pub fn new(type_name: TypeName, name: impl Into<String>, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            modifiers: modifiers.into_iter().collect(),
            type_name,
            name: name.into(),
        }
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field type.
    #[must_use]
    pub const fn type_name(&self) -> &TypeName {
        &self.type_name
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub(crate) annotations: Vec<AnnotationSpec>,
    pub(crate) type_name: TypeName,
    pub(crate) name: String,
}

impl ParameterSpec {
    /// A parameter of `type_name` named `name`.
    #[must_use]
    pub fn new(type_name: TypeName, name: impl Into<String>) -> Self {
        Self {
            annotations: Vec::new(),
            type_name,
            name: name.into(),
        }
    }

    /// Adds an annotation, such as a qualifier.
    #[must_use]
    pub fn with_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter type.
    #[must_use]
    pub const fn type_name(&self) -> &TypeName {
        &self.type_name
    }
}

/// A method or constructor. Abstract methods have no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// `None` for constructors.
    pub(crate) name: Option<String>,
    pub(crate) annotations: Vec<AnnotationSpec>,
    pub(crate) modifiers: BTreeSet<Modifier>,
    pub(crate) returns: Option<TypeName>,
    pub(crate) parameters: Vec<ParameterSpec>,
    pub(crate) body: Option<Vec<Statement>>,
}

impl MethodSpec {
    /// A method with an empty body returning `void`.
    #[must_use]
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            returns: None,
            parameters: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    /// A constructor with an empty body.
    #[must_use]
    pub fn constructor() -> Self {
        Self {
            name: None,
            ..Self::method("")
        }
    }

    /// Adds an annotation to the method.
    #[must_use]
    pub fn with_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Adds modifiers; adding [`Modifier::Abstract`] removes the body.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        if self.modifiers.contains(&Modifier::Abstract) {
            self.body = None;
        }
        self
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, type_name: TypeName) -> Self {
        self.returns = Some(type_name);
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends a statement to the body. Has no effect on abstract methods.
    #[must_use]
    pub fn with_statement(mut self, statement: Statement) -> Self {
        if let Some(body) = &mut self.body {
            body.push(statement);
        }
        self
    }

    /// The method name, or `None` for a constructor.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Whether this is a constructor.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name.is_none()
    }

    pub(crate) fn visit_classes<'a>(&'a self, visit: &mut impl FnMut(&'a ClassName)) {
        for annotation in &self.annotations {
            annotation.visit_classes(visit);
        }
        if let Some(returns) = &self.returns {
            returns.visit_classes(visit);
        }
        for parameter in &self.parameters {
            for annotation in &parameter.annotations {
                annotation.visit_classes(visit);
            }
            parameter.type_name.visit_classes(visit);
        }
        for statement in self.body.iter().flatten() {
            statement.visit_classes(visit);
        }
    }
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub(crate) name: String,
    pub(crate) annotations: Vec<AnnotationSpec>,
    pub(crate) modifiers: BTreeSet<Modifier>,
    pub(crate) superinterfaces: Vec<TypeName>,
    pub(crate) fields: Vec<FieldSpec>,
    pub(crate) methods: Vec<MethodSpec>,
}

impl TypeSpec {
    /// An empty class declaration named `name`.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            modifiers: BTreeSet::new(),
            superinterfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Adds an annotation to the class.
    #[must_use]
    pub fn with_annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Adds modifiers to the class.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Adds an implemented interface.
    #[must_use]
    pub fn with_superinterface(mut self, type_name: TypeName) -> Self {
        self.superinterfaces.push(type_name);
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a method or constructor.
    #[must_use]
    pub fn with_method(mut self, method: MethodSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// The simple name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Annotations in declaration order.
    #[must_use]
    pub fn annotations(&self) -> &[AnnotationSpec] {
        &self.annotations
    }

    /// Whether the class carries `modifier`.
    #[must_use]
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Methods and constructors in declaration order.
    #[must_use]
    pub fn methods(&self) -> &[MethodSpec] {
        &self.methods
    }

    pub(crate) fn visit_classes<'a>(&'a self, visit: &mut impl FnMut(&'a ClassName)) {
        for annotation in &self.annotations {
            annotation.visit_classes(visit);
        }
        for superinterface in &self.superinterfaces {
            superinterface.visit_classes(visit);
        }
        for field in &self.fields {
            field.type_name.visit_classes(visit);
        }
        for method in &self.methods {
            method.visit_classes(visit);
        }
    }
}
