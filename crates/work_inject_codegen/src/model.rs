// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The input model: what the host discovered in one processing round.
//!
//! Hosts describe each round with serde descriptors (usually deserialized from JSON), which
//! [`Round::from_descriptor`] checks and converts into the immutable entities the validators
//! work on. Identifiers and type expressions are checked here, so everything downstream can
//! rely on well-formed names.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use java_source::{AnnotationSpec, AnnotationValue, ClassName, TypeName};
use serde::{Deserialize, Serialize};

use crate::diagnostic::SourceLocation;
use crate::naming::is_java_identifier;
use crate::{Error, Result, names};

/// Declared accessibility of a class or constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// No access modifier.
    #[default]
    Package,
    /// `private`
    Private,
}

/// Everything the host discovered in one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoundDescriptor {
    /// Classes with `@WorkerInject` constructors, plus any other classes whose supertypes
    /// the host wants to make known.
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,
    /// Classes annotated `@WorkerModule`.
    #[serde(default)]
    pub modules: Vec<ModuleDescriptor>,
}

impl RoundDescriptor {
    /// Deserializes a round description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not a valid round description.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Json)
    }
}

/// One class a nested class is declared in, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnclosingDescriptor {
    /// Simple name of the enclosing class.
    pub name: String,
    /// Declared visibility of the enclosing class.
    #[serde(default)]
    pub visibility: Visibility,
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDescriptor {
    /// Dotted package name; empty for the default package.
    #[serde(default)]
    pub package: String,
    /// Classes the class is nested in, outermost first.
    #[serde(default)]
    pub enclosing: Vec<EnclosingDescriptor>,
    /// Simple name of the class.
    pub name: String,
    /// Declared visibility.
    #[serde(default)]
    pub visibility: Visibility,
    /// Whether a nested class is declared `static`.
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Declared superclass and interfaces as type expressions.
    #[serde(default)]
    pub supertypes: Vec<String>,
    /// Where the class is declared.
    pub location: SourceLocation,
    /// Declared constructors.
    #[serde(default)]
    pub constructors: Vec<ConstructorDescriptor>,
}

/// A constructor declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorDescriptor {
    /// Declared visibility.
    #[serde(default)]
    pub visibility: Visibility,
    /// Whether the constructor is annotated `@WorkerInject`. Other constructors are ignored.
    #[serde(default)]
    pub worker_inject: bool,
    /// Defaults to the location of the class.
    #[serde(default)]
    pub location: Option<SourceLocation>,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

/// A constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDescriptor {
    /// Declared name.
    pub name: String,
    /// Declared type as a Java type expression.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the parameter is annotated `@Assisted`.
    #[serde(default)]
    pub assisted: bool,
    /// Qualifier annotation, if any.
    #[serde(default)]
    pub qualifier: Option<QualifierDescriptor>,
}

/// A qualifier annotation such as `@Named("foo")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QualifierDescriptor {
    /// The annotation type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// The string `value` member, if any.
    #[serde(default)]
    pub value: Option<String>,
}

/// A class annotated `@WorkerModule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleDescriptor {
    /// Dotted package name; empty for the default package.
    #[serde(default)]
    pub package: String,
    /// Classes the module is nested in, outermost first.
    #[serde(default)]
    pub enclosing: Vec<EnclosingDescriptor>,
    /// Simple name of the module.
    pub name: String,
    /// Declared visibility.
    #[serde(default)]
    pub visibility: Visibility,
    /// The Dagger `@Module` annotation on the same class, if any.
    #[serde(default)]
    pub dagger_module: Option<DaggerModuleDescriptor>,
    /// Where the module is declared.
    pub location: SourceLocation,
}

/// A Dagger `@Module` annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaggerModuleDescriptor {
    /// The `includes` member as written; references to classes that are not generated yet
    /// are unqualified.
    #[serde(default)]
    pub includes: Vec<String>,
}

/// Who supplies a constructor argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Passed to `WorkFactory.create` (`@Assisted`).
    CallerSupplied,
    /// Resolved from the dependency graph through a provider.
    InjectorSupplied,
}

/// A qualifier annotation on a constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Qualifier {
    annotation_type: ClassName,
    value: Option<String>,
}

impl Qualifier {
    /// A qualifier annotation with an optional `value` member.
    #[must_use]
    pub fn new(annotation_type: ClassName, value: Option<String>) -> Self {
        Self { annotation_type, value }
    }

    /// The qualifier annotation type.
    #[must_use]
    pub const fn annotation_type(&self) -> &ClassName {
        &self.annotation_type
    }

    /// The string `value` member, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub(crate) fn annotation_spec(&self) -> AnnotationSpec {
        let annotation = AnnotationSpec::marker(self.annotation_type.clone());
        match &self.value {
            Some(value) => annotation.with_member("value", AnnotationValue::String(value.clone())),
            None => annotation,
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.annotation_type)?;
        if let Some(value) = &self.value {
            write!(f, "(\"{value}\")")?;
        }
        Ok(())
    }
}

/// One constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    type_name: TypeName,
    role: Role,
    qualifier: Option<Qualifier>,
}

impl Parameter {
    /// A parameter named `name` of `type_name`.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: TypeName, role: Role) -> Self {
        Self {
            name: name.into(),
            type_name,
            role,
            qualifier: None,
        }
    }

    /// Attaches a qualifier annotation.
    #[must_use]
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = Some(qualifier);
        self
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type.
    #[must_use]
    pub const fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    /// Who supplies the argument.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// The qualifier annotation, if any.
    #[must_use]
    pub const fn qualifier(&self) -> Option<&Qualifier> {
        self.qualifier.as_ref()
    }

    /// Whether the argument comes from the caller of the factory.
    #[must_use]
    pub fn is_caller_supplied(&self) -> bool {
        self.role == Role::CallerSupplied
    }

    /// The parameter as it appears in diagnostics: qualifier, fully qualified type and name,
    /// e.g. `android.content.Context context`.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(qualifier) = &self.qualifier {
            write!(f, "{qualifier} ")?;
        }
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// A `@WorkerInject` constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectConstructor {
    pub(crate) visibility: Visibility,
    pub(crate) location: SourceLocation,
    pub(crate) parameters: Vec<Parameter>,
}

impl InjectConstructor {
    /// Parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Where the constructor is declared.
    #[must_use]
    pub const fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// A class as discovered by the host, with its `@WorkerInject` constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerCandidate {
    pub(crate) class_name: ClassName,
    pub(crate) visibility: Visibility,
    /// Visibility of each enclosing class, outermost first.
    pub(crate) enclosing_visibility: Vec<Visibility>,
    pub(crate) is_static: bool,
    pub(crate) supertypes: Vec<ClassName>,
    pub(crate) location: SourceLocation,
    pub(crate) constructors: Vec<InjectConstructor>,
}

impl WorkerCandidate {
    /// The annotated class.
    #[must_use]
    pub const fn class_name(&self) -> &ClassName {
        &self.class_name
    }

    /// Where the class is declared.
    #[must_use]
    pub const fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// The `@WorkerInject` constructors of the class.
    #[must_use]
    pub fn constructors(&self) -> &[InjectConstructor] {
        &self.constructors
    }

    /// Whether the class has anything to validate.
    #[must_use]
    pub fn is_injected(&self) -> bool {
        !self.constructors.is_empty()
    }
}

/// A class annotated `@WorkerModule`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCandidate {
    pub(crate) class_name: ClassName,
    pub(crate) visibility: Visibility,
    /// The `includes` of the Dagger `@Module` annotation, `None` when the class has none.
    pub(crate) includes: Option<Vec<ClassName>>,
    pub(crate) location: SourceLocation,
}

impl ModuleCandidate {
    /// The module class.
    #[must_use]
    pub const fn class_name(&self) -> &ClassName {
        &self.class_name
    }

    /// Where the module is declared.
    #[must_use]
    pub const fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// The checked contents of one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    pub(crate) classes: Vec<WorkerCandidate>,
    pub(crate) modules: Vec<ModuleCandidate>,
}

impl Round {
    /// Parses and checks a JSON round description.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names something invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_descriptor(&RoundDescriptor::from_json(json)?)
    }

    /// Checks a round description and converts it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Model`] for invalid identifiers and [`Error::Type`] for type
    /// expressions that cannot be parsed.
    pub fn from_descriptor(descriptor: &RoundDescriptor) -> Result<Self> {
        Ok(Self {
            classes: descriptor.classes.iter().map(convert_class).collect::<Result<_>>()?,
            modules: descriptor.modules.iter().map(convert_module).collect::<Result<_>>()?,
        })
    }

    /// Classes with `@WorkerInject` constructors.
    #[must_use]
    pub fn classes(&self) -> &[WorkerCandidate] {
        &self.classes
    }

    /// Classes annotated `@WorkerModule`.
    #[must_use]
    pub fn modules(&self) -> &[ModuleCandidate] {
        &self.modules
    }
}

impl TryFrom<&RoundDescriptor> for Round {
    type Error = Error;

    fn try_from(descriptor: &RoundDescriptor) -> Result<Self> {
        Self::from_descriptor(descriptor)
    }
}

fn convert_class(descriptor: &ClassDescriptor) -> Result<WorkerCandidate> {
    let class_name = declared_class_name(&descriptor.package, &descriptor.enclosing, &descriptor.name)?;
    let element = format!("class {class_name}");

    let supertypes = descriptor
        .supertypes
        .iter()
        .map(|supertype| parse_class(supertype, &format!("supertype of {element}")))
        .collect::<Result<_>>()?;

    let constructors = descriptor
        .constructors
        .iter()
        .filter(|constructor| constructor.worker_inject)
        .map(|constructor| convert_constructor(constructor, &class_name, &descriptor.location))
        .collect::<Result<_>>()?;

    Ok(WorkerCandidate {
        class_name,
        visibility: descriptor.visibility,
        enclosing_visibility: descriptor.enclosing.iter().map(|enclosing| enclosing.visibility).collect(),
        is_static: descriptor.is_static,
        supertypes,
        location: descriptor.location.clone(),
        constructors,
    })
}

fn convert_constructor(
    descriptor: &ConstructorDescriptor,
    owner: &ClassName,
    class_location: &SourceLocation,
) -> Result<InjectConstructor> {
    let parameters = descriptor
        .parameters
        .iter()
        .map(|parameter| convert_parameter(parameter, owner))
        .collect::<Result<_>>()?;

    Ok(InjectConstructor {
        visibility: descriptor.visibility,
        location: descriptor.location.clone().unwrap_or_else(|| class_location.clone()),
        parameters,
    })
}

fn convert_parameter(descriptor: &ParameterDescriptor, owner: &ClassName) -> Result<Parameter> {
    let element = format!("parameter `{}` of {owner}", descriptor.name);
    if !is_java_identifier(&descriptor.name) {
        return Err(Error::model(element, "not a Java identifier"));
    }

    let type_name = TypeName::parse(&descriptor.type_name).map_err(|source| Error::Type {
        element: element.clone(),
        source,
    })?;

    let role = if descriptor.assisted {
        Role::CallerSupplied
    } else {
        Role::InjectorSupplied
    };
    let parameter = Parameter::new(&descriptor.name, type_name, role);

    match &descriptor.qualifier {
        Some(qualifier) => {
            let annotation_type = parse_class(&qualifier.type_name, &format!("qualifier of {element}"))?;
            Ok(parameter.with_qualifier(Qualifier::new(annotation_type, qualifier.value.clone())))
        }
        None => Ok(parameter),
    }
}

fn convert_module(descriptor: &ModuleDescriptor) -> Result<ModuleCandidate> {
    let class_name = declared_class_name(&descriptor.package, &descriptor.enclosing, &descriptor.name)?;
    let element = format!("include of module {class_name}");

    let includes = descriptor
        .dagger_module
        .as_ref()
        .map(|module| {
            module
                .includes
                .iter()
                .map(|include| parse_class(include, &element))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    Ok(ModuleCandidate {
        class_name,
        visibility: descriptor.visibility,
        includes,
        location: descriptor.location.clone(),
    })
}

fn declared_class_name(package: &str, enclosing: &[EnclosingDescriptor], name: &str) -> Result<ClassName> {
    if !package.is_empty() && !package.split('.').all(is_java_identifier) {
        return Err(Error::model(format!("package `{package}`"), "not a valid package name"));
    }

    let simple_names: Vec<&str> = enclosing
        .iter()
        .map(|enclosing| enclosing.name.as_str())
        .chain([name])
        .collect();
    if let Some(invalid) = simple_names.iter().find(|simple_name| !is_java_identifier(simple_name)) {
        return Err(Error::model(format!("class name `{invalid}`"), "not a Java identifier"));
    }

    ClassName::from_parts(package, simple_names).ok_or_else(|| Error::model("class", "missing name"))
}

/// Parses a reference to a class, ignoring any type arguments.
fn parse_class(text: &str, element: &str) -> Result<ClassName> {
    let type_name = TypeName::parse(text).map_err(|source| Error::Type {
        element: element.to_string(),
        source,
    })?;

    type_name
        .raw_class()
        .cloned()
        .ok_or_else(|| Error::model(element, format!("`{text}` is not a class")))
}

/// Supertypes of every class seen in a run, for resolving indirect `ListenableWorker`
/// subclasses.
#[derive(Debug, Clone)]
pub(crate) struct TypeHierarchy {
    supertypes: BTreeMap<ClassName, BTreeSet<ClassName>>,
}

impl TypeHierarchy {
    pub(crate) fn new() -> Self {
        let base: BTreeSet<_> = [names::listenable_worker()].into_iter().collect();
        let supertypes = names::framework_workers()
            .into_iter()
            .map(|worker| (worker, base.clone()))
            .collect();

        Self { supertypes }
    }

    pub(crate) fn record(&mut self, class_name: &ClassName, supertypes: &[ClassName]) {
        self.supertypes
            .entry(class_name.clone())
            .or_default()
            .extend(supertypes.iter().cloned());
    }

    /// Whether `class_name` is `base` or reaches it through recorded supertypes.
    pub(crate) fn is_subtype(&self, class_name: &ClassName, base: &ClassName) -> bool {
        let mut visited = BTreeSet::new();
        let mut pending = vec![class_name];

        while let Some(current) = pending.pop() {
            if current == base {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(supertypes) = self.supertypes.get(current) {
                pending.extend(supertypes);
            }
        }

        false
    }
}

impl Default for TypeHierarchy {
    fn default() -> Self {
        Self::new()
    }
}
