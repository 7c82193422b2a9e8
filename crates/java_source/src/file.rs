// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Write as _};
use std::path::PathBuf;

use crate::annotation::string_literal;
use crate::spec::modifiers_prefix;
use crate::{AnnotationSpec, AnnotationValue, ClassName, MethodSpec, TypeSpec};

const INDENT: &str = "  ";

/// A top-level class together with the package it is declared in.
///
/// Rendering is deterministic: imports are sorted, `java.lang` and same-package classes are
/// never imported, and a class whose simple name clashes with another referenced class (or
/// with the declared class itself) is written fully qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaFile {
    package: String,
    type_spec: TypeSpec,
}

impl JavaFile {
    /// A file declaring `type_spec` in `package`.
    #[must_use]
    pub fn new(package: impl Into<String>, type_spec: TypeSpec) -> Self {
        Self {
            package: package.into(),
            type_spec,
        }
    }

    /// The package of the declared type.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The declared top-level type.
    #[must_use]
    pub const fn type_spec(&self) -> &TypeSpec {
        &self.type_spec
    }

    /// The name of the declared class.
    #[must_use]
    pub fn class_name(&self) -> ClassName {
        ClassName::new(self.package.clone(), self.type_spec.name())
    }

    /// Path of the source file relative to a source root, e.g. `test/TestWorker_AssistedFactory.java`.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').filter(|segment| !segment.is_empty()).collect();
        path.push(format!("{}.java", self.type_spec.name()));
        path
    }

    /// Canonical names of the classes this file imports, sorted.
    #[must_use]
    pub fn imports(&self) -> Vec<String> {
        Imports::resolve(&self.package, &self.type_spec).imports.into_iter().collect()
    }
}

impl fmt::Display for JavaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let imports = Imports::resolve(&self.package, &self.type_spec);
        let name_of = |class_name: &ClassName| imports.name_of(class_name);

        if !self.package.is_empty() {
            writeln!(f, "package {};", self.package)?;
            writeln!(f)?;
        }

        if !imports.imports.is_empty() {
            for import in &imports.imports {
                writeln!(f, "import {import};")?;
            }
            writeln!(f)?;
        }

        let type_spec = &self.type_spec;
        for annotation in &type_spec.annotations {
            writeln!(f, "{}", render_annotation(annotation, &name_of, "", false))?;
        }

        write!(f, "{}class {}", modifiers_prefix(&type_spec.modifiers), type_spec.name)?;
        if !type_spec.superinterfaces.is_empty() {
            let mut interfaces = String::new();
            for (index, superinterface) in type_spec.superinterfaces.iter().enumerate() {
                if index > 0 {
                    interfaces.push_str(", ");
                }
                superinterface.write_with(&mut interfaces, &name_of)?;
            }
            write!(f, " implements {interfaces}")?;
        }
        writeln!(f, " {{")?;

        for field in &type_spec.fields {
            let mut type_name = String::new();
            field.type_name.write_with(&mut type_name, &name_of)?;
            writeln!(f, "{INDENT}{}{type_name} {};", modifiers_prefix(&field.modifiers), field.name)?;
        }

        for (index, method) in type_spec.methods.iter().enumerate() {
            if index > 0 || !type_spec.fields.is_empty() {
                writeln!(f)?;
            }
            write_method(f, method, &type_spec.name, &name_of)?;
        }

        writeln!(f, "}}")
    }
}

fn write_method(
    f: &mut fmt::Formatter<'_>,
    method: &MethodSpec,
    type_name: &str,
    name_of: &impl Fn(&ClassName) -> String,
) -> fmt::Result {
    for annotation in &method.annotations {
        writeln!(f, "{INDENT}{}", render_annotation(annotation, name_of, INDENT, false))?;
    }

    let mut signature = modifiers_prefix(&method.modifiers);
    match &method.name {
        Some(name) => {
            match &method.returns {
                Some(returns) => returns.write_with(&mut signature, name_of)?,
                None => signature.push_str("void"),
            }
            write!(signature, " {name}")?;
        }
        None => signature.push_str(type_name),
    }

    signature.push('(');
    for (index, parameter) in method.parameters.iter().enumerate() {
        if index > 0 {
            signature.push_str(", ");
        }
        for annotation in &parameter.annotations {
            signature.push_str(&render_annotation(annotation, name_of, "", true));
            signature.push(' ');
        }
        parameter.type_name.write_with(&mut signature, name_of)?;
        write!(signature, " {}", parameter.name)?;
    }
    signature.push(')');

    match &method.body {
        None => writeln!(f, "{INDENT}{signature};"),
        Some(statements) => {
            writeln!(f, "{INDENT}{signature} {{")?;
            for statement in statements {
                writeln!(f, "{INDENT}{INDENT}{}", statement.render(name_of))?;
            }
            writeln!(f, "{INDENT}}}")
        }
    }
}

/// Renders an annotation. Multi-member annotations outside parameter lists are spread over
/// several lines, one member per line.
fn render_annotation(annotation: &AnnotationSpec, name_of: &impl Fn(&ClassName) -> String, indent: &str, inline: bool) -> String {
    let name = name_of(annotation.annotation_type());
    let members = annotation.members();

    match members {
        [] => format!("@{name}"),
        [(member, value)] if member == "value" => format!("@{name}({})", render_value(value, name_of)),
        _ if inline => {
            let members: Vec<_> = members
                .iter()
                .map(|(member, value)| format!("{member} = {}", render_value(value, name_of)))
                .collect();
            format!("@{name}({})", members.join(", "))
        }
        _ => {
            let members: Vec<_> = members
                .iter()
                .map(|(member, value)| format!("{indent}{INDENT}{INDENT}{member} = {}", render_value(value, name_of)))
                .collect();
            format!("@{name}(\n{}\n{indent})", members.join(",\n"))
        }
    }
}

fn render_value(value: &AnnotationValue, name_of: &impl Fn(&ClassName) -> String) -> String {
    match value {
        AnnotationValue::String(text) => string_literal(text),
        AnnotationValue::Class(class_name) => format!("{}.class", name_of(class_name)),
        AnnotationValue::Literal(text) => text.clone(),
    }
}

/// Decides which referenced classes are imported and how every class is written.
#[derive(Debug)]
struct Imports {
    /// Top-level classes that may be written by simple name, keyed by that name.
    resolved: BTreeMap<String, ClassName>,
    imports: BTreeSet<String>,
}

impl Imports {
    fn resolve(package: &str, type_spec: &TypeSpec) -> Self {
        let declared = ClassName::new(package, type_spec.name());

        let mut by_simple_name: BTreeMap<String, BTreeSet<ClassName>> = BTreeMap::new();
        type_spec.visit_classes(&mut |class_name| {
            let top_level = class_name.top_level_class_name();
            by_simple_name
                .entry(top_level.simple_name().to_string())
                .or_default()
                .insert(top_level);
        });

        let mut resolved = BTreeMap::new();
        let mut imports = BTreeSet::new();

        for (simple_name, candidates) in by_simple_name {
            // The declared class shadows every other class with its name.
            if simple_name == declared.simple_name() {
                if candidates.contains(&declared) {
                    resolved.insert(simple_name, declared.clone());
                }
                continue;
            }

            let Some(chosen) = candidates
                .iter()
                .find(|candidate| candidate.package() == package)
                .or_else(|| candidates.first())
                .cloned()
            else {
                continue;
            };

            if chosen.package() != package && chosen.package() != "java.lang" && !chosen.package().is_empty() {
                imports.insert(chosen.canonical_name());
            }
            resolved.insert(simple_name, chosen);
        }

        Self { resolved, imports }
    }

    fn name_of(&self, class_name: &ClassName) -> String {
        let top_level = class_name.top_level_class_name();
        if self.resolved.get(top_level.simple_name()) == Some(&top_level) {
            class_name.simple_names().join(".")
        } else {
            class_name.canonical_name()
        }
    }
}
