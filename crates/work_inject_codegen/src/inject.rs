// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use java_source::{ClassName, TypeName};

use crate::diagnostic::{Diagnostics, SourceLocation};
use crate::model::{Parameter, Role, TypeHierarchy, Visibility, WorkerCandidate};
use crate::names::{self, ASSISTED, WORKER_INJECT, simple_name};

/// A validated `@WorkerInject` constructor, ready for factory generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionTarget {
    owner: ClassName,
    parameters: Vec<Parameter>,
    location: SourceLocation,
}

impl InjectionTarget {
    /// The worker class.
    #[must_use]
    pub const fn owner(&self) -> &ClassName {
        &self.owner
    }

    /// Constructor parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Parameters resolved from the dependency graph, in declaration order.
    pub fn injector_supplied(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|parameter| !parameter.is_caller_supplied())
    }

    /// Location of the worker class.
    #[must_use]
    pub const fn location(&self) -> &SourceLocation {
        &self.location
    }
}

/// The caller-supplied parameters every worker constructor must declare, in the order
/// `WorkFactory.create` passes them.
pub(crate) fn required_parameters() -> [Parameter; 2] {
    [
        Parameter::new("context", TypeName::Class(names::context()), Role::CallerSupplied),
        Parameter::new("workerParameters", TypeName::Class(names::worker_parameters()), Role::CallerSupplied),
    ]
}

/// Checks a worker class against every rule and reports all violations.
///
/// Returns a target only if no error was reported for the class.
pub(crate) fn validate(
    candidate: &WorkerCandidate,
    hierarchy: &TypeHierarchy,
    diagnostics: &mut Diagnostics,
) -> Option<InjectionTarget> {
    let annotation = simple_name(WORKER_INJECT);
    let errors_before = diagnostics.error_count();

    if candidate.constructors.len() > 1 {
        diagnostics.error(
            format!("Multiple @{annotation}-annotated constructors found."),
            &candidate.location,
        );
    }

    for constructor in &candidate.constructors {
        if constructor.visibility == Visibility::Private {
            diagnostics.error(format!("@{annotation} constructor must not be private."), &constructor.location);
        }
    }

    if candidate.visibility == Visibility::Private || candidate.enclosing_visibility.contains(&Visibility::Private) {
        diagnostics.error(format!("@{annotation}-using types must not be private"), &candidate.location);
    }

    if candidate.class_name.is_nested() && !candidate.is_static {
        diagnostics.error(format!("Nested @{annotation}-using types must be static"), &candidate.location);
    }

    let base = names::listenable_worker();
    if !hierarchy.is_subtype(&candidate.class_name, &base) {
        diagnostics.error(
            format!("@{annotation}-using types must be subtypes of {base}"),
            &candidate.location,
        );
    }

    for constructor in &candidate.constructors {
        check_assisted_parameters(&constructor.parameters, &constructor.location, diagnostics);

        if constructor.parameters.iter().all(Parameter::is_caller_supplied) {
            diagnostics.warning(
                format!("Worker injection requires at least one non-@{} parameter.", simple_name(ASSISTED)),
                &constructor.location,
            );
        }
    }

    if diagnostics.error_count() > errors_before {
        return None;
    }

    let constructor = candidate.constructors.first()?;
    tracing::event!(
        name: "work_inject.target",
        tracing::Level::DEBUG,
        owner = %candidate.class_name,
        parameters = constructor.parameters.len(),
    );

    Some(InjectionTarget {
        owner: candidate.class_name.clone(),
        parameters: constructor.parameters.clone(),
        location: candidate.location.clone(),
    })
}

/// The caller-supplied parameters must be exactly the required pair, matched by type and
/// name, in either order and anywhere in the parameter list.
fn check_assisted_parameters(parameters: &[Parameter], location: &SourceLocation, diagnostics: &mut Diagnostics) {
    let found: Vec<String> = parameters
        .iter()
        .filter(|parameter| parameter.is_caller_supplied())
        .map(Parameter::key)
        .collect();
    let expected: Vec<String> = required_parameters().iter().map(Parameter::key).collect();

    let matches = found.len() == expected.len() && expected.iter().all(|key| found.contains(key));
    if !matches {
        diagnostics.error(
            format!(
                "Worker injection requires Context and WorkerParameters @{} parameters.\n    Found:\n      [{}]\n    Expected:\n      [{}]",
                simple_name(ASSISTED),
                found.join(", "),
                expected.join(", ")
            ),
            location,
        );
    }
}
