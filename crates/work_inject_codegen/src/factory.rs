// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use java_source::{
    AnnotationSpec, ClassName, Expr, FieldSpec, JavaFile, MethodSpec, Modifier, ParameterSpec, Statement, TypeName, TypeSpec,
};

use crate::inject::{InjectionTarget, required_parameters};
use crate::model::Parameter;
use crate::names;
use crate::naming::{NestingStyle, factory_name};

/// How an injector-supplied parameter is requested from the graph and handed to the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    /// `T`: the provider is invoked when the worker is created.
    Instance,
    /// `Provider<T>`: the provider itself is passed.
    Provider,
    /// `Lazy<T>`: the provider is wrapped in a memoizing `Lazy`.
    Lazy,
}

impl Request {
    /// Classifies a parameter type and returns the type the provider field provides.
    fn classify(type_name: &TypeName) -> (Self, TypeName) {
        if let Some(provided) = type_name.single_argument_of(&names::provider()) {
            return (Self::Provider, provided.clone());
        }
        if let Some(provided) = type_name.single_argument_of(&names::lazy()) {
            return (Self::Lazy, provided.clone());
        }
        (Self::Instance, type_name.clone().boxed())
    }

    fn argument(self, field: &str) -> Expr {
        match self {
            Self::Instance => Expr::call0(Expr::name(field), "get"),
            Self::Provider => Expr::name(field),
            Self::Lazy => Expr::StaticCall {
                owner: names::double_check(),
                method: "lazy".to_string(),
                args: vec![Expr::name(field)],
            },
        }
    }
}

/// Generates `<Owner>_AssistedFactory`, which implements `WorkFactory` by calling the worker
/// constructor with the caller's `Context` and `WorkerParameters` and everything else taken
/// from injected providers.
pub(crate) fn synthesize(target: &InjectionTarget, style: NestingStyle, marker: Option<&AnnotationSpec>) -> JavaFile {
    let name = factory_name(target.owner(), style);

    let mut type_spec = TypeSpec::class(name.simple_name())
        .with_modifiers([Modifier::Public, Modifier::Final])
        .with_superinterface(names::work_factory().into());
    if let Some(marker) = marker {
        type_spec = type_spec.with_annotation(marker.clone());
    }

    let mut constructor = MethodSpec::constructor()
        .with_annotation(AnnotationSpec::marker(names::inject()))
        .with_modifiers([Modifier::Public]);
    let mut arguments = Vec::with_capacity(target.parameters().len());

    for parameter in target.parameters() {
        if parameter.is_caller_supplied() {
            arguments.push(Expr::name(parameter.name()));
            continue;
        }

        let (request, provided) = Request::classify(parameter.type_name());
        let provider_type = TypeName::parameterized(names::provider(), [provided]);

        type_spec = type_spec.with_field(FieldSpec::new(
            provider_type.clone(),
            parameter.name(),
            [Modifier::Private, Modifier::Final],
        ));
        constructor = constructor
            .with_parameter(provider_parameter(parameter, provider_type))
            .with_statement(Statement::Assign {
                target: Expr::ThisField(parameter.name().to_string()),
                value: Expr::name(parameter.name()),
            });
        arguments.push(request.argument(parameter.name()));
    }

    let mut create = MethodSpec::method("create")
        .with_annotation(AnnotationSpec::marker(names::java_override()))
        .with_modifiers([Modifier::Public])
        .returns(names::listenable_worker().into());
    for required in required_parameters() {
        create = create.with_parameter(ParameterSpec::new(required.type_name().clone(), required.name()));
    }
    let create = create.with_statement(Statement::Return(Expr::New {
        class_name: target.owner().clone(),
        args: arguments,
    }));

    let type_spec = type_spec.with_method(constructor).with_method(create);
    log_generated(&name, target.owner());

    JavaFile::new(name.package(), type_spec)
}

fn provider_parameter(parameter: &Parameter, provider_type: TypeName) -> ParameterSpec {
    let spec = ParameterSpec::new(provider_type, parameter.name());
    match parameter.qualifier() {
        Some(qualifier) => spec.with_annotation(qualifier.annotation_spec()),
        None => spec,
    }
}

fn log_generated(name: &ClassName, owner: &ClassName) {
    tracing::event!(
        name: "work_inject.factory",
        tracing::Level::INFO,
        factory = %name,
        owner = %owner,
    );
}
