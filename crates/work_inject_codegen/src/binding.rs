// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeSet;

use java_source::{AnnotationSpec, AnnotationValue, JavaFile, MethodSpec, Modifier, ParameterSpec, TypeSpec};

use crate::inject::InjectionTarget;
use crate::module::ModuleTarget;
use crate::names;
use crate::naming::{NestingStyle, bind_method_name, binding_key, factory_name};

/// Generates the abstract Dagger module that binds every target's factory into the
/// `Map<String, WorkFactory>` keyed by worker class name.
///
/// Bindings are ordered by key, so the output does not depend on discovery order.
pub(crate) fn synthesize<'a>(
    module: &ModuleTarget,
    targets: impl IntoIterator<Item = &'a InjectionTarget>,
    style: NestingStyle,
    marker: Option<&AnnotationSpec>,
) -> JavaFile {
    let name = module.generated_name();

    let mut type_spec = TypeSpec::class(name.simple_name()).with_annotation(AnnotationSpec::marker(names::dagger_module()));
    if let Some(marker) = marker {
        type_spec = type_spec.with_annotation(marker.clone());
    }
    type_spec = type_spec
        .with_modifiers([Modifier::Abstract])
        .with_method(MethodSpec::constructor().with_modifiers([Modifier::Private]));
    if module.is_public() {
        type_spec = type_spec.with_modifiers([Modifier::Public]);
    }

    let mut keyed: Vec<_> = targets
        .into_iter()
        .map(|target| (binding_key(target.owner(), style), target))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| left.cmp(right));

    let mut method_names = BTreeSet::new();
    for (key, target) in &keyed {
        let method_name = unique_method_name(bind_method_name(key), &mut method_names);
        type_spec = type_spec.with_method(
            MethodSpec::method(method_name)
                .with_annotation(AnnotationSpec::marker(names::binds()))
                .with_annotation(AnnotationSpec::marker(names::into_map()))
                .with_annotation(
                    AnnotationSpec::marker(names::string_key()).with_member("value", AnnotationValue::String(key.clone())),
                )
                .with_modifiers([Modifier::Abstract])
                .returns(names::work_factory().into())
                .with_parameter(ParameterSpec::new(factory_name(target.owner(), style).into(), "factory")),
        );
    }

    tracing::event!(
        name: "work_inject.module",
        tracing::Level::INFO,
        module = %name,
        owner = %module.owner(),
        bindings = keyed.len(),
    );

    JavaFile::new(name.package(), type_spec)
}

/// Keys are unique, but sanitizing can map two keys to one name (`a.b.C` and `a_b.C`).
fn unique_method_name(candidate: String, taken: &mut BTreeSet<String>) -> String {
    if taken.insert(candidate.clone()) {
        return candidate;
    }

    (2..)
        .map(|suffix| format!("{candidate}_{suffix}"))
        .find(|name| taken.insert(name.clone()))
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_collisions_get_suffixes() {
        let mut taken = BTreeSet::new();

        assert_eq!(unique_method_name("bind_a_b_C".to_string(), &mut taken), "bind_a_b_C");
        assert_eq!(unique_method_name("bind_a_b_C".to_string(), &mut taken), "bind_a_b_C_2");
        assert_eq!(unique_method_name("bind_a_b_C".to_string(), &mut taken), "bind_a_b_C_3");
        assert_eq!(unique_method_name("bind_d".to_string(), &mut taken), "bind_d");
    }
}
