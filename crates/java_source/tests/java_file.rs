// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "This is a test module")]

//! Rendering of complete Java source files.

use java_source::{
    AnnotationSpec, AnnotationValue, ClassName, Expr, FieldSpec, JavaFile, MethodSpec, Modifier, ParameterSpec, Statement,
    TypeName, TypeSpec,
};

fn class(text: &str) -> ClassName {
    ClassName::best_guess(text).unwrap()
}

fn ty(text: &str) -> TypeName {
    TypeName::parse(text).unwrap()
}

#[test]
fn factory_class() {
    let factory = TypeSpec::class("TestWorker_AssistedFactory")
        .with_modifiers([Modifier::Public, Modifier::Final])
        .with_superinterface(class("com.vikingsen.inject.work.WorkFactory").into())
        .with_field(FieldSpec::new(
            ty("javax.inject.Provider<java.lang.Long>"),
            "foo",
            [Modifier::Private, Modifier::Final],
        ))
        .with_method(
            MethodSpec::constructor()
                .with_annotation(AnnotationSpec::marker(class("javax.inject.Inject")))
                .with_modifiers([Modifier::Public])
                .with_parameter(ParameterSpec::new(ty("javax.inject.Provider<java.lang.Long>"), "foo"))
                .with_statement(Statement::Assign {
                    target: Expr::ThisField("foo".to_string()),
                    value: Expr::name("foo"),
                }),
        )
        .with_method(
            MethodSpec::method("create")
                .with_annotation(AnnotationSpec::marker(class("java.lang.Override")))
                .with_modifiers([Modifier::Public])
                .returns(ty("androidx.work.ListenableWorker"))
                .with_parameter(ParameterSpec::new(ty("android.content.Context"), "context"))
                .with_parameter(ParameterSpec::new(ty("androidx.work.WorkerParameters"), "workerParameters"))
                .with_statement(Statement::Return(Expr::New {
                    class_name: class("test.TestWorker"),
                    args: vec![
                        Expr::name("context"),
                        Expr::name("workerParameters"),
                        Expr::call0(Expr::name("foo"), "get"),
                    ],
                })),
        );

    insta::assert_snapshot!(JavaFile::new("test", factory), @r"
    package test;

    import android.content.Context;
    import androidx.work.ListenableWorker;
    import androidx.work.WorkerParameters;
    import com.vikingsen.inject.work.WorkFactory;
    import javax.inject.Inject;
    import javax.inject.Provider;

    public final class TestWorker_AssistedFactory implements WorkFactory {
      private final Provider<Long> foo;

      @Inject
      public TestWorker_AssistedFactory(Provider<Long> foo) {
        this.foo = foo;
      }

      @Override
      public ListenableWorker create(Context context, WorkerParameters workerParameters) {
        return new TestWorker(context, workerParameters, foo.get());
      }
    }
    ");
}

#[test]
fn abstract_module_with_multi_member_annotation() {
    let module = TypeSpec::class("WorkerInject_TestModule")
        .with_annotation(
            AnnotationSpec::marker(class("javax.annotation.Generated"))
                .with_member("value", AnnotationValue::String("com.example.Processor".to_string()))
                .with_member("comments", AnnotationValue::String("https://example.com".to_string())),
        )
        .with_annotation(AnnotationSpec::marker(class("dagger.Module")))
        .with_modifiers([Modifier::Abstract, Modifier::Public])
        .with_method(MethodSpec::constructor().with_modifiers([Modifier::Private]))
        .with_method(
            MethodSpec::method("bind_test_TestWorker")
                .with_annotation(AnnotationSpec::marker(class("dagger.Binds")))
                .with_annotation(AnnotationSpec::marker(class("dagger.multibindings.IntoMap")))
                .with_annotation(
                    AnnotationSpec::marker(class("dagger.multibindings.StringKey"))
                        .with_member("value", AnnotationValue::String("test.TestWorker".to_string())),
                )
                .with_modifiers([Modifier::Abstract])
                .returns(ty("com.vikingsen.inject.work.WorkFactory"))
                .with_parameter(ParameterSpec::new(ty("test.TestWorker_AssistedFactory"), "factory")),
        );

    insta::assert_snapshot!(JavaFile::new("test", module), @r#"
    package test;

    import com.vikingsen.inject.work.WorkFactory;
    import dagger.Binds;
    import dagger.Module;
    import dagger.multibindings.IntoMap;
    import dagger.multibindings.StringKey;
    import javax.annotation.Generated;

    @Generated(
        value = "com.example.Processor",
        comments = "https://example.com"
    )
    @Module
    public abstract class WorkerInject_TestModule {
      private WorkerInject_TestModule() {
      }

      @Binds
      @IntoMap
      @StringKey("test.TestWorker")
      abstract WorkFactory bind_test_TestWorker(TestWorker_AssistedFactory factory);
    }
    "#);
}

#[test]
fn parameter_annotations_render_inline() {
    let type_spec = TypeSpec::class("Holder").with_method(
        MethodSpec::constructor().with_parameter(
            ParameterSpec::new(ty("javax.inject.Provider<java.lang.String>"), "name")
                .with_annotation(
                    AnnotationSpec::marker(class("javax.inject.Named")).with_member("value", AnnotationValue::String("x".to_string())),
                )
                .with_annotation(
                    AnnotationSpec::marker(class("test.Tagged"))
                        .with_member("id", AnnotationValue::Literal("3".to_string()))
                        .with_member("kind", AnnotationValue::Class(class("test.Kind"))),
                ),
        ),
    );

    insta::assert_snapshot!(JavaFile::new("test", type_spec), @r#"
    package test;

    import javax.inject.Named;
    import javax.inject.Provider;

    class Holder {
      Holder(@Named("x") @Tagged(id = 3, kind = Kind.class) Provider<String> name) {
      }
    }
    "#);
}

#[test]
fn class_named_like_a_dependency_is_qualified() {
    let type_spec = TypeSpec::class("Context_AssistedFactory").with_method(
        MethodSpec::method("create")
            .returns(ty("test.Context"))
            .with_parameter(ParameterSpec::new(ty("android.content.Context"), "context"))
            .with_statement(Statement::Return(Expr::New {
                class_name: class("test.Context"),
                args: vec![Expr::name("context")],
            })),
    );

    insta::assert_snapshot!(JavaFile::new("test", type_spec), @r"
    package test;

    class Context_AssistedFactory {
      Context create(android.content.Context context) {
        return new Context(context);
      }
    }
    ");
}

#[test]
fn default_package_has_no_package_line() {
    let type_spec = TypeSpec::class("Lonely").with_modifiers([Modifier::Public]);
    let file = JavaFile::new("", type_spec);

    assert_eq!(file.to_string(), "public class Lonely {\n}\n");
    assert_eq!(file.class_name().canonical_name(), "Lonely");
    assert!(file.imports().is_empty());
}
