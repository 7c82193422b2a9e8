// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "This is a test module")]

//! Parsing and rendering of Java type expressions.

use java_source::{ClassName, Primitive, TypeName, Wildcard};
use rstest::rstest;

#[rstest]
#[case("int", "int")]
#[case("java.lang.Long", "java.lang.Long")]
#[case("javax.inject.Provider<java.lang.Long>", "javax.inject.Provider<java.lang.Long>")]
#[case("  java.util.Map < java.lang.String ,int[] >  ", "java.util.Map<java.lang.String, int[]>")]
#[case("java.util.List<? extends test.Foo>", "java.util.List<? extends test.Foo>")]
#[case("java.util.List<? super test.Foo>", "java.util.List<? super test.Foo>")]
#[case("java.lang.Class<?>", "java.lang.Class<?>")]
#[case("byte[][]", "byte[][]")]
#[case("test.Outer.Inner", "test.Outer.Inner")]
#[case("Unqualified", "Unqualified")]
fn parses_and_renders(#[case] input: &str, #[case] expected: &str) {
    let parsed = TypeName::parse(input).unwrap();

    assert_eq!(parsed.to_string(), expected);
}

#[rstest]
#[case("")]
#[case("java.util.List<")]
#[case("java.util.List<>")]
#[case("?")]
#[case("a..b")]
#[case("int]")]
fn rejects_malformed_types(#[case] input: &str) {
    let error = TypeName::parse(input).unwrap_err();

    assert_eq!(error.input(), input);
    assert!(error.to_string().starts_with("invalid Java type"));
}

#[test]
fn splits_package_from_nesting_chain() {
    let parsed = TypeName::parse("com.example.Outer.Inner").unwrap();

    let expected = ClassName::from_parts("com.example", ["Outer", "Inner"]).unwrap();
    assert_eq!(parsed, TypeName::Class(expected));
}

#[test]
fn nested_arguments_keep_structure() {
    let parsed = TypeName::parse("dagger.Lazy<java.util.List<? extends java.lang.Number>>").unwrap();

    let lazy = ClassName::new("dagger", "Lazy");
    let argument = parsed.single_argument_of(&lazy).unwrap();
    assert_eq!(
        argument,
        &TypeName::parameterized(
            ClassName::new("java.util", "List"),
            [TypeName::Wildcard(Wildcard::Extends(Box::new(ClassName::new("java.lang", "Number").into())))],
        )
    );
}

#[test]
fn primitives_are_recognized() {
    assert_eq!(TypeName::parse("boolean").unwrap(), TypeName::Primitive(Primitive::Boolean));
    assert!(TypeName::parse("double").unwrap().is_primitive());
    assert!(!TypeName::parse("java.lang.Double").unwrap().is_primitive());
}
