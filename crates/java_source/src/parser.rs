// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use chumsky::prelude::*;

use crate::{ClassName, ParseError, Primitive, TypeName, Wildcard};

type Extra<'a> = extra::Err<Rich<'a, char>>;

/// Parses a complete Java type expression.
pub(crate) fn parse_type(text: &str) -> Result<TypeName, ParseError> {
    type_parser()
        .padded()
        .then_ignore(end())
        .parse(text)
        .into_result()
        .map_err(|errors| ParseError::new(text, errors.iter().map(ToString::to_string)))
}

/// `Type := Name TypeArguments? ("[" "]")*`, with wildcards allowed only as type arguments.
fn type_parser<'a>() -> impl Parser<'a, &'a str, TypeName, Extra<'a>> + Clone {
    recursive(|ty| {
        let wildcard = just('?')
            .padded()
            .ignore_then(choice((
                just("extends")
                    .padded()
                    .ignore_then(ty.clone())
                    .map(|bound| Wildcard::Extends(Box::new(bound))),
                just("super")
                    .padded()
                    .ignore_then(ty.clone())
                    .map(|bound| Wildcard::Super(Box::new(bound))),
                empty().to(Wildcard::Unbounded),
            )))
            .map(TypeName::Wildcard)
            .labelled("wildcard");

        let arguments = wildcard
            .or(ty)
            .separated_by(just(',').padded())
            .at_least(1)
            .collect::<Vec<TypeName>>()
            .delimited_by(just('<').padded(), just('>').padded())
            .labelled("type arguments");

        let name = identifier()
            .separated_by(just('.').padded())
            .at_least(1)
            .collect::<Vec<&str>>()
            .labelled("type name");

        let array_dimensions = just('[')
            .padded()
            .then(just(']').padded())
            .repeated()
            .collect::<Vec<_>>();

        name.then(arguments.or_not())
            .map(|(segments, arguments)| named_type(&segments, arguments))
            .then(array_dimensions)
            .map(|(component, dimensions)| {
                dimensions
                    .iter()
                    .fold(component, |component, _| TypeName::Array(Box::new(component)))
            })
    })
}

/// Java identifiers may also contain `$`.
fn identifier<'a>() -> impl Parser<'a, &'a str, &'a str, Extra<'a>> + Clone {
    any()
        .filter(|c: &char| c.is_ascii_alphabetic() || matches!(c, '_' | '$'))
        .then(
            any()
                .filter(|c: &char| c.is_ascii_alphanumeric() || matches!(c, '_' | '$'))
                .repeated(),
        )
        .to_slice()
}

/// Classifies dotted segments: a lone primitive keyword, otherwise leading lowercase
/// segments form the package and the rest the nesting chain.
fn named_type(segments: &[&str], arguments: Option<Vec<TypeName>>) -> TypeName {
    if let ([keyword], None) = (segments, &arguments)
        && let Some(primitive) = Primitive::from_keyword(keyword)
    {
        return TypeName::Primitive(primitive);
    }

    let package_len = segments
        .iter()
        .position(|segment| segment.starts_with(|c: char| c.is_ascii_uppercase()))
        .unwrap_or(segments.len().saturating_sub(1));

    let package = segments[..package_len].join(".");
    let class_name = ClassName::from_parts(package, segments[package_len..].iter().copied())
        .unwrap_or_else(|| ClassName::new("", segments.join(".")));

    match arguments {
        Some(arguments) => TypeName::Parameterized { raw: class_name, arguments },
        None => TypeName::Class(class_name),
    }
}
