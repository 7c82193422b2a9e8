// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::ClassName;

/// A value assigned to an annotation member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    /// A string literal; quotes and escapes are added when rendering.
    String(String),
    /// A class literal, rendered as `Name.class`.
    Class(ClassName),
    /// Source text emitted verbatim, e.g. `42` or `RetentionPolicy.SOURCE`.
    Literal(String),
}

/// An annotation application such as `@StringKey("test.TestWorker")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationSpec {
    annotation_type: ClassName,
    members: Vec<(String, AnnotationValue)>,
}

impl AnnotationSpec {
    /// An annotation without members, e.g. `@Override`.
    #[must_use]
    pub fn marker(annotation_type: ClassName) -> Self {
        Self {
            annotation_type,
            members: Vec::new(),
        }
    }

    /// Adds a member; members render in insertion order.
    #[must_use]
    pub fn with_member(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.members.push((name.into(), value));
        self
    }

    /// The annotation type.
    #[must_use]
    pub const fn annotation_type(&self) -> &ClassName {
        &self.annotation_type
    }

    /// Members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[(String, AnnotationValue)] {
        &self.members
    }

    pub(crate) fn visit_classes<'a>(&'a self, visit: &mut impl FnMut(&'a ClassName)) {
        visit(&self.annotation_type);
        for (_, value) in &self.members {
            if let AnnotationValue::Class(class_name) = value {
                visit(class_name);
            }
        }
    }
}

/// Quotes `value` as a Java string literal.
pub(crate) fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literal_escapes() {
        assert_eq!(string_literal("plain"), "\"plain\"");
        assert_eq!(string_literal("a\"b\\c\n"), "\"a\\\"b\\\\c\\n\"");
        assert_eq!(string_literal("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn visit_includes_class_members() {
        let annotation = AnnotationSpec::marker(ClassName::new("dagger", "Module"))
            .with_member("includes", AnnotationValue::Class(ClassName::new("test", "Other")))
            .with_member("name", AnnotationValue::String("x".to_string()));

        let mut seen = Vec::new();
        annotation.visit_classes(&mut |class_name| seen.push(class_name.simple_name().to_string()));

        assert_eq!(seen, ["Module", "Other"]);
    }
}
