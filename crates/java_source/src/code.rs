// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::ClassName;

/// The expressions a generated method body can contain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A local variable, parameter or field referenced by name.
    Name(String),
    /// `this.name`
    ThisField(String),
    /// `receiver.method(args)`
    Call {
        /// Expression the method is called on.
        receiver: Box<Expr>,
        /// Method name.
        method: String,
        /// Arguments in order.
        args: Vec<Expr>,
    },
    /// `Owner.method(args)`
    StaticCall {
        /// Class declaring the method.
        owner: ClassName,
        /// Method name.
        method: String,
        /// Arguments in order.
        args: Vec<Expr>,
    },
    /// `new Type(args)`
    New {
        /// Class to instantiate.
        class_name: ClassName,
        /// Constructor arguments in order.
        args: Vec<Expr>,
    },
}

impl Expr {
    /// A bare name such as a local variable or field.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// `receiver.method()` without arguments.
    #[must_use]
    pub fn call0(receiver: Self, method: impl Into<String>) -> Self {
        Self::Call {
            receiver: Box::new(receiver),
            method: method.into(),
            args: Vec::new(),
        }
    }

    pub(crate) fn visit_classes<'a>(&'a self, visit: &mut impl FnMut(&'a ClassName)) {
        match self {
            Self::Name(_) | Self::ThisField(_) => {}
            Self::Call { receiver, args, .. } => {
                receiver.visit_classes(visit);
                for arg in args {
                    arg.visit_classes(visit);
                }
            }
            Self::StaticCall { owner, args, .. } => {
                visit(owner);
                for arg in args {
                    arg.visit_classes(visit);
                }
            }
            Self::New { class_name, args } => {
                visit(class_name);
                for arg in args {
                    arg.visit_classes(visit);
                }
            }
        }
    }

    pub(crate) fn render(&self, name_of: &impl Fn(&ClassName) -> String) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::ThisField(name) => format!("this.{name}"),
            Self::Call { receiver, method, args } => {
                format!("{}.{method}({})", receiver.render(name_of), render_args(args, name_of))
            }
            Self::StaticCall { owner, method, args } => {
                format!("{}.{method}({})", name_of(owner), render_args(args, name_of))
            }
            Self::New { class_name, args } => format!("new {}({})", name_of(class_name), render_args(args, name_of)),
        }
    }
}

fn render_args(args: &[Expr], name_of: &impl Fn(&ClassName) -> String) -> String {
    args.iter().map(|arg| arg.render(name_of)).collect::<Vec<_>>().join(", ")
}

/// A statement in a generated method body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    /// `target = value;`
    Assign {
        /// Left-hand side.
        target: Expr,
        /// Right-hand side.
        value: Expr,
    },
    /// `return value;`
    Return(Expr),
}

impl Statement {
    pub(crate) fn visit_classes<'a>(&'a self, visit: &mut impl FnMut(&'a ClassName)) {
        match self {
            Self::Assign { target, value } => {
                target.visit_classes(visit);
                value.visit_classes(visit);
            }
            Self::Return(value) => value.visit_classes(visit),
        }
    }

    pub(crate) fn render(&self, name_of: &impl Fn(&ClassName) -> String) -> String {
        match self {
            Self::Assign { target, value } => format!("{} = {};", target.render(name_of), value.render(name_of)),
            Self::Return(value) => format!("return {};", value.render(name_of)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_expressions() {
        let expr = Expr::New {
            class_name: ClassName::new("test", "Outer").nested("Worker"),
            args: vec![
                Expr::call0(Expr::name("foo"), "get"),
                Expr::StaticCall {
                    owner: ClassName::new("dagger.internal", "DoubleCheck"),
                    method: "lazy".to_string(),
                    args: vec![Expr::name("bar")],
                },
            ],
        };

        let rendered = expr.render(&ClassName::canonical_name);

        assert_eq!(rendered, "new test.Outer.Worker(foo.get(), dagger.internal.DoubleCheck.lazy(bar))");
    }

    #[test]
    fn renders_statements() {
        let assign = Statement::Assign {
            target: Expr::ThisField("foo".to_string()),
            value: Expr::name("foo"),
        };

        assert_eq!(assign.render(&ClassName::canonical_name), "this.foo = foo;");
        assert_eq!(
            Statement::Return(Expr::name("x")).render(&ClassName::canonical_name),
            "return x;"
        );
    }
}
