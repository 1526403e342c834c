//! `Match`, `Match<Variant>` and `Unwrap<Variant>`.
//!
//! Abstract declarations go on the base type, overrides go on every sealed subtype. Which
//! handler an override calls is decided here, per subtype, so the generated code never needs a
//! runtime type test.

use super::variant_type;
use crate::ast::{ident, Expression, Ident, Member, Method, Modifier, Parameter, Section, Type};
use sumcs_ast::{UnionDeclaration, VariantDeclaration};

static OUTPUT_TYPE_PARAMETER: &str = "TMatchOutput";
static STATE_TYPE_PARAMETER: &str = "TState";
static STATE_PARAMETER: &str = "state";
static ELSE_PARAMETER: &str = "@else";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    /// Handlers are `System.Func`s returning `TMatchOutput`.
    Value,
    /// Handlers are `System.Action`s, the method returns `void`.
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Stateless,
    /// A caller supplied `TState state` is passed through to whichever handler gets called.
    Threaded,
}

/// One of the four flavours every match method comes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchShape {
    output: Output,
    state: State,
}

impl MatchShape {
    /// In the order their methods are generated.
    pub const ALL: [Self; 4] = [
        Self {
            output: Output::Value,
            state: State::Stateless,
        },
        Self {
            output: Output::Unit,
            state: State::Stateless,
        },
        Self {
            output: Output::Value,
            state: State::Threaded,
        },
        Self {
            output: Output::Unit,
            state: State::Threaded,
        },
    ];

    fn return_type(self) -> Type {
        match self.output {
            Output::Value => Type::named(ident!(OUTPUT_TYPE_PARAMETER)),
            Output::Unit => Type::Void,
        }
    }

    /// `<TState, TMatchOutput>`
    fn type_parameters(self) -> Vec<Ident> {
        let mut type_parameters = Vec::with_capacity(2);
        if self.state == State::Threaded {
            type_parameters.push(ident!(STATE_TYPE_PARAMETER));
        }
        if self.output == Output::Value {
            type_parameters.push(ident!(OUTPUT_TYPE_PARAMETER));
        }
        type_parameters
    }

    /// `TState state`
    fn leading_parameters(self) -> Vec<Parameter> {
        match self.state {
            State::Stateless => Vec::new(),
            State::Threaded => vec![Parameter {
                r#type: Type::named(ident!(STATE_TYPE_PARAMETER)),
                ident: ident!(STATE_PARAMETER),
            }],
        }
    }

    /// The type of a handler that receives `subject` (if any).
    ///
    /// ```csharp
    /// System.Func<TState, Circle, TMatchOutput>
    /// System.Action<Circle>
    /// System.Action
    /// ```
    fn handler_type(self, subject: Option<Type>) -> Type {
        let mut arguments = Vec::with_capacity(3);
        if self.state == State::Threaded {
            arguments.push(Type::named(ident!(STATE_TYPE_PARAMETER)));
        }
        arguments.extend(subject);
        match self.output {
            Output::Value => {
                arguments.push(Type::named(ident!(OUTPUT_TYPE_PARAMETER)));
                Type::Named {
                    ident: ident!("System.Func"),
                    arguments,
                }
            }
            Output::Unit => Type::Named {
                ident: ident!("System.Action"),
                arguments,
            },
        }
    }

    /// ```csharp
    /// @circle(state, this)
    /// @else()
    /// ```
    fn invoke(self, handler: Ident, subject: Option<Expression>) -> Expression {
        let mut arguments = Vec::with_capacity(2);
        if self.state == State::Threaded {
            arguments.push(Expression::Variable(ident!(STATE_PARAMETER)));
        }
        arguments.extend(subject);
        Expression::Call {
            function: handler,
            arguments,
        }
    }

    /// Abstract when there's no `body`, an override otherwise.
    fn method(self, ident: Ident, handlers: Vec<Parameter>, body: Option<Expression>) -> Method {
        let mut parameters = self.leading_parameters();
        parameters.extend(handlers);
        Method {
            modifiers: modifiers(&body),
            return_type: self.return_type(),
            ident,
            type_parameters: self.type_parameters(),
            parameters,
            body,
        }
    }
}

fn modifiers(body: &Option<Expression>) -> Vec<Modifier> {
    match body {
        None => vec![Modifier::Public, Modifier::Abstract],
        Some(_) => vec![Modifier::Public, Modifier::Override],
    }
}

/// Members of the base type, in section order: total matches, then specific matches (one
/// section per shape), then unwraps.
pub fn abstract_sections(union: &UnionDeclaration) -> Vec<Section> {
    let mut sections = vec![abstract_match_methods(union)];
    sections.extend(
        MatchShape::ALL
            .iter()
            .map(|shape| abstract_specific_match_methods(union, *shape)),
    );
    sections.push(abstract_unwrap_methods(union));
    sections
}

/// Members of the subtype for `subtype`, mirroring [abstract_sections].
pub fn override_sections(union: &UnionDeclaration, subtype: &VariantDeclaration) -> Vec<Section> {
    let mut sections = vec![match_overrides(union, subtype)];
    sections.extend(
        MatchShape::ALL
            .iter()
            .map(|shape| specific_match_overrides(union, subtype, *shape)),
    );
    sections.push(unwrap_overrides(union, subtype));
    sections
}

// Total matches

/// One handler per variant, in declaration order.
fn match_handlers(union: &UnionDeclaration, shape: MatchShape) -> Vec<Parameter> {
    union
        .variants
        .iter()
        .map(|variant| Parameter {
            r#type: shape.handler_type(Some(variant_type(variant))),
            ident: Ident::from(variant.parameter_name()),
        })
        .collect()
}

/// ```csharp
/// public abstract TMatchOutput Match<TMatchOutput>(
///     System.Func<Circle, TMatchOutput> @circle,
///     System.Func<Square, TMatchOutput> @square
/// );
/// ```
fn abstract_match_methods(union: &UnionDeclaration) -> Section {
    Section(
        MatchShape::ALL
            .iter()
            .map(|shape| {
                Member::Method(shape.method(ident!("Match"), match_handlers(union, *shape), None))
            })
            .collect(),
    )
}

/// ```csharp
/// public override TMatchOutput Match<TMatchOutput>(
///     System.Func<Circle, TMatchOutput> @circle,
///     System.Func<Square, TMatchOutput> @square
/// ) => @circle(this);
/// ```
fn match_overrides(union: &UnionDeclaration, subtype: &VariantDeclaration) -> Section {
    Section(
        MatchShape::ALL
            .iter()
            .map(|shape| {
                let body = shape.invoke(
                    Ident::from(subtype.parameter_name()),
                    Some(Expression::This),
                );
                Member::Method(shape.method(
                    ident!("Match"),
                    match_handlers(union, *shape),
                    Some(body),
                ))
            })
            .collect(),
    )
}

// Specific matches

/// `MatchCircle`
fn specific_match_ident(variant: &VariantDeclaration) -> Ident {
    Ident(format!("Match{}", variant.identifier))
}

/// The variant's own handler followed by the fallback.
fn specific_match_handlers(variant: &VariantDeclaration, shape: MatchShape) -> Vec<Parameter> {
    vec![
        Parameter {
            r#type: shape.handler_type(Some(variant_type(variant))),
            ident: Ident::from(variant.parameter_name()),
        },
        Parameter {
            r#type: shape.handler_type(None),
            ident: ident!(ELSE_PARAMETER),
        },
    ]
}

/// ```csharp
/// public abstract TMatchOutput MatchCircle<TMatchOutput>(
///     System.Func<Circle, TMatchOutput> @circle,
///     System.Func<TMatchOutput> @else
/// );
/// ```
fn abstract_specific_match_methods(union: &UnionDeclaration, shape: MatchShape) -> Section {
    Section(
        union
            .variants
            .iter()
            .map(|variant| {
                Member::Method(shape.method(
                    specific_match_ident(variant),
                    specific_match_handlers(variant, shape),
                    None,
                ))
            })
            .collect(),
    )
}

/// ```csharp
/// public override TMatchOutput MatchCircle<TMatchOutput>(
///     System.Func<Circle, TMatchOutput> @circle,
///     System.Func<TMatchOutput> @else
/// ) => @circle(this); // or @else();
/// ```
fn specific_match_overrides(
    union: &UnionDeclaration,
    subtype: &VariantDeclaration,
    shape: MatchShape,
) -> Section {
    Section(
        union
            .variants
            .iter()
            .map(|variant| {
                let body = if variant.identifier == subtype.identifier {
                    shape.invoke(Ident::from(variant.parameter_name()), Some(Expression::This))
                } else {
                    shape.invoke(ident!(ELSE_PARAMETER), None)
                };
                Member::Method(shape.method(
                    specific_match_ident(variant),
                    specific_match_handlers(variant, shape),
                    Some(body),
                ))
            })
            .collect(),
    )
}

// Unwraps

fn unwrap_method(variant: &VariantDeclaration, body: Option<Expression>) -> Method {
    Method {
        modifiers: modifiers(&body),
        return_type: variant_type(variant),
        ident: Ident(format!("Unwrap{}", variant.identifier)),
        type_parameters: Vec::new(),
        parameters: Vec::new(),
        body,
    }
}

/// ```csharp
/// public abstract Circle UnwrapCircle();
/// ```
fn abstract_unwrap_methods(union: &UnionDeclaration) -> Section {
    Section(
        union
            .variants
            .iter()
            .map(|variant| Member::Method(unwrap_method(variant, None)))
            .collect(),
    )
}

/// ```csharp
/// public override Circle UnwrapCircle() => this;
/// public override Square UnwrapSquare() => throw new System.InvalidOperationException("Called `Shape.UnwrapSquare()` on `Circle` value.");
/// ```
fn unwrap_overrides(union: &UnionDeclaration, subtype: &VariantDeclaration) -> Section {
    Section(
        union
            .variants
            .iter()
            .map(|variant| {
                let body = if variant.identifier == subtype.identifier {
                    Expression::This
                } else {
                    invalid_unwrap(union, variant, subtype)
                };
                Member::Method(unwrap_method(variant, Some(body)))
            })
            .collect(),
    )
}

fn invalid_unwrap(
    union: &UnionDeclaration,
    requested: &VariantDeclaration,
    actual: &VariantDeclaration,
) -> Expression {
    let message = format!(
        "Called `{}.Unwrap{}()` on `{}` value.",
        union.name, requested.identifier, actual.identifier
    );
    Expression::Throw(Box::new(Expression::New {
        r#type: Type::named(ident!("System.InvalidOperationException")),
        arguments: vec![Expression::String(message)],
    }))
}
