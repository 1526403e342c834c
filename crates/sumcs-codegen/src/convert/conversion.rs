use super::{union_type, variant_type};
use crate::ast::{ident, Expression, Member, Parameter, Section, Type};
use sumcs_ast::UnionDeclaration;

/// ```csharp
/// public static implicit operator Shape(double value) => new Circle(value);
/// public static implicit operator Shape(Point value) => new Dot(value);
/// ```
///
/// Empty unless every variant has exactly one field. Two variants with the same field type
/// produce ambiguous operators; the C# compiler reports that, we don't.
pub fn conversion_section(union: &UnionDeclaration) -> Section {
    if !union.supports_implicit_conversions() {
        return Section::default();
    }
    Section(
        union
            .variants
            .iter()
            .filter_map(|variant| {
                let field = variant.parameters.first()?;
                Some(Member::ImplicitConversion {
                    target: union_type(union),
                    parameter: Parameter {
                        r#type: Type::Verbatim(field.r#type.0.clone()),
                        ident: ident!("value"),
                    },
                    body: Expression::New {
                        r#type: variant_type(variant),
                        arguments: vec![Expression::Variable(ident!("value"))],
                    },
                })
            })
            .collect(),
    )
}
