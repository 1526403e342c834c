#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod ast;
mod convert;
mod emitter;
mod render;

/// Generate the C# source for a union declaration.
///
/// The declaration is assumed to be valid (see `sumcs_config::validate`), this function never
/// fails and always returns the same text for the same declaration.
#[tracing::instrument(level = "trace", skip_all, fields(union = %union.name))]
pub fn synthesize(union: &sumcs_ast::UnionDeclaration) -> String {
    tracing::debug!(
        variants = union.variants.len(),
        conversions = union.supports_implicit_conversions(),
        "synthesizing union"
    );
    render::render_source_file(&convert::convert_union(union))
}

#[cfg(test)]
mod tests {
    use crate::synthesize;
    use quickcheck::{quickcheck, Arbitrary, Gen};
    use sumcs_ast::{
        Identifier, Parameter, ParentKind, ParentType, TypeName, UnionDeclaration,
        VariantDeclaration,
    };

    fn shape() -> UnionDeclaration {
        UnionDeclaration::new("Shape")
            .with_variant(VariantDeclaration::new("Circle").with_parameter("Radius", "double"))
            .with_variant(
                VariantDeclaration::new("Rectangle")
                    .with_parameter("Length", "double")
                    .with_parameter("Width", "double"),
            )
            .with_variant(
                VariantDeclaration::new("Triangle")
                    .with_parameter("Base", "double")
                    .with_parameter("Height", "double"),
            )
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn it_lists_handlers_in_declaration_order() {
        let source = synthesize(&shape());
        assert!(source.contains(
            "    public abstract TMatchOutput Match<TMatchOutput>(
        System.Func<Circle, TMatchOutput> @circle,
        System.Func<Rectangle, TMatchOutput> @rectangle,
        System.Func<Triangle, TMatchOutput> @triangle
    );
"
        ));
        assert!(source.contains(
            "    public abstract void Match<TState>(
        TState state,
        System.Action<TState, Circle> @circle,
        System.Action<TState, Rectangle> @rectangle,
        System.Action<TState, Triangle> @triangle
    );
"
        ));
    }

    #[test]
    fn it_overrides_everything_on_each_subtype() {
        let source = synthesize(&shape());
        assert_eq!(count(&source, "public sealed partial record "), 3);
        assert!(source.contains("    public sealed partial record Rectangle : Shape\n    {\n"));
        assert!(source.contains(
            "        public override TMatchOutput Match<TState, TMatchOutput>(
            TState state,
            System.Func<TState, Circle, TMatchOutput> @circle,
            System.Func<TState, Rectangle, TMatchOutput> @rectangle,
            System.Func<TState, Triangle, TMatchOutput> @triangle
        ) => @rectangle(state, this);
"
        ));
        assert!(source.contains(
            "        public override void MatchCircle(
            System.Action<Circle> @circle,
            System.Action @else
        ) => @else();
"
        ));
        assert!(source.contains(
            "        public override Circle UnwrapCircle() => throw new System.InvalidOperationException(\"Called `Shape.UnwrapCircle()` on `Rectangle` value.\");\n"
        ));
        // 3 variants: 4 + 4 * 3 + 3 members on the base type, as many on every subtype.
        assert_eq!(count(&source, "public abstract "), 19);
        assert_eq!(count(&source, "public override "), 3 * 19);
        assert_eq!(count(&source, "implicit operator"), 0);
    }

    #[test]
    fn it_generates_no_conversions_for_option() {
        let option = UnionDeclaration::new("Option")
            .with_type_parameter("T")
            .with_variant(
                VariantDeclaration::new("Some")
                    .with_type_parameter("T")
                    .with_parameter("Value", "T"),
            )
            .with_variant(VariantDeclaration::new("None"));
        let source = synthesize(&option);
        assert_eq!(count(&source, "implicit operator"), 0);
        assert!(source.contains("abstract partial record Option<T>\n{\n    private Option() {}\n"));
        assert!(source.contains("    public sealed partial record Some<T> : Option<T>\n"));
        assert!(source.contains("    public abstract Some<T> UnwrapSome();\n"));
    }

    #[test]
    fn it_generates_conversions_for_single_field_variants() {
        let union = UnionDeclaration::new("Shape")
            .with_variant(VariantDeclaration::new("Circle").with_parameter("Radius", "double"))
            .with_variant(VariantDeclaration::new("Square").with_parameter("Side", "float"));
        let source = synthesize(&union);
        assert!(source.contains(
            "    public static implicit operator Shape(double value) => new Circle(value);
    public static implicit operator Shape(float value) => new Square(value);
"
        ));
    }

    #[test]
    fn it_brackets_everything_with_lint_directives() {
        let union = shape()
            .with_import("using System;")
            .with_namespace("Acme")
            .with_parent(ParentKind::Class, "Outer");
        let source = synthesize(&union);
        assert!(source.starts_with(
            "#pragma warning disable 1591\nusing System;\nnamespace Acme;\npartial class Outer\n{\n    abstract partial record Shape\n    {\n"
        ));
        assert!(source.ends_with("        }\n    }\n}\n#pragma warning restore 1591\n"));
    }

    #[derive(Debug, Clone)]
    struct ArbitraryUnion(UnionDeclaration);

    impl Arbitrary for ArbitraryUnion {
        fn arbitrary(g: &mut Gen) -> Self {
            let mut union = UnionDeclaration::new("Union");
            if bool::arbitrary(g) {
                union.namespace = Some(String::from("Generated.Unions"));
            }
            if bool::arbitrary(g) {
                union.imports.push(String::from("using System;"));
            }
            for i in 0..usize::arbitrary(g) % 3 {
                union.parent_types.push(ParentType {
                    kind: if bool::arbitrary(g) {
                        ParentKind::Record
                    } else {
                        ParentKind::Class
                    },
                    identifier: Identifier(format!("Parent{}", i)),
                });
            }
            for i in 0..usize::arbitrary(g) % 3 {
                union.type_parameters.push(Identifier(format!("T{}", i)));
            }
            for i in 0..usize::arbitrary(g) % 6 {
                let mut variant = VariantDeclaration::new(Identifier(format!("Variant{}", i)));
                for j in 0..usize::arbitrary(g) % 2 {
                    variant
                        .type_parameters
                        .push(Identifier(format!("TVariant{}", j)));
                }
                for j in 0..usize::arbitrary(g) % 3 {
                    let r#type = g.choose(&["int", "string", "T0", "List<int>"]).unwrap();
                    variant.parameters.push(Parameter {
                        identifier: Identifier(format!("Field{}", j)),
                        r#type: TypeName::from(*r#type),
                    });
                }
                union.variants.push(variant);
            }
            Self(union)
        }
    }

    quickcheck! {
        fn prop_deterministic(union: ArbitraryUnion) -> bool {
            synthesize(&union.0) == synthesize(&union.0.clone())
        }

        fn prop_balanced(union: ArbitraryUnion) -> bool {
            let source = synthesize(&union.0);
            count(&source, "{") == count(&source, "}") && count(&source, "(") == count(&source, ")")
        }

        fn prop_every_member_on_every_subtype(union: ArbitraryUnion) -> bool {
            let source = synthesize(&union.0);
            let n = union.0.variants.len();
            let members = 4 + 5 * n;
            count(&source, "public abstract ") == members
                && count(&source, "public override ") == n * members
                && count(&source, "public sealed partial record ") == n
        }

        fn prop_conversions_all_or_none(union: ArbitraryUnion) -> bool {
            let source = synthesize(&union.0);
            let want = if union.0.supports_implicit_conversions() {
                union.0.variants.len()
            } else {
                0
            };
            count(&source, "implicit operator") == want
        }

        fn prop_one_unwrap_succeeds_per_subtype(union: ArbitraryUnion) -> bool {
            let source = synthesize(&union.0);
            let n = union.0.variants.len();
            count(&source, "() => this;") == n
                && count(&source, "throw new System.InvalidOperationException") == n * n.saturating_sub(1)
        }
    }
}
