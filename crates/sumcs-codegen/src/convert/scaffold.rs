//! Everything around the generated members: the file preamble, the enclosing types, the base
//! type and the sealed subtypes.

use super::union_type;
use crate::ast::{Ident, Member, Modifier, Section, SourceFile, TypeDeclaration, TypeKind};
use sumcs_ast::{UnionDeclaration, VariantDeclaration};

/// CS1591: missing XML comment for publicly visible type or member.
static SUPPRESSED_WARNINGS: &[&str] = &["1591"];

pub fn source_file(union: &UnionDeclaration, union_declaration: TypeDeclaration) -> SourceFile {
    // Innermost first, so the first parent ends up outermost.
    let declaration = union
        .parent_types
        .iter()
        .rev()
        .fold(union_declaration, |nested, parent| TypeDeclaration {
            modifiers: vec![Modifier::Partial],
            kind: TypeKind::from(parent.kind),
            ident: Ident::from(&parent.identifier),
            type_parameters: Vec::new(),
            base: None,
            sections: vec![Section(vec![Member::Type(nested)])],
        });

    SourceFile {
        suppressed_warnings: SUPPRESSED_WARNINGS
            .iter()
            .map(|code| code.to_string())
            .collect(),
        imports: union.imports.clone(),
        namespace: union.namespace.clone(),
        declaration,
    }
}

/// ```csharp
/// abstract partial record Shape
/// {
///     sections
/// }
/// ```
pub fn union_declaration(union: &UnionDeclaration, sections: Vec<Section>) -> TypeDeclaration {
    TypeDeclaration {
        modifiers: vec![Modifier::Abstract, Modifier::Partial],
        kind: TypeKind::Record,
        ident: Ident::from(&union.name),
        type_parameters: union.type_parameters.iter().map(Ident::from).collect(),
        base: None,
        sections,
    }
}

/// The private constructor is what closes the hierarchy: only types nested inside the base
/// type can call it.
///
/// ```csharp
/// private Shape() {}
/// ```
pub fn constructor_section(union: &UnionDeclaration) -> Section {
    Section(vec![Member::Constructor {
        modifiers: vec![Modifier::Private],
        ident: Ident::from(&union.name),
    }])
}

/// ```csharp
/// public sealed partial record Some<T> : Option<T>
/// {
///     sections
/// }
/// ```
pub fn variant_declaration(
    union: &UnionDeclaration,
    variant: &VariantDeclaration,
    sections: Vec<Section>,
) -> TypeDeclaration {
    TypeDeclaration {
        modifiers: vec![Modifier::Public, Modifier::Sealed, Modifier::Partial],
        kind: TypeKind::Record,
        ident: Ident::from(&variant.identifier),
        type_parameters: variant.type_parameters.iter().map(Ident::from).collect(),
        base: Some(union_type(union)),
        sections,
    }
}
