use crate::ast::{Member, Section, SourceFile, Type};
use sumcs_ast::{UnionDeclaration, VariantDeclaration};

mod conversion;
mod dispatch;
mod scaffold;

pub fn convert_union(union: &UnionDeclaration) -> SourceFile {
    let mut sections = vec![scaffold::constructor_section(union)];
    sections.extend(dispatch::abstract_sections(union));
    sections.push(conversion::conversion_section(union));

    for variant in union.variants.iter() {
        let subtype =
            scaffold::variant_declaration(union, variant, dispatch::override_sections(union, variant));
        sections.push(Section(vec![Member::Type(subtype)]));
    }

    scaffold::source_file(union, scaffold::union_declaration(union, sections))
}

/// `Shape`, `Result<TOk, TError>`
fn union_type(union: &UnionDeclaration) -> Type {
    Type::generic(&union.name, &union.type_parameters)
}

/// `Circle`, `Some<T>`
fn variant_type(variant: &VariantDeclaration) -> Type {
    Type::generic(&variant.identifier, &variant.type_parameters)
}
