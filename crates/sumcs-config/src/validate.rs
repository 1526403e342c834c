use miette::Diagnostic;
use std::collections::{HashMap, HashSet};
use sumcs_ast::{Identifier, UnionDeclaration};
use thiserror::Error;

/// Handler parameter names the generated `Match` methods already use.
///
/// `@state` is the same C# identifier as `state`.
static RESERVED_PARAMETER_NAMES: &[&str] = &["@state", "@else"];

/// Method type parameters of the generated `Match` methods, which would shadow a type parameter
/// of the same name on the union or a variant.
static RESERVED_TYPE_PARAMETERS: &[&str] = &["TState", "TMatchOutput"];

/// Something the generator can't (or won't) cope with.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The union doesn't have a name.
    #[error("union name is empty")]
    #[diagnostic(code(sumcs::empty_union_name))]
    EmptyUnionName,

    /// A variant doesn't have a name.
    #[error("union `{union}` has a variant with an empty identifier")]
    #[diagnostic(code(sumcs::empty_variant_identifier))]
    EmptyVariantIdentifier {
        /// The union in question.
        union: String,
    },

    /// Two variants share a name.
    #[error("union `{union}` declares variant `{variant}` more than once")]
    #[diagnostic(
        code(sumcs::duplicate_variant),
        help("variant identifiers must be unique within a union")
    )]
    DuplicateVariant {
        /// The union in question.
        union: String,
        /// The repeated identifier.
        variant: String,
    },

    /// Two variants would get the same handler parameter name.
    #[error(
        "variants `{first}` and `{second}` of union `{union}` would both be handled by a parameter named `{parameter}`"
    )]
    #[diagnostic(
        code(sumcs::parameter_name_clash),
        help("handler parameters are named after variants with the first letter lower-cased")
    )]
    ParameterNameClash {
        /// The union in question.
        union: String,
        /// The variant declared first.
        first: String,
        /// The variant declared second.
        second: String,
        /// The shared parameter name.
        parameter: String,
    },

    /// A variant's handler parameter name is already taken by the generated code.
    #[error(
        "variant `{variant}` of union `{union}` would be handled by a parameter named `{parameter}`, which is reserved"
    )]
    #[diagnostic(
        code(sumcs::reserved_parameter_name),
        help("`state` and `else` are parameters of the generated `Match` methods, rename the variant")
    )]
    ReservedParameterName {
        /// The union in question.
        union: String,
        /// The offending variant.
        variant: String,
        /// The reserved parameter name.
        parameter: String,
    },

    /// A union or variant type parameter is shadowed by a generated method type parameter.
    #[error("type parameter `{type_parameter}` of `{owner}` in union `{union}` is reserved")]
    #[diagnostic(
        code(sumcs::reserved_type_parameter),
        help("`TState` and `TMatchOutput` are type parameters of the generated `Match` methods")
    )]
    ReservedTypeParameter {
        /// The union in question.
        union: String,
        /// The union itself or one of its variants.
        owner: String,
        /// The reserved type parameter.
        type_parameter: String,
    },

    /// A variant would become a nested type with the same name as the type enclosing it.
    #[error("union `{union}` has a variant with the same name")]
    #[diagnostic(code(sumcs::variant_named_after_union))]
    VariantNamedAfterUnion {
        /// The union in question.
        union: String,
    },

    /// A variant would become a nested type with the same name as a generated method.
    #[error("variant `{variant}` of union `{union}` has the same name as a generated method")]
    #[diagnostic(
        code(sumcs::member_name_clash),
        help("unions get `Match`, `Match<Variant>` and `Unwrap<Variant>` methods, rename the variant")
    )]
    MemberNameClash {
        /// The union in question.
        union: String,
        /// The offending variant.
        variant: String,
    },
}

/// Every problem found in one or more unions.
#[derive(Error, Debug, Diagnostic)]
#[error("found {} problem(s) with union declarations", .errors.len())]
pub struct InvalidDeclarations {
    /// The problems, in declaration order.
    #[related]
    pub errors: Vec<ValidationError>,
}

/// Check the preconditions the generator assumes.
pub fn validate(union: &UnionDeclaration) -> Result<(), InvalidDeclarations> {
    let errors = validation_errors(union);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(InvalidDeclarations { errors })
    }
}

pub(crate) fn validation_errors(union: &UnionDeclaration) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if union.name.is_empty() {
        errors.push(ValidationError::EmptyUnionName);
    }

    let union_name = union.name.to_string();
    errors.extend(reserved_type_parameters(&union_name, &union.name, &union.type_parameters));

    let members = generated_member_names(union);
    let mut identifiers: HashSet<&Identifier> = HashSet::new();
    let mut parameter_names: HashMap<Identifier, &Identifier> = HashMap::new();

    for variant in union.variants.iter() {
        if variant.identifier.is_empty() {
            errors.push(ValidationError::EmptyVariantIdentifier {
                union: union_name.clone(),
            });
            continue;
        }
        if !identifiers.insert(&variant.identifier) {
            errors.push(ValidationError::DuplicateVariant {
                union: union_name.clone(),
                variant: variant.identifier.to_string(),
            });
            continue;
        }
        errors.extend(reserved_type_parameters(
            &union_name,
            &variant.identifier,
            &variant.type_parameters,
        ));
        if variant.identifier == union.name {
            errors.push(ValidationError::VariantNamedAfterUnion {
                union: union_name.clone(),
            });
        } else if members.contains(variant.identifier.as_str()) {
            errors.push(ValidationError::MemberNameClash {
                union: union_name.clone(),
                variant: variant.identifier.to_string(),
            });
        }

        let parameter = variant.parameter_name();
        if RESERVED_PARAMETER_NAMES.contains(&parameter.as_str()) {
            errors.push(ValidationError::ReservedParameterName {
                union: union_name.clone(),
                variant: variant.identifier.to_string(),
                parameter: parameter.to_string(),
            });
            continue;
        }
        if let Some(first) = parameter_names.get(&parameter) {
            errors.push(ValidationError::ParameterNameClash {
                union: union_name.clone(),
                first: first.to_string(),
                second: variant.identifier.to_string(),
                parameter: parameter.to_string(),
            });
            continue;
        }
        parameter_names.insert(parameter, &variant.identifier);
    }

    if !errors.is_empty() {
        tracing::debug!(union = %union_name, errors = errors.len(), "invalid union");
    }
    errors
}

fn reserved_type_parameters(
    union_name: &str,
    owner: &Identifier,
    type_parameters: &[Identifier],
) -> Vec<ValidationError> {
    type_parameters
        .iter()
        .filter(|type_parameter| RESERVED_TYPE_PARAMETERS.contains(&type_parameter.as_str()))
        .map(|type_parameter| ValidationError::ReservedTypeParameter {
            union: union_name.to_string(),
            owner: owner.to_string(),
            type_parameter: type_parameter.to_string(),
        })
        .collect()
}

/// `Match`, and `Match<Variant>` and `Unwrap<Variant>` for every variant.
fn generated_member_names(union: &UnionDeclaration) -> HashSet<String> {
    let mut members = HashSet::new();
    members.insert(String::from("Match"));
    for variant in union.variants.iter() {
        members.insert(format!("Match{}", variant.identifier));
        members.insert(format!("Unwrap{}", variant.identifier));
    }
    members
}
