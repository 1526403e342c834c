use crate::{Identifier, TypeName};
use serde::{Deserialize, Serialize};

/// One closed sum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct UnionDeclaration {
    /// Identifier of the base type.
    pub name: Identifier,

    /// Optional namespace, e.g. `Acme.Geometry`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Import statements, emitted verbatim and in order (e.g. `using System;`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    /// Enclosing types, outermost first.
    ///
    /// These get re-opened (as `partial`) so that the generated code lands at the same nesting
    /// depth as the original declaration.
    #[serde(default, rename = "parent", skip_serializing_if = "Vec::is_empty")]
    pub parent_types: Vec<ParentType>,

    /// Generic parameters of the base type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<Identifier>,

    /// The cases of the union.
    ///
    /// Order matters for generation (handler parameters, conversion operators and subtypes all
    /// follow it) but no variant is privileged when matching.
    #[serde(default, rename = "variant")]
    pub variants: Vec<VariantDeclaration>,
}

impl UnionDeclaration {
    /// Returns a union with the given `name` and nothing else.
    pub fn new(name: impl Into<Identifier>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            imports: Vec::new(),
            parent_types: Vec::new(),
            type_parameters: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Append an import statement.
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Append an enclosing type (this one nests inside those already added).
    pub fn with_parent(mut self, kind: ParentKind, identifier: impl Into<Identifier>) -> Self {
        self.parent_types.push(ParentType {
            kind,
            identifier: identifier.into(),
        });
        self
    }

    /// Append a generic parameter.
    pub fn with_type_parameter(mut self, type_parameter: impl Into<Identifier>) -> Self {
        self.type_parameters.push(type_parameter.into());
        self
    }

    /// Append a variant.
    pub fn with_variant(mut self, variant: VariantDeclaration) -> Self {
        self.variants.push(variant);
        self
    }

    /// Can every variant be implicitly converted to from its sole field?
    ///
    /// Conversions are all-or-nothing: if a single variant doesn't have exactly one parameter
    /// then none of them get a conversion operator.
    pub fn supports_implicit_conversions(&self) -> bool {
        self.variants.iter().all(VariantDeclaration::is_convertible)
    }
}

/// One case of a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct VariantDeclaration {
    /// Name of the variant, which doubles as the name of its sealed subtype and the suffix of its
    /// `Match<Identifier>` and `Unwrap<Identifier>` methods.
    pub identifier: Identifier,

    /// Generic parameters specific to this variant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<Identifier>,

    /// Constructor fields, in positional order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

impl VariantDeclaration {
    /// Returns a variant with no type parameters and no fields.
    pub fn new(identifier: impl Into<Identifier>) -> Self {
        Self {
            identifier: identifier.into(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Append a generic parameter.
    pub fn with_type_parameter(mut self, type_parameter: impl Into<Identifier>) -> Self {
        self.type_parameters.push(type_parameter.into());
        self
    }

    /// Append a field.
    pub fn with_parameter(
        mut self,
        identifier: impl Into<Identifier>,
        r#type: impl Into<TypeName>,
    ) -> Self {
        self.parameters.push(Parameter {
            identifier: identifier.into(),
            r#type: r#type.into(),
        });
        self
    }

    /// A variant is convertible iff it has exactly one field.
    pub fn is_convertible(&self) -> bool {
        self.parameters.len() == 1
    }

    /// The name used for this variant's handler in generated `Match` methods.
    pub fn parameter_name(&self) -> Identifier {
        self.identifier.to_parameter_name()
    }
}

/// A single variant field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    /// Field name.
    pub identifier: Identifier,
    /// Field type.
    pub r#type: TypeName,
}

/// A type that encloses the union declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParentType {
    /// Whether the enclosing type was declared as a `record` or a `class`.
    pub kind: ParentKind,
    /// Name of the enclosing type.
    pub identifier: Identifier,
}

/// The flavour of an enclosing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentKind {
    /// `record`
    Record,
    /// `class`
    Class,
}
