/// A generated `.cs` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Compiler warnings silenced for the whole file.
    ///
    /// ```csharp
    /// #pragma warning disable 1591
    /// ...
    /// #pragma warning restore 1591
    /// ```
    pub suppressed_warnings: Vec<String>,
    /// Verbatim `using` lines.
    pub imports: Vec<String>,
    /// ```csharp
    /// namespace Acme.Geometry;
    /// ```
    pub namespace: Option<String>,
    /// The outermost type declaration.
    pub declaration: TypeDeclaration,
}

/// <https://learn.microsoft.com/en-us/dotnet/csharp/language-reference/language-specification/lexical-structure#643-identifiers>
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ident(pub String);

macro_rules! ident {
    ($stringy:expr) => {
        $crate::ast::Ident(String::from($stringy))
    };
}

pub(crate) use ident;

impl From<sumcs_ast::Identifier> for Ident {
    fn from(identifier: sumcs_ast::Identifier) -> Self {
        Self(identifier.0)
    }
}

impl From<&sumcs_ast::Identifier> for Ident {
    fn from(identifier: &sumcs_ast::Identifier) -> Self {
        Self(identifier.0.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
    Private,
    Abstract,
    Override,
    Sealed,
    Partial,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Override => "override",
            Self::Sealed => "sealed",
            Self::Partial => "partial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Record,
    Class,
}

impl From<sumcs_ast::ParentKind> for TypeKind {
    fn from(kind: sumcs_ast::ParentKind) -> Self {
        match kind {
            sumcs_ast::ParentKind::Record => Self::Record,
            sumcs_ast::ParentKind::Class => Self::Class,
        }
    }
}

/// ```csharp
/// public sealed partial record Circle : Shape
/// {
///     members
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub modifiers: Vec<Modifier>,
    pub kind: TypeKind,
    pub ident: Ident,
    pub type_parameters: Vec<Ident>,
    pub base: Option<Type>,
    /// Groups of members. Non-empty sections are separated by a blank line.
    pub sections: Vec<Section>,
}

impl TypeDeclaration {
    /// Iterate over every member, ignoring section boundaries.
    #[cfg(test)]
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.sections.iter().flat_map(|section| section.0.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section(pub Vec<Member>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// ```csharp
    /// private Shape() {}
    /// ```
    Constructor {
        modifiers: Vec<Modifier>,
        ident: Ident,
    },
    /// ```csharp
    /// public abstract TMatchOutput Match<TMatchOutput>(System.Func<Circle, TMatchOutput> @circle);
    /// public override Circle UnwrapCircle() => this;
    /// ```
    Method(Method),
    /// ```csharp
    /// public static implicit operator Shape(double value) => new Circle(value);
    /// ```
    ImplicitConversion {
        target: Type,
        parameter: Parameter,
        body: Expression,
    },
    /// A nested type declaration.
    Type(TypeDeclaration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub modifiers: Vec<Modifier>,
    pub return_type: Type,
    pub ident: Ident,
    pub type_parameters: Vec<Ident>,
    pub parameters: Vec<Parameter>,
    /// `None` for abstract methods, otherwise an expression body (`=> body;`).
    pub body: Option<Expression>,
}

/// ```csharp
/// System.Func<Circle, TMatchOutput> @circle
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub r#type: Type,
    pub ident: Ident,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// `void`
    Void,
    /// ```csharp
    /// TState
    /// System.Action
    /// System.Func<Circle, TMatchOutput>
    /// ```
    Named { ident: Ident, arguments: Vec<Type> },
    /// Type syntax copied from the declaration as-is, e.g. `List<int>`.
    Verbatim(String),
}

impl Type {
    /// A type without generic arguments.
    pub fn named(ident: Ident) -> Self {
        Self::Named {
            ident,
            arguments: Vec::new(),
        }
    }

    /// A generic type, e.g. `Some<T>`, from its name and parameters.
    pub fn generic(ident: &sumcs_ast::Identifier, arguments: &[sumcs_ast::Identifier]) -> Self {
        Self::Named {
            ident: Ident::from(ident),
            arguments: arguments
                .iter()
                .map(|argument| Self::named(Ident::from(argument)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `this`
    This,
    /// ```csharp
    /// state
    /// value
    /// ```
    Variable(Ident),
    /// ```csharp
    /// "Called `Shape.UnwrapCircle()` on `Square` value."
    /// ```
    String(String),
    /// ```csharp
    /// @circle(state, this)
    /// ```
    Call {
        function: Ident,
        arguments: Vec<Expression>,
    },
    /// ```csharp
    /// new Circle(value)
    /// ```
    New { r#type: Type, arguments: Vec<Expression> },
    /// ```csharp
    /// throw new System.InvalidOperationException("...")
    /// ```
    Throw(Box<Expression>),
}
