use serde::{Deserialize, Serialize};
use std::fmt;

/// A C# identifier, e.g. the name of a union, a variant or a type parameter.
///
/// This isn't checked for syntax correctness; the declaration is assumed to have come from
/// somewhere that already parsed it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(pub String);

impl Identifier {
    /// See [to_parameter_name].
    pub fn to_parameter_name(&self) -> Identifier {
        to_parameter_name(self)
    }

    /// Is this the empty string?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identifier {
    fn from(string: &str) -> Self {
        Self(string.to_owned())
    }
}

/// Verbatim C# type syntax, e.g. `double` or `System.Collections.Generic.List<T>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(pub String);

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeName {
    fn from(string: &str) -> Self {
        Self(string.to_owned())
    }
}

/// Derive a method parameter name from a (type) identifier.
///
/// The first character is lower-cased and the result is prefixed with `@`, which makes it a
/// verbatim identifier so that variants like `Default` or `Class` still produce legal C#
/// (`@default`, `@class`).
///
/// ```text
/// Circle      -> @circle
/// HTTPRequest -> @hTTPRequest
/// ```
pub fn to_parameter_name(identifier: &Identifier) -> Identifier {
    let mut chars = identifier.0.chars();
    let mut parameter_name = String::with_capacity(identifier.0.len() + 1);
    parameter_name.push('@');
    if let Some(first) = chars.next() {
        parameter_name.extend(first.to_lowercase());
        parameter_name.push_str(chars.as_str());
    }
    Identifier(parameter_name)
}

/// Macro for constructing [Identifier]s.
///
/// This isn't checked for syntax correctness, so use with care.
#[macro_export]
macro_rules! identifier {
    ($string_like:expr) => {
        $crate::Identifier(String::from($string_like))
    };
}
