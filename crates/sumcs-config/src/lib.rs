#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod validate;

use miette::{Diagnostic, IntoDiagnostic, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;
use sumcs_ast::UnionDeclaration;
use thiserror::Error;

pub use validate::*;

/// `"sumcs.toml"`
///
/// Prefer this constant to hardcoding the filename, just in case we decide to change the name at
/// some point.
pub static DECLARATIONS_FILE_NAME: &str = "sumcs.toml";

/// The contents of a declarations file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Declarations {
    /// Unions to generate, in file order.
    #[serde(default, rename = "union")]
    pub unions: Vec<UnionDeclaration>,
}

impl Declarations {
    /// Parse the TOML `input`. The `name` is only used for error reporting.
    ///
    /// This doesn't [validate](Declarations::validate) anything beyond the file structure.
    pub fn parse(name: &str, input: &str) -> Result<Self, ParseError> {
        toml::from_str(input).map_err(|toml_error| {
            let description = toml_error.to_string();
            match toml_error.line_col() {
                Some((line, col)) => {
                    // `toml` positions are zero based, miette's are one based
                    let offset = miette::SourceOffset::from_location(input, line + 1, col + 1);
                    ParseError::Located {
                        input: miette::NamedSource::new(name, input.to_string()),
                        location: (offset.offset(), 0).into(),
                        description,
                    }
                }
                None => ParseError::Unlocated { description },
            }
        })
    }

    /// Check every union, see [validate].
    pub fn validate(&self) -> Result<(), InvalidDeclarations> {
        let errors = self
            .unions
            .iter()
            .flat_map(validation_errors)
            .collect::<Vec<_>>();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(InvalidDeclarations { errors })
        }
    }

    /// Look up a union by name.
    pub fn find(&self, name: &str) -> Option<&UnionDeclaration> {
        self.unions.iter().find(|union| union.name.as_str() == name)
    }
}

/// A declarations file that isn't valid TOML, or doesn't have the expected structure.
#[derive(Error, Debug, Diagnostic)]
pub enum ParseError {
    /// We know where things went wrong.
    #[error("{description}")]
    #[diagnostic(severity(Error), code(sumcs::parse))]
    Located {
        /// The file contents.
        #[source_code]
        input: miette::NamedSource,

        /// Where `toml` gave up.
        #[label("here")]
        location: miette::SourceSpan,

        /// What `toml` had to say.
        description: String,
    },
    /// We don't know where things went wrong.
    #[error("{description}")]
    #[diagnostic(severity(Error), code(sumcs::parse))]
    Unlocated {
        /// What `toml` had to say.
        description: String,
    },
}

/// Read, parse and validate a declarations file.
pub fn read_declarations<P: AsRef<Path>>(path: P) -> miette::Result<Declarations> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err(format!("error reading declarations at {:?}", path.as_os_str()))?;

    let declarations = Declarations::parse(&path.to_string_lossy(), &contents)
        .map_err(miette::Report::from)
        .wrap_err(format!("error reading declarations at {:?}", path.as_os_str()))?;
    tracing::debug!(
        path = %path.display(),
        unions = declarations.unions.len(),
        "parsed declarations"
    );

    declarations
        .validate()
        .map_err(miette::Report::from)
        .wrap_err(format!("invalid declarations at {:?}", path.as_os_str()))?;

    Ok(declarations)
}
