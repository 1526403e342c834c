use clap::{Arg, ArgAction, ArgMatches, Command};
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use rayon::prelude::*;
use std::io::Write;
use sumcs_ast::UnionDeclaration;
use sumcs_config::{read_declarations, Declarations, DECLARATIONS_FILE_NAME};

pub fn command(name: impl Into<clap::builder::Str>) -> Command {
    Command::new(name)
        .about("Generate C# for the unions in a declarations file")
        .arg(
            Arg::new("file")
                .default_value(DECLARATIONS_FILE_NAME)
                .help("Path to the declarations file"),
        )
        .arg(
            Arg::new("unions")
                .long("union")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Only generate the named union (can be repeated)"),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("file")
        .ok_or_else(|| miette!("missing declarations file"))?;
    let declarations = read_declarations(path)?;

    let selected = select(&declarations, matches.get_many::<String>("unions"))?;
    tracing::debug!(unions = selected.len(), "generating");

    let output = generate(&selected);
    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .into_diagnostic()
        .wrap_err("error writing generated code")
}

/// Every union when `names` is absent, otherwise the named ones in the order given.
fn select<'a>(
    declarations: &'a Declarations,
    names: Option<clap::parser::ValuesRef<'_, String>>,
) -> Result<Vec<&'a UnionDeclaration>> {
    match names {
        None => Ok(declarations.unions.iter().collect()),
        Some(names) => names
            .map(|name| {
                declarations.find(name).ok_or_else(|| {
                    miette!(
                        "no union named `{}` (declared: {})",
                        name,
                        declared_names(declarations)
                    )
                })
            })
            .collect(),
    }
}

fn declared_names(declarations: &Declarations) -> String {
    declarations
        .unions
        .iter()
        .map(|union| union.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sources are separated by a blank line, in input order.
fn generate(unions: &[&UnionDeclaration]) -> String {
    unions
        .par_iter()
        .map(|union| sumcs_codegen::synthesize(union))
        .collect::<Vec<_>>()
        .join("\n")
}
