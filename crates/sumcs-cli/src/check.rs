use clap::{Arg, ArgMatches, Command};
use miette::{miette, Result};
use sumcs_config::{read_declarations, DECLARATIONS_FILE_NAME};

pub fn command(name: impl Into<clap::builder::Str>) -> Command {
    Command::new(name)
        .about("Validate a declarations file without generating anything")
        .arg(
            Arg::new("file")
                .default_value(DECLARATIONS_FILE_NAME)
                .help("Path to the declarations file"),
        )
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("file")
        .ok_or_else(|| miette!("missing declarations file"))?;
    let declarations = read_declarations(path)?;
    let count = declarations.unions.len();
    eprintln!(
        "{} is valid ({} union{})",
        path,
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(())
}
