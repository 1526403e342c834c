mod check;
mod common;
mod generate;

use clap::{ArgMatches, Command};
use miette::{IntoDiagnostic, Result};

static SUBCOMMAND_GENERATE: &str = "generate";
static SUBCOMMAND_CHECK: &str = "check";

fn command() -> Command {
    Command::new("sumcs")
        .bin_name("sumcs")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_help_subcommand(true)
        .subcommand_required(true)
        .about("closed unions for C#")
        .subcommand(generate::command(SUBCOMMAND_GENERATE).display_order(0))
        .subcommand(check::command(SUBCOMMAND_CHECK).display_order(1))
}

fn run(matches: &ArgMatches) -> Result<()> {
    if let Some(matches) = matches.subcommand_matches(SUBCOMMAND_GENERATE) {
        generate::run(matches)
    } else if let Some(matches) = matches.subcommand_matches(SUBCOMMAND_CHECK) {
        check::run(matches)
    } else {
        unreachable!()
    }
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{:?}", err);
        std::process::exit(1);
    }
    std::process::exit(0);
}

fn try_main() -> Result<()> {
    // NOTE: this is here to catch any generator bugs,
    // `unwrap`, `expect` (etc) which aren't _supposed_ to blow up
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("well that wasn't supposed to happen...\n");
        eprintln!("{}\n", panic_info);
        eprintln!("please open an issue with the declarations file that caused this")
    }));

    miette::set_hook(Box::new(|_diagnostic| {
        Box::new(
            miette::GraphicalReportHandler::new().with_theme(if common::is_plain() {
                miette::GraphicalTheme::unicode_nocolor()
            } else {
                miette::GraphicalTheme::unicode()
            }),
        )
    }))
    .into_diagnostic()?;

    common::init_tracing()?;

    let matches = command().get_matches();
    tracing::debug!("{}", std::env::args().collect::<Vec<_>>().join(" "));
    run(&matches)
}
