use miette::{miette, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `SUMCS_LOG=sumcs_codegen=trace`.
pub static LOG_ENV_VAR: &str = "SUMCS_LOG";

pub fn is_plain() -> bool {
    if let Ok(plain) = std::env::var("SUMCS_PLAIN") {
        plain != "false"
    } else {
        !atty::is(atty::Stream::Stderr)
    }
}

/// Logs go to stderr so they never end up in generated sources.
pub fn init_tracing() -> Result<()> {
    if std::env::var_os(LOG_ENV_VAR).is_none() {
        return Ok(());
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(LOG_ENV_VAR))
        .with_writer(std::io::stderr)
        .with_ansi(!is_plain())
        .try_init()
        .map_err(|err| miette!("error initializing logging: {}", err))
}
