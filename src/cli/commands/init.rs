use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the state file location
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rtimeclock…");

    if let Some(custom) = &cli.state {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    println!("🎉 rtimeclock initialization completed!");
    Ok(())
}
