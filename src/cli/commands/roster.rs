//! Roster command implementation.

use crate::cli::RosterArgs;
use crate::config::Config;
use crate::error::Result;

use super::render_archive;

/// Run the roster command.
pub fn run(config: &Config, args: &RosterArgs) -> Result<()> {
    let options = config.render_options()?;
    let (_, transcript) = render_archive(&args.archive, &args.window, &options)?;

    let json = serde_json::to_string_pretty(&transcript.authors)?;
    println!("{json}");
    Ok(())
}
