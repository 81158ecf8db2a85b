//! Config command implementation.

use crate::error::Result;
use nutriscan_extractor::ParserConfig;

/// Execute the config command.
pub fn execute_config(config: &ParserConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
