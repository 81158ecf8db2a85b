//! Configuration loading for the CLI.

use crate::error::Result;
use nutriscan_extractor::ParserConfig;
use std::path::Path;
use tracing::debug;

/// Load the parser configuration, falling back to defaults when no file is given.
pub fn load_parser_config(path: Option<&Path>) -> Result<ParserConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading parser configuration");
            Ok(ParserConfig::from_file(path)?)
        }
        None => Ok(ParserConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_parser_config(None).unwrap(), ParserConfig::default());
    }

    #[test]
    fn test_loads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_quantity = \"unknown\"").unwrap();

        let config = load_parser_config(Some(file.path())).unwrap();
        assert_eq!(config.default_quantity, "unknown");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_row_fields = 0").unwrap();

        assert!(load_parser_config(Some(file.path())).is_err());
    }
}
