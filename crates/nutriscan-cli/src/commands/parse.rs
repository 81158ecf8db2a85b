//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use nutriscan_domain::{AnalysisResult, RawCitation};
use nutriscan_extractor::ReportParser;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::info;

/// Query used when neither `--query` nor a file name is available.
const UNKNOWN_PRODUCT: &str = "Unknown product";

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, parser: &ReportParser, formatter: &Formatter) -> Result<()> {
    let analysis = analyze_file(&args, parser)?;
    println!("{}", formatter.format_analysis(&analysis)?);
    Ok(())
}

/// Read the report and citations named by `args` and parse them.
pub fn analyze_file(args: &ParseArgs, parser: &ReportParser) -> Result<AnalysisResult> {
    let text = read_report(&args.report)?;
    let citations = match &args.citations {
        Some(path) => read_citations(path)?,
        None => Vec::new(),
    };
    let query = args
        .query
        .clone()
        .unwrap_or_else(|| default_query(&args.report));

    info!(report = %args.report, citations = citations.len(), "Parsing report");

    Ok(parser.parse(&text, &citations, &query)?)
}

fn read_report(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(source)?)
    }
}

fn read_citations(path: &Path) -> Result<Vec<RawCitation>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        CliError::InvalidInput(format!(
            "citations file {} is not a JSON array of citations: {}",
            path.display(),
            e
        ))
    })
}

/// File stem of the report, e.g. `maggi-noodles.txt` gives "maggi noodles".
fn default_query(source: &str) -> String {
    Path::new(source)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty() && *s != "-")
        .map(|s| s.replace(['-', '_'], " "))
        .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscan_extractor::ExtractorError;
    use std::io::Write;
    use tempfile::TempDir;

    const REPORT: &str = "SUMMARY: Instant noodles.
HEALTH_SCORE: 30
FSSAI_NOTICE: None
LIST_START
Refined Wheat Flour | 60% | concern | Low fibre
Iodised Salt | 2g | neutral
LIST_END
";

    fn write(dir: &TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_analyze_file_uses_file_stem_as_query() {
        let dir = TempDir::new().unwrap();
        let report = write(&dir, "maggi-noodles.txt", REPORT);
        let args = ParseArgs {
            report,
            citations: None,
            query: None,
        };

        let analysis = analyze_file(&args, &ReportParser::default()).unwrap();
        assert_eq!(analysis.product_name, "maggi noodles");
        assert_eq!(analysis.health_score, 30);
        assert_eq!(analysis.ingredients.len(), 2);
    }

    #[test]
    fn test_analyze_file_with_citations() {
        let dir = TempDir::new().unwrap();
        let report = write(&dir, "report.txt", REPORT);
        let citations = write(
            &dir,
            "citations.json",
            r#"[{"web": {"title": "FSSAI", "uri": "https://fssai.gov.in"}}, {}]"#,
        );
        let args = ParseArgs {
            report,
            citations: Some(citations.into()),
            query: Some("Maggi".to_string()),
        };

        let analysis = analyze_file(&args, &ReportParser::default()).unwrap();
        assert_eq!(analysis.product_name, "Maggi");
        assert_eq!(analysis.sources.len(), 1);
    }

    #[test]
    fn test_invalid_citations_file() {
        let dir = TempDir::new().unwrap();
        let report = write(&dir, "report.txt", REPORT);
        let citations = write(&dir, "citations.json", "{ not json");
        let args = ParseArgs {
            report,
            citations: Some(citations.into()),
            query: None,
        };

        let result = analyze_file(&args, &ReportParser::default());
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_unparseable_report() {
        let dir = TempDir::new().unwrap();
        let report = write(&dir, "report.txt", "PRODUCT: Nothing useful");
        let args = ParseArgs {
            report,
            citations: None,
            query: None,
        };

        let result = analyze_file(&args, &ReportParser::default());
        assert!(matches!(
            result,
            Err(CliError::Extractor(ExtractorError::Extraction(_)))
        ));
    }

    #[test]
    fn test_default_query() {
        assert_eq!(default_query("reports/kurkure_masala.txt"), "kurkure masala");
        assert_eq!(default_query("-"), UNKNOWN_PRODUCT);
    }
}
