//! Citation mapping

use nutriscan_domain::{RawCitation, Source};

/// Map citations to sources
///
/// Only entries with a web reference are kept. Order is preserved and
/// repeated URIs are not collapsed.
pub fn map_citations(citations: &[RawCitation]) -> Vec<Source> {
    citations
        .iter()
        .filter_map(|c| c.web.as_ref())
        .map(Source::from)
        .collect()
}
