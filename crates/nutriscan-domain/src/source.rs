//! Citation records and the sources derived from them

use serde::{Deserialize, Serialize};

/// Web reference carried by an upstream citation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebReference {
    /// Page title
    #[serde(default)]
    pub title: String,

    /// Page address
    #[serde(default)]
    pub uri: String,
}

/// Citation entry as delivered by the generative backend
///
/// Shape on the wire: `{ "web"?: { "title": ..., "uri": ... } }`. Entries of
/// other kinds deserialize with `web: None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCitation {
    /// Web reference, if this citation points at a web resource
    #[serde(default)]
    pub web: Option<WebReference>,
}

impl RawCitation {
    /// Citation pointing at a web page
    pub fn web(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            web: Some(WebReference {
                title: title.into(),
                uri: uri.into(),
            }),
        }
    }
}

/// A source listed alongside an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Display title
    pub title: String,

    /// Link target
    pub uri: String,
}

impl From<&WebReference> for Source {
    fn from(web: &WebReference) -> Self {
        Self {
            title: web.title.clone(),
            uri: web.uri.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_without_web_deserializes() {
        let json = r#"[
            {"web": {"title": "FSSAI", "uri": "https://fssai.gov.in"}},
            {"retrievedContext": {}}
        ]"#;
        let citations: Vec<RawCitation> = serde_json::from_str(json).unwrap();

        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0], RawCitation::web("FSSAI", "https://fssai.gov.in"));
        assert!(citations[1].web.is_none());
    }

    #[test]
    fn test_source_from_web_reference() {
        let web = WebReference {
            title: "Sugar facts".to_string(),
            uri: "https://example.org/sugar".to_string(),
        };
        let source = Source::from(&web);
        assert_eq!(source.title, "Sugar facts");
        assert_eq!(source.uri, "https://example.org/sugar");
    }
}
