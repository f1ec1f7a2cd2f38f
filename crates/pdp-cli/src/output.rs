use serde::Serialize;

use pdp_core::ParsedUrl;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedUrlRecord<'a> {
    pub url: &'a str,
    pub scheme: Option<&'a str>,
    pub path: Option<&'a str>,
    pub host: &'a str,
    pub registerable_domain: &'a str,
    pub public_suffix: &'a str,
    pub subdomain: Option<&'a str>,
}

impl<'a> ParsedUrlRecord<'a> {
    pub fn new(url: &'a str, parsed: &'a ParsedUrl) -> Self {
        Self {
            url,
            scheme: parsed.scheme.as_deref(),
            path: parsed.path.as_deref(),
            host: &parsed.host,
            registerable_domain: &parsed.registerable_domain,
            public_suffix: &parsed.public_suffix,
            subdomain: parsed.subdomain.as_deref(),
        }
    }
}

pub fn format_json(url: &str, parsed: &ParsedUrl) -> Result<String, String> {
    serde_json::to_string(&ParsedUrlRecord::new(url, parsed))
        .map_err(|e| format!("Failed to serialize JSON: {}", e))
}

pub fn format_text(url: &str, parsed: &ParsedUrl) -> String {
    format!(
        "{}\n  Scheme:      {}\n  Host:        {}\n  Path:        {}\n  Domain:      {}\n  Suffix:      {}\n  Subdomain:   {}",
        url,
        parsed.scheme.as_deref().unwrap_or("-"),
        parsed.host,
        parsed.path.as_deref().unwrap_or("-"),
        parsed.registerable_domain,
        parsed.public_suffix,
        parsed.subdomain.as_deref().unwrap_or("-"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedUrl {
        ParsedUrl {
            scheme: Some("https".to_string()),
            path: None,
            host: "www.example.co.uk".to_string(),
            registerable_domain: "example.co.uk".to_string(),
            public_suffix: "co.uk".to_string(),
            subdomain: Some("www".to_string()),
        }
    }

    #[test]
    fn test_format_json() {
        let parsed = sample();
        let json = format_json("https://www.example.co.uk", &parsed).unwrap();
        assert_eq!(
            json,
            r#"{"url":"https://www.example.co.uk","scheme":"https","path":null,"host":"www.example.co.uk","registerableDomain":"example.co.uk","publicSuffix":"co.uk","subdomain":"www"}"#
        );
    }

    #[test]
    fn test_format_text() {
        let parsed = sample();
        let text = format_text("https://www.example.co.uk", &parsed);
        assert!(text.contains("Domain:      example.co.uk"));
        assert!(text.contains("Path:        -"));
    }
}
