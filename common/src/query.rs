//! Routes and query strings
//!
//! The results route carries the hero search terms as
//! `application/x-www-form-urlencoded` pairs, the same serialization
//! browsers use for `URLSearchParams`.

pub const HOME_ROUTE: &str = "/";
pub const SEARCH_ROUTE: &str = "/search";

pub const SPECIALTY_PARAM: &str = "specialty";
pub const LOCATION_PARAM: &str = "location";

/// Search terms as they appear in the results URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub specialty: Option<String>,
    pub location: Option<String>,
}

impl SearchQuery {
    /// Build from raw values; empty values are dropped
    pub fn new(specialty: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            specialty: non_empty(specialty.into()),
            location: non_empty(location.into()),
        }
    }

    /// Parse a query string (with or without the leading `?`)
    ///
    /// Unknown keys are ignored. A repeated key keeps its first value,
    /// even when that value is empty.
    pub fn parse(query: &str) -> Self {
        let mut specialty = None;
        let mut location = None;
        for (key, value) in decode_pairs(query) {
            let slot = match key.as_str() {
                SPECIALTY_PARAM => &mut specialty,
                LOCATION_PARAM => &mut location,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        Self::new(specialty.unwrap_or_default(), location.unwrap_or_default())
    }

    /// Parse the query part of a results route, e.g. `/search?specialty=ENT`
    ///
    /// Returns `None` when the path is not the results route.
    pub fn from_route(route: &str) -> Option<Self> {
        let (path, query) = route.split_once('?').unwrap_or((route, ""));
        let path = path.trim_end_matches('/');
        if path != SEARCH_ROUTE && !path.ends_with(SEARCH_ROUTE) {
            return None;
        }
        Some(Self::parse(query))
    }

    /// Encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(specialty) = &self.specialty {
            pairs.push((SPECIALTY_PARAM, specialty.as_str()));
        }
        if let Some(location) = &self.location {
            pairs.push((LOCATION_PARAM, location.as_str()));
        }
        encode_pairs(&pairs)
    }

    /// Results route, e.g. `/search?specialty=Cardiology&location=Pune`
    pub fn to_route(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            SEARCH_ROUTE.to_string()
        } else {
            format!("{}?{}", SEARCH_ROUTE, query)
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Serialize key/value pairs joined by `&`
pub fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-encode one component
///
/// `A-Z a-z 0-9 * - . _` pass through, space becomes `+`.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Split a query string into decoded pairs
pub fn decode_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (decode_component(k), decode_component(v)),
            None => (decode_component(part), String::new()),
        })
        .collect()
}

/// Reverse of [`encode_component`]
///
/// Malformed escapes are kept literally; invalid UTF-8 is replaced.
pub fn decode_component(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_with_both_terms() {
        let query = SearchQuery::new("Cardiology", "Pune");
        assert_eq!(query.to_route(), "/search?specialty=Cardiology&location=Pune");
    }

    #[test]
    fn test_route_omits_empty_fields() {
        assert_eq!(SearchQuery::new("Dermatology", "").to_route(), "/search?specialty=Dermatology");
        assert_eq!(SearchQuery::new("", "").to_route(), "/search");
    }

    #[test]
    fn test_encode_component_matches_url_search_params() {
        assert_eq!(encode_component("General Physician"), "General+Physician");
        assert_eq!(encode_component("ENT & Allergy"), "ENT+%26+Allergy");
        assert_eq!(encode_component("a/b?c=d"), "a%2Fb%3Fc%3Dd");
        assert_eq!(encode_component("Bengaluru"), "Bengaluru");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_parse_decodes_values() {
        let query = SearchQuery::parse("?specialty=General+Physician&location=New%20Delhi");
        assert_eq!(query.specialty.as_deref(), Some("General Physician"));
        assert_eq!(query.location.as_deref(), Some("New Delhi"));
    }

    #[test]
    fn test_parse_ignores_unknown_and_empty() {
        let query = SearchQuery::parse("sort=rating&specialty=&location=Pune");
        assert_eq!(query.specialty, None);
        assert_eq!(query.location.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_parse_keeps_first_repeated_value() {
        let query = SearchQuery::parse("specialty=Cardiology&specialty=Neurology");
        assert_eq!(query.specialty.as_deref(), Some("Cardiology"));
    }

    #[test]
    fn test_parse_first_repeated_value_even_if_empty() {
        let query = SearchQuery::parse("specialty=&specialty=Neurology&location=Pune&location=");
        assert_eq!(query.specialty, None);
        assert_eq!(query.location.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_from_route() {
        let query = SearchQuery::from_route("/search?specialty=ENT&location=Navi+Mumbai").expect("results route");
        assert_eq!(query.specialty.as_deref(), Some("ENT"));
        assert_eq!(query.location.as_deref(), Some("Navi Mumbai"));

        let full = SearchQuery::from_route("http://localhost:8080/search/?location=Pune").expect("full URL");
        assert_eq!(full.location.as_deref(), Some("Pune"));

        assert_eq!(SearchQuery::from_route("/search"), Some(SearchQuery::default()));
        assert_eq!(SearchQuery::from_route("/?specialty=ENT"), None);
    }

    #[test]
    fn test_parse_empty_query() {
        assert_eq!(SearchQuery::parse(""), SearchQuery::default());
        assert_eq!(SearchQuery::parse("?"), SearchQuery::default());
    }

    #[test]
    fn test_decode_component_malformed_escape() {
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
        assert_eq!(decode_component("%C3%A9"), "é");
    }

    #[test]
    fn test_query_string_survives_parse() {
        let query = SearchQuery::new("ENT & Allergy", "Navi Mumbai");
        let parsed = SearchQuery::parse(&query.to_query_string());
        assert_eq!(parsed, query);
    }
}
