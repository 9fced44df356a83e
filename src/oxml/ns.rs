//! Namespace prefixes and qualified-name helpers
//!
//! Tags and attribute names are stored in Clark notation (`{uri}local`).
//! Callers use the familiar prefixed form (`w:p`, `r:id`) and convert with [`qn`].

/// WordprocessingML main namespace
pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Office relationships namespace
pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// XML namespace
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

const PREFIXES: &[(&str, &str)] = &[("w", W), ("r", R), ("xml", XML)];

/// Namespace URI for a known prefix
pub fn nsuri(prefix: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri)
}

/// Prefix for a known namespace URI
pub fn prefix_for(uri: &str) -> Option<&'static str> {
    PREFIXES
        .iter()
        .find(|(_, u)| *u == uri)
        .map(|(p, _)| *p)
}

/// Convert a prefixed name (`w:id`) to Clark notation (`{uri}id`).
///
/// Names without a prefix, names already in Clark notation and names with an
/// unknown prefix are returned unchanged.
pub fn qn(name: &str) -> String {
    if name.starts_with('{') {
        return name.to_string();
    }
    match name.split_once(':') {
        Some((prefix, local)) => match nsuri(prefix) {
            Some(uri) => format!("{{{}}}{}", uri, local),
            None => name.to_string(),
        },
        None => name.to_string(),
    }
}

/// Convert a Clark name back to prefixed form for display.
pub fn prefixed(clark: &str) -> String {
    if let Some(rest) = clark.strip_prefix('{') {
        if let Some((uri, local)) = rest.split_once('}') {
            if let Some(prefix) = prefix_for(uri) {
                return format!("{}:{}", prefix, local);
            }
        }
    }
    clark.to_string()
}

/// Local part of a Clark or prefixed name
pub fn local_name(name: &str) -> &str {
    if let Some((_, local)) = name.rsplit_once('}') {
        return local;
    }
    name.rsplit_once(':').map(|(_, l)| l).unwrap_or(name)
}
